//! Boundary to the durable record store collaborator.

pub mod memory;

use uuid::Uuid;

use crate::domain::{Budget, CategoryItem, Transaction, TransactionDraft, TransactionKind};
use crate::errors::Result;

/// Abstraction over the per-owner record store.
///
/// The core treats the store as an external collaborator: it assigns
/// identifiers and creation instants, replaces rows whole on update, and
/// reports how many rows a delete touched so the caller can distinguish
/// "already gone or blocked" from success. Retry and transport policy live
/// behind this trait, not in front of it.
pub trait RecordStore {
    fn list_transactions(&self, owner: Uuid) -> Result<Vec<Transaction>>;

    /// Persists a draft, assigning the identifier and creation instant.
    fn create_transaction(&mut self, owner: Uuid, draft: TransactionDraft) -> Result<Transaction>;

    /// Full-field replace. Fails with `NotFound` when no row matches.
    fn update_transaction(
        &mut self,
        owner: Uuid,
        id: Uuid,
        draft: TransactionDraft,
    ) -> Result<Transaction>;

    /// Returns the number of rows removed. Zero is not an error at this
    /// boundary; the service layer surfaces it distinctly.
    fn delete_transaction(&mut self, owner: Uuid, id: Uuid) -> Result<u64>;

    fn list_budgets(&self, owner: Uuid) -> Result<Vec<Budget>>;

    /// Creates or replaces the budget keyed by (owner, category).
    fn upsert_budget(&mut self, owner: Uuid, category: &str, limit: f64) -> Result<Budget>;

    /// Lists the owner's categories, seeding the fixed default set on first
    /// use.
    fn list_categories(&mut self, owner: Uuid) -> Result<Vec<CategoryItem>>;

    fn add_category(
        &mut self,
        owner: Uuid,
        name: &str,
        kind: TransactionKind,
        color: &str,
    ) -> Result<CategoryItem>;

    /// Returns the number of rows removed, mirroring
    /// [`RecordStore::delete_transaction`].
    fn delete_category(&mut self, owner: Uuid, id: Uuid) -> Result<u64>;
}

pub use memory::MemoryStore;
