//! Business logic helpers for managing transactions.

use uuid::Uuid;

use crate::domain::{Transaction, TransactionDraft};
use crate::errors::{CoreError, Result};
use crate::store::RecordStore;

/// Provides validated CRUD helpers for transactions.
pub struct TransactionService;

impl TransactionService {
    /// Validates and persists a new transaction.
    pub fn add(
        store: &mut dyn RecordStore,
        owner: Uuid,
        draft: TransactionDraft,
    ) -> Result<Transaction> {
        validate_draft(&draft)?;
        store.create_transaction(owner, draft)
    }

    /// Validates and fully replaces the transaction identified by `id`.
    pub fn update(
        store: &mut dyn RecordStore,
        owner: Uuid,
        id: Uuid,
        draft: TransactionDraft,
    ) -> Result<Transaction> {
        validate_draft(&draft)?;
        store.update_transaction(owner, id, draft)
    }

    /// Removes the transaction identified by `id`.
    ///
    /// A delete the store reports as touching zero rows is ambiguous: the row
    /// may already be gone, or the write may have been blocked. That outcome
    /// surfaces as `PermissionOrMissing` rather than silent success.
    pub fn remove(store: &mut dyn RecordStore, owner: Uuid, id: Uuid) -> Result<()> {
        match store.delete_transaction(owner, id)? {
            0 => Err(CoreError::PermissionOrMissing(format!("transaction {id}"))),
            _ => Ok(()),
        }
    }
}

/// Boundary validation, performed before any store call.
fn validate_draft(draft: &TransactionDraft) -> Result<()> {
    if !draft.amount.is_finite() || draft.amount <= 0.0 {
        return Err(CoreError::Validation(
            "amount must be strictly positive".into(),
        ));
    }
    if draft.description.trim().is_empty() {
        return Err(CoreError::Validation("description must not be empty".into()));
    }
    if draft.is_recurring && draft.frequency.is_none() {
        return Err(CoreError::Validation(
            "recurring entries require a frequency".into(),
        ));
    }
    if !draft.is_recurring && draft.frequency.is_some() {
        return Err(CoreError::Validation(
            "only recurring entries may carry a frequency".into(),
        ));
    }
    Ok(())
}
