//! The owner-scoped aggregate passed by reference into every pure function.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::config::DashboardConfig;
use crate::domain::budget::Budget;
use crate::domain::category::CategoryItem;
use crate::domain::transaction::{Transaction, TransactionDraft, TransactionKind};
use crate::errors::Result;
use crate::reports::dashboard::{build_dashboard, DashboardView};
use crate::services::{BudgetService, CategoryService, TransactionService};
use crate::store::RecordStore;
use crate::utils::optimistic::commit_or_restore;

/// One owner's in-memory snapshot of transactions, budgets, and categories.
///
/// The collections are owned exclusively by the session holding the book; the
/// core never reads another owner's data. Mutations go through the
/// optimistic-update methods below: the local collection changes first, the
/// durable write follows, and a write failure restores the pre-change
/// snapshot before the typed error is surfaced.
#[derive(Debug, Clone)]
pub struct Book {
    pub owner: Uuid,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub categories: Vec<CategoryItem>,
}

impl Book {
    pub fn new(owner: Uuid) -> Self {
        Self {
            owner,
            transactions: Vec::new(),
            budgets: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Loads a fresh snapshot of everything the store holds for `owner`.
    pub fn load(store: &mut dyn RecordStore, owner: Uuid) -> Result<Self> {
        Ok(Self {
            owner,
            transactions: store.list_transactions(owner)?,
            budgets: store.list_budgets(owner)?,
            categories: store.list_categories(owner)?,
        })
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// Every read model at once, for the presentation layer.
    pub fn dashboard(&self, today: NaiveDate, config: &DashboardConfig) -> DashboardView {
        build_dashboard(self, today, config)
    }

    /// Validates and creates a transaction, applying it locally before the
    /// durable write and rolling the local copy back if the write fails.
    pub fn create_transaction(
        &mut self,
        store: &mut dyn RecordStore,
        draft: TransactionDraft,
    ) -> Result<Transaction> {
        let owner = self.owner;
        let pending = Transaction::pending(owner, &draft);
        let created = commit_or_restore(
            &mut self.transactions,
            |txns| txns.push(pending),
            || TransactionService::add(store, owner, draft),
        )?;
        if let Some(slot) = self.transactions.iter_mut().find(|txn| txn.id.is_nil()) {
            *slot = created.clone();
        }
        Ok(created)
    }

    /// Full-field replace of an existing transaction; no partial patches.
    pub fn update_transaction(
        &mut self,
        store: &mut dyn RecordStore,
        id: Uuid,
        draft: TransactionDraft,
    ) -> Result<Transaction> {
        let owner = self.owner;
        let replacement = Transaction::pending(owner, &draft);
        let updated = commit_or_restore(
            &mut self.transactions,
            |txns| {
                if let Some(slot) = txns.iter_mut().find(|txn| txn.id == id) {
                    let (kept_id, kept_created_at) = (slot.id, slot.created_at);
                    *slot = replacement;
                    slot.id = kept_id;
                    slot.created_at = kept_created_at;
                }
            },
            || TransactionService::update(store, owner, id, draft),
        )?;
        if let Some(slot) = self.transactions.iter_mut().find(|txn| txn.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    pub fn delete_transaction(&mut self, store: &mut dyn RecordStore, id: Uuid) -> Result<()> {
        let owner = self.owner;
        commit_or_restore(
            &mut self.transactions,
            |txns| txns.retain(|txn| txn.id != id),
            || TransactionService::remove(store, owner, id),
        )
    }

    /// Upserts the monthly limit for `category`; at most one budget row
    /// survives per category.
    pub fn set_budget(
        &mut self,
        store: &mut dyn RecordStore,
        category: &str,
        limit: f64,
    ) -> Result<Budget> {
        let owner = self.owner;
        let saved = commit_or_restore(
            &mut self.budgets,
            |budgets| match budgets.iter_mut().find(|b| b.category == category) {
                Some(existing) => existing.limit = limit,
                None => budgets.push(Budget::new(owner, category, limit)),
            },
            || BudgetService::set(store, owner, category, limit),
        )?;
        if let Some(slot) = self.budgets.iter_mut().find(|b| b.category == category) {
            *slot = saved.clone();
        }
        Ok(saved)
    }

    pub fn add_category(
        &mut self,
        store: &mut dyn RecordStore,
        name: &str,
        kind: TransactionKind,
        color: &str,
    ) -> Result<CategoryItem> {
        let owner = self.owner;
        let mut pending = CategoryItem::new(owner, name, kind, color);
        pending.id = Uuid::nil();
        let created = commit_or_restore(
            &mut self.categories,
            |categories| categories.push(pending),
            || CategoryService::add(store, owner, name, kind, color),
        )?;
        if let Some(slot) = self.categories.iter_mut().find(|cat| cat.id.is_nil()) {
            *slot = created.clone();
        }
        Ok(created)
    }

    /// Removes a category without touching transactions that reference its
    /// name.
    pub fn delete_category(&mut self, store: &mut dyn RecordStore, id: Uuid) -> Result<()> {
        let owner = self.owner;
        commit_or_restore(
            &mut self.categories,
            |categories| categories.retain(|cat| cat.id != id),
            || CategoryService::remove(store, owner, id),
        )
    }
}
