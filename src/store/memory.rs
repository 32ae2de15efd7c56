//! In-memory reference backend for tests and the simulated import flow.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::category::DEFAULT_CATEGORIES;
use crate::domain::{Budget, CategoryItem, Transaction, TransactionDraft, TransactionKind};
use crate::errors::{CoreError, Result};
use crate::store::RecordStore;

#[derive(Debug, Default, Clone)]
struct OwnerRecords {
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    categories: Vec<CategoryItem>,
    seeded: bool,
}

/// Per-owner collections held in process memory.
///
/// Mirrors the durable store's observable behavior: id assignment, whole-row
/// replacement, affected-row counts, and default category seeding.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    owners: HashMap<Uuid, OwnerRecords>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&mut self, owner: Uuid) -> &mut OwnerRecords {
        self.owners.entry(owner).or_default()
    }

    fn materialize(owner: Uuid, draft: &TransactionDraft) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            owner,
            description: draft.description.clone(),
            amount: draft.amount,
            kind: draft.kind,
            category: draft.category.clone(),
            date: draft.date,
            created_at: Utc::now(),
            recurrence: draft.recurrence(),
        }
    }
}

impl RecordStore for MemoryStore {
    fn list_transactions(&self, owner: Uuid) -> Result<Vec<Transaction>> {
        Ok(self
            .owners
            .get(&owner)
            .map(|records| records.transactions.clone())
            .unwrap_or_default())
    }

    fn create_transaction(&mut self, owner: Uuid, draft: TransactionDraft) -> Result<Transaction> {
        let txn = Self::materialize(owner, &draft);
        self.records(owner).transactions.push(txn.clone());
        tracing::debug!(owner = %owner, id = %txn.id, "transaction created");
        Ok(txn)
    }

    fn update_transaction(
        &mut self,
        owner: Uuid,
        id: Uuid,
        draft: TransactionDraft,
    ) -> Result<Transaction> {
        let records = self.records(owner);
        let slot = records
            .transactions
            .iter_mut()
            .find(|txn| txn.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("transaction {id}")))?;
        let mut replacement = Self::materialize(owner, &draft);
        replacement.id = slot.id;
        replacement.created_at = slot.created_at;
        *slot = replacement.clone();
        Ok(replacement)
    }

    fn delete_transaction(&mut self, owner: Uuid, id: Uuid) -> Result<u64> {
        let records = self.records(owner);
        let before = records.transactions.len();
        records.transactions.retain(|txn| txn.id != id);
        Ok((before - records.transactions.len()) as u64)
    }

    fn list_budgets(&self, owner: Uuid) -> Result<Vec<Budget>> {
        Ok(self
            .owners
            .get(&owner)
            .map(|records| records.budgets.clone())
            .unwrap_or_default())
    }

    fn upsert_budget(&mut self, owner: Uuid, category: &str, limit: f64) -> Result<Budget> {
        let records = self.records(owner);
        match records.budgets.iter_mut().find(|b| b.category == category) {
            Some(existing) => {
                existing.limit = limit;
                Ok(existing.clone())
            }
            None => {
                let budget = Budget::new(owner, category, limit);
                records.budgets.push(budget.clone());
                Ok(budget)
            }
        }
    }

    fn list_categories(&mut self, owner: Uuid) -> Result<Vec<CategoryItem>> {
        let records = self.records(owner);
        if !records.seeded {
            records.categories.extend(
                DEFAULT_CATEGORIES
                    .iter()
                    .map(|(name, kind, color)| CategoryItem::new(owner, *name, *kind, *color)),
            );
            records.seeded = true;
            tracing::debug!(owner = %owner, "seeded default categories");
        }
        Ok(records.categories.clone())
    }

    fn add_category(
        &mut self,
        owner: Uuid,
        name: &str,
        kind: TransactionKind,
        color: &str,
    ) -> Result<CategoryItem> {
        let item = CategoryItem::new(owner, name, kind, color);
        self.records(owner).categories.push(item.clone());
        Ok(item)
    }

    fn delete_category(&mut self, owner: Uuid, id: Uuid) -> Result<u64> {
        let records = self.records(owner);
        let before = records.categories.len();
        records.categories.retain(|cat| cat.id != id);
        Ok((before - records.categories.len()) as u64)
    }
}
