use uuid::Uuid;

use crate::domain::Budget;
use crate::errors::{CoreError, Result};
use crate::store::RecordStore;

/// Validated upsert access to per-category monthly limits.
pub struct BudgetService;

impl BudgetService {
    /// Creates or replaces the budget for `category`. A zero limit is valid;
    /// a negative one is not.
    pub fn set(
        store: &mut dyn RecordStore,
        owner: Uuid,
        category: &str,
        limit: f64,
    ) -> Result<Budget> {
        if category.trim().is_empty() {
            return Err(CoreError::Validation("category must not be empty".into()));
        }
        if !limit.is_finite() || limit < 0.0 {
            return Err(CoreError::Validation("limit must not be negative".into()));
        }
        store.upsert_budget(owner, category, limit)
    }

    pub fn list(store: &dyn RecordStore, owner: Uuid) -> Result<Vec<Budget>> {
        store.list_budgets(owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn set_rejects_negative_limit() {
        let mut store = MemoryStore::new();
        let err = BudgetService::set(&mut store, Uuid::new_v4(), "Food", -5.0)
            .expect_err("negative limit");
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn set_accepts_zero_limit() {
        let mut store = MemoryStore::new();
        let owner = Uuid::new_v4();
        let budget = BudgetService::set(&mut store, owner, "Food", 0.0).unwrap();
        assert_eq!(budget.limit, 0.0);
    }

    #[test]
    fn set_twice_keeps_one_row() {
        let mut store = MemoryStore::new();
        let owner = Uuid::new_v4();
        BudgetService::set(&mut store, owner, "Food", 100.0).unwrap();
        BudgetService::set(&mut store, owner, "Food", 150.0).unwrap();
        let budgets = BudgetService::list(&store, owner).unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].limit, 150.0);
    }
}
