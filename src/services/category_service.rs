use uuid::Uuid;

use crate::domain::{CategoryItem, TransactionKind};
use crate::errors::{CoreError, Result};
use crate::store::RecordStore;

/// Validated access to the per-owner category table.
pub struct CategoryService;

impl CategoryService {
    /// Lists the owner's categories, seeding defaults on first use.
    pub fn list(store: &mut dyn RecordStore, owner: Uuid) -> Result<Vec<CategoryItem>> {
        store.list_categories(owner)
    }

    pub fn add(
        store: &mut dyn RecordStore,
        owner: Uuid,
        name: &str,
        kind: TransactionKind,
        color: &str,
    ) -> Result<CategoryItem> {
        if name.trim().is_empty() {
            return Err(CoreError::Validation("category name must not be empty".into()));
        }
        store.add_category(owner, name, kind, color)
    }

    /// Removes a category. Transactions referencing its name keep the label;
    /// nothing is rewritten.
    pub fn remove(store: &mut dyn RecordStore, owner: Uuid, id: Uuid) -> Result<()> {
        match store.delete_category(owner, id)? {
            0 => Err(CoreError::NotFound(format!("category {id}"))),
            _ => Ok(()),
        }
    }
}
