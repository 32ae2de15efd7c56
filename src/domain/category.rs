//! Domain types representing spending and income categories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::transaction::TransactionKind;

/// A category offered when classifying transactions of a given kind.
///
/// Categories are display metadata only; `Transaction::category` stores the
/// name as free text and is not referentially enforced against this table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryItem {
    pub id: Uuid,
    pub owner: Uuid,
    pub name: String,
    pub color: String,
    pub kind: TransactionKind,
}

impl CategoryItem {
    pub fn new(
        owner: Uuid,
        name: impl Into<String>,
        kind: TransactionKind,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            name: name.into(),
            color: color.into(),
            kind,
        }
    }
}

/// The fixed set seeded for each owner on first category access.
pub const DEFAULT_CATEGORIES: &[(&str, TransactionKind, &str)] = &[
    ("Salary", TransactionKind::Income, "#4caf50"),
    ("Freelance", TransactionKind::Income, "#8bc34a"),
    ("Investments", TransactionKind::Income, "#009688"),
    ("Housing", TransactionKind::Expense, "#f44336"),
    ("Food", TransactionKind::Expense, "#ff9800"),
    ("Transport", TransactionKind::Expense, "#2196f3"),
    ("Utilities", TransactionKind::Expense, "#9c27b0"),
    ("Health", TransactionKind::Expense, "#e91e63"),
    ("Entertainment", TransactionKind::Expense, "#3f51b5"),
    ("Subscriptions", TransactionKind::Expense, "#607d8b"),
];
