//! Domain types representing money movements.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a transaction adds to or subtracts from the running balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// Recurrence cadence for recurring entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Weekly,
    Monthly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
        };
        f.write_str(label)
    }
}

/// A single dated money movement owned by one account holder.
///
/// `amount` is strictly positive; the sign of a movement comes from `kind`.
/// `recurrence` is `Some` exactly when the entry recurs, so a non-recurring
/// transaction cannot carry a frequency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub owner: Uuid,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    /// Free-text label; deleting a category does not rewrite transactions.
    pub category: String,
    pub date: NaiveDate,
    /// Used only for tie-breaking display order.
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Frequency>,
}

impl Transaction {
    /// The amount with its balance sign applied: positive for income,
    /// negative for expenses.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Materializes a draft into a row with a placeholder identity. Used by
    /// optimistic local application before the store assigns the real id.
    pub fn pending(owner: Uuid, draft: &TransactionDraft) -> Self {
        Self {
            id: Uuid::nil(),
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

/// The external-input shape for creating or fully replacing a transaction.
///
/// Unlike [`Transaction`], a draft keeps the raw `is_recurring`/`frequency`
/// pair so malformed boundary input (a recurring flag with no frequency) is
/// representable and can be rejected with a validation error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
}

impl TransactionDraft {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            kind,
            category: category.into(),
            date,
            is_recurring: false,
            frequency: None,
        }
    }

    pub fn recurring(mut self, frequency: Frequency) -> Self {
        self.is_recurring = true;
        self.frequency = Some(frequency);
        self
    }

    /// The effective recurrence cadence, `None` for one-off entries.
    pub fn recurrence(&self) -> Option<Frequency> {
        if self.is_recurring {
            self.frequency
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn signed_amount_follows_kind() {
        let draft = TransactionDraft::new("Salary", 1200.0, TransactionKind::Income, "Pay", date(2024, 3, 1));
        let income = Transaction::pending(Uuid::new_v4(), &draft);
        assert_eq!(income.signed_amount(), 1200.0);

        let draft = TransactionDraft::new("Rent", 800.0, TransactionKind::Expense, "Housing", date(2024, 3, 1));
        let expense = Transaction::pending(Uuid::new_v4(), &draft);
        assert_eq!(expense.signed_amount(), -800.0);
    }

    #[test]
    fn draft_recurrence_requires_flag() {
        let mut draft =
            TransactionDraft::new("Gym", 30.0, TransactionKind::Expense, "Health", date(2024, 3, 5));
        draft.frequency = Some(Frequency::Monthly);
        assert_eq!(draft.recurrence(), None, "frequency without the flag is inert");

        let recurring = draft.recurring(Frequency::Monthly);
        assert_eq!(recurring.recurrence(), Some(Frequency::Monthly));
    }
}
