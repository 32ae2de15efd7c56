//! Merges current-month category spend with configured limits into
//! utilization rows.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Budget, Transaction};
use crate::reports::calendar::same_month;

/// One category's spend against its configured monthly limit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetRow {
    pub category: String,
    pub spent: f64,
    pub limit: f64,
    /// `spent / limit * 100` when a positive limit is configured, otherwise 0
    /// regardless of spend.
    pub percentage: f64,
}

/// Evaluates every category with spend this month or a configured budget,
/// most-utilized first.
///
/// A budgeted category with no spend still appears, as does an unbudgeted
/// category with spend. Rows where both sides are zero are dropped.
pub fn evaluate(transactions: &[Transaction], budgets: &[Budget], today: NaiveDate) -> Vec<BudgetRow> {
    // BTreeMap keys give ties a deterministic (alphabetical) order before the
    // stable percentage sort.
    let mut rows: BTreeMap<String, (f64, f64)> = BTreeMap::new();

    for txn in transactions
        .iter()
        .filter(|txn| txn.is_expense() && same_month(txn.date, today))
    {
        rows.entry(txn.category.clone()).or_insert((0.0, 0.0)).0 += txn.amount;
    }
    for budget in budgets {
        rows.entry(budget.category.clone()).or_insert((0.0, 0.0)).1 = budget.limit;
    }

    let mut rows: Vec<BudgetRow> = rows
        .into_iter()
        .filter(|(_, (spent, limit))| *spent != 0.0 || *limit != 0.0)
        .map(|(category, (spent, limit))| BudgetRow {
            category,
            spent,
            limit,
            percentage: if limit > 0.0 { spent / limit * 100.0 } else { 0.0 },
        })
        .collect();
    rows.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows
}
