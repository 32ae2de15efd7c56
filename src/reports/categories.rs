//! Expense classification: per-category totals and the top-N monthly trend.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::Transaction;
use crate::reports::calendar::month_key;

/// The label the trend folds non-top categories into.
pub const OTHER_SERIES: &str = "Other";

/// One month's accumulated spend per selected series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendRow {
    /// Sortable `YYYY-MM` bucket key.
    pub month: String,
    pub amounts: HashMap<String, f64>,
}

/// Month-by-month totals for the top expense categories, remainder bucketed
/// into [`OTHER_SERIES`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTrend {
    /// Selected series in rank order; `"Other"` last when present.
    pub series: Vec<String>,
    /// Rows in ascending month order.
    pub rows: Vec<TrendRow>,
}

/// All-time expense total per category. Unordered; income never contributes,
/// so no zero-valued entries appear.
pub fn compute_category_breakdown(transactions: &[Transaction]) -> HashMap<String, f64> {
    let mut totals = HashMap::new();
    for txn in transactions.iter().filter(|txn| txn.is_expense()) {
        *totals.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
    }
    totals
}

/// Ranks categories by all-time expense total (ties keep first-encountered
/// input order), keeps the top `top_n` as named series, and folds the rest
/// into `"Other"` when anything falls outside the cut.
pub fn compute_category_trend(transactions: &[Transaction], top_n: usize) -> CategoryTrend {
    let mut encounter_order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, f64> = HashMap::new();
    for txn in transactions.iter().filter(|txn| txn.is_expense()) {
        if !totals.contains_key(&txn.category) {
            encounter_order.push(txn.category.clone());
        }
        *totals.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
    }

    // Stable sort: equal totals keep their first-encountered order.
    let mut ranked = encounter_order;
    ranked.sort_by(|a, b| {
        totals[b]
            .partial_cmp(&totals[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let has_other = ranked.len() > top_n;
    ranked.truncate(top_n);
    let selected: HashSet<&str> = ranked.iter().map(String::as_str).collect();

    let mut buckets: BTreeMap<String, HashMap<String, f64>> = BTreeMap::new();
    for txn in transactions.iter().filter(|txn| txn.is_expense()) {
        let series = if selected.contains(txn.category.as_str()) {
            txn.category.clone()
        } else {
            OTHER_SERIES.to_string()
        };
        *buckets
            .entry(month_key(txn.date))
            .or_default()
            .entry(series)
            .or_insert(0.0) += txn.amount;
    }

    let mut series = ranked;
    if has_other {
        series.push(OTHER_SERIES.to_string());
    }
    let rows = buckets
        .into_iter()
        .map(|(month, amounts)| TrendRow { month, amounts })
        .collect();
    CategoryTrend { series, rows }
}
