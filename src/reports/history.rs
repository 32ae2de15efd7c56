//! Day-by-day series: gap-filled balance history and the expense heatmap.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::Transaction;
use crate::reports::calendar::week_start;

/// Cumulative balance at the end of one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: f64,
}

/// One day's expense total with its intensity relative to the window peak.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub amount: f64,
    /// `amount / max daily amount in the window`; 0 when the window has no
    /// expenses.
    pub intensity: f64,
}

/// Replays the log chronologically and emits one point per day from the
/// window start through `today`, carrying the last known balance through
/// days with no activity.
///
/// The window starts at the later of the earliest transaction date and
/// `today - window_days`, snapped back to the Sunday beginning that week so
/// the grid covers whole weeks. The seed balance is the cumulative balance
/// just before the window start.
pub fn compute_balance_history(
    transactions: &[Transaction],
    today: NaiveDate,
    window_days: i64,
) -> Vec<BalancePoint> {
    if transactions.is_empty() {
        return Vec::new();
    }

    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    // Stable sort: same-day entries keep their original order, so the last
    // one recorded wins the day's closing balance.
    ordered.sort_by_key(|txn| txn.date);

    let mut closing: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    let mut running = 0.0;
    for txn in &ordered {
        running += txn.signed_amount();
        closing.insert(txn.date, running);
    }

    let earliest = ordered[0].date;
    let lower_bound = today - Duration::days(window_days);
    let start = week_start(earliest.max(lower_bound));

    let mut balance = closing
        .range(..start)
        .next_back()
        .map(|(_, carried)| *carried)
        .unwrap_or(0.0);

    let mut points = Vec::new();
    let mut day = start;
    while day <= today {
        if let Some(end_of_day) = closing.get(&day) {
            balance = *end_of_day;
        }
        points.push(BalancePoint { date: day, balance });
        day += Duration::days(1);
    }
    points
}

/// Sums expenses per day over a week-aligned trailing window and normalizes
/// each day against the window's busiest day.
///
/// Both window ends align to week boundaries: the start snaps back to a
/// Sunday, the end forward to the Saturday closing today's week, matching
/// the balance-history alignment. Days past `today` simply carry zero.
pub fn compute_expense_heatmap(
    transactions: &[Transaction],
    today: NaiveDate,
    window_days: i64,
) -> Vec<HeatmapCell> {
    let start = week_start(today - Duration::days(window_days));
    let end = week_start(today) + Duration::days(6);

    let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for txn in transactions.iter().filter(|txn| txn.is_expense()) {
        if txn.date >= start && txn.date <= end {
            *daily.entry(txn.date).or_insert(0.0) += txn.amount;
        }
    }
    let max_daily = daily.values().cloned().fold(0.0, f64::max);

    let mut cells = Vec::new();
    let mut day = start;
    while day <= end {
        let amount = daily.get(&day).copied().unwrap_or(0.0);
        let intensity = if max_daily > 0.0 { amount / max_daily } else { 0.0 };
        cells.push(HeatmapCell {
            date: day,
            amount,
            intensity,
        });
        day += Duration::days(1);
    }
    cells
}
