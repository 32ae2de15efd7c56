//! Projects recurring entries onto the calendar: next due dates, due-soon
//! flags, and normalized subscription costs.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Frequency, Transaction};
use crate::reports::calendar::clamped_date;

/// Weekly costs count four times toward a month.
const WEEKS_PER_MONTH: f64 = 4.0;
const MONTHS_PER_YEAR: f64 = 12.0;
/// A bill due within this many days counts as due soon.
const DUE_SOON_DAYS: i64 = 3;

/// A recurring expense projected to its next occurrence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpcomingBill {
    pub transaction_id: Uuid,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub frequency: Frequency,
    pub due_date: NaiveDate,
    pub days_until: i64,
    pub due_soon: bool,
}

/// Normalized cost of the recurring expense set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecurringCostProjection {
    /// Number of recurring expense entries contributing.
    pub active: usize,
    pub monthly: f64,
    pub annual: f64,
}

/// The next occurrence of a recurring entry anchored at `anchor`, always on
/// or after `today`.
///
/// Monthly entries recur on the anchor's day-of-month; when the target month
/// is shorter than that day, the date clamps to the month's last day (an
/// anchor on the 31st bills February on the 29th or 28th). Weekly entries
/// recur on the anchor's weekday; a bill whose weekday matches today's lands
/// a full week out.
pub fn next_due_date(anchor: NaiveDate, frequency: Frequency, today: NaiveDate) -> NaiveDate {
    match frequency {
        Frequency::Monthly => {
            let day = anchor.day();
            if day > today.day() {
                clamped_date(today.year(), today.month(), day)
            } else {
                let (year, month) = if today.month() == 12 {
                    (today.year() + 1, 1)
                } else {
                    (today.year(), today.month() + 1)
                };
                clamped_date(year, month, day)
            }
        }
        Frequency::Weekly => {
            let target = anchor.weekday().num_days_from_sunday() as i64;
            let current = today.weekday().num_days_from_sunday() as i64;
            let ahead = if target > current {
                target - current
            } else {
                target - current + 7
            };
            today + Duration::days(ahead)
        }
    }
}

/// Whole days from `today` to `due_date`. Never negative for dates produced
/// by [`next_due_date`].
pub fn days_until_due(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (due_date - today).num_days()
}

pub fn is_due_soon(days_until: i64) -> bool {
    (0..=DUE_SOON_DAYS).contains(&days_until)
}

/// Normalizes recurring expenses to monthly and annual totals: weekly
/// entries count four times per month, monthly entries once.
pub fn project_recurring_costs(transactions: &[Transaction]) -> RecurringCostProjection {
    let mut projection = RecurringCostProjection::default();
    for txn in transactions.iter().filter(|txn| txn.is_expense()) {
        let Some(frequency) = txn.recurrence else {
            continue;
        };
        projection.active += 1;
        projection.monthly += match frequency {
            Frequency::Weekly => txn.amount * WEEKS_PER_MONTH,
            Frequency::Monthly => txn.amount,
        };
    }
    projection.annual = projection.monthly * MONTHS_PER_YEAR;
    projection
}

/// Recurring expenses projected to their next due date, soonest first,
/// capped at `limit` rows for display.
pub fn upcoming_bills(
    transactions: &[Transaction],
    today: NaiveDate,
    limit: usize,
) -> Vec<UpcomingBill> {
    let mut bills: Vec<UpcomingBill> = transactions
        .iter()
        .filter(|txn| txn.is_expense())
        .filter_map(|txn| {
            let frequency = txn.recurrence?;
            let due_date = next_due_date(txn.date, frequency, today);
            let days_until = days_until_due(due_date, today);
            Some(UpcomingBill {
                transaction_id: txn.id,
                description: txn.description.clone(),
                category: txn.category.clone(),
                amount: txn.amount,
                frequency,
                due_date,
                days_until,
                due_soon: is_due_soon(days_until),
            })
        })
        .filter(|bill| bill.days_until >= 0)
        .collect();
    bills.sort_by_key(|bill| bill.days_until);
    bills.truncate(limit);
    bills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TransactionDraft, TransactionKind};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn recurring_expense(amount: f64, anchor: NaiveDate, frequency: Frequency) -> Transaction {
        let draft = TransactionDraft::new("bill", amount, TransactionKind::Expense, "Bills", anchor)
            .recurring(frequency);
        Transaction::pending(Uuid::nil(), &draft)
    }

    #[test]
    fn monthly_due_later_this_month() {
        let due = next_due_date(date(2024, 1, 20), Frequency::Monthly, date(2024, 3, 10));
        assert_eq!(due, date(2024, 3, 20));
    }

    #[test]
    fn monthly_due_rolls_to_next_month() {
        let due = next_due_date(date(2024, 1, 5), Frequency::Monthly, date(2024, 3, 10));
        assert_eq!(due, date(2024, 4, 5));
        // The anchor day itself rolls over too.
        let due = next_due_date(date(2024, 1, 10), Frequency::Monthly, date(2024, 3, 10));
        assert_eq!(due, date(2024, 4, 10));
    }

    #[test]
    fn monthly_clamps_short_months() {
        // Anchored on the 31st, observed mid-February: due on leap day.
        let due = next_due_date(date(2024, 1, 31), Frequency::Monthly, date(2024, 2, 10));
        assert_eq!(due, date(2024, 2, 29));
        let due = next_due_date(date(2023, 1, 31), Frequency::Monthly, date(2023, 2, 10));
        assert_eq!(due, date(2023, 2, 28));
    }

    #[test]
    fn monthly_rolls_across_december() {
        let due = next_due_date(date(2024, 3, 5), Frequency::Monthly, date(2024, 12, 20));
        assert_eq!(due, date(2025, 1, 5));
    }

    #[test]
    fn weekly_same_weekday_lands_next_week() {
        // Both dates are Wednesdays.
        let due = next_due_date(date(2024, 6, 5), Frequency::Weekly, date(2024, 6, 12));
        assert_eq!(due, date(2024, 6, 19));
        assert_eq!(days_until_due(due, date(2024, 6, 12)), 7);
    }

    #[test]
    fn weekly_later_weekday_lands_this_week() {
        // Anchor Friday, today Wednesday 2024-06-12 → due Friday 06-14.
        let due = next_due_date(date(2024, 6, 7), Frequency::Weekly, date(2024, 6, 12));
        assert_eq!(due, date(2024, 6, 14));
        assert!(is_due_soon(days_until_due(due, date(2024, 6, 12))));
    }

    #[test]
    fn due_soon_window_is_inclusive() {
        assert!(is_due_soon(0));
        assert!(is_due_soon(3));
        assert!(!is_due_soon(4));
        assert!(!is_due_soon(-1));
    }

    #[test]
    fn costs_normalize_weekly_to_four_per_month() {
        let log = vec![
            recurring_expense(10.0, date(2024, 1, 1), Frequency::Weekly),
            recurring_expense(25.0, date(2024, 1, 15), Frequency::Monthly),
        ];
        let projection = project_recurring_costs(&log);
        assert_eq!(projection.active, 2);
        assert_eq!(projection.monthly, 65.0);
        assert_eq!(projection.annual, 780.0);
    }

    #[test]
    fn costs_skip_one_offs_and_recurring_income() {
        let one_off = {
            let draft = TransactionDraft::new(
                "groceries",
                80.0,
                TransactionKind::Expense,
                "Food",
                date(2024, 1, 2),
            );
            Transaction::pending(Uuid::nil(), &draft)
        };
        let paycheck = {
            let draft = TransactionDraft::new(
                "salary",
                3000.0,
                TransactionKind::Income,
                "Salary",
                date(2024, 1, 1),
            )
            .recurring(Frequency::Monthly);
            Transaction::pending(Uuid::nil(), &draft)
        };
        let projection = project_recurring_costs(&[one_off, paycheck]);
        assert_eq!(projection.active, 0);
        assert_eq!(projection.monthly, 0.0);
    }

    #[test]
    fn upcoming_bills_sorted_and_capped() {
        let today = date(2024, 6, 12);
        let log = vec![
            recurring_expense(10.0, date(2024, 1, 25), Frequency::Monthly),
            recurring_expense(20.0, date(2024, 6, 7), Frequency::Weekly),
            recurring_expense(30.0, date(2024, 1, 14), Frequency::Monthly),
            recurring_expense(40.0, date(2024, 6, 8), Frequency::Weekly),
        ];
        let bills = upcoming_bills(&log, today, 3);
        assert_eq!(bills.len(), 3);
        let days: Vec<i64> = bills.iter().map(|bill| bill.days_until).collect();
        let mut sorted = days.clone();
        sorted.sort();
        assert_eq!(days, sorted);
    }
}
