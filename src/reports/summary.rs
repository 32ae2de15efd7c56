//! All-time and month-over-month totals.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::Transaction;
use crate::reports::calendar::{first_of_month, previous_month, same_month};

/// All-time totals over the full transaction log.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_balance: f64,
}

/// Income, expenses, and their difference for one calendar month.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthTotals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

impl MonthTotals {
    fn absorb(&mut self, txn: &Transaction) {
        if txn.is_income() {
            self.income += txn.amount;
        } else {
            self.expenses += txn.amount;
        }
        self.balance = self.income - self.expenses;
    }
}

/// Month-over-month view anchored at a reference date.
///
/// `previous_closing_balance` is the running balance as of the first day of
/// the current month, covering every transaction before it, not just the
/// previous month's.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthlyReport {
    pub current_month: MonthTotals,
    pub previous_month: MonthTotals,
    pub total_balance: f64,
    pub previous_closing_balance: f64,
}

/// Single pass over the full log, regardless of date.
pub fn compute_summary(transactions: &[Transaction]) -> Summary {
    let mut summary = Summary::default();
    for txn in transactions {
        if txn.is_income() {
            summary.total_income += txn.amount;
        } else {
            summary.total_expenses += txn.amount;
        }
    }
    summary.total_balance = summary.total_income - summary.total_expenses;
    summary
}

/// Buckets the log into this month, last month, the all-time balance, and the
/// closing balance carried into the current month.
pub fn compute_monthly_report(transactions: &[Transaction], today: NaiveDate) -> MonthlyReport {
    let (prev_year, prev_month) = previous_month(today);
    let month_start = first_of_month(today);

    let mut report = MonthlyReport::default();
    for txn in transactions {
        let signed = txn.signed_amount();
        report.total_balance += signed;
        if txn.date < month_start {
            report.previous_closing_balance += signed;
        }
        if same_month(txn.date, today) {
            report.current_month.absorb(txn);
        } else if txn.date.year() == prev_year && txn.date.month() == prev_month {
            report.previous_month.absorb(txn);
        }
    }
    report
}
