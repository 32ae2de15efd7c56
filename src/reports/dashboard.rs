//! Assembles every read model into one value for the presentation layer.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::budgeting::{evaluate, BudgetRow};
use crate::config::DashboardConfig;
use crate::domain::Book;
use crate::recurring::{project_recurring_costs, upcoming_bills, RecurringCostProjection, UpcomingBill};
use crate::reports::categories::{compute_category_breakdown, compute_category_trend, CategoryTrend};
use crate::reports::history::{
    compute_balance_history, compute_expense_heatmap, BalancePoint, HeatmapCell,
};
use crate::reports::summary::{compute_monthly_report, compute_summary, MonthlyReport, Summary};

/// Everything the dashboard screen renders, computed from one snapshot and
/// one reference date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub summary: Summary,
    pub monthly: MonthlyReport,
    pub breakdown: HashMap<String, f64>,
    pub trend: CategoryTrend,
    pub balance_history: Vec<BalancePoint>,
    pub heatmap: Vec<HeatmapCell>,
    pub upcoming_bills: Vec<UpcomingBill>,
    pub recurring_costs: RecurringCostProjection,
    pub budget_rows: Vec<BudgetRow>,
}

/// Runs every report over the book. Pure and synchronous; callers refresh by
/// reloading the book and calling again.
pub fn build_dashboard(book: &Book, today: NaiveDate, config: &DashboardConfig) -> DashboardView {
    let transactions = &book.transactions;
    DashboardView {
        summary: compute_summary(transactions),
        monthly: compute_monthly_report(transactions, today),
        breakdown: compute_category_breakdown(transactions),
        trend: compute_category_trend(transactions, config.trend_top_n),
        balance_history: compute_balance_history(transactions, today, config.balance_window_days),
        heatmap: compute_expense_heatmap(transactions, today, config.heatmap_window_days),
        upcoming_bills: upcoming_bills(transactions, today, config.upcoming_limit),
        recurring_costs: project_recurring_costs(transactions),
        budget_rows: evaluate(transactions, &book.budgets, today),
    }
}
