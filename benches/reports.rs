use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use uuid::Uuid;

use finboard_core::reports::{
    compute_balance_history, compute_category_trend, compute_expense_heatmap, compute_summary,
};
use finboard_core::domain::{Transaction, TransactionDraft, TransactionKind};

const CATEGORIES: &[&str] = &[
    "Housing", "Food", "Transport", "Utilities", "Health", "Entertainment", "Subscriptions",
];

/// Two years of synthetic daily activity.
fn synthetic_log(entries: usize) -> (Vec<Transaction>, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(2022, 7, 1).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let owner = Uuid::new_v4();
    let span_days = (today - start).num_days();

    let log = (0..entries)
        .map(|i| {
            let date = start + Duration::days((i as i64 * 37) % span_days);
            let kind = if i % 9 == 0 {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };
            let amount = 5.0 + (i % 240) as f64;
            let category = CATEGORIES[i % CATEGORIES.len()];
            let draft = TransactionDraft::new("bench entry", amount, kind, category, date);
            Transaction::pending(owner, &draft)
        })
        .collect();
    (log, today)
}

fn bench_reports(c: &mut Criterion) {
    let (log, today) = synthetic_log(10_000);

    c.bench_function("summary_10k", |b| {
        b.iter(|| compute_summary(black_box(&log)))
    });
    c.bench_function("category_trend_10k", |b| {
        b.iter(|| compute_category_trend(black_box(&log), 5))
    });
    c.bench_function("balance_history_10k", |b| {
        b.iter(|| compute_balance_history(black_box(&log), today, 180))
    });
    c.bench_function("expense_heatmap_10k", |b| {
        b.iter(|| compute_expense_heatmap(black_box(&log), today, 91))
    });
}

criterion_group!(benches, bench_reports);
criterion_main!(benches);
