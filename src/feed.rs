//! Simulated external transaction feed.
//!
//! Stands in for a bank/aggregator connection: it emits candidate drafts the
//! reconciliation engine classifies, including deliberate near-duplicates of
//! rows the owner already holds. This is explicitly a generator, not a real
//! feed integration.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Transaction, TransactionDraft, TransactionKind};

/// Merchant table the generator draws fresh candidates from.
const MERCHANTS: &[(&str, &str, f64, f64)] = &[
    ("WHOLEFDS MARKET 1123", "Food", 18.0, 140.0),
    ("SHELL OIL 5520", "Transport", 25.0, 70.0),
    ("NETFLIX.COM", "Subscriptions", 15.49, 15.49),
    ("CITY WATER & POWER", "Utilities", 60.0, 180.0),
    ("CVS PHARMACY 0412", "Health", 8.0, 55.0),
    ("AMC THEATRES 0099", "Entertainment", 14.0, 48.0),
    ("TRADER JOES 701", "Food", 12.0, 95.0),
];

/// Descriptions the feed substitutes when it re-reports an existing row;
/// reformatting is exactly why reconciliation ignores description text.
const REWORDINGS: &[&str] = &[
    "POS DEBIT CARD PURCHASE",
    "PENDING TRANSACTION",
    "CHECKCARD PURCHASE",
];

/// How many days back a generated candidate may be dated.
const FEED_WINDOW_DAYS: i64 = 30;

/// Seedable candidate generator.
pub struct SimulatedFeed {
    rng: StdRng,
}

impl SimulatedFeed {
    /// Deterministic feed for tests and demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates `count` candidate drafts dated within the trailing feed
    /// window. Roughly one in four candidates re-reports a row from
    /// `existing` (same date, kind, and near-identical amount, different
    /// description) so a reconciliation run has duplicates to suppress.
    pub fn candidates(
        &mut self,
        existing: &[Transaction],
        today: NaiveDate,
        count: usize,
    ) -> Vec<TransactionDraft> {
        let mut batch = Vec::with_capacity(count);
        for _ in 0..count {
            let duplicate = !existing.is_empty() && self.rng.gen_bool(0.25);
            if duplicate {
                let source = &existing[self.rng.gen_range(0..existing.len())];
                batch.push(self.reworded_copy(source));
            } else {
                batch.push(self.fresh_candidate(today));
            }
        }
        batch
    }

    fn fresh_candidate(&mut self, today: NaiveDate) -> TransactionDraft {
        let (description, category, low, high) =
            MERCHANTS[self.rng.gen_range(0..MERCHANTS.len())];
        let amount = if low < high {
            round_cents(self.rng.gen_range(low..high))
        } else {
            low
        };
        let date = today - Duration::days(self.rng.gen_range(0..FEED_WINDOW_DAYS));
        TransactionDraft::new(description, amount, TransactionKind::Expense, category, date)
    }

    fn reworded_copy(&mut self, source: &Transaction) -> TransactionDraft {
        // Nudge the amount by under half the dedup tolerance either way.
        let jitter = self.rng.gen_range(-0.004..0.004);
        let description = REWORDINGS[self.rng.gen_range(0..REWORDINGS.len())];
        TransactionDraft::new(
            description,
            round_thousandths(source.amount + jitter).max(0.001),
            source.kind,
            source.category.clone(),
            source.date,
        )
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

fn round_thousandths(amount: f64) -> f64 {
    (amount * 1000.0).round() / 1000.0
}
