//! Merges externally sourced candidate entries into the log while
//! suppressing likely duplicates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Transaction, TransactionDraft};
use crate::services::TransactionService;
use crate::store::RecordStore;

/// Two same-date, same-kind entries closer than this are the same movement.
/// External feeds round currency differently, hence a tolerance rather than
/// exact equality.
pub const DEDUP_TOLERANCE: f64 = 0.01;

/// Outcome of one reconciliation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReconcileReport {
    /// Rows inserted this run, in candidate order.
    pub imported: Vec<Transaction>,
    /// Candidates discarded as duplicates of pre-existing rows.
    pub skipped: usize,
    /// Candidates whose insert failed; the run continues past them.
    pub failed: usize,
}

impl ReconcileReport {
    pub fn imported_count(&self) -> usize {
        self.imported.len()
    }
}

/// Whether `candidate` duplicates any existing row: same calendar date, same
/// kind, amounts within [`DEDUP_TOLERANCE`].
///
/// Description is deliberately excluded: external sources reformat text, so
/// comparing it would under-match.
pub fn is_duplicate(existing: &[Transaction], candidate: &TransactionDraft) -> bool {
    existing.iter().any(|txn| {
        txn.date == candidate.date
            && txn.kind == candidate.kind
            && (txn.amount - candidate.amount).abs() < DEDUP_TOLERANCE
    })
}

/// Classifies each candidate against the pre-reconciliation `existing` set
/// and inserts the new ones sequentially, in input order.
///
/// Rows imported earlier in the run do not suppress later candidates, so an
/// internally duplicated batch imports every copy. A failed insert is
/// logged and counted but never aborts the remaining candidates; inserts
/// already committed stay committed.
pub fn reconcile(
    store: &mut dyn RecordStore,
    owner: Uuid,
    existing: &[Transaction],
    candidates: Vec<TransactionDraft>,
) -> ReconcileReport {
    let mut report = ReconcileReport::default();
    for candidate in candidates {
        if is_duplicate(existing, &candidate) {
            report.skipped += 1;
            continue;
        }
        match TransactionService::add(store, owner, candidate) {
            Ok(txn) => report.imported.push(txn),
            Err(err) => {
                tracing::warn!(owner = %owner, error = %err, "candidate insert failed");
                report.failed += 1;
            }
        }
    }
    tracing::info!(
        owner = %owner,
        imported = report.imported.len(),
        skipped = report.skipped,
        failed = report.failed,
        "reconciliation finished"
    );
    report
}
