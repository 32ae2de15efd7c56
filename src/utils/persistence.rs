use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Book, Budget, CategoryItem, Transaction};
use crate::errors::{CoreError, Result};

/// On-disk shape of a snapshot export.
#[derive(Serialize, Deserialize)]
struct SnapshotFile {
    owner: Uuid,
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    categories: Vec<CategoryItem>,
}

/// Writes the book snapshot to disk atomically by staging to a temporary
/// file. Intended for exports and fixtures, not as the durable store.
pub fn save_book_to_file(book: &Book, path: &Path) -> Result<()> {
    let snapshot = SnapshotFile {
        owner: book.owner,
        transactions: book.transactions.clone(),
        budgets: book.budgets.clone(),
        categories: book.categories.clone(),
    };
    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|err| CoreError::Unavailable(err.to_string()))?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json).map_err(|err| CoreError::Unavailable(err.to_string()))?;
    fs::rename(tmp, path).map_err(|err| CoreError::Unavailable(err.to_string()))?;
    Ok(())
}

/// Loads a book snapshot from disk, returning structured errors on failure.
pub fn load_book_from_file(path: &Path) -> Result<Book> {
    let data = fs::read_to_string(path).map_err(|err| CoreError::Unavailable(err.to_string()))?;
    let snapshot: SnapshotFile =
        serde_json::from_str(&data).map_err(|err| CoreError::Unavailable(err.to_string()))?;
    Ok(Book {
        owner: snapshot.owner,
        transactions: snapshot.transactions,
        budgets: snapshot.budgets,
        categories: snapshot.categories,
    })
}
