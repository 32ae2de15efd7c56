use chrono::NaiveDate;
use uuid::Uuid;

use finboard_core::domain::{Book, Frequency, TransactionDraft, TransactionKind};
use finboard_core::services::TransactionService;
use finboard_core::store::MemoryStore;

/// Creates an isolated store plus a fresh owner for each test.
pub fn setup_store() -> (MemoryStore, Uuid) {
    (MemoryStore::new(), Uuid::new_v4())
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn draft(
    description: &str,
    amount: f64,
    kind: TransactionKind,
    category: &str,
    on: NaiveDate,
) -> TransactionDraft {
    TransactionDraft::new(description, amount, kind, category, on)
}

/// Seeds one month of typical household activity and returns the loaded book.
pub fn seeded_book(store: &mut MemoryStore, owner: Uuid) -> Book {
    let entries = vec![
        draft("Salary", 3200.0, TransactionKind::Income, "Salary", date(2024, 6, 1)),
        draft("Rent", 1200.0, TransactionKind::Expense, "Housing", date(2024, 6, 2))
            .recurring(Frequency::Monthly),
        draft("Groceries", 140.0, TransactionKind::Expense, "Food", date(2024, 6, 4)),
        draft("Gym", 25.0, TransactionKind::Expense, "Health", date(2024, 6, 7))
            .recurring(Frequency::Weekly),
        draft("Cinema", 28.0, TransactionKind::Expense, "Entertainment", date(2024, 6, 8)),
    ];
    for entry in entries {
        TransactionService::add(store, owner, entry).expect("seed transaction");
    }
    Book::load(store, owner).expect("load seeded book")
}
