use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A monthly spending limit for one category.
///
/// At most one budget survives per (owner, category); the store upserts by
/// that key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: Uuid,
    pub owner: Uuid,
    pub category: String,
    /// Monthly limit, never negative. A zero limit is a valid configuration.
    pub limit: f64,
}

impl Budget {
    pub fn new(owner: Uuid, category: impl Into<String>, limit: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            category: category.into(),
            limit,
        }
    }
}
