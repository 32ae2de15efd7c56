use thiserror::Error;

/// Unified error type for the core, the service layer, and the store boundary.
///
/// The variants are the taxonomy callers branch on; the record store
/// collaborator maps its structured responses onto them, never onto message
/// text.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Rejected before any store call was attempted.
    #[error("Invalid input: {0}")]
    Validation(String),
    /// An update or delete referenced a row that does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
    /// A delete reported zero affected rows: either the row was already gone
    /// or the write was blocked by access policy. Callers must surface this
    /// instead of assuming the delete succeeded.
    #[error("Delete affected no rows: {0}")]
    PermissionOrMissing(String),
    /// Transport or storage failure from the record store.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
