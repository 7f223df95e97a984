use thiserror::Error;

/// Errors surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection failure, constraint violation, or any other driver error.
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    /// No customer with the requested id exists in all four tables.
    #[error("customer '{0}' not found")]
    NotFound(String),
    /// A stored value no longer maps onto the profile model.
    #[error("invalid value '{value}' in column '{column}'")]
    InvalidColumn { column: String, value: String },
}
