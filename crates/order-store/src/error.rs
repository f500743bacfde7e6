use common::{OrderId, ValidationError};
use thiserror::Error;

/// Errors that can occur when interacting with an order repository.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An order with the same ID is already stored.
    #[error("Order with ID {0} already exists")]
    DuplicateKey(OrderId),

    /// The backing store failed (connectivity, syntax, decoding, ...).
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// A stored record no longer satisfies the order invariants.
    #[error("Invalid stored order {id}: {source}")]
    InvalidRecord {
        id: String,
        #[source]
        source: ValidationError,
    },
}

impl StoreError {
    /// Returns true if the error is an identifier collision.
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, StoreError::DuplicateKey(_))
    }
}

/// Result type for order repository operations.
pub type Result<T> = std::result::Result<T, StoreError>;
