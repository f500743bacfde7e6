//! Use case error types.

use common::ValidationError;
use events::DispatchError;
use order_store::StoreError;
use thiserror::Error;

/// Errors returned by the order use cases.
#[derive(Debug, Error)]
pub enum UseCaseError {
    /// The input does not describe a valid order.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The repository rejected or failed the operation.
    #[error("Order store error: {0}")]
    Store(#[from] StoreError),

    /// The order was saved, but at least one subscriber failed.
    #[error("Event dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

impl UseCaseError {
    /// Returns true if the order ID was already taken.
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, UseCaseError::Store(e) if e.is_duplicate_key())
    }
}
