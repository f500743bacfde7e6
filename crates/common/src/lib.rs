//! Shared types for the order system.
//!
//! - [`OrderId`]: caller-supplied order identifier
//! - [`Order`]: the order entity, whose final price is always derived
//! - [`ValidationError`]: why an order could not be constructed

pub mod order;
pub mod types;

pub use order::{Order, ValidationError};
pub use rust_decimal::Decimal;
pub use types::OrderId;
