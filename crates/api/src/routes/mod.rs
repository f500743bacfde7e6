//! HTTP route handlers.

pub mod ops;
pub mod orders;
pub mod query;
