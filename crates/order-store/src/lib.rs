//! Order persistence for the order system.
//!
//! The [`OrderRepository`] port is the only boundary between the use cases
//! and storage. Two backends implement it:
//! - [`InMemoryOrderRepository`]: a vector behind one reader/writer lock
//! - [`PostgresOrderRepository`]: an `orders` table reached through a caller-supplied pool
//!
//! [`OrderBackend`] selects one of them at construction time.

pub mod backend;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use backend::OrderBackend;
pub use common::{Decimal, Order, OrderId};
pub use error::{Result, StoreError};
pub use memory::InMemoryOrderRepository;
pub use postgres::PostgresOrderRepository;
pub use store::OrderRepository;
