//! Application use cases for the order system.
//!
//! This crate orchestrates the entity, the repository port and the event
//! dispatcher:
//! - [`CreateOrderUseCase`]: validate, persist, then publish [`OrderCreated`]
//! - [`ListOrdersUseCase`]: read every stored order
//! - [`OrderInput`] / [`OrderOutput`]: the shapes every transport speaks
//! - [`OrderCreatedLogger`]: the default `OrderCreated` subscriber

pub mod create_order;
pub mod dto;
pub mod error;
pub mod event;
pub mod handler;
pub mod list_orders;

pub use create_order::CreateOrderUseCase;
pub use dto::{OrderInput, OrderOutput};
pub use error::UseCaseError;
pub use event::{ORDER_CREATED, OrderCreated, order_created};
pub use handler::OrderCreatedLogger;
pub use list_orders::ListOrdersUseCase;
