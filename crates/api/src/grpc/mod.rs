//! gRPC transport for the order use cases.
//!
//! Serves `pb.OrderService` with two unary methods, `CreateOrder` and
//! `ListOrders`. The wire messages are prost structs declared in [`pb`], and
//! [`descriptor`] describes them for server reflection.

pub mod descriptor;
pub mod pb;
pub mod service;

pub use service::{OrderGrpc, OrderServiceServer, SERVICE_NAME};
