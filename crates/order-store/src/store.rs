use async_trait::async_trait;
use common::Order;

use crate::Result;

/// Port for persisting and reading orders.
///
/// Implementations must be thread-safe (Send + Sync); one repository is
/// shared by every request.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists a fully constructed order.
    ///
    /// Fails with `DuplicateKey` if an order with the same ID exists, and
    /// with `Storage` for any other persistence failure. A failed save
    /// leaves the stored orders unchanged.
    async fn save(&self, order: &Order) -> Result<()>;

    /// Returns every stored order.
    ///
    /// The order is stable for a given backend: insertion order in memory,
    /// creation time for PostgreSQL. An empty store yields an empty vector.
    async fn find_all(&self) -> Result<Vec<Order>>;

    /// Returns the number of stored orders.
    async fn get_total(&self) -> Result<u64>;
}
