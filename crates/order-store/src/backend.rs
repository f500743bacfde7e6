//! Backend selection for the order repository.

use std::time::Duration;

use async_trait::async_trait;
use common::Order;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::{InMemoryOrderRepository, OrderRepository, PostgresOrderRepository, Result};

/// The order repository backends, chosen once at startup.
///
/// A PostgreSQL backend can only be built from a live pool, so a missing
/// connection is caught here rather than on the first query.
#[derive(Clone)]
pub enum OrderBackend {
    InMemory(InMemoryOrderRepository),
    Postgres(PostgresOrderRepository),
}

impl OrderBackend {
    /// Creates an empty in-memory backend.
    pub fn in_memory() -> Self {
        OrderBackend::InMemory(InMemoryOrderRepository::new())
    }

    /// Creates a PostgreSQL backend over an already open pool.
    pub fn postgres(pool: PgPool) -> Self {
        OrderBackend::Postgres(PostgresOrderRepository::new(pool))
    }

    /// Opens a pool to `database_url` and wraps it in a PostgreSQL backend.
    ///
    /// Fails with `StoreError::Storage` if no connection can be established.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        tracing::info!(max_connections, "connected to PostgreSQL");
        Ok(Self::postgres(pool))
    }

    /// Returns the backend name, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            OrderBackend::InMemory(_) => "memory",
            OrderBackend::Postgres(_) => "postgres",
        }
    }
}

impl Default for OrderBackend {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[async_trait]
impl OrderRepository for OrderBackend {
    async fn save(&self, order: &Order) -> Result<()> {
        match self {
            OrderBackend::InMemory(store) => store.save(order).await,
            OrderBackend::Postgres(store) => store.save(order).await,
        }
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        match self {
            OrderBackend::InMemory(store) => store.find_all().await,
            OrderBackend::Postgres(store) => store.find_all().await,
        }
    }

    async fn get_total(&self) -> Result<u64> {
        match self {
            OrderBackend::InMemory(store) => store.get_total().await,
            OrderBackend::Postgres(store) => store.get_total().await,
        }
    }
}
