use async_trait::async_trait;
use common::Order;
use rust_decimal::Decimal;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{OrderRepository, Result, StoreError};

/// PostgreSQL-backed order repository.
///
/// The pool is supplied already open and its lifecycle stays with the
/// caller. The `orders` table is expected to exist (see
/// `migrations/001_create_orders_table.sql`).
#[derive(Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// Creates a new PostgreSQL order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Rebuilds an order from a row. The stored final price is ignored and
    /// recomputed from price and tax.
    fn row_to_order(row: PgRow) -> Result<Order> {
        let id: String = row.try_get("id")?;
        let price: Decimal = row.try_get("price")?;
        let tax: Decimal = row.try_get("tax")?;

        Order::new(id.clone(), price, tax)
            .map_err(|source| StoreError::InvalidRecord { id, source })
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn save(&self, order: &Order) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO orders (id, price, tax, final_price, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            "#,
        )
        .bind(order.id().as_str())
        .bind(order.price())
        .bind(order.tax())
        .bind(order.final_price())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                tracing::debug!(order_id = %order.id(), "duplicate order id rejected by database");
                return StoreError::DuplicateKey(order.id().clone());
            }
            StoreError::Storage(e)
        })?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query(
            r#"
            SELECT id, price, tax
            FROM orders
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_order).collect()
    }

    async fn get_total(&self) -> Result<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(total as u64)
    }
}
