use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use common::{Order, OrderId};
use tokio::sync::RwLock;

use crate::{OrderRepository, Result, StoreError};

#[derive(Default)]
struct Orders {
    /// Orders in insertion order.
    list: Vec<Order>,
    ids: HashSet<OrderId>,
}

/// In-memory order repository.
///
/// All state sits behind one reader/writer lock: `save` takes the write
/// lock, `find_all` and `get_total` take the read lock. Clones share the
/// same storage.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<Orders>>,
}

impl InMemoryOrderRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: &Order) -> Result<()> {
        let mut orders = self.orders.write().await;

        if !orders.ids.insert(order.id().clone()) {
            return Err(StoreError::DuplicateKey(order.id().clone()));
        }
        orders.list.push(order.clone());

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.list.clone())
    }

    async fn get_total(&self) -> Result<u64> {
        let orders = self.orders.read().await;
        Ok(orders.list.len() as u64)
    }
}
