//! List orders use case.

use order_store::OrderRepository;

use crate::{OrderOutput, UseCaseError};

/// Lists every stored order.
pub struct ListOrdersUseCase<R: OrderRepository> {
    repository: R,
}

impl<R: OrderRepository> ListOrdersUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns all orders in the repository's order. Repository errors are
    /// passed through unchanged.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<OrderOutput>, UseCaseError> {
        let orders = self.repository.find_all().await?;
        Ok(orders.iter().map(OrderOutput::from).collect())
    }
}
