//! Create order use case.

use std::sync::Arc;

use common::Order;
use events::EventDispatcher;
use order_store::{OrderRepository, StoreError};

use crate::{OrderCreated, OrderInput, OrderOutput, UseCaseError};

/// Creates an order, persists it, then publishes `OrderCreated`.
///
/// The event is only dispatched after the save has succeeded. A failed
/// dispatch is reported to the caller but does not undo the save.
pub struct CreateOrderUseCase<R: OrderRepository> {
    repository: R,
    order_created: OrderCreated,
    dispatcher: Arc<EventDispatcher<OrderOutput>>,
}

impl<R: OrderRepository> CreateOrderUseCase<R> {
    /// Creates the use case.
    ///
    /// `order_created` is the event template: every dispatch carries its
    /// name and creation time, with the payload set to the new order.
    pub fn new(
        repository: R,
        order_created: OrderCreated,
        dispatcher: Arc<EventDispatcher<OrderOutput>>,
    ) -> Self {
        Self {
            repository,
            order_created,
            dispatcher,
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    #[tracing::instrument(skip(self), fields(order_id = %input.id))]
    pub async fn execute(&self, input: OrderInput) -> Result<OrderOutput, UseCaseError> {
        let order = Order::new(input.id, input.price, input.tax).inspect_err(|_| {
            metrics::counter!("orders_create_failed_total", "reason" => "validation").increment(1);
        })?;

        self.repository.save(&order).await.inspect_err(|e| {
            let reason = match e {
                StoreError::DuplicateKey(_) => "duplicate",
                _ => "storage",
            };
            metrics::counter!("orders_create_failed_total", "reason" => reason).increment(1);
        })?;
        metrics::counter!("orders_created_total").increment(1);

        let output = OrderOutput::from(&order);
        let event = self.order_created.with_payload(output.clone());
        self.dispatcher.dispatch(&event).await?;

        Ok(output)
    }
}
