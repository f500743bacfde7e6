//! Default subscriber for `OrderCreated`.

use async_trait::async_trait;
use events::{Event, EventHandler, HandlerError};

use crate::OrderOutput;

/// Logs every created order.
#[derive(Debug, Default)]
pub struct OrderCreatedLogger;

#[async_trait]
impl EventHandler<OrderOutput> for OrderCreatedLogger {
    fn name(&self) -> &str {
        "OrderCreatedLogger"
    }

    async fn handle(&self, event: &Event<OrderOutput>) -> Result<(), HandlerError> {
        let order = event
            .payload()
            .ok_or_else(|| HandlerError::new("OrderCreated event has no payload"))?;

        tracing::info!(
            event = event.name(),
            order_id = %order.id,
            price = %order.price,
            tax = %order.tax,
            final_price = %order.final_price,
            event_time = %event.date_time(),
            "order created"
        );
        Ok(())
    }
}
