//! The event published after an order is created.

use events::Event;

use crate::OrderOutput;

/// Name of the order creation event.
pub const ORDER_CREATED: &str = "OrderCreated";

/// Event carrying the created order's output representation.
pub type OrderCreated = Event<OrderOutput>;

/// Creates an `OrderCreated` event with no payload, stamped now.
pub fn order_created() -> OrderCreated {
    Event::new(ORDER_CREATED)
}
