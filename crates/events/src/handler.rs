use async_trait::async_trait;

use crate::{Event, HandlerError};

/// A subscriber that reacts to dispatched events.
///
/// Handlers are compared by identity (the `Arc` they are registered with),
/// so the same value cannot be registered twice for one event name.
#[async_trait]
pub trait EventHandler<P: Send + Sync>: Send + Sync {
    /// Returns the name of this handler, used in logs and error reports.
    fn name(&self) -> &str;

    /// Handles a single event.
    async fn handle(&self, event: &Event<P>) -> Result<(), HandlerError>;
}
