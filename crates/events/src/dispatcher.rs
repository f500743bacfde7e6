//! Event dispatcher delivering events to registered handlers.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{DispatchError, Event, EventHandler, HandlerFailure, Result};

type Handlers<P> = Vec<Arc<dyn EventHandler<P>>>;

/// Registry of event handlers keyed by event name.
///
/// The dispatcher supports:
/// - Registration and removal of handlers at any time
/// - Dispatch by event name, invoking handlers in registration order
/// - Clearing the whole registry on shutdown
///
/// Dispatch copies the handler list and releases the registry lock before
/// invoking any handler, so handlers may register or remove handlers
/// themselves. A failing handler does not stop the others; failures are
/// reported together once every handler has run.
pub struct EventDispatcher<P: Send + Sync> {
    handlers: RwLock<HashMap<String, Handlers<P>>>,
}

impl<P: Send + Sync> EventDispatcher<P> {
    /// Creates a dispatcher with no handlers.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Appends a handler to the list for `event_name`.
    ///
    /// Fails with `AlreadyRegistered` if this exact handler is already present.
    pub async fn register(
        &self,
        event_name: impl Into<String>,
        handler: Arc<dyn EventHandler<P>>,
    ) -> Result<()> {
        let event_name = event_name.into();
        let mut registry = self.handlers.write().await;
        let handlers = registry.entry(event_name.clone()).or_default();

        if handlers.iter().any(|h| Arc::ptr_eq(h, &handler)) {
            return Err(DispatchError::AlreadyRegistered {
                event: event_name,
                handler: handler.name().to_string(),
            });
        }

        tracing::debug!(event = %event_name, handler = handler.name(), "handler registered");
        handlers.push(handler);
        Ok(())
    }

    /// Removes a previously registered handler.
    ///
    /// Fails with `HandlerNotFound` if the handler is not registered for
    /// `event_name`.
    pub async fn remove(&self, event_name: &str, handler: &Arc<dyn EventHandler<P>>) -> Result<()> {
        let mut registry = self.handlers.write().await;
        let not_found = || DispatchError::HandlerNotFound {
            event: event_name.to_string(),
            handler: handler.name().to_string(),
        };

        let handlers = registry.get_mut(event_name).ok_or_else(not_found)?;
        let index = handlers
            .iter()
            .position(|h| Arc::ptr_eq(h, handler))
            .ok_or_else(not_found)?;
        handlers.remove(index);

        if handlers.is_empty() {
            registry.remove(event_name);
        }

        tracing::debug!(event = %event_name, handler = handler.name(), "handler removed");
        Ok(())
    }

    /// Returns true if `handler` is registered for `event_name`.
    pub async fn has(&self, event_name: &str, handler: &Arc<dyn EventHandler<P>>) -> bool {
        self.handlers
            .read()
            .await
            .get(event_name)
            .is_some_and(|handlers| handlers.iter().any(|h| Arc::ptr_eq(h, handler)))
    }

    /// Returns the number of handlers registered for `event_name`.
    pub async fn handler_count(&self, event_name: &str) -> usize {
        self.handlers
            .read()
            .await
            .get(event_name)
            .map_or(0, Vec::len)
    }

    /// Delivers an event to every handler registered for its name.
    ///
    /// Handlers are awaited one after another in registration order. An
    /// event with no handlers is a no-op.
    #[tracing::instrument(skip(self, event), fields(event = %event.name()))]
    pub async fn dispatch(&self, event: &Event<P>) -> Result<()> {
        let handlers = match self.handlers.read().await.get(event.name()) {
            Some(handlers) => handlers.clone(),
            None => return Ok(()),
        };

        metrics::counter!("events_dispatched_total", "event" => event.name().to_string())
            .increment(1);

        let mut failures = Vec::new();
        for handler in &handlers {
            if let Err(error) = handler.handle(event).await {
                tracing::warn!(handler = handler.name(), %error, "event handler failed");
                metrics::counter!("event_handler_failures_total", "event" => event.name().to_string())
                    .increment(1);
                failures.push(HandlerFailure {
                    handler: handler.name().to_string(),
                    error,
                });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::HandlersFailed {
                event: event.name().to_string(),
                failures,
            })
        }
    }

    /// Removes every handler for every event.
    pub async fn clear(&self) {
        self.handlers.write().await.clear();
    }
}

impl<P: Send + Sync> Default for EventDispatcher<P> {
    fn default() -> Self {
        Self::new()
    }
}
