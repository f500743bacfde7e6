//! Dispatcher error types.

use thiserror::Error;

/// Error returned by a handler that failed to process an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A single handler failure collected during dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{handler}: {error}")]
pub struct HandlerFailure {
    /// Name of the handler that failed.
    pub handler: String,
    pub error: HandlerError,
}

/// Errors that can occur when registering handlers or dispatching events.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The same handler instance is already registered for this event.
    #[error("Handler {handler} is already registered for event {event}")]
    AlreadyRegistered { event: String, handler: String },

    /// The handler is not registered for this event.
    #[error("Handler {handler} is not registered for event {event}")]
    HandlerNotFound { event: String, handler: String },

    /// One or more handlers failed. Every handler was still invoked.
    #[error(
        "{} handler(s) failed for event {event}: {}",
        .failures.len(),
        describe_failures(.failures)
    )]
    HandlersFailed {
        event: String,
        failures: Vec<HandlerFailure>,
    },
}

fn describe_failures(failures: &[HandlerFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for dispatcher operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
