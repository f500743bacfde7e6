//! In-process publish/subscribe for domain events.
//!
//! - [`Event`]: a named event with a typed payload and a creation timestamp
//! - [`EventHandler`] trait for subscribers
//! - [`EventDispatcher`]: registry of handlers per event name, dispatching in registration order

pub mod dispatcher;
pub mod error;
pub mod event;
pub mod handler;

pub use dispatcher::EventDispatcher;
pub use error::{DispatchError, HandlerError, HandlerFailure, Result};
pub use event::Event;
pub use handler::EventHandler;
