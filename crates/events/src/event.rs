use chrono::{DateTime, Utc};

/// A named event carrying a typed payload.
///
/// The timestamp is taken when the event value is created, not when it is
/// dispatched. A single event value can be reused as a template: clone it
/// and set the payload for each dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Event<P> {
    name: String,
    payload: Option<P>,
    date_time: DateTime<Utc>,
}

impl<P> Event<P> {
    /// Creates an event with no payload, stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: None,
            date_time: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Returns a copy of this event carrying `payload`, keeping name and timestamp.
    pub fn with_payload(&self, payload: P) -> Self {
        Self {
            name: self.name.clone(),
            payload: Some(payload),
            date_time: self.date_time,
        }
    }

    pub fn date_time(&self) -> DateTime<Utc> {
        self.date_time
    }
}
