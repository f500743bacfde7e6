use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Unique identifier for an order.
///
/// Identifiers are chosen by the caller, not generated. The only rule is
/// that they are not blank; uniqueness is enforced by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(String);

impl OrderId {
    /// Creates an order ID, rejecting empty or all-whitespace values.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID, returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for OrderId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for OrderId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_preserves_value() {
        let id = OrderId::new("abc").unwrap();
        assert_eq!(id.as_str(), "abc");
        assert_eq!(id.to_string(), "abc");
    }

    #[test]
    fn order_id_rejects_blank_values() {
        assert_eq!(OrderId::new(""), Err(ValidationError::EmptyId));
        assert_eq!(OrderId::new("   "), Err(ValidationError::EmptyId));
    }

    #[test]
    fn order_id_keeps_surrounding_whitespace() {
        let id = OrderId::new(" abc ").unwrap();
        assert_eq!(id.as_str(), " abc ");
    }

    #[test]
    fn order_id_deserialization_validates() {
        let id: OrderId = serde_json::from_str("\"order-1\"").unwrap();
        assert_eq!(id.as_str(), "order-1");

        let err = serde_json::from_str::<OrderId>("\"\"");
        assert!(err.is_err());
    }
}
