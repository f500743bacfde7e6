//! The order entity.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::OrderId;

/// Reasons an order cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The order ID is empty or whitespace.
    #[error("Order ID must not be empty")]
    EmptyId,

    /// The price is below zero.
    #[error("Invalid price: {0} (must not be negative)")]
    NegativePrice(Decimal),

    /// The tax is below zero.
    #[error("Invalid tax: {0} (must not be negative)")]
    NegativeTax(Decimal),

    /// `price + tax` does not fit in a decimal.
    #[error("Final price overflows: {price} + {tax}")]
    FinalPriceOverflow { price: Decimal, tax: Decimal },
}

/// An order with a price, a tax and the final price derived from both.
///
/// The final price is computed once, at construction, and cannot be set
/// from outside. Orders have no mutating operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    price: Decimal,
    tax: Decimal,
    final_price: Decimal,
}

impl Order {
    /// Creates an order, validating the ID, that price and tax are not
    /// negative, and that their sum is representable.
    pub fn new(
        id: impl Into<String>,
        price: Decimal,
        tax: Decimal,
    ) -> Result<Self, ValidationError> {
        let id = OrderId::new(id)?;
        Self::with_id(id, price, tax)
    }

    /// Creates an order from an already validated ID.
    pub fn with_id(id: OrderId, price: Decimal, tax: Decimal) -> Result<Self, ValidationError> {
        if price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice(price));
        }
        if tax < Decimal::ZERO {
            return Err(ValidationError::NegativeTax(tax));
        }

        let final_price = price
            .checked_add(tax)
            .ok_or(ValidationError::FinalPriceOverflow { price, tax })?;

        Ok(Self {
            id,
            price,
            tax,
            final_price,
        })
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn tax(&self) -> Decimal {
        self.tax
    }

    /// Returns `price + tax`.
    pub fn final_price(&self) -> Decimal {
        self.final_price
    }
}
