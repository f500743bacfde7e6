//! Input and output shapes shared by every transport.

use common::Order;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Data needed to create an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    pub id: String,
    pub price: Decimal,
    pub tax: Decimal,
}

impl OrderInput {
    pub fn new(id: impl Into<String>, price: Decimal, tax: Decimal) -> Self {
        Self {
            id: id.into(),
            price,
            tax,
        }
    }
}

/// An order as seen from outside the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderOutput {
    pub id: String,
    pub price: Decimal,
    pub tax: Decimal,
    pub final_price: Decimal,
}

impl From<&Order> for OrderOutput {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().to_string(),
            price: order.price(),
            tax: order.tax(),
            final_price: order.final_price(),
        }
    }
}
