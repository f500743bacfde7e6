//! Messages of the `pb` package.
//!
//! Amounts travel as `double`; the service converts them to and from exact
//! decimals at the boundary.

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateOrderRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(double, tag = "2")]
    pub price: f64,
    #[prost(double, tag = "3")]
    pub tax: f64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OrderResponse {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(double, tag = "2")]
    pub price: f64,
    #[prost(double, tag = "3")]
    pub tax: f64,
    #[prost(double, tag = "4")]
    pub final_price: f64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListOrdersRequest {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OrderList {
    #[prost(message, repeated, tag = "1")]
    pub orders: Vec<OrderResponse>,
}
