//! REST endpoints for creating and listing orders.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use events::EventDispatcher;
use order_store::OrderRepository;
use usecase::{CreateOrderUseCase, ListOrdersUseCase, OrderInput, OrderOutput};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<R: OrderRepository> {
    pub create_order: CreateOrderUseCase<R>,
    pub list_orders: ListOrdersUseCase<R>,
    pub repository: R,
    pub dispatcher: Arc<EventDispatcher<OrderOutput>>,
}

/// POST /order — create an order.
///
/// An unreadable body is answered with 400 and the same `{"error": ...}`
/// shape as use case failures.
#[tracing::instrument(skip(state, input), fields(order_id = tracing::field::Empty))]
pub async fn create<R: OrderRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    input: Result<Json<OrderInput>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderOutput>), ApiError> {
    let Json(input) = input?;
    tracing::Span::current().record("order_id", input.id.as_str());

    let output = state.create_order.execute(input).await?;
    Ok((StatusCode::CREATED, Json(output)))
}

/// GET /order — list all orders.
#[tracing::instrument(skip(state))]
pub async fn list<R: OrderRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<Vec<OrderOutput>>, ApiError> {
    let orders = state.list_orders.execute().await?;
    Ok(Json(orders))
}
