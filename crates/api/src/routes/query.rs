//! Query endpoint with a GraphQL-style response envelope.
//!
//! Requests name an operation and carry typed arguments:
//!
//! ```json
//! {"operation": "orders"}
//! {"operation": "createOrder", "input": {"id": "abc", "price": 100.5, "tax": 10.05}}
//! ```
//!
//! Responses are `{"data": {"<operation>": ...}}` on success and
//! `{"errors": [{"message": "..."}]}` on failure.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Html;
use order_store::OrderRepository;
use serde::{Deserialize, Serialize};
use usecase::{OrderInput, OrderOutput};

use super::orders::AppState;

/// A request to the query endpoint.
#[derive(Debug, Deserialize)]
#[serde(tag = "operation", rename_all = "camelCase")]
pub enum QueryRequest {
    /// List all orders.
    Orders,
    /// Create an order.
    CreateOrder { input: OrderInput },
}

/// Result data, keyed by operation name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryData {
    Orders(Vec<OrderOutput>),
    CreateOrder(OrderOutput),
}

#[derive(Debug, Serialize)]
pub struct QueryError {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<QueryData>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<QueryError>,
}

impl QueryResponse {
    fn data(data: QueryData) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: vec![QueryError {
                message: message.into(),
            }],
        }
    }
}

/// POST /query — run one operation.
///
/// Operation failures are reported in the `errors` list with status 200;
/// only an unreadable request body yields 400.
#[tracing::instrument(skip(state, request))]
pub async fn execute<R: OrderRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    request: Result<Json<QueryRequest>, JsonRejection>,
) -> (StatusCode, Json<QueryResponse>) {
    let request = match request {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "rejected query request");
            return (
                StatusCode::BAD_REQUEST,
                Json(QueryResponse::error(rejection.body_text())),
            );
        }
    };

    let result = match request {
        QueryRequest::Orders => state.list_orders.execute().await.map(QueryData::Orders),
        QueryRequest::CreateOrder { input } => state
            .create_order
            .execute(input)
            .await
            .map(QueryData::CreateOrder),
    };

    match result {
        Ok(data) => (StatusCode::OK, Json(QueryResponse::data(data))),
        Err(err) => {
            tracing::warn!(error = %err, "query operation failed");
            (StatusCode::OK, Json(QueryResponse::error(err.to_string())))
        }
    }
}

/// GET / — describes the query endpoint.
pub async fn playground() -> Html<&'static str> {
    Html(PLAYGROUND_HTML)
}

const PLAYGROUND_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Order Query API</title>
    <style>
        body { font-family: sans-serif; margin: 40px; }
        pre { background: #f5f5f5; padding: 10px; border-radius: 5px; }
    </style>
</head>
<body>
    <h1>Order Query API</h1>
    <p>POST JSON to <code>/query</code>.</p>
    <h2>Create order</h2>
    <pre>{"operation": "createOrder", "input": {"id": "123e4567", "price": 100.50, "tax": 10.05}}</pre>
    <h2>List orders</h2>
    <pre>{"operation": "orders"}</pre>
</body>
</html>
"#;
