//! API server for the order system.
//!
//! Exposes the create/list order use cases over REST, a query endpoint and
//! gRPC, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod grpc;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use events::{DispatchError, EventDispatcher};
use metrics_exporter_prometheus::PrometheusHandle;
use order_store::OrderRepository;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use usecase::{
    CreateOrderUseCase, ListOrdersUseCase, ORDER_CREATED, OrderCreatedLogger, order_created,
};

use grpc::OrderServiceServer;
use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<R: OrderRepository + 'static>(
    state: Arc<AppState<R>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::ops::metrics))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::query::playground))
        .route("/health", get(routes::ops::health::<R>))
        .route("/order", post(routes::orders::create::<R>))
        .route("/order", get(routes::orders::list::<R>))
        .route("/query", post(routes::query::execute::<R>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Builds the gRPC server: the order service, the standard health service
/// reporting it as serving, and reflection over its descriptor.
pub async fn create_grpc_router<R: OrderRepository + 'static>(
    state: Arc<AppState<R>>,
) -> Result<tonic::transport::server::Router, tonic_reflection::server::Error> {
    let reflection = tonic_reflection::server::Builder::configure()
        .register_file_descriptor_set(grpc::descriptor::file_descriptor_set())
        .build_v1()?;

    let (health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_serving::<OrderServiceServer<R>>()
        .await;

    Ok(tonic::transport::Server::builder()
        .add_service(health_service)
        .add_service(reflection)
        .add_service(OrderServiceServer::new(state)))
}

/// Creates the application state: one dispatcher with the default
/// subscribers, and both use cases sharing `repository`.
pub async fn create_default_state<R: OrderRepository + Clone + 'static>(
    repository: R,
) -> Result<Arc<AppState<R>>, DispatchError> {
    let dispatcher = Arc::new(EventDispatcher::new());
    dispatcher
        .register(ORDER_CREATED, Arc::new(OrderCreatedLogger))
        .await?;

    let create_order =
        CreateOrderUseCase::new(repository.clone(), order_created(), dispatcher.clone());
    let list_orders = ListOrdersUseCase::new(repository.clone());

    Ok(Arc::new(AppState {
        create_order,
        list_orders,
        repository,
        dispatcher,
    }))
}
