//! API server entry point.

use std::future::IntoFuture;
use std::net::SocketAddr;

use api::config::{BackendConfig, Config};
use order_store::OrderBackend;
use tokio::signal;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

/// Resolves once the shutdown signal has been broadcast.
async fn shutdown_requested(mut rx: watch::Receiver<()>) {
    let _ = rx.changed().await;
}

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // 3. Open the order repository
    let backend = match config.backend().expect("invalid configuration") {
        BackendConfig::Memory => OrderBackend::in_memory(),
        BackendConfig::Postgres {
            url,
            max_connections,
        } => OrderBackend::connect(&url, max_connections)
            .await
            .expect("failed to connect to PostgreSQL"),
    };
    tracing::info!(backend = backend.kind(), "order repository ready");

    // 4. Wire use cases and event subscribers
    let state = api::create_default_state(backend)
        .await
        .expect("failed to register event handlers");
    let app = api::create_app(state.clone(), metrics_handle);
    let grpc = api::create_grpc_router(state.clone())
        .await
        .expect("failed to build gRPC server");

    // 5. Start both servers; one signal stops them
    let (shutdown_tx, shutdown_rx) = watch::channel(());
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(());
    });

    let addr = config.addr();
    let grpc_addr: SocketAddr = config
        .grpc_addr()
        .parse()
        .expect("invalid gRPC address");
    tracing::info!(%addr, %grpc_addr, "starting API servers");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    let http = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_requested(shutdown_rx.clone()))
        .into_future();
    let grpc = grpc.serve_with_shutdown(grpc_addr, shutdown_requested(shutdown_rx));

    let (http_result, grpc_result) = tokio::join!(http, grpc);
    if let Err(err) = http_result {
        tracing::error!(error = %err, "HTTP server error");
    }
    if let Err(err) = grpc_result {
        tracing::error!(error = %err, "gRPC server error");
    }

    state.dispatcher.clear().await;
    tracing::info!("server shut down gracefully");
}
