//! `pb.OrderService` server.
//!
//! [`OrderServiceServer`] routes by request path and frames messages with
//! the prost codec, the same way a tonic-generated server does, so the
//! crate builds without `protoc`.

use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use order_store::{Decimal, OrderRepository, StoreError};
use rust_decimal::prelude::ToPrimitive;
use tonic::body::Body;
use tonic::codegen::{BoxFuture, Service, StdError, http};
use tonic::server::{Grpc, NamedService, UnaryService};
use tonic::{Code, Request, Response, Status};
use tonic_prost::ProstCodec;
use usecase::{OrderInput, OrderOutput, UseCaseError};

use super::pb::{CreateOrderRequest, ListOrdersRequest, OrderList, OrderResponse};
use crate::routes::orders::AppState;

/// Fully qualified service name.
pub const SERVICE_NAME: &str = "pb.OrderService";

const CREATE_ORDER: &str = "/pb.OrderService/CreateOrder";
const LIST_ORDERS: &str = "/pb.OrderService/ListOrders";

/// The order use cases behind the gRPC methods.
pub struct OrderGrpc<R: OrderRepository> {
    state: Arc<AppState<R>>,
}

impl<R: OrderRepository> OrderGrpc<R> {
    pub fn new(state: Arc<AppState<R>>) -> Self {
        Self { state }
    }

    /// `CreateOrder` RPC.
    #[tracing::instrument(skip(self, request), fields(order_id = %request.get_ref().id))]
    pub async fn create_order(
        &self,
        request: Request<CreateOrderRequest>,
    ) -> Result<Response<OrderResponse>, Status> {
        let input = order_input(request.into_inner())?;
        let output = self
            .state
            .create_order
            .execute(input)
            .await
            .map_err(to_status)?;
        Ok(Response::new(output.into()))
    }

    /// `ListOrders` RPC.
    #[tracing::instrument(skip_all)]
    pub async fn list_orders(
        &self,
        _request: Request<ListOrdersRequest>,
    ) -> Result<Response<OrderList>, Status> {
        let orders = self.state.list_orders.execute().await.map_err(to_status)?;
        Ok(Response::new(OrderList {
            orders: orders.into_iter().map(OrderResponse::from).collect(),
        }))
    }
}

fn order_input(request: CreateOrderRequest) -> Result<OrderInput, Status> {
    let price = amount("price", request.price)?;
    let tax = amount("tax", request.tax)?;
    Ok(OrderInput::new(request.id, price, tax))
}

/// Converts a wire amount; NaN, infinities and out-of-range values are rejected.
fn amount(field: &str, value: f64) -> Result<Decimal, Status> {
    Decimal::try_from(value).map_err(|_| {
        Status::invalid_argument(format!("Invalid {field}: {value} is not a decimal amount"))
    })
}

impl From<OrderOutput> for OrderResponse {
    fn from(output: OrderOutput) -> Self {
        Self {
            id: output.id,
            price: output.price.to_f64().unwrap_or_default(),
            tax: output.tax.to_f64().unwrap_or_default(),
            final_price: output.final_price.to_f64().unwrap_or_default(),
        }
    }
}

/// Maps a use case error to a gRPC status, mirroring the HTTP mapping.
pub fn to_status(err: UseCaseError) -> Status {
    match &err {
        UseCaseError::Validation(_) => Status::invalid_argument(err.to_string()),
        UseCaseError::Store(StoreError::DuplicateKey(_)) => Status::already_exists(err.to_string()),
        UseCaseError::Store(_) => {
            tracing::error!(error = %err, "order store failure");
            Status::internal(err.to_string())
        }
        UseCaseError::Dispatch(_) => {
            tracing::error!(error = %err, "order saved but event dispatch failed");
            Status::internal(format!(
                "Order was saved, but notifying subscribers failed. {err}"
            ))
        }
    }
}

/// Tower service for `pb.OrderService`.
pub struct OrderServiceServer<R: OrderRepository> {
    inner: Arc<OrderGrpc<R>>,
}

impl<R: OrderRepository> OrderServiceServer<R> {
    pub fn new(state: Arc<AppState<R>>) -> Self {
        Self {
            inner: Arc::new(OrderGrpc::new(state)),
        }
    }
}

impl<R: OrderRepository> Clone for OrderServiceServer<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: OrderRepository> NamedService for OrderServiceServer<R> {
    const NAME: &'static str = SERVICE_NAME;
}

struct CreateOrderCall<R: OrderRepository>(Arc<OrderGrpc<R>>);

impl<R: OrderRepository + 'static> UnaryService<CreateOrderRequest> for CreateOrderCall<R> {
    type Response = OrderResponse;
    type Future = BoxFuture<Response<OrderResponse>, Status>;

    fn call(&mut self, request: Request<CreateOrderRequest>) -> Self::Future {
        let inner = Arc::clone(&self.0);
        Box::pin(async move { inner.create_order(request).await })
    }
}

struct ListOrdersCall<R: OrderRepository>(Arc<OrderGrpc<R>>);

impl<R: OrderRepository + 'static> UnaryService<ListOrdersRequest> for ListOrdersCall<R> {
    type Response = OrderList;
    type Future = BoxFuture<Response<OrderList>, Status>;

    fn call(&mut self, request: Request<ListOrdersRequest>) -> Self::Future {
        let inner = Arc::clone(&self.0);
        Box::pin(async move { inner.list_orders(request).await })
    }
}

impl<R, B> Service<http::Request<B>> for OrderServiceServer<R>
where
    R: OrderRepository + 'static,
    B: tonic::codegen::Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    type Response = http::Response<Body>;
    type Error = Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<B>) -> Self::Future {
        let inner = Arc::clone(&self.inner);
        match req.uri().path() {
            CREATE_ORDER => Box::pin(async move {
                let mut grpc = Grpc::new(ProstCodec::default());
                Ok(grpc.unary(CreateOrderCall(inner), req).await)
            }),
            LIST_ORDERS => Box::pin(async move {
                let mut grpc = Grpc::new(ProstCodec::default());
                Ok(grpc.unary(ListOrdersCall(inner), req).await)
            }),
            _ => Box::pin(async move { Ok(unimplemented()) }),
        }
    }
}

fn unimplemented() -> http::Response<Body> {
    let mut response = http::Response::new(Body::empty());
    let headers = response.headers_mut();
    headers.insert(Status::GRPC_STATUS, (Code::Unimplemented as i32).into());
    headers.insert(
        http::header::CONTENT_TYPE,
        tonic::metadata::GRPC_CONTENT_TYPE,
    );
    response
}
