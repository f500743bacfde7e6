//! Integration tests for the create/list order flow.
//!
//! These tests wire both use cases to one repository and one dispatcher,
//! the way the HTTP server does.

use std::sync::Arc;

use async_trait::async_trait;
use events::{DispatchError, Event, EventDispatcher, EventHandler, HandlerError};
use order_store::{InMemoryOrderRepository, Order, OrderRepository, StoreError};
use rust_decimal_macros::dec;
use tokio::sync::RwLock;
use usecase::{
    CreateOrderUseCase, ListOrdersUseCase, ORDER_CREATED, OrderCreatedLogger, OrderInput,
    OrderOutput, UseCaseError, order_created,
};

/// Records every payload it receives, along with the repository total at that moment.
struct RecordingSubscriber {
    repository: InMemoryOrderRepository,
    seen: RwLock<Vec<(OrderOutput, u64)>>,
}

#[async_trait]
impl EventHandler<OrderOutput> for RecordingSubscriber {
    fn name(&self) -> &str {
        "RecordingSubscriber"
    }

    async fn handle(&self, event: &Event<OrderOutput>) -> Result<(), HandlerError> {
        let payload = event
            .payload()
            .cloned()
            .ok_or_else(|| HandlerError::new("missing payload"))?;
        let total = self
            .repository
            .get_total()
            .await
            .map_err(|e| HandlerError::new(e.to_string()))?;
        self.seen.write().await.push((payload, total));
        Ok(())
    }
}

struct FailingSubscriber;

#[async_trait]
impl EventHandler<OrderOutput> for FailingSubscriber {
    fn name(&self) -> &str {
        "FailingSubscriber"
    }

    async fn handle(&self, _event: &Event<OrderOutput>) -> Result<(), HandlerError> {
        Err(HandlerError::new("broker unavailable"))
    }
}

/// A repository whose backing store is always down.
struct UnavailableRepository;

#[async_trait]
impl OrderRepository for UnavailableRepository {
    async fn save(&self, _order: &Order) -> order_store::Result<()> {
        Err(StoreError::Storage(sqlx::Error::PoolClosed))
    }

    async fn find_all(&self) -> order_store::Result<Vec<Order>> {
        Err(StoreError::Storage(sqlx::Error::PoolClosed))
    }

    async fn get_total(&self) -> order_store::Result<u64> {
        Err(StoreError::Storage(sqlx::Error::PoolClosed))
    }
}

struct App {
    create: CreateOrderUseCase<InMemoryOrderRepository>,
    list: ListOrdersUseCase<InMemoryOrderRepository>,
    dispatcher: Arc<EventDispatcher<OrderOutput>>,
    subscriber: Arc<RecordingSubscriber>,
}

async fn setup() -> App {
    let repository = InMemoryOrderRepository::new();
    let dispatcher = Arc::new(EventDispatcher::new());
    let subscriber = Arc::new(RecordingSubscriber {
        repository: repository.clone(),
        seen: RwLock::new(Vec::new()),
    });
    dispatcher
        .register(ORDER_CREATED, subscriber.clone())
        .await
        .unwrap();

    App {
        create: CreateOrderUseCase::new(repository.clone(), order_created(), dispatcher.clone()),
        list: ListOrdersUseCase::new(repository),
        dispatcher,
        subscriber,
    }
}

mod create_and_list {
    use super::*;

    #[tokio::test]
    async fn created_order_is_listed() {
        let app = setup().await;

        let output = app
            .create
            .execute(OrderInput::new("abc", dec!(100.50), dec!(10.05)))
            .await
            .unwrap();

        let expected = OrderOutput {
            id: "abc".to_string(),
            price: dec!(100.50),
            tax: dec!(10.05),
            final_price: dec!(110.55),
        };
        assert_eq!(output, expected);
        assert_eq!(app.list.execute().await.unwrap(), vec![expected]);
    }

    #[tokio::test]
    async fn duplicate_create_keeps_single_entry() {
        let app = setup().await;
        let input = OrderInput::new("abc", dec!(100.50), dec!(10.05));

        app.create.execute(input.clone()).await.unwrap();
        let second = app.create.execute(input).await;

        assert!(matches!(
            second,
            Err(UseCaseError::Store(StoreError::DuplicateKey(_)))
        ));
        assert_eq!(app.list.execute().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn negative_price_is_rejected_and_not_listed() {
        let app = setup().await;

        let result = app
            .create
            .execute(OrderInput::new("abc", dec!(-1), dec!(10.05)))
            .await;

        assert!(matches!(result, Err(UseCaseError::Validation(_))));
        assert!(app.list.execute().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_id_is_rejected() {
        let app = setup().await;

        let result = app
            .create
            .execute(OrderInput::new("", dec!(1), dec!(1)))
            .await;

        assert!(matches!(result, Err(UseCaseError::Validation(_))));
    }
}

mod events_after_create {
    use super::*;

    #[tokio::test]
    async fn event_carries_output_and_follows_save() {
        let app = setup().await;

        let output = app
            .create
            .execute(OrderInput::new("abc", dec!(1), dec!(2)))
            .await
            .unwrap();

        let seen = app.subscriber.seen.read().await;
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, output);
        // The order was already stored when the subscriber ran.
        assert_eq!(seen[0].1, 1);
    }

    #[tokio::test]
    async fn failed_create_dispatches_nothing() {
        let app = setup().await;

        app.create
            .execute(OrderInput::new("abc", dec!(1), dec!(1)))
            .await
            .unwrap();
        let _ = app
            .create
            .execute(OrderInput::new("abc", dec!(1), dec!(1)))
            .await;
        let _ = app
            .create
            .execute(OrderInput::new("neg", dec!(-5), dec!(1)))
            .await;

        assert_eq!(app.subscriber.seen.read().await.len(), 1);
    }

    #[tokio::test]
    async fn each_create_gets_its_own_payload() {
        let app = setup().await;

        for id in ["a", "b", "c"] {
            app.create
                .execute(OrderInput::new(id, dec!(1), dec!(0)))
                .await
                .unwrap();
        }

        let ids: Vec<_> = app
            .subscriber
            .seen
            .read()
            .await
            .iter()
            .map(|(o, _)| o.id.clone())
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn dispatch_failure_is_reported_but_order_stays_saved() {
        let app = setup().await;
        app.dispatcher
            .register(ORDER_CREATED, Arc::new(FailingSubscriber))
            .await
            .unwrap();

        let result = app
            .create
            .execute(OrderInput::new("abc", dec!(1), dec!(1)))
            .await;

        assert!(matches!(
            result,
            Err(UseCaseError::Dispatch(DispatchError::HandlersFailed { .. }))
        ));
        assert_eq!(app.list.execute().await.unwrap().len(), 1);
        // The recording subscriber still ran.
        assert_eq!(app.subscriber.seen.read().await.len(), 1);
    }

    #[tokio::test]
    async fn logger_subscriber_accepts_created_orders() {
        let app = setup().await;
        app.dispatcher
            .register(ORDER_CREATED, Arc::new(OrderCreatedLogger))
            .await
            .unwrap();

        app.create
            .execute(OrderInput::new("logged", dec!(3), dec!(0.3)))
            .await
            .unwrap();
    }
}

mod storage_failures {
    use super::*;

    #[tokio::test]
    async fn storage_error_on_save_skips_dispatch() {
        let repository = InMemoryOrderRepository::new();
        let dispatcher = Arc::new(EventDispatcher::new());
        let subscriber = Arc::new(RecordingSubscriber {
            repository,
            seen: RwLock::new(Vec::new()),
        });
        dispatcher
            .register(ORDER_CREATED, subscriber.clone())
            .await
            .unwrap();

        let create = CreateOrderUseCase::new(UnavailableRepository, order_created(), dispatcher);
        let result = create
            .execute(OrderInput::new("abc", dec!(1), dec!(1)))
            .await;

        assert!(matches!(
            result,
            Err(UseCaseError::Store(StoreError::Storage(_)))
        ));
        assert!(subscriber.seen.read().await.is_empty());
    }

    #[tokio::test]
    async fn storage_error_on_list_is_returned_verbatim() {
        let list = ListOrdersUseCase::new(UnavailableRepository);

        let err = list.execute().await.unwrap_err();

        assert!(matches!(
            err,
            UseCaseError::Store(StoreError::Storage(sqlx::Error::PoolClosed))
        ));
    }
}

mod concurrency {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_all_dispatch() {
        let app = Arc::new(setup().await);

        let tasks: Vec<_> = (0..50)
            .map(|i| {
                let app = Arc::clone(&app);
                tokio::spawn(async move {
                    app.create
                        .execute(OrderInput::new(format!("order-{i}"), dec!(10), dec!(1)))
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(app.list.execute().await.unwrap().len(), 50);
        assert_eq!(app.subscriber.seen.read().await.len(), 50);
    }
}
