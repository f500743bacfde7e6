use std::sync::Arc;

use async_trait::async_trait;
use criterion::{Criterion, criterion_group, criterion_main};
use events::{Event, EventDispatcher, EventHandler, HandlerError};

struct NoopHandler;

#[async_trait]
impl EventHandler<u64> for NoopHandler {
    fn name(&self) -> &str {
        "noop"
    }

    async fn handle(&self, _event: &Event<u64>) -> Result<(), HandlerError> {
        Ok(())
    }
}

fn bench_dispatch_no_handlers(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let dispatcher = EventDispatcher::<u64>::new();
    let event = Event::new("Unobserved").with_payload(1);

    c.bench_function("dispatcher/dispatch_no_handlers", |b| {
        b.iter(|| {
            rt.block_on(async {
                dispatcher.dispatch(&event).await.unwrap();
            });
        });
    });
}

fn bench_dispatch_10_handlers(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let dispatcher = EventDispatcher::<u64>::new();
    rt.block_on(async {
        for _ in 0..10 {
            dispatcher
                .register("OrderCreated", Arc::new(NoopHandler))
                .await
                .unwrap();
        }
    });
    let event = Event::new("OrderCreated").with_payload(1);

    c.bench_function("dispatcher/dispatch_10_handlers", |b| {
        b.iter(|| {
            rt.block_on(async {
                dispatcher.dispatch(&event).await.unwrap();
            });
        });
    });
}

criterion_group!(benches, bench_dispatch_no_handlers, bench_dispatch_10_handlers);
criterion_main!(benches);
