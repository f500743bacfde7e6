use criterion::{Criterion, criterion_group, criterion_main};
use order_store::{InMemoryOrderRepository, Order, OrderRepository};
use rust_decimal_macros::dec;

fn make_order(i: usize) -> Order {
    Order::new(format!("order-{i}"), dec!(100.50), dec!(10.05)).unwrap()
}

fn bench_save_single_order(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("order_store/save_single_order", |b| {
        b.iter(|| {
            rt.block_on(async {
                let store = InMemoryOrderRepository::new();
                store.save(&make_order(1)).await.unwrap();
            });
        });
    });
}

fn bench_find_all_1000(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryOrderRepository::new();

    // Pre-populate with 1000 orders
    rt.block_on(async {
        for i in 0..1000 {
            store.save(&make_order(i)).await.unwrap();
        }
    });

    c.bench_function("order_store/find_all_1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                let orders = store.find_all().await.unwrap();
                assert_eq!(orders.len(), 1000);
            });
        });
    });
}

fn bench_get_total(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryOrderRepository::new();

    rt.block_on(async {
        for i in 0..1000 {
            store.save(&make_order(i)).await.unwrap();
        }
    });

    c.bench_function("order_store/get_total", |b| {
        b.iter(|| {
            rt.block_on(async {
                store.get_total().await.unwrap();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_save_single_order,
    bench_find_all_1000,
    bench_get_total
);
criterion_main!(benches);
