use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{NaiveTime, TimeDelta};
use checkout_analytics::{AggregationEngine, Snapshot};
use checkout_customers::Customer;
use checkout_products::Product;

/// Synthetic day: `customers` arrivals spread over 08:00–20:00, 200 products,
/// 40 zip codes, five cart lines per customer.
fn synthetic_snapshot(customers: usize) -> Snapshot {
    let open = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    let close = NaiveTime::from_hms_opt(20, 0, 0).unwrap();

    let catalog: Vec<Product> = (0..200)
        .map(|i| Product::new(format!("{i:05}"), format!("Product {i}"), 0.25 + (i % 40) as f64))
        .collect();

    let day_seconds = (close - open).num_seconds();
    let queue = (0..customers).map(|i| {
        let offset = (i as i64 * day_seconds) / customers as i64;
        let mut customer = Customer::new(open + TimeDelta::seconds(offset), format!("{:04}AB", 1000 + i % 40));
        for line in 0..5 {
            customer
                .add_to_cart(catalog[(i * 7 + line * 13) % catalog.len()].clone(), (line + 1) as u32)
                .unwrap();
        }
        customer
    });

    Snapshot::new("bench", open, close, catalog.clone(), queue).unwrap()
}

fn bench_grouping_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping_queries");

    for customers in [100usize, 1_000, 10_000].iter() {
        let snapshot = synthetic_snapshot(*customers);
        let engine = AggregationEngine::new(&snapshot);
        group.throughput(Throughput::Elements(*customers as u64));

        group.bench_with_input(BenchmarkId::new("product_counts", customers), customers, |b, _| {
            b.iter(|| black_box(engine.product_counts()));
        });

        group.bench_with_input(
            BenchmarkId::new("most_popular_products", customers),
            customers,
            |b, _| {
                b.iter(|| black_box(engine.most_popular_products()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("most_bought_product_by_zipcode", customers),
            customers,
            |b, _| {
                b.iter(|| black_box(engine.most_bought_product_by_zipcode()));
            },
        );
    }

    group.finish();
}

fn bench_revenue_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("revenue_queries");
    let snapshot = synthetic_snapshot(10_000);
    let engine = AggregationEngine::new(&snapshot);

    group.bench_function("revenue_by_zipcode", |b| {
        b.iter(|| black_box(engine.revenue_by_zipcode()));
    });

    group.bench_function("customers_with_highest_bill", |b| {
        b.iter(|| black_box(engine.customers_with_highest_bill()));
    });

    for minutes in [5i64, 15, 60].iter() {
        group.bench_with_input(
            BenchmarkId::new("revenue_per_interval", minutes),
            minutes,
            |b, &minutes| {
                b.iter(|| black_box(engine.revenue_per_interval(black_box(minutes)).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_grouping_queries, bench_revenue_queries);
criterion_main!(benches);
