// ============================================================================
// Replay Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Resting inserts - adds that never cross, per queue strategy
// 2. Crossing sweep - a taker consuming several resting orders
// 3. Cancellation - where the two strategies pay very different costs
// 4. Snapshot - priority-ordered live view of a populated book
// 5. Full replay - mixed multi-book event stream end to end
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matchbook::prelude::*;

fn strategies() -> [(QueueStrategy, &'static str); 2] {
    [
        (QueueStrategy::LazyHeap, "lazy-heap"),
        (QueueStrategy::SortedVec, "sorted-vec"),
    ]
}

fn price(units: i64) -> Price {
    Price::from_integer(units).unwrap()
}

/// A book with `depth` non-crossing sell orders at distinct prices.
fn populated_book(strategy: QueueStrategy, depth: i64) -> OrderBook {
    let mut book = OrderBook::new("BENCH", strategy);
    for i in 0..depth {
        book.apply_add(
            OrderId::from(format!("s{i}")),
            Side::Sell,
            price(1000 + i),
            10,
            i as u64,
        )
        .unwrap();
    }
    book
}

fn benchmark_resting_inserts(c: &mut Criterion) {
    let mut group = c.benchmark_group("resting_inserts");

    for (strategy, name) in strategies() {
        for depth in [100i64, 1000] {
            group.bench_with_input(
                BenchmarkId::new(name, depth),
                &depth,
                |b, &depth| {
                    b.iter(|| {
                        let mut book = OrderBook::new("BENCH", strategy);
                        for i in 0..depth {
                            book.apply_add(
                                OrderId::from(format!("o{i}")),
                                Side::Sell,
                                price(1000 + i),
                                10,
                                i as u64,
                            )
                            .unwrap();
                        }
                        black_box(book)
                    });
                },
            );
        }
    }

    group.finish();
}

fn benchmark_crossing_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossing_sweep");

    for (strategy, name) in strategies() {
        group.bench_function(name, |b| {
            b.iter_batched(
                || populated_book(strategy, 1000),
                |mut book| {
                    // Sweep the ten best asks in one taker
                    book.apply_add(
                        OrderId::from("taker"),
                        Side::Buy,
                        price(1009),
                        100,
                        10_000,
                    )
                    .unwrap();
                    black_box(book)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_cancellation(c: &mut Criterion) {
    let mut group = c.benchmark_group("cancellation");

    for (strategy, name) in strategies() {
        group.bench_function(name, |b| {
            b.iter_batched(
                || populated_book(strategy, 1000),
                |mut book| {
                    for i in (0..1000).step_by(7) {
                        book.apply_cancel(&OrderId::from(format!("s{i}")));
                    }
                    black_box(book)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");

    for (strategy, name) in strategies() {
        let book = populated_book(strategy, 1000);
        group.bench_function(name, |b| {
            b.iter(|| black_box(book.snapshot()));
        });
    }

    group.finish();
}

fn benchmark_full_replay(c: &mut Criterion) {
    // Mixed stream across two books: rest, cross, cancel
    let events: Vec<Event> = (0..2000i64)
        .map(|i| {
            let book = if i % 2 == 0 { "A" } else { "B" };
            match i % 5 {
                4 => Event::DeleteOrder {
                    book: book.to_string(),
                    order_id: format!("o{}", i - 4),
                },
                k => Event::AddOrder {
                    book: book.to_string(),
                    order_id: format!("o{i}"),
                    side: if k % 2 == 0 { Side::Buy } else { Side::Sell },
                    price: price(1000 + (i % 7)),
                    volume: 10,
                },
            }
        })
        .collect();

    let mut group = c.benchmark_group("full_replay");
    for (strategy, name) in strategies() {
        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(replay_events(events.iter().cloned(), BookConfig::new(strategy)))
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_resting_inserts,
    benchmark_crossing_sweep,
    benchmark_cancellation,
    benchmark_snapshot,
    benchmark_full_replay,
);
criterion_main!(benches);
