// ============================================================================
// Matchbook Library
// Deterministic limit-order matching core with pluggable side queues
// ============================================================================

//! # Matchbook
//!
//! A limit-order matching core driven by a replayed event stream. Each
//! book keeps its resting orders under strict price-time priority and
//! crosses every arriving order against the best opposite prices until no
//! further crossing is possible.
//!
//! ## Features
//!
//! - **Exact prices**: fixed-point i64 minor units, no float drift
//! - **Two interchangeable side queues**: a lazy-tombstone binary heap
//!   and an eager-removal sorted vector, equivalent for any event stream
//! - **Per-event error recovery**: a malformed record or duplicate id
//!   drops that event only, never the run
//! - **Deterministic replay**: arrival order in, identical books out
//!
//! ## Example
//!
//! ```rust
//! use matchbook::prelude::*;
//!
//! let events = vec![
//!     Event::AddOrder {
//!         book: "X".to_string(),
//!         order_id: "1".to_string(),
//!         side: Side::Buy,
//!         price: "10.00".parse().unwrap(),
//!         volume: 100,
//!     },
//!     Event::AddOrder {
//!         book: "X".to_string(),
//!         order_id: "2".to_string(),
//!         side: Side::Sell,
//!         price: "10.00".parse().unwrap(),
//!         volume: 40,
//!     },
//! ];
//!
//! let outcome = replay_events(events, BookConfig::default());
//! let snapshot = outcome.registry.get("X").unwrap().snapshot();
//! assert_eq!(snapshot.total_bid_volume(), 60);
//! assert!(snapshot.asks.is_empty());
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod replay;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        BookConfig, BookSnapshot, Order, OrderId, QueueStrategy, Side, SnapshotEntry,
    };
    pub use crate::engine::{
        new_side_queue, BookError, BookRegistry, BookRegistryBuilder, LazyHeap, OrderBook,
        SortedVec,
    };
    pub use crate::interfaces::SideQueue;
    pub use crate::numeric::Price;
    pub use crate::replay::{
        replay, replay_events, Event, EventError, ReplayOutcome, ReplaySummary,
    };
}

#[cfg(test)]
mod scenario_tests {
    use super::prelude::*;

    fn add(book: &str, id: &str, side: Side, price: &str, volume: u64) -> Event {
        Event::AddOrder {
            book: book.to_string(),
            order_id: id.to_string(),
            side,
            price: price.parse().unwrap(),
            volume,
        }
    }

    fn delete(book: &str, id: &str) -> Event {
        Event::DeleteOrder {
            book: book.to_string(),
            order_id: id.to_string(),
        }
    }

    fn entries(entries: &[SnapshotEntry]) -> Vec<(u64, String)> {
        entries
            .iter()
            .map(|e| (e.volume, e.price.to_decimal().round_dp(2).to_string()))
            .collect()
    }

    fn for_each_strategy(check: impl Fn(QueueStrategy)) {
        check(QueueStrategy::LazyHeap);
        check(QueueStrategy::SortedVec);
    }

    #[test]
    fn test_scenario_a_partial_fill() {
        for_each_strategy(|strategy| {
            let outcome = replay_events(
                vec![
                    add("X", "1", Side::Buy, "10.00", 100),
                    add("X", "2", Side::Buy, "10.50", 50),
                    add("X", "3", Side::Sell, "10.20", 80),
                ],
                BookConfig::new(strategy),
            );

            let snap = outcome.registry.get("X").unwrap().snapshot();
            assert_eq!(entries(&snap.bids), vec![(100, "10.00".to_string())]);
            assert_eq!(entries(&snap.asks), vec![(30, "10.20".to_string())]);
        });
    }

    #[test]
    fn test_scenario_b_add_then_delete() {
        for_each_strategy(|strategy| {
            let outcome = replay_events(
                vec![add("X", "4", Side::Buy, "10.00", 20), delete("X", "4")],
                BookConfig::new(strategy),
            );

            let snap = outcome.registry.get("X").unwrap().snapshot();
            assert!(snap.bids.is_empty());
            assert!(snap.asks.is_empty());
        });
    }

    #[test]
    fn test_scenario_c_exact_match() {
        for_each_strategy(|strategy| {
            let outcome = replay_events(
                vec![
                    add("X", "5", Side::Sell, "9.00", 40),
                    add("X", "6", Side::Buy, "9.00", 40),
                ],
                BookConfig::new(strategy),
            );

            let snap = outcome.registry.get("X").unwrap().snapshot();
            assert!(snap.is_empty());
        });
    }

    #[test]
    fn test_price_time_priority_in_snapshot() {
        for_each_strategy(|strategy| {
            // Non-crossing bids in scrambled price order, with a price tie
            let outcome = replay_events(
                vec![
                    add("X", "a", Side::Buy, "9.50", 1),
                    add("X", "b", Side::Buy, "10.00", 2),
                    add("X", "c", Side::Buy, "10.00", 3),
                    add("X", "d", Side::Buy, "9.75", 4),
                ],
                BookConfig::new(strategy),
            );

            let snap = outcome.registry.get("X").unwrap().snapshot();
            // Sorted by price desc, arrival asc on the tie
            assert_eq!(
                entries(&snap.bids),
                vec![
                    (2, "10.00".to_string()),
                    (3, "10.00".to_string()),
                    (1, "9.75".to_string()),
                    (1, "9.50".to_string()),
                ]
            );
        });
    }

    #[test]
    fn test_render_matches_snapshot_order() {
        let outcome = replay_events(
            vec![
                add("X", "1", Side::Buy, "10.00", 100),
                add("X", "2", Side::Buy, "10.50", 50),
                add("X", "3", Side::Sell, "10.20", 80),
            ],
            BookConfig::default(),
        );

        let snap = outcome.registry.get("X").unwrap().snapshot();
        assert_eq!(crate::replay::report::render_book(&snap), "100@10.00 -- 30@10.20");
    }
}
