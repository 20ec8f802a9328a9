// ============================================================================
// Replay Demo
// ============================================================================

use matchbook::prelude::*;
use matchbook::replay::report;

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

fn main() {
    #[cfg(feature = "logging")]
    matchbook::utils::init_tracing();

    // A small stream over two books: resting orders, a crossing taker,
    // and a cancellation.
    let events = vec![
        add("book-1", "1", Side::Buy, "10.00", 100),
        add("book-1", "2", Side::Buy, "10.50", 50),
        add("book-1", "3", Side::Sell, "10.20", 80),
        add("book-2", "1", Side::Sell, "99.00", 10),
        add("book-2", "2", Side::Sell, "98.50", 25),
        add("book-2", "3", Side::Buy, "98.00", 40),
        add("book-1", "4", Side::Buy, "9.75", 20),
        delete("book-1", "4"),
    ];

    let outcome = replay_events(events, BookConfig::default());

    print!(
        "{}",
        report::render_report(&outcome.registry.snapshots(), &outcome.summary)
    );

    println!(
        "\nApplied {} events ({} rejected) across {} books.",
        outcome.summary.events_applied,
        outcome.summary.events_rejected,
        outcome.registry.len()
    );
}
