// ============================================================================
// Book Registry
// Lazily-created books keyed by name, plus the arrival sequence counter
// ============================================================================

use crate::domain::{BookConfig, BookSnapshot, OrderId};
use crate::engine::{BookError, OrderBook};
use crate::replay::Event;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// All books of one replay run.
///
/// Books are created on first reference and never removed; the registry
/// lives exactly as long as the run and is passed around explicitly
/// rather than hiding behind a global. It also owns the arrival sequence
/// counter: every applied event gets the next number, assigned here and
/// exposed only through the priority ordering it produces.
pub struct BookRegistry {
    config: BookConfig,
    books: HashMap<String, OrderBook>,
    /// Book keys in first-reference order, for deterministic reporting
    insertion_order: Vec<String>,
    next_sequence: u64,
}

impl BookRegistry {
    pub fn new(config: BookConfig) -> Self {
        Self {
            config,
            books: HashMap::new(),
            insertion_order: Vec::new(),
            next_sequence: 0,
        }
    }

    pub fn config(&self) -> BookConfig {
        self.config
    }

    /// The existing book for `key`, or a new empty one on first use.
    pub fn resolve(&mut self, key: &str) -> &mut OrderBook {
        match self.books.entry(key.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                tracing::debug!(book = key, "creating book");
                self.insertion_order.push(key.to_string());
                entry.insert(OrderBook::new(key, self.config.strategy))
            },
        }
    }

    /// Apply one event, assigning it the next arrival sequence number.
    ///
    /// # Errors
    /// Propagates `BookError` from the target book; the event is rejected
    /// and the registry stays consistent for the next one.
    pub fn apply(&mut self, event: Event) -> Result<(), BookError> {
        let seq = self.next_sequence;
        self.next_sequence += 1;

        match event {
            Event::AddOrder {
                book,
                order_id,
                side,
                price,
                volume,
            } => self
                .resolve(&book)
                .apply_add(OrderId::from(order_id), side, price, volume, seq),
            Event::DeleteOrder { book, order_id } => {
                self.resolve(&book).apply_cancel(&OrderId::from(order_id));
                Ok(())
            },
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&OrderBook> {
        self.books.get(key)
    }

    /// Books in first-reference order.
    pub fn iter(&self) -> impl Iterator<Item = &OrderBook> {
        self.insertion_order
            .iter()
            .filter_map(|key| self.books.get(key))
    }

    /// Snapshot every book, in first-reference order.
    pub fn snapshots(&self) -> Vec<BookSnapshot> {
        self.iter().map(OrderBook::snapshot).collect()
    }
}
