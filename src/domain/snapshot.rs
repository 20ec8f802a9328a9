// ============================================================================
// Book Snapshot
// ============================================================================

use crate::numeric::Price;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One live resting order as seen from outside the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SnapshotEntry {
    pub volume: u64,
    pub price: Price,
}

/// Immutable view of a book's live orders, both sides in priority order.
///
/// Tombstoned entries are already filtered out; every entry here has
/// positive volume.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BookSnapshot {
    pub book: String,
    /// Bid side, best (highest price, earliest arrival) first
    pub bids: Vec<SnapshotEntry>,
    /// Ask side, best (lowest price, earliest arrival) first
    pub asks: Vec<SnapshotEntry>,
}

impl BookSnapshot {
    pub fn new(book: String, bids: Vec<SnapshotEntry>, asks: Vec<SnapshotEntry>) -> Self {
        Self { book, bids, asks }
    }

    pub fn best_bid(&self) -> Option<Price> {
        self.bids.first().map(|e| e.price)
    }

    pub fn best_ask(&self) -> Option<Price> {
        self.asks.first().map(|e| e.price)
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    pub fn total_bid_volume(&self) -> u64 {
        self.bids.iter().map(|e| e.volume).sum()
    }

    pub fn total_ask_volume(&self) -> u64 {
        self.asks.iter().map(|e| e.volume).sum()
    }
}
