// ============================================================================
// Order Domain Model
// ============================================================================

use crate::numeric::Price;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// ============================================================================
// Value Objects
// ============================================================================

/// Opaque order identifier, unique among live orders within one book.
///
/// Identifiers come from the event source verbatim; the core never
/// synthesises them. Backed by `Arc<str>` because the same id is held by
/// the book index and by queue entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(Arc<str>);

impl OrderId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Parse an event-log side token. Only the exact upper-case tokens of
    /// the log format are accepted; anything else is a malformed event.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "BUY" => Some(Side::Buy),
            "SELL" => Some(Side::Sell),
            _ => None,
        }
    }

    /// Crossing test: does a taker at `taker_price` trade against a
    /// resting maker at `maker_price`?
    #[inline]
    pub fn crosses(self, taker_price: Price, maker_price: Price) -> bool {
        match self {
            Side::Buy => taker_price >= maker_price,
            Side::Sell => taker_price <= maker_price,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => f.write_str("BUY"),
            Side::Sell => f.write_str("SELL"),
        }
    }
}

// ============================================================================
// Order Entity
// ============================================================================

/// A resting or incoming limit order.
///
/// The remaining volume is the order's only mutable field and doubles as
/// its liveness flag: zero volume means the order is dead, whether it was
/// filled or cancelled. Storing it in an `AtomicU64` lets the book index
/// and the side queue share one `Arc<Order>`; a lazy-tombstone cancel is
/// just the shared cell dropping to zero, with the heap entry discarded
/// whenever it next surfaces.
#[derive(Debug)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    /// Arrival position in the replayed stream. Assigned once by the
    /// registry, never reassigned; breaks price ties (earlier wins).
    pub sequence: u64,

    remaining: AtomicU64,
}

impl Order {
    pub fn new(id: OrderId, side: Side, price: Price, volume: u64, sequence: u64) -> Self {
        Self {
            id,
            side,
            price,
            sequence,
            remaining: AtomicU64::new(volume),
        }
    }

    /// Unmatched volume still resting. Zero means dead.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.remaining.load(Ordering::Acquire)
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.remaining() > 0
    }

    /// Consume `volume` from the order.
    ///
    /// Returns false without mutating if less than `volume` remains; the
    /// matching loop always passes `min(taker, maker)` so a false return
    /// there would indicate a bookkeeping bug.
    pub fn try_fill(&self, volume: u64) -> bool {
        loop {
            let current = self.remaining.load(Ordering::Acquire);
            if current < volume {
                return false;
            }
            if self
                .remaining
                .compare_exchange(current, current - volume, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                return true;
            }
        }
    }

    /// Kill the order in place, returning the volume it still carried.
    /// Idempotent: a second call returns 0.
    pub fn cancel(&self) -> u64 {
        self.remaining.swap(0, Ordering::AcqRel)
    }
}

impl Clone for Order {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            side: self.side,
            price: self.price,
            sequence: self.sequence,
            remaining: AtomicU64::new(self.remaining()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(volume: u64) -> Order {
        Order::new(
            OrderId::from("o1"),
            Side::Buy,
            "10.00".parse().unwrap(),
            volume,
            1,
        )
    }

    #[test]
    fn test_fill_decrements_remaining() {
        let o = order(100);
        assert!(o.try_fill(30));
        assert_eq!(o.remaining(), 70);
        assert!(o.is_live());

        assert!(o.try_fill(70));
        assert_eq!(o.remaining(), 0);
        assert!(!o.is_live());
    }

    #[test]
    fn test_overfill_rejected() {
        let o = order(10);
        assert!(!o.try_fill(11));
        assert_eq!(o.remaining(), 10);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let o = order(25);
        assert_eq!(o.cancel(), 25);
        assert!(!o.is_live());
        assert_eq!(o.cancel(), 0);
    }

    #[test]
    fn test_crossing() {
        let ten: Price = "10.00".parse().unwrap();
        let eleven: Price = "11.00".parse().unwrap();

        assert!(Side::Buy.crosses(eleven, ten));
        assert!(Side::Buy.crosses(ten, ten));
        assert!(!Side::Buy.crosses(ten, eleven));

        assert!(Side::Sell.crosses(ten, eleven));
        assert!(Side::Sell.crosses(ten, ten));
        assert!(!Side::Sell.crosses(eleven, ten));
    }

    #[test]
    fn test_side_tokens() {
        assert_eq!(Side::from_token("BUY"), Some(Side::Buy));
        assert_eq!(Side::from_token("SELL"), Some(Side::Sell));
        assert_eq!(Side::from_token("buy"), None);
        assert_eq!(Side::from_token("HOLD"), None);
    }
}
