// ============================================================================
// Side Queue Interface
// Contract for one side's priority structure
// ============================================================================

use crate::domain::{Order, Side};
use crate::numeric::Price;
use std::sync::Arc;

/// Signed priority key for a price on a given side.
///
/// Both queue implementations rank by this key descending, then by
/// arrival sequence ascending, which yields strict price-time priority:
/// bids rank high prices first, asks rank low prices first, and the
/// earlier arrival always wins a price tie. The side is a construction
/// parameter of the queue, not a comparison branch inside `Order`.
#[inline]
pub fn priority_key(side: Side, price: Price) -> i64 {
    match side {
        Side::Buy => price.raw_value(),
        Side::Sell => -price.raw_value(),
    }
}

/// Strategy interface for one side of one book.
///
/// Implementations hold `Arc<Order>`s shared with the book index. An
/// order whose remaining volume is zero is dead wherever it still sits;
/// `peek_best`/`pop_best` must never surface a dead order, and
/// `live_orders` must filter them out. Implementations:
/// `LazyHeap` (tombstoning binary heap), `SortedVec` (eager removal).
pub trait SideQueue: Send {
    /// The side this queue was built for.
    fn side(&self) -> Side;

    /// Add a live order. Caller guarantees `order.side == self.side()`
    /// and positive remaining volume.
    fn insert(&mut self, order: Arc<Order>);

    /// The highest-priority live order, or None if only dead entries (or
    /// nothing) remain. Takes `&mut self` so the lazy strategy can drop
    /// dead front entries as it finds them.
    fn peek_best(&mut self) -> Option<Arc<Order>>;

    /// Remove and return the highest-priority live order, discarding any
    /// dead entries ahead of it.
    fn pop_best(&mut self) -> Option<Arc<Order>>;

    /// Mark the referenced order dead, physically removing it where the
    /// strategy does so eagerly. Returns false if the order was already
    /// dead.
    fn cancel(&mut self, order: &Order) -> bool;

    /// All live orders in priority order. Used for snapshots.
    fn live_orders(&self) -> Vec<Arc<Order>>;

    /// Number of live orders.
    fn live_len(&self) -> usize;

    /// Strategy name for logging.
    fn name(&self) -> &'static str;
}
