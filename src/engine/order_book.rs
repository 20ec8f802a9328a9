// ============================================================================
// Order Book
// Two side queues, a live-order index, and the matching loop
// ============================================================================

use crate::domain::{BookSnapshot, Order, OrderId, QueueStrategy, Side, SnapshotEntry};
use crate::engine::factory::new_side_queue;
use crate::interfaces::SideQueue;
use crate::numeric::Price;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Logic errors an order book reports back to the replay driver.
///
/// These reject a single event; the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// An add carried an identifier that is still alive in this book.
    /// Overwriting the resting order would break identifier uniqueness,
    /// so the new add is refused instead.
    DuplicateOrderId { book: String, id: OrderId },
}

impl fmt::Display for BookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookError::DuplicateOrderId { book, id } => {
                write!(f, "order id {id} is already alive in book {book}")
            },
        }
    }
}

impl std::error::Error for BookError {}

/// One instrument's order book.
///
/// Owns a bid queue, an ask queue and an index of live orders by id. The
/// index and the queues change only through `apply_add`/`apply_cancel`,
/// each of which commits its index and queue effects together, so the
/// pair never disagrees about which orders are alive.
pub struct OrderBook {
    name: String,
    bids: Box<dyn SideQueue>,
    asks: Box<dyn SideQueue>,
    index: HashMap<OrderId, Arc<Order>>,
}

impl OrderBook {
    pub fn new(name: impl Into<String>, strategy: QueueStrategy) -> Self {
        Self {
            name: name.into(),
            bids: new_side_queue(strategy, Side::Buy),
            asks: new_side_queue(strategy, Side::Sell),
            index: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of live orders across both sides.
    pub fn live_orders(&self) -> usize {
        self.index.len()
    }

    /// Apply an add-order event: cross against the opposite side while
    /// possible, then rest whatever volume survives.
    ///
    /// `seq` is the event's arrival sequence number, assigned upstream by
    /// the registry; it decides price ties for as long as the order rests.
    ///
    /// # Errors
    /// `DuplicateOrderId` if `id` is still alive in this book. The book
    /// is left untouched in that case.
    pub fn apply_add(
        &mut self,
        id: OrderId,
        side: Side,
        price: Price,
        volume: u64,
        seq: u64,
    ) -> Result<(), BookError> {
        if self.index.contains_key(&id) {
            return Err(BookError::DuplicateOrderId {
                book: self.name.clone(),
                id,
            });
        }

        let incoming = Arc::new(Order::new(id, side, price, volume, seq));
        self.match_incoming(&incoming);

        if incoming.is_live() {
            let own = match side {
                Side::Buy => &mut self.bids,
                Side::Sell => &mut self.asks,
            };
            own.insert(Arc::clone(&incoming));
            self.index.insert(incoming.id.clone(), incoming);
        }

        #[cfg(debug_assertions)]
        self.assert_uncrossed();

        Ok(())
    }

    /// Apply a cancel event. Unknown or already-dead identifiers are a
    /// no-op: cancellation is idempotent by contract.
    ///
    /// Returns true if a live order was cancelled.
    pub fn apply_cancel(&mut self, id: &OrderId) -> bool {
        let Some(order) = self.index.remove(id) else {
            return false;
        };
        let own = match order.side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        own.cancel(&order)
    }

    /// The live orders of both sides in priority order, tombstones
    /// filtered out.
    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot::new(
            self.name.clone(),
            side_entries(self.bids.as_ref()),
            side_entries(self.asks.as_ref()),
        )
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Consume the opposite side while the incoming order still crosses
    /// its best resting order.
    ///
    /// Termination: each iteration either exhausts the incoming order,
    /// fully consumes the resting top (unindexing it), or finds the top
    /// no longer crosses, and priority order guarantees nothing deeper
    /// could cross once the top does not.
    fn match_incoming(&mut self, incoming: &Arc<Order>) {
        // Split borrows: the loop walks one queue while trimming the index.
        let Self {
            name, bids, asks, index, ..
        } = self;
        let opposite = match incoming.side {
            Side::Buy => asks,
            Side::Sell => bids,
        };

        while incoming.is_live() {
            let Some(top) = opposite.peek_best() else {
                break;
            };
            if !incoming.side.crosses(incoming.price, top.price) {
                break;
            }

            let matched = incoming.remaining().min(top.remaining());
            let filled = top.try_fill(matched) && incoming.try_fill(matched);
            debug_assert!(filled, "matched volume exceeded a live remainder");

            tracing::trace!(
                book = %name,
                taker = %incoming.id,
                maker = %top.id,
                price = %top.price,
                volume = matched,
                "orders matched"
            );

            if !top.is_live() {
                // The queue discards the dead entry the next time it
                // surfaces; only the index needs updating now.
                index.remove(&top.id);
            }
        }
    }

    #[cfg(debug_assertions)]
    fn assert_uncrossed(&mut self) {
        if let (Some(bid), Some(ask)) = (self.bids.peek_best(), self.asks.peek_best()) {
            debug_assert!(
                bid.price < ask.price,
                "book {} crossed: bid {} >= ask {}",
                self.name,
                bid.price,
                ask.price
            );
        }
    }
}

fn side_entries(queue: &dyn SideQueue) -> Vec<SnapshotEntry> {
    queue
        .live_orders()
        .into_iter()
        .map(|o| SnapshotEntry {
            volume: o.remaining(),
            price: o.price,
        })
        .collect()
}
