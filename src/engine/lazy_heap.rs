// ============================================================================
// Lazy-Tombstone Heap Queue
// Binary heap with deferred removal of dead orders
// ============================================================================

use crate::domain::{Order, Side};
use crate::interfaces::{priority_key, SideQueue};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;

/// Heap element: priority key plus the shared order.
///
/// Ranks by key descending, then arrival sequence ascending, so the
/// heap's max element is the side's best order.
struct HeapEntry {
    key: i64,
    order: Arc<Order>,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.order.sequence == other.order.sequence
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| other.order.sequence.cmp(&self.order.sequence))
    }
}

/// Binary-heap side queue with lazy deletion.
///
/// Cancellation tombstones the shared order (volume drops to zero) and
/// leaves the heap entry where it is; `peek_best`/`pop_best` discard dead
/// entries as they reach the front, amortising the removal over later
/// operations. Insert and cancel are O(log n) and O(1); tombstones hold
/// memory until they surface.
pub struct LazyHeap {
    side: Side,
    heap: BinaryHeap<HeapEntry>,
}

impl LazyHeap {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            heap: BinaryHeap::new(),
        }
    }

    /// Drop dead entries off the front until a live order (or nothing)
    /// remains on top.
    fn discard_dead_front(&mut self) {
        while let Some(entry) = self.heap.peek() {
            if entry.order.is_live() {
                break;
            }
            self.heap.pop();
        }
    }
}

impl SideQueue for LazyHeap {
    fn side(&self) -> Side {
        self.side
    }

    fn insert(&mut self, order: Arc<Order>) {
        let key = priority_key(self.side, order.price);
        self.heap.push(HeapEntry { key, order });
    }

    fn peek_best(&mut self) -> Option<Arc<Order>> {
        self.discard_dead_front();
        self.heap.peek().map(|e| Arc::clone(&e.order))
    }

    fn pop_best(&mut self) -> Option<Arc<Order>> {
        self.discard_dead_front();
        self.heap.pop().map(|e| e.order)
    }

    fn cancel(&mut self, order: &Order) -> bool {
        order.cancel() > 0
    }

    fn live_orders(&self) -> Vec<Arc<Order>> {
        let mut live: Vec<&HeapEntry> = self.heap.iter().filter(|e| e.order.is_live()).collect();
        // Heap iteration order is unspecified; rank explicitly.
        live.sort_by(|a, b| {
            b.key
                .cmp(&a.key)
                .then_with(|| a.order.sequence.cmp(&b.order.sequence))
        });
        live.into_iter().map(|e| Arc::clone(&e.order)).collect()
    }

    fn live_len(&self) -> usize {
        self.heap.iter().filter(|e| e.order.is_live()).count()
    }

    fn name(&self) -> &'static str {
        "lazy-heap"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderId;
    use crate::numeric::Price;

    fn arc_order(id: &str, side: Side, price: &str, volume: u64, seq: u64) -> Arc<Order> {
        Arc::new(Order::new(
            OrderId::from(id),
            side,
            price.parse::<Price>().unwrap(),
            volume,
            seq,
        ))
    }

    #[test]
    fn test_bid_side_best_is_highest_price() {
        let mut q = LazyHeap::new(Side::Buy);
        q.insert(arc_order("a", Side::Buy, "10.00", 100, 1));
        q.insert(arc_order("b", Side::Buy, "10.50", 50, 2));

        assert_eq!(q.peek_best().unwrap().id.as_str(), "b");
    }

    #[test]
    fn test_ask_side_best_is_lowest_price() {
        let mut q = LazyHeap::new(Side::Sell);
        q.insert(arc_order("a", Side::Sell, "10.50", 100, 1));
        q.insert(arc_order("b", Side::Sell, "10.20", 50, 2));

        assert_eq!(q.peek_best().unwrap().id.as_str(), "b");
    }

    #[test]
    fn test_price_tie_broken_by_arrival() {
        let mut q = LazyHeap::new(Side::Sell);
        q.insert(arc_order("late", Side::Sell, "10.00", 10, 7));
        q.insert(arc_order("early", Side::Sell, "10.00", 10, 3));

        assert_eq!(q.pop_best().unwrap().id.as_str(), "early");
        assert_eq!(q.pop_best().unwrap().id.as_str(), "late");
        assert!(q.pop_best().is_none());
    }

    #[test]
    fn test_cancelled_order_skipped_at_front() {
        let mut q = LazyHeap::new(Side::Buy);
        let best = arc_order("best", Side::Buy, "11.00", 10, 1);
        q.insert(Arc::clone(&best));
        q.insert(arc_order("next", Side::Buy, "10.00", 10, 2));

        assert!(q.cancel(&best));
        // Tombstone still physically present, never surfaced
        assert_eq!(q.peek_best().unwrap().id.as_str(), "next");
        assert_eq!(q.live_len(), 1);
    }

    #[test]
    fn test_cancel_reports_already_dead() {
        let mut q = LazyHeap::new(Side::Buy);
        let o = arc_order("x", Side::Buy, "10.00", 10, 1);
        q.insert(Arc::clone(&o));

        assert!(q.cancel(&o));
        assert!(!q.cancel(&o));
    }

    #[test]
    fn test_live_orders_sorted_and_filtered() {
        let mut q = LazyHeap::new(Side::Buy);
        let dead = arc_order("dead", Side::Buy, "12.00", 10, 1);
        q.insert(Arc::clone(&dead));
        q.insert(arc_order("low", Side::Buy, "10.00", 10, 2));
        q.insert(arc_order("high", Side::Buy, "11.00", 10, 3));
        q.cancel(&dead);

        let live = q.live_orders();
        let ids: Vec<&str> = live.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "low"]);
    }
}
