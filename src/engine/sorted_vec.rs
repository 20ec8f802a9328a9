// ============================================================================
// Eager-Removal Sorted Queue
// Best-first sorted vector with immediate physical deletion
// ============================================================================

use crate::domain::{Order, Side};
use crate::interfaces::{priority_key, SideQueue};
use std::sync::Arc;

/// Sorted-vector side queue with eager removal.
///
/// Orders are kept best-first, so peek is O(1) and cancellation removes
/// the order on the spot; insert and cancel pay a cost linear in the
/// side's depth. Outwardly equivalent to `LazyHeap` for any event
/// sequence.
pub struct SortedVec {
    side: Side,
    orders: Vec<Arc<Order>>,
}

impl SortedVec {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            orders: Vec::new(),
        }
    }

    /// True if `a` outranks `b` on this side.
    fn outranks(&self, a: &Order, b: &Order) -> bool {
        let ka = priority_key(self.side, a.price);
        let kb = priority_key(self.side, b.price);
        ka > kb || (ka == kb && a.sequence < b.sequence)
    }

    /// Orders filled down to zero stay at the front until observed; drop
    /// them so the first element is live.
    fn drop_dead_front(&mut self) {
        while self.orders.first().is_some_and(|o| !o.is_live()) {
            self.orders.remove(0);
        }
    }
}

impl SideQueue for SortedVec {
    fn side(&self) -> Side {
        self.side
    }

    fn insert(&mut self, order: Arc<Order>) {
        let pos = self.orders.partition_point(|resting| self.outranks(resting, &order));
        self.orders.insert(pos, order);
    }

    fn peek_best(&mut self) -> Option<Arc<Order>> {
        self.drop_dead_front();
        self.orders.first().map(Arc::clone)
    }

    fn pop_best(&mut self) -> Option<Arc<Order>> {
        self.drop_dead_front();
        if self.orders.is_empty() {
            None
        } else {
            Some(self.orders.remove(0))
        }
    }

    fn cancel(&mut self, order: &Order) -> bool {
        if let Some(pos) = self.orders.iter().position(|o| o.id == order.id) {
            self.orders.remove(pos);
        }
        order.cancel() > 0
    }

    fn live_orders(&self) -> Vec<Arc<Order>> {
        self.orders
            .iter()
            .filter(|o| o.is_live())
            .map(Arc::clone)
            .collect()
    }

    fn live_len(&self) -> usize {
        self.orders.iter().filter(|o| o.is_live()).count()
    }

    fn name(&self) -> &'static str {
        "sorted-vec"
    }
}
