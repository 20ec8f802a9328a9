// ============================================================================
// Book Configuration
// Strategy selection for the per-side priority structure
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which priority-structure implementation a book's sides use.
///
/// Both strategies enforce identical price-time priority and produce
/// identical snapshots for any event sequence; they differ only in how
/// cancellation cost is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QueueStrategy {
    /// Binary heap with lazy deletion. Cancel tombstones the order in
    /// place; dead entries are discarded when they reach the front.
    /// Insert and cancel O(log n) / O(1), pop amortised O(log n).
    #[default]
    LazyHeap,

    /// Best-first sorted vector with eager removal. Cancel physically
    /// removes the order, so peek never sees dead entries. Insert and
    /// cancel are linear in the side's depth.
    SortedVec,
}

/// Configuration applied to every book a registry creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BookConfig {
    pub strategy: QueueStrategy,
}

impl BookConfig {
    pub fn new(strategy: QueueStrategy) -> Self {
        Self { strategy }
    }

    pub fn lazy_heap() -> Self {
        Self::new(QueueStrategy::LazyHeap)
    }

    pub fn sorted_vec() -> Self {
        Self::new(QueueStrategy::SortedVec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_strategy() {
        assert_eq!(BookConfig::default().strategy, QueueStrategy::LazyHeap);
        assert_eq!(BookConfig::sorted_vec().strategy, QueueStrategy::SortedVec);
    }
}
