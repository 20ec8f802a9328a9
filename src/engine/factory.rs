// ============================================================================
// Factory
// Queue construction and registry builder
// ============================================================================

use crate::domain::{BookConfig, QueueStrategy, Side};
use crate::engine::{BookRegistry, LazyHeap, SortedVec};
use crate::interfaces::SideQueue;

/// Build one side's priority structure for the chosen strategy.
pub fn new_side_queue(strategy: QueueStrategy, side: Side) -> Box<dyn SideQueue> {
    match strategy {
        QueueStrategy::LazyHeap => Box::new(LazyHeap::new(side)),
        QueueStrategy::SortedVec => Box::new(SortedVec::new(side)),
    }
}

/// Fluent construction of a registry for one replay run.
///
/// # Example
/// ```
/// use matchbook::engine::BookRegistryBuilder;
/// use matchbook::domain::QueueStrategy;
///
/// let registry = BookRegistryBuilder::new()
///     .queue_strategy(QueueStrategy::SortedVec)
///     .build();
/// assert!(registry.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct BookRegistryBuilder {
    config: BookConfig,
}

impl BookRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_strategy(mut self, strategy: QueueStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn config(&self) -> BookConfig {
        self.config
    }

    pub fn build(self) -> BookRegistry {
        BookRegistry::new(self.config)
    }
}
