// ============================================================================
// Domain Models Module
// Core entities and value objects of the matching core
// ============================================================================

pub mod config;
pub mod order;
pub mod snapshot;

pub use config::{BookConfig, QueueStrategy};
pub use order::{Order, OrderId, Side};
pub use snapshot::{BookSnapshot, SnapshotEntry};
