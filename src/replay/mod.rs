// ============================================================================
// Replay Module
// Boundary between the matching core and the outside world: typed events
// in, rendered book states out
// ============================================================================

mod driver;
mod event;
pub mod report;

#[cfg(feature = "serde")]
pub mod log;

pub use driver::{replay, replay_events, ReplayOutcome, ReplaySummary};
pub use event::{Event, EventError, RawRecord};
