// ============================================================================
// Interfaces Module
// Trait contracts between the book and its priority structures
// ============================================================================

mod side_queue;

pub use side_queue::{priority_key, SideQueue};
