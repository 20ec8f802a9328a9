// ============================================================================
// Engine Module
// Priority-structure strategies, the order book, and the book registry
// ============================================================================

mod lazy_heap;
mod order_book;
mod registry;
mod sorted_vec;

pub mod factory;

pub use factory::{new_side_queue, BookRegistryBuilder};
pub use lazy_heap::LazyHeap;
pub use order_book::{BookError, OrderBook};
pub use registry::BookRegistry;
pub use sorted_vec::SortedVec;
