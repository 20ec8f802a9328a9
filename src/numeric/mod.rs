// ============================================================================
// Numeric Module
// Exact fixed-point price representation
// ============================================================================
//
// Prices are stored as i64 minor units (4 implied decimal places) so that
// equality and ordering are exact and reproducible. Decimal text crosses
// into and out of this representation only at the parse/display boundary,
// via rust_decimal.

mod errors;
mod price;

pub use errors::{NumericError, NumericResult};
pub use price::Price;
