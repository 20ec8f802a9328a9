// ============================================================================
// Replay Events
// Typed event records and per-event validation of raw input
// ============================================================================

use crate::domain::Side;
use crate::numeric::Price;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One already-validated event of the replayed stream.
///
/// The arrival sequence number is deliberately absent: the core assigns
/// it at the moment the event is applied, and it never travels back out.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Event {
    AddOrder {
        book: String,
        order_id: String,
        side: Side,
        price: Price,
        volume: u64,
    },
    DeleteOrder {
        book: String,
        order_id: String,
    },
}

impl Event {
    /// The book this event targets.
    pub fn book(&self) -> &str {
        match self {
            Event::AddOrder { book, .. } | Event::DeleteOrder { book, .. } => book,
        }
    }
}

/// Untyped record shape as it comes off disk: a kind tag plus string
/// attributes, with the add-only attributes optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RawRecord {
    pub kind: String,
    pub book: String,
    pub order_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub operation: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub volume: Option<String>,
}

/// Why a single raw record was rejected.
///
/// Every variant is recoverable: the driver reports the record and moves
/// on to the next one rather than aborting the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// Record kind is neither AddOrder nor DeleteOrder
    UnknownKind(String),
    /// A required attribute is absent
    MissingField(&'static str),
    /// Side token is not BUY or SELL
    UnknownSide(String),
    /// Price attribute is not a valid decimal
    InvalidPrice(String),
    /// Volume attribute is negative or not an integer
    InvalidVolume(String),
    /// The record could not be deserialized at all
    InvalidRecord(String),
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventError::UnknownKind(kind) => write!(f, "unknown event kind {kind:?}"),
            EventError::MissingField(field) => write!(f, "missing field {field:?}"),
            EventError::UnknownSide(token) => write!(f, "unknown side token {token:?}"),
            EventError::InvalidPrice(raw) => write!(f, "invalid price {raw:?}"),
            EventError::InvalidVolume(raw) => write!(f, "invalid volume {raw:?}"),
            EventError::InvalidRecord(detail) => write!(f, "malformed record: {detail}"),
        }
    }
}

impl std::error::Error for EventError {}

impl Event {
    /// Validate a raw record into a typed event.
    ///
    /// # Errors
    /// One `EventError` describing the first problem found; the record
    /// is dropped and later records are unaffected.
    pub fn from_raw(raw: RawRecord) -> Result<Self, EventError> {
        match raw.kind.as_str() {
            "AddOrder" => {
                let operation = raw.operation.ok_or(EventError::MissingField("operation"))?;
                let side = Side::from_token(&operation)
                    .ok_or(EventError::UnknownSide(operation))?;

                let price_text = raw.price.ok_or(EventError::MissingField("price"))?;
                let price: Price = price_text
                    .parse()
                    .map_err(|_| EventError::InvalidPrice(price_text))?;

                let volume_text = raw.volume.ok_or(EventError::MissingField("volume"))?;
                let volume = parse_volume(&volume_text)
                    .ok_or(EventError::InvalidVolume(volume_text))?;

                Ok(Event::AddOrder {
                    book: raw.book,
                    order_id: raw.order_id,
                    side,
                    price,
                    volume,
                })
            },
            "DeleteOrder" => Ok(Event::DeleteOrder {
                book: raw.book,
                order_id: raw.order_id,
            }),
            other => Err(EventError::UnknownKind(other.to_string())),
        }
    }
}

/// Volume must be a non-negative integer; a minus sign is parsed so it
/// can be rejected explicitly rather than as a generic parse failure.
fn parse_volume(text: &str) -> Option<u64> {
    let value: i64 = text.trim().parse().ok()?;
    u64::try_from(value).ok()
}
