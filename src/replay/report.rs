// ============================================================================
// Book Report Formatter
// Two-column text rendering of book snapshots
// ============================================================================

use crate::domain::{BookSnapshot, SnapshotEntry};
use crate::numeric::Price;
use crate::replay::ReplaySummary;
use std::fmt::Write;

/// Width the bid cell is padded to when the ask side is longer.
const BID_CELL_PAD: usize = 8;

/// Render a price to two decimal places.
fn format_price(price: Price) -> String {
    price.to_decimal().round_dp(2).to_string()
}

fn format_cell(entry: &SnapshotEntry) -> String {
    format!("{}@{}", entry.volume, format_price(entry.price))
}

/// Render one book as a two-column table: one row per rank across the
/// longer side, `volume@price` cells joined by `" -- "`, the bid cell
/// blank-padded where the bid side has run out.
pub fn render_book(snapshot: &BookSnapshot) -> String {
    let rows = snapshot.bids.len().max(snapshot.asks.len());
    let mut out = String::new();

    for rank in 0..rows {
        let bid = match snapshot.bids.get(rank) {
            Some(entry) => format_cell(entry),
            None => " ".repeat(BID_CELL_PAD),
        };
        let ask = snapshot
            .asks
            .get(rank)
            .map(format_cell)
            .unwrap_or_default();

        if rank > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{bid} -- {ask}");
    }

    out
}

/// Render the full run report: start banner, one headed table per book,
/// finish banner with the run duration.
pub fn render_report(snapshots: &[BookSnapshot], summary: &ReplaySummary) -> String {
    const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Processing started at: {}",
        summary.started_at.format(TIME_FORMAT)
    );

    for snapshot in snapshots {
        let _ = writeln!(out, "Book: {}", snapshot.book);
        let _ = writeln!(out, "      Buy -- Sell");
        let _ = writeln!(out, "========================");
        let table = render_book(snapshot);
        if !table.is_empty() {
            let _ = writeln!(out, "{table}");
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(
        out,
        "Processing completed at: {}",
        summary.finished_at.format(TIME_FORMAT)
    );
    let micros = summary.duration().num_microseconds().unwrap_or(0);
    let _ = writeln!(
        out,
        "Processing Duration: {:.3} seconds",
        micros as f64 / 1_000_000.0
    );

    out
}
