// ============================================================================
// Event Log Reader (serde feature)
// JSON-lines event logs, one raw record per line
// ============================================================================

use crate::replay::{Event, EventError, RawRecord};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Parse one log line. Blank lines yield `None`; anything else yields a
/// typed event or the per-line reason it was rejected.
pub fn parse_line(line: &str) -> Option<Result<Event, EventError>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let raw: RawRecord = match serde_json::from_str(line) {
        Ok(raw) => raw,
        Err(error) => return Some(Err(EventError::InvalidRecord(error.to_string()))),
    };
    Some(Event::from_raw(raw))
}

/// Read an entire event log. Only the file itself failing to read is
/// fatal; individual bad lines come back as `Err` items for the driver
/// to count and skip.
pub fn read_events<R: Read>(reader: R) -> io::Result<Vec<Result<Event, EventError>>> {
    let mut events = Vec::new();
    for line in BufReader::new(reader).lines() {
        if let Some(parsed) = parse_line(&line?) {
            events.push(parsed);
        }
    }
    Ok(events)
}

/// Read an event log from a file path.
pub fn read_event_log(path: impl AsRef<Path>) -> io::Result<Vec<Result<Event, EventError>>> {
    read_events(File::open(path)?)
}
