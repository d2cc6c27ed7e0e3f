//! Caller-owned stock log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::ItemName;

/// One timestamped line in a caller-supplied stock log.
///
/// Renders as `"<timestamp>: <message>"`, e.g.
/// `2026-10-18 09:30:00.123456: Added 10 of apple`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub recorded_at: DateTime<Utc>,
    pub message: String,
}

impl LogEntry {
    pub fn added(name: &ItemName, qty: i64, recorded_at: DateTime<Utc>) -> Self {
        Self {
            recorded_at,
            message: format!("Added {qty} of {name}"),
        }
    }
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.recorded_at.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn added_entry_renders_timestamp_and_message() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        let name = ItemName::parse("apple").unwrap();

        let entry = LogEntry::added(&name, 10, at);

        assert_eq!(entry.message, "Added 10 of apple");
        assert_eq!(entry.to_string(), "2026-10-18 09:30:00.000000: Added 10 of apple");
    }
}
