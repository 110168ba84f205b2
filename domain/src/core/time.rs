//! RFC 3339 timestamp helpers.
//!
//! Every timestamp the domain stores is a string in RFC 3339 form, UTC,
//! second precision (`2026-02-20T10:11:12Z`).

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC instant the way cases, transcripts and verdicts store it.
pub fn format_rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an RFC 3339 timestamp with any offset, normalized to UTC.
pub fn parse_rfc3339(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
