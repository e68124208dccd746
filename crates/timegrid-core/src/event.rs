//! Calendar event type and the timestamp parsing boundary.
//!
//! Events arrive from callers with string timestamps in a handful of
//! formats (RFC 3339 with `Z` or an offset, naive local datetimes with or
//! without fractional seconds). Parsing and validation happen here, before
//! the layout engine runs; the engine itself only ever sees valid,
//! comparable instants.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// A single calendar event scoped to the time grid.
///
/// `end >= start` is expected but not enforced: an inverted interval
/// behaves like a zero-duration one under the strict overlap predicate and
/// never overlaps anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Unique identifier; layout results are keyed by it.
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Opaque display color, passed through untouched.
    pub color: String,
}

impl CalendarEvent {
    /// Build an event from string timestamps, parsing at the boundary.
    ///
    /// # Errors
    /// Returns `LayoutError::InvalidInterval` if either timestamp fails to
    /// parse.
    pub fn parse(
        id: impl Into<String>,
        title: impl Into<String>,
        start: &str,
        end: &str,
        color: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            id: id.into(),
            title: title.into(),
            start: parse_instant(start)?,
            end: parse_instant(end)?,
            color: color.into(),
        })
    }

    /// Signed duration of the event. Negative for inverted intervals.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Parse a timestamp string into a UTC instant.
///
/// Accepted forms:
/// - RFC 3339: `2025-10-12T10:00:00Z`, `2025-10-12T10:00:00.000Z`,
///   `2025-10-12T10:00:00+02:00`
/// - Naive datetime, treated as UTC: `2025-10-12T10:00:00`,
///   `2025-10-12T10:00:00.500`
///
/// # Errors
/// Returns `LayoutError::InvalidInterval` for anything else.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    // Naive fallback: `%.f` also matches an absent fractional part.
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }

    Err(LayoutError::InvalidInterval(value.to_string()))
}
