//! Time utilities for mapping dashboard time windows onto report dates.

use crate::error::{DatasourceError, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Absolute time window supplied by the host alongside a query. The
/// instants carry no timezone of their own; the query's requested timezone
/// decides which calendar dates they fall on.
#[derive(Debug, Clone, Copy)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Resolves a timezone name to a calendar calculator. The empty name means
/// UTC, matching what the reporting API assumes when none is configured.
pub fn resolve_timezone(name: &str) -> Result<Tz> {
    if name.is_empty() {
        return Ok(Tz::UTC);
    }
    name.parse::<Tz>()
        .map_err(|_| DatasourceError::Timezone(name.to_string()))
}

/// Formats the wall-clock date of `instant` in `tz` as `YYYY-MM-DD`, the
/// date form the reporting API expects.
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> String {
    instant
        .with_timezone(&tz)
        .date_naive()
        .format("%Y-%m-%d")
        .to_string()
}
