//! Timestamp normalization for Box attributes
//!
//! Box rejects timestamps carrying sub-second precision, so every
//! `content_created_at` / `content_modified_at` attribute is rendered as
//! RFC 3339 truncated to whole seconds (e.g. `2024-05-17T09:30:00Z`).

use chrono::{DateTime, SecondsFormat, Utc};

/// Renders a timestamp in the representation Box expects.
#[must_use]
pub fn format_box_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
