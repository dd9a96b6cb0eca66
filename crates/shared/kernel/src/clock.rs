use chrono::{SecondsFormat, Utc};

/// Current UTC time as an ISO-8601 string with millisecond precision (`2024-01-01T00:00:00.000Z`).
#[must_use]
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
