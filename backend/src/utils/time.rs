use chrono::{DateTime, Duration, SecondsFormat, Timelike, Utc};

/// Default stats lookback when the caller gives no explicit start.
const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Parses an RFC 3339 instant, normalized to UTC.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Resolves the inclusive stats window from optional query inputs.
///
/// A missing or unparseable end falls back to `now`; a missing or
/// unparseable start falls back to 30 days before the resolved end. Bad
/// inputs never fail the request.
pub fn resolve_window(
    start: Option<&str>,
    end: Option<&str>,
    now: DateTime<Utc>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let end = end.and_then(parse_instant).unwrap_or(now);
    let start = start
        .and_then(parse_instant)
        .unwrap_or_else(|| end - Duration::days(DEFAULT_WINDOW_DAYS));
    (start, end)
}

/// Formats the UTC calendar date of an instant as `YYYY-MM-DD`.
pub fn utc_date_string(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// Returns the UTC hour of day (0-23) of an instant.
pub fn utc_hour(at: DateTime<Utc>) -> u32 {
    at.hour()
}

/// Formats an instant as an RFC 3339 string with a `Z` suffix.
pub fn format_utc_rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
