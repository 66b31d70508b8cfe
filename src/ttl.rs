//! Human-readable address expiry.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Describe how long until `expires_at` (Unix seconds): `"in 2 days"`,
/// `"in 1 hour"`, `"in 5 minutes"`, `"in 3 seconds"` or `"now"`.
///
/// Only the largest non-zero unit is shown. Expired addresses read `"now"`.
pub fn time_until(expires_at: i64, now: DateTime<Utc>) -> String {
    let remaining_ms = expires_at
        .saturating_mul(1000)
        .saturating_sub(now.timestamp_millis());
    if remaining_ms <= 0 {
        return "now".to_string();
    }
    let secs = remaining_ms / 1000;

    for (unit, size) in [("day", DAY), ("hour", HOUR), ("minute", MINUTE), ("second", 1)] {
        let count = secs / size;
        if count > 0 {
            let plural = if count > 1 { "s" } else { "" };
            return format!("in {count} {unit}{plural}");
        }
    }
    "now".to_string()
}

/// Whole seconds elapsed between `since` and `now` (floored).
pub fn seconds_since(since: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - since).num_milliseconds().div_euclid(1000)
}
