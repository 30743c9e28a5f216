//! Wall-clock helpers that work in both the browser and SSR.
//!
//! `std::time::SystemTime` is unavailable on `wasm32-unknown-unknown`, so the
//! hydrate build reads `Date.now()` instead.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use chrono::DateTime;

/// Seconds since the Unix epoch.
pub fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}

/// Today's date as `YYYY-MM-DD` (UTC), the format of `<input type="date">`.
pub fn today_iso() -> String {
    iso_date(now_secs()).unwrap_or_default()
}

/// UTC calendar date for a Unix timestamp; `None` when out of range.
pub fn iso_date(secs: i64) -> Option<String> {
    DateTime::from_timestamp(secs, 0).map(|d| d.date_naive().format("%Y-%m-%d").to_string())
}
