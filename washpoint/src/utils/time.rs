//! Time helpers — business time zone boundaries
//!
//! Date-to-timestamp conversion happens here; the repository layer only
//! ever sees `i64` Unix millis and `>= start AND < end` windows.

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;

/// Today's date in the business time zone.
pub fn today(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

/// Local midnight of `date` as Unix millis.
///
/// DST gap fallback: if local midnight does not exist, fall back to UTC.
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    // Midnight always exists as a NaiveDateTime
    let naive = date.and_hms_opt(0, 0, 0).unwrap();
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// End of `date` — the following local midnight, for `< end` semantics.
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    day_start_millis(next_day, tz)
}

/// Local midnight of the first day of `date`'s month as Unix millis.
pub fn month_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    let first = date.with_day(1).unwrap_or(date);
    day_start_millis(first, tz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_window_covers_exactly_one_day() {
        let tz = chrono_tz::UTC;
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let start = day_start_millis(date, tz);
        let end = day_end_millis(date, tz);
        assert_eq!(end - start, 24 * 60 * 60 * 1000);
    }

    #[test]
    fn month_start_is_first_midnight() {
        let tz = chrono_tz::UTC;
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let first = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(month_start_millis(date, tz), day_start_millis(first, tz));
    }

    #[test]
    fn dst_transition_day_is_shorter() {
        // Europe/Istanbul is fixed-offset nowadays; use a zone that
        // still observes DST to exercise the `latest()` path.
        let tz: Tz = "Europe/Madrid".parse().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 3, 29).unwrap(); // spring forward
        let start = day_start_millis(date, tz);
        let end = day_end_millis(date, tz);
        assert_eq!(end - start, 23 * 60 * 60 * 1000);
    }
}
