// SPDX-License-Identifier: MIT

//! Shared helpers for date/time comparisons used by the tracking routes.

use chrono::{DateTime, Datelike, Duration, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// "Today" truncated to midnight UTC.
pub fn start_of_today(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc()
}

/// Whether two instants fall on the same UTC calendar day.
pub fn same_calendar_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.day() == b.day() && a.month() == b.month() && a.year() == b.year()
}

/// Whether `date` falls in the inclusive window `[today - days, today]`,
/// with `today` truncated to midnight. Entries timestamped later today are
/// outside the window; the report aggregator depends on this exact bound.
pub fn within_last_days(date: DateTime<Utc>, today_midnight: DateTime<Utc>, days: i64) -> bool {
    let window_start = today_midnight - Duration::days(days);
    date >= window_start && date <= today_midnight
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_start_of_today_truncates() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 17, 42, 9).unwrap();
        let midnight = start_of_today(now);
        assert_eq!(
            midnight,
            Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_same_calendar_day_ignores_time() {
        let a = Utc.with_ymd_and_hms(2024, 3, 15, 1, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 3, 15, 23, 59, 59).unwrap();
        let c = Utc.with_ymd_and_hms(2024, 3, 16, 0, 0, 0).unwrap();
        assert!(same_calendar_day(a, b));
        assert!(!same_calendar_day(a, c));
    }

    #[test]
    fn test_window_is_inclusive_on_both_ends() {
        let today = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let start = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        assert!(within_last_days(start, today, 10));
        assert!(within_last_days(today, today, 10));
        // One second before the window opens
        assert!(!within_last_days(start - Duration::seconds(1), today, 10));
        // Later the same day as the midnight bound
        assert!(!within_last_days(today + Duration::hours(3), today, 10));
    }
}
