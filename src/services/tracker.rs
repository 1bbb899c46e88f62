// SPDX-License-Identifier: MIT

//! Timestamped entry store: the windowed filter and delete logic shared by
//! every tracking resource.
//!
//! The two read filters deliberately use different date granularities:
//! by-date matches the UTC calendar day, while by-limit compares absolute
//! timestamps against `now - N days`. Both are non-destructive projections;
//! only [`delete_by_date`] ever shrinks the stored log.

use crate::error::{AppError, Result};
use crate::models::DatedEntry;
use crate::time_utils::same_calendar_day;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Rolling-window limit parameter: `"all"` or a positive number of days.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Limit {
    Days(i64),
    Keyword(String),
}

impl Limit {
    /// Resolve to `None` for the full collection, or `Some(days)`.
    pub fn days(&self) -> Result<Option<i64>> {
        match self {
            Limit::Keyword(word) if word == "all" => Ok(None),
            Limit::Keyword(word) => word
                .parse::<i64>()
                .ok()
                .filter(|d| *d > 0)
                .map(Some)
                .ok_or_else(|| {
                    AppError::Validation(format!("Invalid limit: {}", word))
                }),
            Limit::Days(days) if *days > 0 => Ok(Some(*days)),
            Limit::Days(days) => Err(AppError::Validation(format!("Invalid limit: {}", days))),
        }
    }
}

/// Entries whose date falls on the same UTC calendar day as `day`.
pub fn filter_by_day<T: DatedEntry + Clone>(entries: &[T], day: DateTime<Utc>) -> Vec<T> {
    entries
        .iter()
        .filter(|e| same_calendar_day(e.entry_date(), day))
        .cloned()
        .collect()
}

/// Entries whose date is at or after `now - days`, compared at timestamp
/// granularity (no calendar-day truncation).
pub fn filter_by_limit<T: DatedEntry + Clone>(
    entries: &[T],
    now: DateTime<Utc>,
    days: i64,
) -> Vec<T> {
    let cutoff = now - Duration::days(days);
    entries
        .iter()
        .filter(|e| e.entry_date() >= cutoff)
        .cloned()
        .collect()
}

/// Remove entries whose date equals `date` exactly. A no-op when nothing
/// matches. Returns how many entries were removed.
pub fn delete_by_date<T: DatedEntry>(entries: &mut Vec<T>, date: DateTime<Utc>) -> usize {
    let before = entries.len();
    entries.retain(|e| e.entry_date() != date);
    before - entries.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SleepEntry;
    use chrono::TimeZone;

    fn entry(ts: DateTime<Utc>, hrs: f64) -> SleepEntry {
        SleepEntry {
            date: ts,
            duration_in_hrs: hrs,
        }
    }

    fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_filter_by_day_matches_calendar_day_only() {
        let entries = vec![
            entry(at(2024, 3, 15, 6), 7.0),
            entry(at(2024, 3, 15, 22), 1.5),
            entry(at(2024, 3, 14, 23), 8.0),
        ];

        let matched = filter_by_day(&entries, at(2024, 3, 15, 12));
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|e| e.date.date_naive()
            == chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
    }

    #[test]
    fn test_filter_by_limit_uses_timestamp_granularity() {
        let now = at(2024, 3, 15, 12);
        let entries = vec![
            entry(at(2024, 3, 12, 13), 7.0), // inside: 3 days ago minus 1 hour
            entry(at(2024, 3, 12, 11), 8.0), // outside: 3 days ago plus 1 hour
            entry(at(2024, 3, 15, 9), 6.0),
        ];

        let matched = filter_by_limit(&entries, now, 3);
        assert_eq!(matched.len(), 2);
        // Completeness: nothing outside the result is within the cutoff
        let cutoff = now - Duration::days(3);
        for e in &entries {
            let kept = matched.iter().any(|m| m == e);
            assert_eq!(kept, e.date >= cutoff);
        }
    }

    #[test]
    fn test_delete_by_date_is_exact_and_idempotent() {
        let target = at(2024, 3, 15, 8);
        let mut entries = vec![
            entry(target, 7.0),
            entry(at(2024, 3, 15, 9), 6.0), // same day, different instant
        ];

        assert_eq!(delete_by_date(&mut entries, target), 1);
        assert_eq!(entries.len(), 1);

        // Deleting again (or a date that never existed) changes nothing
        assert_eq!(delete_by_date(&mut entries, target), 0);
        assert_eq!(delete_by_date(&mut entries, at(2020, 1, 1, 0)), 0);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_limit_parsing() {
        assert_eq!(Limit::Keyword("all".into()).days().unwrap(), None);
        assert_eq!(Limit::Days(7).days().unwrap(), Some(7));
        assert_eq!(Limit::Keyword("7".into()).days().unwrap(), Some(7));
        assert!(Limit::Days(0).days().is_err());
        assert!(Limit::Days(-3).days().is_err());
        assert!(Limit::Keyword("soon".into()).days().is_err());
    }
}
