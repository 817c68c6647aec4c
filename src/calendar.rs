// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Approximate calendar arithmetic, collected in one place.
//!
//! Month membership is a `YYYY-MM` string-prefix match and recurring
//! schedules use a raw floor day difference (weekly = 7 days, monthly = 30),
//! not true calendar alignment. Both are observable behavior; do not
//! "fix" them here without changing the product.

use chrono::{NaiveDate, Utc};

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// `YYYY-MM-DD` for today, the default date for imports and recurring entries.
pub fn today_string() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// `YYYY-MM` month key for a date.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Whether a stored date string falls in the given `YYYY-MM` month.
pub fn in_month(date: &str, month: &str) -> bool {
    date.starts_with(month)
}

/// Whole days elapsed from a stored date string to `today`. `None` when the
/// stored string is not a parseable `YYYY-MM-DD` date, which callers treat
/// as "never due" (the original compares against NaN).
pub fn elapsed_days(from: &str, today: NaiveDate) -> Option<i64> {
    let from = NaiveDate::parse_from_str(from, "%Y-%m-%d").ok()?;
    Some((today - from).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_key_is_prefix_of_dates_in_month() {
        let d = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();
        assert_eq!(month_key(d), "2024-05");
        assert!(in_month("2024-05-01", "2024-05"));
        assert!(!in_month("2024-06-01", "2024-05"));
    }

    #[test]
    fn elapsed_days_floors_and_rejects_garbage() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        assert_eq!(elapsed_days("2024-01-01", today), Some(8));
        assert_eq!(elapsed_days("2024-01-09", today), Some(0));
        assert_eq!(elapsed_days("not-a-date", today), None);
    }
}
