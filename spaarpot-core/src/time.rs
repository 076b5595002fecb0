//! Calendar helpers for month-based budgeting.

use chrono::{Datelike, NaiveDate};

/// Number of days in `month` of `year`; 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days left in the month after `today`. Zero on the last day of the month.
pub fn remaining_days_in_month(today: NaiveDate) -> u32 {
    days_in_month(today.year(), today.month()) - today.day()
}
