//! Calendar helpers: day offsets and checked date construction.

use chrono::{Days, NaiveDate};

/// Shift `date` by a signed number of days, saturating at the calendar bounds.
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    let step = Days::new(days.unsigned_abs());
    let shifted = if days < 0 {
        date.checked_sub_days(step)
    } else {
        date.checked_add_days(step)
    };
    shifted.unwrap_or(date)
}

/// Build a date from year/month/day, returning `None` for impossible
/// combinations. Years outside 1..=9999 are rejected.
pub fn checked_ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if !(1..=9999).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}
