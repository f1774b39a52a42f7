//! Day-granular calendar arithmetic over [`NaiveDate`].
//!
//! Every function here is pure and total. Arithmetic that would leave the
//! representable range saturates at [`NaiveDate::MIN`] / [`NaiveDate::MAX`].

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::consts::{DAYS_IN_WEEK, WEEK_DAYS};

/// Weekdays in the order of [`WEEK_DAYS`]
const SUNDAY_FIRST: [Weekday; DAYS_IN_WEEK] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Adds `days` (which may be negative) to `date`, saturating at the limits
/// of the calendar.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(magnitude).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(magnitude).unwrap_or(NaiveDate::MIN)
    }
}

#[inline]
pub fn is_same(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

#[inline]
pub fn is_before(a: NaiveDate, b: NaiveDate) -> bool {
    a < b
}

#[inline]
pub fn is_after(a: NaiveDate, b: NaiveDate) -> bool {
    a > b
}

/// Returns the weekday token of `date` from [`WEEK_DAYS`], e.g. `"Fri"`.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEK_DAYS[date.weekday().num_days_from_sunday() as usize]
}

/// Looks up a weekday token. Matching is exact, so `"fri"` yields `None`.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    WEEK_DAYS
        .iter()
        .position(|token| *token == name)
        .map(|index| SUNDAY_FIRST[index])
}

/// First day of the week containing `date`, for weeks beginning on `week_starts_on`.
pub fn start_of_week(date: NaiveDate, week_starts_on: Weekday) -> NaiveDate {
    let current = date.weekday().num_days_from_sunday();
    let first = week_starts_on.num_days_from_sunday();
    let days_back = (DAYS_IN_WEEK as u32 + current - first) % DAYS_IN_WEEK as u32;
    add_days(date, -i64::from(days_back))
}

/// Last day of the week containing `date`, for weeks beginning on `week_starts_on`.
pub fn end_of_week(date: NaiveDate, week_starts_on: Weekday) -> NaiveDate {
    add_days(start_of_week(date, week_starts_on), DAYS_IN_WEEK as i64 - 1)
}
