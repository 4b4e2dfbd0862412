//! diff.rs
//!
//! Calendar-aware elapsed time between two instants, broken down as:
//!     years, months, days, hours, minutes, seconds
//!
//! Chrono only hands us absolute durations (no relativedelta), so the
//! field-by-field subtraction and the borrowing rules are done here:
//!   • seconds → minutes → hours → days → months → years, in that order
//!   • day underflow borrows the length of the earlier instant's month
//!   • leap years and varying month lengths

use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// Elapsed calendar duration. Every field is non-negative; all but `years`
/// stay within their natural range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateDiff {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

/// Returns the unsigned calendar difference between `a` and `b`.
///
/// `b` is re-expressed in `a`'s timezone first, so the calendar fields of
/// both sides are read in the same context. Direction is discarded.
pub fn date_diff<A, B>(a: &DateTime<A>, b: &DateTime<B>) -> DateDiff
where
    A: TimeZone,
    B: TimeZone,
{
    let b = b.with_timezone(&a.timezone());

    // Wall-clock ordering. Only differs from instant ordering inside a DST fold.
    let (early, late) = if a.naive_local() > b.naive_local() {
        (b, a.clone())
    } else {
        (a.clone(), b)
    };

    let mut years = late.year() - early.year();
    let mut months = late.month() as i32 - early.month() as i32;
    let mut days = late.day() as i32 - early.day() as i32;
    let mut hours = late.hour() as i32 - early.hour() as i32;
    let mut minutes = late.minute() as i32 - early.minute() as i32;
    let mut seconds = late.second() as i32 - early.second() as i32;

    if seconds < 0 {
        seconds += 60;
        minutes -= 1;
    }
    if minutes < 0 {
        minutes += 60;
        hours -= 1;
    }
    if hours < 0 {
        hours += 24;
        days -= 1;
    }

    // Fix day underflow with the length of the month we started in
    if days < 0 {
        days += days_in_month(early.year(), early.month()) as i32;
        months -= 1;
    }

    // Fix month underflow
    if months < 0 {
        months += 12;
        years -= 1;
    }

    DateDiff {
        years: years as u32,
        months: months as u32,
        days: days as u32,
        hours: hours as u32,
        minutes: minutes as u32,
        seconds: seconds as u32,
    }
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!((1..=12).contains(&month), "month out of range: {month}");

    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

/// Gregorian leap-year rule:
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
