use chrono::{DateTime, TimeZone};

use crate::diff::{DateDiff, date_diff};

/// Compact years/months/days rendering, e.g. "4y 1m 2d".
///
/// Zero components are skipped; a diff shorter than a day renders as "".
/// Hours, minutes and seconds are never displayed.
pub fn format_ymd(diff: &DateDiff) -> String {
    let mut parts = Vec::with_capacity(3);

    if diff.years > 0 {
        parts.push(format!("{}y", diff.years));
    }
    if diff.months > 0 {
        parts.push(format!("{}m", diff.months));
    }
    if diff.days > 0 {
        parts.push(format!("{}d", diff.days));
    }

    parts.join(" ")
}

/// Elapsed time between `a` and `b` as years, months and days.
pub fn format_date_diff<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> String {
    format_ymd(&date_diff(a, b))
}
