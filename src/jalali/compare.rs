use num_integer::Integer;

use crate::gregorian::DateTime;
use crate::jalali::{from_jalali_parts, JalaliDateParts};

const MILLISECONDS_PER_DAY: i64 = 86_400_000;

// Comparisons only look at the dates. Both operands are taken at midnight of the equivalent
// Gregorian day, so the clock fields never take part.
fn midnight(parts: &JalaliDateParts) -> DateTime {
    from_jalali_parts(parts.year, parts.month as i32, parts.day as i32)
}

pub fn is_before(lhs: &JalaliDateParts, rhs: &JalaliDateParts) -> bool {
    midnight(lhs) < midnight(rhs)
}

pub fn is_after(lhs: &JalaliDateParts, rhs: &JalaliDateParts) -> bool {
    midnight(lhs) > midnight(rhs)
}

pub fn is_same_day(lhs: &JalaliDateParts, rhs: &JalaliDateParts) -> bool {
    midnight(lhs).date() == midnight(rhs).date()
}

/// Absolute number of days between two dates, rounded up to whole days.
pub fn difference_in_days(lhs: &JalaliDateParts, rhs: &JalaliDateParts) -> i64 {
    let elapsed = (midnight(lhs).unix_milliseconds() - midnight(rhs).unix_milliseconds()).abs();
    Integer::div_ceil(&elapsed, &MILLISECONDS_PER_DAY)
}

/// Absolute number of calendar-month boundaries between two dates.
///
/// The count is taken on the equivalent Gregorian months and ignores the day of the month, so
/// the last day of one Gregorian month and the first day of the next are one month apart.
pub fn difference_in_months(lhs: &JalaliDateParts, rhs: &JalaliDateParts) -> i64 {
    let months = |dt: DateTime| dt.year() as i64 * 12 + dt.month() as i64;
    (months(midnight(lhs)) - months(midnight(rhs))).abs()
}
