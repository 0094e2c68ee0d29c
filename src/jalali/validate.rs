use crate::calendar::is_jalali_leap_year;
use crate::jalali::{from_jalali_parts, JalaliDateParts};

/// Returns true if `(year, month, day)` names a day that exists in the Jalali calendar.
///
/// Years before 1 are rejected.
pub fn is_valid_jalali(year: i32, month: i32, day: i32) -> bool {
    if year < 1 || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return false;
    }
    day <= days_in_jalali_month(year, month) as i32
}

/// Number of days in a Jalali month: 31 for the first six months, 30 for the next five, and 29
/// or 30 for Esfand depending on the leap year. Returns 0 for a month outside `1..=12`.
pub fn days_in_jalali_month(year: i32, month: i32) -> u8 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_jalali_leap_year(year) => 30,
        12 => 29,
        _ => 0,
    }
}

/// The first day of the month of `parts`, keeping its time of day.
pub fn start_of_jalali_month(parts: &JalaliDateParts) -> JalaliDateParts {
    let date = from_jalali_parts(parts.year, parts.month as i32, 1);
    JalaliDateParts::from_date_time(&date).with_time_of(parts)
}

/// The last day of the month of `parts`, keeping its time of day.
pub fn end_of_jalali_month(parts: &JalaliDateParts) -> JalaliDateParts {
    let month = parts.month as i32;
    let last = days_in_jalali_month(parts.year, month) as i32;
    let date = from_jalali_parts(parts.year, month, last);
    JalaliDateParts::from_date_time(&date).with_time_of(parts)
}
