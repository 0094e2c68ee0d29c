use num_integer::Integer;

pub(crate) const GREGORIAN_MONTH_LENGTHS_NON_LEAP_YEAR: [u8; 12] =
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_gregorian_leap_year(year: i64) -> bool {
    // Get offset into the 400-year cycle first so negative years behave.
    let year = year.mod_floor(&400);
    year % 4 == 0 && (year % 100 != 0 || year == 0)
}

/// Number of days in a Gregorian month. Returns 0 for a month outside `1..=12`.
pub fn days_in_gregorian_month(year: i64, month: u8) -> u8 {
    match month {
        2 if is_gregorian_leap_year(year) => 29,
        1..=12 => GREGORIAN_MONTH_LENGTHS_NON_LEAP_YEAR[(month - 1) as usize],
        _ => 0,
    }
}
