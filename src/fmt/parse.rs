use lazy_static::lazy_static;
use regex::Regex;

use crate::fmt::digits::to_latin_digits;
use crate::fmt::names::find_month;
use crate::jalali::{from_jalali_parts, is_valid_jalali, JalaliDateParts};

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new("[0-9]{1,4}").expect("digit run pattern is valid");
}

/// Reads a Jalali date out of free-form text.
///
/// This is a best-effort reader, not the inverse of [`format_jalali`](crate::format_jalali).
/// `template` is accepted for symmetry and ignored. The rules are:
///
/// * Persian and Arabic-Indic digits count as ASCII digits.
/// * Numbers are runs of up to four digits, so a longer run is split into several numbers.
/// * If the text contains a month name (full or abbreviated), that month is used.
/// * With three or more numbers, they are read as day, month and year. A month name replaces
///   the second one.
/// * With exactly two numbers and a month name, they are read as day and year.
/// * With a single number, it is taken as the year and no day is known, so the result is always
///   `None`.
///
/// The result is `None` unless the date exists in the Jalali calendar. Its weekday is derived
/// from the date and its time of day is midnight.
///
/// ```
/// use jalali::parse_jalali;
///
/// let parts = parse_jalali("۲۵ مهر ۱۴۰۴", "jD jMMM jYYYY").unwrap();
/// assert_eq!((parts.year, parts.month, parts.day), (1404, 7, 25));
///
/// // Year first is read as day first, which does not validate.
/// assert_eq!(parse_jalali("1404/07/25", "jYYYY/jMM/jDD"), None);
/// ```
pub fn parse_jalali(input: &str, _template: &str) -> Option<JalaliDateParts> {
    let latin = to_latin_digits(input);
    let numbers: Vec<i32> = DIGIT_RUN
        .find_iter(&latin)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();
    let named_month = find_month(input).map(i32::from);

    let (year, month, day) = match (numbers.as_slice(), named_month) {
        ([day, month, year, ..], named) => (*year, named.unwrap_or(*month), *day),
        ([day, year], Some(month)) => (*year, month, *day),
        ([year], named) => (*year, named.unwrap_or(0), 0),
        _ => {
            trace!("no date found in {:?}", input);
            return None;
        }
    };

    if !is_valid_jalali(year, month, day) {
        trace!("{:?} reads as {}/{}/{}, which is not a date", input, year, month, day);
        return None;
    }
    Some(JalaliDateParts::from(from_jalali_parts(year, month, day)))
}
