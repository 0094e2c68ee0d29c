use crate::jalali::{from_jalali_parts, JalaliDateParts};
use crate::Period;

/// Adds a [`Period`] to a Jalali date, keeping its time of day.
///
/// The arithmetic happens on the equivalent Gregorian date, one field at a time: years, then
/// months, then days. After each step an overflowing day carries into the next month, so adding
/// one month to a Gregorian 31st that lands in a 30-day month moves on into the month after. The
/// order matters when components are combined: `{months: 1, days: 31}` is applied as one month
/// followed by 31 days.
///
/// The input is not validated; see [`is_valid_jalali`](crate::is_valid_jalali).
///
/// # Panics
///
/// Panics if the result leaves the range of [`DateTime`](crate::DateTime). Use
/// [`checked_add_to_jalali`] to get `None` instead.
///
/// ```
/// use jalali::{add_to_jalali, from_jalali_parts, JalaliDateParts, Period};
///
/// let start = JalaliDateParts::from(from_jalali_parts(1404, 12, 29));
/// let next = add_to_jalali(&start, Period::days(1));
/// assert_eq!((next.year, next.month, next.day), (1405, 1, 1));
/// ```
pub fn add_to_jalali(parts: &JalaliDateParts, period: Period) -> JalaliDateParts {
    checked_add_to_jalali(parts, period).expect("Jalali date arithmetic overflow")
}

pub fn checked_add_to_jalali(parts: &JalaliDateParts, period: Period) -> Option<JalaliDateParts> {
    let date = from_jalali_parts(parts.year, parts.month as i32, parts.day as i32)
        .checked_add_years(period.years)?
        .checked_add_months(period.months)?
        .checked_add_days(period.days)?;
    Some(JalaliDateParts::from_date_time(&date).with_time_of(parts))
}

/// [`add_to_jalali`] with every component of `period` negated.
pub fn subtract_from_jalali(parts: &JalaliDateParts, period: Period) -> JalaliDateParts {
    checked_subtract_from_jalali(parts, period).expect("Jalali date arithmetic overflow")
}

pub fn checked_subtract_from_jalali(
    parts: &JalaliDateParts,
    period: Period,
) -> Option<JalaliDateParts> {
    checked_add_to_jalali(parts, period.checked_neg()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gregorian::MAX_YEAR;

    fn parts(year: i32, month: u8, day: u8) -> JalaliDateParts {
        let mut parts = JalaliDateParts::from(from_jalali_parts(year, month as i32, day as i32));
        parts.hour = 9;
        parts.minute = 15;
        parts.second = 42;
        parts
    }

    fn ymd(parts: &JalaliDateParts) -> (i32, u8, u8) {
        (parts.year, parts.month, parts.day)
    }

    #[test]
    fn add_days() {
        assert_eq!(ymd(&add_to_jalali(&parts(1404, 7, 25), Period::days(1))), (1404, 7, 26));
        assert_eq!(ymd(&add_to_jalali(&parts(1404, 6, 31), Period::days(1))), (1404, 7, 1));
        assert_eq!(ymd(&add_to_jalali(&parts(1403, 12, 29), Period::days(1))), (1403, 12, 30));
        assert_eq!(ymd(&add_to_jalali(&parts(1403, 12, 30), Period::days(1))), (1404, 1, 1));
        assert_eq!(ymd(&add_to_jalali(&parts(1404, 1, 1), Period::days(-1))), (1403, 12, 30));
        assert_eq!(ymd(&add_to_jalali(&parts(1404, 1, 1), Period::days(365))), (1405, 1, 1));
    }

    #[test]
    fn add_keeps_time_and_recomputes_weekday() {
        let result = add_to_jalali(&parts(1404, 7, 25), Period::days(1));
        assert_eq!((result.hour, result.minute, result.second), (9, 15, 42));
        // Friday + 1 day = Saturday.
        assert_eq!(result.weekday, 0);
    }

    #[test]
    fn add_months_goes_through_gregorian_fields() {
        // Mehr 25, 1404 is 2025-10-17; one Gregorian month later is 2025-11-17, Aban 26.
        let result = add_to_jalali(&parts(1404, 7, 25), Period::months(1));
        assert_eq!(ymd(&result), (1404, 8, 26));
        // Bahman 11, 1403 is 2025-01-30; 2025-02-30 carries to 2025-03-02, Esfand 12.
        let result = add_to_jalali(&parts(1403, 11, 11), Period::months(1));
        assert_eq!(ymd(&result), (1403, 12, 12));
    }

    #[test]
    fn add_years() {
        // Esfand 10, 1402 is 2024-02-29; a year later 2025-02-29 carries to 2025-03-01.
        let result = add_to_jalali(&parts(1402, 12, 10), Period::years(1));
        assert_eq!(ymd(&result), (1403, 12, 11));
        let result = add_to_jalali(&parts(1404, 7, 25), Period::years(-1));
        assert_eq!(ymd(&result), (1403, 7, 26));
    }

    #[test]
    fn field_order_matters() {
        // Dey 12, 1403 is 2025-01-01.
        let start = parts(1403, 10, 12);
        // One month, then 31 days: 2025-02-01, then 2025-03-04.
        let combined = add_to_jalali(&start, Period::new(0, 1, 31));
        assert_eq!(ymd(&combined), (1403, 12, 14));
        // 31 days, then one month: 2025-02-01, then 2025-03-01.
        let days_then_month =
            add_to_jalali(&add_to_jalali(&start, Period::days(31)), Period::months(1));
        assert_eq!(ymd(&days_then_month), (1403, 12, 11));
    }

    #[test]
    fn subtract_is_add_negated() {
        let start = parts(1404, 7, 25);
        let period = Period::new(1, 2, 3);
        assert_eq!(subtract_from_jalali(&start, period), add_to_jalali(&start, -period));
        assert_eq!(ymd(&subtract_from_jalali(&start, Period::days(25))), (1404, 6, 31));
    }

    #[test]
    fn checked_overflow() {
        let start = parts(1404, 7, 25);
        assert_eq!(checked_add_to_jalali(&start, Period::years(MAX_YEAR)), None);
        assert_eq!(checked_subtract_from_jalali(&start, Period::days(i32::MIN)), None);
        assert!(checked_add_to_jalali(&start, Period::days(300_000_000)).is_some());
        assert_eq!(checked_add_to_jalali(&start, Period::days(i32::MAX)), None);
    }

    quickcheck::quickcheck! {
        fn prop_add_then_subtract_days(offset: u32, days: i32) -> bool {
            let start = from_jalali_parts(1, 1, 1 + (offset % 1_000_000) as i32);
            let start = JalaliDateParts::from(start);
            let days = days % 1_000_000;
            let there = add_to_jalali(&start, Period::days(days));
            subtract_from_jalali(&there, Period::days(days)) == start
        }
    }
}
