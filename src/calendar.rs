// Both calendars are converted through an absolute day number, so each direction is a handful of
// integer divisions rather than a walk over the days in between.
//
// Gregorian side: days are counted from 1600-01-01, the start of a 400-year cycle. A cycle is
// 97*366 + 303*365 = 146097 days. Inside a cycle the first century carries the extra leap day
// (36525 days) and the other three have 36524, and inside a century each 4-year block is 1461
// days with the leap year first. The century years 1700, 1800 and 1900 break that last rule,
// which is what the boundary corrections in `gregorian_from_day_number` account for.
//
// Jalali side: days are counted from Farvardin 1, 979, which falls on Gregorian 1600-03-20,
// i.e. 79 days after the Gregorian zero point. The leap rule is the arithmetic 33-year cycle:
// years 0, 4, 8, ..., 28 of each cycle are leap years and year 32 is not, giving
// 33*365 + 8 = 12053 days per cycle. Within a cycle the same "4-year block with the leap year
// first" shape as the Gregorian calendar shows up, except that the last block is a single
// common year.
//
// Month lengths are kept as plain tables. Month 12 of the Jalali table always says 29: the
// decomposition loop never subtracts month 12, so a leap year's 366th day lands on Esfand 30
// without special casing.

use num_integer::Integer;

use crate::gregorian::util::is_gregorian_leap_year;

const GREGORIAN_CYCLE_DAYS: i64 = 97 * 366 + 303 * 365;
const GREGORIAN_CENTURY_DAYS: i64 = 24 * 366 + 76 * 365;
const GREGORIAN_LEAP_CENTURY_DAYS: i64 = GREGORIAN_CENTURY_DAYS + 1;
#[allow(clippy::identity_op)]
const QUADRENNIUM_DAYS: i64 = 3 * 365 + 1 * 366;
const YEAR_DAYS: i64 = 365;
const LEAP_YEAR_DAYS: i64 = YEAR_DAYS + 1;

const JALALI_CYCLE_YEARS: i64 = 33;
const JALALI_CYCLE_LEAP_DAYS: i64 = 8;
const JALALI_CYCLE_DAYS: i64 = JALALI_CYCLE_YEARS * YEAR_DAYS + JALALI_CYCLE_LEAP_DAYS;

const GREGORIAN_EPOCH_YEAR: i64 = 1600;
const JALALI_EPOCH_YEAR: i64 = 979;
// Farvardin 1, 979 is day 79 of 1600.
const EPOCH_OFFSET_DAYS: i64 = 79;

const GREGORIAN_DAYS_IN_MONTH: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const JALALI_DAYS_IN_MONTH: [i64; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

// Index 0 = January, non-leap year.
const GREGORIAN_MONTH_STARTS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
// Index 0 = Farvardin.
const JALALI_MONTH_STARTS: [i64; 12] = [0, 31, 62, 93, 124, 155, 186, 216, 246, 276, 306, 336];

/// A date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// A date in the Jalali (Solar Hijri) calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl GregorianDate {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        GregorianDate { year, month, day }
    }

    pub fn to_jalali(self) -> JalaliDate {
        gregorian_to_jalali(self.year, self.month as i32, self.day as i32)
    }
}

impl JalaliDate {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        JalaliDate { year, month, day }
    }

    pub fn to_gregorian(self) -> GregorianDate {
        jalali_to_gregorian(self.year, self.month as i32, self.day as i32)
    }
}

impl From<GregorianDate> for JalaliDate {
    fn from(date: GregorianDate) -> Self {
        date.to_jalali()
    }
}

impl From<JalaliDate> for GregorianDate {
    fn from(date: JalaliDate) -> Self {
        date.to_gregorian()
    }
}

/// Cumulative number of Jalali leap days in the first `years` years after the epoch year 979.
///
/// `years` may be negative, in which case the result counts backwards and is negative too.
pub fn leap_days(years: i64) -> i64 {
    let (cycles, years_into_cycle) = years.div_mod_floor(&JALALI_CYCLE_YEARS);
    cycles * JALALI_CYCLE_LEAP_DAYS + (years_into_cycle + 3) / 4
}

/// Returns true if the Jalali `year` has 366 days, i.e. Esfand has 30 days.
///
/// ```
/// assert!(jalali::is_jalali_leap_year(1403));
/// assert!(!jalali::is_jalali_leap_year(1404));
/// ```
pub fn is_jalali_leap_year(year: i32) -> bool {
    let years = year as i64 - JALALI_EPOCH_YEAR;
    leap_days(years + 1) - leap_days(years) == 1
}

/// Converts a Gregorian date to the Jalali calendar.
///
/// The function performs no validation. Months outside `1..=12` carry into the year and days
/// outside the month carry into the following (or preceding) months, so any input yields some
/// valid Jalali date. Years are supported as long as the day count fits comfortably in an `i64`,
/// which covers every `i32` year.
///
/// ```
/// use jalali::{gregorian_to_jalali, JalaliDate};
///
/// assert_eq!(gregorian_to_jalali(2025, 10, 17), JalaliDate::new(1404, 7, 25));
/// ```
pub fn gregorian_to_jalali(year: i32, month: i32, day: i32) -> JalaliDate {
    let jalali_day_number =
        gregorian_day_number(year as i64, month as i64, day as i64) - EPOCH_OFFSET_DAYS;

    let (cycles, mut day) = jalali_day_number.div_mod_floor(&JALALI_CYCLE_DAYS);
    let mut year = JALALI_EPOCH_YEAR + JALALI_CYCLE_YEARS * cycles + 4 * (day / QUADRENNIUM_DAYS);
    day %= QUADRENNIUM_DAYS;
    // The first year of a block is the leap year. Past it, the remaining years are 365 days.
    if day >= LEAP_YEAR_DAYS {
        year += (day - 1) / YEAR_DAYS;
        day = (day - 1) % YEAR_DAYS;
    }

    let mut month = 0;
    while month < 11 && day >= JALALI_DAYS_IN_MONTH[month] {
        day -= JALALI_DAYS_IN_MONTH[month];
        month += 1;
    }

    JalaliDate {
        year: year as i32,
        month: month as u8 + 1,
        day: day as u8 + 1,
    }
}

/// Converts a Jalali date to the proleptic Gregorian calendar.
///
/// Like [`gregorian_to_jalali`] this is a total function: out-of-range months carry into the
/// year and out-of-range days carry into neighbouring months. Callers that need to reject such
/// input should check it with [`is_valid_jalali`](crate::is_valid_jalali) first.
///
/// ```
/// use jalali::{jalali_to_gregorian, GregorianDate};
///
/// assert_eq!(jalali_to_gregorian(1404, 7, 25), GregorianDate::new(2025, 10, 17));
/// ```
pub fn jalali_to_gregorian(year: i32, month: i32, day: i32) -> GregorianDate {
    let (year_carry, month_index) = (month as i64 - 1).div_mod_floor(&12);
    let years = year as i64 + year_carry - JALALI_EPOCH_YEAR;
    let jalali_day_number = YEAR_DAYS * years
        + leap_days(years)
        + JALALI_MONTH_STARTS[month_index as usize]
        + day as i64
        - 1;

    gregorian_from_day_number(jalali_day_number + EPOCH_OFFSET_DAYS)
}

/// Days since 1600-01-01 for a Gregorian date. Month and day carry like in
/// [`gregorian_to_jalali`].
pub(crate) fn gregorian_day_number(year: i64, month: i64, day: i64) -> i64 {
    let (year_carry, month_index) = (month - 1).div_mod_floor(&12);
    let year = year + year_carry;

    // Leap years in [1600, year), counted with floor division so years before 1600 count
    // backwards.
    let mut days = YEAR_DAYS * (year - GREGORIAN_EPOCH_YEAR)
        + Integer::div_floor(&(year - 1597), &4)
        - Integer::div_floor(&(year - 1601), &100)
        + Integer::div_floor(&(year - 1601), &400);
    days += GREGORIAN_MONTH_STARTS[month_index as usize];
    if month_index > 1 && is_gregorian_leap_year(year) {
        days += 1;
    }
    days + day - 1
}

/// Inverse of [`gregorian_day_number`].
pub(crate) fn gregorian_from_day_number(day_number: i64) -> GregorianDate {
    let (cycles, mut day) = day_number.div_mod_floor(&GREGORIAN_CYCLE_DAYS);
    let mut year = GREGORIAN_EPOCH_YEAR + 400 * cycles;

    // Past the first (leap) century of the cycle, every century starts with a common year.
    // Shift by one day so the 4-year block arithmetic below can keep assuming that blocks
    // start with a 366-day year.
    if day >= GREGORIAN_LEAP_CENTURY_DAYS {
        day -= 1;
        year += 100 * (day / GREGORIAN_CENTURY_DAYS);
        day %= GREGORIAN_CENTURY_DAYS;
        if day >= YEAR_DAYS {
            day += 1;
        }
    }

    year += 4 * (day / QUADRENNIUM_DAYS);
    day %= QUADRENNIUM_DAYS;
    if day >= LEAP_YEAR_DAYS {
        day -= 1;
        year += day / YEAR_DAYS;
        day %= YEAR_DAYS;
    }

    let leap = is_gregorian_leap_year(year);
    let mut month = 0;
    while month < 12 {
        let month_length = GREGORIAN_DAYS_IN_MONTH[month] + (month == 1 && leap) as i64;
        if day < month_length {
            break;
        }
        day -= month_length;
        month += 1;
    }

    GregorianDate {
        year: year as i32,
        month: month as u8 + 1,
        day: day as u8 + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JALALI_FIXED_POINTS: [((i32, u8, u8), (i32, u8, u8)); 14] = [
        ((979, 1, 1), (1600, 3, 20)),
        ((1, 1, 1), (622, 3, 21)),
        ((1348, 10, 11), (1970, 1, 1)),
        ((1378, 10, 11), (2000, 1, 1)),
        ((1399, 12, 30), (2021, 3, 20)),
        ((1400, 1, 1), (2021, 3, 21)),
        ((1402, 12, 29), (2024, 3, 19)),
        ((1403, 1, 1), (2024, 3, 20)),
        ((1403, 7, 25), (2024, 10, 16)),
        ((1403, 12, 30), (2025, 3, 20)),
        ((1404, 1, 1), (2025, 3, 21)),
        ((1404, 7, 25), (2025, 10, 17)),
        ((1404, 12, 29), (2026, 3, 20)),
        ((1405, 1, 1), (2026, 3, 21)),
    ];

    #[test]
    fn test_fixed_points() {
        for ((jy, jm, jd), (gy, gm, gd)) in JALALI_FIXED_POINTS {
            assert_eq!(
                jalali_to_gregorian(jy, jm as i32, jd as i32),
                GregorianDate::new(gy, gm, gd),
                "{jy}-{jm}-{jd}"
            );
            assert_eq!(
                gregorian_to_jalali(gy, gm as i32, gd as i32),
                JalaliDate::new(jy, jm, jd),
                "{gy}-{gm}-{gd}"
            );
        }
    }

    #[test]
    fn test_leap_days() {
        assert_eq!(leap_days(0), 0);
        assert_eq!(leap_days(1), 1);
        assert_eq!(leap_days(4), 1);
        assert_eq!(leap_days(5), 2);
        assert_eq!(leap_days(32), 8);
        assert_eq!(leap_days(33), 8);
        assert_eq!(leap_days(34), 9);
        // Counting backwards from the epoch: year -1 is the last, common, year of a cycle.
        assert_eq!(leap_days(-1), 0);
        assert_eq!(leap_days(-33), -8);
    }

    #[test]
    fn test_is_jalali_leap_year() {
        let leap_years: Vec<i32> = (1390..=1410).filter(|&y| is_jalali_leap_year(y)).collect();
        assert_eq!(leap_years, vec![1391, 1395, 1399, 1403, 1408]);
        assert!(is_jalali_leap_year(979));
        assert!(!is_jalali_leap_year(979 + 32));
        assert!(is_jalali_leap_year(979 + 33));
    }

    #[test]
    fn test_year_lengths_match_leap_rule() {
        for year in 1..=3000 {
            let start = gregorian_day_number_of_jalali(year, 1, 1);
            let next = gregorian_day_number_of_jalali(year + 1, 1, 1);
            let expected = if is_jalali_leap_year(year) { 366 } else { 365 };
            assert_eq!(next - start, expected, "Jalali year {year}");
        }
    }

    #[test]
    fn test_leap_day_decomposition() {
        // The 366th day of a leap year is Esfand 30, the day after is Farvardin 1.
        let last = jalali_to_gregorian(1403, 12, 30);
        assert_eq!(last.to_jalali(), JalaliDate::new(1403, 12, 30));
        let (y, m, d) = (last.year, last.month as i32, last.day as i32 + 1);
        assert_eq!(gregorian_to_jalali(y, m, d), JalaliDate::new(1404, 1, 1));
        // In a common year Esfand 30 does not exist and carries into the next year.
        assert_eq!(
            jalali_to_gregorian(1404, 12, 30),
            jalali_to_gregorian(1405, 1, 1)
        );
    }

    #[test]
    fn test_gregorian_century_boundaries() {
        for (y, m, d) in [(1700, 3, 1), (1900, 2, 28), (2000, 2, 29), (2100, 12, 31)] {
            let date = GregorianDate::new(y, m, d);
            assert_eq!(date.to_jalali().to_gregorian(), date);
            let day_number = gregorian_day_number(y as i64, m as i64, d as i64);
            assert_eq!(gregorian_from_day_number(day_number), date);
        }
        assert_eq!(gregorian_day_number(1900, 3, 1) - gregorian_day_number(1900, 2, 28), 1);
        assert_eq!(gregorian_day_number(2000, 3, 1) - gregorian_day_number(2000, 2, 28), 2);
    }

    #[test]
    fn test_gregorian_day_number() {
        assert_eq!(gregorian_day_number(1600, 1, 1), 0);
        assert_eq!(gregorian_day_number(1600, 3, 20), EPOCH_OFFSET_DAYS);
        assert_eq!(gregorian_day_number(1601, 1, 1), 366);
        assert_eq!(gregorian_day_number(1599, 1, 1), -365);
        assert_eq!(gregorian_day_number(1596, 1, 1), -1461);
        assert_eq!(gregorian_day_number(1970, 1, 1), 135140);
        assert_eq!(gregorian_day_number(2000, 1, 1), GREGORIAN_CYCLE_DAYS);
    }

    #[test]
    fn test_out_of_range_components_carry() {
        assert_eq!(gregorian_to_jalali(2025, 13, 1), gregorian_to_jalali(2026, 1, 1));
        assert_eq!(gregorian_to_jalali(2025, 0, 1), gregorian_to_jalali(2024, 12, 1));
        assert_eq!(gregorian_to_jalali(2025, 2, 29), gregorian_to_jalali(2025, 3, 1));
        assert_eq!(jalali_to_gregorian(1404, 13, 1), jalali_to_gregorian(1405, 1, 1));
        assert_eq!(jalali_to_gregorian(1404, 1, 0), jalali_to_gregorian(1403, 12, 30));
    }

    #[test]
    fn test_round_trip_every_jalali_day() {
        for year in 1..=3000 {
            for month in 1..=12u8 {
                let days = match month {
                    1..=6 => 31,
                    7..=11 => 30,
                    _ if is_jalali_leap_year(year) => 30,
                    _ => 29,
                };
                for day in 1..=days {
                    let date = JalaliDate::new(year, month, day);
                    assert_eq!(date.to_gregorian().to_jalali(), date);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_every_gregorian_day() {
        let start = gregorian_day_number(1, 1, 1);
        let end = gregorian_day_number(3001, 1, 1);
        let mut previous: Option<JalaliDate> = None;
        for day_number in start..end {
            let date = gregorian_from_day_number(day_number);
            assert_eq!(
                gregorian_day_number(date.year as i64, date.month as i64, date.day as i64),
                day_number
            );
            let jalali = date.to_jalali();
            assert_eq!(jalali.to_gregorian(), date);
            if let Some(previous) = previous {
                assert!(previous < jalali);
            }
            previous = Some(jalali);
        }
    }

    fn gregorian_day_number_of_jalali(year: i32, month: i32, day: i32) -> i64 {
        let date = jalali_to_gregorian(year, month, day);
        gregorian_day_number(date.year as i64, date.month as i64, date.day as i64)
    }
}
