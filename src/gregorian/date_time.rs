use std::time::SystemTime;

use num_integer::Integer;

use crate::calendar::{gregorian_day_number, gregorian_from_day_number, GregorianDate};
use crate::clock::{Clock, SystemClock};
use crate::gregorian::DateTimeBuilder;
use crate::Error;

pub const MIN_YEAR: i32 = -999_999;
pub const MAX_YEAR: i32 = 999_999;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;
const MILLISECONDS_PER_SECOND: i64 = 1_000;

// 1970-01-01 counted from 1600-01-01.
const UNIX_EPOCH_DAY_NUMBER: i64 = 135_140;
// 1970-01-01 was a Thursday.
const UNIX_EPOCH_WEEKDAY: i64 = 4;

/// A Gregorian calendar date and wall-clock time, without a timezone.
///
/// Values produced from a [`SystemTime`] are the local reading of that instant. The fields are
/// always a valid calendar date and time of day; every constructor checks or normalizes them.
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl DateTime {
    pub fn builder() -> DateTimeBuilder {
        DateTimeBuilder::new()
    }

    pub(super) fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        DateTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of `date`. `date` must be a valid calendar date, which every
    /// [`GregorianDate`] returned by the calendar conversions is.
    pub(crate) fn at_midnight(date: GregorianDate) -> Self {
        DateTime::new(date.year, date.month, date.day, 0, 0, 0)
    }

    /// The local date and time of `value`, read through the C library's timezone.
    ///
    /// Fails with [`Error::InvalidInput`] if the instant cannot be represented.
    pub fn from_system_time(value: SystemTime) -> Result<Self, Error> {
        SystemClock.local_date_time(value)
    }

    /// The current local date and time.
    pub fn now() -> Result<Self, Error> {
        let clock = SystemClock;
        clock.local_date_time(clock.now())
    }

    /// Interprets `seconds` since 1970-01-01T00:00:00 as a wall-clock reading.
    pub fn from_unix_seconds(seconds: i64) -> Result<Self, Error> {
        let (days, second_of_day) = seconds.div_mod_floor(&SECONDS_PER_DAY);
        let date = checked_date_from_days_since_unix_epoch(days)
            .ok_or(Error::invalid("instant is outside the representable range"))?;
        let (hour, rest) = second_of_day.div_rem(&SECONDS_PER_HOUR);
        let (minute, second) = rest.div_rem(&SECONDS_PER_MINUTE);
        Ok(DateTime::new(
            date.year,
            date.month,
            date.day,
            hour as u8,
            minute as u8,
            second as u8,
        ))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn date(&self) -> GregorianDate {
        GregorianDate::new(self.year, self.month, self.day)
    }

    /// Day of the week, Sunday = 0 through Saturday = 6.
    pub fn weekday(&self) -> u8 {
        (self.days_since_unix_epoch() + UNIX_EPOCH_WEEKDAY).mod_floor(&7) as u8
    }

    pub fn days_since_unix_epoch(&self) -> i64 {
        gregorian_day_number(self.year as i64, self.month as i64, self.day as i64)
            - UNIX_EPOCH_DAY_NUMBER
    }

    /// Milliseconds since 1970-01-01T00:00:00, treating the fields as a UTC reading.
    ///
    /// Two values can be subtracted without daylight-saving transitions getting in the way.
    pub fn unix_milliseconds(&self) -> i64 {
        let seconds = self.days_since_unix_epoch() * SECONDS_PER_DAY
            + self.hour as i64 * SECONDS_PER_HOUR
            + self.minute as i64 * SECONDS_PER_MINUTE
            + self.second as i64;
        seconds * MILLISECONDS_PER_SECOND
    }

    // Calendar-field arithmetic. Each operation changes one field and then lets the overflow
    // carry, the way C's mktime normalizes a struct tm: 2024-02-29 plus one year is
    // 2025-03-01, and 2025-01-31 plus one month is 2025-03-03. The time of day is untouched.

    pub fn checked_add_years(&self, years: i32) -> Option<Self> {
        self.normalized(self.year as i64 + years as i64, self.month as i64, self.day as i64)
    }

    pub fn checked_add_months(&self, months: i32) -> Option<Self> {
        self.normalized(self.year as i64, self.month as i64 + months as i64, self.day as i64)
    }

    pub fn checked_add_days(&self, days: i32) -> Option<Self> {
        self.normalized(self.year as i64, self.month as i64, self.day as i64 + days as i64)
    }

    pub fn add_years(&self, years: i32) -> Self {
        self.checked_add_years(years).expect("date-time year arithmetic overflow")
    }

    pub fn add_months(&self, months: i32) -> Self {
        self.checked_add_months(months).expect("date-time month arithmetic overflow")
    }

    pub fn add_days(&self, days: i32) -> Self {
        self.checked_add_days(days).expect("date-time day arithmetic overflow")
    }

    fn normalized(&self, year: i64, month: i64, day: i64) -> Option<Self> {
        let days = gregorian_day_number(year, month, day) - UNIX_EPOCH_DAY_NUMBER;
        let date = checked_date_from_days_since_unix_epoch(days)?;
        Some(DateTime::new(
            date.year,
            date.month,
            date.day,
            self.hour,
            self.minute,
            self.second,
        ))
    }
}

fn checked_date_from_days_since_unix_epoch(days: i64) -> Option<GregorianDate> {
    let day_number = days.checked_add(UNIX_EPOCH_DAY_NUMBER)?;
    let first = gregorian_day_number(MIN_YEAR as i64, 1, 1);
    let last = gregorian_day_number(MAX_YEAR as i64, 12, 31);
    if day_number < first || day_number > last {
        return None;
    }
    Some(gregorian_from_day_number(day_number))
}
