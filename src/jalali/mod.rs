//! Jalali dates with a time of day, and the operations built on them.

use std::time::SystemTime;

use crate::calendar::{gregorian_to_jalali, jalali_to_gregorian, JalaliDate};
use crate::clock::{Clock, SystemClock};
use crate::gregorian::DateTime;
use crate::Error;

pub use arithmetic::{
    add_to_jalali, checked_add_to_jalali, checked_subtract_from_jalali, subtract_from_jalali,
};
pub use compare::{difference_in_days, difference_in_months, is_after, is_before, is_same_day};
pub use validate::{
    days_in_jalali_month, end_of_jalali_month, is_valid_jalali, start_of_jalali_month,
};

mod arithmetic;
mod compare;
mod validate;

/// A Jalali date together with its weekday and a time of day.
///
/// `weekday` counts from Saturday (0) to Friday (6), the order of the Iranian week. It is derived
/// from the date, so code that changes `year`, `month` or `day` must recompute it; the functions
/// in this crate always return consistent values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JalaliDateParts {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub weekday: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl JalaliDateParts {
    /// The Jalali reading of a Gregorian date-time.
    pub fn from_date_time(value: &DateTime) -> Self {
        let JalaliDate { year, month, day } =
            gregorian_to_jalali(value.year(), value.month() as i32, value.day() as i32);
        JalaliDateParts {
            year,
            month,
            day,
            // Sunday = 0 becomes Saturday = 0.
            weekday: (value.weekday() + 1) % 7,
            hour: value.hour(),
            minute: value.minute(),
            second: value.second(),
        }
    }

    /// The current local date and time.
    pub fn now() -> Result<Self, Error> {
        Self::now_with(SystemClock)
    }

    pub fn now_with<C: Clock>(clock: C) -> Result<Self, Error> {
        let local = clock.local_date_time(clock.now())?;
        Ok(JalaliDateParts::from_date_time(&local))
    }

    pub fn date(&self) -> JalaliDate {
        JalaliDate::new(self.year, self.month, self.day)
    }

    pub fn is_valid(&self) -> bool {
        is_valid_jalali(self.year, self.month as i32, self.day as i32)
    }

    /// The equivalent Gregorian date-time, clock fields included.
    ///
    /// # Panics
    ///
    /// Panics if the clock fields are outside their ranges.
    pub fn to_date_time(&self) -> DateTime {
        let date = jalali_to_gregorian(self.year, self.month as i32, self.day as i32);
        DateTime::builder()
            .year(date.year)
            .month(date.month)
            .day(date.day)
            .hour(self.hour)
            .minute(self.minute)
            .second(self.second)
            .build()
    }

    /// Replaces the clock fields with those of `other`.
    pub(crate) fn with_time_of(self, other: &JalaliDateParts) -> Self {
        JalaliDateParts {
            hour: other.hour,
            minute: other.minute,
            second: other.second,
            ..self
        }
    }
}

impl From<DateTime> for JalaliDateParts {
    fn from(value: DateTime) -> Self {
        JalaliDateParts::from_date_time(&value)
    }
}

/// Converts an instant to the local Jalali date and time.
///
/// Fails with [`Error::InvalidInput`] when the instant has no local reading, for example because
/// it lies outside the range of the C library's `time_t`.
pub fn to_jalali_parts(value: SystemTime) -> Result<JalaliDateParts, Error> {
    let local = DateTime::from_system_time(value)?;
    Ok(JalaliDateParts::from_date_time(&local))
}

/// Local midnight of the Gregorian day that corresponds to a Jalali date.
///
/// No validation is done: an out-of-range day or month carries into the neighbouring months
/// exactly as [`jalali_to_gregorian`] does. Use [`is_valid_jalali`] first when that matters.
pub fn from_jalali_parts(year: i32, month: i32, day: i32) -> DateTime {
    DateTime::at_midnight(jalali_to_gregorian(year, month, day))
}
