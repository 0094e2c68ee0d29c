//! Conversion between the Jalali (Solar Hijri) and Gregorian calendars.
//!
//! The core is [`gregorian_to_jalali`] and [`jalali_to_gregorian`], which map calendar dates
//! through a day count. Built on them are [`JalaliDateParts`], a Jalali date with weekday and
//! time of day, and the operations on it: validation, calendar arithmetic with [`Period`],
//! comparison, and Persian formatting and parsing.
//!
//! ```
//! use jalali::{format_jalali, gregorian_to_jalali, jalali_to_gregorian, JalaliDateParts};
//!
//! let date = gregorian_to_jalali(2025, 10, 17);
//! assert_eq!((date.year, date.month, date.day), (1404, 7, 25));
//! assert_eq!(jalali_to_gregorian(1404, 7, 25).to_jalali(), date);
//!
//! let parts = JalaliDateParts::from(jalali::from_jalali_parts(1404, 7, 25));
//! assert_eq!(format_jalali(&parts, "jW jD jMMMM jYYYY", true), "جمعه ۲۵ مهر ۱۴۰۴");
//! ```
//!
//! Enable the `logging` feature to have the crate report through the [`log`] facade.
//!
//! [`log`]: https://docs.rs/log

#[macro_use]
mod logging;

pub use calendar::{
    gregorian_to_jalali, is_jalali_leap_year, jalali_to_gregorian, leap_days, GregorianDate,
    JalaliDate,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::Error;
pub use fmt::{format_jalali, parse_jalali, to_latin_digits, to_persian_digits, Formatter};
pub use gregorian::{days_in_gregorian_month, is_gregorian_leap_year, DateTime, DateTimeBuilder};
pub use jalali::{
    add_to_jalali, checked_add_to_jalali, checked_subtract_from_jalali, days_in_jalali_month,
    difference_in_days, difference_in_months, end_of_jalali_month, from_jalali_parts, is_after,
    is_before, is_same_day, is_valid_jalali, start_of_jalali_month, subtract_from_jalali,
    to_jalali_parts, JalaliDateParts,
};
pub use period::Period;

pub mod calendar;
pub mod clock;
mod error;
pub mod fmt;
pub mod gregorian;
pub mod jalali;
mod period;
