use crate::gregorian::date_time::{MAX_YEAR, MIN_YEAR};
use crate::gregorian::util::days_in_gregorian_month;
use crate::gregorian::DateTime;
use crate::Error;

/// Assembles a [`DateTime`] from individual fields.
///
/// Only the year is mandatory. Month and day default to 1 and the clock fields default to 0.
#[derive(Default)]
pub struct DateTimeBuilder {
    year: Option<i32>,
    month: Option<u8>,
    day: Option<u8>,
    hour: Option<u8>,
    minute: Option<u8>,
    second: Option<u8>,
}

impl DateTimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year(&mut self, year: i32) -> &mut Self {
        self.year = Some(year);
        self
    }

    pub fn month(&mut self, month: u8) -> &mut Self {
        self.month = Some(month);
        self
    }

    pub fn day(&mut self, day: u8) -> &mut Self {
        self.day = Some(day);
        self
    }

    pub fn hour(&mut self, hour: u8) -> &mut Self {
        self.hour = Some(hour);
        self
    }

    pub fn minute(&mut self, minute: u8) -> &mut Self {
        self.minute = Some(minute);
        self
    }

    pub fn second(&mut self, second: u8) -> &mut Self {
        self.second = Some(second);
        self
    }

    /// Like [`checked_build`](Self::checked_build), but panics on invalid fields.
    pub fn build(&self) -> DateTime {
        match self.checked_build() {
            Ok(dt) => dt,
            Err(e) => panic!("{:?}", e),
        }
    }

    pub fn checked_build(&self) -> Result<DateTime, Error> {
        let year = self.year.ok_or(Error::invalid("no year provided"))?;
        let month = self.month.unwrap_or(1);
        let day = self.day.unwrap_or(1);
        let hour = self.hour.unwrap_or(0);
        let minute = self.minute.unwrap_or(0);
        let second = self.second.unwrap_or(0);

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::OutOfRange);
        }
        if !(1..=12).contains(&month) {
            return Err(Error::invalid("month must be in 1..=12"));
        }
        if day < 1 || day > days_in_gregorian_month(year as i64, month) {
            return Err(Error::invalid("day is out of range for the month"));
        }
        if hour >= 24 || minute >= 60 || second >= 60 {
            return Err(Error::invalid("time of day is out of range"));
        }

        Ok(DateTime::new(year, month, day, hour, minute, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let dt = DateTimeBuilder::new()
            .year(2025)
            .month(10)
            .day(17)
            .hour(8)
            .minute(30)
            .second(15)
            .build();
        assert_eq!(dt.year(), 2025);
        assert_eq!(dt.month(), 10);
        assert_eq!(dt.day(), 17);
        assert_eq!(dt.hour(), 8);
        assert_eq!(dt.minute(), 30);
        assert_eq!(dt.second(), 15);

        // Defaults.
        let dt = DateTimeBuilder::new().year(1970).build();
        assert_eq!(dt, DateTime::from_unix_seconds(0).unwrap());

        // Leap day.
        let result = DateTimeBuilder::new().year(2024).month(2).day(29).checked_build();
        assert!(result.is_ok());

        // Out of bounds year.
        let result = DateTimeBuilder::new().year(1_000_000).checked_build();
        assert_eq!(result, Err(Error::OutOfRange));

        // Missing year.
        let result = DateTimeBuilder::new().month(1).day(1).checked_build();
        assert_eq!(result, Err(Error::invalid("no year provided")));

        // Invalid month.
        let result = DateTimeBuilder::new().year(2025).month(13).checked_build();
        assert_eq!(result, Err(Error::invalid("month must be in 1..=12")));
        let result = DateTimeBuilder::new().year(2025).month(0).checked_build();
        assert_eq!(result, Err(Error::invalid("month must be in 1..=12")));

        // Invalid day of month.
        let result = DateTimeBuilder::new().year(2025).month(2).day(29).checked_build();
        assert_eq!(result, Err(Error::invalid("day is out of range for the month")));
        let result = DateTimeBuilder::new().year(2025).month(4).day(31).checked_build();
        assert_eq!(result, Err(Error::invalid("day is out of range for the month")));
        let result = DateTimeBuilder::new().year(2025).month(4).day(0).checked_build();
        assert_eq!(result, Err(Error::invalid("day is out of range for the month")));

        // Invalid time of day.
        for (hour, minute, second) in [(24, 0, 0), (23, 60, 0), (23, 59, 60)] {
            let result = DateTimeBuilder::new()
                .year(2025)
                .hour(hour)
                .minute(minute)
                .second(second)
                .checked_build();
            assert_eq!(result, Err(Error::invalid("time of day is out of range")));
        }
    }

    #[test]
    #[should_panic]
    fn build_panics_on_invalid_fields() {
        DateTimeBuilder::new().year(2025).month(2).day(30).build();
    }
}
