use thiserror::Error;

/// Errors raised where a date-time enters the crate from the outside world.
///
/// The calendar math itself is total and never fails. Only construction of a
/// [`DateTime`](crate::DateTime) from loose fields or from a
/// [`SystemTime`](std::time::SystemTime) is checked.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid date-time: {reason}")]
    InvalidInput { reason: &'static str },
    #[error("date-time is out of range")]
    OutOfRange,
}

impl Error {
    pub(crate) fn invalid(reason: &'static str) -> Self {
        Error::InvalidInput { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::invalid("month must be in 1..=12").to_string(),
            "invalid date-time: month must be in 1..=12"
        );
        assert_eq!(Error::OutOfRange.to_string(), "date-time is out of range");
    }
}
