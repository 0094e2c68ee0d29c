use std::time::SystemTime;

use num_traits::NumCast;

use crate::gregorian::DateTime;
use crate::Error;

/// Source of the current instant and of the local UTC offset.
///
/// This is the only place the crate touches the environment. The `Z` format token and
/// [`JalaliDateParts::now`](crate::JalaliDateParts::now) read through it, so tests and callers
/// that need deterministic output can substitute a [`FixedClock`].
pub trait Clock {
    fn now(&self) -> SystemTime;

    /// Offset of local time from UTC at `at`, in seconds east of Greenwich.
    fn utc_offset_seconds(&self, at: SystemTime) -> Result<i32, Error>;

    /// The local civil reading of `at`.
    fn local_date_time(&self, at: SystemTime) -> Result<DateTime, Error> {
        let seconds = unix_seconds(at)?;
        let offset = self.utc_offset_seconds(at)?;
        let local = seconds
            .checked_add(offset as i64)
            .ok_or(Error::invalid("instant is outside the representable range"))?;
        DateTime::from_unix_seconds(local)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> SystemTime {
        (**self).now()
    }

    fn utc_offset_seconds(&self, at: SystemTime) -> Result<i32, Error> {
        (**self).utc_offset_seconds(at)
    }
}

/// The process clock and timezone, as seen by the C library.
///
/// The timezone follows the usual C library rules (`TZ`, then `/etc/localtime`). Nothing is
/// cached: every call asks `localtime_r` again.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }

    #[cfg(unix)]
    fn utc_offset_seconds(&self, at: SystemTime) -> Result<i32, Error> {
        let seconds = unix_seconds(at)?;
        let time = match <libc::time_t as NumCast>::from(seconds) {
            Some(time) => time,
            None => {
                debug!("{} seconds since the epoch does not fit in time_t", seconds);
                return Err(Error::invalid("instant does not fit in time_t"));
            }
        };
        // SAFETY: tm is plain old data, and localtime_r only writes into the struct we own.
        let mut local: libc::tm = unsafe { std::mem::zeroed() };
        let result = unsafe { libc::localtime_r(&time, &mut local) };
        if result.is_null() {
            debug!("localtime_r failed for {} seconds since the epoch", seconds);
            return Err(Error::invalid("local time is unavailable for this instant"));
        }
        Ok(local.tm_gmtoff as i32)
    }

    #[cfg(not(unix))]
    fn utc_offset_seconds(&self, at: SystemTime) -> Result<i32, Error> {
        unix_seconds(at)?;
        Ok(0)
    }
}

/// A clock stopped at one instant, with a constant UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: SystemTime,
    utc_offset_seconds: i32,
}

impl FixedClock {
    pub fn new(now: SystemTime, utc_offset_seconds: i32) -> Self {
        FixedClock {
            now,
            utc_offset_seconds,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.now
    }

    fn utc_offset_seconds(&self, at: SystemTime) -> Result<i32, Error> {
        unix_seconds(at)?;
        Ok(self.utc_offset_seconds)
    }
}

/// Whole seconds since the Unix epoch, rounded towards negative infinity (time_t semantics).
pub(crate) fn unix_seconds(value: SystemTime) -> Result<i64, Error> {
    let out_of_range = || Error::invalid("instant is outside the representable range");
    match value.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(duration) => i64::try_from(duration.as_secs()).map_err(|_| out_of_range()),
        Err(before) => {
            let duration = before.duration();
            let seconds = i64::try_from(duration.as_secs()).map_err(|_| out_of_range())?;
            let partial = (duration.subsec_nanos() > 0) as i64;
            Ok(-seconds - partial)
        }
    }
}
