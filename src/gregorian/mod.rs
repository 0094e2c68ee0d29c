pub use date_time::{DateTime, MAX_YEAR, MIN_YEAR};
pub use date_time_builder::DateTimeBuilder;
pub use util::{days_in_gregorian_month, is_gregorian_leap_year};

mod date_time;
mod date_time_builder;
pub(crate) mod util;
