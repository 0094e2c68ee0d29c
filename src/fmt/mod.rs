//! Rendering Jalali dates as Persian text, and reading them back.

pub use digits::{to_latin_digits, to_persian_digits};
pub use format::{format_jalali, Formatter, Token};
pub use parse::parse_jalali;

mod digits;
mod format;
mod names;
mod parse;
