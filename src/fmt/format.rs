use std::cmp::Reverse;
use std::fmt::Write;

use lazy_static::lazy_static;
use num_integer::Integer;

use crate::clock::{Clock, SystemClock};
use crate::fmt::digits::to_persian_digits;
use crate::fmt::names;
use crate::jalali::{from_jalali_parts, JalaliDateParts};

/// A placeholder recognised in a format template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `jYYYY`: the full year.
    Year,
    /// `jYY`: the last two characters of the year.
    YearShort,
    /// `jMMMM`: the month name.
    MonthName,
    /// `jMMM`: the abbreviated month name.
    MonthNameShort,
    /// `jMM`: the month number, zero padded.
    MonthPadded,
    /// `jM`: the month number.
    Month,
    /// `jDD`: the day of the month, zero padded.
    DayPadded,
    /// `jDo`: the day of the month as an ordinal.
    DayOrdinal,
    /// `jD`: the day of the month.
    Day,
    /// `jQo`: the quarter of the year as an ordinal word.
    QuarterOrdinal,
    /// `jWo`: the week of the year as an ordinal.
    WeekOfYearOrdinal,
    /// `jW`: the weekday name.
    WeekdayName,
    /// `HH`
    Hour24Padded,
    /// `H`
    Hour24,
    /// `hh`
    Hour12Padded,
    /// `h`
    Hour12,
    /// `A`: before or after noon, spelled out.
    Meridiem,
    /// `a`: before or after noon, abbreviated.
    MeridiemShort,
    /// `mm`
    MinutePadded,
    /// `m`
    Minute,
    /// `ss`
    SecondPadded,
    /// `s`
    Second,
    /// `Z`: the current local UTC offset as `+HH:MM`. Seconds of the offset are dropped.
    UtcOffset,
}

const TOKENS: [(&str, Token); 23] = [
    ("jYYYY", Token::Year),
    ("jYY", Token::YearShort),
    ("jMMMM", Token::MonthName),
    ("jMMM", Token::MonthNameShort),
    ("jMM", Token::MonthPadded),
    ("jM", Token::Month),
    ("jDD", Token::DayPadded),
    ("jDo", Token::DayOrdinal),
    ("jD", Token::Day),
    ("jQo", Token::QuarterOrdinal),
    ("jWo", Token::WeekOfYearOrdinal),
    ("jW", Token::WeekdayName),
    ("HH", Token::Hour24Padded),
    ("H", Token::Hour24),
    ("hh", Token::Hour12Padded),
    ("h", Token::Hour12),
    ("A", Token::Meridiem),
    ("a", Token::MeridiemShort),
    ("mm", Token::MinutePadded),
    ("m", Token::Minute),
    ("ss", Token::SecondPadded),
    ("s", Token::Second),
    ("Z", Token::UtcOffset),
];

lazy_static! {
    // Longest first, so "jMMMM" is tried before "jMMM", "jMM" and "jM".
    static ref TOKENS_BY_LENGTH: Vec<(&'static str, Token)> = {
        let mut tokens = TOKENS.to_vec();
        tokens.sort_by_key(|(text, _)| Reverse(text.len()));
        tokens
    };
}

impl Token {
    /// The longest token at the start of `template`, with its length in bytes.
    pub fn at_start_of(template: &str) -> Option<(Token, usize)> {
        TOKENS_BY_LENGTH
            .iter()
            .find(|(text, _)| template.starts_with(text))
            .map(|&(text, token)| (token, text.len()))
    }
}

/// Renders [`JalaliDateParts`] through a template.
///
/// The template is scanned once from left to right. At each position the longest token that
/// starts there is replaced by its value and anything else is copied as is. Replaced values are
/// never scanned again. With Persian digits enabled, every ASCII digit of the result is then
/// transliterated, including digits that were literal text in the template.
///
/// `Z` reports the offset of the clock at the time of formatting, not the offset that was in
/// effect on the formatted date.
#[derive(Debug, Clone)]
pub struct Formatter<C = SystemClock> {
    persian_digits: bool,
    clock: C,
}

impl Formatter<SystemClock> {
    pub fn new() -> Self {
        Formatter {
            persian_digits: true,
            clock: SystemClock,
        }
    }
}

impl Default for Formatter<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Formatter<C> {
    pub fn persian_digits(self, persian_digits: bool) -> Self {
        Formatter {
            persian_digits,
            ..self
        }
    }

    pub fn clock<C2: Clock>(self, clock: C2) -> Formatter<C2> {
        Formatter {
            persian_digits: self.persian_digits,
            clock,
        }
    }

    pub fn format(&self, parts: &JalaliDateParts, template: &str) -> String {
        let mut out = String::with_capacity(template.len() * 2);
        let mut rest = template;
        while !rest.is_empty() {
            if let Some((token, len)) = Token::at_start_of(rest) {
                self.render(token, parts, &mut out);
                rest = &rest[len..];
            } else {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    out.push(c);
                }
                rest = chars.as_str();
            }
        }
        if self.persian_digits {
            to_persian_digits(&out)
        } else {
            out
        }
    }

    fn render(&self, token: Token, parts: &JalaliDateParts, out: &mut String) {
        // Writing to a String cannot fail.
        let _ = match token {
            Token::Year => write!(out, "{}", parts.year),
            Token::YearShort => {
                let year = parts.year.to_string();
                out.push_str(&year[year.len().saturating_sub(2)..]);
                Ok(())
            }
            Token::MonthName => write!(out, "{}", name(&names::MONTHS, parts.month as i64 - 1)),
            Token::MonthNameShort => {
                write!(out, "{}", name(&names::MONTHS_SHORT, parts.month as i64 - 1))
            }
            Token::MonthPadded => write!(out, "{:02}", parts.month),
            Token::Month => write!(out, "{}", parts.month),
            Token::DayPadded => write!(out, "{:02}", parts.day),
            Token::DayOrdinal => write!(out, "{}{}", parts.day, names::ORDINAL_SUFFIX),
            Token::Day => write!(out, "{}", parts.day),
            Token::QuarterOrdinal => {
                let quarter = Integer::div_floor(&(parts.month as i64 - 1), &3);
                write!(out, "{}", name(&names::QUARTERS, quarter))
            }
            Token::WeekOfYearOrdinal => {
                write!(out, "{}{}", week_of_year(parts), names::ORDINAL_SUFFIX)
            }
            Token::WeekdayName => write!(out, "{}", name(&names::WEEKDAYS, parts.weekday as i64)),
            Token::Hour24Padded => write!(out, "{:02}", parts.hour),
            Token::Hour24 => write!(out, "{}", parts.hour),
            Token::Hour12Padded => write!(out, "{:02}", hour12(parts.hour)),
            Token::Hour12 => write!(out, "{}", hour12(parts.hour)),
            Token::Meridiem => out.write_str(if parts.hour >= 12 { names::PM } else { names::AM }),
            Token::MeridiemShort => out.write_str(if parts.hour >= 12 {
                names::PM_SHORT
            } else {
                names::AM_SHORT
            }),
            Token::MinutePadded => write!(out, "{:02}", parts.minute),
            Token::Minute => write!(out, "{}", parts.minute),
            Token::SecondPadded => write!(out, "{:02}", parts.second),
            Token::Second => write!(out, "{}", parts.second),
            Token::UtcOffset => out.write_str(&self.utc_offset()),
        };
    }

    fn utc_offset(&self) -> String {
        let offset_seconds = match self.clock.utc_offset_seconds(self.clock.now()) {
            Ok(offset) => offset,
            Err(_err) => {
                debug!("no local UTC offset available, formatting as UTC: {}", _err);
                0
            }
        };
        // Whole minutes only; historical LMT offsets carry seconds that `±HH:MM` cannot show.
        let minutes = offset_seconds / 60;
        let sign = if minutes >= 0 { '+' } else { '-' };
        let minutes = minutes.abs();
        format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
    }
}

/// Formats `parts` with a [`Formatter`] reading the system clock.
///
/// ```
/// use jalali::{format_jalali, JalaliDateParts};
///
/// let parts = JalaliDateParts {
///     year: 1404,
///     month: 7,
///     day: 25,
///     weekday: 6,
///     hour: 0,
///     minute: 0,
///     second: 0,
/// };
/// assert_eq!(format_jalali(&parts, "jD jMMM jYYYY", true), "۲۵ مهر ۱۴۰۴");
/// assert_eq!(format_jalali(&parts, "jYYYY/jMM/jDD", false), "1404/07/25");
/// ```
pub fn format_jalali(parts: &JalaliDateParts, template: &str, use_persian_digits: bool) -> String {
    Formatter::new()
        .persian_digits(use_persian_digits)
        .format(parts, template)
}

// Out-of-range indices render as nothing.
fn name(table: &[&'static str], index: i64) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|index| table.get(index).copied())
        .unwrap_or("")
}

fn hour12(hour: u8) -> u8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

// Farvardin 1 is week 1, and every started week after it counts as a new one.
fn week_of_year(parts: &JalaliDateParts) -> i64 {
    let date = from_jalali_parts(parts.year, parts.month as i32, parts.day as i32);
    let start = from_jalali_parts(parts.year, 1, 1);
    let days = date.days_since_unix_epoch() - start.days_since_unix_epoch();
    Integer::div_ceil(&days, &7) + 1
}
