// Persian names used by the formatter and the parser. Index 0 is the first month, Saturday,
// or the first quarter respectively.

pub(crate) const MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

// At most three letters each. Names that are already that short stay whole.
pub(crate) const MONTHS_SHORT: [&str; 12] = [
    "فرو", "ارد", "خرد", "تیر", "مرد", "شهر", "مهر", "آبا", "آذر", "دی", "بهم", "اسف",
];

pub(crate) const WEEKDAYS: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه\u{200c}شنبه",
    "چهارشنبه",
    "پنج\u{200c}شنبه",
    "جمعه",
];

pub(crate) const QUARTERS: [&str; 4] = ["اول", "دوم", "سوم", "چهارم"];

pub(crate) const ORDINAL_SUFFIX: &str = "ام";

pub(crate) const AM: &str = "قبلازظهر";
pub(crate) const PM: &str = "بعدازظهر";
pub(crate) const AM_SHORT: &str = "ق.ظ";
pub(crate) const PM_SHORT: &str = "ب.ظ";

/// The first month, in calendar order, whose full or short name occurs in `input`.
pub(crate) fn find_month(input: &str) -> Option<u8> {
    MONTHS
        .iter()
        .zip(MONTHS_SHORT.iter())
        .position(|(full, short)| input.contains(full) || input.contains(short))
        .map(|index| index as u8 + 1)
}
