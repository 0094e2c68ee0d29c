const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Replaces every ASCII digit with the corresponding Persian digit.
pub fn to_persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| c.to_digit(10).map_or(c, |d| PERSIAN_DIGITS[d as usize]))
        .collect()
}

/// Replaces Persian and Arabic-Indic digits with ASCII digits.
pub fn to_latin_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            let position = PERSIAN_DIGITS
                .iter()
                .position(|&p| p == c)
                .or_else(|| ARABIC_INDIC_DIGITS.iter().position(|&a| a == c));
            match position {
                Some(d) => char::from(b'0' + d as u8),
                None => c,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_persian_digits() {
        assert_eq!(to_persian_digits("1404/07/25"), "۱۴۰۴/۰۷/۲۵");
        assert_eq!(to_persian_digits("ساعت 09:30"), "ساعت ۰۹:۳۰");
        assert_eq!(to_persian_digits("no digits"), "no digits");
        assert_eq!(to_persian_digits("۱۲"), "۱۲");
    }

    #[test]
    fn test_to_latin_digits() {
        assert_eq!(to_latin_digits("۱۴۰۴/۰۷/۲۵"), "1404/07/25");
        assert_eq!(to_latin_digits("٢٥ مهر ١٤٠٤"), "25 مهر 1404");
        assert_eq!(to_latin_digits("mixed ۱ and 2"), "mixed 1 and 2");
    }
}
