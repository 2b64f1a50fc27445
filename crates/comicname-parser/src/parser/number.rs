//! Helpers for interpreting numeric token text.

/// Convert spelled-out or Roman numerals one through twelve.
pub(crate) fn word_to_number(word: &str) -> Option<u32> {
    match word.to_uppercase().as_str() {
        "ONE" | "I" => Some(1),
        "TWO" | "II" => Some(2),
        "THREE" | "III" => Some(3),
        "FOUR" | "IV" => Some(4),
        "FIVE" | "V" => Some(5),
        "SIX" | "VI" => Some(6),
        "SEVEN" | "VII" => Some(7),
        "EIGHT" | "VIII" => Some(8),
        "NINE" | "IX" => Some(9),
        "TEN" | "X" => Some(10),
        "ELEVEN" | "XI" => Some(11),
        "TWELVE" | "XII" => Some(12),
        _ => None,
    }
}

/// A year-like number: `'89`, or four digits once leading zeros are gone.
pub(crate) fn is_year_shaped(text: &str) -> bool {
    if let Some(short) = text.strip_prefix('\'') {
        return !short.is_empty() && short.chars().all(|c| c.is_ascii_digit());
    }
    text.chars().all(|c| c.is_ascii_digit()) && text.trim_start_matches('0').len() == 4
}

/// Strip `#` and the leading zeros of the integer part. A zero issue stays `0`.
///
/// `#078.BEY` → `78.BEY`, `000` → `0`.
pub(crate) fn normalize_number(text: &str) -> String {
    let text = text.trim_start_matches('#');
    let digits = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let (integer, suffix) = text.split_at(digits);
    let trimmed = integer.trim_start_matches('0');
    if trimmed.is_empty() && !integer.is_empty() {
        format!("0{suffix}")
    } else {
        format!("{trimmed}{suffix}")
    }
}

/// Numeric value of a count such as the `6` in `(of 06)` or `(of six)`.
pub(crate) fn count_value(text: &str) -> String {
    let text = text.trim_start_matches('#');
    if let Ok(value) = text.parse::<u64>() {
        return value.to_string();
    }
    match word_to_number(text) {
        Some(value) => value.to_string(),
        None => normalize_number(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_to_number() {
        assert_eq!(word_to_number("three"), Some(3));
        assert_eq!(word_to_number("XII"), Some(12));
        assert_eq!(word_to_number("thirteen"), None);
    }

    #[test]
    fn test_year_shape() {
        assert!(is_year_shaped("1991"));
        assert!(is_year_shaped("02021"));
        assert!(is_year_shaped("'89"));
        assert!(!is_year_shaped("'"));
        assert!(!is_year_shaped("067"));
        assert!(!is_year_shaped("12.1"));
    }

    #[test]
    fn test_normalize_number() {
        assert_eq!(normalize_number("#078.BEY"), "78.BEY");
        assert_eq!(normalize_number("067"), "67");
        assert_eq!(normalize_number("000"), "0");
        assert_eq!(normalize_number("0.5"), "0.5");
        assert_eq!(normalize_number("AU"), "AU");
    }

    #[test]
    fn test_count_value() {
        assert_eq!(count_value("06"), "6");
        assert_eq!(count_value("#2"), "2");
        assert_eq!(count_value("six"), "6");
    }
}
