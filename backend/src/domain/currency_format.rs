//! Money formatting and amount parsing for the vending machine.
//!
//! Every amount shown to the user (running total, pending-input echo, log
//! narration, product prices) goes through [`format_currency`], so the same
//! integer always renders the same way.

/// Currency unit appended to amounts in user-facing messages
pub const CURRENCY_UNIT: &str = "원";

const THOUSANDS_SEPARATOR: char = ',';

/// Group an amount with thousands separators: `1000` -> `"1,000"`
pub fn format_currency(amount: u64) -> String {
    group_digits(&amount.to_string())
}

/// Group a string of ASCII digits from the right, whatever its length
pub fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }

    grouped
}

/// Grouped amount followed by the currency unit: `1500` -> `"1,500원"`
pub fn format_won(amount: u64) -> String {
    format!("{}{}", format_currency(amount), CURRENCY_UNIT)
}

/// Remove display-only thousands separators from typed text
pub fn strip_separators(raw: &str) -> String {
    raw.replace(THOUSANDS_SEPARATOR, "")
}

/// True for a non-empty run of ASCII digits of any length
pub fn is_digit_string(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Parse typed text as a whole, non-negative amount.
///
/// Separators are ignored. Anything other than ASCII digits (signs, decimal
/// points, whitespace) is rejected, as is a value that does not fit in `u64`.
pub fn parse_amount(raw: &str) -> Option<u64> {
    let cleaned = strip_separators(raw);
    if !is_digit_string(&cleaned) {
        return None;
    }
    cleaned.parse::<u64>().ok()
}

/// Echo of the pending input for the input box.
///
/// Nothing typed echoes as an empty string so the placeholder stays visible.
/// Digits are grouped as text, so amounts too large for `u64` still echo.
pub fn format_pending_input(pending: &str) -> String {
    if !is_digit_string(pending) {
        return String::new();
    }

    let significant = pending.trim_start_matches('0');
    if significant.is_empty() {
        "0".to_string()
    } else {
        group_digits(significant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(0), "0");
        assert_eq!(format_currency(300), "300");
        assert_eq!(format_currency(1000), "1,000");
        assert_eq!(format_currency(12000), "12,000");
        assert_eq!(format_currency(123456), "123,456");
        assert_eq!(format_currency(1234567), "1,234,567");
        assert_eq!(format_currency(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_format_currency_is_pure() {
        assert_eq!(format_currency(98765), format_currency(98765));
    }

    #[test]
    fn test_format_won() {
        assert_eq!(format_won(1500), "1,500원");
        assert_eq!(format_won(0), "0원");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1500"), Some(1500));
        assert_eq!(parse_amount("12,000"), Some(12000));
        assert_eq!(parse_amount(",1,2,"), Some(12));
        assert_eq!(parse_amount("007"), Some(7));
        assert_eq!(parse_amount("0"), Some(0));

        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount(","), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(parse_amount("1.5"), None);
        assert_eq!(parse_amount(" 10"), None);
        // digits, but out of range for an amount
        assert_eq!(parse_amount("99999999999999999999999"), None);
        assert_eq!(parse_amount("18446744073709551615"), Some(u64::MAX));
    }

    #[test]
    fn test_format_pending_input() {
        assert_eq!(format_pending_input(""), "");
        assert_eq!(format_pending_input("12000"), "12,000");
        assert_eq!(format_pending_input("007"), "7");
        assert_eq!(format_pending_input("0"), "0");
        assert_eq!(format_pending_input("000"), "0");
    }

    #[test]
    fn test_format_pending_input_beyond_u64() {
        assert_eq!(
            format_pending_input("99999999999999999999"),
            "99,999,999,999,999,999,999"
        );
        assert_eq!(format_pending_input("0018446744073709551616"), "18,446,744,073,709,551,616");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1"), "1");
        assert_eq!(group_digits("1234"), "1,234");
        assert_eq!(group_digits("123456789012345678901234"), "123,456,789,012,345,678,901,234");
    }

    #[test]
    fn test_is_digit_string() {
        assert!(is_digit_string("0"));
        assert!(is_digit_string("99999999999999999999999"));
        assert!(!is_digit_string(""));
        assert!(!is_digit_string("1,000"));
        assert!(!is_digit_string("１２"));
    }
}
