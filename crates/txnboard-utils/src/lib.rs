//! Utility functions and helpers

use once_cell::sync::OnceCell;
use regex::Regex;

/// Insert a separator between every group of three digits
///
/// Only the digits are grouped; pass the integer part of a number.
pub fn format_number(digits: &str, separator: &str) -> String {
    let mut result = String::new();
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push_str(&separator.chars().rev().collect::<String>());
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.chars().rev().collect()
}

/// Escape text for safe inclusion in HTML content and attribute values
pub fn escape_html(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Drop everything that is neither an ASCII word character nor whitespace
///
/// Accented and other non-ASCII letters are dropped too.
pub fn remove_special_characters(value: &str) -> String {
    static SPECIAL_CHARACTERS: OnceCell<Regex> = OnceCell::new();
    let pattern = SPECIAL_CHARACTERS.get_or_init(|| Regex::new(r"[^A-Za-z0-9_\s]").unwrap());
    pattern.replace_all(value, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number("0", ","), "0");
        assert_eq!(format_number("999", ","), "999");
        assert_eq!(format_number("1000", ","), "1,000");
        assert_eq!(format_number("1234567", ","), "1,234,567");
        assert_eq!(format_number("1234567", " "), "1 234 567");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#39;x&#39;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
        assert_eq!(escape_html("Food and Drink"), "Food and Drink");
    }

    #[test]
    fn test_remove_special_characters() {
        assert_eq!(remove_special_characters("Uber 063015 SF**POOL**"), "Uber 063015 SFPOOL");
        assert_eq!(remove_special_characters("McDonald's"), "McDonalds");
        assert_eq!(remove_special_characters("United Airlines"), "United Airlines");
        assert_eq!(remove_special_characters("#$%"), "");
    }

    #[test]
    fn test_remove_special_characters_ascii_only() {
        assert_eq!(remove_special_characters("Café Müller"), "Caf Mller");
        assert_eq!(remove_special_characters("Tab\tand space_1"), "Tab\tand space_1");
    }
}
