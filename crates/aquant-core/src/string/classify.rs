//! Whole-string character classification.

use crate::conversion::{ParseError, is_space_byte, parse_long};

fn all_ascii(s: &str, pred: fn(&u8) -> bool) -> bool {
    !s.is_empty() && s.bytes().all(|b| pred(&b))
}

/// True if `s` is an optionally signed decimal integer, allowing surrounding
/// whitespace. Magnitude is not checked.
#[must_use]
pub fn is_int(s: &str) -> bool {
    matches!(parse_long(s), Ok(_) | Err(ParseError::OutOfRange))
}

/// True if `s` is non-empty and every byte is `[A-Za-z]`.
#[must_use]
pub fn is_alpha(s: &str) -> bool {
    all_ascii(s, u8::is_ascii_alphabetic)
}

#[must_use]
pub fn is_digit(s: &str) -> bool {
    all_ascii(s, u8::is_ascii_digit)
}

#[must_use]
pub fn is_alnum(s: &str) -> bool {
    all_ascii(s, u8::is_ascii_alphanumeric)
}

/// True if `s` is non-empty and consists only of C-locale whitespace.
#[must_use]
pub fn is_space(s: &str) -> bool {
    all_ascii(s, |b| is_space_byte(*b))
}

/// True for an absent or zero-length string.
#[must_use]
pub fn is_empty(s: Option<&str>) -> bool {
    s.is_none_or(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert!(is_int("123"));
        assert!(is_int("-45"));
        assert!(is_int("  +678  "));
        assert!(is_int("99999999999999999999"));
        assert!(!is_int("12.3"));
        assert!(!is_int("abc"));
        assert!(!is_int("123a"));
        assert!(!is_int(""));
    }

    #[test]
    fn character_classes() {
        assert!(is_alpha("HelloWorld"));
        assert!(!is_alpha("Hello World"));
        assert!(!is_alpha("Hello9"));
        assert!(is_digit("0123456789"));
        assert!(!is_digit("123a"));
        assert!(is_alnum("Alpha123"));
        assert!(!is_alnum("Alpha!123"));
        assert!(is_space(" \t\n\r "));
        assert!(is_space("\x0B\x0C"));
        assert!(!is_space(" a "));
        assert!(!is_alpha(""));
    }

    #[test]
    fn emptiness() {
        assert!(is_empty(None));
        assert!(is_empty(Some("")));
        assert!(!is_empty(Some("a")));
    }
}
