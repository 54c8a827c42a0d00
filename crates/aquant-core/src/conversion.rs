//! Whole-line numeric parsing for the console readers.
//!
//! A line is accepted only if, after optional leading whitespace, it holds a
//! single number followed by nothing but whitespace. Values outside the
//! target type's range are rejected rather than clamped.
//!
//! Whitespace is the C-locale set: space, `\t`, `\n`, `\v`, `\f` and `\r`.
//! Floats also accept the hexadecimal form `0x1.8p3`.

use thiserror::Error;

/// Why a line was not accepted as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("not a number")]
    Invalid,
    #[error("value out of range")]
    OutOfRange,
}

/// Result of scanning a decimal integer prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStatus {
    Success,
    Overflow,
    Underflow,
}

/// C-locale `isspace`. Unlike [`u8::is_ascii_whitespace`] this includes
/// vertical tab (0x0B).
#[must_use]
pub const fn is_space_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Scan a base-10 integer prefix of `s` (strtol rules, base 10).
///
/// Returns `(value, consumed_bytes, status)`. `consumed_bytes == 0` means no
/// digits were found. On overflow the value saturates at `i64::MAX`/`i64::MIN`
/// and the remaining digits are still consumed.
pub fn scan_decimal(s: &[u8]) -> (i64, usize, ConversionStatus) {
    let len = s.len();
    let mut i = 0;

    while i < len && is_space_byte(s[i]) {
        i += 1;
    }

    let mut negative = false;
    if i < len && (s[i] == b'-' || s[i] == b'+') {
        negative = s[i] == b'-';
        i += 1;
    }

    let abs_max = if negative {
        i64::MIN.unsigned_abs()
    } else {
        i64::MAX as u64
    };
    let cutoff = abs_max / 10;
    let cutlim = abs_max % 10;

    let mut acc: u64 = 0;
    let mut any_digits = false;
    let mut overflow = false;

    while i < len && s[i].is_ascii_digit() {
        let digit = u64::from(s[i] - b'0');
        any_digits = true;
        if !overflow {
            if acc > cutoff || (acc == cutoff && digit > cutlim) {
                overflow = true;
            } else {
                acc = acc * 10 + digit;
            }
        }
        i += 1;
    }

    if !any_digits {
        return (0, 0, ConversionStatus::Success);
    }

    if overflow {
        return if negative {
            (i64::MIN, i, ConversionStatus::Underflow)
        } else {
            (i64::MAX, i, ConversionStatus::Overflow)
        };
    }

    let value = if negative {
        (acc as i64).wrapping_neg()
    } else {
        acc as i64
    };
    (value, i, ConversionStatus::Success)
}

fn only_whitespace(rest: &[u8]) -> bool {
    rest.iter().all(|&b| is_space_byte(b))
}

/// Parse a whole line as an `i64`.
pub fn parse_long(line: &str) -> Result<i64, ParseError> {
    if line.is_empty() {
        return Err(ParseError::Empty);
    }
    let bytes = line.as_bytes();
    let (value, consumed, status) = scan_decimal(bytes);
    if consumed == 0 || !only_whitespace(&bytes[consumed..]) {
        return Err(ParseError::Invalid);
    }
    match status {
        ConversionStatus::Success => Ok(value),
        ConversionStatus::Overflow | ConversionStatus::Underflow => Err(ParseError::OutOfRange),
    }
}

/// Parse a whole line as an `i32`.
pub fn parse_int(line: &str) -> Result<i32, ParseError> {
    let value = parse_long(line)?;
    i32::try_from(value).map_err(|_| ParseError::OutOfRange)
}

/// Returns true if the mantissa of a float literal contains a non-zero digit.
fn mantissa_is_nonzero(text: &str) -> bool {
    text.bytes()
        .take_while(|b| !matches!(b, b'e' | b'E'))
        .any(|b| matches!(b, b'1'..=b'9'))
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Exact `2^exp` for exponents in the normal range.
fn pow2(exp: i32) -> f64 {
    debug_assert!((-1022..=1023).contains(&exp));
    f64::from_bits(((exp + 1023) as u64) << 52)
}

/// `value * 2^exp`, overflowing to infinity and underflowing to zero.
fn scale_by_pow2(mut value: f64, exp: i64) -> f64 {
    let mut exp = exp.clamp(-5000, 5000) as i32;
    while exp > 1000 {
        value *= pow2(1000);
        exp -= 1000;
    }
    while exp < -1000 {
        value *= pow2(-1000);
        exp += 1000;
    }
    value * pow2(exp)
}

/// Parse a complete hexadecimal float literal: optional sign, `0x`, hex
/// digits with at most one `.`, then an optional binary exponent `p[+-]N`.
///
/// Returns the value and whether any mantissa digit was non-zero, or `None`
/// if `text` is not entirely such a literal.
fn parse_hex_float(text: &str) -> Option<(f64, bool)> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let body = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))?
        .as_bytes();

    let mut i = 0;
    let mut mantissa: u64 = 0;
    let mut scale: i64 = 0;
    let mut digits = 0usize;
    let mut nonzero = false;
    let mut seen_point = false;
    while i < body.len() {
        let b = body[i];
        if b == b'.' && !seen_point {
            seen_point = true;
            i += 1;
            continue;
        }
        let Some(d) = char::from(b).to_digit(16) else {
            break;
        };
        digits += 1;
        nonzero |= d != 0;
        if mantissa >> 56 == 0 {
            mantissa = (mantissa << 4) | u64::from(d);
            if seen_point {
                scale -= 4;
            }
        } else {
            // Keep a sticky bit for the digits that no longer fit.
            mantissa |= u64::from(d != 0);
            if !seen_point {
                scale += 4;
            }
        }
        i += 1;
    }
    if digits == 0 {
        return None;
    }

    if i < body.len() && matches!(body[i], b'p' | b'P') {
        i += 1;
        let mut exp_negative = false;
        if i < body.len() && matches!(body[i], b'+' | b'-') {
            exp_negative = body[i] == b'-';
            i += 1;
        }
        let start = i;
        let mut exp: i64 = 0;
        while i < body.len() && body[i].is_ascii_digit() {
            exp = exp
                .saturating_mul(10)
                .saturating_add(i64::from(body[i] - b'0'));
            i += 1;
        }
        if i == start {
            return None;
        }
        scale = scale.saturating_add(if exp_negative { -exp } else { exp });
    }
    if i != body.len() {
        return None;
    }

    let magnitude = scale_by_pow2(mantissa as f64, scale);
    Some((if negative { -magnitude } else { magnitude }, nonzero))
}

/// Shared float path: trim, parse, then reject overflow to infinity and
/// underflow to zero the way `strtod` reports `ERANGE`.
fn parse_float_with<T>(
    line: &str,
    from_hex: fn(f64) -> T,
    is_infinite: fn(&T) -> bool,
    is_zero: fn(&T) -> bool,
) -> Result<T, ParseError>
where
    T: std::str::FromStr,
{
    if line.is_empty() {
        return Err(ParseError::Empty);
    }
    let text = line.trim_matches(|c: char| c.is_ascii() && is_space_byte(c as u8));
    if text.is_empty() {
        return Err(ParseError::Invalid);
    }
    let (value, nonzero) = match parse_hex_float(text) {
        Some((value, nonzero)) => (from_hex(value), nonzero),
        None => (
            text.parse::<T>().map_err(|_| ParseError::Invalid)?,
            mantissa_is_nonzero(text),
        ),
    };
    if is_infinite(&value) && !is_infinity_literal(text) {
        return Err(ParseError::OutOfRange);
    }
    if is_zero(&value) && nonzero {
        return Err(ParseError::OutOfRange);
    }
    Ok(value)
}

/// Parse a whole line as an `f64`.
pub fn parse_double(line: &str) -> Result<f64, ParseError> {
    parse_float_with::<f64>(line, |v| v, |v| v.is_infinite(), |v| *v == 0.0)
}

/// Parse a whole line as an `f32`.
pub fn parse_float(line: &str) -> Result<f32, ParseError> {
    parse_float_with::<f32>(line, |v| v as f32, |v| v.is_infinite(), |v| *v == 0.0)
}
