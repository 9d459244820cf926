//! Number parsing with the leniency spreadsheet text needs
//!
//! Three flavours are used by the inference heuristics:
//! - [`parse_float_prefix`] reads the longest numeric prefix ("12abc" -> 12)
//! - [`parse_strict_number`] requires the whole trimmed text to be a number
//! - [`parse_lenient_number`] accepts French-style input ("1 234,5")

/// Parse the longest leading decimal number of `s`, after leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent, and `Infinity`. Returns `None` when no digits lead the text.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut end = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parse `s` as a number only if the whole trimmed text is numeric.
///
/// Blank text is not a number. Hexadecimal (`0x1F`) and `Infinity` are
/// accepted; callers that need finiteness check it themselves.
pub fn parse_strict_number(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }

    if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16).ok().map(|v| v as f64);
    }

    match t {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if !t
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }

    t.parse::<f64>().ok()
}

/// Parse a report-style amount: whitespace removed, first comma read as the
/// decimal separator, then the leading number taken.
pub fn parse_lenient_number(s: &str) -> Option<f64> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    parse_float_prefix(&compact.replacen(',', ".", 1))
}

/// Parse a formatted amount: every comma read as a dot, then everything but
/// digits, dots and minus signs dropped ("1 234,5 €" -> 1234.5).
pub fn parse_stripped_number(s: &str) -> Option<f64> {
    let kept: String = s
        .chars()
        .map(|c| if c == ',' { '.' } else { c })
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    parse_float_prefix(&kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_prefix() {
        assert_eq!(parse_float_prefix("42"), Some(42.0));
        assert_eq!(parse_float_prefix("  -3.5e2xyz"), Some(-350.0));
        assert_eq!(parse_float_prefix("12abc"), Some(12.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("5."), Some(5.0));
        assert_eq!(parse_float_prefix("1e"), Some(1.0));
        assert_eq!(parse_float_prefix("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix(""), None);
    }

    #[test]
    fn test_strict_number() {
        assert_eq!(parse_strict_number(" 12 "), Some(12.0));
        assert_eq!(parse_strict_number("1e3"), Some(1000.0));
        assert_eq!(parse_strict_number("0x10"), Some(16.0));
        assert_eq!(parse_strict_number("12abc"), None);
        assert_eq!(parse_strict_number("inf"), None);
        assert_eq!(parse_strict_number("NaN"), None);
        assert_eq!(parse_strict_number(""), None);
        assert_eq!(parse_strict_number("1,5"), None);
    }

    #[test]
    fn test_lenient_number() {
        assert_eq!(parse_lenient_number("4 224"), Some(4224.0));
        assert_eq!(parse_lenient_number("12,5"), Some(12.5));
        assert_eq!(parse_lenient_number("\u{a0}8\u{a0}739,25 "), Some(8739.25));
        assert_eq!(parse_lenient_number("n/a"), None);
    }

    #[test]
    fn test_stripped_number() {
        assert_eq!(parse_stripped_number("1 234,5 €"), Some(1234.5));
        assert_eq!(parse_stripped_number("-12%"), Some(-12.0));
        assert_eq!(parse_stripped_number("Total"), None);
    }
}
