//! Quantity Guard
//!
//! Real-time validity rule for quantity inputs. Client-side only; the
//! server still validates the submitted form.

pub const QUANTITY_MESSAGE: &str = "Quantity must be greater than 0";

/// Parse like JavaScript's `parseFloat`: skip leading whitespace, take the
/// longest numeric prefix, NaN when there is none
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = s.as_bytes();
    let mut i = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    if s[i..].starts_with("Infinity") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    let mut end = i;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - frac_start;
        if int_digits + frac_digits > 0 {
            end = j;
        }
    }

    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut j = end + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    let mut literal = String::with_capacity(end - int_start + 2);
    if int_digits == 0 {
        literal.push('0');
    }
    literal.push_str(s[int_start..end].trim_end_matches('.'));

    let value = literal.parse::<f64>().unwrap_or(f64::NAN);
    if negative {
        -value
    } else {
        value
    }
}

/// Validity message for a raw quantity value, None when acceptable.
/// Unparseable input compares false against 0 and is let through.
pub fn quantity_validity(raw: &str) -> Option<&'static str> {
    if parse_float(raw) <= 0.0 {
        Some(QUANTITY_MESSAGE)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_plain_numbers() {
        assert_eq!(parse_float("3"), 3.0);
        assert_eq!(parse_float("2.5"), 2.5);
        assert_eq!(parse_float("-1"), -1.0);
        assert_eq!(parse_float("+4"), 4.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("  7"), 7.0);
    }

    #[test]
    fn test_parse_float_prefixes() {
        assert_eq!(parse_float("3abc"), 3.0);
        assert_eq!(parse_float("-2kg"), -2.0);
        assert_eq!(parse_float("1.5.6"), 1.5);
        assert_eq!(parse_float("2e"), 2.0);
        assert_eq!(parse_float("2e+"), 2.0);
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinityx"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_float_nan() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("e5").is_nan());
    }

    #[test]
    fn test_non_positive_is_invalid() {
        assert_eq!(quantity_validity("0"), Some(QUANTITY_MESSAGE));
        assert_eq!(quantity_validity("-3"), Some(QUANTITY_MESSAGE));
        assert_eq!(quantity_validity("0.0"), Some(QUANTITY_MESSAGE));
    }

    #[test]
    fn test_positive_is_valid() {
        assert_eq!(quantity_validity("0.25"), None);
        assert_eq!(quantity_validity("12"), None);
    }

    #[test]
    fn test_negative_prefix_is_invalid() {
        // Raw text reaches the guard, so unit suffixes don't hide the sign
        assert_eq!(quantity_validity("-2kg"), Some(QUANTITY_MESSAGE));
        assert_eq!(quantity_validity("0g"), Some(QUANTITY_MESSAGE));
        assert_eq!(quantity_validity("3kg"), None);
    }

    #[test]
    fn test_unparseable_is_let_through() {
        assert_eq!(quantity_validity(""), None);
        assert_eq!(quantity_validity("lots"), None);
    }

    #[test]
    fn test_sequence_remarks_invalid() {
        let states: Vec<bool> = ["-1", "2", "0"]
            .iter()
            .map(|v| quantity_validity(v).is_some())
            .collect();
        assert_eq!(states, vec![true, false, true]);
    }
}
