//! Numeric rendering and parsing shared by the lexer, parser and coercions.

/// Significant digits used when rendering numbers, as C's `%.16g`.
const SIGNIFICANT_DIGITS: i32 = 16;

/// Renders a number with 16 significant digits, trailing zeros trimmed.
///
/// Exponent form is used below `1e-4` and from `1e16` upward (`1e+21`,
/// `1.5e-07`). Negative zero renders as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Parses text that is wholly a decimal number, ignoring surrounding
/// whitespace: `[+-]digits[.digits][(e|E)[+-]digits]`, or with the integer
/// part omitted (`.5`). Anything else, including the empty string, is `None`.
pub fn parse_numeric_string(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let bytes = trimmed.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let mut digits = i - int_start;

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let frac_start = i;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        digits += i - frac_start;
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        if i == exp_start {
            return None;
        }
    }

    if i != bytes.len() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Canonical array index spelled by `text` (`"0"`, `"12"`; not `"01"`).
pub fn parse_array_index(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    text.parse::<u32>().ok().map(|index| index as usize)
}

/// Array index denoted by a number, if it is a non-negative integer.
pub fn number_to_index(value: f64) -> Option<usize> {
    if value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Some(value as usize)
    } else {
        None
    }
}

/// ECMAScript-style ToInt32 used by the bitwise operators.
pub fn to_int32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let truncated = value.trunc();
    let modulo = truncated.rem_euclid(4_294_967_296.0);
    modulo as u32 as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_sixteen_digit_g() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(-0.25), "-0.25");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-07");
        assert_eq!(format_number(123456.0), "123456");
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn parses_only_wholly_numeric_text() {
        assert_eq!(parse_numeric_string("3.5"), Some(3.5));
        assert_eq!(parse_numeric_string("  -12 "), Some(-12.0));
        assert_eq!(parse_numeric_string(".5"), Some(0.5));
        assert_eq!(parse_numeric_string("2e3"), Some(2000.0));
        assert_eq!(parse_numeric_string(""), None);
        assert_eq!(parse_numeric_string("3abc"), None);
        assert_eq!(parse_numeric_string("inf"), None);
        assert_eq!(parse_numeric_string("NaN"), None);
        assert_eq!(parse_numeric_string("."), None);
        assert_eq!(parse_numeric_string("1e"), None);
    }

    #[test]
    fn array_indices() {
        assert_eq!(parse_array_index("0"), Some(0));
        assert_eq!(parse_array_index("42"), Some(42));
        assert_eq!(parse_array_index("042"), None);
        assert_eq!(parse_array_index("-1"), None);
        assert_eq!(parse_array_index("length"), None);
        assert_eq!(number_to_index(2.0), Some(2));
        assert_eq!(number_to_index(2.5), None);
        assert_eq!(number_to_index(-1.0), None);
    }

    #[test]
    fn int32_wraps() {
        assert_eq!(to_int32(5.7), 5);
        assert_eq!(to_int32(-5.7), -5);
        assert_eq!(to_int32(4_294_967_297.0), 1);
        assert_eq!(to_int32(2_147_483_648.0), i32::MIN);
        assert_eq!(to_int32(f64::NAN), 0);
    }
}
