use std::str::FromStr;

/// Parse a sysfs value as a float, tolerating a trailing unit token.
///
/// Tries the whole trimmed string, then only its first whitespace-delimited
/// token, and finally falls back to `0.0`. Non-finite results (`"inf"`,
/// `"NaN"`) also yield `0.0`.
pub fn parse_float(raw: &str) -> f64 {
    parse_leading::<f64>(raw)
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Integer counterpart of [`parse_float`].
pub fn parse_int(raw: &str) -> i64 {
    parse_leading(raw).unwrap_or(0)
}

fn parse_leading<T: FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    raw.parse()
        .ok()
        .or_else(|| raw.split_whitespace().next()?.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_float("  48200000\n"), 48_200_000.0);
        assert_eq!(parse_float("12.5"), 12.5);
        assert_eq!(parse_int("55\n"), 55);
        assert_eq!(parse_int("-3"), -3);
    }

    #[test]
    fn trailing_unit_token_is_ignored() {
        assert_eq!(parse_float("42 mWh"), 42.0);
        assert_eq!(parse_int("42 mWh"), 42);
        assert_eq!(parse_int("\t7   %  "), 7);
    }

    #[test]
    fn malformed_or_empty_is_zero() {
        for raw in ["", "   ", "abc", "mWh 42", "--1"] {
            assert_eq!(parse_float(raw), 0.0, "{raw:?}");
        }
        for raw in ["", "abc", "55.0", "1e3", "0x10"] {
            assert_eq!(parse_int(raw), 0, "{raw:?}");
        }
    }

    #[test]
    fn non_finite_floats_are_zero() {
        assert_eq!(parse_float("inf"), 0.0);
        assert_eq!(parse_float("NaN"), 0.0);
        assert_eq!(parse_float("-infinity W"), 0.0);
    }
}
