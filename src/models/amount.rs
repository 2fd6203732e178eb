//! Amount parsing semantics
//!
//! Amounts are stored as the raw strings users typed and only become numbers
//! at aggregation time. The fallback behavior is deliberate and named:
//! anything that does not parse to a finite number counts as zero, so
//! aggregation is total and never fails.

/// Parse a raw amount string, falling back to zero.
///
/// Leading/trailing whitespace is ignored. Empty strings, non-numeric text,
/// `NaN`, and infinities all contribute `0.0`.
pub fn parse_or_zero(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Access to an entry's raw, unparsed amount string.
///
/// Implemented by both entry kinds so the aggregator can sum either
/// collection without knowing its shape.
pub trait HasAmount {
    fn raw_amount(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_numbers() {
        assert_eq!(parse_or_zero("1000"), 1000.0);
        assert_eq!(parse_or_zero("12.50"), 12.5);
        assert_eq!(parse_or_zero("-3.25"), -3.25);
        assert_eq!(parse_or_zero("1e3"), 1000.0);
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(parse_or_zero(" 42 "), 42.0);
    }

    #[test]
    fn test_unparseable_is_zero() {
        assert_eq!(parse_or_zero("abc"), 0.0);
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("12abc"), 0.0);
        assert_eq!(parse_or_zero("$100"), 0.0);
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(parse_or_zero("NaN"), 0.0);
        assert_eq!(parse_or_zero("inf"), 0.0);
        assert_eq!(parse_or_zero("-infinity"), 0.0);
    }
}
