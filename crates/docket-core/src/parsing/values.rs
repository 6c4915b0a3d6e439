use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

/// A money/quantity token: optional leading `$`, digits with optional
/// thousands commas, optional fraction. "4", "2.0", "$1,500.00".
static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$?\d[\d,]*(?:\.\d+)?$").unwrap());

pub fn is_numeric_token(token: &str) -> bool {
    NUMERIC_TOKEN.is_match(token)
}

/// Parse a quantity token to a whole number.
///
/// Vendors print quantities as "4" or "2.0"; fractions are truncated.
/// Anything unparseable is None, never an error.
pub fn parse_qty(token: &str) -> Option<i64> {
    parse_decimal(token)?.trunc().to_i64()
}

/// Parse a price token to a decimal carrying exactly two fraction
/// digits.
pub fn parse_price(token: &str) -> Option<Decimal> {
    let mut price = parse_decimal(token)?;
    price.rescale(2);
    Some(price)
}

fn parse_decimal(token: &str) -> Option<Decimal> {
    let cleaned = token.trim().trim_start_matches('$').replace(',', "");
    Decimal::from_str(&cleaned).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_numeric_token_shapes() {
        assert!(is_numeric_token("4"));
        assert!(is_numeric_token("2.0"));
        assert!(is_numeric_token("25.50"));
        assert!(is_numeric_token("$250.00"));
        assert!(is_numeric_token("$1,500.00"));
        assert!(is_numeric_token("10182.00"));

        assert!(!is_numeric_token("AB123"));
        assert!(!is_numeric_token("AI4-4"));
        assert!(!is_numeric_token("R04-123"));
        assert!(!is_numeric_token("."));
        assert!(!is_numeric_token("$"));
        assert!(!is_numeric_token("1.2.3"));
        assert!(!is_numeric_token(""));
    }

    #[test]
    fn test_parse_qty_integer() {
        assert_eq!(parse_qty("4"), Some(4));
        assert_eq!(parse_qty("10"), Some(10));
    }

    #[test]
    fn test_parse_qty_truncates_fraction() {
        assert_eq!(parse_qty("2.0"), Some(2));
        assert_eq!(parse_qty("2.5"), Some(2));
    }

    #[test]
    fn test_parse_price_two_fraction_digits() {
        assert_eq!(parse_price("25.50"), Some(dec!(25.50)));
        assert_eq!(parse_price("25.5").unwrap().to_string(), "25.50");
        assert_eq!(parse_price("7").unwrap().to_string(), "7.00");
    }

    #[test]
    fn test_parse_price_strips_currency_and_commas() {
        assert_eq!(parse_price("$1,500.00"), Some(dec!(1500.00)));
        assert_eq!(parse_price("$250.00"), Some(dec!(250.00)));
    }

    #[test]
    fn test_unparseable_is_none() {
        assert_eq!(parse_qty("n/a"), None);
        assert_eq!(parse_price("POA"), None);
    }
}
