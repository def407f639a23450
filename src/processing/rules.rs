//! Field-level parsing rules used by the cleaning pipeline

/// True when a raw field is absent or blank
pub fn is_missing(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Parses price text, ignoring a leading currency symbol
///
/// Only symbol characters are stripped (`£`, `$`, `€`, a mis-decoded `Â£`);
/// a letter prefix such as `USD` or `N/A` makes the price unparseable.
/// Returns `None` for anything that is not a finite number once the symbol is
/// removed. Sign is preserved; non-negativity is checked later.
pub fn parse_price(text: &str) -> Option<f64> {
    let numeric = text.trim().trim_start_matches(is_currency_symbol);

    numeric
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
}

fn is_currency_symbol(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '-' | '+' | '.'))
}

/// Parses a rating as a whole number in 1..=5
///
/// Integral decimal spellings such as `"4.0"` are accepted.
pub fn parse_rating(text: &str) -> Option<u8> {
    let text = text.trim();

    let value = match text.parse::<i64>() {
        Ok(v) => v,
        Err(_) => {
            let float = text.parse::<f64>().ok()?;
            if !float.is_finite() || float.fract() != 0.0 {
                return None;
            }
            float as i64
        }
    };

    u8::try_from(value).ok().filter(|r| (1..=5).contains(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_missing() {
        assert!(is_missing(None));
        assert!(is_missing(Some("")));
        assert!(is_missing(Some("   ")));
        assert!(!is_missing(Some("Book1")));
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("£51.77"), Some(51.77));
        assert_eq!(parse_price("Â£51.77"), Some(51.77));
        assert_eq!(parse_price("$10"), Some(10.0));
        assert_eq!(parse_price("10.00"), Some(10.0));
        assert_eq!(parse_price(" 15.50 "), Some(15.5));
        assert_eq!(parse_price("£-3.00"), Some(-3.0));
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert_eq!(parse_price("invalid"), None);
        assert_eq!(parse_price("£"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("inf"), None);
        assert_eq!(parse_price("£12.3.4"), None);
    }

    #[test]
    fn test_parse_price_rejects_text_prefix() {
        assert_eq!(parse_price("N/A 0"), None);
        assert_eq!(parse_price("USD 10"), None);
        assert_eq!(parse_price("abc12"), None);
        assert_eq!(parse_price("Price: 5"), None);
        assert_eq!(parse_price("e5"), None);
    }

    #[test]
    fn test_parse_price_symbol_variants() {
        assert_eq!(parse_price("€7.50"), Some(7.5));
        assert_eq!(parse_price("£ 3.00"), Some(3.0));
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("1"), Some(1));
        assert_eq!(parse_rating("5"), Some(5));
        assert_eq!(parse_rating(" 4 "), Some(4));
        assert_eq!(parse_rating("4.0"), Some(4));
    }

    #[test]
    fn test_parse_rating_out_of_range() {
        assert_eq!(parse_rating("0"), None);
        assert_eq!(parse_rating("6"), None);
        assert_eq!(parse_rating("-1"), None);
        assert_eq!(parse_rating("300"), None);
        assert_eq!(parse_rating("4.5"), None);
        assert_eq!(parse_rating("Four"), None);
    }
}
