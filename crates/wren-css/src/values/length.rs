//! Numeric sizes.
//!
//! [CSS 2.1 § 4.3.2 Lengths](https://www.w3.org/TR/CSS21/syndata.html#length-units)

use crate::scanner::Scanner;

/// Units recognized after a number. A number with no recognized unit is
/// taken as pixels.
pub const UNITS: &[&str] = &["px", "pt", "pc", "em", "ex", "in", "cm", "mm", "%"];

/// Parse `-?[0-9.]+` followed by an optional unit.
///
/// The result is the number text with its unit appended (`12` becomes
/// `12px`). For properties that forbid negative values a negative number is
/// clamped to `"0"` instead of being rejected.
pub fn parse_size(scanner: &mut Scanner<'_>, non_negative: bool) -> Option<String> {
    let start = scanner.position();
    scanner.skip_whitespace();

    let Some(number) = scanner.scan_number() else {
        scanner.reset(start);
        return None;
    };
    let unit = scanner.match_keyword_here(UNITS).unwrap_or("px");

    if non_negative && number.starts_with('-') {
        return Some("0".to_string());
    }
    Some(format!("{number}{unit}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(input: &str, non_negative: bool) -> Option<String> {
        parse_size(&mut Scanner::new(input), non_negative)
    }

    #[test]
    fn test_size_keeps_unit() {
        assert_eq!(size("1.5em", true).as_deref(), Some("1.5em"));
        assert_eq!(size("50%", true).as_deref(), Some("50%"));
        assert_eq!(size(" 2cm", true).as_deref(), Some("2cm"));
    }

    #[test]
    fn test_size_defaults_to_px() {
        assert_eq!(size("12", true).as_deref(), Some("12px"));
        // "pxa" is not a unit, so the number stands alone
        let mut scanner = Scanner::new("3pxa");
        assert_eq!(parse_size(&mut scanner, true).as_deref(), Some("3px"));
        assert_eq!(scanner.rest(), "pxa");
    }

    #[test]
    fn test_negative_sizes() {
        assert_eq!(size("-5px", true).as_deref(), Some("0"));
        assert_eq!(size("-5px", false).as_deref(), Some("-5px"));
    }

    #[test]
    fn test_not_a_size() {
        let mut scanner = Scanner::new("  auto");
        assert_eq!(parse_size(&mut scanner, true), None);
        assert_eq!(scanner.position(), 0);
    }
}
