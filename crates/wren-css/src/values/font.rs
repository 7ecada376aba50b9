//! Font properties and the `font` shorthand.
//!
//! [CSS 2.1 § 15 Fonts](https://www.w3.org/TR/CSS21/fonts.html)

use crate::property::PropertyMap;
use crate::scanner::Scanner;

use super::{keyword_property, parse_size};

/// [§ 15.7 font-style](https://www.w3.org/TR/CSS21/fonts.html#font-styling)
pub const FONT_STYLES: &[&str] = &["normal", "italic", "oblique"];

/// [§ 15.5 font-variant](https://www.w3.org/TR/CSS21/fonts.html#small-caps)
pub const FONT_VARIANTS: &[&str] = &["normal", "small-caps"];

/// [§ 15.6 font-weight](https://www.w3.org/TR/CSS21/fonts.html#font-boldness)
pub const FONT_WEIGHTS: &[&str] = &[
    "normal", "bold", "bolder", "lighter", "100", "200", "300", "400", "500", "600", "700",
    "800", "900",
];

/// [§ 15.7 font-size](https://www.w3.org/TR/CSS21/fonts.html#font-size-props)
/// `<absolute-size>` and `<relative-size>` keywords.
pub const FONT_SIZES: &[&str] = &[
    "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large", "larger", "smaller",
];

/// [§ 15.3 Generic font families](https://www.w3.org/TR/CSS21/fonts.html#generic-font-families)
pub const GENERIC_FAMILIES: &[&str] = &["serif", "sans-serif", "cursive", "fantasy", "monospace"];

/// [§ 15.8 Shorthand font property](https://www.w3.org/TR/CSS21/fonts.html#font-shorthand)
///
/// "Value: [ [ `<'font-style'>` || `<'font-variant'>` || `<'font-weight'>` ]?
/// `<'font-size'>` [ / `<'line-height'>` ]? `<'font-family'>` ]"
///
/// Style, variant and weight are tried once each, in that order. The size is
/// required: without it the parse stops, keeping whatever was written.
pub(super) fn parse_font(scanner: &mut Scanner<'_>, map: &mut PropertyMap) -> bool {
    let start = scanner.position();

    let _ = keyword_property(scanner, map, "font-style", FONT_STYLES);
    let _ = keyword_property(scanner, map, "font-variant", FONT_VARIANTS);
    let _ = keyword_property(scanner, map, "font-weight", FONT_WEIGHTS);

    if !parse_font_size(scanner, map) {
        return scanner.position() != start;
    }

    let before_slash = scanner.position();
    scanner.skip_whitespace();
    if scanner.eat('/') {
        if !parse_line_height(scanner, map) {
            scanner.reset(before_slash);
        }
    } else {
        scanner.reset(before_slash);
    }

    let _ = parse_font_family(scanner, map);
    true
}

/// "Value: `<absolute-size>` | `<relative-size>` | `<length>` | `<percentage>`"
pub(super) fn parse_font_size(scanner: &mut Scanner<'_>, map: &mut PropertyMap) -> bool {
    if keyword_property(scanner, map, "font-size", FONT_SIZES) {
        return true;
    }
    parse_size(scanner, true).is_some_and(|size| {
        map.set("font-size", size);
        true
    })
}

/// [§ 10.8.1 line-height](https://www.w3.org/TR/CSS21/visudet.html#propdef-line-height)
///
/// A bare number is treated like any other size and gets the `px` unit.
pub(super) fn parse_line_height(scanner: &mut Scanner<'_>, map: &mut PropertyMap) -> bool {
    if keyword_property(scanner, map, "line-height", &["normal"]) {
        return true;
    }
    parse_size(scanner, true).is_some_and(|size| {
        map.set("line-height", size);
        true
    })
}

/// [§ 15.3 font-family](https://www.w3.org/TR/CSS21/fonts.html#font-family-prop)
///
/// Consumes the whole comma-separated list but only keeps the first family.
pub(super) fn parse_font_family(scanner: &mut Scanner<'_>, map: &mut PropertyMap) -> bool {
    let mut first: Option<String> = None;

    loop {
        let Some(family) = parse_family_name(scanner) else {
            break;
        };
        let _ = first.get_or_insert(family);

        scanner.skip_whitespace();
        if !scanner.eat(',') {
            break;
        }
    }

    first.is_some_and(|family| {
        map.set("font-family", family);
        true
    })
}

/// One list entry: a generic family, a quoted name or an unquoted run.
fn parse_family_name(scanner: &mut Scanner<'_>) -> Option<String> {
    if let Some(generic) = scanner.match_keyword(GENERIC_FAMILIES) {
        return Some(generic.to_string());
    }

    let start = scanner.position();
    scanner.skip_whitespace();
    match scanner.peek() {
        Some(quote @ ('"' | '\'')) => {
            let _ = scanner.advance();
            let name = scanner.scan_until(&[quote]).to_string();
            let _ = scanner.eat(quote);
            Some(name)
        }
        _ => {
            let name = scanner.scan_until(&[',', ';']).trim();
            if name.is_empty() {
                scanner.reset(start);
                None
            } else {
                Some(name.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font(input: &str) -> PropertyMap {
        let mut map = PropertyMap::new();
        let _ = parse_font(&mut Scanner::new(input), &mut map);
        map
    }

    #[test]
    fn test_font_shorthand_all_parts() {
        let map = font("italic small-caps bold 12pt/14pt \"times new roman\", serif");
        assert_eq!(map.get("font-style"), Some("italic"));
        assert_eq!(map.get("font-variant"), Some("small-caps"));
        assert_eq!(map.get("font-weight"), Some("bold"));
        assert_eq!(map.get("font-size"), Some("12pt"));
        assert_eq!(map.get("line-height"), Some("14pt"));
        assert_eq!(map.get("font-family"), Some("times new roman"));
    }

    #[test]
    fn test_font_shorthand_size_and_family_only() {
        let map = font("12px arial");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("font-size"), Some("12px"));
        assert_eq!(map.get("font-family"), Some("arial"));
    }

    #[test]
    fn test_font_shorthand_first_normal_is_style() {
        let map = font("normal bold large sans-serif");
        assert_eq!(map.get("font-style"), Some("normal"));
        assert_eq!(map.get("font-variant"), None);
        assert_eq!(map.get("font-weight"), Some("bold"));
        assert_eq!(map.get("font-size"), Some("large"));
        assert_eq!(map.get("font-family"), Some("sans-serif"));
    }

    #[test]
    fn test_font_shorthand_without_size_keeps_partial_keys() {
        let map = font("bold arial");
        assert_eq!(map.get("font-weight"), Some("bold"));
        assert!(!map.contains_key("font-family"));
        assert!(!map.contains_key("font-size"));
    }

    #[test]
    fn test_font_size_keyword_boundary() {
        let mut map = PropertyMap::new();
        assert!(parse_font_size(&mut Scanner::new("smaller"), &mut map));
        assert_eq!(map.get("font-size"), Some("smaller"));
    }

    #[test]
    fn test_family_list_keeps_first_entry() {
        let mut map = PropertyMap::new();
        let mut scanner = Scanner::new("verdana , 'dejavu sans', monospace");
        assert!(parse_font_family(&mut scanner, &mut map));
        assert_eq!(map.get("font-family"), Some("verdana"));
        assert!(scanner.at_end());
    }

    #[test]
    fn test_generic_family_first() {
        let mut map = PropertyMap::new();
        assert!(parse_font_family(&mut Scanner::new("monospace, courier"), &mut map));
        assert_eq!(map.get("font-family"), Some("monospace"));
    }

    #[test]
    fn test_empty_family_list() {
        let mut map = PropertyMap::new();
        assert!(!parse_font_family(&mut Scanner::new("   "), &mut map));
        assert!(map.is_empty());
    }
}
