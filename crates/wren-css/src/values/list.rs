//! List properties.
//!
//! [CSS 2.1 § 12.5 Lists](https://www.w3.org/TR/CSS21/generate.html#lists)

use crate::property::PropertyMap;
use crate::scanner::Scanner;

use super::keyword_property;

/// [§ 12.5.1 list-style-type](https://www.w3.org/TR/CSS21/generate.html#propdef-list-style-type)
pub const LIST_STYLE_TYPES: &[&str] = &[
    "disc", "circle", "square", "decimal", "lower-roman", "upper-roman", "lower-alpha",
    "upper-alpha", "none",
];

/// [§ 12.5.1 list-style-position](https://www.w3.org/TR/CSS21/generate.html#propdef-list-style-position)
pub const LIST_STYLE_POSITIONS: &[&str] = &["inside", "outside"];

/// [§ 12.5.1 list-style](https://www.w3.org/TR/CSS21/generate.html#propdef-list-style)
///
/// "Value: [ `<'list-style-type'>` || `<'list-style-position'>` ||
/// `<'list-style-image'>` ]"
///
/// Keeps taking components until a token matches none of them.
pub(super) fn parse_list_style(scanner: &mut Scanner<'_>, map: &mut PropertyMap) -> bool {
    let mut matched = false;
    loop {
        let found = keyword_property(scanner, map, "list-style-type", LIST_STYLE_TYPES)
            || keyword_property(scanner, map, "list-style-position", LIST_STYLE_POSITIONS)
            || skip_list_style_image(scanner);
        if !found {
            break;
        }
        matched = true;
    }
    matched
}

/// `list-style-image` is not supported: a `url(...)` is consumed so the rest
/// of the shorthand can still be read, and nothing is written.
fn skip_list_style_image(scanner: &mut Scanner<'_>) -> bool {
    let start = scanner.position();
    scanner.skip_whitespace();
    if scanner.starts_with_ignore_case("url(") {
        let _ = scanner.scan_until(&[')']);
        let _ = scanner.eat(')');
        return true;
    }
    scanner.reset(start);
    false
}
