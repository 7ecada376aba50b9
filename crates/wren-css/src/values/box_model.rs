//! Box properties: margins, padding, borders and the directional shorthands.
//!
//! [CSS 2.1 § 8 Box model](https://www.w3.org/TR/CSS21/box.html)
//!
//! Directional keys are written as `<property>-<side>`, so `border-style`
//! produces `border-style-top` and so on.

use crate::property::PropertyMap;
use crate::scanner::Scanner;

use super::{parse_color, parse_size};

/// Side suffixes in shorthand order.
pub const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

/// [§ 8.5.3 Border style](https://www.w3.org/TR/CSS21/box.html#border-style-properties)
pub const BORDER_STYLES: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

/// [§ 9.5.1 float](https://www.w3.org/TR/CSS21/visuren.html#float-position)
pub const FLOATS: &[&str] = &["left", "right", "none"];

/// [§ 9.5.2 clear](https://www.w3.org/TR/CSS21/visuren.html#flow-control)
pub const CLEARS: &[&str] = &["none", "left", "right", "both"];

/// Parse up to four values with `component` and expand them to the four
/// sides of `property`.
///
/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS21/box.html#margin-properties)
/// "If there is only one component value, it applies to all sides. If there
/// are two values, the top and bottom margins are set to the first value and
/// the right and left margins are set to the second. If there are three
/// values, the top is set to the first value, the left and right are set to
/// the second, and the bottom is set to the third. If there are four values,
/// they apply to the top, right, bottom, and left, respectively."
fn parse_rectangle(
    scanner: &mut Scanner<'_>,
    map: &mut PropertyMap,
    property: &str,
    component: impl Fn(&mut Scanner<'_>) -> Option<String>,
) -> bool {
    let mut values: Vec<String> = Vec::with_capacity(4);
    while values.len() < 4 {
        let Some(value) = component(scanner) else {
            break;
        };
        values.push(value);
    }

    let sides = match values.as_slice() {
        [] => return false,
        [all] => [all, all, all, all],
        [vertical, horizontal] => [vertical, horizontal, vertical, horizontal],
        [top, horizontal, bottom] => [top, horizontal, bottom, horizontal],
        [top, right, bottom, left, ..] => [top, right, bottom, left],
    };

    for (side, value) in SIDES.into_iter().zip(sides) {
        map.set(format!("{property}-{side}"), value.as_str());
    }
    true
}

/// `margin`, `padding` and `border-width`: up to four non-negative sizes.
pub(super) fn parse_size_rectangle(
    scanner: &mut Scanner<'_>,
    map: &mut PropertyMap,
    property: &str,
) -> bool {
    parse_rectangle(scanner, map, property, |s| parse_size(s, true))
}

/// `border-style`: up to four border-style keywords.
pub(super) fn parse_style_rectangle(scanner: &mut Scanner<'_>, map: &mut PropertyMap) -> bool {
    parse_rectangle(scanner, map, "border-style", |s| {
        s.match_keyword(BORDER_STYLES).map(str::to_string)
    })
}

/// `border-color`: up to four colors.
pub(super) fn parse_color_rectangle(scanner: &mut Scanner<'_>, map: &mut PropertyMap) -> bool {
    parse_rectangle(scanner, map, "border-color", parse_color)
}

/// [§ 8.5.4 Border shorthand properties](https://www.w3.org/TR/CSS21/box.html#border-shorthand-properties)
///
/// Width, style and color groups in any order, each at most once. Each group
/// is itself a rectangle, so `border: 1px 2px solid` sets two widths.
pub(super) fn parse_border(scanner: &mut Scanner<'_>, map: &mut PropertyMap) -> bool {
    let mut width = false;
    let mut style = false;
    let mut color = false;

    loop {
        if !width && parse_size_rectangle(scanner, map, "border-width") {
            width = true;
        } else if !style && parse_style_rectangle(scanner, map) {
            style = true;
        } else if !color && parse_color_rectangle(scanner, map) {
            color = true;
        } else {
            break;
        }
    }

    width || style || color
}

/// [§ 10.2 width](https://www.w3.org/TR/CSS21/visudet.html#the-width-property)
/// [§ 10.5 height](https://www.w3.org/TR/CSS21/visudet.html#the-height-property)
///
/// "Value: `<length>` | `<percentage>` | auto"
pub(super) fn parse_auto_size(scanner: &mut Scanner<'_>, map: &mut PropertyMap, key: &str) -> bool {
    if let Some(auto) = scanner.match_keyword(&["auto"]) {
        map.set(key, auto);
        return true;
    }
    parse_size(scanner, true).is_some_and(|size| {
        map.set(key, size);
        true
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rectangle(property: &str, input: &str) -> PropertyMap {
        let mut map = PropertyMap::new();
        assert!(parse_size_rectangle(&mut Scanner::new(input), &mut map, property));
        map
    }

    fn sides<'a>(map: &'a PropertyMap, property: &str) -> Vec<Option<&'a str>> {
        SIDES
            .iter()
            .map(|side| map.get(&format!("{property}-{side}")))
            .collect()
    }

    #[test]
    fn test_one_value() {
        let map = rectangle("padding", "4px");
        assert_eq!(sides(&map, "padding"), vec![Some("4px"); 4]);
    }

    #[test]
    fn test_three_values() {
        let map = rectangle("margin", "1px 2px 3px");
        assert_eq!(
            sides(&map, "margin"),
            vec![Some("1px"), Some("2px"), Some("3px"), Some("2px")]
        );
    }

    #[test]
    fn test_fifth_value_is_left_unconsumed() {
        let mut map = PropertyMap::new();
        let mut scanner = Scanner::new("1px 2px 3px 4px 5px");
        assert!(parse_size_rectangle(&mut scanner, &mut map, "margin"));
        assert_eq!(map.get("margin-left"), Some("4px"));
        assert_eq!(scanner.rest(), " 5px");
    }

    #[test]
    fn test_style_and_color_rectangles() {
        let mut map = PropertyMap::new();
        assert!(parse_style_rectangle(&mut Scanner::new("solid dashed"), &mut map));
        assert!(parse_color_rectangle(&mut Scanner::new("red #00f"), &mut map));
        assert_eq!(map.get("border-style-top"), Some("solid"));
        assert_eq!(map.get("border-style-left"), Some("dashed"));
        assert_eq!(map.get("border-color-bottom"), Some("red"));
        assert_eq!(map.get("border-color-right"), Some("#00f"));
    }

    #[test]
    fn test_border_any_order() {
        let mut map = PropertyMap::new();
        assert!(parse_border(&mut Scanner::new("red solid 2px"), &mut map));
        assert_eq!(map.get("border-color-top"), Some("red"));
        assert_eq!(map.get("border-style-right"), Some("solid"));
        assert_eq!(map.get("border-width-left"), Some("2px"));
        assert_eq!(map.len(), 12);
    }

    #[test]
    fn test_border_group_not_repeated() {
        let mut map = PropertyMap::new();
        let mut scanner = Scanner::new("1px solid 2px");
        assert!(parse_border(&mut scanner, &mut map));
        assert_eq!(map.get("border-width-top"), Some("1px"));
        assert_eq!(scanner.rest(), " 2px");
    }

    #[test]
    fn test_border_nothing_recognized() {
        let mut map = PropertyMap::new();
        assert!(!parse_border(&mut Scanner::new("thick"), &mut map));
        assert!(map.is_empty());
    }

    #[test]
    fn test_auto_size() {
        let mut map = PropertyMap::new();
        assert!(parse_auto_size(&mut Scanner::new("auto"), &mut map, "width"));
        assert!(parse_auto_size(&mut Scanner::new("-10px"), &mut map, "height"));
        assert_eq!(map.get("width"), Some("auto"));
        assert_eq!(map.get("height"), Some("0"));
    }
}
