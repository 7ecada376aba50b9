//! Text properties.
//!
//! [CSS 2.1 § 16 Text](https://www.w3.org/TR/CSS21/text.html)

use crate::property::PropertyMap;
use crate::scanner::Scanner;

use super::{keyword_property, parse_size};

/// [§ 16.2 text-align](https://www.w3.org/TR/CSS21/text.html#alignment-prop)
pub const TEXT_ALIGNS: &[&str] = &["left", "right", "center", "justify"];

/// [§ 16.5 text-transform](https://www.w3.org/TR/CSS21/text.html#caps-prop)
pub const TEXT_TRANSFORMS: &[&str] = &["none", "capitalize", "uppercase", "lowercase"];

/// [§ 16.6 white-space](https://www.w3.org/TR/CSS21/text.html#white-space-prop)
pub const WHITE_SPACES: &[&str] = &["normal", "pre", "nowrap"];

/// [§ 10.8.1 vertical-align](https://www.w3.org/TR/CSS21/visudet.html#propdef-vertical-align)
pub const VERTICAL_ALIGNS: &[&str] = &[
    "baseline", "sub", "super", "text-top", "text-bottom", "top", "middle", "bottom",
];

/// [§ 16.3.1 text-decoration](https://www.w3.org/TR/CSS21/text.html#lining-striking-props)
const DECORATIONS: &[&str] = &["none", "underline", "overline", "line-through", "blink"];

/// Flag keys written by `text-decoration`, all reset to `"false"` first.
const DECORATION_FLAGS: [&str; 4] = [
    "text-decoration-underline",
    "text-decoration-overline",
    "text-decoration-line-through",
    "text-decoration-blink",
];

/// "Value: none | [ underline || overline || line-through || blink ]"
///
/// Every flag is written as `"false"`, then each decoration found turns its
/// flag to `"true"`. `none` or an unknown token ends the list.
pub(super) fn parse_text_decoration(scanner: &mut Scanner<'_>, map: &mut PropertyMap) -> bool {
    for flag in DECORATION_FLAGS {
        map.set(flag, "false");
    }

    while let Some(decoration) = scanner.match_keyword(DECORATIONS) {
        if decoration == "none" {
            break;
        }
        map.set(format!("text-decoration-{decoration}"), "true");
    }
    true
}

/// "Value: baseline | sub | super | top | text-top | middle | bottom |
/// text-bottom | `<percentage>` | `<length>`"
pub(super) fn parse_vertical_align(scanner: &mut Scanner<'_>, map: &mut PropertyMap) -> bool {
    if keyword_property(scanner, map, "vertical-align", VERTICAL_ALIGNS) {
        return true;
    }
    parse_size(scanner, false).is_some_and(|size| {
        map.set("vertical-align", size);
        true
    })
}
