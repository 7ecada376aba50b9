//! Colors.
//!
//! [CSS 2.1 § 4.3.6 Colors](https://www.w3.org/TR/CSS21/syndata.html#color-units)
//! [CSS Color Level 4 § 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
//!
//! Colors are not converted to components. A hex color is passed through as
//! written, a named color keeps its name, and the two forms the engine does
//! not resolve (`rgb()` and system colors) become fixed placeholder names.

use crate::property::PropertyMap;
use crate::scanner::Scanner;

/// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
pub const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke",
    "yellow", "yellowgreen",
];

/// [CSS 2.1 § 18.2 System Colors](https://www.w3.org/TR/CSS21/ui.html#system-colors)
///
/// Recognized, but resolved to [`SYSTEM_COLOR_PLACEHOLDER`].
pub const SYSTEM_COLORS: &[&str] = &[
    "activeborder", "activecaption", "appworkspace", "background", "buttonface",
    "buttonhighlight", "buttonshadow", "buttontext", "captiontext", "graytext", "highlighttext",
    "highlight", "inactiveborder", "inactivecaptiontext", "inactivecaption", "infobackground",
    "infotext", "menutext", "menu", "scrollbar", "threeddarkshadow", "threedface",
    "threedhighlight", "threedlightshadow", "threedshadow", "windowframe", "windowtext",
    "window",
];

/// Emitted for every system color.
const SYSTEM_COLOR_PLACEHOLDER: &str = "black";

/// Emitted for every `rgb()` color; the components are never decoded.
const RGB_PLACEHOLDER: &str = "gray";

/// Parse one color and return its resolved string.
///
/// Alternatives are tried in this order: `#` with a hex-digit run, an `rgb`
/// functional notation, a named color, a system color.
pub fn parse_color(scanner: &mut Scanner<'_>) -> Option<String> {
    let start = scanner.position();
    scanner.skip_whitespace();

    // [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    // The digit count is not checked.
    if scanner.eat('#') {
        let hex = scanner.scan_hex_run();
        if hex.is_empty() {
            scanner.reset(start);
            return None;
        }
        return Some(format!("#{hex}"));
    }

    // [§ 4.3.6 rgb()](https://www.w3.org/TR/CSS21/syndata.html#color-units)
    // Skip to the closing parenthesis and substitute a neutral color.
    if scanner.starts_with_ignore_case("rgb") {
        let _ = scanner.scan_until(&[')']);
        let _ = scanner.eat(')');
        return Some(RGB_PLACEHOLDER.to_string());
    }

    if let Some(name) = scanner.match_keyword(NAMED_COLORS) {
        return Some(name.to_string());
    }

    if scanner.match_keyword(SYSTEM_COLORS).is_some() {
        return Some(SYSTEM_COLOR_PLACEHOLDER.to_string());
    }

    scanner.reset(start);
    None
}

/// `color`-like property holding a single color.
pub(super) fn parse_color_property(
    scanner: &mut Scanner<'_>,
    map: &mut PropertyMap,
    key: &str,
) -> bool {
    parse_color(scanner).is_some_and(|color| {
        map.set(key, color);
        true
    })
}

/// [CSS 2.1 § 14.2.1 background-color](https://www.w3.org/TR/CSS21/colors.html#propdef-background-color)
///
/// "Value: `<color>` | transparent | inherit"
pub(super) fn parse_background_color(scanner: &mut Scanner<'_>, map: &mut PropertyMap) -> bool {
    if let Some(keyword) = scanner.match_keyword(&["transparent"]) {
        map.set("background-color", keyword);
        return true;
    }
    parse_color_property(scanner, map, "background-color")
}
