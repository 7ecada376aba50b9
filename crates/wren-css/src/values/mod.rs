//! Per-property value grammars.
//!
//! Every grammar has the shape `fn(&mut Scanner, &mut PropertyMap) -> bool`.
//! It consumes what it understands from the scanner, writes zero or more keys
//! and returns whether it consumed anything. Grammars never report errors: an
//! unexpected token ends the property's parse and keeps the keys already
//! written. A grammar that fails puts the scanner back where it started.
//!
//! - [CSS 2.1 § 15 Fonts](https://www.w3.org/TR/CSS21/fonts.html)
//! - [CSS 2.1 § 16 Text](https://www.w3.org/TR/CSS21/text.html)
//! - [CSS 2.1 § 8 Box model](https://www.w3.org/TR/CSS21/box.html)
//! - [CSS 2.1 § 12.5 Lists](https://www.w3.org/TR/CSS21/generate.html#lists)

mod box_model;
mod color;
mod font;
mod length;
mod list;
mod text;

pub use box_model::{BORDER_STYLES, SIDES};
pub use color::{NAMED_COLORS, SYSTEM_COLORS, parse_color};
pub use font::{FONT_SIZES, FONT_STYLES, FONT_VARIANTS, FONT_WEIGHTS, GENERIC_FAMILIES};
pub use length::{UNITS, parse_size};
pub use list::{LIST_STYLE_POSITIONS, LIST_STYLE_TYPES};

use crate::property::{Property, PropertyMap};
use crate::scanner::Scanner;

/// Parse `value` with the grammar for `property` and write the result into
/// `map`. Returns whether the grammar consumed anything.
pub fn apply_property(property: Property, value: &str, map: &mut PropertyMap) -> bool {
    let scanner = &mut Scanner::new(value);

    match property {
        Property::Font => font::parse_font(scanner, map),
        Property::FontFamily => font::parse_font_family(scanner, map),
        Property::FontStyle => keyword_property(scanner, map, "font-style", FONT_STYLES),
        Property::FontVariant => keyword_property(scanner, map, "font-variant", FONT_VARIANTS),
        Property::FontWeight => keyword_property(scanner, map, "font-weight", FONT_WEIGHTS),
        Property::FontSize => font::parse_font_size(scanner, map),
        Property::LineHeight => font::parse_line_height(scanner, map),

        Property::Color => color::parse_color_property(scanner, map, "color"),
        Property::BackgroundColor => color::parse_background_color(scanner, map),

        Property::TextDecoration => text::parse_text_decoration(scanner, map),
        Property::TextAlign => keyword_property(scanner, map, "text-align", text::TEXT_ALIGNS),
        Property::TextIndent => size_property(scanner, map, "text-indent", false),
        Property::TextTransform => {
            keyword_property(scanner, map, "text-transform", text::TEXT_TRANSFORMS)
        }
        Property::VerticalAlign => text::parse_vertical_align(scanner, map),
        Property::WhiteSpace => keyword_property(scanner, map, "white-space", text::WHITE_SPACES),

        Property::Margin => box_model::parse_size_rectangle(scanner, map, "margin"),
        Property::Padding => box_model::parse_size_rectangle(scanner, map, "padding"),
        Property::MarginTop
        | Property::MarginRight
        | Property::MarginBottom
        | Property::MarginLeft
        | Property::PaddingTop
        | Property::PaddingRight
        | Property::PaddingBottom
        | Property::PaddingLeft => size_property(scanner, map, property.name(), true),

        Property::Border => box_model::parse_border(scanner, map),
        Property::BorderWidth => box_model::parse_size_rectangle(scanner, map, "border-width"),
        Property::BorderStyle => box_model::parse_style_rectangle(scanner, map),
        Property::BorderColor => box_model::parse_color_rectangle(scanner, map),

        Property::Width | Property::Height => {
            box_model::parse_auto_size(scanner, map, property.name())
        }
        Property::Float => keyword_property(scanner, map, "float", box_model::FLOATS),
        Property::Clear => keyword_property(scanner, map, "clear", box_model::CLEARS),

        Property::ListStyle => list::parse_list_style(scanner, map),
        Property::ListStyleType => {
            keyword_property(scanner, map, "list-style-type", LIST_STYLE_TYPES)
        }
        Property::ListStylePosition => {
            keyword_property(scanner, map, "list-style-position", LIST_STYLE_POSITIONS)
        }

        Property::Background
        | Property::WordSpacing
        | Property::LetterSpacing
        | Property::Display
        | Property::BorderTop
        | Property::BorderRight
        | Property::BorderBottom
        | Property::BorderLeft
        | Property::BorderTopStyle
        | Property::BorderTopColor
        | Property::BorderTopWidth
        | Property::BorderRightStyle
        | Property::BorderRightColor
        | Property::BorderRightWidth
        | Property::BorderBottomStyle
        | Property::BorderBottomColor
        | Property::BorderBottomWidth
        | Property::BorderLeftStyle
        | Property::BorderLeftColor
        | Property::BorderLeftWidth
        | Property::ListStyleImage => false,
    }
}

/// Match one keyword from `candidates` and store it under `key`.
fn keyword_property(
    scanner: &mut Scanner<'_>,
    map: &mut PropertyMap,
    key: &str,
    candidates: &[&'static str],
) -> bool {
    scanner.match_keyword(candidates).is_some_and(|keyword| {
        map.set(key, keyword);
        true
    })
}

/// Parse one size and store it under `key`.
fn size_property(
    scanner: &mut Scanner<'_>,
    map: &mut PropertyMap,
    key: &str,
    non_negative: bool,
) -> bool {
    parse_size(scanner, non_negative).is_some_and(|size| {
        map.set(key, size);
        true
    })
}
