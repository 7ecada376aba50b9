//! Recognized property names and the resolved property map.

use std::collections::BTreeMap;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Every declaration name the engine recognizes.
///
/// Parsing a lowercase name with [`str::parse`] is the dispatch step of the
/// declaration parser: names outside this set fail to parse and the
/// declaration is ignored. Some recognized names are accepted without
/// producing any output (see [`Property::is_accepted_no_op`]).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Property {
    /// `font` shorthand.
    Font,
    /// `font-family`
    FontFamily,
    /// `font-style`
    FontStyle,
    /// `font-variant`
    FontVariant,
    /// `font-weight`
    FontWeight,
    /// `font-size`
    FontSize,
    /// `line-height`
    LineHeight,
    /// `color`
    Color,
    /// `background-color`
    BackgroundColor,
    /// `background` shorthand (accepted, not expanded).
    Background,
    /// `text-decoration`
    TextDecoration,
    /// `text-align`
    TextAlign,
    /// `text-indent`
    TextIndent,
    /// `text-transform`
    TextTransform,
    /// `vertical-align`
    VerticalAlign,
    /// `white-space`
    WhiteSpace,
    /// `word-spacing` (accepted, ignored).
    WordSpacing,
    /// `letter-spacing` (accepted, ignored).
    LetterSpacing,
    /// `display` (accepted, ignored).
    Display,
    /// `margin` shorthand.
    Margin,
    /// `margin-top`
    MarginTop,
    /// `margin-right`
    MarginRight,
    /// `margin-bottom`
    MarginBottom,
    /// `margin-left`
    MarginLeft,
    /// `padding` shorthand.
    Padding,
    /// `padding-top`
    PaddingTop,
    /// `padding-right`
    PaddingRight,
    /// `padding-bottom`
    PaddingBottom,
    /// `padding-left`
    PaddingLeft,
    /// `border` shorthand.
    Border,
    /// `border-width`
    BorderWidth,
    /// `border-style`
    BorderStyle,
    /// `border-color`
    BorderColor,
    /// `border-top` (accepted, ignored).
    BorderTop,
    /// `border-right` (accepted, ignored).
    BorderRight,
    /// `border-bottom` (accepted, ignored).
    BorderBottom,
    /// `border-left` (accepted, ignored).
    BorderLeft,
    /// `border-top-style` (accepted, ignored).
    BorderTopStyle,
    /// `border-top-color` (accepted, ignored).
    BorderTopColor,
    /// `border-top-width` (accepted, ignored).
    BorderTopWidth,
    /// `border-right-style` (accepted, ignored).
    BorderRightStyle,
    /// `border-right-color` (accepted, ignored).
    BorderRightColor,
    /// `border-right-width` (accepted, ignored).
    BorderRightWidth,
    /// `border-bottom-style` (accepted, ignored).
    BorderBottomStyle,
    /// `border-bottom-color` (accepted, ignored).
    BorderBottomColor,
    /// `border-bottom-width` (accepted, ignored).
    BorderBottomWidth,
    /// `border-left-style` (accepted, ignored).
    BorderLeftStyle,
    /// `border-left-color` (accepted, ignored).
    BorderLeftColor,
    /// `border-left-width` (accepted, ignored).
    BorderLeftWidth,
    /// `width`
    Width,
    /// `height`
    Height,
    /// `float`
    Float,
    /// `clear`
    Clear,
    /// `list-style` shorthand.
    ListStyle,
    /// `list-style-type`
    ListStyleType,
    /// `list-style-position`
    ListStylePosition,
    /// `list-style-image` (accepted, ignored).
    ListStyleImage,
}

impl Property {
    /// The lowercase CSS name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Whether the name is recognized but intentionally produces no keys.
    #[must_use]
    pub const fn is_accepted_no_op(self) -> bool {
        matches!(
            self,
            Self::Background
                | Self::WordSpacing
                | Self::LetterSpacing
                | Self::Display
                | Self::BorderTop
                | Self::BorderRight
                | Self::BorderBottom
                | Self::BorderLeft
                | Self::BorderTopStyle
                | Self::BorderTopColor
                | Self::BorderTopWidth
                | Self::BorderRightStyle
                | Self::BorderRightColor
                | Self::BorderRightWidth
                | Self::BorderBottomStyle
                | Self::BorderBottomColor
                | Self::BorderBottomWidth
                | Self::BorderLeftStyle
                | Self::BorderLeftColor
                | Self::BorderLeftWidth
                | Self::ListStyleImage
        )
    }
}

/// The flat output of style resolution for one element.
///
/// Keys are normalized property names, including synthesized directional
/// keys such as `margin-top` or `border-style-left` and the
/// `text-decoration-*` flags. Values are final strings: lengths carry their
/// unit, colors are a hex run, a color name or a placeholder name, and flags
/// are `"true"`/`"false"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertyMap(BTreeMap<String, String>);

impl PropertyMap {
    /// An empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any earlier value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let _ = self.0.insert(key.into(), value.into());
    }

    /// The value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether `key` has a value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no key has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
