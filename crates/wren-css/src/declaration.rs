//! Declaration parsing.
//!
//! A declaration block is split into `name: value` pairs, each pair is
//! normalized and handed to the value grammar for its name. Nothing in here
//! reports errors: malformed pairs and unknown names are dropped.

use crate::property::{Property, PropertyMap};
use crate::values::apply_property;

/// Join the declaration text matched from the stylesheet with the element's
/// own `style` attribute.
///
/// The inline text comes last, so when both sources set the same key the
/// inline value is written last and wins.
#[must_use]
pub fn combine(stylesheet: Option<&str>, inline: Option<&str>) -> Option<String> {
    match (stylesheet, inline) {
        (Some(sheet), Some(inline)) => Some(format!("{sheet};{inline}")),
        (Some(text), None) | (None, Some(text)) => Some(text.to_string()),
        (None, None) => None,
    }
}

/// A `name: value` pair after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Trimmed, lowercased property name.
    pub name: String,
    /// Trimmed, unquoted, lowercased value.
    pub value: String,
}

/// Split a declaration block into normalized pairs.
///
/// Candidates are separated by `;`. A candidate is kept only if splitting it
/// on `:` gives exactly two parts, so `a: b: c` and `a` are both dropped.
pub fn split_declarations(text: &str) -> impl Iterator<Item = Declaration> + '_ {
    text.split(';').filter_map(|candidate| {
        let mut parts = candidate.split(':');
        let (Some(name), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return None;
        };
        Some(Declaration {
            name: name.trim().to_lowercase(),
            value: unquote(value.trim()).to_lowercase(),
        })
    })
}

/// Parse every declaration in `text` into `map`.
///
/// Names that are not a [`Property`] are ignored.
pub fn parse_declarations(text: &str, map: &mut PropertyMap) {
    for declaration in split_declarations(text) {
        let Ok(property) = declaration.name.parse::<Property>() else {
            continue;
        };
        let _ = apply_property(property, &declaration.value, map);
    }
}

/// Resolve one element's properties from its matched stylesheet declaration
/// and its inline `style` attribute.
#[must_use]
pub fn resolve_element_style(stylesheet: Option<&str>, inline: Option<&str>) -> PropertyMap {
    let mut map = PropertyMap::new();
    if let Some(text) = combine(stylesheet, inline) {
        parse_declarations(&text, &mut map);
    }
    map
}

/// Strip one pair of matching `'` or `"` around a value.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
