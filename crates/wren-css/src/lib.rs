//! Stylesheet discovery, selector matching and declaration parsing for the
//! Wren styling engine.
//!
//! # Scope
//!
//! This crate turns the style information embedded in a document into one
//! flat [`PropertyMap`] per element:
//!
//! - **Stylesheet index** ([`stylesheet`]): `<style>` blocks are found,
//!   comments stripped, and the text split into `(selector, declaration)`
//!   rules in document order.
//! - **Selector matching** ([`selector`]): the most recent rule whose last
//!   selector token (`tag`, `.class`, `#id`) matches the element wins.
//! - **Declaration parsing** ([`declaration`]): the matched declaration and
//!   the element's `style` attribute are split into `name: value` pairs and
//!   normalized.
//! - **Value grammars** ([`values`]): one small grammar per property,
//!   including shorthand expansion for `font`, `margin`, `padding`, `border`
//!   and `list-style`.
//!
//! # Not Yet Implemented
//!
//! - External stylesheets (`<link>`, `@import`)
//! - Specificity, inheritance and combinators
//! - `rgb()` component decoding and system color resolution
//! - `background`, `display`, spacing and per-side border shorthands
//!   (accepted and ignored)

/// Whole-document style resolution.
pub mod cascade;
/// Declaration splitting, normalization and dispatch.
pub mod declaration;
/// Recognized property names and the output map.
pub mod property;
/// Cursor shared by the value grammars.
pub mod scanner;
/// Selector tokens, element contexts and rule lookup.
pub mod selector;
/// `<style>` discovery and the rule index.
pub mod stylesheet;
/// Per-property value grammars.
pub mod values;

pub use cascade::{compute_styles, compute_styles_with_index, style_for_element};
pub use declaration::{combine, parse_declarations, resolve_element_style};
pub use property::{Property, PropertyMap};
pub use scanner::Scanner;
pub use selector::{ContextError, ElementContext, SelectorLevel};
pub use stylesheet::{Rule, StyleIndex};
