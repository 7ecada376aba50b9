//! Selector matching.
//!
//! [Selectors Level 3](https://www.w3.org/TR/selectors-3/)
//!
//! Matching is best-effort. Only the last whitespace-separated token of a
//! selector is evaluated, so `body p.note` behaves exactly like `p.note`:
//! ancestry is never checked. A token is one of `tag`, `.class`, `#id`,
//! `tag.class` or `tag#id`.
//!
//! The tag part is compared against the element's local name, and the class
//! and id parts against the raw `class`/`id` attribute values. Selector text
//! is lowercased when it is indexed while attribute values are not, so
//! `.Note` never matches `class="Note"`.

use wren_dom::{DomTree, ElementData, NodeId};

use crate::stylesheet::StyleIndex;

/// Errors raised while building an [`ElementContext`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    /// The node is not an element (text, comment or the document).
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),
}

/// The chain of elements from the outermost ancestor down to the element
/// being styled.
///
/// Only the innermost element takes part in matching; the ancestors are
/// carried so that callers can build the context once per element.
#[derive(Debug, Clone, Default)]
pub struct ElementContext<'a> {
    path: Vec<&'a ElementData>,
}

impl<'a> ElementContext<'a> {
    /// Wrap an explicit ancestor chain. The last entry is the element.
    #[must_use]
    pub const fn new(path: Vec<&'a ElementData>) -> Self {
        Self { path }
    }

    /// The context of element `id` in `tree`.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::NotAnElement`] if `id` is not an element.
    pub fn from_tree(tree: &'a DomTree, id: NodeId) -> Result<Self, ContextError> {
        let path = tree.element_path(id);
        if path.is_empty() {
            return Err(ContextError::NotAnElement(id));
        }
        Ok(Self { path })
    }

    /// The element being styled.
    #[must_use]
    pub fn element(&self) -> Option<&'a ElementData> {
        self.path.last().copied()
    }

    /// All elements, outermost first.
    #[must_use]
    pub fn path(&self) -> &[&'a ElementData] {
        &self.path
    }

    /// Number of elements in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the chain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// The requirements of one selector token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorLevel<'s> {
    /// Required local name.
    pub tag: Option<&'s str>,
    /// Required `class` attribute value.
    pub class: Option<&'s str>,
    /// Required `id` attribute value.
    pub id: Option<&'s str>,
}

impl<'s> SelectorLevel<'s> {
    /// Split a token into its requirements.
    ///
    /// The first `.` takes precedence: what precedes it is the tag and
    /// everything after it is the class. Otherwise the first `#` splits tag
    /// and id the same way. Otherwise the whole token is a tag. An empty
    /// token has no requirements and yields `None`.
    #[must_use]
    pub fn parse(token: &'s str) -> Option<Self> {
        if token.is_empty() {
            return None;
        }

        let non_empty = |s: &'s str| (!s.is_empty()).then_some(s);

        let level = if let Some((tag, class)) = token.split_once('.') {
            Self {
                tag: non_empty(tag),
                class: Some(class),
                id: None,
            }
        } else if let Some((tag, id)) = token.split_once('#') {
            Self {
                tag: non_empty(tag),
                class: None,
                id: Some(id),
            }
        } else {
            Self {
                tag: Some(token),
                class: None,
                id: None,
            }
        };
        Some(level)
    }

    /// Whether `element` meets every requirement.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        self.tag.is_none_or(|tag| tag == element.local_name())
            && self.class.is_none_or(|class| element.class() == Some(class))
            && self.id.is_none_or(|id| element.id() == Some(id))
    }
}

/// The token of a selector that is actually evaluated.
fn last_token(selector: &str) -> Option<&str> {
    selector.split_whitespace().next_back()
}

impl StyleIndex {
    /// Find the declaration of the most recently registered rule that matches
    /// the element at the end of `context`.
    ///
    /// # Panics
    ///
    /// Panics if `context` is empty or if its last element is not named
    /// `element_name`. Both mean the caller is resolving the wrong element.
    #[must_use]
    pub fn resolve(&self, element_name: &str, context: &ElementContext<'_>) -> Option<&str> {
        let Some(element) = context.element() else {
            panic!("cannot resolve style for <{element_name}>: element context is empty");
        };
        assert_eq!(
            element.local_name(),
            element_name,
            "element context does not end with the element being resolved"
        );

        self.rules()
            .iter()
            .rev()
            .find(|rule| {
                last_token(&rule.selector)
                    .and_then(SelectorLevel::parse)
                    .is_some_and(|level| level.matches(element))
            })
            .map(|rule| rule.declaration.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_levels() {
        assert_eq!(
            SelectorLevel::parse("p.note"),
            Some(SelectorLevel {
                tag: Some("p"),
                class: Some("note"),
                id: None
            })
        );
        assert_eq!(
            SelectorLevel::parse("#main"),
            Some(SelectorLevel {
                tag: None,
                class: None,
                id: Some("main")
            })
        );
        assert_eq!(SelectorLevel::parse(""), None);
    }

    #[test]
    fn test_class_marker_wins_over_id_marker() {
        let level = SelectorLevel::parse("div#a.b").unwrap();
        assert_eq!(level.tag, Some("div#a"));
        assert_eq!(level.class, Some("b"));
        assert_eq!(level.id, None);
    }

    #[test]
    fn test_class_compares_whole_attribute() {
        let level = SelectorLevel::parse(".note").unwrap();
        assert!(level.matches(&ElementData::new("p").with_attr("class", "note")));
        assert!(!level.matches(&ElementData::new("p").with_attr("class", "note big")));
        assert!(!level.matches(&ElementData::new("p").with_attr("class", "Note")));
        assert!(!level.matches(&ElementData::new("p")));
    }

    #[test]
    fn test_last_token() {
        assert_eq!(last_token("body  p.note"), Some("p.note"));
        assert_eq!(last_token("   "), None);
    }

    #[test]
    fn test_from_tree_rejects_text_nodes() {
        let mut tree = DomTree::new();
        let p = tree.append_element(NodeId::ROOT, ElementData::new("p"));
        let text = tree.append_text(p, "x");

        assert_eq!(ElementContext::from_tree(&tree, p).unwrap().len(), 1);
        assert_eq!(
            ElementContext::from_tree(&tree, text).unwrap_err(),
            ContextError::NotAnElement(text)
        );
    }

    #[test]
    #[should_panic(expected = "element context is empty")]
    fn test_resolve_empty_context_panics() {
        let index = StyleIndex::from_css("p { color: red }");
        let _ = index.resolve("p", &ElementContext::default());
    }

    #[test]
    #[should_panic(expected = "does not end with the element")]
    fn test_resolve_mismatched_context_panics() {
        let index = StyleIndex::from_css("p { color: red }");
        let div = ElementData::new("div");
        let _ = index.resolve("p", &ElementContext::new(vec![&div]));
    }
}
