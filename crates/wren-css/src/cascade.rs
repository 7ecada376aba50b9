//! Style resolution for a whole document.
//!
//! The cascade as implemented here is not the CSS one: for each element the
//! last matching stylesheet rule is taken whole, and the element's `style`
//! attribute is applied after it. There is no specificity and no
//! inheritance; each element gets a fresh [`PropertyMap`].

use std::collections::HashMap;

use wren_dom::{DomTree, NodeId};

use crate::declaration::resolve_element_style;
use crate::property::PropertyMap;
use crate::selector::{ContextError, ElementContext};
use crate::stylesheet::StyleIndex;

/// Elements that never render and so get no property map.
const UNSTYLED_ELEMENTS: &[&str] = &["head", "link", "meta", "script", "style", "title"];

/// Resolve the properties of element `id` against a prebuilt index.
///
/// # Errors
///
/// Returns [`ContextError::NotAnElement`] if `id` is not an element.
pub fn style_for_element(
    tree: &DomTree,
    index: &StyleIndex,
    id: NodeId,
) -> Result<PropertyMap, ContextError> {
    let context = ElementContext::from_tree(tree, id)?;
    let Some(element) = context.element() else {
        return Err(ContextError::NotAnElement(id));
    };

    let stylesheet = index.resolve(element.local_name(), &context);
    Ok(resolve_element_style(stylesheet, element.style()))
}

/// Build the index for `tree` and resolve every styled element.
#[must_use]
pub fn compute_styles(tree: &DomTree) -> HashMap<NodeId, PropertyMap> {
    let index = StyleIndex::from_document(tree);
    compute_styles_with_index(tree, &index)
}

/// Resolve every styled element of `tree` against `index`.
///
/// Elements with nothing to apply still get an empty map.
#[must_use]
pub fn compute_styles_with_index(tree: &DomTree, index: &StyleIndex) -> HashMap<NodeId, PropertyMap> {
    let mut styles = HashMap::new();

    for id in tree.descendants(tree.root()) {
        let Some(element) = tree.as_element(id) else {
            continue;
        };
        if UNSTYLED_ELEMENTS.iter().any(|&tag| element.is(tag)) {
            continue;
        }
        if let Ok(map) = style_for_element(tree, index, id) {
            let _ = styles.insert(id, map);
        }
    }

    styles
}

#[cfg(test)]
mod tests {
    use super::*;
    use wren_dom::ElementData;

    #[test]
    fn test_every_body_element_gets_a_map() {
        let mut tree = DomTree::new();
        let html = tree.append_element(NodeId::ROOT, ElementData::new("html"));
        let head = tree.append_element(html, ElementData::new("head"));
        let style = tree.append_element(head, ElementData::new("style"));
        let _ = tree.append_text(style, "p { color: red }");
        let body = tree.append_element(html, ElementData::new("body"));
        let p = tree.append_element(body, ElementData::new("p"));

        let styles = compute_styles(&tree);

        assert!(!styles.contains_key(&head));
        assert!(!styles.contains_key(&style));
        assert!(styles[&body].is_empty());
        assert_eq!(styles[&p].get("color"), Some("red"));
    }

    #[test]
    fn test_style_for_text_node_is_an_error() {
        let mut tree = DomTree::new();
        let p = tree.append_element(NodeId::ROOT, ElementData::new("p"));
        let text = tree.append_text(p, "x");
        let index = StyleIndex::new();

        assert!(style_for_element(&tree, &index, p).unwrap().is_empty());
        assert_eq!(
            style_for_element(&tree, &index, text),
            Err(ContextError::NotAnElement(text))
        );
    }
}
