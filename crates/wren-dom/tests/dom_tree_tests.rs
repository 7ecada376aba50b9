//! Tests for DOM tree construction and traversal.

use wren_dom::{DomTree, ElementData, NodeId, NodeType};

#[test]
fn test_new_tree_has_document_root() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert!(matches!(
        tree.get(NodeId::ROOT).map(|n| &n.node_type),
        Some(NodeType::Document)
    ));
}

#[test]
fn test_append_sets_parent_and_order() {
    let mut tree = DomTree::new();
    let html = tree.append_element(NodeId::ROOT, ElementData::new("html"));
    let head = tree.append_element(html, ElementData::new("head"));
    let body = tree.append_element(html, ElementData::new("body"));

    assert_eq!(tree.children(html), &[head, body]);
    assert_eq!(tree.parent(body), Some(html));
    assert_eq!(tree.parent(NodeId::ROOT), None);
}

#[test]
fn test_ancestors_walk_to_root() {
    let mut tree = DomTree::new();
    let html = tree.append_element(NodeId::ROOT, ElementData::new("html"));
    let body = tree.append_element(html, ElementData::new("body"));
    let p = tree.append_element(body, ElementData::new("p"));

    let ancestors: Vec<NodeId> = tree.ancestors(p).collect();
    assert_eq!(ancestors, vec![body, html, NodeId::ROOT]);
}

#[test]
fn test_descendants_are_in_document_order() {
    let mut tree = DomTree::new();
    let html = tree.append_element(NodeId::ROOT, ElementData::new("html"));
    let head = tree.append_element(html, ElementData::new("head"));
    let style = tree.append_element(head, ElementData::new("style"));
    let body = tree.append_element(html, ElementData::new("body"));
    let text = tree.append_text(body, "hello");

    let order: Vec<NodeId> = tree.descendants(NodeId::ROOT).collect();
    assert_eq!(order, vec![NodeId::ROOT, html, head, style, body, text]);
}

#[test]
fn test_element_path_ends_with_element() {
    let mut tree = DomTree::new();
    let html = tree.append_element(NodeId::ROOT, ElementData::new("html"));
    let body = tree.append_element(html, ElementData::new("body"));
    let p = tree.append_element(body, ElementData::new("p").with_attr("class", "note"));
    let text = tree.append_text(p, "x");

    let path: Vec<&str> = tree.element_path(p).iter().map(|e| e.local_name()).collect();
    assert_eq!(path, vec!["html", "body", "p"]);
    assert!(tree.element_path(text).is_empty());
}

#[test]
fn test_attribute_accessors_keep_raw_values() {
    let data = ElementData::new("div")
        .with_attr("id", "Main")
        .with_attr("class", "Note wide")
        .with_attr("style", "color: red");

    assert_eq!(data.id(), Some("Main"));
    assert_eq!(data.class(), Some("Note wide"));
    assert_eq!(data.style(), Some("color: red"));
    assert_eq!(data.attr("title"), None);
    assert!(data.is("DIV"));
}

#[test]
fn test_text_and_comment_accessors() {
    let mut tree = DomTree::new();
    let style = tree.append_element(NodeId::ROOT, ElementData::new("style"));
    let text = tree.append_text(style, "p { color: red }");
    let comment = tree.append_comment(style, "ignored");

    assert_eq!(tree.as_text(text), Some("p { color: red }"));
    assert_eq!(tree.as_comment(comment), Some("ignored"));
    assert_eq!(tree.as_text(comment), None);
    assert!(tree.as_element(text).is_none());
}
