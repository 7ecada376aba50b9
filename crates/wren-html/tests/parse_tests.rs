//! Tests for loading HTML into the Wren DOM.

use wren_dom::{DomTree, NodeId};
use wren_html::parse_document;

fn find_element(tree: &DomTree, tag: &str) -> Option<NodeId> {
    tree.descendants(tree.root())
        .find(|&id| tree.as_element(id).is_some_and(|e| e.is(tag)))
}

#[test]
fn test_parse_builds_html_head_body() {
    let tree = parse_document("<p>hello</p>").unwrap();

    let html = find_element(&tree, "html").unwrap();
    assert_eq!(tree.parent(html), Some(NodeId::ROOT));
    assert!(find_element(&tree, "head").is_some());
    let body = find_element(&tree, "body").unwrap();
    let p = find_element(&tree, "p").unwrap();
    assert_eq!(tree.parent(p), Some(body));
}

#[test]
fn test_parse_keeps_attributes_verbatim() {
    let tree = parse_document(r#"<div id="Main" class="Note" style="color: RED"></div>"#).unwrap();
    let div = find_element(&tree, "div").unwrap();
    let data = tree.as_element(div).unwrap();

    assert_eq!(data.id(), Some("Main"));
    assert_eq!(data.class(), Some("Note"));
    assert_eq!(data.style(), Some("color: RED"));
}

#[test]
fn test_style_element_content_is_text() {
    let tree = parse_document("<html><head><style>p { color: red; }</style></head></html>").unwrap();
    let style = find_element(&tree, "style").unwrap();
    let text: String = tree
        .children(style)
        .iter()
        .filter_map(|&id| tree.as_text(id))
        .collect();

    assert_eq!(text, "p { color: red; }");
}

#[test]
fn test_comments_are_kept() {
    let tree = parse_document("<body><!-- note --><p>x</p></body>").unwrap();
    let body = find_element(&tree, "body").unwrap();
    let comment = tree.children(body)[0];

    assert_eq!(tree.as_comment(comment), Some(" note "));
}

#[test]
fn test_tag_names_are_lowercased() {
    let tree = parse_document("<DIV><SPAN>x</SPAN></DIV>").unwrap();
    let span = find_element(&tree, "span").unwrap();

    assert_eq!(tree.as_element(span).unwrap().local_name(), "span");
}
