//! HTML loading for the Wren styling engine.
//!
//! Parsing is delegated to `html5ever` (the
//! [WHATWG parsing algorithm](https://html.spec.whatwg.org/multipage/parsing.html));
//! this crate only copies the resulting `RcDom` into a [`wren_dom::DomTree`],
//! keeping elements, attributes, text and comments in tree order.
//!
//! # Not Yet Implemented
//!
//! - `<template>` contents (skipped)
//! - Doctype and processing instruction nodes (skipped)

use html5ever::tendril::TendrilSink as _;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{ParseOpts, parse_document as html5ever_parse};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use wren_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

/// Errors raised while loading an HTML document.
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    /// The input could not be read as UTF-8 HTML.
    #[error("failed to read HTML input: {0}")]
    Read(#[from] std::io::Error),
}

/// Parse an HTML document into a [`DomTree`].
///
/// # Errors
///
/// Returns [`HtmlError::Read`] if the underlying reader fails.
pub fn parse_document(html: &str) -> Result<DomTree, HtmlError> {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            exact_errors: false,
            scripting_enabled: false,
            ..TreeBuilderOpts::default()
        },
        ..ParseOpts::default()
    };

    let dom = html5ever_parse(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut html.as_bytes())?;

    let mut tree = DomTree::new();
    for child in dom.document.children.borrow().iter() {
        copy_node(child, NodeId::ROOT, &mut tree);
    }
    Ok(tree)
}

/// Copy one `RcDom` node (and its subtree) under `parent`.
fn copy_node(handle: &Handle, parent: NodeId, tree: &mut DomTree) {
    let node_type = match &handle.data {
        NodeData::Element { name, attrs, .. } => {
            let attrs: AttributesMap = attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect();
            NodeType::Element(ElementData {
                tag_name: name.local.to_string(),
                attrs,
            })
        }
        NodeData::Text { contents } => NodeType::Text(contents.borrow().to_string()),
        NodeData::Comment { contents } => NodeType::Comment(contents.to_string()),
        NodeData::Document | NodeData::Doctype { .. } | NodeData::ProcessingInstruction { .. } => {
            return;
        }
    };

    let id = tree.alloc(node_type);
    tree.append_child(parent, id);

    for child in handle.children.borrow().iter() {
        copy_node(child, id, tree);
    }
}
