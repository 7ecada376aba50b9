//! Stylesheet discovery and the rule index.
//!
//! [HTML Standard § 4.2.6 The style element](https://html.spec.whatwg.org/multipage/semantics.html#the-style-element)
//!
//! The index is built once per document from its embedded `<style>` blocks
//! and is read-only afterwards. Rules are kept in the order they were found,
//! which is the only ordering the matcher uses.
//!
//! The rule tokenizer is deliberately shallow: it knows about `{`, `}` and
//! `@`, nothing else. Nested blocks are not supported.

use serde::Serialize;
use wren_common::warning::{clear_warnings, warn_once};
use wren_dom::{DomTree, NodeId, NodeType};

/// A selector fragment with its declaration block. Both are trimmed and
/// lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// One fragment of a comma-separated selector list.
    pub selector: String,
    /// The declaration block text between the braces.
    pub declaration: String,
}

/// Every rule from a document's style blocks, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleIndex {
    rules: Vec<Rule>,
}

impl StyleIndex {
    /// An empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from every `<style>` element in `tree`.
    ///
    /// Starts a new document: warnings recorded for earlier documents are
    /// dropped, so [`wren_common::warning::take_warnings`] afterwards reports
    /// this document only.
    #[must_use]
    pub fn from_document(tree: &DomTree) -> Self {
        clear_warnings();
        let mut index = Self::new();
        index.discover(tree, tree.root());
        index
    }

    /// Build an index from stylesheet text, as if it came from one `<style>`
    /// block.
    #[must_use]
    pub fn from_css(css: &str) -> Self {
        let mut index = Self::new();
        index.parse_into(&strip_comments(css));
        index
    }

    /// The rules, oldest first.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Walk the subtree at `id` looking for style blocks.
    fn discover(&mut self, tree: &DomTree, id: NodeId) {
        if let Some(element) = tree.as_element(id) {
            // [§ 4.2.4 The link element](https://html.spec.whatwg.org/multipage/semantics.html#the-link-element)
            // External stylesheets are not loaded.
            if element.is("link") {
                if let Some(href) = element.attr("href") {
                    warn_once("CSS", &format!("external stylesheet '{href}' not loaded"));
                }
                return;
            }

            if element.is("style") {
                let css = style_text(tree, id);
                self.parse_into(&strip_comments(&css));
                return;
            }
        }

        for &child in tree.children(id) {
            self.discover(tree, child);
        }
    }

    /// Tokenize stylesheet text into rules and append them.
    ///
    /// Scans for `{`. An `@` met first starts an at-rule, which is skipped up
    /// to the next `;`. The block runs to the next `}` (or the end of the
    /// text). Blocks of two characters or fewer carry no declaration and are
    /// skipped.
    pub fn parse_into(&mut self, css: &str) {
        let len = css.len();
        let mut pos = 0;

        while pos < len {
            let mut selector_start = pos;
            let mut open = None;
            let mut i = pos;

            while i < len {
                match css.as_bytes()[i] {
                    b'{' => {
                        open = Some(i);
                        break;
                    }
                    b'@' => {
                        let end = css[i..].find(';').map_or(len, |offset| i + offset);
                        let at_rule = css[i..end].trim();
                        warn_once("CSS", &format!("skipped at-rule '{at_rule}'"));
                        i = (end + 1).min(len);
                        selector_start = i;
                    }
                    _ => i += 1,
                }
            }

            let Some(open) = open else {
                break;
            };
            let close = css[open + 1..]
                .find('}')
                .map_or(len, |offset| open + 1 + offset);

            let block = &css[open + 1..close];
            if block.len() > 2 {
                self.register(&css[selector_start..open], block);
            }

            pos = close + 1;
        }
    }

    /// Add a rule for each fragment of a comma-separated selector list.
    ///
    /// Both texts are trimmed and lowercased. An empty selector or an empty
    /// declaration adds nothing, as do empty fragments.
    pub fn register(&mut self, selector: &str, declaration: &str) {
        let selector = selector.trim().to_lowercase();
        let declaration = declaration.trim().to_lowercase();
        if selector.is_empty() || declaration.is_empty() {
            return;
        }

        for fragment in selector.split(',') {
            let fragment = fragment.trim();
            if !fragment.is_empty() {
                self.rules.push(Rule {
                    selector: fragment.to_string(),
                    declaration: declaration.clone(),
                });
            }
        }
    }
}

/// Concatenate the text and comment children of a `<style>` element.
///
/// Comment children are included because older documents wrap their style
/// text in `<!-- -->`.
fn style_text(tree: &DomTree, style: NodeId) -> String {
    let mut css = String::new();
    for &child in tree.children(style) {
        if let Some(node) = tree.get(child) {
            match &node.node_type {
                NodeType::Text(text) | NodeType::Comment(text) => css.push_str(text),
                NodeType::Document | NodeType::Element(_) => {}
            }
        }
    }
    css
}

/// [CSS 2.1 § 4.1.9 Comments](https://www.w3.org/TR/CSS21/syndata.html#comments)
///
/// Remove `/* ... */` comments. Each line is handled on its own, so a comment
/// that spans several lines is left in place.
#[must_use]
pub fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    for line in css.split_inclusive('\n') {
        let mut rest = line;
        while let Some(open) = rest.find("/*") {
            let Some(close) = rest[open + 2..].find("*/") else {
                break;
            };
            out.push_str(&rest[..open]);
            rest = &rest[open + 2 + close + 2..];
        }
        out.push_str(rest);
    }
    out
}
