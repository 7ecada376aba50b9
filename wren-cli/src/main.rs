//! Wren CLI
//!
//! Loads an HTML document and prints the property map resolved for each
//! element, as text or JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use serde::Serialize;
use wren_common::warning;
use wren_css::{ElementContext, PropertyMap, StyleIndex, compute_styles_with_index};
use wren_dom::{DomTree, ElementData, NodeId};

/// Print the resolved style properties of every element in an HTML document.
#[derive(Debug, Parser)]
#[command(name = "wren", version, about)]
struct Cli {
    /// HTML file to load.
    file: Option<PathBuf>,

    /// Inline HTML string instead of a file.
    #[arg(long, conflicts_with = "file")]
    html: Option<String>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Also print the stylesheet rule index.
    #[arg(long)]
    rules: bool,

    /// Include elements that resolved to no properties.
    #[arg(long)]
    all: bool,

    /// Do not print warnings about skipped stylesheet content.
    #[arg(long, short)]
    quiet: bool,
}

/// One element's entry in the output.
#[derive(Debug, Serialize)]
struct ElementStyle<'a> {
    path: String,
    properties: &'a PropertyMap,
}

/// Full JSON output.
#[derive(Debug, Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    rules: Option<&'a StyleIndex>,
    elements: Vec<ElementStyle<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    warning::set_echo(!cli.quiet);

    let html = match (&cli.html, &cli.file) {
        (Some(html), _) => html.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?,
        (None, None) => bail!("expected an HTML file or --html '<html>...</html>'"),
    };

    let tree = wren_html::parse_document(&html).context("failed to parse HTML")?;
    let index = StyleIndex::from_document(&tree);
    let styles = compute_styles_with_index(&tree, &index);
    let warnings = warning::take_warnings();

    // Document order, not hash order.
    let elements: Vec<ElementStyle<'_>> = tree
        .descendants(tree.root())
        .filter_map(|id| styles.get(&id).map(|properties| (id, properties)))
        .filter(|(_, properties)| cli.all || !properties.is_empty())
        .map(|(id, properties)| {
            Ok::<_, anyhow::Error>(ElementStyle {
                path: element_path(&tree, id)?,
                properties,
            })
        })
        .collect::<Result<_>>()?;

    if cli.json {
        let report = Report {
            rules: cli.rules.then_some(&index),
            elements,
            warnings,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if cli.rules {
        println!("{}", "=== Rules ===".bold());
        for rule in index.rules() {
            println!("{} {{ {} }}", rule.selector.green(), rule.declaration);
        }
        println!();
    }

    println!("{}", "=== Resolved Styles ===".bold());
    for element in &elements {
        println!("{}", element.path.cyan());
        for (key, value) in element.properties {
            println!("  {}: {value}", key.dimmed());
        }
    }
    println!(
        "\n{} styled elements, {} warnings",
        elements.len(),
        warnings.len()
    );

    Ok(())
}

/// A readable path such as `html > body > p.note#intro`.
fn element_path(tree: &DomTree, id: NodeId) -> Result<String> {
    let context = ElementContext::from_tree(tree, id)?;
    Ok(context
        .path()
        .iter()
        .map(|&element| describe(element))
        .collect::<Vec<_>>()
        .join(" > "))
}

fn describe(element: &ElementData) -> String {
    let mut label = element.local_name().to_string();
    if let Some(class) = element.class() {
        for name in class.split_ascii_whitespace() {
            label.push('.');
            label.push_str(name);
        }
    }
    if let Some(id) = element.id() {
        label.push('#');
        label.push_str(id);
    }
    label
}
