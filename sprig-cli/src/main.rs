//! sprig CLI
//!
//! A small front end over the parser for testing and debugging: reads
//! markup from a file or an inline argument, parses it, and prints the
//! result as a colored tree, re-serialized markup, or JSON. The query and
//! whitelist flags exercise the node operations. Everything here is an
//! external collaborator of the core: it only calls `parse` and the
//! element methods.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use serde_json::{Value, json};
use sprig_markup::parse;
use sprig_node::Element;

/// Parse permissive HTML-like markup and inspect the resulting tree.
#[derive(Debug, Parser)]
#[command(name = "sprig", version, about)]
struct Args {
    /// Markup file to parse.
    #[arg(conflicts_with = "html")]
    input: Option<PathBuf>,

    /// Inline markup string to parse instead of a file.
    #[arg(long)]
    html: Option<String>,

    /// Keep only these attributes, recursively (may repeat; `*` keeps all).
    #[arg(long = "keep", value_name = "ATTR")]
    keep: Vec<String>,

    /// Look up one element by id and print its serialized form.
    #[arg(long, value_name = "ID")]
    id: Option<String>,

    /// Collect elements by class token and print their serialized forms.
    #[arg(long, value_name = "CLASS")]
    class: Option<String>,

    /// Print the forest re-serialized to markup instead of as a tree.
    #[arg(long)]
    serialize: bool,

    /// Print the forest as JSON instead of as a tree.
    #[arg(long, conflicts_with = "serialize")]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let markup = match (&args.input, &args.html) {
        (_, Some(inline)) => inline.clone(),
        (Some(path), None) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => anyhow::bail!("expected a markup file or --html"),
    };

    let mut forest = parse(&markup);

    if !args.keep.is_empty() {
        let whitelist: Vec<&str> = args.keep.iter().map(String::as_str).collect();
        for root in &mut forest {
            root.filter_attributes(&whitelist);
        }
    }

    if let Some(id) = &args.id {
        match forest.iter().find_map(|root| root.get_element_by_id(id)) {
            Some(element) => println!("{}", element.html()),
            None => println!("no element with id {id:?}"),
        }
        return Ok(());
    }

    if let Some(class) = &args.class {
        let found: Vec<&Element> = forest
            .iter()
            .flat_map(|root| root.get_elements_by_class(class))
            .collect();
        println!("{} element(s) with class {class:?}", found.len());
        for element in found {
            println!("{}", element.html());
        }
        return Ok(());
    }

    if args.serialize {
        for root in &forest {
            println!("{}", root.html());
        }
    } else if args.json {
        let dump = Value::Array(forest.iter().map(element_to_json).collect());
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        println!("{} root element(s)", forest.len());
        for root in &forest {
            print_tree(root, 0);
        }
    }

    Ok(())
}

/// Print one subtree with two-space indentation per depth level.
fn print_tree(element: &Element, depth: usize) {
    let indent = "  ".repeat(depth);

    let mut attrs = String::new();
    for (key, value) in &element.attributes {
        let _ = write!(attrs, " {key}={value:?}");
    }

    let marker = if element.is_removed { " (removed)" } else { "" };
    println!(
        "{indent}{}{}{marker}",
        element.tag_name.green().bold(),
        attrs.dimmed()
    );

    if let Some(content) = &element.content {
        if !content.is_empty() {
            println!("{indent}  {}", content.yellow());
        }
    }

    for child in &element.children {
        print_tree(child, depth + 1);
    }
}

/// Convert one element (tombstones included) to a JSON value.
fn element_to_json(element: &Element) -> Value {
    json!({
        "tagName": element.tag_name,
        "attributes": element.attributes,
        "content": element.content,
        "selfClosing": element.is_self_closing,
        "removed": element.is_removed,
        "children": element.children.iter().map(element_to_json).collect::<Vec<_>>(),
    })
}
