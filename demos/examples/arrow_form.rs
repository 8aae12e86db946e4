// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow-key navigation over a small sign-up form.
//!
//! Builds a form, prints it as an ASCII tree, then replays a sequence of key presses
//! and prints where focus lands after each.
//!
//! Run:
//! - `cargo run -p understory_demos --example arrow_form`
//! - `RUST_LOG=trace cargo run -p understory_demos --example arrow_form` to see every candidate.

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use understory_element_tree::{ElementKind, ElementNode, FocusOptions, NodeId, Tree};
use understory_spatial_focus::select::handle_key;
use understory_spatial_focus::types::SearchOutcome;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut tree = Tree::new();
    let html = tree.insert(None, ElementNode::default());
    let body = tree.insert(
        Some(html),
        ElementNode::new(ElementKind::Other, Rect::new(0.0, 0.0, 400.0, 300.0)),
    );
    tree.set_body(Some(body));

    let field = |kind: ElementKind, name: &str, x: f64, y: f64, w: f64| {
        ElementNode::new(kind, Rect::new(x, y, x + w, y + 24.0)).with_name(name)
    };

    // Row 1: first and last name side by side.
    let names = tree.insert(Some(body), ElementNode::default().with_id("names"));
    tree.insert(Some(names), field(ElementKind::TextInput, "first", 10.0, 10.0, 180.0));
    tree.insert(Some(names), field(ElementKind::TextInput, "last", 200.0, 10.0, 180.0));

    // Row 2: email on its own.
    let contact = tree.insert(Some(body), ElementNode::default().with_id("contact"));
    tree.insert(Some(contact), field(ElementKind::TextInput, "email", 10.0, 50.0, 370.0));

    // Row 3: a comment box with a help link beside it.
    let notes = tree.insert(Some(body), ElementNode::default().with_id("notes"));
    tree.insert(
        Some(notes),
        ElementNode::new(ElementKind::TextArea, Rect::new(10.0, 90.0, 300.0, 190.0))
            .with_name("comment"),
    );
    tree.insert(Some(notes), field(ElementKind::Anchor, "help", 310.0, 90.0, 70.0));

    // Row 4: a submit button, which arrow keys never focus.
    tree.insert(Some(body), field(ElementKind::Button, "submit", 10.0, 210.0, 100.0));

    print_ascii_tree(&tree, html);

    let keys = [
        "ArrowDown",
        "ArrowRight",
        "ArrowDown",
        "ArrowDown",
        "ArrowRight",
        "ArrowLeft",
        "ArrowUp",
        "ArrowUp",
        "ArrowUp",
        "Tab",
    ];

    // Nothing is focused yet and the only top-level element is <html>, so the first
    // press has no reference; start from the first name field instead.
    println!("\nPress ArrowDown with nothing focused:");
    println!("  -> {:?}", handle_key(&mut tree, "ArrowDown"));
    let first = tree.find_by_id("names").and_then(|n| tree.first_child(n));
    if let Some(first) = first {
        tree.focus(first, FocusOptions::default());
    }
    println!("Start at {}", label(&tree, tree.focused()));

    for key in keys {
        let outcome = handle_key(&mut tree, key);
        let result = match outcome {
            None => "ignored".to_string(),
            Some(SearchOutcome::Found(_)) => "moved".to_string(),
            Some(other) => format!("{other:?}"),
        };
        println!(
            "  {key:<10} -> {:<11} focus: {}",
            result,
            label(&tree, tree.focused())
        );
    }
}

fn label(tree: &Tree, id: Option<NodeId>) -> String {
    let Some(id) = id else {
        return "<none>".into();
    };
    let tag = tree.kind(id).tag().unwrap_or("DIV");
    match tree.name(id) {
        Some(name) => format!("{tag}[name={name}]"),
        None => tag.to_string(),
    }
}

fn print_ascii_tree(tree: &Tree, root: NodeId) {
    println!("Document:");
    print_node(tree, "", root);
    fn go(tree: &Tree, node: NodeId, prefix: &str) {
        let kids = tree.children(node);
        let len = kids.len();
        for (i, &k) in kids.iter().enumerate() {
            let last = i + 1 == len;
            let branch = if last { "└── " } else { "├── " };
            print_node(tree, &format!("{}{}", prefix, branch), k);
            let next_prefix = if last {
                format!("{}    ", prefix)
            } else {
                format!("{}│   ", prefix)
            };
            go(tree, k, &next_prefix);
        }
    }
    go(tree, root, "");
}

fn print_node(tree: &Tree, prefix: &str, id: NodeId) {
    let name = label(tree, Some(id));
    match tree.world_bounds(id) {
        Some(r) if r.area() > 0.0 => println!(
            "{}{}  rect=({:.0},{:.0})–({:.0},{:.0})",
            prefix, name, r.x0, r.y0, r.x1, r.y1
        ),
        _ => println!("{}{}", prefix, name),
    }
}
