// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow navigation joining an existing key handler chain.
//!
//! An application already has a key handler (here: a shortcut logger). Installing arrow
//! navigation appends it to the chain, so the existing handler still sees every key first.
//!
//! Run:
//! - `cargo run -p understory_demos --example key_chain`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use understory_element_tree::{ElementKind, ElementNode, FocusOptions, Tree};
use understory_spatial_focus::dispatch::{KeyDispatcher, KeyEvent, Outcome, install};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut tree = Tree::new();
    let body = tree.insert(None, ElementNode::default());
    tree.set_body(Some(body));
    let mut ids = Vec::new();
    for (i, name) in ["host", "port", "user"].into_iter().enumerate() {
        let y = 10.0 + 30.0 * i as f64;
        ids.push(tree.insert(
            Some(body),
            ElementNode::new(ElementKind::TextInput, Rect::new(10.0, y, 200.0, y + 20.0))
                .with_name(name),
        ));
    }
    tree.focus(ids[0], FocusOptions::default());

    let pressed: Rc<RefCell<Vec<String>>> = Rc::default();
    let mut keys: KeyDispatcher<Tree> = KeyDispatcher::new();
    {
        let pressed = pressed.clone();
        keys.register(move |_: &mut Tree, ev: &KeyEvent<'_>| {
            tracing::info!(key = ev.key, "shortcut logger");
            pressed.borrow_mut().push(ev.key.to_string());
            if ev.key == "Escape" {
                Outcome::Handled
            } else {
                Outcome::Ignored
            }
        });
    }
    install(&mut keys);
    println!("{} handlers registered", keys.len());

    for key in ["ArrowDown", "ArrowDown", "ArrowDown", "Escape", "ArrowUp"] {
        let report = keys.dispatch(&mut tree, &KeyEvent::new(key));
        let focus = tree.focused().and_then(|f| tree.name(f)).unwrap_or("<none>");
        println!(
            "{key:<10} invoked={} handled={:<5} focus={focus}",
            report.invoked, report.handled
        );
    }

    println!("shortcut logger saw: {:?}", pressed.borrow());
}
