// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_spatial_focus --heading-base-level=0

//! Understory Spatial Focus: arrow-key focus navigation over a document's geometry.
//!
//! ## Overview
//!
//! Pressing an arrow key moves focus to a focusable control in that direction, chosen from
//! the controls' on-screen rectangles rather than from tab order. The intended documents are
//! forms made of text inputs, text areas and links.
//!
//! The crate reads the host through the [`Document`](crate::document::Document) trait.
//! `understory_element_tree`'s `Tree` implements it out of the box.
//!
//! ## Pieces
//!
//! - [`search`](crate::search): document-order traversal with an early stop,
//!   the focusability test, and the sibling shortcut.
//! - [`select`](crate::select): the per-direction candidate selection, plus
//!   [`handle_key`](crate::select::handle_key) which ties a key press to a focus change.
//! - [`focus`](crate::focus): resolving the reference element and applying focus.
//! - [`dispatch`](crate::dispatch): an ordered chain of key handlers that arrow navigation
//!   joins without displacing handlers registered before it.
//! - [`types`](crate::types): [`Direction`](crate::types::Direction),
//!   [`KindSet`](crate::types::KindSet) and [`SearchOutcome`](crate::types::SearchOutcome).
//!
//! ## Workflow
//!
//! 1) A key press arrives with a key identifier. Only `"ArrowUp"`, `"ArrowDown"`,
//!    `"ArrowLeft"` and `"ArrowRight"` are acted on.
//! 2) The reference element is the focused element, or failing that the first control
//!    among the document's top-level elements.
//! 3) A candidate is selected: first from the reference's siblings, then by walking the body.
//! 4) The candidate is focused. If there is no reference or no candidate, nothing changes.
//!
//! ## Example
//!
//! ```
//! use kurbo::Rect;
//! use understory_element_tree::{ElementKind, ElementNode, FocusOptions, Tree};
//! use understory_spatial_focus::select::handle_key;
//! use understory_spatial_focus::types::SearchOutcome;
//!
//! let mut tree = Tree::new();
//! let body = tree.insert(None, ElementNode::default());
//! tree.set_body(Some(body));
//!
//! let field = |kind: ElementKind, x: f64, y: f64| {
//!     ElementNode::new(kind, Rect::new(x, y, x + 80.0, y + 20.0))
//! };
//! // A user field on its own row, then a password field with a "show" link beside it.
//! let row1 = tree.insert(Some(body), ElementNode::default());
//! let user = tree.insert(Some(row1), field(ElementKind::TextInput, 0.0, 0.0));
//! let row2 = tree.insert(Some(body), ElementNode::default());
//! let pass = tree.insert(Some(row2), field(ElementKind::TextInput, 0.0, 40.0));
//! let show = tree.insert(Some(row2), field(ElementKind::Anchor, 100.0, 40.0));
//!
//! tree.focus(user, FocusOptions::default());
//! assert_eq!(handle_key(&mut tree, "ArrowDown"), Some(SearchOutcome::Found(pass)));
//! assert_eq!(handle_key(&mut tree, "ArrowRight"), Some(SearchOutcome::Found(show)));
//! assert_eq!(handle_key(&mut tree, "ArrowUp"), Some(SearchOutcome::Found(pass)));
//! assert_eq!(handle_key(&mut tree, "ArrowUp"), Some(SearchOutcome::Found(user)));
//! assert_eq!(handle_key(&mut tree, "ArrowUp"), Some(SearchOutcome::NoCandidate));
//! assert_eq!(handle_key(&mut tree, "Enter"), None);
//! assert_eq!(tree.focused(), Some(user));
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through [`tracing`](https://docs.rs/tracing): `trace` for the reference element,
//! sibling shortcuts and candidates, `debug` for focus changes and empty results.
//! The crate never installs a subscriber.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod dispatch;
pub mod document;
pub mod focus;
pub mod search;
pub mod select;
pub mod types;

pub use understory_element_tree::{ElementKind, FocusOptions};
