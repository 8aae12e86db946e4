// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_element_tree --heading-base-level=0

//! Understory Element Tree: a Kurbo-native, document-like tree of elements.
//!
//! Understory Element Tree models the part of a document that keyboard focus logic needs:
//!
//! - A hierarchy of elements with ordered children and sibling links.
//! - A small set of element categories ([`ElementKind`]) plus optional `id` and `name` attributes.
//! - Local bounds and local transforms, from which world-space boxes are derived on demand.
//! - A body designation and a focused element.
//!
//! ## Geometry is never cached
//!
//! [`Tree::world_bounds`] composes the local transforms of an element and all of its ancestors every
//! time it is called. There is no commit step and no invalidation protocol: a read always reflects
//! the latest bounds and transforms. This keeps the tree trivially consistent for callers that read
//! geometry once per query, such as directional focus search.
//!
//! ## Not a layout engine
//!
//! This crate does not perform layout. Upstream code computes positions and sizes and stores them
//! as local bounds; scroll offsets and similar shifts go into local transforms.
//!
//! ## API overview
//!
//! - [`Tree`]: container managing elements, the body designation, and focus.
//! - [`ElementNode`]: per-element local data (category, attributes, bounds, transform).
//! - [`ElementKind`]: element categories relevant to keyboard focus.
//! - [`NodeId`]: generational handle of an element.
//! - [`FocusOptions`]: options carried with a focus request.
//!
//! ### Minimal usage
//!
//! ```
//! use understory_element_tree::{ElementKind, ElementNode, FocusOptions, Tree};
//! use kurbo::{Affine, Rect, Vec2};
//!
//! let mut tree = Tree::new();
//! let body = tree.insert(None, ElementNode::default());
//! tree.set_body(Some(body));
//!
//! let user = tree.insert(
//!     Some(body),
//!     ElementNode::new(ElementKind::TextInput, Rect::new(10.0, 10.0, 210.0, 30.0)).with_name("user"),
//! );
//!
//! // Scroll the body by 5 pixels; the world box follows immediately.
//! tree.set_local_transform(body, Affine::translate(Vec2::new(0.0, -5.0)));
//! assert_eq!(tree.world_bounds(user), Some(Rect::new(10.0, 5.0, 210.0, 25.0)));
//!
//! assert!(tree.focus(user, FocusOptions::default()));
//! assert_eq!(tree.focused(), Some(user));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::Tree;
pub use types::{ElementKind, ElementNode, FocusOptions, NodeId};
