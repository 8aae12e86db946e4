// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-order traversal, the focusability test, and the sibling shortcut.
//!
//! ## Traversal
//!
//! [`search`] walks a subtree in pre-order (parent first, then children left to right)
//! and hands every element to a [`Visitor`]. The visitor returns `true` to stop.
//! The walk follows first-child, next-sibling and parent links instead of recursing,
//! so arbitrarily deep documents are fine, and it never leaves the subtree it started in.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use understory_element_tree::{ElementKind, ElementNode, NodeId, Tree};
//! use understory_spatial_focus::search::search;
//!
//! let mut tree = Tree::new();
//! let body = tree.insert(None, ElementNode::default());
//! let div = tree.insert(Some(body), ElementNode::default());
//! let link = tree.insert(Some(div), ElementNode::new(ElementKind::Anchor, Rect::ZERO));
//! let field = tree.insert(Some(body), ElementNode::new(ElementKind::TextInput, Rect::ZERO));
//!
//! let mut order = Vec::new();
//! let stopped = search(&tree, Some(body), &mut |e: NodeId| {
//!     order.push(e);
//!     false
//! });
//! assert!(!stopped);
//! assert_eq!(order, vec![body, div, link, field]);
//! ```

use tracing::trace;

use crate::document::Document;
use crate::types::KindSet;

/// Per-element callback for [`search`].
///
/// Returning `true` stops the traversal. Implementors usually keep their own
/// output slot and may update it on elements for which they return `false`.
pub trait Visitor<E> {
    /// Visit one element.
    fn visit(&mut self, element: E) -> bool;
}

impl<E, F: FnMut(E) -> bool> Visitor<E> for F {
    #[inline]
    fn visit(&mut self, element: E) -> bool {
        self(element)
    }
}

/// Walk the subtree at `root` in document order until `visitor` returns `true`.
///
/// Returns `true` if the visitor stopped the walk and `false` if the subtree was
/// exhausted. An absent `root` returns `false` without calling the visitor.
pub fn search<D, V>(doc: &D, root: Option<D::Element>, visitor: &mut V) -> bool
where
    D: Document + ?Sized,
    V: Visitor<D::Element> + ?Sized,
{
    let Some(root) = root else {
        return false;
    };
    let mut cur = root;
    loop {
        if visitor.visit(cur) {
            return true;
        }
        if let Some(child) = doc.first_child(cur) {
            cur = child;
            continue;
        }
        // Climb until a next sibling exists, without leaving the subtree.
        loop {
            if cur == root {
                return false;
            }
            if let Some(next) = doc.next_sibling(cur) {
                cur = next;
                break;
            }
            match doc.parent(cur) {
                Some(p) => cur = p,
                None => return false,
            }
        }
    }
}

/// Returns true if `element` can receive focus from a directional move.
///
/// Text inputs, text areas and anchors qualify. Buttons do not.
pub fn is_focusable<D: Document + ?Sized>(doc: &D, element: D::Element) -> bool {
    KindSet::FOCUS_TARGETS.contains_kind(doc.kind(element))
}

/// The nearest focusable sibling before `element`, if any.
pub fn previous_focusable_sibling<D: Document + ?Sized>(
    doc: &D,
    element: D::Element,
) -> Option<D::Element> {
    let mut cur = doc.previous_sibling(element);
    while let Some(e) = cur {
        if is_focusable(doc, e) {
            trace!(element = ?e, "sibling shortcut (previous)");
            return Some(e);
        }
        cur = doc.previous_sibling(e);
    }
    None
}

/// The nearest focusable sibling after `element`, if any.
pub fn next_focusable_sibling<D: Document + ?Sized>(
    doc: &D,
    element: D::Element,
) -> Option<D::Element> {
    let mut cur = doc.next_sibling(element);
    while let Some(e) = cur {
        if is_focusable(doc, e) {
            trace!(element = ?e, "sibling shortcut (next)");
            return Some(e);
        }
        cur = doc.next_sibling(e);
    }
    None
}
