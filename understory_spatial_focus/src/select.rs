// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional candidate selection.
//!
//! ## Overview
//!
//! [`find_candidate`] picks at most one element to receive focus when moving from a
//! reference element in a [`Direction`]. It is a document-order heuristic tuned for
//! forms laid out top to bottom and left to right, not a nearest-neighbor search.
//!
//! ## Selection
//!
//! 1. Sibling shortcut: `Up`/`Left` take the nearest focusable previous sibling of the
//!    reference, `Down`/`Right` the nearest focusable next sibling. If one exists it wins
//!    outright, whatever its geometry.
//! 2. Otherwise the body is walked in document order. Non-focusable elements and the
//!    reference itself are skipped; each remaining element's rectangle is read once.
//!    - `Up`: every element with `top < base.top` replaces the current candidate. The walk
//!      stops at the first element with `top >= base.top` seen after a candidate exists.
//!    - `Left`: as `Up`, on the `left` edge.
//!    - `Down`: the first element with `top >= base.top` is selected.
//!    - `Right`: the first element with `left >= base.left` and `top >= base.top` is selected.
//!
//! `Up`/`Left` therefore return the *last* qualifying element before the walk turns back
//! below or right of the reference, while `Down`/`Right` return the *first* qualifying one.
//!
//! ## Example
//!
//! ```
//! use kurbo::Rect;
//! use understory_element_tree::{ElementKind, ElementNode, Tree};
//! use understory_spatial_focus::select::find_candidate;
//! use understory_spatial_focus::types::Direction;
//!
//! let mut tree = Tree::new();
//! let body = tree.insert(None, ElementNode::default());
//! tree.set_body(Some(body));
//! let row = |y: f64| ElementNode::new(ElementKind::TextInput, Rect::new(0.0, y, 100.0, y + 8.0));
//! let top = tree.insert(Some(body), row(10.0));
//! let bottom = tree.insert(Some(body), row(20.0));
//!
//! assert_eq!(find_candidate(&tree, top, Direction::Down), Some(bottom));
//! assert_eq!(find_candidate(&tree, bottom, Direction::Up), Some(top));
//! assert_eq!(find_candidate(&tree, top, Direction::Up), None);
//! ```

use kurbo::Rect;
use tracing::{debug, trace};

use crate::document::Document;
use crate::focus::{active_element, set_focus};
use crate::search::{
    Visitor, is_focusable, next_focusable_sibling, previous_focusable_sibling, search,
};
use crate::types::{Direction, SearchOutcome};

#[derive(Copy, Clone, Debug)]
enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    fn leading_edge(self, r: Rect) -> f64 {
        match self {
            Self::Vertical => r.y0,
            Self::Horizontal => r.x0,
        }
    }
}

/// Keeps the last element strictly before the reference on one axis.
struct LastBefore<'a, D: Document + ?Sized> {
    doc: &'a D,
    base: D::Element,
    axis: Axis,
    limit: f64,
    found: Option<D::Element>,
}

impl<D: Document + ?Sized> Visitor<D::Element> for LastBefore<'_, D> {
    fn visit(&mut self, element: D::Element) -> bool {
        if !is_focusable(self.doc, element) || element == self.base {
            return false;
        }
        let rect = self.doc.bounding_rect(element);
        if self.axis.leading_edge(rect) >= self.limit {
            return self.found.is_some();
        }
        trace_element(self.doc, element, rect, "candidate recorded");
        self.found = Some(element);
        false
    }
}

/// Takes the first element that `accepts` relative to the reference rectangle.
struct FirstFrom<'a, D: Document + ?Sized> {
    doc: &'a D,
    base: D::Element,
    base_rect: Rect,
    accepts: fn(Rect, Rect) -> bool,
    found: Option<D::Element>,
}

impl<D: Document + ?Sized> Visitor<D::Element> for FirstFrom<'_, D> {
    fn visit(&mut self, element: D::Element) -> bool {
        if !is_focusable(self.doc, element) || element == self.base {
            return false;
        }
        let rect = self.doc.bounding_rect(element);
        if !(self.accepts)(rect, self.base_rect) {
            return false;
        }
        trace_element(self.doc, element, rect, "candidate selected");
        self.found = Some(element);
        true
    }
}

fn at_or_below(rect: Rect, base: Rect) -> bool {
    rect.y0 >= base.y0
}

fn right_and_not_above(rect: Rect, base: Rect) -> bool {
    rect.x0 >= base.x0 && rect.y0 >= base.y0
}

/// Select the element that should receive focus when moving from `base` in `direction`.
///
/// Returns `None` when nothing qualifies; that is the normal outcome at the edges of a form.
pub fn find_candidate<D: Document + ?Sized>(
    doc: &D,
    base: D::Element,
    direction: Direction,
) -> Option<D::Element> {
    let base_rect = doc.bounding_rect(base);
    trace_element(doc, base, base_rect, "reference element");

    let sibling = if direction.is_backward() {
        previous_focusable_sibling(doc, base)
    } else {
        next_focusable_sibling(doc, base)
    };
    if sibling.is_some() {
        return sibling;
    }

    let found = match direction {
        Direction::Up | Direction::Left => {
            let axis = match direction {
                Direction::Up => Axis::Vertical,
                _ => Axis::Horizontal,
            };
            let mut v = LastBefore {
                doc,
                base,
                axis,
                limit: axis.leading_edge(base_rect),
                found: None,
            };
            search(doc, doc.body(), &mut v);
            v.found
        }
        Direction::Down | Direction::Right => {
            let accepts: fn(Rect, Rect) -> bool = match direction {
                Direction::Down => at_or_below,
                _ => right_and_not_above,
            };
            let mut v = FirstFrom {
                doc,
                base,
                base_rect,
                accepts,
                found: None,
            };
            search(doc, doc.body(), &mut v);
            v.found
        }
    };
    if found.is_none() {
        debug!(?direction, "no candidate found");
    }
    found
}

/// Resolve the reference element and select a candidate in `direction`.
pub fn search_from_active<D: Document + ?Sized>(
    doc: &D,
    direction: Direction,
) -> SearchOutcome<D::Element> {
    let Some(base) = active_element(doc) else {
        return SearchOutcome::NoReference;
    };
    match find_candidate(doc, base, direction) {
        Some(e) => SearchOutcome::Found(e),
        None => SearchOutcome::NoCandidate,
    }
}

/// Handle one key press.
///
/// Returns `None` for anything but the four arrow key identifiers; the document is not
/// touched in that case. For an arrow key, the outcome of the search is returned and a
/// found element is focused with [`set_focus`].
pub fn handle_key<D: Document + ?Sized>(
    doc: &mut D,
    key: &str,
) -> Option<SearchOutcome<D::Element>> {
    let direction = Direction::from_key(key)?;
    let outcome = search_from_active(doc, direction);
    if let SearchOutcome::Found(e) = outcome {
        set_focus(doc, e);
    }
    Some(outcome)
}

fn trace_element<D: Document + ?Sized>(doc: &D, element: D::Element, rect: Rect, what: &str) {
    trace!(
        element.kind = ?doc.kind(element),
        element.name = ?doc.name(element),
        element.id = ?doc.id(element),
        top = rect.y0,
        left = rect.x0,
        "{}",
        what
    );
}
