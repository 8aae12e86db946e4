// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving the reference element and applying focus.

use kurbo::Rect;
use tracing::debug;
use understory_element_tree::FocusOptions;

use crate::document::Document;
use crate::types::KindSet;

/// The element a directional move starts from.
///
/// This is the focused element when there is one. Otherwise the top-level elements
/// (only those, not their descendants) are scanned in order and the first anchor,
/// button, text input or text area is returned.
///
/// The fallback accepts buttons even though [`set_focus`] will never focus one.
pub fn active_element<D: Document + ?Sized>(doc: &D) -> Option<D::Element> {
    if let Some(active) = doc.active_element() {
        debug!(element = ?active, "active element");
        return Some(active);
    }
    let mut cur = doc.first_top_level();
    while let Some(e) = cur {
        if KindSet::ACTIVE_FALLBACK.contains_kind(doc.kind(e)) {
            debug!(element = ?e, "active element (first top-level control)");
            return Some(e);
        }
        cur = doc.next_sibling(e);
    }
    debug!("no reference element");
    None
}

/// Move focus to `element` and return its rectangle after the move.
///
/// Only text inputs, text areas and anchors are focused; for anything else this does
/// nothing and returns `None`. Focus is requested with scrolling allowed.
pub fn set_focus<D: Document + ?Sized>(doc: &mut D, element: D::Element) -> Option<Rect> {
    let kind = doc.kind(element);
    if !KindSet::FOCUS_TARGETS.contains_kind(kind) {
        return None;
    }
    doc.focus(
        element,
        FocusOptions {
            prevent_scroll: false,
        },
    );
    let rect = doc.bounding_rect(element);
    debug!(
        element.kind = ?kind,
        element.name = ?doc.name(element),
        element.id = ?doc.id(element),
        top = rect.y0,
        left = rect.x0,
        "focus changed"
    );
    Some(rect)
}
