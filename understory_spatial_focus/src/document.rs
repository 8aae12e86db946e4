// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host document seam.
//!
//! ## Overview
//!
//! Everything in this crate reads the host through [`Document`].
//! The element tree from `understory_element_tree` implements it (see
//! [`adapters::element_tree`](crate::adapters::element_tree)); other hosts, such as a
//! binding to a browser DOM, can implement it as well.
//!
//! The only write is [`Document::focus`], called at most once per key press.

use kurbo::Rect;
use understory_element_tree::{ElementKind, FocusOptions};

/// Read access to a host element tree, plus the ability to move focus.
pub trait Document {
    /// Opaque element handle.
    type Element: Copy + Eq + core::fmt::Debug;

    /// The element directional searches start from, if any.
    fn body(&self) -> Option<Self::Element>;

    /// The first top-level element of the document.
    fn first_top_level(&self) -> Option<Self::Element>;

    /// The element that currently has focus, if any.
    fn active_element(&self) -> Option<Self::Element>;

    /// The parent of `element`; `None` for top-level elements.
    fn parent(&self, element: Self::Element) -> Option<Self::Element>;

    /// The first child of `element`.
    fn first_child(&self, element: Self::Element) -> Option<Self::Element>;

    /// The sibling immediately before `element`.
    fn previous_sibling(&self, element: Self::Element) -> Option<Self::Element>;

    /// The sibling immediately after `element`.
    fn next_sibling(&self, element: Self::Element) -> Option<Self::Element>;

    /// The category of `element`.
    fn kind(&self, element: Self::Element) -> ElementKind;

    /// The identifier attribute of `element`.
    fn id(&self, element: Self::Element) -> Option<&str>;

    /// The `name` attribute of `element`.
    fn name(&self, element: Self::Element) -> Option<&str>;

    /// The on-screen rectangle of `element`, read at call time.
    fn bounding_rect(&self, element: Self::Element) -> Rect;

    /// Move focus to `element`.
    fn focus(&mut self, element: Self::Element, options: FocusOptions);
}
