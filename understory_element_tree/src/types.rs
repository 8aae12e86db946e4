// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the element tree: node identifiers, element categories, and local data.

use alloc::string::String;
use kurbo::{Affine, Rect};

/// Identifier for an element in the tree.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// Use [`Tree::is_alive`](crate::Tree::is_alive) to check whether a `NodeId` still refers to a live element.
/// Stale `NodeId`s never alias a different live element because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Category of an element.
///
/// Only the categories relevant to keyboard focus are distinguished; everything
/// else (containers, labels, images, ...) is [`ElementKind::Other`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ElementKind {
    /// Single-line text input (`INPUT`).
    TextInput,
    /// Multi-line text area (`TEXTAREA`).
    TextArea,
    /// Hyperlink anchor (`A`).
    Anchor,
    /// Push button (`BUTTON`).
    Button,
    /// Any other element.
    #[default]
    Other,
}

impl ElementKind {
    /// Map a tag name to a category. Matching ignores ASCII case.
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("input") {
            Self::TextInput
        } else if tag.eq_ignore_ascii_case("textarea") {
            Self::TextArea
        } else if tag.eq_ignore_ascii_case("a") {
            Self::Anchor
        } else if tag.eq_ignore_ascii_case("button") {
            Self::Button
        } else {
            Self::Other
        }
    }

    /// Upper-case tag name for this category, or `None` for [`ElementKind::Other`].
    pub const fn tag(self) -> Option<&'static str> {
        match self {
            Self::TextInput => Some("INPUT"),
            Self::TextArea => Some("TEXTAREA"),
            Self::Anchor => Some("A"),
            Self::Button => Some("BUTTON"),
            Self::Other => None,
        }
    }
}

/// Options for a focus request.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FocusOptions {
    /// If true, the host must not scroll the focused element into view.
    pub prevent_scroll: bool,
}

/// Local data for an element.
#[derive(Clone, Debug, Default)]
pub struct ElementNode {
    /// Element category.
    pub kind: ElementKind,
    /// Optional identifier attribute.
    pub id: Option<String>,
    /// Optional `name` attribute.
    pub name: Option<String>,
    /// Local (untransformed) bounds as produced by layout.
    pub local_bounds: Rect,
    /// Local transform relative to the parent (for example a scroll offset).
    pub local_transform: Affine,
}

impl ElementNode {
    /// An element of `kind` occupying `bounds`, with no attributes.
    pub fn new(kind: ElementKind, bounds: Rect) -> Self {
        Self {
            kind,
            local_bounds: bounds,
            ..Default::default()
        }
    }

    /// Set the identifier attribute.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the `name` attribute.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the local transform.
    pub fn with_transform(mut self, tf: Affine) -> Self {
        self.local_transform = tf;
        self
    }
}
