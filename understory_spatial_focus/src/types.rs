// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for spatial focus: directions, category sets, and search outcomes.

use understory_element_tree::ElementKind;

/// Direction of a spatial focus move.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Towards the top of the document.
    Up,
    /// Towards the bottom of the document.
    Down,
    /// Towards the left edge of the document.
    Left,
    /// Towards the right edge of the document.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Map a key identifier to a direction.
    ///
    /// Only the exact identifiers `"ArrowUp"`, `"ArrowDown"`, `"ArrowLeft"` and
    /// `"ArrowRight"` match; comparison is case-sensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }

    /// The key identifier for this direction.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Up => "ArrowUp",
            Self::Down => "ArrowDown",
            Self::Left => "ArrowLeft",
            Self::Right => "ArrowRight",
        }
    }

    /// True for [`Direction::Up`] and [`Direction::Left`], which look backwards in document order.
    pub const fn is_backward(self) -> bool {
        matches!(self, Self::Up | Self::Left)
    }
}

bitflags::bitflags! {
    /// A set of element categories.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KindSet: u8 {
        /// Single-line text inputs.
        const TEXT_INPUT = 0b0000_0001;
        /// Multi-line text areas.
        const TEXT_AREA  = 0b0000_0010;
        /// Hyperlink anchors.
        const ANCHOR     = 0b0000_0100;
        /// Push buttons.
        const BUTTON     = 0b0000_1000;
    }
}

impl KindSet {
    /// Categories that directional search and focus changes accept.
    pub const FOCUS_TARGETS: Self = Self::TEXT_INPUT.union(Self::TEXT_AREA).union(Self::ANCHOR);

    /// Categories the active element fallback accepts. Unlike [`KindSet::FOCUS_TARGETS`] this includes buttons.
    pub const ACTIVE_FALLBACK: Self = Self::FOCUS_TARGETS.union(Self::BUTTON);

    /// The singleton set for `kind`; empty for [`ElementKind::Other`].
    pub const fn of(kind: ElementKind) -> Self {
        match kind {
            ElementKind::TextInput => Self::TEXT_INPUT,
            ElementKind::TextArea => Self::TEXT_AREA,
            ElementKind::Anchor => Self::ANCHOR,
            ElementKind::Button => Self::BUTTON,
            ElementKind::Other => Self::empty(),
        }
    }

    /// Returns true if `kind` is a member of this set.
    pub fn contains_kind(self, kind: ElementKind) -> bool {
        let k = Self::of(kind);
        !k.is_empty() && self.contains(k)
    }
}

/// Result of a directional search started from the active element.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SearchOutcome<E> {
    /// There is no reference element to search from.
    NoReference,
    /// The search ran but nothing qualified.
    NoCandidate,
    /// The selected element.
    Found(E),
}

impl<E> SearchOutcome<E> {
    /// The selected element, if any.
    pub fn found(self) -> Option<E> {
        match self {
            Self::Found(e) => Some(e),
            Self::NoReference | Self::NoCandidate => None,
        }
    }
}
