// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key event dispatcher: an ordered chain of key handlers.
//!
//! ## Overview
//!
//! A [`KeyDispatcher`] owns a list of handler registrations and invokes every one of them,
//! in registration order, for each key event. A handler reports whether it acted on the
//! event, but it cannot stop the handlers after it: existing behavior always survives
//! adding arrow navigation.
//!
//! [`install`] appends [`ArrowNavigation`] after whatever is already registered, so
//! handlers that were there first keep running first.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use understory_element_tree::{ElementKind, ElementNode, FocusOptions, Tree};
//! use understory_spatial_focus::dispatch::{KeyDispatcher, KeyEvent, Outcome, install};
//!
//! let mut tree = Tree::new();
//! let body = tree.insert(None, ElementNode::default());
//! tree.set_body(Some(body));
//! let row = |y: f64| ElementNode::new(ElementKind::TextInput, Rect::new(0.0, y, 100.0, y + 8.0));
//! let a = tree.insert(Some(body), row(10.0));
//! let b = tree.insert(Some(body), row(20.0));
//! tree.focus(a, FocusOptions::default());
//!
//! let mut keys: KeyDispatcher<Tree> = KeyDispatcher::new();
//! // A handler that was there before arrow navigation.
//! keys.register(|_: &mut Tree, _: &KeyEvent<'_>| Outcome::Ignored);
//! install(&mut keys);
//!
//! let report = keys.dispatch(&mut tree, &KeyEvent::new("ArrowDown"));
//! assert_eq!(report.invoked, 2);
//! assert!(report.handled);
//! assert_eq!(tree.focused(), Some(b));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::document::Document;
use crate::select::handle_key;
use crate::types::SearchOutcome;

/// A key press notification.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct KeyEvent<'a> {
    /// Key identifier, for example `"ArrowUp"` or `"Enter"`.
    pub key: &'a str,
}

impl<'a> KeyEvent<'a> {
    /// Create an event for `key`.
    pub const fn new(key: &'a str) -> Self {
        Self { key }
    }
}

/// What a handler did with an event.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The handler did not act on the event.
    Ignored,
    /// The handler acted on the event.
    Handled,
}

/// A key handler in the dispatcher chain.
///
/// Closures of the form `FnMut(&mut D, &KeyEvent<'_>) -> Outcome` implement this trait.
pub trait KeyHandler<D: ?Sized> {
    /// Handle one key event.
    fn on_key(&mut self, doc: &mut D, event: &KeyEvent<'_>) -> Outcome;
}

impl<D: ?Sized, F> KeyHandler<D> for F
where
    F: FnMut(&mut D, &KeyEvent<'_>) -> Outcome,
{
    fn on_key(&mut self, doc: &mut D, event: &KeyEvent<'_>) -> Outcome {
        self(doc, event)
    }
}

/// Handle for a registration, used to remove it again.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct HandlerId(u32);

/// Summary of one [`KeyDispatcher::dispatch`] call.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct DispatchReport {
    /// Number of handlers invoked.
    pub invoked: usize,
    /// True if at least one handler returned [`Outcome::Handled`].
    pub handled: bool,
}

/// Ordered chain of key handlers.
pub struct KeyDispatcher<D: ?Sized> {
    handlers: Vec<(HandlerId, Box<dyn KeyHandler<D>>)>,
    next_id: u32,
}

impl<D: ?Sized> core::fmt::Debug for KeyDispatcher<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let ids: Vec<HandlerId> = self.handlers.iter().map(|(id, _)| *id).collect();
        f.debug_struct("KeyDispatcher")
            .field("handlers", &ids)
            .finish_non_exhaustive()
    }
}

impl<D: ?Sized> Default for KeyDispatcher<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ?Sized> KeyDispatcher<D> {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Append `handler` to the end of the chain.
    pub fn register(&mut self, handler: impl KeyHandler<D> + 'static) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a registration. Returns false if `id` is not registered.
    pub fn unregister(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(h, _)| *h != id);
        self.handlers.len() != before
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Deliver `event` to every handler in registration order.
    pub fn dispatch(&mut self, doc: &mut D, event: &KeyEvent<'_>) -> DispatchReport {
        let mut report = DispatchReport::default();
        for (_, handler) in &mut self.handlers {
            report.invoked += 1;
            if handler.on_key(doc, event) == Outcome::Handled {
                report.handled = true;
            }
        }
        report
    }
}

/// Arrow-key spatial navigation as a chain handler.
///
/// Reports [`Outcome::Handled`] only when focus moved.
#[derive(Copy, Clone, Debug, Default)]
pub struct ArrowNavigation;

impl<D: Document + ?Sized> KeyHandler<D> for ArrowNavigation {
    fn on_key(&mut self, doc: &mut D, event: &KeyEvent<'_>) -> Outcome {
        match handle_key(doc, event.key) {
            Some(SearchOutcome::Found(_)) => Outcome::Handled,
            Some(SearchOutcome::NoCandidate | SearchOutcome::NoReference) | None => {
                Outcome::Ignored
            }
        }
    }
}

/// Register [`ArrowNavigation`] after every handler already in `dispatcher`.
pub fn install<D: Document + ?Sized + 'static>(dispatcher: &mut KeyDispatcher<D>) -> HandlerId {
    dispatcher.register(ArrowNavigation)
}
