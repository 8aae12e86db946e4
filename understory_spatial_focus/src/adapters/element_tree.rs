// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Document`] implementation for the Understory Element Tree.
//!
//! ## Notes
//!
//! - The active element is the tree's focused element.
//! - Rectangles come from [`Tree::world_bounds`], which composes transforms on every call.
//!   Stale ids report [`Rect::ZERO`].
//! - Focus requests on stale ids are dropped by the tree.

use kurbo::Rect;
use tracing::debug;
use understory_element_tree::{ElementKind, FocusOptions, NodeId, Tree};

use crate::document::Document;

impl Document for Tree {
    type Element = NodeId;

    fn body(&self) -> Option<NodeId> {
        Tree::body(self)
    }

    fn first_top_level(&self) -> Option<NodeId> {
        self.top_level().first().copied()
    }

    fn active_element(&self) -> Option<NodeId> {
        self.focused()
    }

    fn parent(&self, element: NodeId) -> Option<NodeId> {
        Tree::parent(self, element)
    }

    fn first_child(&self, element: NodeId) -> Option<NodeId> {
        Tree::first_child(self, element)
    }

    fn previous_sibling(&self, element: NodeId) -> Option<NodeId> {
        Tree::previous_sibling(self, element)
    }

    fn next_sibling(&self, element: NodeId) -> Option<NodeId> {
        Tree::next_sibling(self, element)
    }

    fn kind(&self, element: NodeId) -> ElementKind {
        Tree::kind(self, element)
    }

    fn id(&self, element: NodeId) -> Option<&str> {
        self.element_id(element)
    }

    fn name(&self, element: NodeId) -> Option<&str> {
        Tree::name(self, element)
    }

    fn bounding_rect(&self, element: NodeId) -> Rect {
        self.world_bounds(element).unwrap_or(Rect::ZERO)
    }

    fn focus(&mut self, element: NodeId, options: FocusOptions) {
        if !Tree::focus(self, element, options) {
            debug!(element = ?element, "focus request on a removed element dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_element_tree::ElementNode;

    #[test]
    fn document_view_matches_tree() {
        let mut tree = Tree::new();
        let html = tree.insert(None, ElementNode::default());
        let body = tree.insert(Some(html), ElementNode::default());
        let field = tree.insert(
            Some(body),
            ElementNode::new(ElementKind::TextInput, Rect::new(5.0, 6.0, 50.0, 26.0))
                .with_id("q")
                .with_name("query"),
        );
        tree.set_body(Some(body));

        let doc: &dyn Document<Element = NodeId> = &tree;
        assert_eq!(doc.body(), Some(body));
        assert_eq!(doc.first_top_level(), Some(html));
        assert_eq!(doc.first_child(body), Some(field));
        assert_eq!(doc.parent(field), Some(body));
        assert_eq!(doc.kind(field), ElementKind::TextInput);
        assert_eq!(doc.id(field), Some("q"));
        assert_eq!(doc.name(field), Some("query"));
        assert_eq!(doc.bounding_rect(field), Rect::new(5.0, 6.0, 50.0, 26.0));
        assert_eq!(doc.active_element(), None);
    }

    #[test]
    fn focus_goes_through_the_tree() {
        let mut tree = Tree::new();
        let a = tree.insert(None, ElementNode::new(ElementKind::Anchor, Rect::ZERO));
        Document::focus(&mut tree, a, FocusOptions::default());
        assert_eq!(Document::active_element(&tree), Some(a));

        tree.remove(a);
        assert_eq!(Document::bounding_rect(&tree, a), Rect::ZERO);

        let b = tree.insert(None, ElementNode::new(ElementKind::TextInput, Rect::ZERO));
        Document::focus(&mut tree, b, FocusOptions::default());
        Document::focus(&mut tree, a, FocusOptions::default());
        assert_eq!(Document::active_element(&tree), Some(b));
    }
}
