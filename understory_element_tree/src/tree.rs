// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, updates, geometry, and focus.

use alloc::vec::Vec;
use kurbo::{Affine, Point, Rect};

use crate::types::{ElementKind, ElementNode, FocusOptions, NodeId};

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// A document-like tree of elements.
///
/// Elements without a parent are top-level elements; they form one sibling
/// list in insertion order. One element may be designated as the body, which
/// is where directional searches start.
pub struct Tree {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    top_level: Vec<NodeId>,
    body: Option<NodeId>,
    focused: Option<NodeId>,
    focus_options: Option<FocusOptions>,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .field("body", &self.body)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    // Position within the parent's children (or the top level).
    index: usize,
    children: Vec<NodeId>,
    local: ElementNode,
}

impl Node {
    fn new(generation: u32, local: ElementNode) -> Self {
        Self {
            generation,
            parent: None,
            index: 0,
            children: Vec::new(),
            local,
        }
    }
}

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            top_level: Vec::new(),
            body: None,
            focused: None,
            focus_options: None,
        }
    }

    /// Insert a new element as the last child of `parent` (or as a top-level element if `None`).
    ///
    /// Panics if `parent` is stale.
    pub fn insert(&mut self, parent: Option<NodeId>, local: ElementNode) -> NodeId {
        assert!(
            parent.is_none_or(|p| self.is_alive(p)),
            "insert under a stale parent NodeId"
        );
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, local));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, local)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        self.link(id, parent);
        id
    }

    /// Remove an element (and its subtree) from the tree.
    ///
    /// Focus and the body designation are cleared if they pointed into the removed subtree.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        self.unlink(id);
        self.free_subtree(id);
    }

    /// Designate the body element, where directional searches start.
    pub fn set_body(&mut self, body: Option<NodeId>) {
        self.body = body.filter(|b| self.is_alive(*b));
    }

    /// The body element, if one is designated.
    pub fn body(&self) -> Option<NodeId> {
        self.body
    }

    /// Update local bounds.
    pub fn set_local_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.local_bounds = bounds;
        }
    }

    /// Update local transform.
    pub fn set_local_transform(&mut self, id: NodeId, tf: Affine) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.local_transform = tf;
        }
    }

    /// Returns true if `id` refers to a live element.
    ///
    /// A `NodeId` is considered live if its slot exists and its generation matches
    /// the current generation stored in that slot.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some()
    }

    /// The category of an element; stale ids report [`ElementKind::Other`].
    pub fn kind(&self, id: NodeId) -> ElementKind {
        self.node_opt(id)
            .map(|n| n.local.kind)
            .unwrap_or(ElementKind::Other)
    }

    /// The identifier attribute of an element.
    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        self.node_opt(id)?.local.id.as_deref()
    }

    /// The `name` attribute of an element.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node_opt(id)?.local.name.as_deref()
    }

    /// The parent of an element; `None` for top-level elements.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id)?.parent
    }

    /// The children of an element in order. Empty for stale ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Top-level elements in order.
    pub fn top_level(&self) -> &[NodeId] {
        &self.top_level
    }

    /// The first child of an element.
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    /// The sibling immediately before `id` within the same parent (or top level).
    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node_opt(id)?;
        let pos = node.index.checked_sub(1)?;
        self.sibling_list(node.parent).get(pos).copied()
    }

    /// The sibling immediately after `id` within the same parent (or top level).
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node_opt(id)?;
        self.sibling_list(node.parent).get(node.index + 1).copied()
    }

    /// Compute the world-space bounding box of an element.
    ///
    /// The box is derived on every call by composing the local transforms of
    /// the element and all of its ancestors; nothing is cached.
    /// Non-axis transforms yield a conservative axis-aligned box.
    pub fn world_bounds(&self, id: NodeId) -> Option<Rect> {
        let node = self.node_opt(id)?;
        let mut tf = Affine::IDENTITY;
        let mut cur = Some(id);
        while let Some(c) = cur {
            let n = self.node(c);
            tf = n.local.local_transform * tf;
            cur = n.parent;
        }
        Some(transform_rect_bbox(tf, node.local.local_bounds))
    }

    /// Find the first element in document order whose identifier attribute equals `needle`.
    pub fn find_by_id(&self, needle: &str) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.top_level.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if self.element_id(id) == Some(needle) {
                return Some(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        None
    }

    /// Move focus to `id`. Returns false (and leaves focus unchanged) if `id` is stale.
    pub fn focus(&mut self, id: NodeId, options: FocusOptions) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.focused = Some(id);
        self.focus_options = Some(options);
        true
    }

    /// Clear focus.
    pub fn blur(&mut self) {
        self.focused = None;
        self.focus_options = None;
    }

    /// The focused element, if any.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Options passed with the most recent successful focus request.
    pub fn focus_options(&self) -> Option<FocusOptions> {
        self.focus_options
    }

    // --- internals ---

    /// Access a live node; panics if `id` is stale.
    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn sibling_list(&self, parent: Option<NodeId>) -> &[NodeId] {
        match parent {
            Some(p) => self.node(p).children.as_slice(),
            None => self.top_level.as_slice(),
        }
    }

    fn sibling_list_mut(&mut self, parent: Option<NodeId>) -> &mut Vec<NodeId> {
        match parent {
            Some(p) => &mut self.node_mut(p).children,
            None => &mut self.top_level,
        }
    }

    /// Append `id` to the children of `parent` (or to the top level).
    fn link(&mut self, id: NodeId, parent: Option<NodeId>) {
        let siblings = self.sibling_list_mut(parent);
        let index = siblings.len();
        siblings.push(id);
        let node = self.node_mut(id);
        node.parent = parent;
        node.index = index;
    }

    /// Detach `id` from its sibling list, shifting the positions of the siblings after it.
    fn unlink(&mut self, id: NodeId) {
        let (parent, index) = {
            let n = self.node(id);
            (n.parent, n.index)
        };
        let siblings = self.sibling_list_mut(parent);
        siblings.remove(index);
        let shifted: Vec<NodeId> = siblings[index..].to_vec();
        for (offset, s) in shifted.into_iter().enumerate() {
            self.node_mut(s).index = index + offset;
        }
        let node = self.node_mut(id);
        node.parent = None;
        node.index = 0;
    }

    fn free_subtree(&mut self, id: NodeId) {
        let children = core::mem::take(&mut self.node_mut(id).children);
        for child in children {
            self.free_subtree(child);
        }
        if self.focused == Some(id) {
            self.blur();
        }
        if self.body == Some(id) {
            self.body = None;
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }
}

fn transform_rect_bbox(affine: Affine, rect: Rect) -> Rect {
    let p0 = affine * Point::new(rect.x0, rect.y0);
    let p1 = affine * Point::new(rect.x1, rect.y0);
    let p2 = affine * Point::new(rect.x0, rect.y1);
    let p3 = affine * Point::new(rect.x1, rect.y1);
    let min_x = p0.x.min(p1.x).min(p2.x).min(p3.x);
    let min_y = p0.y.min(p1.y).min(p2.y).min(p3.y);
    let max_x = p0.x.max(p1.x).max(p2.x).max(p3.x);
    let max_y = p0.y.max(p1.y).max(p2.y).max(p3.y);
    Rect::new(min_x, min_y, max_x, max_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_4;
    use kurbo::Vec2;

    fn input(x: f64, y: f64) -> ElementNode {
        ElementNode::new(ElementKind::TextInput, Rect::new(x, y, x + 100.0, y + 20.0))
    }

    #[test]
    fn siblings_within_parent() {
        let mut tree = Tree::new();
        let form = tree.insert(None, ElementNode::default());
        let a = tree.insert(Some(form), input(0.0, 0.0));
        let b = tree.insert(Some(form), input(0.0, 30.0));
        let c = tree.insert(Some(form), input(0.0, 60.0));

        assert_eq!(tree.first_child(form), Some(a));
        assert_eq!(tree.previous_sibling(a), None);
        assert_eq!(tree.next_sibling(a), Some(b));
        assert_eq!(tree.previous_sibling(c), Some(b));
        assert_eq!(tree.next_sibling(c), None);
        assert_eq!(tree.parent(b), Some(form));
    }

    #[test]
    fn top_level_elements_are_siblings() {
        let mut tree = Tree::new();
        let a = tree.insert(None, ElementNode::default());
        let b = tree.insert(None, ElementNode::default());
        assert_eq!(tree.top_level(), &[a, b]);
        assert_eq!(tree.next_sibling(a), Some(b));
        assert_eq!(tree.previous_sibling(b), Some(a));
        assert_eq!(tree.parent(a), None);
    }

    #[test]
    fn world_bounds_compose_ancestor_transforms() {
        let mut tree = Tree::new();
        let scroller = tree.insert(
            None,
            ElementNode::default().with_transform(Affine::translate(Vec2::new(0.0, -50.0))),
        );
        let inner = tree.insert(
            Some(scroller),
            ElementNode::default().with_transform(Affine::translate(Vec2::new(10.0, 0.0))),
        );
        let field = tree.insert(Some(inner), input(0.0, 100.0));

        assert_eq!(
            tree.world_bounds(field),
            Some(Rect::new(10.0, 50.0, 110.0, 70.0))
        );

        // Geometry is recomputed on every read.
        tree.set_local_transform(scroller, Affine::IDENTITY);
        assert_eq!(
            tree.world_bounds(field),
            Some(Rect::new(10.0, 100.0, 110.0, 120.0))
        );
    }

    #[test]
    fn rotated_bounds_are_conservative() {
        let mut tree = Tree::new();
        let n = tree.insert(
            None,
            ElementNode::new(ElementKind::Other, Rect::new(0.0, 0.0, 10.0, 10.0))
                .with_transform(Affine::rotate(FRAC_PI_4)),
        );
        let nb = tree.world_bounds(n).unwrap();
        let expected =
            transform_rect_bbox(Affine::rotate(FRAC_PI_4), Rect::new(0.0, 0.0, 10.0, 10.0));
        let eps = 1e-9;
        assert!((nb.x0 - expected.x0).abs() < eps);
        assert!((nb.y1 - expected.y1).abs() < eps);
        assert!(nb.width() > 10.0, "rotated box must grow");
    }

    #[test]
    fn liveness_insert_remove_reuse() {
        let mut tree = Tree::new();
        let root = tree.insert(None, ElementNode::default());
        let a = tree.insert(Some(root), input(0.0, 0.0));

        assert!(tree.is_alive(root));
        assert!(tree.is_alive(a));

        tree.remove(a);
        assert!(!tree.is_alive(a));
        assert!(tree.children(root).is_empty());

        let b = tree.insert(Some(root), input(0.0, 0.0));
        assert!(tree.is_alive(b));
        assert!(!tree.is_alive(a));
        if a.0 == b.0 {
            assert!(b.1 > a.1, "generation must increase on reuse");
        }
        assert_eq!(tree.world_bounds(a), None);
        assert_eq!(tree.kind(a), ElementKind::Other);
    }

    #[test]
    fn removing_focused_subtree_clears_focus_and_body() {
        let mut tree = Tree::new();
        let body = tree.insert(None, ElementNode::default());
        let field = tree.insert(Some(body), input(0.0, 0.0));
        tree.set_body(Some(body));
        assert!(tree.focus(field, FocusOptions::default()));
        assert_eq!(tree.focused(), Some(field));

        tree.remove(body);
        assert_eq!(tree.focused(), None);
        assert_eq!(tree.body(), None);
        assert!(tree.top_level().is_empty());
    }

    #[test]
    fn focus_on_stale_id_is_rejected() {
        let mut tree = Tree::new();
        let a = tree.insert(None, input(0.0, 0.0));
        let b = tree.insert(None, input(0.0, 30.0));
        assert!(tree.focus(a, FocusOptions { prevent_scroll: true }));
        tree.remove(b);
        assert!(!tree.focus(b, FocusOptions::default()));
        assert_eq!(tree.focused(), Some(a));
        assert_eq!(
            tree.focus_options(),
            Some(FocusOptions {
                prevent_scroll: true
            })
        );
    }

    #[test]
    fn sibling_links_survive_removal() {
        let mut tree = Tree::new();
        let form = tree.insert(None, ElementNode::default());
        let ids: Vec<NodeId> = (0..5)
            .map(|i| tree.insert(Some(form), input(0.0, 30.0 * i as f64)))
            .collect();

        tree.remove(ids[1]);
        assert_eq!(tree.next_sibling(ids[0]), Some(ids[2]));
        assert_eq!(tree.previous_sibling(ids[2]), Some(ids[0]));
        assert_eq!(tree.next_sibling(ids[3]), Some(ids[4]));

        tree.remove(ids[0]);
        assert_eq!(tree.previous_sibling(ids[2]), None);
        assert_eq!(tree.first_child(form), Some(ids[2]));

        // A reused slot is appended at the end with a fresh position.
        let tail = tree.insert(Some(form), input(0.0, 200.0));
        assert_eq!(tree.next_sibling(ids[4]), Some(tail));
        assert_eq!(tree.previous_sibling(tail), Some(ids[4]));
        assert_eq!(tree.next_sibling(tail), None);
    }

    #[test]
    fn top_level_links_survive_removal() {
        let mut tree = Tree::new();
        let a = tree.insert(None, ElementNode::default());
        let b = tree.insert(None, ElementNode::default());
        let c = tree.insert(None, ElementNode::default());
        tree.remove(a);
        assert_eq!(tree.previous_sibling(b), None);
        assert_eq!(tree.next_sibling(b), Some(c));
        assert_eq!(tree.previous_sibling(c), Some(b));
    }

    #[test]
    fn wide_parent_walks_every_child_in_order() {
        let mut tree = Tree::new();
        let body = tree.insert(None, ElementNode::default());
        let ids: Vec<NodeId> = (0..20_000)
            .map(|_| tree.insert(Some(body), ElementNode::default()))
            .collect();

        let mut walked = Vec::with_capacity(ids.len());
        let mut cur = tree.first_child(body);
        while let Some(c) = cur {
            walked.push(c);
            cur = tree.next_sibling(c);
        }
        assert_eq!(walked, ids);
        assert_eq!(tree.previous_sibling(ids[19_999]), Some(ids[19_998]));
    }

    #[test]
    fn set_local_bounds_moves_the_world_box() {
        let mut tree = Tree::new();
        let n = tree.insert(None, input(0.0, 0.0));
        tree.set_local_bounds(n, Rect::new(5.0, 5.0, 15.0, 25.0));
        assert_eq!(tree.world_bounds(n), Some(Rect::new(5.0, 5.0, 15.0, 25.0)));
    }

    #[test]
    fn find_by_id_uses_document_order() {
        let mut tree = Tree::new();
        let form = tree.insert(None, ElementNode::default());
        let nested = tree.insert(Some(form), ElementNode::default());
        let first = tree.insert(Some(nested), input(0.0, 0.0).with_id("user"));
        let _second = tree.insert(Some(form), input(0.0, 30.0).with_id("user"));
        let _later = tree.insert(None, input(0.0, 60.0).with_id("pass"));

        assert_eq!(tree.find_by_id("user"), Some(first));
        assert!(tree.find_by_id("pass").is_some());
        assert_eq!(tree.find_by_id("missing"), None);
    }
}
