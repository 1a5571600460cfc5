//! An interval tree using a Red-Black Tree as its underlying data structure.
//!
//! Intervals are ordered by their low endpoint, and every node caches the
//! greatest high endpoint found in its subtree. Overlap queries use that
//! cached max to skip subtrees that cannot reach the query.
//!
//! Nodes live in an arena and are addressed through [`NodeRef`] handles.
//! A handle goes stale once its node is removed, and removing through a stale
//! handle does nothing.
//!
//! ```
//! use augmented_itree::IntervalTree;
//!
//! let mut tree = IntervalTree::new();
//! tree.insert((1, 3), "a");
//! tree.insert((5, 8), "b");
//! let hit = tree.search((2, 4)).unwrap();
//! assert_eq!(*tree.get(hit).unwrap().value(), "a");
//! tree.remove(hit);
//! assert!(tree.search((2, 4)).is_none());
//! ```
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};

use log::{debug, trace};

mod check;
pub mod error;
pub mod interval;
mod iter;
pub mod node;

pub use error::TreeError;
pub use interval::{Bounds, Interval};
pub use iter::Iter;
pub use node::{Color, Node, NodeRef};

use node::{Arena, NodeId};

/// A multiset of intervals keyed by their low endpoint.
///
/// Equal low endpoints keep their insertion order: a new node whose key is
/// already present is placed as if it were greater.
#[derive(Debug, Clone)]
pub struct IntervalTree<K, V = ()> {
    nodes: Arena<K, V>,
    root: Option<NodeId>,
    len: usize,
    bounds: Bounds,
}

impl<K, V> Default for IntervalTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> IntervalTree<K, V> {
    /// Creates an empty tree with closed interval semantics.
    pub fn new() -> Self {
        Self::with_bounds(Bounds::Closed)
    }

    /// Creates an empty tree whose overlap tests use `bounds`.
    pub fn with_bounds(bounds: Bounds) -> Self {
        Self {
            nodes: Arena::with_capacity(0),
            root: None,
            len: 0,
            bounds,
        }
    }

    /// Creates an empty closed-interval tree with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            ..Self::new()
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every node. Handles obtained before the call go stale.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// The node behind `node`, or `None` if it has been removed.
    pub fn get(&self, node: NodeRef) -> Option<&Node<K, V>> {
        self.nodes.resolve(node).map(|id| self.node(id))
    }

    /// Mutable access to the value behind `node`. The interval itself is
    /// read-only since it positions the node.
    pub fn get_mut(&mut self, node: NodeRef) -> Option<&mut V> {
        let id = self.nodes.resolve(node)?;
        Some(&mut self.node_mut(id).value)
    }

    /// The node with the smallest low endpoint.
    pub fn min(&self) -> Option<NodeRef> {
        self.root.map(|r| self.nodes.handle(self.minimum(r)))
    }

    /// Iterates over all intervals in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    /// Applies `f` to every interval-value pair in ascending key order.
    pub fn inorder<F>(&self, mut f: F)
    where
        F: FnMut(&Interval<K>, &V),
    {
        if let Some(root) = self.root {
            self.inorder_from(root, &mut f);
        }
    }

    /// Like [`inorder`](Self::inorder), but `f` may modify the values.
    pub fn inorder_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&Interval<K>, &mut V),
    {
        if let Some(root) = self.root {
            self.inorder_mut_from(root, &mut f);
        }
    }

    fn inorder_from<F>(&self, id: NodeId, f: &mut F)
    where
        F: FnMut(&Interval<K>, &V),
    {
        let node = self.node(id);
        if let Some(l) = node.left {
            self.inorder_from(l, f);
        }
        f(&node.interval, &node.value);
        if let Some(r) = node.right {
            self.inorder_from(r, f);
        }
    }

    fn inorder_mut_from<F>(&mut self, id: NodeId, f: &mut F)
    where
        F: FnMut(&Interval<K>, &mut V),
    {
        if let Some(l) = self.left(id) {
            self.inorder_mut_from(l, f);
        }
        let node = self.node_mut(id);
        f(&node.interval, &mut node.value);
        if let Some(r) = self.right(id) {
            self.inorder_mut_from(r, f);
        }
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        self.nodes.node(id)
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        self.nodes.node_mut(id)
    }

    #[inline]
    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    #[inline]
    fn left(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).left
    }

    #[inline]
    fn right(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).right
    }

    #[inline]
    fn left_of(&self, id: Option<NodeId>) -> Option<NodeId> {
        id.and_then(|n| self.left(n))
    }

    #[inline]
    fn right_of(&self, id: Option<NodeId>) -> Option<NodeId> {
        id.and_then(|n| self.right(n))
    }

    // There are no sentinel leaves, an absent node counts as black.
    #[inline]
    fn is_red(&self, id: Option<NodeId>) -> bool {
        id.is_some_and(|n| self.node(n).color == Color::Red)
    }

    #[inline]
    fn is_black(&self, id: Option<NodeId>) -> bool {
        !self.is_red(id)
    }

    #[inline]
    fn set_color(&mut self, id: Option<NodeId>, color: Color) {
        if let Some(n) = id {
            self.node_mut(n).color = color;
        }
    }

    pub(crate) fn minimum(&self, mut id: NodeId) -> NodeId {
        while let Some(l) = self.left(id) {
            id = l;
        }
        id
    }

    /// In-order successor, following parent links when there is no right
    /// subtree.
    pub(crate) fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(r) = self.right(id) {
            return Some(self.minimum(r));
        }
        let mut n = id;
        while let Some(p) = self.parent(n) {
            if self.left(p) == Some(n) {
                return Some(p);
            }
            n = p;
        }
        None
    }

    /// Replace the subtree rooted at `u` with the one rooted at `v`.
    fn transplant(&mut self, u: NodeId, v: Option<NodeId>) {
        let parent = self.parent(u);
        match parent {
            None => self.root = v,
            Some(p) if self.left(p) == Some(u) => self.node_mut(p).left = v,
            Some(p) => self.node_mut(p).right = v,
        }
        if let Some(v) = v {
            self.node_mut(v).parent = parent;
        }
    }
}

impl<K: Ord + Copy + Debug, V> IntervalTree<K, V> {
    /// Inserts `interval` with its associated `value` and returns a handle to
    /// the new node. Duplicates are kept as separate nodes.
    pub fn insert(&mut self, interval: impl Into<Interval<K>>, value: V) -> NodeRef {
        let interval = interval.into();
        let mut parent = None;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            parent = Some(id);
            let node = self.node_mut(id);
            if interval.high > node.max {
                node.max = interval.high;
            }
            cursor = if interval.low < node.interval.low {
                node.left
            } else {
                node.right
            };
        }

        let z = self.nodes.alloc(Node::new(interval, value));
        self.node_mut(z).parent = parent;
        match parent {
            None => self.root = Some(z),
            Some(p) if interval.low < self.node(p).interval.low => {
                self.node_mut(p).left = Some(z)
            }
            Some(p) => self.node_mut(p).right = Some(z),
        }
        self.len += 1;
        self.insert_fixup(z);

        debug!("inserted {:?}, {} nodes", interval, self.len);
        self.nodes.handle(z)
    }

    /// Finds some node overlapping `query`.
    ///
    /// The descent is pruned by the cached max endpoints, so the result is
    /// any overlapping node, not necessarily the leftmost one.
    pub fn search(&self, query: impl Into<Interval<K>>) -> Option<NodeRef> {
        let query = query.into();
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.node(id);
            if self.bounds.overlaps(&node.interval, &query) {
                return Some(self.nodes.handle(id));
            }
            cursor = match node.left {
                Some(l) if self.bounds.reaches(&self.node(l).max, &query.low) => Some(l),
                _ => node.right,
            };
        }
        None
    }

    /// Calls `visit` on every interval overlapping `query`, in ascending key
    /// order.
    pub fn walk<F>(&self, query: impl Into<Interval<K>>, mut visit: F)
    where
        F: FnMut(&Interval<K>, &V),
    {
        let query = query.into();
        if let Some(root) = self.root {
            self.walk_from(root, &query, &mut |n: &Node<K, V>| {
                visit(&n.interval, &n.value)
            });
        }
    }

    /// Collects every interval overlapping `query`, in ascending key order.
    pub fn find_all<'a>(
        &'a self,
        query: impl Into<Interval<K>>,
    ) -> Vec<(&'a Interval<K>, &'a V)> {
        let query = query.into();
        let mut result = Vec::new();
        if let Some(root) = self.root {
            self.walk_from(root, &query, &mut |n: &'a Node<K, V>| {
                result.push((&n.interval, &n.value))
            });
        }
        result
    }

    fn walk_from<'a, F>(&'a self, id: NodeId, query: &Interval<K>, visit: &mut F)
    where
        F: FnMut(&'a Node<K, V>),
    {
        let node = self.node(id);
        if let Some(l) = node.left {
            if self.bounds.reaches(&self.node(l).max, &query.low) {
                self.walk_from(l, query, visit);
            }
        }
        if self.bounds.overlaps(&node.interval, query) {
            visit(node);
        }
        // right keys are >= this key, nothing there starts early enough
        // once this key lies past the query
        if let Some(r) = node.right {
            if self.bounds.reaches(&query.high, &node.interval.low)
                && self.bounds.reaches(&self.node(r).max, &query.low)
            {
                self.walk_from(r, query, visit);
            }
        }
    }

    /// Finds a node storing exactly `interval`.
    pub fn find_exact(&self, interval: impl Into<Interval<K>>) -> Option<NodeRef> {
        let interval = interval.into();
        let id = self.find_exact_from(self.root?, &interval)?;
        Some(self.nodes.handle(id))
    }

    fn find_exact_from(&self, id: NodeId, interval: &Interval<K>) -> Option<NodeId> {
        let node = self.node(id);
        if node.max < interval.high {
            return None;
        }
        match interval.low.cmp(&node.interval.low) {
            Ordering::Less => self.find_exact_from(node.left?, interval),
            Ordering::Greater => self.find_exact_from(node.right?, interval),
            // rotations can leave equal keys on either side
            Ordering::Equal => {
                if node.interval == *interval {
                    return Some(id);
                }
                node.left
                    .and_then(|l| self.find_exact_from(l, interval))
                    .or_else(|| node.right.and_then(|r| self.find_exact_from(r, interval)))
            }
        }
    }

    /// Removes the node behind `node` and hands back its interval and value.
    ///
    /// `None` and stale handles are accepted and leave the tree untouched, so
    /// the result of [`search`](Self::search) can be passed straight in.
    pub fn remove(&mut self, node: impl Into<Option<NodeRef>>) -> Option<(Interval<K>, V)> {
        let z = self.nodes.resolve(node.into()?)?;
        self.remove_node(z);
        let removed = self.nodes.free(z);
        self.len -= 1;

        debug!("removed {:?}, {} nodes", removed.interval, self.len);
        Some((removed.interval, removed.value))
    }

    /// Removes a node storing exactly `interval` and returns its value.
    pub fn remove_interval(&mut self, interval: impl Into<Interval<K>>) -> Result<V, TreeError> {
        let node = self.find_exact(interval).ok_or(TreeError::KeyNotFound)?;
        self.remove(node)
            .map(|(_, value)| value)
            .ok_or(TreeError::KeyNotFound)
    }

    /// Recompute `max` of a single node from its own interval and children.
    fn update_max(&mut self, id: NodeId) {
        let node = self.node(id);
        let mut max = node.interval.high;
        for child in [node.left, node.right].into_iter().flatten() {
            max = max.max(self.node(child).max);
        }
        self.node_mut(id).max = max;
    }

    /// Recompute `max` from `start` up to the root.
    fn update_max_upwards(&mut self, start: Option<NodeId>) {
        let mut cursor = start;
        while let Some(id) = cursor {
            self.update_max(id);
            cursor = self.parent(id);
        }
    }

    /// perform the following operation:
    ///      |            |
    ///      x            y
    ///     / \          / \
    ///        y    =>  x
    ///       / \      / \
    ///      b            b
    fn rotate_left(&mut self, x: NodeId) {
        let Some(y) = self.right(x) else { return };
        trace!("rotate left at {:?}", self.node(x).interval);
        let b = self.left(y);
        self.node_mut(x).right = b;
        if let Some(b) = b {
            self.node_mut(b).parent = Some(x);
        }
        self.transplant(x, Some(y));
        self.node_mut(y).left = Some(x);
        self.node_mut(x).parent = Some(y);
        // x is now below y
        self.update_max(x);
        self.update_max(y);
    }

    /// perform the following operation:
    ///      |            |
    ///      x            y
    ///     / \          / \
    ///    y       =>       x
    ///   / \              / \
    ///      b            b
    fn rotate_right(&mut self, x: NodeId) {
        let Some(y) = self.left(x) else { return };
        trace!("rotate right at {:?}", self.node(x).interval);
        let b = self.right(y);
        self.node_mut(x).left = b;
        if let Some(b) = b {
            self.node_mut(b).parent = Some(x);
        }
        self.transplant(x, Some(y));
        self.node_mut(y).right = Some(x);
        self.node_mut(x).parent = Some(y);
        self.update_max(x);
        self.update_max(y);
    }

    fn insert_fixup(&mut self, mut z: NodeId) {
        while let Some(p) = self.parent(z).filter(|&p| self.is_red(Some(p))) {
            // a red parent is never the root
            let Some(g) = self.parent(p) else { break };
            if self.left(g) == Some(p) {
                let uncle = self.right(g);
                if self.is_red(uncle) {
                    trace!("insert fixup: red uncle, recolor");
                    self.set_color(Some(p), Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(Some(g), Color::Red);
                    z = g;
                } else {
                    if self.right(p) == Some(z) {
                        trace!("insert fixup: inner child");
                        z = p;
                        self.rotate_left(z);
                    }
                    let Some(p) = self.parent(z) else { break };
                    self.set_color(Some(p), Color::Black);
                    if let Some(g) = self.parent(p) {
                        self.set_color(Some(g), Color::Red);
                        self.rotate_right(g);
                    }
                }
            } else {
                let uncle = self.left(g);
                if self.is_red(uncle) {
                    trace!("insert fixup: red uncle, recolor");
                    self.set_color(Some(p), Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(Some(g), Color::Red);
                    z = g;
                } else {
                    if self.left(p) == Some(z) {
                        trace!("insert fixup: inner child");
                        z = p;
                        self.rotate_right(z);
                    }
                    let Some(p) = self.parent(z) else { break };
                    self.set_color(Some(p), Color::Black);
                    if let Some(g) = self.parent(p) {
                        self.set_color(Some(g), Color::Red);
                        self.rotate_left(g);
                    }
                }
            }
        }
        self.set_color(self.root, Color::Black);
    }

    /// Unlink `z` from the tree and rebalance. The slot itself is freed by
    /// the caller.
    fn remove_node(&mut self, z: NodeId) {
        let mut removed_color = self.node(z).color;
        // x takes the place of the node physically spliced out; it may be
        // absent, so its parent is tracked alongside
        let x;
        let x_parent;
        match (self.left(z), self.right(z)) {
            (None, right) => {
                x = right;
                x_parent = self.parent(z);
                self.transplant(z, right);
            }
            (left, None) => {
                x = left;
                x_parent = self.parent(z);
                self.transplant(z, left);
            }
            (Some(left), Some(right)) => {
                let y = self.minimum(right);
                removed_color = self.node(y).color;
                x = self.right(y);
                if y == right {
                    x_parent = Some(y);
                } else {
                    x_parent = self.parent(y);
                    self.transplant(y, x);
                    self.node_mut(y).right = Some(right);
                    self.node_mut(right).parent = Some(y);
                }
                self.transplant(z, Some(y));
                self.node_mut(y).left = Some(left);
                self.node_mut(left).parent = Some(y);
                let z_color = self.node(z).color;
                self.node_mut(y).color = z_color;
            }
        }

        // x_parent is the lowest node whose subtree changed, and the
        // relocated successor lies on its path to the root
        self.update_max_upwards(x_parent);

        if removed_color == Color::Black {
            self.remove_fixup(x, x_parent);
        }
    }

    fn remove_fixup(&mut self, mut x: Option<NodeId>, mut parent: Option<NodeId>) {
        while x != self.root && self.is_black(x) {
            let Some(p) = parent else { break };
            if x == self.left(p) {
                let mut w = self.right(p);
                if self.is_red(w) {
                    trace!("remove fixup: red sibling");
                    self.set_color(w, Color::Black);
                    self.set_color(Some(p), Color::Red);
                    self.rotate_left(p);
                    w = self.right(p);
                }
                if self.is_black(self.left_of(w)) && self.is_black(self.right_of(w)) {
                    trace!("remove fixup: black nephews, climb");
                    self.set_color(w, Color::Red);
                    x = Some(p);
                    parent = self.parent(p);
                } else {
                    if self.is_black(self.right_of(w)) {
                        trace!("remove fixup: near nephew red");
                        self.set_color(self.left_of(w), Color::Black);
                        self.set_color(w, Color::Red);
                        if let Some(w) = w {
                            self.rotate_right(w);
                        }
                        w = self.right(p);
                    }
                    trace!("remove fixup: far nephew red");
                    let p_color = self.node(p).color;
                    self.set_color(w, p_color);
                    self.set_color(Some(p), Color::Black);
                    self.set_color(self.right_of(w), Color::Black);
                    self.rotate_left(p);
                    x = self.root;
                    parent = None;
                }
            } else {
                let mut w = self.left(p);
                if self.is_red(w) {
                    trace!("remove fixup: red sibling");
                    self.set_color(w, Color::Black);
                    self.set_color(Some(p), Color::Red);
                    self.rotate_right(p);
                    w = self.left(p);
                }
                if self.is_black(self.right_of(w)) && self.is_black(self.left_of(w)) {
                    trace!("remove fixup: black nephews, climb");
                    self.set_color(w, Color::Red);
                    x = Some(p);
                    parent = self.parent(p);
                } else {
                    if self.is_black(self.left_of(w)) {
                        trace!("remove fixup: near nephew red");
                        self.set_color(self.right_of(w), Color::Black);
                        self.set_color(w, Color::Red);
                        if let Some(w) = w {
                            self.rotate_left(w);
                        }
                        w = self.left(p);
                    }
                    trace!("remove fixup: far nephew red");
                    let p_color = self.node(p).color;
                    self.set_color(w, p_color);
                    self.set_color(Some(p), Color::Black);
                    self.set_color(self.left_of(w), Color::Black);
                    self.rotate_right(p);
                    x = self.root;
                    parent = None;
                }
            }
        }
        self.set_color(x, Color::Black);
    }
}

impl<K: Display, V> IntervalTree<K, V> {
    /// One `"low high"` line per interval in ascending key order, for
    /// debugging. The format is not guaranteed to be stable.
    pub fn print(&self) -> String {
        self.to_string()
    }
}

impl<K: Display, V> Display for IntervalTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (interval, _) in self {
            writeln!(f, "{interval}")?;
        }
        Ok(())
    }
}
