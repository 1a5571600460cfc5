use crate::interval::Interval;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Index of a slot in the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a node stored in an [`IntervalTree`](crate::IntervalTree).
///
/// A handle stays valid until its node is removed. After that it never
/// resolves again, even once the slot has been reused by a later insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    id: NodeId,
    generation: u32,
}

/// One interval-value pair plus its red-black links.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    pub(crate) interval: Interval<K>,
    pub(crate) value: V,
    /// greatest `high` over this node and its whole subtree
    pub(crate) max: K,
    pub(crate) color: Color,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K: Copy, V> Node<K, V> {
    /// A fresh, unlinked red node.
    pub(crate) fn new(interval: Interval<K>, value: V) -> Self {
        Self {
            max: interval.high,
            interval,
            value,
            color: Color::Red,
            parent: None,
            left: None,
            right: None,
        }
    }
}

impl<K, V> Node<K, V> {
    pub fn interval(&self) -> &Interval<K> {
        &self.interval
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// The greatest high endpoint in the subtree rooted here.
    pub fn max(&self) -> &K {
        &self.max
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

#[derive(Debug, Clone)]
enum Slot<K, V> {
    Occupied { generation: u32, node: Node<K, V> },
    Vacant { generation: u32 },
}

impl<K, V> Slot<K, V> {
    fn generation(&self) -> u32 {
        match self {
            Slot::Occupied { generation, .. } | Slot::Vacant { generation } => *generation,
        }
    }
}

/// Slot storage for tree nodes. Removed slots go on a free list and are
/// handed out again with a bumped generation.
#[derive(Debug, Clone)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Slot<K, V>>,
    free: Vec<NodeId>,
}

impl<K, V> Arena<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    pub(crate) fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        if let Some(id) = self.free.pop() {
            let slot = &mut self.slots[id.index()];
            let generation = slot.generation();
            *slot = Slot::Occupied { generation, node };
            return id;
        }
        assert!(
            self.slots.len() < u32::MAX as usize,
            "Reached maximum number of nodes"
        );
        let id = NodeId(self.slots.len() as u32);
        self.slots.push(Slot::Occupied {
            generation: 0,
            node,
        });
        id
    }

    /// Take the node out of its slot. The caller owns it from here on.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<K, V> {
        let slot = &mut self.slots[id.index()];
        let generation = slot.generation().wrapping_add(1);
        match std::mem::replace(slot, Slot::Vacant { generation }) {
            Slot::Occupied { node, .. } => {
                self.free.push(id);
                node
            }
            Slot::Vacant { .. } => unreachable!("node slot {id:?} freed twice"),
        }
    }

    /// Drop every node. Slots are kept for reuse and all handles go stale.
    pub(crate) fn clear(&mut self) {
        self.free.clear();
        for (i, slot) in self.slots.iter_mut().enumerate().rev() {
            if let Slot::Occupied { generation, .. } = *slot {
                *slot = Slot::Vacant {
                    generation: generation.wrapping_add(1),
                };
            }
            self.free.push(NodeId(i as u32));
        }
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        match &self.slots[id.index()] {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => unreachable!("link to vacant node slot {id:?}"),
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        match &mut self.slots[id.index()] {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => unreachable!("link to vacant node slot {id:?}"),
        }
    }

    pub(crate) fn handle(&self, id: NodeId) -> NodeRef {
        NodeRef {
            id,
            generation: self.slots[id.index()].generation(),
        }
    }

    /// Map a public handle back to its slot, if the node is still alive.
    pub(crate) fn resolve(&self, node: NodeRef) -> Option<NodeId> {
        match self.slots.get(node.id.index())? {
            Slot::Occupied { generation, .. } if *generation == node.generation => Some(node.id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(low: i32, high: i32) -> Node<i32, ()> {
        Node::new(Interval::new(low, high), ())
    }

    #[test]
    fn new_node_is_red_with_own_max() {
        let n = leaf(3, 9);
        assert!(n.is_red());
        assert_eq!(*n.max(), 9);
        assert!(n.left.is_none() && n.right.is_none() && n.parent.is_none());
    }

    #[test]
    fn freed_slot_is_reused_with_new_generation() {
        let mut arena = Arena::with_capacity(2);
        let a = arena.alloc(leaf(1, 2));
        let old = arena.handle(a);
        assert_eq!(arena.resolve(old), Some(a));

        let node = arena.free(a);
        assert_eq!(node.interval, Interval::new(1, 2));
        assert_eq!(arena.resolve(old), None);

        let b = arena.alloc(leaf(5, 6));
        assert_eq!(a, b);
        assert_eq!(arena.resolve(old), None);
        assert_eq!(arena.resolve(arena.handle(b)), Some(b));
        assert_eq!(arena.node(b).interval, Interval::new(5, 6));
    }

    #[test]
    fn clear_invalidates_handles() {
        let mut arena = Arena::with_capacity(0);
        let a = arena.alloc(leaf(1, 2));
        let b = arena.alloc(leaf(3, 4));
        let (ha, hb) = (arena.handle(a), arena.handle(b));
        arena.clear();
        assert_eq!(arena.resolve(ha), None);
        assert_eq!(arena.resolve(hb), None);
        // lowest slot comes back first
        assert_eq!(arena.alloc(leaf(7, 8)), a);
    }
}
