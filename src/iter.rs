use std::iter::FusedIterator;

use crate::{interval::Interval, node::NodeId, IntervalTree};

/// In-order iterator over an [`IntervalTree`], created by
/// [`IntervalTree::iter`].
///
/// Walks successor links, so it needs no stack and can be cloned to restart
/// from any point.
pub struct Iter<'a, K, V> {
    tree: &'a IntervalTree<K, V>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(tree: &'a IntervalTree<K, V>) -> Self {
        Self {
            tree,
            next: tree.root.map(|r| tree.minimum(r)),
            remaining: tree.len,
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a Interval<K>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let tree = self.tree;
        self.next = tree.successor(id);
        self.remaining -= 1;
        let node = tree.node(id);
        Some((&node.interval, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a IntervalTree<K, V> {
    type Item = (&'a Interval<K>, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::IntervalTree;

    fn sample() -> IntervalTree<i32, char> {
        let mut tree = IntervalTree::new();
        for (k, c) in [(8, 'd'), (3, 'b'), (10, 'e'), (1, 'a'), (6, 'c'), (14, 'f')] {
            tree.insert((k, k + 2), c);
        }
        tree
    }

    #[test]
    fn ascending_order() {
        let tree = sample();
        let values: String = tree.iter().map(|(_, c)| *c).collect();
        assert_eq!(values, "abcdef");
        let lows: Vec<i32> = (&tree).into_iter().map(|(i, _)| i.low).collect();
        assert_eq!(lows, vec![1, 3, 6, 8, 10, 14]);
    }

    #[test]
    fn restartable_and_exact_size() {
        let tree = sample();
        let first: Vec<_> = tree.iter().collect();
        let second: Vec<_> = tree.iter().collect();
        assert_eq!(first, second);

        let mut it = tree.iter();
        assert_eq!(it.len(), 6);
        it.next();
        it.next();
        let rest = it.clone();
        assert_eq!(it.len(), 4);
        assert_eq!(it.map(|(_, c)| *c).collect::<String>(), "cdef");
        assert_eq!(rest.map(|(_, c)| *c).collect::<String>(), "cdef");
    }

    #[test]
    fn follows_removals() {
        let mut tree = sample();
        tree.remove_interval((8, 10)).unwrap();
        tree.remove_interval((1, 3)).unwrap();
        let values: String = tree.iter().map(|(_, c)| *c).collect();
        assert_eq!(values, "bcef");
        assert_eq!(tree.iter().len(), 4);

        let empty: IntervalTree<i32> = IntervalTree::new();
        let mut it = empty.iter();
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }
}
