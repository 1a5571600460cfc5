use std::fmt::Debug;

use crate::{error::TreeError, node::Color, node::NodeId, IntervalTree};

impl<K: Ord + Copy + Debug, V> IntervalTree<K, V> {
    /// Verify every structural invariant of the tree: low-endpoint order,
    /// Red-Black coloring and black height, cached max endpoints, parent
    /// links and the node count.
    ///
    /// This walks the whole tree and is meant for tests and debugging, the
    /// tree never calls it on its own.
    pub fn check(&self) -> Result<(), TreeError> {
        let Some(root) = self.root else {
            return match self.len {
                0 => Ok(()),
                n => Err(TreeError::Length {
                    expected: n,
                    found: 0,
                }),
            };
        };
        if self.parent(root).is_some() {
            return Err(TreeError::ParentLink(self.describe(root)));
        }
        if self.is_red(Some(root)) {
            return Err(TreeError::RedRoot);
        }

        let mut found = 0;
        self.check_subtree(root, None, None, &mut found)?;
        if found != self.len {
            return Err(TreeError::Length {
                expected: self.len,
                found,
            });
        }
        Ok(())
    }

    /// Returns the black height and max endpoint of the subtree at `id`.
    fn check_subtree(
        &self,
        id: NodeId,
        lower: Option<K>,
        upper: Option<K>,
        found: &mut usize,
    ) -> Result<(usize, K), TreeError> {
        let node = self.node(id);
        let low = node.interval.low;
        if lower.is_some_and(|l| low < l) || upper.is_some_and(|u| low > u) {
            return Err(TreeError::Order(self.describe(id)));
        }
        *found += 1;

        let mut heights = [0; 2];
        let mut max = node.interval.high;
        for (i, (child, lower, upper)) in [
            (node.left, lower, Some(low)),
            (node.right, Some(low), upper),
        ]
        .into_iter()
        .enumerate()
        {
            let Some(child) = child else { continue };
            if self.parent(child) != Some(id) {
                return Err(TreeError::ParentLink(self.describe(child)));
            }
            if node.color == Color::Red && self.is_red(Some(child)) {
                return Err(TreeError::RedChild(self.describe(id)));
            }
            let (height, child_max) = self.check_subtree(child, lower, upper, found)?;
            heights[i] = height;
            max = max.max(child_max);
        }

        if heights[0] != heights[1] {
            return Err(TreeError::BlackHeight(self.describe(id)));
        }
        if node.max != max {
            return Err(TreeError::MaxEndpoint {
                node: self.describe(id),
                cached: format!("{:?}", node.max),
                actual: format!("{max:?}"),
            });
        }
        let own = usize::from(node.color == Color::Black);
        Ok((heights[0] + own, node.max))
    }

    fn describe(&self, id: NodeId) -> String {
        let interval = &self.node(id).interval;
        format!("[{:?}, {:?}]", interval.low, interval.high)
    }
}

#[cfg(test)]
mod tests {
    use crate::{node::Color, IntervalTree, TreeError};

    fn sample() -> IntervalTree<i32> {
        let mut tree = IntervalTree::new();
        for k in 0..16 {
            tree.insert((k, k + 3), ());
        }
        tree.check().unwrap();
        tree
    }

    #[test]
    fn detects_stale_max() {
        let mut tree = sample();
        let root = tree.root.unwrap();
        tree.node_mut(root).max = 100;
        assert!(matches!(tree.check(), Err(TreeError::MaxEndpoint { .. })));
    }

    #[test]
    fn detects_red_root() {
        let mut tree = sample();
        let root = tree.root;
        tree.set_color(root, Color::Red);
        assert_eq!(tree.check(), Err(TreeError::RedRoot));
    }

    #[test]
    fn detects_black_height_mismatch() {
        let mut tree = sample();
        let leaf = tree.minimum(tree.root.unwrap());
        // flipping a leaf changes the black count on exactly one side
        let flipped = match tree.node(leaf).color {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        };
        tree.set_color(Some(leaf), flipped);
        assert!(matches!(
            tree.check(),
            Err(TreeError::BlackHeight(_) | TreeError::RedChild(_))
        ));
    }

    #[test]
    fn detects_order_and_length() {
        let mut tree = sample();
        let last = tree.root.map(|r| {
            let mut n = r;
            while let Some(next) = tree.right(n) {
                n = next;
            }
            n
        });
        tree.node_mut(last.unwrap()).interval.low = -5;
        assert!(matches!(tree.check(), Err(TreeError::Order(_))));

        let mut tree = sample();
        tree.len += 1;
        assert_eq!(
            tree.check(),
            Err(TreeError::Length {
                expected: 17,
                found: 16
            })
        );
    }
}
