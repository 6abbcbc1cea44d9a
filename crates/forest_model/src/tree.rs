//! Single decision tree in struct-of-arrays form.

use crate::ModelError;
use crate::format::TreeDocument;

/// Marker the exporter writes into both child arrays for leaf nodes.
const LEAF_CHILD: i64 = -1;

/// A decision tree with nodes stored as parallel arrays.
///
/// Node ids are in preorder: node 0 is the root and children always have
/// larger ids than their parent, so traversal cannot loop.
#[derive(Debug, Clone)]
pub struct Tree {
    /// Split feature index per node (unused on leaves).
    split_features: Box<[u32]>,
    /// Split threshold per node (unused on leaves).
    thresholds: Box<[f64]>,
    /// Left child id per node.
    left_children: Box<[u32]>,
    /// Right child id per node.
    right_children: Box<[u32]>,
    /// Marks leaf nodes.
    leaves: Box<[bool]>,
    /// Predicted value per node (only read on leaves).
    values: Box<[f64]>,
}

impl Tree {
    /// Builds a tree from exported node arrays, validating structure.
    pub(crate) fn from_document(
        tree: usize,
        doc: TreeDocument,
        n_features: usize,
    ) -> Result<Self, ModelError> {
        let TreeDocument {
            feature,
            threshold,
            children_left,
            children_right,
            value,
        } = doc;

        let n_nodes = feature.len();

        for (field, actual) in [
            ("threshold", threshold.len()),
            ("children_left", children_left.len()),
            ("children_right", children_right.len()),
            ("value", value.len()),
        ] {
            if actual != n_nodes {
                return Err(ModelError::ArrayLengthMismatch {
                    tree,
                    field,
                    expected: n_nodes,
                    actual,
                });
            }
        }

        if n_nodes == 0 {
            return Err(ModelError::EmptyTree { tree });
        }

        let mut split_features = vec![0_u32; n_nodes];
        let mut left_children = vec![0_u32; n_nodes];
        let mut right_children = vec![0_u32; n_nodes];
        let mut leaves = vec![false; n_nodes];

        for node in 0..n_nodes {
            let left = children_left[node];
            let right = children_right[node];

            if (left == LEAF_CHILD) != (right == LEAF_CHILD) {
                return Err(ModelError::LeafChildMismatch { tree, node });
            }

            if left == LEAF_CHILD {
                leaves[node] = true;
                continue;
            }

            for (side, child) in [("left", left), ("right", right)] {
                if child < 0 || child as usize >= n_nodes {
                    return Err(ModelError::ChildOutOfBounds {
                        tree,
                        node,
                        side,
                        child,
                        n_nodes,
                    });
                }

                if child as usize <= node {
                    return Err(ModelError::ChildOrder {
                        tree,
                        node,
                        side,
                        child,
                    });
                }
            }

            let split_feature = feature[node];
            if split_feature < 0 || split_feature as usize >= n_features {
                return Err(ModelError::FeatureIndexOutOfRange {
                    tree,
                    node,
                    feature: split_feature,
                    n_features,
                });
            }

            let split_threshold = threshold[node];
            if !split_threshold.is_finite() {
                return Err(ModelError::NonFiniteThreshold {
                    tree,
                    node,
                    threshold: split_threshold,
                });
            }

            split_features[node] = split_feature as u32;
            left_children[node] = left as u32;
            right_children[node] = right as u32;
        }

        // Every node must be reached exactly once from the root
        let mut visited = vec![false; n_nodes];
        let mut stack = vec![0_u32];

        while let Some(node) = stack.pop() {
            let node = node as usize;

            if visited[node] {
                return Err(ModelError::DuplicateVisit { tree, node });
            }
            visited[node] = true;

            if !leaves[node] {
                stack.push(left_children[node]);
                stack.push(right_children[node]);
            }
        }

        if let Some(node) = visited.iter().position(|reached| !reached) {
            return Err(ModelError::UnreachableNode { tree, node });
        }

        Ok(Self {
            split_features: split_features.into_boxed_slice(),
            thresholds: threshold.into_boxed_slice(),
            left_children: left_children.into_boxed_slice(),
            right_children: right_children.into_boxed_slice(),
            leaves: leaves.into_boxed_slice(),
            values: value.into_boxed_slice(),
        })
    }

    /// Evaluates the tree for a single row, returning the leaf value.
    ///
    /// Rows are indexed by split feature; a missing index reads as NaN,
    /// which never satisfies the split and falls through to the right.
    #[must_use]
    pub fn predict_row(&self, row: &[f64]) -> f64 {
        let mut node = 0_usize;

        while !self.leaves[node] {
            let feature = self.split_features[node] as usize;
            let value = row.get(feature).copied().unwrap_or(f64::NAN);

            node = if value <= self.thresholds[node] {
                self.left_children[node] as usize
            } else {
                self.right_children[node] as usize
            };
        }

        self.values[node]
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn n_nodes(&self) -> usize {
        self.thresholds.len()
    }

    /// Depth of the deepest leaf, counting the root as depth zero.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(0_u32, 0_usize)];

        while let Some((node, depth)) = stack.pop() {
            let node = node as usize;

            if self.leaves[node] {
                deepest = deepest.max(depth);
            } else {
                stack.push((self.left_children[node], depth + 1));
                stack.push((self.right_children[node], depth + 1));
            }
        }

        deepest
    }
}
