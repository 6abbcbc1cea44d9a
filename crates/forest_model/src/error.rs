//! Error type for model loading and validation.

use std::path::PathBuf;

/// Errors produced while reading, parsing or validating a model document.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported format version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("unsupported model type {found:?}, expected {expected:?}")]
    UnsupportedModelType {
        found: String,
        expected: &'static str,
    },

    #[error("model has no trees")]
    EmptyForest,

    #[error("tree {tree}: {field} has {actual} entries, expected {expected}")]
    ArrayLengthMismatch {
        tree: usize,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("tree {tree} has no nodes")]
    EmptyTree { tree: usize },

    #[error("tree {tree}: node {node} has a leaf marker on only one child")]
    LeafChildMismatch { tree: usize, node: usize },

    #[error("tree {tree}: node {node} references {side} child {child} but the tree has {n_nodes} nodes")]
    ChildOutOfBounds {
        tree: usize,
        node: usize,
        side: &'static str,
        child: i64,
        n_nodes: usize,
    },

    #[error("tree {tree}: node {node} references {side} child {child}, which does not follow it")]
    ChildOrder {
        tree: usize,
        node: usize,
        side: &'static str,
        child: i64,
    },

    #[error("tree {tree}: node {node} splits on feature {feature} but the model has {n_features} features")]
    FeatureIndexOutOfRange {
        tree: usize,
        node: usize,
        feature: i64,
        n_features: usize,
    },

    #[error("tree {tree}: node {node} has non-finite threshold {threshold}")]
    NonFiniteThreshold {
        tree: usize,
        node: usize,
        threshold: f64,
    },

    #[error("tree {tree}: node {node} is referenced by more than one parent")]
    DuplicateVisit { tree: usize, node: usize },

    #[error("tree {tree}: node {node} is not reachable from the root")]
    UnreachableNode { tree: usize, node: usize },
}
