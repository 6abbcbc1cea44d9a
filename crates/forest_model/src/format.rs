//! On-disk model document written by the training export.

use serde::Deserialize;

/// Document format version this crate reads.
pub const FORMAT_VERSION: u32 = 1;

/// Model type tag for a random forest regressor.
pub const MODEL_TYPE: &str = "random_forest_regressor";

/// Top-level model document.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelDocument {
    /// Format version of the document
    pub format_version: u32,

    /// Model type tag
    pub model_type: String,

    /// Feature names, in the column order the trees were trained on
    pub feature_names: Vec<String>,

    /// Per-tree node arrays
    pub trees: Vec<TreeDocument>,
}

/// Node arrays for a single decision tree.
///
/// The five arrays are parallel, indexed by node id, with node 0 as the
/// root and children always following their parent. Leaves carry `-1` in
/// both child arrays and `-2` in the feature array.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeDocument {
    /// Split feature index per node (`-2` on leaves)
    pub feature: Vec<i64>,

    /// Split threshold per node (ignored on leaves)
    pub threshold: Vec<f64>,

    /// Left child id per node (`-1` on leaves)
    pub children_left: Vec<i64>,

    /// Right child id per node (`-1` on leaves)
    pub children_right: Vec<i64>,

    /// Predicted value per node (only leaf values are read)
    pub value: Vec<f64>,
}
