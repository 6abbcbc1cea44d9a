//! Random forest assembled from exported trees.

use std::path::Path;

use crate::ModelError;
use crate::format::{FORMAT_VERSION, MODEL_TYPE, ModelDocument};
use crate::tree::Tree;

/// A loaded random forest regression model.
#[derive(Debug, Clone)]
pub struct ForestModel {
    feature_names: Vec<String>,
    trees: Vec<Tree>,
}

impl ForestModel {
    /// Builds a model from a parsed document, validating the format
    /// version, model type and every tree's structure.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a supported random forest
    /// export or any tree is malformed.
    pub fn from_document(document: ModelDocument) -> Result<Self, ModelError> {
        if document.format_version != FORMAT_VERSION {
            return Err(ModelError::UnsupportedVersion {
                found: document.format_version,
                expected: FORMAT_VERSION,
            });
        }

        if document.model_type != MODEL_TYPE {
            return Err(ModelError::UnsupportedModelType {
                found: document.model_type,
                expected: MODEL_TYPE,
            });
        }

        if document.trees.is_empty() {
            return Err(ModelError::EmptyForest);
        }

        let n_features = document.feature_names.len();
        let trees = document
            .trees
            .into_iter()
            .enumerate()
            .map(|(index, tree)| Tree::from_document(index, tree, n_features))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            feature_names: document.feature_names,
            trees,
        })
    }

    /// Parses and validates a model document from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not valid JSON or the document
    /// fails validation.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ModelError> {
        let document: ModelDocument = serde_json::from_slice(bytes)?;

        Self::from_document(document)
    }

    /// Reads, parses and validates a model file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the document fails
    /// validation.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let bytes = std::fs::read(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_slice(&bytes)
    }

    /// Predicts a single row as the mean of the per-tree leaf values.
    #[must_use]
    pub fn predict_row(&self, row: &[f64]) -> f64 {
        let sum: f64 = self.trees.iter().map(|tree| tree.predict_row(row)).sum();

        sum / self.trees.len() as f64
    }

    /// Feature names in training column order.
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Number of input features.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Number of trees in the ensemble.
    #[must_use]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Total node count across all trees.
    #[must_use]
    pub fn n_nodes(&self) -> usize {
        self.trees.iter().map(Tree::n_nodes).sum()
    }

    /// Depth of the deepest tree in the ensemble.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.trees.iter().map(Tree::max_depth).max().unwrap_or(0)
    }
}
