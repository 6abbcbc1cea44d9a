//! Inspect command - prints schema and shape statistics for a model file.

use std::path::Path;

use anyhow::{Context, Result};
use forest_model::ForestModel;
use tracing::info;

/// Runs the inspect command.
///
/// # Arguments
///
/// * `model_path` - Path to the model file
///
/// # Errors
///
/// Returns an error if the model cannot be loaded.
pub fn run(model_path: &Path) -> Result<()> {
    let model = ForestModel::from_file(model_path)
        .with_context(|| format!("Failed to load model from {}", model_path.display()))?;

    info!("{:<12} {:>8}", "Trees", model.n_trees());
    info!("{:<12} {:>8}", "Features", model.n_features());
    info!("{:<12} {:>8}", "Nodes", model.n_nodes());
    info!("{:<12} {:>8}", "Max depth", model.max_depth());
    info!("Feature names: {}", model.feature_names().join(", "));

    Ok(())
}
