//! Predict command - scores a JSON event file against a local model.

use std::path::Path;

use anyhow::{Context, Result};
use predictor::{InvocationEvent, Predictor};
use tracing::info;

/// Runs the predict command.
///
/// Prints the prediction as JSON on stdout.
///
/// # Arguments
///
/// * `model_path` - Path to the model file
/// * `event_path` - Path to a JSON event file
///
/// # Errors
///
/// Returns an error if the model or event cannot be loaded, or the event
/// does not match the model schema.
pub fn run(model_path: &Path, event_path: &Path) -> Result<()> {
    info!(
        model = %model_path.display(),
        event = %event_path.display(),
        "Scoring event"
    );

    let predictor = Predictor::from_file(model_path)
        .with_context(|| format!("Failed to load model from {}", model_path.display()))?;

    let raw = std::fs::read_to_string(event_path)
        .with_context(|| format!("Failed to read event file {}", event_path.display()))?;

    let event: InvocationEvent = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse event file {}", event_path.display()))?;

    let prediction = predictor.predict(&event)?;

    println!("{}", serde_json::to_string(&prediction)?);

    Ok(())
}
