//! Lambda wiring: cold start initialization and the request handler.

use anyhow::{Context, Result};
use config::Config;
use lambda_runtime::{Error, LambdaEvent};
use predictor::{InvocationEvent, Prediction, Predictor};
use tracing::info;

/// Loads everything the handler needs, fetching the model artifact from
/// object storage to local scratch space.
///
/// Runs once per cold start. Any failure here aborts the process before
/// it serves a single request; the platform surfaces the failure.
///
/// # Errors
///
/// Returns an error if configuration is missing, the download fails, or
/// the model document is invalid.
pub async fn init() -> Result<Predictor> {
    let config = Config::from_env()?;

    let store = model_loader::s3_store(&config.bucket)?;
    model_loader::fetch_model(store.as_ref(), &config.key, &config.model_path).await?;

    let predictor = Predictor::from_file(&config.model_path)
        .with_context(|| format!("Failed to load model from {}", config.model_path.display()))?;

    info!(
        bucket = %config.bucket,
        key = %config.key,
        n_trees = predictor.model().n_trees(),
        n_features = predictor.model().n_features(),
        "Model loaded"
    );

    Ok(predictor)
}

/// Scores one invocation.
///
/// # Errors
///
/// Returns an error if the event does not match the model schema; the
/// runtime reports it as a failed invocation and keeps serving.
pub async fn handle(
    event: LambdaEvent<InvocationEvent>,
    predictor: &Predictor,
) -> Result<Prediction, Error> {
    let (payload, _context) = event.into_parts();

    let prediction = predictor.predict(&payload)?;

    Ok(prediction)
}
