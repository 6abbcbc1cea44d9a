//! Fetch command - downloads a model artifact from object storage.

use std::path::Path;

use anyhow::Result;
use tracing::info;

/// Runs the fetch command.
///
/// # Arguments
///
/// * `bucket` - Object storage bucket
/// * `key` - Object key of the model artifact
/// * `out` - Destination path for the downloaded file
///
/// # Errors
///
/// Returns an error if the store cannot be built or the download fails.
pub async fn run(bucket: &str, key: &str, out: &Path) -> Result<()> {
    info!(bucket, key, out = %out.display(), "Fetching model artifact");

    let store = model_loader::s3_store(bucket)?;
    model_loader::fetch_model(store.as_ref(), key, out).await?;

    info!("Fetch complete");

    Ok(())
}
