//! Fetches the model artifact from object storage to local scratch space.
//!
//! Runs once at process start, before any request is served. A failed or
//! empty download is fatal to startup; there are no retries.

#![expect(
    clippy::std_instead_of_alloc,
    reason = "alloc crate not available in std environment"
)]

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use bytes::Bytes;
use object_store::ObjectStore;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path as ObjectStorePath;
use tracing::{debug, info};

/// Builds the S3-backed object store for the configured bucket.
///
/// Credentials and region come from the ambient AWS environment, as
/// provided by the execution role.
///
/// # Errors
///
/// Returns an error if the store cannot be constructed.
pub fn s3_store(bucket: &str) -> Result<Arc<dyn ObjectStore>> {
    let store = AmazonS3Builder::from_env()
        .with_bucket_name(bucket)
        .build()
        .with_context(|| format!("Failed to create object store for bucket {bucket}"))?;

    Ok(Arc::new(store))
}

/// Downloads the model artifact at `key` to `dest`.
///
/// Parent directories of `dest` are created as needed. An existing file
/// at `dest` is overwritten.
///
/// # Errors
///
/// Returns an error if the download fails, the object is empty, or the
/// file cannot be written.
pub async fn fetch_model(store: &dyn ObjectStore, key: &str, dest: &Path) -> Result<()> {
    let object_path = ObjectStorePath::from(key);

    debug!(key, "Fetching model artifact");

    let data: Bytes = store
        .get(&object_path)
        .await
        .context("Failed to read model from object store")?
        .bytes()
        .await
        .context("Failed to read model bytes from object store")?;

    if data.is_empty() {
        anyhow::bail!("Downloaded model is empty");
    }

    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    tokio::fs::write(dest, &data)
        .await
        .with_context(|| format!("Failed to write model to {}", dest.display()))?;

    info!(key, bytes = data.len(), dest = %dest.display(), "Downloaded model artifact");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use object_store::local::LocalFileSystem;

    async fn store_with_object(dir: &Path, key: &str, contents: &[u8]) -> Arc<dyn ObjectStore> {
        let store = LocalFileSystem::new_with_prefix(dir).unwrap();

        store
            .put(
                &ObjectStorePath::from(key),
                Bytes::copy_from_slice(contents).into(),
            )
            .await
            .unwrap();

        Arc::new(store)
    }

    #[tokio::test]
    async fn test_fetch_writes_destination() {
        let store_dir = tempfile::tempdir().unwrap();
        let store = store_with_object(store_dir.path(), "models/rf.json", b"{\"trees\":[]}").await;

        let scratch = tempfile::tempdir().unwrap();
        let dest = scratch.path().join("model.json");

        fetch_model(store.as_ref(), "models/rf.json", &dest)
            .await
            .unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), b"{\"trees\":[]}");
    }

    #[tokio::test]
    async fn test_fetch_creates_parent_directories() {
        let store_dir = tempfile::tempdir().unwrap();
        let store = store_with_object(store_dir.path(), "rf.json", b"{}").await;

        let scratch = tempfile::tempdir().unwrap();
        let dest = scratch.path().join("nested/scratch/model.json");

        fetch_model(store.as_ref(), "rf.json", &dest).await.unwrap();

        assert!(dest.exists());
    }

    #[tokio::test]
    async fn test_fetch_overwrites_existing_file() {
        let store_dir = tempfile::tempdir().unwrap();
        let store = store_with_object(store_dir.path(), "rf.json", b"new").await;

        let scratch = tempfile::tempdir().unwrap();
        let dest = scratch.path().join("model.json");
        std::fs::write(&dest, b"old").unwrap();

        fetch_model(store.as_ref(), "rf.json", &dest).await.unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_missing_key_is_an_error() {
        let store_dir = tempfile::tempdir().unwrap();
        let store = store_with_object(store_dir.path(), "rf.json", b"{}").await;

        let scratch = tempfile::tempdir().unwrap();
        let dest = scratch.path().join("model.json");

        let error = fetch_model(store.as_ref(), "absent.json", &dest)
            .await
            .unwrap_err();

        assert!(format!("{error:#}").contains("Failed to read model from object store"));
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_empty_object_is_an_error() {
        let store_dir = tempfile::tempdir().unwrap();
        let store = store_with_object(store_dir.path(), "rf.json", b"").await;

        let scratch = tempfile::tempdir().unwrap();
        let dest = scratch.path().join("model.json");

        let error = fetch_model(store.as_ref(), "rf.json", &dest)
            .await
            .unwrap_err();

        assert!(error.to_string().contains("empty"));
        assert!(!dest.exists());
    }
}
