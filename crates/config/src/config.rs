//! Process configuration loaded from environment variables.

use std::path::PathBuf;

use anyhow::Context;

/// Default location the model artifact is downloaded to.
///
/// Lambda only guarantees writable scratch space under `/tmp`.
const DEFAULT_MODEL_PATH: &str = "/tmp/model.json";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Object storage bucket holding the model artifact
    pub bucket: String,

    /// Object key of the model artifact within the bucket
    pub key: String,

    /// Local path the model artifact is downloaded to
    pub model_path: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `BUCKET`: object storage bucket holding the model artifact
    /// - `KEY`: object key of the model artifact
    ///
    /// Optional environment variables:
    /// - `MODEL_PATH`: local download destination (default: `/tmp/model.json`)
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bucket = lookup("BUCKET").context("BUCKET environment variable not set")?;

        let key = lookup("KEY").context("KEY environment variable not set")?;

        let model_path =
            lookup("MODEL_PATH").map_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH), PathBuf::from);

        Ok(Self {
            bucket,
            key,
            model_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
        }
    }

    #[test]
    fn test_all_variables_present() {
        let config = Config::from_lookup(lookup_from(&[
            ("BUCKET", "models"),
            ("KEY", "random_forest/latest.json"),
            ("MODEL_PATH", "/tmp/rf.json"),
        ]))
        .unwrap();

        assert_eq!(config.bucket, "models");
        assert_eq!(config.key, "random_forest/latest.json");
        assert_eq!(config.model_path, PathBuf::from("/tmp/rf.json"));
    }

    #[test]
    fn test_model_path_defaults() {
        let config =
            Config::from_lookup(lookup_from(&[("BUCKET", "models"), ("KEY", "rf.json")])).unwrap();

        assert_eq!(config.model_path, PathBuf::from("/tmp/model.json"));
    }

    #[test]
    fn test_missing_bucket_is_an_error() {
        let error = Config::from_lookup(lookup_from(&[("KEY", "rf.json")])).unwrap_err();

        assert!(error.to_string().contains("BUCKET"));
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let error = Config::from_lookup(lookup_from(&[("BUCKET", "models")])).unwrap_err();

        assert!(error.to_string().contains("KEY"));
    }

    #[test]
    fn test_empty_environment_is_an_error() {
        let error = Config::from_lookup(lookup_from(&[])).unwrap_err();

        assert!(error.to_string().contains("BUCKET"));
    }
}
