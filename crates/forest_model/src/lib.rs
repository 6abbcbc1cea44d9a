//! Random forest regression models.
//!
//! Reads the JSON document exported by the training pipeline, validates
//! its structure up front, and evaluates feature rows against the
//! in-memory forest.

mod error;
mod forest;
pub mod format;
mod tree;

pub use error::ModelError;
pub use forest::ForestModel;
