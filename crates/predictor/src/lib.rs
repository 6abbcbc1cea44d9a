//! Request-path scoring over a loaded forest model.
//!
//! Turns a flat feature map into a single row, evaluates the forest and
//! rounds the result into the response payload.

#![expect(
    clippy::std_instead_of_alloc,
    reason = "alloc crate not available in std environment"
)]

use std::path::Path;

use forest_model::{ForestModel, ModelError};
use serde::Serialize;
use tracing::debug;

mod event;

pub use event::InvocationEvent;

/// Errors produced while loading the model or validating an event.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("event contains unknown features: {names}")]
    UnknownFeatures { names: String },

    #[error("event is missing required features: {names}")]
    MissingFeatures { names: String },

    #[error("feature {name} has non-finite value {value}")]
    NonFiniteValue { name: String, value: f64 },
}

/// Response payload for a scoring request.
///
/// Serializes to `{"rf": <value>}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    /// Rounded model output
    pub rf: f64,
}

/// A loaded model ready to serve predictions.
///
/// The forest is decoded once and held in memory for the lifetime of the
/// process; serving never touches the model file again.
#[derive(Debug, Clone)]
pub struct Predictor {
    model: ForestModel,
}

impl Predictor {
    /// Wraps an already-loaded model.
    #[must_use]
    pub const fn new(model: ForestModel) -> Self {
        Self { model }
    }

    /// Loads and validates the model file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the document is
    /// not a valid model.
    pub fn from_file(path: &Path) -> Result<Self, PredictError> {
        let model = ForestModel::from_file(path)?;

        Ok(Self::new(model))
    }

    /// Scores a single event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event does not match the model schema.
    pub fn predict(&self, event: &InvocationEvent) -> Result<Prediction, PredictError> {
        let row = event.to_row(self.model.feature_names())?;
        let raw = self.model.predict_row(&row);
        let rf = round_two(raw);

        debug!(raw, rf, "Scored event");

        Ok(Prediction { rf })
    }

    /// The model backing this predictor.
    #[must_use]
    pub const fn model(&self) -> &ForestModel {
        &self.model
    }
}

/// Rounds a model output to two decimal places.
///
/// Scales by 100 and rounds half away from zero, so an estimator output
/// of 2.345 becomes 2.35. Idempotent on its own outputs.
#[must_use]
pub fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
