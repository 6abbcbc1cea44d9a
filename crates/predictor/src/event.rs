//! Invocation event and row construction.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::PredictError;

/// A scoring request: a flat mapping of feature name to value.
///
/// Mirrors the raw invocation payload, e.g. `{"x1": 2.0, "x2": 3.0}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct InvocationEvent {
    features: BTreeMap<String, f64>,
}

impl InvocationEvent {
    /// Builds an event from explicit feature values.
    #[must_use]
    pub const fn new(features: BTreeMap<String, f64>) -> Self {
        Self { features }
    }

    /// Number of features carried by the event.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if the event carries no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Arranges the event values into a single row in schema order.
    ///
    /// The event must carry exactly the schema's features: unknown names,
    /// missing names and non-finite values are all rejected rather than
    /// scored.
    ///
    /// # Errors
    ///
    /// Returns an error describing the offending features.
    pub fn to_row(&self, feature_names: &[String]) -> Result<Vec<f64>, PredictError> {
        let unknown: Vec<&str> = self
            .features
            .keys()
            .filter(|name| !feature_names.iter().any(|known| known == *name))
            .map(String::as_str)
            .collect();

        if !unknown.is_empty() {
            return Err(PredictError::UnknownFeatures {
                names: unknown.join(", "),
            });
        }

        let mut row = Vec::with_capacity(feature_names.len());
        let mut missing: Vec<&str> = Vec::new();

        for name in feature_names {
            match self.features.get(name) {
                Some(value) if value.is_finite() => row.push(*value),
                Some(value) => {
                    return Err(PredictError::NonFiniteValue {
                        name: name.clone(),
                        value: *value,
                    });
                }
                None => missing.push(name.as_str()),
            }
        }

        if !missing.is_empty() {
            return Err(PredictError::MissingFeatures {
                names: missing.join(", "),
            });
        }

        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    fn event(raw: &str) -> InvocationEvent {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_row_follows_schema_order() {
        // JSON key order differs from schema order
        let event = event(r#"{"x2": 3.0, "x1": 2.0}"#);

        let row = event.to_row(&schema(&["x1", "x2"])).unwrap();

        assert_eq!(row, vec![2.0, 3.0]);
    }

    #[test]
    fn test_unknown_feature_rejected() {
        let event = event(r#"{"x1": 2.0, "x2": 3.0, "bogus": 1.0}"#);

        let error = event.to_row(&schema(&["x1", "x2"])).unwrap_err();

        assert!(matches!(
            error,
            PredictError::UnknownFeatures { ref names } if names == "bogus"
        ));
    }

    #[test]
    fn test_missing_feature_rejected() {
        let event = event(r#"{"x1": 2.0}"#);

        let error = event.to_row(&schema(&["x1", "x2"])).unwrap_err();

        assert!(matches!(
            error,
            PredictError::MissingFeatures { ref names } if names == "x2"
        ));
    }

    #[test]
    fn test_all_missing_features_reported() {
        let event = event("{}");

        let error = event.to_row(&schema(&["x1", "x2"])).unwrap_err();

        assert!(matches!(
            error,
            PredictError::MissingFeatures { ref names } if names == "x1, x2"
        ));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let mut features = BTreeMap::new();
        features.insert("x1".to_string(), f64::NAN);
        features.insert("x2".to_string(), 3.0);
        let event = InvocationEvent::new(features);

        let error = event.to_row(&schema(&["x1", "x2"])).unwrap_err();

        assert!(matches!(
            error,
            PredictError::NonFiniteValue { ref name, .. } if name == "x1"
        ));
    }

    #[test]
    fn test_non_numeric_payload_fails_deserialization() {
        let result: Result<InvocationEvent, _> = serde_json::from_str(r#"{"x1": "two"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_len_and_is_empty() {
        assert_eq!(event(r#"{"x1": 2.0}"#).len(), 1);
        assert!(event("{}").is_empty());
    }
}
