//! A labeled set of measurements taken at one point in time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One timepoint's measurements. Values are `None` when the analyte was
/// requested but not reported.
///
/// Snapshots are values: the builder methods consume `self` and there is no
/// in-place setter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSnapshot {
    label: String,
    #[serde(default)]
    values: BTreeMap<String, Option<f64>>,
}

impl MeasurementSnapshot {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn from_values<I, K>(label: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<f64>)>,
        K: Into<String>,
    {
        Self {
            label: label.into(),
            values: values.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn with_value(mut self, analyte: &str, value: f64) -> Self {
        self.values.insert(analyte.to_string(), Some(value));
        self
    }

    /// Record the analyte as requested but not reported.
    pub fn with_missing(mut self, analyte: &str) -> Self {
        self.values.insert(analyte.to_string(), None);
        self
    }

    /// Same measurements under a new label.
    pub fn relabel(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Measured value, flattening "not listed" and "listed as missing".
    pub fn value(&self, analyte: &str) -> Option<f64> {
        self.values.get(analyte).copied().flatten()
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
