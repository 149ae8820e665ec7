//! Reference range table: analyte name → expected low–high band.
//!
//! The table is process-wide configuration. It is loaded once (built-in
//! defaults or a `PanelConfig` file) and only read during scoring.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::analytes::*;
use crate::error::{HormonyxError, Result};

/// Clinically expected band for one analyte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub low: Option<f64>,
    pub high: Option<f64>,
    #[serde(default)]
    pub unit: String,
}

impl ReferenceRange {
    pub fn new(low: f64, high: f64, unit: &str) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
            unit: unit.to_string(),
        }
    }

    /// A range is degenerate when a bound is missing or `low >= high`.
    /// Degenerate ranges are legal; they score neutral.
    pub fn is_degenerate(&self) -> bool {
        match (self.low, self.high) {
            (Some(low), Some(high)) => low >= high,
            _ => true,
        }
    }
}

/// Analyte name → reference range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceTable {
    ranges: BTreeMap<String, ReferenceRange>,
}

impl Default for ReferenceTable {
    /// Placeholder ranges for the 17-analyte steroid panel.
    fn default() -> Self {
        [
            (PROGESTERONE,           1.0,   20.0, "ng/mL"),
            (PREGNENOLONE,           50.0, 200.0, "ng/dL"),
            (HYDROXYPROGESTERONE_17, 20.0, 120.0, "ng/dL"),
            (ESTRONE,                30.0, 200.0, "pg/mL"),
            (ESTRADIOL,              20.0, 300.0, "pg/mL"),
            (ESTRIOL,                 0.1,  10.0, "ng/mL"),
            (HYDROXYESTRONE_2,        1.0,  40.0, "pg/mL"),
            (TESTOSTERONE,           15.0,  70.0, "ng/dL"),
            (DHEA,                  100.0, 350.0, "ng/dL"),
            (DHT,                     3.0,  30.0, "ng/dL"),
            (ANDROSTENEDIONE,        30.0, 200.0, "ng/dL"),
            (ANDROSTERONE,           50.0, 220.0, "ng/dL"),
            (HYDROXYTESTOSTERONE,     1.0,  20.0, "ng/dL"),
            (CORTISOL,                5.0,  20.0, "ug/dL"),
            (CORTISONE,               1.0,   8.0, "ug/dL"),
            (CORTICOSTERONE,          0.1,   5.0, "ug/dL"),
            (ALDOSTERONE,             4.0,  31.0, "ng/dL"),
        ]
        .into_iter()
        .map(|(name, low, high, unit)| (name.to_string(), ReferenceRange::new(low, high, unit)))
        .collect()
    }
}

impl FromIterator<(String, ReferenceRange)> for ReferenceTable {
    fn from_iter<I: IntoIterator<Item = (String, ReferenceRange)>>(iter: I) -> Self {
        Self {
            ranges: iter.into_iter().collect(),
        }
    }
}

impl ReferenceTable {
    /// An empty table. Every analyte scores neutral against it.
    pub fn empty() -> Self {
        Self { ranges: BTreeMap::new() }
    }

    pub fn get(&self, analyte: &str) -> Option<&ReferenceRange> {
        self.ranges.get(analyte)
    }

    pub fn contains(&self, analyte: &str) -> bool {
        self.ranges.contains_key(analyte)
    }

    /// Add or replace a range, returning the previous one.
    pub fn insert(&mut self, analyte: &str, range: ReferenceRange) -> Option<ReferenceRange> {
        self.ranges.insert(analyte.to_string(), range)
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_range(mut self, analyte: &str, range: ReferenceRange) -> Self {
        self.insert(analyte, range);
        self
    }

    pub fn remove(&mut self, analyte: &str) -> Option<ReferenceRange> {
        self.ranges.remove(analyte)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReferenceRange)> {
        self.ranges.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Apply `overrides` on top of this table. Entries in `overrides` win;
    /// analytes it does not mention keep their current range.
    pub fn overlay(mut self, overrides: ReferenceTable) -> Self {
        self.ranges.extend(overrides.ranges);
        self
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Reject non-finite bounds. Inverted or incomplete ranges are only
    /// warned about since they resolve to a neutral score.
    pub fn validate(&self) -> Result<()> {
        for (analyte, range) in &self.ranges {
            let low = range.low.unwrap_or(0.0);
            let high = range.high.unwrap_or(0.0);
            if !low.is_finite() || !high.is_finite() {
                return Err(HormonyxError::InvalidRange {
                    analyte: analyte.clone(),
                    low,
                    high,
                });
            }
            if range.is_degenerate() {
                warn!(
                    "Reference range for {} is degenerate (low={:?}, high={:?}); it will score neutral",
                    analyte, range.low, range.high
                );
            }
        }
        Ok(())
    }
}
