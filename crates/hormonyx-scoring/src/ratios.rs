//! Derived analyte ratios and their target-deviation scores.

use hormonyx_common::{MeasurementSnapshot, Ratio};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::normalise::ratio_score;
use crate::weights::ratio_target;

/// Score `actual` against `target`. Absent operand or zero target → 50.
pub fn score_ratio(actual: Option<f64>, target: Option<f64>) -> u8 {
    ratio_score(actual, target)
}

/// `numerator / denominator`, undefined on an absent operand or a zero
/// denominator.
pub fn safe_ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if d != 0.0 => Some(n / d).filter(|r| r.is_finite()),
        _ => None,
    }
}

/// Raw ratio values for one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatioSet {
    values: BTreeMap<Ratio, Option<f64>>,
}

impl RatioSet {
    pub fn value(&self, ratio: Ratio) -> Option<f64> {
        self.values.get(&ratio).copied().flatten()
    }

    /// Score of the ratio against its fixed target.
    pub fn score(&self, ratio: Ratio) -> u8 {
        ratio_score(self.value(ratio), Some(ratio_target(ratio)))
    }

    pub fn scores(&self) -> BTreeMap<Ratio, u8> {
        Ratio::ALL.into_iter().map(|r| (r, self.score(r))).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ratio, Option<f64>)> + '_ {
        self.values.iter().map(|(r, v)| (*r, *v))
    }
}

/// Compute every known ratio from the snapshot's raw values.
pub fn compute_ratios(snapshot: &MeasurementSnapshot) -> RatioSet {
    let values = Ratio::ALL
        .into_iter()
        .map(|ratio| {
            let value = safe_ratio(
                snapshot.value(ratio.numerator()),
                snapshot.value(ratio.denominator()),
            );
            (ratio, value)
        })
        .collect();

    RatioSet { values }
}
