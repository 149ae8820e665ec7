//! User-adjustable intra-sub-score weights.
//!
//! Only the weights of the inputs inside each sub-score live here. Ratio
//! targets and the category-level weights are domain constants owned by the
//! scoring crate and are deliberately not configurable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use tracing::warn;

use crate::analytes::*;
use crate::error::{HormonyxError, Result};
use crate::reference::ReferenceTable;

/// Per-sub-score map of input key (analyte name or ratio identifier) → weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    #[serde(default = "default_estrogen_balance")]
    pub estrogen_balance: BTreeMap<String, f64>,

    #[serde(default = "default_progesterone_sufficiency")]
    pub progesterone_sufficiency: BTreeMap<String, f64>,

    #[serde(default = "default_menopause_transition")]
    pub menopause_transition: BTreeMap<String, f64>,

    #[serde(default = "default_cortisol_homeostasis")]
    pub cortisol_homeostasis: BTreeMap<String, f64>,

    /// Keys are ratio identifiers, e.g. `ratio_Cortisol_to_DHEA`.
    #[serde(default = "default_adrenal_adaptability")]
    pub adrenal_adaptability: BTreeMap<String, f64>,
}

fn weights(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs.iter().map(|(k, w)| (k.to_string(), *w)).collect()
}

fn default_estrogen_balance() -> BTreeMap<String, f64> {
    weights(&[(ESTRADIOL, 3.0), (ESTRONE, 2.0), (ESTRIOL, 1.0), (HYDROXYESTRONE_2, 2.0)])
}
fn default_progesterone_sufficiency() -> BTreeMap<String, f64> {
    weights(&[(PROGESTERONE, 3.0), (HYDROXYPROGESTERONE_17, 1.0), (PREGNENOLONE, 1.0)])
}
fn default_menopause_transition() -> BTreeMap<String, f64> {
    weights(&[(ESTRADIOL, 3.0), (PROGESTERONE, 2.0), (DHEA, 1.0)])
}
fn default_cortisol_homeostasis() -> BTreeMap<String, f64> {
    weights(&[(CORTISOL, 3.0), (CORTISONE, 2.0), (CORTICOSTERONE, 1.0)])
}
fn default_adrenal_adaptability() -> BTreeMap<String, f64> {
    weights(&[
        (Ratio::CortisolToDhea.key(), 3.0),
        (Ratio::CortisolToCortisone.key(), 2.0),
    ])
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            estrogen_balance: default_estrogen_balance(),
            progesterone_sufficiency: default_progesterone_sufficiency(),
            menopause_transition: default_menopause_transition(),
            cortisol_homeostasis: default_cortisol_homeostasis(),
            adrenal_adaptability: default_adrenal_adaptability(),
        }
    }
}

impl WeightConfig {
    /// The configurable inputs of a sub-score.
    pub fn inputs(&self, sub_score: SubScore) -> &BTreeMap<String, f64> {
        match sub_score {
            SubScore::EstrogenBalance => &self.estrogen_balance,
            SubScore::ProgesteroneSufficiency => &self.progesterone_sufficiency,
            SubScore::MenopauseTransition => &self.menopause_transition,
            SubScore::CortisolHomeostasis => &self.cortisol_homeostasis,
            SubScore::AdrenalAdaptability => &self.adrenal_adaptability,
        }
    }

    fn inputs_mut(&mut self, sub_score: SubScore) -> &mut BTreeMap<String, f64> {
        match sub_score {
            SubScore::EstrogenBalance => &mut self.estrogen_balance,
            SubScore::ProgesteroneSufficiency => &mut self.progesterone_sufficiency,
            SubScore::MenopauseTransition => &mut self.menopause_transition,
            SubScore::CortisolHomeostasis => &mut self.cortisol_homeostasis,
            SubScore::AdrenalAdaptability => &mut self.adrenal_adaptability,
        }
    }

    /// Weight of `key` inside `sub_score`; unlisted keys weigh 0.
    pub fn weight(&self, sub_score: SubScore, key: &str) -> f64 {
        self.inputs(sub_score).get(key).copied().unwrap_or(0.0)
    }

    pub fn total_weight(&self, sub_score: SubScore) -> f64 {
        self.inputs(sub_score).values().sum()
    }

    /// Update one weight in place, returning the previous value.
    pub fn set_weight(&mut self, sub_score: SubScore, key: &str, weight: f64) -> Result<Option<f64>> {
        check_weight(sub_score, key, weight)?;
        Ok(self.inputs_mut(sub_score).insert(key.to_string(), weight))
    }

    /// Copy of this configuration with one weight changed.
    pub fn with_weight(mut self, sub_score: SubScore, key: &str, weight: f64) -> Result<Self> {
        self.set_weight(sub_score, key, weight)?;
        Ok(self)
    }

    /// Copy of this configuration with every input of `sub_score` set to 0.
    pub fn with_sub_score_zeroed(mut self, sub_score: SubScore) -> Self {
        self.inputs_mut(sub_score).values_mut().for_each(|w| *w = 0.0);
        self
    }

    /// Every weight must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for sub_score in SubScore::ALL {
            for (key, weight) in self.inputs(sub_score) {
                check_weight(sub_score, key, *weight)?;
            }
        }
        Ok(())
    }

    /// Weighted keys that are neither a ratio identifier nor an analyte in
    /// `reference`. Such inputs score 0 at their full weight.
    pub fn unknown_keys(&self, reference: &ReferenceTable) -> Vec<(SubScore, String)> {
        SubScore::ALL
            .into_iter()
            .flat_map(|sub_score| {
                self.inputs(sub_score)
                    .iter()
                    .filter(|(key, weight)| {
                        **weight > 0.0 && Ratio::from_key(key).is_none() && !reference.contains(key)
                    })
                    .map(move |(key, _)| (sub_score, key.clone()))
            })
            .collect()
    }

    /// Warn about weighted keys unknown to `reference` and about sub-scores
    /// with no weight left. Returns the unknown keys.
    pub fn check_against(&self, reference: &ReferenceTable) -> Vec<(SubScore, String)> {
        let unknown = self.unknown_keys(reference);
        for (sub_score, key) in &unknown {
            warn!(
                "Weight key '{}' in {} has no reference range and is not a ratio; it will contribute 0",
                key, sub_score
            );
        }
        for sub_score in SubScore::ALL {
            if self.total_weight(sub_score) == 0.0 && !has_fixed_inputs(sub_score) {
                warn!("{} has no weighted inputs; it will score 0", sub_score);
            }
        }
        unknown
    }
}

/// Estrogen Balance always carries its two fixed-weight ratio inputs.
fn has_fixed_inputs(sub_score: SubScore) -> bool {
    sub_score == SubScore::EstrogenBalance
}

fn check_weight(sub_score: SubScore, key: &str, weight: f64) -> Result<()> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(HormonyxError::InvalidWeight {
            sub_score,
            key: key.to_string(),
            weight,
        })
    }
}
