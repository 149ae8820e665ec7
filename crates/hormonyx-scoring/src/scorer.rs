//! Composite score computation.
//!
//! Two-level weighted aggregation:
//!
//! sub-score  = WA(biomarker scores, ratio scores; configurable weights + fixed ratio weights)
//! composite  = WA(sub-scores; fixed category weights)

use hormonyx_common::{Category, MeasurementSnapshot, Ratio, ReferenceTable, SubScore, WeightConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

use crate::aggregate::{weighted_average, WeightedItem};
use crate::biomarkers::{score_biomarkers, BiomarkerScores};
use crate::ratios::{compute_ratios, RatioSet};
use crate::weights::{category_weights, fixed_ratio_inputs};

/// Category composites for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composites {
    pub menstrual: u8,
    pub adrenal: u8,
}

impl Composites {
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Menstrual => self.menstrual,
            Category::Adrenal => self.adrenal,
        }
    }
}

/// Every intermediate of a composite computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub label: String,
    pub biomarkers: BiomarkerScores,
    pub ratios: RatioSet,
    pub ratio_scores: BTreeMap<Ratio, u8>,
    pub sub_scores: BTreeMap<SubScore, u8>,
    pub composites: Composites,
}

impl ScoreBreakdown {
    pub fn sub_score(&self, sub_score: SubScore) -> u8 {
        self.sub_scores.get(&sub_score).copied().unwrap_or(0)
    }
}

/// Value of one configurable input key: a ratio identifier resolves to the
/// ratio score, anything else to the analyte's biomarker score. Analytes
/// missing from the reference table have no value and contribute 0.
fn input_value(key: &str, biomarkers: &BiomarkerScores, ratios: &RatioSet) -> Option<f64> {
    match Ratio::from_key(key) {
        Some(ratio) => Some(f64::from(ratios.score(ratio))),
        None => biomarkers.score(key).map(f64::from),
    }
}

fn compute_sub_score(
    sub_score: SubScore,
    weights: &WeightConfig,
    biomarkers: &BiomarkerScores,
    ratios: &RatioSet,
) -> u8 {
    let configurable = weights.inputs(sub_score).iter().map(|(key, weight)| WeightedItem {
        value: input_value(key, biomarkers, ratios),
        weight: Some(*weight),
    });
    let fixed = fixed_ratio_inputs(sub_score)
        .iter()
        .map(|(ratio, weight)| WeightedItem::score(ratios.score(*ratio), *weight));

    let items: Vec<WeightedItem> = configurable.chain(fixed).collect();
    weighted_average(&items)
}

fn compute_category(category: Category, sub_scores: &BTreeMap<SubScore, u8>) -> u8 {
    let items: Vec<WeightedItem> = category_weights(category)
        .iter()
        .map(|(sub, weight)| WeightedItem::score(sub_scores.get(sub).copied().unwrap_or(0), *weight))
        .collect();
    weighted_average(&items)
}

/// Full scoring pass over one snapshot.
pub fn compute_breakdown(
    snapshot: &MeasurementSnapshot,
    weights: &WeightConfig,
    reference: &ReferenceTable,
) -> ScoreBreakdown {
    let biomarkers = score_biomarkers(snapshot, reference);
    let ratios = compute_ratios(snapshot);

    let sub_scores: BTreeMap<SubScore, u8> = SubScore::ALL
        .into_iter()
        .map(|sub| (sub, compute_sub_score(sub, weights, &biomarkers, &ratios)))
        .collect();

    let composites = Composites {
        menstrual: compute_category(Category::Menstrual, &sub_scores),
        adrenal: compute_category(Category::Adrenal, &sub_scores),
    };

    trace!(
        "Snapshot {}: menstrual={} adrenal={} sub_scores={:?}",
        snapshot.label(),
        composites.menstrual,
        composites.adrenal,
        sub_scores
    );

    ScoreBreakdown {
        label: snapshot.label().to_string(),
        ratio_scores: ratios.scores(),
        biomarkers,
        ratios,
        sub_scores,
        composites,
    }
}

/// Category composites for one snapshot. Pure: the same inputs always
/// produce the same output.
pub fn compute_composites(
    snapshot: &MeasurementSnapshot,
    weights: &WeightConfig,
    reference: &ReferenceTable,
) -> Composites {
    compute_breakdown(snapshot, weights, reference).composites
}

#[cfg(test)]
mod tests {
    use super::*;
    use hormonyx_common::analytes::*;
    use hormonyx_common::ReferenceRange;

    fn ideal_snapshot(reference: &ReferenceTable) -> MeasurementSnapshot {
        // Every analyte at its reference midpoint.
        reference.iter().fold(MeasurementSnapshot::new("ideal"), |snap, (name, range)| {
            let mid = (range.low.unwrap_or(0.0) + range.high.unwrap_or(0.0)) / 2.0;
            snap.with_value(name, mid)
        })
    }

    #[test]
    fn test_empty_snapshot_is_neutral() {
        let weights = WeightConfig::default();
        let reference = ReferenceTable::default();
        let breakdown = compute_breakdown(&MeasurementSnapshot::new("empty"), &weights, &reference);

        assert!(breakdown.sub_scores.values().all(|s| *s == 50));
        assert_eq!(breakdown.composites, Composites { menstrual: 50, adrenal: 50 });
    }

    #[test]
    fn test_midpoint_biomarkers_score_100() {
        let weights = WeightConfig::default();
        let reference = ReferenceTable::default();
        let breakdown = compute_breakdown(&ideal_snapshot(&reference), &weights, &reference);

        assert_eq!(breakdown.sub_score(SubScore::ProgesteroneSufficiency), 100);
        assert_eq!(breakdown.sub_score(SubScore::MenopauseTransition), 100);
        assert_eq!(breakdown.sub_score(SubScore::CortisolHomeostasis), 100);
    }

    #[test]
    fn test_adaptability_uses_ratio_keys() {
        let weights = WeightConfig::default();
        let reference = ReferenceTable::default();
        // Cortisol:DHEA = 0.08 (100), Cortisol:Cortisone = 4.5 (100)
        let snap = MeasurementSnapshot::new("T1")
            .with_value(CORTISOL, 9.0)
            .with_value(DHEA, 112.5)
            .with_value(CORTISONE, 2.0);
        let breakdown = compute_breakdown(&snap, &weights, &reference);
        assert_eq!(breakdown.sub_score(SubScore::AdrenalAdaptability), 100);
    }

    #[test]
    fn test_estrogen_balance_includes_fixed_ratios() {
        let reference = ReferenceTable::default();
        // Only the ratio inputs carry weight; both ratios on target.
        let weights = WeightConfig::default().with_sub_score_zeroed(SubScore::EstrogenBalance);
        let snap = MeasurementSnapshot::new("T1")
            .with_value(ESTRADIOL, 60.0)
            .with_value(ESTRONE, 100.0)
            .with_value(HYDROXYESTRONE_2, 10.0);
        let breakdown = compute_breakdown(&snap, &weights, &reference);
        assert_eq!(breakdown.sub_score(SubScore::EstrogenBalance), 100);
    }

    #[test]
    fn test_zeroed_sub_score_propagates() {
        let reference = ReferenceTable::default();
        let weights = WeightConfig::default().with_sub_score_zeroed(SubScore::CortisolHomeostasis);
        let snap = ideal_snapshot(&reference);
        let breakdown = compute_breakdown(&snap, &weights, &reference);

        assert_eq!(breakdown.sub_score(SubScore::CortisolHomeostasis), 0);
        let adapt = breakdown.sub_score(SubScore::AdrenalAdaptability);
        // (3·0 + 2·adapt) / 5
        let expected = ((2.0 * f64::from(adapt)) / 5.0 + 0.5).floor() as u8;
        assert_eq!(breakdown.composites.adrenal, expected);
    }

    #[test]
    fn test_unreferenced_input_contributes_zero() {
        let reference = ReferenceTable::empty()
            .with_range(PROGESTERONE, ReferenceRange::new(1.0, 20.0, "ng/mL"));
        let weights = WeightConfig::default();
        let snap = MeasurementSnapshot::new("T1").with_value(PROGESTERONE, 10.5);
        let breakdown = compute_breakdown(&snap, &weights, &reference);
        // Progesterone 100 (w3), 17-OHP and Pregnenolone unreferenced (w1 each, value 0)
        assert_eq!(breakdown.sub_score(SubScore::ProgesteroneSufficiency), 60);
    }

    #[test]
    fn test_compute_composites_is_idempotent() {
        let weights = WeightConfig::default();
        let reference = ReferenceTable::default();
        let snap = MeasurementSnapshot::new("T1")
            .with_value(CORTISOL, 17.5)
            .with_value(DHEA, 165.0)
            .with_value(ESTRADIOL, 45.0);
        let first = compute_composites(&snap, &weights, &reference);
        let second = compute_composites(&snap, &weights, &reference);
        assert_eq!(first, second);
    }
}
