//! Per-analyte scoring against the reference table.

use hormonyx_common::{MeasurementSnapshot, ReferenceRange, ReferenceTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

use crate::normalise::{range_centered_score, NEUTRAL_SCORE};

/// Whether a score reflects a measurement or the neutral fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBasis {
    Measured,
    /// Value absent or range unusable; the score is the neutral 50.
    NoData,
}

/// Score of one analyte in [0, 100] with its basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyteScore {
    pub score: u8,
    pub basis: ScoreBasis,
}

impl AnalyteScore {
    pub fn has_data(&self) -> bool {
        self.basis == ScoreBasis::Measured
    }
}

/// Score a single value against its range. Absent range or value → 50.
pub fn score_analyte(value: Option<f64>, range: Option<&ReferenceRange>) -> u8 {
    score_with_basis(value, range).score
}

fn score_with_basis(value: Option<f64>, range: Option<&ReferenceRange>) -> AnalyteScore {
    let usable = matches!(value, Some(v) if v.is_finite())
        && range.is_some_and(|r| !r.is_degenerate());

    if !usable {
        return AnalyteScore {
            score: NEUTRAL_SCORE,
            basis: ScoreBasis::NoData,
        };
    }

    AnalyteScore {
        score: range_centered_score(value, range.and_then(|r| r.low), range.and_then(|r| r.high)),
        basis: ScoreBasis::Measured,
    }
}

/// Analyte name → score, for every analyte in the reference table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BiomarkerScores {
    scores: BTreeMap<String, AnalyteScore>,
}

impl BiomarkerScores {
    pub fn get(&self, analyte: &str) -> Option<&AnalyteScore> {
        self.scores.get(analyte)
    }

    /// Numeric score, `None` if the analyte is not in the reference table.
    pub fn score(&self, analyte: &str) -> Option<u8> {
        self.get(analyte).map(|s| s.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnalyteScore)> {
        self.scores.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Number of analytes that fell back to the neutral score.
    pub fn missing_count(&self) -> usize {
        self.scores.values().filter(|s| !s.has_data()).count()
    }
}

/// Apply range-centred scoring to every analyte in `reference`.
pub fn score_biomarkers(snapshot: &MeasurementSnapshot, reference: &ReferenceTable) -> BiomarkerScores {
    for (analyte, _) in snapshot.values() {
        if !reference.contains(analyte) {
            trace!("Snapshot {} measures {} which has no reference range; ignoring", snapshot.label(), analyte);
        }
    }

    let scores = reference
        .iter()
        .map(|(analyte, range)| {
            (analyte.to_string(), score_with_basis(snapshot.value(analyte), Some(range)))
        })
        .collect();

    BiomarkerScores { scores }
}
