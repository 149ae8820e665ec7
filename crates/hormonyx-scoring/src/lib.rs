//! hormonyx-scoring — Hormone scoring engine.
//!
//! Raw measurements → per-analyte and per-ratio scores → weighted sub-scores
//! → category composites → history series and trend deltas. Every step is a
//! pure function of its inputs; degenerate data resolves to a neutral or zero
//! score instead of an error.

pub mod normalise;
pub mod aggregate;
pub mod weights;
pub mod biomarkers;
pub mod ratios;
pub mod scorer;
pub mod status;
pub mod history;

pub use biomarkers::{score_analyte, score_biomarkers, AnalyteScore, BiomarkerScores, ScoreBasis};
pub use history::{CompositeDelta, CompositeSeries, History, SnapshotId, Trend};
pub use ratios::{compute_ratios, score_ratio, RatioSet};
pub use scorer::{compute_breakdown, compute_composites, Composites, ScoreBreakdown};
pub use status::{range_status, RangeStatus, ScoreBand};
