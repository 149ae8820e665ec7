//! Timepoint history: ordered snapshots, composite series and trend deltas.
//!
//! Snapshots are stored once. The timeline and the current/previous
//! pointers are ids into that store, so swapping the working sample
//! (`replace_current`) never duplicates or loses data. Composites are never
//! cached: weights are passed in on every call, so a weight change
//! retroactively rescales the whole series.

use hormonyx_common::{Category, MeasurementSnapshot, ReferenceTable, WeightConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalise::round_half_up;
use crate::scorer::{compute_composites, Composites};

/// Handle to a snapshot stored in a [`History`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnapshotId(usize);

/// Direction of a composite between two timepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Signed one-decimal change per category, current minus previous.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeDelta {
    pub menstrual: f64,
    pub adrenal: f64,
}

impl CompositeDelta {
    pub fn between(current: Composites, previous: Composites) -> Self {
        let delta = |c: u8, p: u8| round_half_up((f64::from(c) - f64::from(p)) * 10.0) / 10.0;
        Self {
            menstrual: delta(current.menstrual, previous.menstrual),
            adrenal: delta(current.adrenal, previous.adrenal),
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Menstrual => self.menstrual,
            Category::Adrenal => self.adrenal,
        }
    }

    pub fn trend(&self, category: Category) -> Trend {
        let d = self.get(category);
        if d > 0.0 {
            Trend::Up
        } else if d < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

/// Composites over the timeline, as parallel sequences for charting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositeSeries {
    pub labels: Vec<String>,
    pub menstrual: Vec<u8>,
    pub adrenal: Vec<u8>,
}

impl CompositeSeries {
    pub fn get(&self, category: Category) -> &[u8] {
        match category {
            Category::Menstrual => &self.menstrual,
            Category::Adrenal => &self.adrenal,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct History {
    store: Vec<MeasurementSnapshot>,
    timeline: Vec<SnapshotId>,
    current: Option<SnapshotId>,
    previous: Option<SnapshotId>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay `append_snapshot` over `snapshots` in order.
    pub fn from_snapshots<I>(snapshots: I) -> Self
    where
        I: IntoIterator<Item = MeasurementSnapshot>,
    {
        let mut history = Self::new();
        for snapshot in snapshots {
            history.append_snapshot(snapshot);
        }
        history
    }

    fn store(&mut self, snapshot: MeasurementSnapshot) -> SnapshotId {
        let id = SnapshotId(self.store.len());
        self.store.push(snapshot);
        id
    }

    fn advance(&mut self, id: SnapshotId) {
        self.previous = self.current;
        self.current = Some(id);
    }

    /// Record a new visit: it joins the timeline and becomes current.
    pub fn append_snapshot(&mut self, snapshot: MeasurementSnapshot) -> SnapshotId {
        let id = self.store(snapshot);
        self.timeline.push(id);
        self.advance(id);
        debug!("Appended snapshot {} (timeline length {})", self.label(id), self.timeline.len());
        id
    }

    /// Swap the working sample: it becomes current without joining the
    /// timeline.
    pub fn replace_current(&mut self, snapshot: MeasurementSnapshot) -> SnapshotId {
        let id = self.store(snapshot);
        self.advance(id);
        debug!("Replaced current snapshot with {}", self.label(id));
        id
    }

    fn label(&self, id: SnapshotId) -> &str {
        self.get(id).map(MeasurementSnapshot::label).unwrap_or("?")
    }

    pub fn get(&self, id: SnapshotId) -> Option<&MeasurementSnapshot> {
        self.store.get(id.0)
    }

    pub fn current(&self) -> Option<&MeasurementSnapshot> {
        self.current.and_then(|id| self.get(id))
    }

    pub fn previous(&self) -> Option<&MeasurementSnapshot> {
        self.previous.and_then(|id| self.get(id))
    }

    /// Snapshots on the timeline, oldest first.
    pub fn timeline(&self) -> impl Iterator<Item = &MeasurementSnapshot> {
        self.timeline.iter().filter_map(|id| self.get(*id))
    }

    /// Number of timepoints on the timeline.
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    /// Recompute composites for every timepoint with the given weights.
    pub fn recompute_series(&self, weights: &WeightConfig, reference: &ReferenceTable) -> CompositeSeries {
        let mut series = CompositeSeries::default();
        for snapshot in self.timeline() {
            let composites = compute_composites(snapshot, weights, reference);
            series.labels.push(snapshot.label().to_string());
            series.menstrual.push(composites.menstrual);
            series.adrenal.push(composites.adrenal);
        }
        series
    }

    /// Composites of the working snapshot.
    pub fn current_composites(&self, weights: &WeightConfig, reference: &ReferenceTable) -> Option<Composites> {
        self.current().map(|s| compute_composites(s, weights, reference))
    }

    /// Change from previous to current, `None` until both exist.
    pub fn delta(&self, weights: &WeightConfig, reference: &ReferenceTable) -> Option<CompositeDelta> {
        let previous = compute_composites(self.previous()?, weights, reference);
        let current = self.current_composites(weights, reference)?;
        Some(CompositeDelta::between(current, previous))
    }
}
