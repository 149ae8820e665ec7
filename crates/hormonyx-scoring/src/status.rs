//! Status classification for individual measurements and scores.

use hormonyx_common::ReferenceRange;
use serde::{Deserialize, Serialize};

/// Where a measurement sits relative to its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeStatus {
    Low,
    Optimal,
    High,
    /// No value, or the range is missing or degenerate.
    Unknown,
}

pub fn range_status(value: Option<f64>, range: Option<&ReferenceRange>) -> RangeStatus {
    let (value, low, high) = match (value, range.and_then(|r| r.low), range.and_then(|r| r.high)) {
        (Some(v), Some(l), Some(h)) if l < h && v.is_finite() => (v, l, h),
        _ => return RangeStatus::Unknown,
    };

    if value < low {
        RangeStatus::Low
    } else if value > high {
        RangeStatus::High
    } else {
        RangeStatus::Optimal
    }
}

/// Colour band of a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 0–69
    Red,
    /// 70–90, and scores that are not available
    Yellow,
    /// 91–100
    Blue,
}

impl ScoreBand {
    pub fn from_score(score: Option<u8>) -> Self {
        match score {
            None => ScoreBand::Yellow,
            Some(s) if s <= 69 => ScoreBand::Red,
            Some(s) if s <= 90 => ScoreBand::Yellow,
            Some(_) => ScoreBand::Blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_status() {
        let range = ReferenceRange::new(5.0, 20.0, "ug/dL");
        assert_eq!(range_status(Some(4.9), Some(&range)), RangeStatus::Low);
        assert_eq!(range_status(Some(5.0), Some(&range)), RangeStatus::Optimal);
        assert_eq!(range_status(Some(20.0), Some(&range)), RangeStatus::Optimal);
        assert_eq!(range_status(Some(22.0), Some(&range)), RangeStatus::High);
    }

    #[test]
    fn test_range_status_unknown() {
        let inverted = ReferenceRange::new(20.0, 5.0, "ug/dL");
        assert_eq!(range_status(None, Some(&ReferenceRange::new(5.0, 20.0, ""))), RangeStatus::Unknown);
        assert_eq!(range_status(Some(10.0), None), RangeStatus::Unknown);
        assert_eq!(range_status(Some(10.0), Some(&inverted)), RangeStatus::Unknown);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ScoreBand::from_score(Some(0)), ScoreBand::Red);
        assert_eq!(ScoreBand::from_score(Some(69)), ScoreBand::Red);
        assert_eq!(ScoreBand::from_score(Some(70)), ScoreBand::Yellow);
        assert_eq!(ScoreBand::from_score(Some(90)), ScoreBand::Yellow);
        assert_eq!(ScoreBand::from_score(Some(91)), ScoreBand::Blue);
        assert_eq!(ScoreBand::from_score(None), ScoreBand::Yellow);
    }
}
