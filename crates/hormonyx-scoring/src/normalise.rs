//! Primitive score transforms.
//!
//! Every function here is total: absent or degenerate input maps to the
//! neutral score (50) rather than failing.

/// Score returned when the inputs cannot be interpreted.
pub const NEUTRAL_SCORE: u8 = 50;

/// Substitute for a zero half-width so division never faults.
const HALF_WIDTH_EPSILON: f64 = 1e-6;

/// Bound `n` to `[lo, hi]`.
pub fn clamp(n: f64, lo: f64, hi: f64) -> f64 {
    n.max(lo).min(hi)
}

/// Round to the nearest integer with halves going toward +∞
/// (so -2.5 → -2 and 2.5 → 3).
pub fn round_half_up(x: f64) -> f64 {
    // `(x + 0.5).floor()` would lose the fraction of 0.49999999999999994.
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round, clamp to [0, 100] and narrow to a score.
pub(crate) fn to_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return NEUTRAL_SCORE;
    }
    clamp(round_half_up(raw), 0.0, 100.0) as u8
}

/// Map a value to 0–100 where 100 is the midpoint of `[low, high]`,
/// 50 is either edge, and scores keep falling outside the band.
///
/// Returns 50 when any input is absent or non-finite, or `low >= high`.
pub fn range_centered_score(value: Option<f64>, low: Option<f64>, high: Option<f64>) -> u8 {
    let (value, low, high) = match (value, low, high) {
        (Some(v), Some(l), Some(h)) if v.is_finite() && l.is_finite() && h.is_finite() && l < h => {
            (v, l, h)
        }
        _ => return NEUTRAL_SCORE,
    };

    let mid = (low + high) / 2.0;
    let mut half = (high - low) / 2.0;
    if half == 0.0 {
        half = HALF_WIDTH_EPSILON;
    }
    let dist = (value - mid).abs();
    let normalized = dist / half;

    let base = if value >= low && value <= high {
        100.0 - normalized * 50.0
    } else {
        100.0 - (1.0 + (dist - half) / half) * 50.0
    };

    to_score(base)
}

/// Score how close `actual` is to `target`: 100 on target, 0 at 100%
/// relative deviation or more.
///
/// Returns 50 when either input is absent or non-finite, or `target == 0`.
pub fn ratio_score(actual: Option<f64>, target: Option<f64>) -> u8 {
    let (actual, target) = match (actual, target) {
        (Some(a), Some(t)) if a.is_finite() && t.is_finite() && t != 0.0 => (a, t),
        _ => return NEUTRAL_SCORE,
    };

    let deviation = (actual - target).abs() / target.abs();
    to_score(100.0 - deviation * 100.0)
}
