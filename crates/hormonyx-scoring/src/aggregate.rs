//! Weighted averaging of scores into sub-scores and composites.

use serde::{Deserialize, Serialize};

use crate::normalise::to_score;

/// One input to a weighted average. Absent values and weights count as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightedItem {
    pub value: Option<f64>,
    pub weight: Option<f64>,
}

impl WeightedItem {
    pub fn new(value: f64, weight: f64) -> Self {
        Self {
            value: Some(value),
            weight: Some(weight),
        }
    }

    pub fn score(score: u8, weight: f64) -> Self {
        Self::new(f64::from(score), weight)
    }

    /// Negative and non-finite weights contribute nothing.
    fn effective_weight(&self) -> f64 {
        match self.weight {
            Some(w) if w.is_finite() && w > 0.0 => w,
            _ => 0.0,
        }
    }

    fn effective_value(&self) -> f64 {
        match self.value {
            Some(v) if v.is_finite() => v,
            _ => 0.0,
        }
    }
}

/// `round(Σ(w·v) / Σw)`, clamped to [0, 100]. Zero total weight yields 0.
pub fn weighted_average(items: &[WeightedItem]) -> u8 {
    let (sum_w, sum_wx) = items.iter().fold((0.0, 0.0), |(sum_w, sum_wx), item| {
        let w = item.effective_weight();
        (sum_w + w, sum_wx + w * item.effective_value())
    });

    if sum_w == 0.0 {
        return 0;
    }
    to_score(sum_wx / sum_w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(weighted_average(&[]), 0);
    }

    #[test]
    fn test_all_zero_weights_is_zero() {
        let items = [WeightedItem::new(80.0, 0.0), WeightedItem::new(60.0, 0.0)];
        assert_eq!(weighted_average(&items), 0);
    }

    #[test]
    fn test_basic_average() {
        // (3·80 + 1·40) / 4 = 70
        let items = [WeightedItem::new(80.0, 3.0), WeightedItem::new(40.0, 1.0)];
        assert_eq!(weighted_average(&items), 70);
    }

    #[test]
    fn test_absent_value_counts_as_zero() {
        let items = [
            WeightedItem::new(90.0, 1.0),
            WeightedItem { value: None, weight: Some(1.0) },
        ];
        assert_eq!(weighted_average(&items), 45);
    }

    #[test]
    fn test_absent_weight_contributes_nothing() {
        let items = [
            WeightedItem::new(90.0, 1.0),
            WeightedItem { value: Some(10.0), weight: None },
        ];
        assert_eq!(weighted_average(&items), 90);
    }

    #[test]
    fn test_negative_weight_ignored() {
        let items = [WeightedItem::new(90.0, 1.0), WeightedItem::new(10.0, -5.0)];
        assert_eq!(weighted_average(&items), 90);
    }

    #[test]
    fn test_rounds_half_up() {
        // (1·50 + 1·51) / 2 = 50.5
        let items = [WeightedItem::score(50, 1.0), WeightedItem::score(51, 1.0)];
        assert_eq!(weighted_average(&items), 51);
    }

    proptest! {
        /// Uniform values average to themselves regardless of weights
        #[test]
        fn uniform_values_preserved(
            v in 0u8..=100,
            weights in proptest::collection::vec(0.0..10.0f64, 1..8)
        ) {
            prop_assume!(weights.iter().sum::<f64>() > 0.0);
            let items: Vec<_> = weights.iter().map(|w| WeightedItem::score(v, *w)).collect();
            prop_assert_eq!(weighted_average(&items), v);
        }

        /// Raising the weight of an above-average input never lowers the result
        #[test]
        fn weight_monotonicity(
            scores in proptest::collection::vec(0u8..=100, 2..6),
            weights in proptest::collection::vec(0.1..5.0f64, 6),
            bump in 0.0..5.0f64,
        ) {
            let items: Vec<_> = scores
                .iter()
                .zip(weights.iter())
                .map(|(s, w)| WeightedItem::score(*s, *w))
                .collect();
            let before = weighted_average(&items);
            let sum_w: f64 = items.iter().map(|i| i.effective_weight()).sum();
            let exact = items.iter().map(|i| i.effective_weight() * i.effective_value()).sum::<f64>() / sum_w;

            if let Some(idx) = items.iter().position(|i| i.effective_value() > exact) {
                let mut bumped = items.clone();
                bumped[idx].weight = Some(weights[idx] + bump);
                prop_assert!(weighted_average(&bumped) >= before);
            }
        }
    }
}
