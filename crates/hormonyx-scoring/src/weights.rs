//! Fixed domain constants of the scoring hierarchy.
//!
//! These are the non-configurable tier: ratio targets, the fixed weights of
//! ratio inputs inside Estrogen Balance, and the category-level weights.
//! User-adjustable weights live in `hormonyx_common::WeightConfig`.

use hormonyx_common::{Category, Ratio, SubScore};

/// Target value each ratio is scored against.
pub fn ratio_target(ratio: Ratio) -> f64 {
    match ratio {
        Ratio::EstradiolToEstrone      => 0.6,
        Ratio::HydroxyestroneToEstrone => 0.1,
        Ratio::CortisolToDhea          => 0.08,
        Ratio::CortisolToCortisone     => 4.5,
    }
}

/// Ratio inputs with a fixed weight, added on top of a sub-score's
/// configurable inputs.
pub fn fixed_ratio_inputs(sub_score: SubScore) -> &'static [(Ratio, f64)] {
    match sub_score {
        SubScore::EstrogenBalance => &[
            (Ratio::EstradiolToEstrone, 2.0),
            (Ratio::HydroxyestroneToEstrone, 2.0),
        ],
        _ => &[],
    }
}

/// Sub-score weights of a category composite (3:2:1 and 3:2).
pub fn category_weights(category: Category) -> &'static [(SubScore, f64)] {
    match category {
        Category::Menstrual => &[
            (SubScore::EstrogenBalance, 3.0),
            (SubScore::ProgesteroneSufficiency, 2.0),
            (SubScore::MenopauseTransition, 1.0),
        ],
        Category::Adrenal => &[
            (SubScore::CortisolHomeostasis, 3.0),
            (SubScore::AdrenalAdaptability, 2.0),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_weights_cover_sub_scores() {
        for category in Category::ALL {
            let weighted: Vec<SubScore> =
                category_weights(category).iter().map(|(s, _)| *s).collect();
            assert_eq!(weighted, category.sub_scores());
        }
    }

    #[test]
    fn test_ratio_targets_nonzero() {
        for ratio in Ratio::ALL {
            assert!(ratio_target(ratio) > 0.0, "{ratio} target must be positive");
        }
    }

    #[test]
    fn test_only_estrogen_balance_has_fixed_ratios() {
        for sub in SubScore::ALL {
            let fixed = fixed_ratio_inputs(sub);
            assert_eq!(fixed.is_empty(), sub != SubScore::EstrogenBalance);
        }
    }
}
