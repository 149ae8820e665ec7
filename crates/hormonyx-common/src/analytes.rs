//! Analyte names, ratio identifiers, and the sub-score / category taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── Analyte names ─────────────────────────────────────────────────────────────

pub const PROGESTERONE: &str = "Progesterone";
pub const PREGNENOLONE: &str = "Pregnenolone";
pub const HYDROXYPROGESTERONE_17: &str = "17-Hydroxyprogesterone";
pub const ESTRONE: &str = "Estrone";
pub const ESTRADIOL: &str = "Estradiol";
pub const ESTRIOL: &str = "Estriol";
pub const HYDROXYESTRONE_2: &str = "2-Hydroxyestrone";
pub const TESTOSTERONE: &str = "Testosterone";
pub const DHEA: &str = "DHEA";
pub const DHT: &str = "DHT";
pub const ANDROSTENEDIONE: &str = "Androstenedione";
pub const ANDROSTERONE: &str = "Androsterone";
pub const HYDROXYTESTOSTERONE: &str = "Hydroxytestosterone";
pub const CORTISOL: &str = "Cortisol";
pub const CORTISONE: &str = "Cortisone";
pub const CORTICOSTERONE: &str = "Corticosterone";
pub const ALDOSTERONE: &str = "Aldosterone";

// ── Ratios ────────────────────────────────────────────────────────────────────

/// A clinically meaningful quotient of two raw analyte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ratio {
    #[serde(rename = "ratio_Cortisol_to_DHEA")]
    CortisolToDhea,
    #[serde(rename = "ratio_Cortisol_to_Cortisone")]
    CortisolToCortisone,
    #[serde(rename = "ratio_Estradiol_to_Estrone")]
    EstradiolToEstrone,
    #[serde(rename = "ratio_2-Hydroxyestrone_to_Estrone")]
    HydroxyestroneToEstrone,
}

impl Ratio {
    pub const ALL: [Ratio; 4] = [
        Ratio::CortisolToDhea,
        Ratio::CortisolToCortisone,
        Ratio::EstradiolToEstrone,
        Ratio::HydroxyestroneToEstrone,
    ];

    /// Identifier used as a weight key in `WeightConfig`.
    pub fn key(&self) -> &'static str {
        match self {
            Ratio::CortisolToDhea => "ratio_Cortisol_to_DHEA",
            Ratio::CortisolToCortisone => "ratio_Cortisol_to_Cortisone",
            Ratio::EstradiolToEstrone => "ratio_Estradiol_to_Estrone",
            Ratio::HydroxyestroneToEstrone => "ratio_2-Hydroxyestrone_to_Estrone",
        }
    }

    pub fn from_key(key: &str) -> Option<Ratio> {
        Ratio::ALL.into_iter().find(|r| r.key() == key)
    }

    pub fn numerator(&self) -> &'static str {
        match self {
            Ratio::CortisolToDhea | Ratio::CortisolToCortisone => CORTISOL,
            Ratio::EstradiolToEstrone => ESTRADIOL,
            Ratio::HydroxyestroneToEstrone => HYDROXYESTRONE_2,
        }
    }

    pub fn denominator(&self) -> &'static str {
        match self {
            Ratio::CortisolToDhea => DHEA,
            Ratio::CortisolToCortisone => CORTISONE,
            Ratio::EstradiolToEstrone | Ratio::HydroxyestroneToEstrone => ESTRONE,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator(), self.denominator())
    }
}

// ── Categories and sub-scores ─────────────────────────────────────────────────

/// Top-level composite category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Menstrual irregularities & infertility.
    Menstrual,
    /// Adrenal & endocrine disorders.
    Adrenal,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Menstrual, Category::Adrenal];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Menstrual => "Menstrual/Fertility",
            Category::Adrenal => "Adrenal/Endocrine",
        }
    }

    /// Sub-scores feeding this category, in display order.
    pub fn sub_scores(&self) -> &'static [SubScore] {
        match self {
            Category::Menstrual => &[
                SubScore::EstrogenBalance,
                SubScore::ProgesteroneSufficiency,
                SubScore::MenopauseTransition,
            ],
            Category::Adrenal => &[
                SubScore::CortisolHomeostasis,
                SubScore::AdrenalAdaptability,
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Intermediate weighted aggregate feeding a category composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubScore {
    EstrogenBalance,
    ProgesteroneSufficiency,
    MenopauseTransition,
    CortisolHomeostasis,
    AdrenalAdaptability,
}

impl SubScore {
    pub const ALL: [SubScore; 5] = [
        SubScore::EstrogenBalance,
        SubScore::ProgesteroneSufficiency,
        SubScore::MenopauseTransition,
        SubScore::CortisolHomeostasis,
        SubScore::AdrenalAdaptability,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SubScore::EstrogenBalance => "Estrogen Balance",
            SubScore::ProgesteroneSufficiency => "Progesterone Sufficiency",
            SubScore::MenopauseTransition => "Menopause Transition Index",
            SubScore::CortisolHomeostasis => "Cortisol Homeostasis",
            SubScore::AdrenalAdaptability => "Adrenal Adaptability",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            SubScore::EstrogenBalance
            | SubScore::ProgesteroneSufficiency
            | SubScore::MenopauseTransition => Category::Menstrual,
            SubScore::CortisolHomeostasis | SubScore::AdrenalAdaptability => Category::Adrenal,
        }
    }
}

impl fmt::Display for SubScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
