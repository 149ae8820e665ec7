//! hormonyx-common — Shared types, errors, and configuration used across all Hormonyx crates.

pub mod error;
pub mod analytes;
pub mod reference;
pub mod snapshot;
pub mod weight_config;
pub mod panel_config;

// Re-export commonly used types
pub use analytes::{Category, Ratio, SubScore};
pub use error::{HormonyxError, Result};
pub use panel_config::PanelConfig;
pub use reference::{ReferenceRange, ReferenceTable};
pub use snapshot::MeasurementSnapshot;
pub use weight_config::WeightConfig;
