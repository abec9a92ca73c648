//! Body estimation: statistical baseline, correlation propagation, and
//! override precedence.

mod correlation;
mod field;
mod merge;
mod reference;
mod table;

pub use correlation::{CorrelationEstimator, CorrelationMatrix};
pub use field::{BodyDimensions, BodyField, Gender, PartialBody};
pub use merge::{MERGE_PRIORITY, OverrideLayers, OverrideSource, Provenance};
pub use table::{AnthropometricEntry, Band, LookupConfig, StatisticalBodyTable, lookup_reference};

/// Round to one decimal place.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
