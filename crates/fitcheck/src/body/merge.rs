//! Precedence between override sources.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::field::{BodyField, PartialBody};

/// Where an override value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideSource {
    /// Typed in directly by the user.
    UserInput,
    /// Inferred from a size-chart row the user reported a fit for.
    SizeChart,
    /// Reverse-estimated from owned garments.
    GarmentDerived,
}

impl fmt::Display for OverrideSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverrideSource::UserInput => write!(f, "user input"),
            OverrideSource::SizeChart => write!(f, "size chart"),
            OverrideSource::GarmentDerived => write!(f, "garments"),
        }
    }
}

/// Merge order, highest precedence first. The statistical baseline sits
/// below all of these.
pub const MERGE_PRIORITY: [OverrideSource; 3] = [
    OverrideSource::UserInput,
    OverrideSource::SizeChart,
    OverrideSource::GarmentDerived,
];

/// Where a field of a finished estimate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Directly from an override layer.
    Override(OverrideSource),
    /// Statistical baseline shifted by correlated overrides.
    Propagated,
    /// Statistical baseline, untouched.
    Baseline,
}

/// Override values grouped by source.
#[derive(Debug, Clone, Default)]
pub struct OverrideLayers {
    user_input: PartialBody<f64>,
    size_chart: PartialBody<f64>,
    garment_derived: PartialBody<f64>,
}

impl OverrideLayers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the layer for a source.
    pub fn with(mut self, source: OverrideSource, values: PartialBody<f64>) -> Self {
        *self.layer_mut(source) = values;
        self
    }

    /// Set one value in one layer.
    pub fn set(&mut self, source: OverrideSource, field: BodyField, value: f64) {
        self.layer_mut(source).set(field, value);
    }

    /// Add values to a layer without replacing fields it already holds.
    pub fn fill(&mut self, source: OverrideSource, values: &PartialBody<f64>) {
        let layer = self.layer_mut(source);
        for (field, &value) in values.iter() {
            if !layer.contains(field) {
                layer.set(field, value);
            }
        }
    }

    pub fn layer(&self, source: OverrideSource) -> &PartialBody<f64> {
        match source {
            OverrideSource::UserInput => &self.user_input,
            OverrideSource::SizeChart => &self.size_chart,
            OverrideSource::GarmentDerived => &self.garment_derived,
        }
    }

    fn layer_mut(&mut self, source: OverrideSource) -> &mut PartialBody<f64> {
        match source {
            OverrideSource::UserInput => &mut self.user_input,
            OverrideSource::SizeChart => &mut self.size_chart,
            OverrideSource::GarmentDerived => &mut self.garment_derived,
        }
    }

    /// Source that wins for a field, following [`MERGE_PRIORITY`].
    pub fn winner(&self, field: BodyField) -> Option<OverrideSource> {
        MERGE_PRIORITY
            .into_iter()
            .find(|&source| self.layer(source).contains(field))
    }

    /// Collapse all layers into one override set.
    pub fn merged(&self) -> PartialBody<f64> {
        let mut merged = PartialBody::new();
        for field in BodyField::ALL {
            if let Some(source) = self.winner(field) {
                if let Some(&value) = self.layer(source).get(field) {
                    merged.set(field, value);
                }
            }
        }
        merged
    }

    pub fn is_empty(&self) -> bool {
        MERGE_PRIORITY
            .into_iter()
            .all(|source| self.layer(source).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let layers = OverrideLayers::new()
            .with(
                OverrideSource::GarmentDerived,
                PartialBody::new()
                    .with(BodyField::ChestCirc, 96.0)
                    .with(BodyField::WaistCirc, 82.0)
                    .with(BodyField::ArmLength, 61.0),
            )
            .with(
                OverrideSource::SizeChart,
                PartialBody::new()
                    .with(BodyField::ChestCirc, 98.0)
                    .with(BodyField::WaistCirc, 83.0),
            )
            .with(
                OverrideSource::UserInput,
                PartialBody::new().with(BodyField::ChestCirc, 100.0),
            );

        let merged = layers.merged();
        assert_eq!(merged.get(BodyField::ChestCirc), Some(&100.0));
        assert_eq!(merged.get(BodyField::WaistCirc), Some(&83.0));
        assert_eq!(merged.get(BodyField::ArmLength), Some(&61.0));
        assert_eq!(merged.get(BodyField::HipCirc), None);

        assert_eq!(layers.winner(BodyField::ChestCirc), Some(OverrideSource::UserInput));
        assert_eq!(layers.winner(BodyField::ArmLength), Some(OverrideSource::GarmentDerived));
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let mut a = OverrideLayers::new();
        a.set(OverrideSource::UserInput, BodyField::HipCirc, 99.0);
        a.set(OverrideSource::GarmentDerived, BodyField::HipCirc, 90.0);

        let mut b = OverrideLayers::new();
        b.set(OverrideSource::GarmentDerived, BodyField::HipCirc, 90.0);
        b.set(OverrideSource::UserInput, BodyField::HipCirc, 99.0);

        assert_eq!(a.merged(), b.merged());
    }

    #[test]
    fn test_fill_keeps_existing_values() {
        let mut layers = OverrideLayers::new();
        layers.set(OverrideSource::UserInput, BodyField::ChestCirc, 101.0);
        layers.fill(
            OverrideSource::UserInput,
            &PartialBody::new()
                .with(BodyField::ChestCirc, 95.0)
                .with(BodyField::NeckCirc, 39.0),
        );

        let user = layers.layer(OverrideSource::UserInput);
        assert_eq!(user.get(BodyField::ChestCirc), Some(&101.0));
        assert_eq!(user.get(BodyField::NeckCirc), Some(&39.0));
        assert!(layers.layer(OverrideSource::SizeChart).is_empty());
    }

    #[test]
    fn test_empty_layers() {
        let layers = OverrideLayers::new();
        assert!(layers.is_empty());
        assert!(layers.merged().is_empty());
    }
}
