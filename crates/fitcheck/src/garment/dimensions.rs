//! Garment dimensions for outline rendering.

use std::f64::consts::PI;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::chart::{MeasurementKey, MeasurementKind, ParsedSizeChart, SizeRow};

/// Flat garment widths and lengths, in cm.
///
/// Sleeve and hem widths are diameters: the full opening circumference
/// divided by pi.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingDimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoulder_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleeve_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleeve_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hem_width: Option<f64>,
}

impl ClothingDimensions {
    /// Dimensions of one chart row, honouring how each column was measured.
    pub fn from_chart_row(chart: &ParsedSizeChart, row: &SizeRow) -> Self {
        Self::build(|key| row.get(key).map(|v| (v, chart.kind(key))))
    }

    /// Dimensions from a bare measurement map, assuming each key's usual
    /// measuring convention.
    pub fn from_measurements(measurements: &IndexMap<MeasurementKey, f64>) -> Self {
        Self::build(|key| measurements.get(&key).map(|&v| (v, Some(key.default_kind()))))
    }

    fn build(lookup: impl Fn(MeasurementKey) -> Option<(f64, Option<MeasurementKind>)>) -> Self {
        let flat = |key| lookup(key).map(|(v, kind)| to_flat(v, kind));
        let diameter = |key| lookup(key).map(|(v, kind)| to_circumference(v, kind) / PI);

        Self {
            shoulder_width: flat(MeasurementKey::ShoulderWidth),
            chest_width: flat(MeasurementKey::ChestWidth),
            total_length: flat(MeasurementKey::TotalLength),
            sleeve_length: flat(MeasurementKey::SleeveLength),
            sleeve_width: diameter(MeasurementKey::SleeveCirc),
            hem_width: diameter(MeasurementKey::HemCirc),
        }
    }

    /// True when no dimension is known.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn to_flat(value: f64, kind: Option<MeasurementKind>) -> f64 {
    match kind {
        Some(MeasurementKind::Circumference) => value / 2.0,
        _ => value,
    }
}

fn to_circumference(value: f64, kind: Option<MeasurementKind>) -> f64 {
    match kind {
        Some(MeasurementKind::Flat) => value * 2.0,
        _ => value,
    }
}
