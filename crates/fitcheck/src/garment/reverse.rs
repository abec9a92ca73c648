//! Reverse estimation: from owned-garment measurements and fit feedback to
//! body measurements.

use serde::{Deserialize, Serialize};

use crate::body::{BodyField, PartialBody, round_to_tenth};
use crate::chart::{MeasurementKey, ParsedSizeChart, SizeRow};

use super::measurement::{
    AnchorPoint, ClothingCategory, FitFeedback, ReverseGarment, ReverseMeasurement,
};

/// Conversion applied to a raw garment measurement before feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClothingTransform {
    /// A flat (laid-out) width doubled into a circumference.
    HalfToFull,
}

impl ClothingTransform {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            ClothingTransform::HalfToFull => value * 2.0,
        }
    }
}

/// Associates an unordered anchor pair with a body field.
#[derive(Debug, Clone, PartialEq)]
pub struct ReverseRule {
    pub anchors: (AnchorPoint, AnchorPoint),
    pub field: BodyField,
    /// Feedback offsets count twice for circumferences.
    pub circumference: bool,
    pub transform: Option<ClothingTransform>,
}

impl ReverseRule {
    pub fn matches(&self, measurement: &ReverseMeasurement) -> bool {
        measurement.spans(&self.anchors.0, &self.anchors.1)
    }

    /// Body value implied by a matching measurement.
    pub fn body_value(&self, measurement: &ReverseMeasurement) -> f64 {
        let clothing = match self.transform {
            Some(t) => t.apply(measurement.value),
            None => measurement.value,
        };
        let factor = if self.circumference { 2.0 } else { 1.0 };
        clothing + measurement.feedback.offset_cm() * factor
    }
}

/// Built-in mapping rules.
pub const DEFAULT_RULES: &[ReverseRule] = &[
    ReverseRule {
        anchors: (AnchorPoint::ShoulderLeft, AnchorPoint::ShoulderRight),
        field: BodyField::ShoulderWidth,
        circumference: false,
        transform: None,
    },
    ReverseRule {
        anchors: (AnchorPoint::ArmpitLeft, AnchorPoint::ArmpitRight),
        field: BodyField::ChestCirc,
        circumference: true,
        transform: Some(ClothingTransform::HalfToFull),
    },
    ReverseRule {
        anchors: (AnchorPoint::WaistLeft, AnchorPoint::WaistRight),
        field: BodyField::WaistCirc,
        circumference: true,
        transform: Some(ClothingTransform::HalfToFull),
    },
    ReverseRule {
        anchors: (AnchorPoint::HipLeft, AnchorPoint::HipRight),
        field: BodyField::HipCirc,
        circumference: true,
        transform: Some(ClothingTransform::HalfToFull),
    },
    ReverseRule {
        anchors: (AnchorPoint::CollarButton, AnchorPoint::CollarButtonhole),
        field: BodyField::NeckCirc,
        circumference: true,
        transform: None,
    },
    ReverseRule {
        anchors: (AnchorPoint::ShoulderLeft, AnchorPoint::CuffLeft),
        field: BodyField::ArmLength,
        circumference: false,
        transform: None,
    },
    ReverseRule {
        anchors: (AnchorPoint::ShoulderRight, AnchorPoint::CuffRight),
        field: BodyField::ArmLength,
        circumference: false,
        transform: None,
    },
    ReverseRule {
        anchors: (AnchorPoint::NeckBack, AnchorPoint::WaistBack),
        field: BodyField::TorsoLength,
        circumference: false,
        transform: None,
    },
];

/// Averaged estimate for one body field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyEstimate {
    /// Mean of the contributing observations, in cm.
    pub value: f64,
    /// Number of observations averaged.
    pub count: usize,
}

impl PartialBody<BodyEstimate> {
    /// Drop the counts, keeping only the values.
    pub fn values(&self) -> PartialBody<f64> {
        let mut values = PartialBody::new();
        for (field, estimate) in self.iter() {
            values.set(field, estimate.value);
        }
        values
    }
}

/// Maps garment measurements to body measurements through a rule table.
#[derive(Debug, Clone)]
pub struct ReverseEstimator {
    rules: Vec<ReverseRule>,
}

impl Default for ReverseEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReverseEstimator {
    /// Estimator with the built-in rules.
    pub fn new() -> Self {
        Self::with_rules(DEFAULT_RULES.to_vec())
    }

    pub fn with_rules(rules: Vec<ReverseRule>) -> Self {
        Self { rules }
    }

    /// Add a rule (builder style).
    pub fn with_rule(mut self, rule: ReverseRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[ReverseRule] {
        &self.rules
    }

    /// Average every matching observation per body field.
    pub fn estimate(&self, garments: &[ReverseGarment]) -> PartialBody<BodyEstimate> {
        let mut sums: PartialBody<(f64, usize)> = PartialBody::new();

        for garment in garments {
            for measurement in &garment.measurements {
                if !measurement.value.is_finite() || measurement.value <= 0.0 {
                    log::debug!(
                        "garment {}: skipping measurement with value {}",
                        garment.id,
                        measurement.value
                    );
                    continue;
                }

                for rule in self.rules.iter().filter(|r| r.matches(measurement)) {
                    let body_value = rule.body_value(measurement);
                    let (sum, count) = sums.get(rule.field).copied().unwrap_or((0.0, 0));
                    sums.set(rule.field, (sum + body_value, count + 1));
                }
            }
        }

        let mut estimates = PartialBody::new();
        for (field, &(sum, count)) in sums.iter() {
            estimates.set(
                field,
                BodyEstimate {
                    value: round_to_tenth(sum / count as f64),
                    count,
                },
            );
        }
        estimates
    }
}

/// Estimate with the built-in rules.
pub fn estimate_body_from_garments(garments: &[ReverseGarment]) -> PartialBody<BodyEstimate> {
    ReverseEstimator::new().estimate(garments)
}

/// Anchor pair a chart column is measured across, if any.
fn chart_anchors(key: MeasurementKey) -> Option<(AnchorPoint, AnchorPoint)> {
    match key {
        MeasurementKey::ShoulderWidth => Some((AnchorPoint::ShoulderLeft, AnchorPoint::ShoulderRight)),
        MeasurementKey::ChestWidth => Some((AnchorPoint::ArmpitLeft, AnchorPoint::ArmpitRight)),
        MeasurementKey::WaistCirc => Some((AnchorPoint::WaistLeft, AnchorPoint::WaistRight)),
        MeasurementKey::HipCirc => Some((AnchorPoint::HipLeft, AnchorPoint::HipRight)),
        MeasurementKey::HemCirc => Some((AnchorPoint::HemLeft, AnchorPoint::HemRight)),
        MeasurementKey::SleeveLength => Some((AnchorPoint::ShoulderLeft, AnchorPoint::CuffLeft)),
        MeasurementKey::TotalLength => Some((AnchorPoint::NeckBack, AnchorPoint::HemBack)),
        MeasurementKey::NeckCirc => Some((AnchorPoint::CollarButton, AnchorPoint::CollarButtonhole)),
        _ => None,
    }
}

/// Turn a chart row the shopper has worn into a garment record, so its
/// values go through the same rules as hand-measured garments.
///
/// Circumference columns are halved to flat widths, except the collar,
/// whose rule expects the full circumference.
pub fn garment_from_chart_row(
    chart: &ParsedSizeChart,
    row: &SizeRow,
    category: ClothingCategory,
    feedback: FitFeedback,
) -> ReverseGarment {
    let mut garment = ReverseGarment::new(format!("chart:{}", row.label), category);
    for key in row.measurements.keys() {
        let Some((start, end)) = chart_anchors(*key) else {
            continue;
        };
        let value = if *key == MeasurementKey::NeckCirc {
            chart.circumference_value(row, *key)
        } else {
            chart.flat_value(row, *key)
        };
        if let Some(value) = value {
            garment
                .measurements
                .push(ReverseMeasurement::new(start, end, value, feedback));
        }
    }
    garment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::parse_size_chart;

    fn garment(measurements: Vec<ReverseMeasurement>) -> ReverseGarment {
        ReverseGarment {
            id: "g1".into(),
            category: ClothingCategory::Top,
            measurements,
        }
    }

    #[test]
    fn test_very_tight_shoulder() {
        let g = garment(vec![ReverseMeasurement::new(
            AnchorPoint::ShoulderLeft,
            AnchorPoint::ShoulderRight,
            45.0,
            FitFeedback::VeryTight,
        )]);
        let estimates = estimate_body_from_garments(&[g]);
        assert_eq!(
            estimates.get(BodyField::ShoulderWidth),
            Some(&BodyEstimate { value: 48.0, count: 1 })
        );
        assert_eq!(estimates.len(), 1);
    }

    #[test]
    fn test_good_chest_is_doubled() {
        let g = garment(vec![ReverseMeasurement::new(
            AnchorPoint::ArmpitRight,
            AnchorPoint::ArmpitLeft,
            50.0,
            FitFeedback::Good,
        )]);
        let estimates = estimate_body_from_garments(&[g]);
        assert_eq!(estimates.get(BodyField::ChestCirc).unwrap().value, 98.0);
    }

    #[test]
    fn test_average_across_garments() {
        let a = garment(vec![ReverseMeasurement::new(
            AnchorPoint::ArmpitLeft,
            AnchorPoint::ArmpitRight,
            50.0,
            FitFeedback::Good,
        )]);
        let b = garment(vec![ReverseMeasurement::new(
            AnchorPoint::ArmpitLeft,
            AnchorPoint::ArmpitRight,
            52.0,
            FitFeedback::Loose,
        )]);
        // 98 and 104 - 8 = 96
        let estimates = estimate_body_from_garments(&[a, b]);
        assert_eq!(
            estimates.get(BodyField::ChestCirc),
            Some(&BodyEstimate { value: 97.0, count: 2 })
        );
    }

    #[test]
    fn test_both_sleeves_count() {
        let g = garment(vec![
            ReverseMeasurement::new(AnchorPoint::CuffLeft, AnchorPoint::ShoulderLeft, 60.0, FitFeedback::Tight),
            ReverseMeasurement::new(AnchorPoint::ShoulderRight, AnchorPoint::CuffRight, 61.0, FitFeedback::Tight),
        ]);
        let estimates = estimate_body_from_garments(&[g]);
        assert_eq!(
            estimates.get(BodyField::ArmLength),
            Some(&BodyEstimate { value: 61.5, count: 2 })
        );
    }

    #[test]
    fn test_unmatched_measurements_ignored() {
        let g = garment(vec![
            ReverseMeasurement::new(AnchorPoint::HemLeft, AnchorPoint::HemRight, 55.0, FitFeedback::Good),
            ReverseMeasurement::new(AnchorPoint::ShoulderLeft, AnchorPoint::ShoulderRight, -1.0, FitFeedback::Good),
        ]);
        assert!(estimate_body_from_garments(&[g]).is_empty());
        assert!(estimate_body_from_garments(&[]).is_empty());
    }

    #[test]
    fn test_unknown_anchors_contribute_nothing() {
        let thigh = ReverseMeasurement::new(
            AnchorPoint::from_id("thigh_left"),
            AnchorPoint::from_id("thigh_right"),
            31.0,
            FitFeedback::Good,
        );
        let g = ReverseGarment::new("jeans", ClothingCategory::Pants)
            .with_measurement(thigh.clone())
            .with_measurement(ReverseMeasurement::new(
                AnchorPoint::WaistLeft,
                AnchorPoint::WaistRight,
                40.0,
                FitFeedback::Good,
            ));
        let estimates = estimate_body_from_garments(&[g]);
        assert_eq!(estimates.len(), 1);
        assert_eq!(estimates.get(BodyField::WaistCirc).unwrap().value, 78.0);

        // A caller-supplied rule can still pick the identifier up.
        let estimator = ReverseEstimator::new().with_rule(ReverseRule {
            anchors: (AnchorPoint::from_id("thigh_left"), AnchorPoint::from_id("thigh_right")),
            field: BodyField::HipCirc,
            circumference: true,
            transform: Some(ClothingTransform::HalfToFull),
        });
        let only_thigh = ReverseGarment::new("shorts", ClothingCategory::Pants).with_measurement(thigh);
        assert_eq!(estimator.estimate(&[only_thigh]).get(BodyField::HipCirc).unwrap().value, 60.0);
    }

    #[test]
    fn test_custom_rule() {
        let estimator = ReverseEstimator::new().with_rule(ReverseRule {
            anchors: (AnchorPoint::HemLeft, AnchorPoint::HemRight),
            field: BodyField::HipCirc,
            circumference: true,
            transform: Some(ClothingTransform::HalfToFull),
        });
        let g = garment(vec![ReverseMeasurement::new(
            AnchorPoint::HemLeft,
            AnchorPoint::HemRight,
            50.0,
            FitFeedback::Tight,
        )]);
        let estimates = estimator.estimate(&[g]);
        assert_eq!(estimates.get(BodyField::HipCirc).unwrap().value, 102.0);
    }

    #[test]
    fn test_values_drop_counts() {
        let mut estimates = PartialBody::new();
        estimates.set(BodyField::HipCirc, BodyEstimate { value: 96.5, count: 3 });
        assert_eq!(estimates.values().get(BodyField::HipCirc), Some(&96.5));
    }

    #[test]
    fn test_garment_from_chart_row() {
        let chart = parse_size_chart("사이즈\t어깨너비\t가슴둘레\t총장\t색상\nM\t45\t106\t69\t검정").unwrap();
        let row = chart.row("M").unwrap();
        let g = garment_from_chart_row(&chart, row, ClothingCategory::Top, FitFeedback::Good);

        assert_eq!(g.id, "chart:M");
        assert_eq!(g.measurements.len(), 3);
        // 가슴둘레 is a full circumference: halved to 53, then doubled back by the rule.
        let chest = g
            .measurements
            .iter()
            .find(|m| m.spans(&AnchorPoint::ArmpitLeft, &AnchorPoint::ArmpitRight))
            .unwrap();
        assert_eq!(chest.value, 53.0);

        let estimates = estimate_body_from_garments(&[g]);
        assert_eq!(estimates.get(BodyField::ChestCirc).unwrap().value, 104.0);
        assert_eq!(estimates.get(BodyField::ShoulderWidth).unwrap().value, 44.0);
    }
}
