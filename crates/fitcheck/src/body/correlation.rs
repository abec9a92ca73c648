//! Correlation-based propagation of measured deviations.

use super::field::{BodyDimensions, BodyField, Gender, PartialBody};
use super::round_to_tenth;
use super::table::StatisticalBodyTable;

/// Pairwise co-variation strengths between body fields.
///
/// Rows are the source (measured) field, columns the target field, both in
/// [`BodyField::ALL`] order. Entries are specified per direction and need not
/// be symmetric. A zero entry means "no relationship".
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    coefficients: [[f64; 7]; 7],
}

/// Built-in coefficients.
///
/// Order: shoulder, chest, waist, hip, neck, arm, torso.
#[rustfmt::skip]
const DEFAULT_COEFFICIENTS: [[f64; 7]; 7] = [
    [1.00, 0.70, 0.40, 0.40, 0.60, 0.50, 0.40],
    [0.70, 1.00, 0.80, 0.70, 0.70, 0.20, 0.30],
    [0.40, 0.80, 1.00, 0.80, 0.60, 0.10, 0.20],
    [0.35, 0.70, 0.80, 1.00, 0.50, 0.10, 0.20],
    [0.60, 0.75, 0.60, 0.50, 1.00, 0.20, 0.30],
    [0.50, 0.20, 0.10, 0.10, 0.20, 1.00, 0.60],
    [0.40, 0.30, 0.20, 0.20, 0.30, 0.60, 1.00],
];

impl CorrelationMatrix {
    /// Build a matrix from raw coefficients, clamped to `[0, 1]`.
    pub fn new(coefficients: [[f64; 7]; 7]) -> Self {
        let coefficients =
            coefficients.map(|row| row.map(|c| if c.is_finite() { c.clamp(0.0, 1.0) } else { 0.0 }));
        Self { coefficients }
    }

    /// Coefficient from a measured `source` to an unmeasured `target`.
    pub fn coefficient(&self, source: BodyField, target: BodyField) -> f64 {
        self.coefficients[source.index()][target.index()]
    }
}

impl Default for CorrelationMatrix {
    fn default() -> Self {
        Self {
            coefficients: DEFAULT_COEFFICIENTS,
        }
    }
}

/// Completes a body from a statistical baseline and partial measurements.
#[derive(Debug, Clone)]
pub struct CorrelationEstimator<'a> {
    table: &'a StatisticalBodyTable,
    matrix: CorrelationMatrix,
}

impl CorrelationEstimator<'static> {
    /// Estimator over the built-in table and coefficients.
    pub fn new() -> Self {
        Self::with_table(StatisticalBodyTable::builtin())
    }
}

impl Default for CorrelationEstimator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CorrelationEstimator<'a> {
    pub fn with_table(table: &'a StatisticalBodyTable) -> Self {
        Self {
            table,
            matrix: CorrelationMatrix::default(),
        }
    }

    pub fn with_matrix(mut self, matrix: CorrelationMatrix) -> Self {
        self.matrix = matrix;
        self
    }

    pub fn matrix(&self) -> &CorrelationMatrix {
        &self.matrix
    }

    /// The unadjusted statistical body for a height/weight.
    pub fn baseline(&self, gender: Gender, height: f64, weight: f64) -> BodyDimensions {
        self.table.lookup(gender, height, weight).dimensions()
    }

    /// Estimate every body field.
    ///
    /// Overridden fields are substituted verbatim. Every other field is
    /// scaled by the correlation-weighted mean of the overrides' fractional
    /// deviations from baseline, damped by a confidence that is capped at 1.
    /// Overrides that are not finite and positive are ignored.
    pub fn estimate(
        &self,
        gender: Gender,
        height: f64,
        weight: f64,
        overrides: &PartialBody<f64>,
    ) -> BodyDimensions {
        let baseline = self.baseline(gender, height, weight);
        self.propagate(&baseline, overrides)
    }

    /// Apply overrides to an already computed baseline.
    pub fn propagate(&self, baseline: &BodyDimensions, overrides: &PartialBody<f64>) -> BodyDimensions {
        let mut result = *baseline;
        let mut deviations: PartialBody<f64> = PartialBody::new();
        let mut override_count = 0usize;

        for (field, &value) in overrides.iter() {
            if !value.is_finite() || value <= 0.0 {
                log::warn!("ignoring {} override {}", field, value);
                continue;
            }
            override_count += 1;

            let base = baseline.get(field);
            if base > 0.0 {
                deviations.set(field, (value - base) / base);
            } else {
                log::debug!("baseline {} is {}; no deviation recorded", field, base);
            }
            result.set(field, value);
        }

        if override_count == 0 {
            return result;
        }

        for target in BodyField::ALL {
            if overrides.get(target).is_some_and(|v| v.is_finite() && *v > 0.0) {
                continue;
            }

            let mut weighted_deviation = 0.0;
            let mut total_correlation = 0.0;
            for (source, deviation) in deviations.iter() {
                let corr = self.matrix.coefficient(source, target);
                weighted_deviation += deviation * corr;
                total_correlation += corr;
            }

            if total_correlation <= 0.0 {
                continue;
            }

            let avg_deviation = weighted_deviation / total_correlation;
            let confidence = (total_correlation / override_count as f64).min(1.0);
            let adjustment = avg_deviation * confidence;
            let base = baseline.get(target);
            result.set(target, round_to_tenth(base * (1.0 + adjustment)));

            log::trace!(
                "{}: deviation {:.4} x confidence {:.3}",
                target,
                avg_deviation,
                confidence
            );
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> BodyDimensions {
        BodyDimensions {
            shoulder_width: 45.0,
            chest_circ: 100.0,
            waist_circ: 80.0,
            hip_circ: 95.0,
            neck_circ: 38.0,
            arm_length: 60.0,
            torso_length: 62.0,
        }
    }

    #[test]
    fn test_no_overrides_is_identity() {
        let estimator = CorrelationEstimator::new();
        let result = estimator.propagate(&baseline(), &PartialBody::new());
        assert_eq!(result, baseline());
    }

    #[test]
    fn test_override_is_substituted_verbatim() {
        let estimator = CorrelationEstimator::new();
        let overrides = PartialBody::new().with(BodyField::ChestCirc, 110.37);
        let result = estimator.propagate(&baseline(), &overrides);
        assert_eq!(result.chest_circ, 110.37);
    }

    #[test]
    fn test_single_override_propagates_by_correlation() {
        let estimator = CorrelationEstimator::new();
        // +10% chest
        let overrides = PartialBody::new().with(BodyField::ChestCirc, 110.0);
        let result = estimator.propagate(&baseline(), &overrides);

        // waist: corr 0.8, confidence 0.8 -> +8%
        assert_eq!(result.waist_circ, 86.4);
        // neck: corr 0.7 -> +7%
        assert_eq!(result.neck_circ, 40.7);
        // arm: corr 0.2 -> +2%
        assert_eq!(result.arm_length, 61.2);
        assert!(result.waist_circ - 80.0 > result.arm_length - 60.0);
    }

    #[test]
    fn test_two_overrides_average_deviation() {
        let estimator = CorrelationEstimator::new();
        // chest +10%, hip -10%
        let overrides = PartialBody::new()
            .with(BodyField::ChestCirc, 110.0)
            .with(BodyField::HipCirc, 85.5);
        let result = estimator.propagate(&baseline(), &overrides);

        // waist: (0.1*0.8 + -0.1*0.8) / 1.6 = 0 -> unchanged
        assert_eq!(result.waist_circ, 80.0);
        assert_eq!(result.hip_circ, 85.5);
    }

    #[test]
    fn test_zero_correlation_leaves_baseline() {
        let mut coefficients = [[0.0; 7]; 7];
        coefficients[BodyField::ChestCirc.index()][BodyField::WaistCirc.index()] = 1.0;
        let estimator = CorrelationEstimator::new().with_matrix(CorrelationMatrix::new(coefficients));

        let overrides = PartialBody::new().with(BodyField::ChestCirc, 120.0);
        let result = estimator.propagate(&baseline(), &overrides);

        assert_eq!(result.waist_circ, 96.0);
        assert_eq!(result.arm_length, 60.0);
        assert_eq!(result.shoulder_width, 45.0);
    }

    #[test]
    fn test_invalid_override_ignored() {
        let estimator = CorrelationEstimator::new();
        let overrides = PartialBody::new()
            .with(BodyField::ChestCirc, -5.0)
            .with(BodyField::WaistCirc, f64::NAN);
        let result = estimator.propagate(&baseline(), &overrides);
        assert_eq!(result, baseline());
    }

    #[test]
    fn test_zero_baseline_skips_deviation() {
        let estimator = CorrelationEstimator::new();
        let mut base = baseline();
        base.chest_circ = 0.0;
        let overrides = PartialBody::new().with(BodyField::ChestCirc, 100.0);
        let result = estimator.propagate(&base, &overrides);

        assert_eq!(result.chest_circ, 100.0);
        assert_eq!(result.waist_circ, 80.0);
    }

    #[test]
    fn test_estimate_uses_builtin_baseline() {
        let estimator = CorrelationEstimator::new();
        let base = estimator.baseline(Gender::Female, 162.0, 55.0);
        let result = estimator.estimate(Gender::Female, 162.0, 55.0, &PartialBody::new());
        assert_eq!(result, base);
    }
}
