//! Per-part fit judgment of a size-chart row against a body.

use serde::{Deserialize, Serialize};

use crate::body::{BodyDimensions, round_to_tenth};
use crate::chart::{MeasurementKey, ParsedSizeChart, SizeRow};

use super::levels::{FitLevel, FitPart, classify_ease};

/// Fit of one part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitJudgment {
    pub part: FitPart,
    /// Garment value in the body field's unit (length or full circumference).
    pub cloth: f64,
    pub body: f64,
    /// `cloth - body`, positive when looser.
    pub ease: f64,
    pub level: FitLevel,
}

/// Best-fitting size of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRecommendation {
    pub label: String,
    /// Sum of level distances from `Good`; lower is better.
    pub score: u32,
    pub judgments: Vec<FitJudgment>,
}

/// Chart column compared against a part.
fn chart_key(part: FitPart) -> MeasurementKey {
    match part {
        FitPart::Shoulder => MeasurementKey::ShoulderWidth,
        FitPart::Chest => MeasurementKey::ChestWidth,
        FitPart::Waist => MeasurementKey::WaistCirc,
        FitPart::Hip => MeasurementKey::HipCirc,
        FitPart::Sleeve => MeasurementKey::SleeveLength,
        FitPart::Neck => MeasurementKey::NeckCirc,
    }
}

/// Garment value for a part in body units. Circumference parts use the
/// column's recorded kind, so a flat 53 cm chest becomes 106 cm.
fn cloth_value(chart: &ParsedSizeChart, row: &SizeRow, part: FitPart) -> Option<f64> {
    let key = chart_key(part);
    if part.body_field().is_circumference() {
        chart.circumference_value(row, key)
    } else {
        chart.flat_value(row, key)
    }
}

/// Judge every part the row has a value for.
pub fn judge_fit(chart: &ParsedSizeChart, row: &SizeRow, body: &BodyDimensions) -> Vec<FitJudgment> {
    FitPart::ALL
        .into_iter()
        .filter_map(|part| {
            let cloth = cloth_value(chart, row, part)?;
            let body = body.get(part.body_field());
            let ease = round_to_tenth(cloth - body);
            Some(FitJudgment {
                part,
                cloth,
                body,
                ease,
                level: classify_ease(part, ease),
            })
        })
        .collect()
}

/// Pick the row whose judged levels sit closest to `Good`; ties go to the
/// earlier row. Rows with nothing to judge are skipped.
pub fn recommend_size(chart: &ParsedSizeChart, body: &BodyDimensions) -> Option<SizeRecommendation> {
    let mut best: Option<SizeRecommendation> = None;

    for row in &chart.rows {
        let judgments = judge_fit(chart, row, body);
        if judgments.is_empty() {
            log::trace!("size {}: no comparable measurements", row.label);
            continue;
        }
        let score: u32 = judgments
            .iter()
            .map(|j| u32::from(j.level.distance_from_good()))
            .sum();
        log::trace!("size {}: score {}", row.label, score);

        if best.as_ref().is_none_or(|b| score < b.score) {
            best = Some(SizeRecommendation {
                label: row.label.clone(),
                score,
                judgments,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::parse_size_chart;

    fn body() -> BodyDimensions {
        BodyDimensions {
            shoulder_width: 45.0,
            chest_circ: 96.0,
            waist_circ: 82.0,
            hip_circ: 96.0,
            neck_circ: 38.0,
            arm_length: 60.0,
            torso_length: 45.0,
        }
    }

    fn chart() -> ParsedSizeChart {
        parse_size_chart(
            "사이즈\t어깨너비\t가슴단면\t총장\t소매길이\nS\t43\t49\t67\t59\nM\t45\t53\t69\t61\nL\t47\t57\t71\t63",
        )
        .unwrap()
    }

    #[test]
    fn test_flat_chest_is_doubled() {
        let chart = chart();
        let judgments = judge_fit(&chart, chart.row("M").unwrap(), &body());

        let chest = judgments.iter().find(|j| j.part == FitPart::Chest).unwrap();
        assert_eq!(chest.cloth, 106.0);
        assert_eq!(chest.ease, 10.0);
        assert_eq!(chest.level, FitLevel::Good);

        let shoulder = judgments.iter().find(|j| j.part == FitPart::Shoulder).unwrap();
        assert_eq!(shoulder.ease, 0.0);
        assert_eq!(shoulder.level, FitLevel::Slim);

        // Waist, hip and neck are absent from the chart.
        assert_eq!(judgments.len(), 3);
    }

    #[test]
    fn test_circumference_column_used_as_is() {
        let chart = parse_size_chart("size\twaist circumference\nM\t84").unwrap();
        let judgments = judge_fit(&chart, &chart.rows[0], &body());
        assert_eq!(judgments[0].part, FitPart::Waist);
        assert_eq!(judgments[0].cloth, 84.0);
        assert_eq!(judgments[0].level, FitLevel::Slim);
    }

    #[test]
    fn test_recommend_size() {
        // S: shoulder -2 tight, chest 2 slim, sleeve -1 good -> 3
        // M: shoulder 0 slim, chest 10 good, sleeve 1 good -> 1
        // L: shoulder 2 good, chest 18 relaxed, sleeve 3 relaxed -> 2
        let rec = recommend_size(&chart(), &body()).unwrap();
        assert_eq!(rec.label, "M");
        assert_eq!(rec.score, 1);
    }

    #[test]
    fn test_recommend_tie_prefers_earlier_row() {
        let chart = parse_size_chart("사이즈\t가슴단면\nA\t53\nB\t53").unwrap();
        assert_eq!(recommend_size(&chart, &body()).unwrap().label, "A");
    }

    #[test]
    fn test_recommend_none_without_comparable_columns() {
        let chart = parse_size_chart("사이즈\t총장\nM\t69").unwrap();
        assert!(recommend_size(&chart, &body()).is_none());
    }
}
