//! Main FitCheck struct and public API.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::body::{
    BodyDimensions, BodyField, CorrelationEstimator, CorrelationMatrix, Gender, LookupConfig,
    OverrideLayers, OverrideSource, PartialBody, Provenance, StatisticalBodyTable,
};
use crate::chart::{ParsedSizeChart, ParserConfig, SizeChartParser, SizeRow};
use crate::error::{FitCheckError, Result};
use crate::fit::{FitJudgment, SizeRecommendation, judge_fit, recommend_size};
use crate::garment::{
    BodyEstimate, ClothingCategory, FitFeedback, ReverseEstimator, garment_from_chart_row,
};
use crate::wardrobe::Wardrobe;

/// Configuration for FitCheck.
#[derive(Debug, Clone, Default)]
pub struct FitCheckConfig {
    /// Reference-table lookup configuration.
    pub lookup: LookupConfig,
    /// Size-chart parser configuration.
    pub parser: ParserConfig,
}

/// A finished body estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyReport {
    /// Statistical body before any override.
    pub baseline: BodyDimensions,
    /// Final estimate.
    pub dimensions: BodyDimensions,
    /// Where each field of `dimensions` came from.
    pub provenance: IndexMap<BodyField, Provenance>,
}

/// Body estimate for a saved wardrobe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeReport {
    /// Reverse estimates from the saved garments, with observation counts.
    pub garment_estimates: PartialBody<BodyEstimate>,
    pub body: BodyReport,
}

/// The main fit-prediction engine.
pub struct FitCheck {
    parser: SizeChartParser,
    table: StatisticalBodyTable,
    matrix: CorrelationMatrix,
    reverse: ReverseEstimator,
}

impl Default for FitCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl FitCheck {
    /// Create a new FitCheck instance with default configuration.
    pub fn new() -> Self {
        Self {
            parser: SizeChartParser::new(),
            table: StatisticalBodyTable::builtin().clone(),
            matrix: CorrelationMatrix::default(),
            reverse: ReverseEstimator::new(),
        }
    }

    /// Create a FitCheck instance with custom configuration.
    pub fn with_config(config: FitCheckConfig) -> Result<Self> {
        Ok(Self {
            parser: SizeChartParser::with_config(config.parser),
            table: StatisticalBodyTable::builtin_with_config(config.lookup)?,
            matrix: CorrelationMatrix::default(),
            reverse: ReverseEstimator::new(),
        })
    }

    /// Use a different reference table.
    pub fn with_table(mut self, table: StatisticalBodyTable) -> Self {
        self.table = table;
        self
    }

    /// Use different correlation coefficients.
    pub fn with_matrix(mut self, matrix: CorrelationMatrix) -> Self {
        self.matrix = matrix;
        self
    }

    /// Use a different reverse estimator.
    pub fn with_reverse_estimator(mut self, reverse: ReverseEstimator) -> Self {
        self.reverse = reverse;
        self
    }

    fn estimator(&self) -> CorrelationEstimator<'_> {
        CorrelationEstimator::with_table(&self.table).with_matrix(self.matrix.clone())
    }

    /// Parse pasted size-chart text.
    pub fn parse_chart(&self, text: &str) -> Option<ParsedSizeChart> {
        self.parser.parse(text)
    }

    /// Read and parse a size-chart file.
    pub fn parse_chart_file(&self, path: impl AsRef<Path>) -> Result<Option<ParsedSizeChart>> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| FitCheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.parse_chart(&text))
    }

    /// Estimate a full body from height, weight and layered overrides.
    pub fn estimate_body(
        &self,
        gender: Gender,
        height: f64,
        weight: f64,
        layers: &OverrideLayers,
    ) -> Result<BodyReport> {
        validate_positive("height", height)?;
        validate_positive("weight", weight)?;

        let overrides = layers.merged();
        for (field, &value) in overrides.iter() {
            validate_positive(field.name(), value)?;
        }

        let estimator = self.estimator();
        let baseline = estimator.baseline(gender, height, weight);
        let dimensions = estimator.propagate(&baseline, &overrides);

        let provenance = BodyField::ALL
            .into_iter()
            .map(|field| {
                let source = match layers.winner(field) {
                    Some(source) => Provenance::Override(source),
                    None if dimensions.get(field) != baseline.get(field) => Provenance::Propagated,
                    None => Provenance::Baseline,
                };
                (field, source)
            })
            .collect();

        log::debug!(
            "estimated {} body at {} cm / {} kg with {} override(s)",
            gender,
            height,
            weight,
            overrides.len()
        );

        Ok(BodyReport {
            baseline,
            dimensions,
            provenance,
        })
    }

    /// Reverse-estimate body fields from every garment in a wardrobe.
    pub fn garment_estimates(&self, wardrobe: &Wardrobe) -> PartialBody<BodyEstimate> {
        self.reverse.estimate(&wardrobe.to_reverse_garments())
    }

    /// Overrides implied by a chart row the shopper has worn.
    pub fn size_chart_overrides(
        &self,
        chart: &ParsedSizeChart,
        label: &str,
        category: ClothingCategory,
        feedback: FitFeedback,
    ) -> Result<PartialBody<f64>> {
        let row = find_row(chart, label)?;
        let garment = garment_from_chart_row(chart, row, category, feedback);
        Ok(self.reverse.estimate(&[garment]).values())
    }

    /// Estimate the body for a saved wardrobe: the profile's own overrides
    /// first, then garment-derived values, over the statistical baseline.
    pub fn estimate_from_wardrobe(&self, wardrobe: &Wardrobe) -> Result<WardrobeReport> {
        let profile = wardrobe.profile.as_ref().ok_or_else(|| {
            FitCheckError::InvalidInput("wardrobe has no body profile".to_string())
        })?;
        self.estimate_with_wardrobe(
            profile.gender,
            profile.height,
            profile.weight,
            OverrideLayers::new(),
            wardrobe,
        )
    }

    /// Estimate the body with a wardrobe folded under caller-supplied layers.
    ///
    /// The profile's stored overrides join the user-input layer and the
    /// garment estimates join the garment-derived layer; values already in
    /// `layers` win within each layer. The wardrobe's own height and weight
    /// are not used.
    pub fn estimate_with_wardrobe(
        &self,
        gender: Gender,
        height: f64,
        weight: f64,
        mut layers: OverrideLayers,
        wardrobe: &Wardrobe,
    ) -> Result<WardrobeReport> {
        if let Some(profile) = &wardrobe.profile {
            layers.fill(OverrideSource::UserInput, &profile.overrides);
        }
        let garment_estimates = self.garment_estimates(wardrobe);
        layers.fill(OverrideSource::GarmentDerived, &garment_estimates.values());

        let body = self.estimate_body(gender, height, weight, &layers)?;
        Ok(WardrobeReport {
            garment_estimates,
            body,
        })
    }

    /// Judge one size of a chart against a body.
    pub fn judge(
        &self,
        chart: &ParsedSizeChart,
        label: &str,
        body: &BodyDimensions,
    ) -> Result<Vec<FitJudgment>> {
        let row = find_row(chart, label)?;
        Ok(judge_fit(chart, row, body))
    }

    /// Recommend the best-fitting size of a chart.
    pub fn recommend(&self, chart: &ParsedSizeChart, body: &BodyDimensions) -> Option<SizeRecommendation> {
        recommend_size(chart, body)
    }
}

fn find_row<'a>(chart: &'a ParsedSizeChart, label: &str) -> Result<&'a SizeRow> {
    chart.row(label).ok_or_else(|| {
        FitCheckError::InvalidInput(format!(
            "size '{}' not in chart (sizes: {})",
            label,
            chart.labels().join(", ")
        ))
    })
}

fn validate_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FitCheckError::InvalidInput(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}
