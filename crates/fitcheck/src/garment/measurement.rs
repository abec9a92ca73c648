//! Owned-garment measurements and fit feedback.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Named reference location on a garment outline.
///
/// Identifiers the crate has no name for are kept as [`AnchorPoint::Other`];
/// no built-in rule matches them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorPoint {
    ShoulderLeft,
    ShoulderRight,
    ArmpitLeft,
    ArmpitRight,
    WaistLeft,
    WaistRight,
    HipLeft,
    HipRight,
    HemLeft,
    HemRight,
    CuffLeft,
    CuffRight,
    NeckBack,
    WaistBack,
    HemBack,
    CollarButton,
    CollarButtonhole,
    #[serde(untagged)]
    Other(String),
}

impl AnchorPoint {
    /// Anchor for an outline identifier (`cuff_left`, `thigh_right`, ...).
    pub fn from_id(id: &str) -> Self {
        let id = id.trim();
        serde_json::from_value(serde_json::Value::String(id.to_string()))
            .unwrap_or_else(|_| AnchorPoint::Other(id.to_string()))
    }

    /// False for identifiers outside the named set.
    pub fn is_known(&self) -> bool {
        !matches!(self, AnchorPoint::Other(_))
    }
}

/// Kind of garment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClothingCategory {
    Top,
    Shirt,
    Outer,
    Dress,
    Pants,
    Skirt,
}

/// How a garment felt when worn, on a five-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitFeedback {
    #[serde(alias = "매우 타이트")]
    VeryTight,
    #[serde(alias = "타이트")]
    Tight,
    #[serde(alias = "적당")]
    Good,
    #[serde(alias = "여유")]
    Loose,
    #[serde(alias = "매우 여유")]
    VeryLoose,
}

impl FitFeedback {
    pub const ALL: [FitFeedback; 5] = [
        FitFeedback::VeryTight,
        FitFeedback::Tight,
        FitFeedback::Good,
        FitFeedback::Loose,
        FitFeedback::VeryLoose,
    ];

    /// Signed cm added to the garment measurement to estimate the body.
    ///
    /// Tight garments sit on a body larger than the garment, so the offset
    /// is positive; loose ones sit on a smaller body. "Good" is slightly
    /// negative because comfortable garments carry some ease.
    pub fn offset_cm(self) -> f64 {
        match self {
            FitFeedback::VeryTight => 3.0,
            FitFeedback::Tight => 1.0,
            FitFeedback::Good => -1.0,
            FitFeedback::Loose => -4.0,
            FitFeedback::VeryLoose => -7.0,
        }
    }

    /// Parse a feedback tag (`very_tight`, `good`, `적당`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "very_tight" | "매우_타이트" => Some(FitFeedback::VeryTight),
            "tight" | "타이트" => Some(FitFeedback::Tight),
            "good" | "적당" => Some(FitFeedback::Good),
            "loose" | "여유" => Some(FitFeedback::Loose),
            "very_loose" | "매우_여유" => Some(FitFeedback::VeryLoose),
            _ => None,
        }
    }
}

impl fmt::Display for FitFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FitFeedback::VeryTight => "very tight",
            FitFeedback::Tight => "tight",
            FitFeedback::Good => "good",
            FitFeedback::Loose => "loose",
            FitFeedback::VeryLoose => "very loose",
        };
        f.write_str(s)
    }
}

/// A point-to-point measurement on an owned garment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseMeasurement {
    pub start_point_id: AnchorPoint,
    pub end_point_id: AnchorPoint,
    /// Measured span in cm.
    pub value: f64,
    pub feedback: FitFeedback,
}

impl ReverseMeasurement {
    pub fn new(start: AnchorPoint, end: AnchorPoint, value: f64, feedback: FitFeedback) -> Self {
        Self {
            start_point_id: start,
            end_point_id: end,
            value,
            feedback,
        }
    }

    /// Whether this measurement spans the given unordered anchor pair.
    pub fn spans(&self, a: &AnchorPoint, b: &AnchorPoint) -> bool {
        (&self.start_point_id == a && &self.end_point_id == b)
            || (&self.start_point_id == b && &self.end_point_id == a)
    }
}

/// An owned garment with its measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseGarment {
    pub id: String,
    pub category: ClothingCategory,
    pub measurements: Vec<ReverseMeasurement>,
}

impl ReverseGarment {
    pub fn new(id: impl Into<String>, category: ClothingCategory) -> Self {
        Self {
            id: id.into(),
            category,
            measurements: Vec::new(),
        }
    }

    /// Append a measurement (builder style).
    pub fn with_measurement(mut self, measurement: ReverseMeasurement) -> Self {
        self.measurements.push(measurement);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_offsets_descend() {
        let offsets: Vec<f64> = FitFeedback::ALL.iter().map(|f| f.offset_cm()).collect();
        assert!(offsets.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(offsets[0], 3.0);
        assert_eq!(offsets[4], -7.0);
    }

    #[test]
    fn test_feedback_parse_and_alias() {
        assert_eq!(FitFeedback::parse("Very Tight"), Some(FitFeedback::VeryTight));
        assert_eq!(FitFeedback::parse("적당"), Some(FitFeedback::Good));
        assert_eq!(FitFeedback::parse("meh"), None);

        let parsed: FitFeedback = serde_json::from_str("\"적당\"").unwrap();
        assert_eq!(parsed, FitFeedback::Good);
    }

    #[test]
    fn test_spans_is_unordered() {
        let m = ReverseMeasurement::new(
            AnchorPoint::ArmpitRight,
            AnchorPoint::ArmpitLeft,
            50.0,
            FitFeedback::Good,
        );
        assert!(m.spans(&AnchorPoint::ArmpitLeft, &AnchorPoint::ArmpitRight));
        assert!(m.spans(&AnchorPoint::ArmpitRight, &AnchorPoint::ArmpitLeft));
        assert!(!m.spans(&AnchorPoint::ShoulderLeft, &AnchorPoint::ShoulderRight));
    }

    #[test]
    fn test_anchor_from_id() {
        assert_eq!(AnchorPoint::from_id("cuff_left"), AnchorPoint::CuffLeft);
        assert_eq!(AnchorPoint::from_id(" elbow "), AnchorPoint::Other("elbow".to_string()));
        assert!(AnchorPoint::CuffLeft.is_known());
        assert!(!AnchorPoint::from_id("elbow").is_known());
    }

    #[test]
    fn test_unknown_anchor_round_trips() {
        let json = r#"{"startPointId":"thigh_left","endPointId":"thigh_right","value":30.0,"feedback":"good"}"#;
        let m: ReverseMeasurement = serde_json::from_str(json).unwrap();
        assert_eq!(m.start_point_id, AnchorPoint::Other("thigh_left".to_string()));
        assert_eq!(serde_json::to_string(&m).unwrap(), json);

        let known: AnchorPoint = serde_json::from_str("\"neck_back\"").unwrap();
        assert_eq!(known, AnchorPoint::NeckBack);
    }
}
