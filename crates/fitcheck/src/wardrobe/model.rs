//! Saved wardrobe schema (version 1).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::body::{Gender, PartialBody};
use crate::error::{FitCheckError, Result};
use crate::garment::{ClothingCategory, ReverseGarment, ReverseMeasurement};

/// Schema version written by this crate.
pub const WARDROBE_VERSION: u32 = 1;

/// An owned garment as stored in the wardrobe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGarment {
    pub id: String,
    pub name: String,
    pub category: ClothingCategory,
    pub measurements: Vec<ReverseMeasurement>,
    pub saved_at: DateTime<Utc>,
}

impl SavedGarment {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ClothingCategory,
        measurements: Vec<ReverseMeasurement>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            measurements,
            saved_at: Utc::now(),
        }
    }

    pub fn to_reverse_garment(&self) -> ReverseGarment {
        ReverseGarment {
            id: self.id.clone(),
            category: self.category,
            measurements: self.measurements.clone(),
        }
    }
}

/// The shopper's stored profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedBodyProfile {
    pub gender: Gender,
    /// cm
    pub height: f64,
    /// kg
    pub weight: f64,
    /// Measurements the shopper typed in directly.
    #[serde(default)]
    pub overrides: PartialBody<f64>,
}

impl SavedBodyProfile {
    pub fn new(gender: Gender, height: f64, weight: f64) -> Self {
        Self {
            gender,
            height,
            weight,
            overrides: PartialBody::new(),
        }
    }
}

/// Versioned wardrobe document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wardrobe {
    pub version: u32,
    pub garments: Vec<SavedGarment>,
    pub profile: Option<SavedBodyProfile>,
}

impl Default for Wardrobe {
    fn default() -> Self {
        Self::new()
    }
}

impl Wardrobe {
    pub fn new() -> Self {
        Self {
            version: WARDROBE_VERSION,
            garments: Vec::new(),
            profile: None,
        }
    }

    /// Parse a wardrobe document, checking its version and shape first.
    ///
    /// Nothing is returned unless the whole document is valid.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| FitCheckError::InvalidWardrobe("expected a JSON object".to_string()))?;

        match object.get("version") {
            None => {
                return Err(FitCheckError::InvalidWardrobe(
                    "missing 'version' field".to_string(),
                ));
            }
            Some(v) => match v.as_u64() {
                Some(found) if found == u64::from(WARDROBE_VERSION) => {}
                Some(found) => {
                    return Err(FitCheckError::UnsupportedVersion {
                        found,
                        expected: WARDROBE_VERSION,
                    });
                }
                None => {
                    return Err(FitCheckError::InvalidWardrobe(format!(
                        "'version' must be a non-negative integer, got {}",
                        v
                    )));
                }
            },
        }

        if !object.get("garments").is_some_and(Value::is_array) {
            return Err(FitCheckError::InvalidWardrobe(
                "'garments' must be an array".to_string(),
            ));
        }

        serde_json::from_value(value).map_err(|e| FitCheckError::InvalidWardrobe(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add a garment, replacing any with the same id.
    pub fn add_garment(&mut self, garment: SavedGarment) {
        match self.garments.iter_mut().find(|g| g.id == garment.id) {
            Some(existing) => *existing = garment,
            None => self.garments.push(garment),
        }
    }

    pub fn remove_garment(&mut self, id: &str) -> Option<SavedGarment> {
        let index = self.garments.iter().position(|g| g.id == id)?;
        Some(self.garments.remove(index))
    }

    pub fn garment(&self, id: &str) -> Option<&SavedGarment> {
        self.garments.iter().find(|g| g.id == id)
    }

    /// Garments in the shape the reverse estimator takes.
    pub fn to_reverse_garments(&self) -> Vec<ReverseGarment> {
        self.garments.iter().map(SavedGarment::to_reverse_garment).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyField;
    use crate::garment::{AnchorPoint, FitFeedback, estimate_body_from_garments};

    fn sample() -> Wardrobe {
        let mut wardrobe = Wardrobe::new();
        wardrobe.add_garment(SavedGarment::new(
            "tee-1",
            "White tee",
            ClothingCategory::Top,
            vec![ReverseMeasurement::new(
                AnchorPoint::ArmpitLeft,
                AnchorPoint::ArmpitRight,
                50.0,
                FitFeedback::Good,
            )],
        ));
        wardrobe.profile = Some(SavedBodyProfile::new(Gender::Male, 175.0, 70.0));
        wardrobe
    }

    #[test]
    fn test_json_round_trip() {
        let wardrobe = sample();
        let json = wardrobe.to_json().unwrap();
        assert!(json.contains("\"savedAt\""));
        assert!(json.contains("\"startPointId\": \"armpit_left\""));
        assert_eq!(Wardrobe::from_json(&json).unwrap(), wardrobe);
    }

    #[test]
    fn test_rejects_other_versions() {
        let err = Wardrobe::from_json(r#"{"version": 2, "garments": [], "profile": null}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            FitCheckError::UnsupportedVersion { found: 2, expected: 1 }
        ));

        let err = Wardrobe::from_json(r#"{"garments": []}"#).unwrap_err();
        assert!(matches!(err, FitCheckError::InvalidWardrobe(_)));

        let err = Wardrobe::from_json(r#"{"version": "1", "garments": []}"#).unwrap_err();
        assert!(matches!(err, FitCheckError::InvalidWardrobe(_)));
    }

    #[test]
    fn test_rejects_non_array_garments() {
        let err = Wardrobe::from_json(r#"{"version": 1, "garments": {}, "profile": null}"#)
            .unwrap_err();
        assert!(matches!(err, FitCheckError::InvalidWardrobe(_)));
    }

    #[test]
    fn test_rejects_malformed_garment() {
        let json = r#"{"version": 1, "garments": [{"id": "x"}], "profile": null}"#;
        assert!(matches!(
            Wardrobe::from_json(json).unwrap_err(),
            FitCheckError::InvalidWardrobe(_)
        ));
        assert!(matches!(
            Wardrobe::from_json("[1, 2").unwrap_err(),
            FitCheckError::Json(_)
        ));
    }

    #[test]
    fn test_add_replace_remove() {
        let mut wardrobe = sample();
        wardrobe.add_garment(SavedGarment::new("tee-1", "Renamed", ClothingCategory::Top, vec![]));
        assert_eq!(wardrobe.garments.len(), 1);
        assert_eq!(wardrobe.garment("tee-1").unwrap().name, "Renamed");

        assert!(wardrobe.remove_garment("tee-1").is_some());
        assert!(wardrobe.remove_garment("tee-1").is_none());
        assert!(wardrobe.to_reverse_garments().is_empty());
    }

    #[test]
    fn test_unknown_anchors_load() {
        let json = r#"{"version": 1, "profile": null, "garments": [{
            "id": "jeans", "name": "Jeans", "category": "pants",
            "savedAt": "2026-01-05T10:00:00Z",
            "measurements": [
                {"startPointId": "shoulder_left", "endPointId": "shoulder_right",
                 "value": 45, "feedback": "very_tight"},
                {"startPointId": "thigh_left", "endPointId": "thigh_right",
                 "value": 31, "feedback": "good"}
            ]}]}"#;
        let wardrobe = Wardrobe::from_json(json).unwrap();
        let garments = wardrobe.to_reverse_garments();
        assert_eq!(garments[0].measurements.len(), 2);
        assert_eq!(
            garments[0].measurements[1].end_point_id,
            AnchorPoint::Other("thigh_right".to_string())
        );

        let estimates = estimate_body_from_garments(&garments);
        assert_eq!(estimates.len(), 1);
        assert_eq!(estimates.get(BodyField::ShoulderWidth).unwrap().value, 48.0);
    }

    #[test]
    fn test_profile_overrides_default() {
        let json = r#"{"version": 1, "garments": [],
            "profile": {"gender": "female", "height": 162, "weight": 55}}"#;
        let wardrobe = Wardrobe::from_json(json).unwrap();
        let profile = wardrobe.profile.unwrap();
        assert_eq!(profile.gender, Gender::Female);
        assert!(profile.overrides.is_empty());
    }
}
