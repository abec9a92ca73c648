//! Body fields and the records built over them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference population a statistical lookup draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse a gender tag (`male`/`female`, `m`/`f`, `남`/`여`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "man" | "남" | "남성" | "남자" => Some(Gender::Male),
            "female" | "f" | "woman" | "여" | "여성" | "여자" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// One of the seven estimated body measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyField {
    /// Shoulder width, point to point (cm).
    ShoulderWidth,
    /// Chest circumference (cm).
    ChestCirc,
    /// Waist circumference (cm).
    WaistCirc,
    /// Hip circumference (cm).
    HipCirc,
    /// Neck circumference (cm).
    NeckCirc,
    /// Shoulder point to wrist (cm).
    ArmLength,
    /// Back neck point to waistline (cm).
    TorsoLength,
}

impl BodyField {
    /// All fields, in matrix order.
    pub const ALL: [BodyField; 7] = [
        BodyField::ShoulderWidth,
        BodyField::ChestCirc,
        BodyField::WaistCirc,
        BodyField::HipCirc,
        BodyField::NeckCirc,
        BodyField::ArmLength,
        BodyField::TorsoLength,
    ];

    /// Position of this field in [`BodyField::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether the field is measured around the body.
    pub fn is_circumference(self) -> bool {
        matches!(
            self,
            BodyField::ChestCirc | BodyField::WaistCirc | BodyField::HipCirc | BodyField::NeckCirc
        )
    }

    /// The camelCase name used in serialized data.
    pub fn name(self) -> &'static str {
        match self {
            BodyField::ShoulderWidth => "shoulderWidth",
            BodyField::ChestCirc => "chestCirc",
            BodyField::WaistCirc => "waistCirc",
            BodyField::HipCirc => "hipCirc",
            BodyField::NeckCirc => "neckCirc",
            BodyField::ArmLength => "armLength",
            BodyField::TorsoLength => "torsoLength",
        }
    }
}

impl fmt::Display for BodyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A complete set of body measurements in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyDimensions {
    pub shoulder_width: f64,
    pub chest_circ: f64,
    pub waist_circ: f64,
    pub hip_circ: f64,
    pub neck_circ: f64,
    pub arm_length: f64,
    pub torso_length: f64,
}

impl BodyDimensions {
    /// Get the value of one field.
    pub fn get(&self, field: BodyField) -> f64 {
        match field {
            BodyField::ShoulderWidth => self.shoulder_width,
            BodyField::ChestCirc => self.chest_circ,
            BodyField::WaistCirc => self.waist_circ,
            BodyField::HipCirc => self.hip_circ,
            BodyField::NeckCirc => self.neck_circ,
            BodyField::ArmLength => self.arm_length,
            BodyField::TorsoLength => self.torso_length,
        }
    }

    pub(crate) fn set(&mut self, field: BodyField, value: f64) {
        match field {
            BodyField::ShoulderWidth => self.shoulder_width = value,
            BodyField::ChestCirc => self.chest_circ = value,
            BodyField::WaistCirc => self.waist_circ = value,
            BodyField::HipCirc => self.hip_circ = value,
            BodyField::NeckCirc => self.neck_circ = value,
            BodyField::ArmLength => self.arm_length = value,
            BodyField::TorsoLength => self.torso_length = value,
        }
    }

    /// Iterate over `(field, value)` pairs in matrix order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyField, f64)> + '_ {
        BodyField::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// A fixed-shape record with one optional slot per body field.
///
/// Used for override sets (`PartialBody<f64>`) and for reverse-estimation
/// results (`PartialBody<BodyEstimate>`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct PartialBody<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoulder_width: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest_circ: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist_circ: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip_circ: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neck_circ: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arm_length: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torso_length: Option<T>,
}

impl<T> Default for PartialBody<T> {
    fn default() -> Self {
        Self {
            shoulder_width: None,
            chest_circ: None,
            waist_circ: None,
            hip_circ: None,
            neck_circ: None,
            arm_length: None,
            torso_length: None,
        }
    }
}

impl<T> PartialBody<T> {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, field: BodyField) -> &Option<T> {
        match field {
            BodyField::ShoulderWidth => &self.shoulder_width,
            BodyField::ChestCirc => &self.chest_circ,
            BodyField::WaistCirc => &self.waist_circ,
            BodyField::HipCirc => &self.hip_circ,
            BodyField::NeckCirc => &self.neck_circ,
            BodyField::ArmLength => &self.arm_length,
            BodyField::TorsoLength => &self.torso_length,
        }
    }

    fn slot_mut(&mut self, field: BodyField) -> &mut Option<T> {
        match field {
            BodyField::ShoulderWidth => &mut self.shoulder_width,
            BodyField::ChestCirc => &mut self.chest_circ,
            BodyField::WaistCirc => &mut self.waist_circ,
            BodyField::HipCirc => &mut self.hip_circ,
            BodyField::NeckCirc => &mut self.neck_circ,
            BodyField::ArmLength => &mut self.arm_length,
            BodyField::TorsoLength => &mut self.torso_length,
        }
    }

    /// Get the value stored for a field, if any.
    pub fn get(&self, field: BodyField) -> Option<&T> {
        self.slot(field).as_ref()
    }

    /// Store a value, replacing any previous one.
    pub fn set(&mut self, field: BodyField, value: T) {
        *self.slot_mut(field) = Some(value);
    }

    /// Builder-style [`PartialBody::set`].
    pub fn with(mut self, field: BodyField, value: T) -> Self {
        self.set(field, value);
        self
    }

    /// Clear a field.
    pub fn remove(&mut self, field: BodyField) -> Option<T> {
        self.slot_mut(field).take()
    }

    /// Whether a value is stored for the field.
    pub fn contains(&self, field: BodyField) -> bool {
        self.slot(field).is_some()
    }

    /// Iterate over the present fields in matrix order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyField, &T)> + '_ {
        BodyField::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|v| (f, v)))
    }

    /// Number of present fields.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
