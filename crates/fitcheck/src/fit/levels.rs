//! Ease thresholds and fit levels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::body::BodyField;

/// Body part judged for fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitPart {
    Shoulder,
    Chest,
    Waist,
    Hip,
    Sleeve,
    Neck,
}

impl FitPart {
    pub const ALL: [FitPart; 6] = [
        FitPart::Shoulder,
        FitPart::Chest,
        FitPart::Waist,
        FitPart::Hip,
        FitPart::Sleeve,
        FitPart::Neck,
    ];

    /// Body field the garment is compared against.
    pub fn body_field(self) -> BodyField {
        match self {
            FitPart::Shoulder => BodyField::ShoulderWidth,
            FitPart::Chest => BodyField::ChestCirc,
            FitPart::Waist => BodyField::WaistCirc,
            FitPart::Hip => BodyField::HipCirc,
            FitPart::Sleeve => BodyField::ArmLength,
            FitPart::Neck => BodyField::NeckCirc,
        }
    }
}

impl fmt::Display for FitPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FitPart::Shoulder => "shoulder",
            FitPart::Chest => "chest",
            FitPart::Waist => "waist",
            FitPart::Hip => "hip",
            FitPart::Sleeve => "sleeve",
            FitPart::Neck => "neck",
        };
        f.write_str(s)
    }
}

/// Ordinal fit level, tightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitLevel {
    Tight,
    Slim,
    Good,
    Relaxed,
    Loose,
}

impl FitLevel {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Steps away from `Good`.
    pub fn distance_from_good(self) -> u8 {
        self.ordinal().abs_diff(FitLevel::Good.ordinal())
    }
}

impl fmt::Display for FitLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FitLevel::Tight => "tight",
            FitLevel::Slim => "slim",
            FitLevel::Good => "good",
            FitLevel::Relaxed => "relaxed",
            FitLevel::Loose => "loose",
        };
        f.write_str(s)
    }
}

/// Upper ease bounds (cm, exclusive) for the first four levels; anything
/// at or above `relaxed` is `Loose`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EaseThresholds {
    pub tight: f64,
    pub slim: f64,
    pub good: f64,
    pub relaxed: f64,
}

impl EaseThresholds {
    pub const fn new(tight: f64, slim: f64, good: f64, relaxed: f64) -> Self {
        Self {
            tight,
            slim,
            good,
            relaxed,
        }
    }

    /// Built-in thresholds for a part. Shoulder and sleeve compare lengths,
    /// the rest compare full circumferences.
    pub fn for_part(part: FitPart) -> Self {
        match part {
            FitPart::Shoulder => Self::new(-1.0, 1.0, 3.0, 6.0),
            FitPart::Chest => Self::new(0.0, 6.0, 14.0, 24.0),
            FitPart::Waist | FitPart::Hip => Self::new(0.0, 4.0, 10.0, 18.0),
            FitPart::Sleeve => Self::new(-3.0, -1.0, 2.0, 5.0),
            FitPart::Neck => Self::new(0.0, 1.5, 3.0, 5.0),
        }
    }

    pub fn classify(&self, ease: f64) -> FitLevel {
        if ease < self.tight {
            FitLevel::Tight
        } else if ease < self.slim {
            FitLevel::Slim
        } else if ease < self.good {
            FitLevel::Good
        } else if ease < self.relaxed {
            FitLevel::Relaxed
        } else {
            FitLevel::Loose
        }
    }
}

/// Bucket an ease value with the built-in thresholds for `part`.
pub fn classify_ease(part: FitPart, ease: f64) -> FitLevel {
    EaseThresholds::for_part(part).classify(ease)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_chest() {
        assert_eq!(classify_ease(FitPart::Chest, -2.0), FitLevel::Tight);
        assert_eq!(classify_ease(FitPart::Chest, 0.0), FitLevel::Slim);
        assert_eq!(classify_ease(FitPart::Chest, 10.0), FitLevel::Good);
        assert_eq!(classify_ease(FitPart::Chest, 14.0), FitLevel::Relaxed);
        assert_eq!(classify_ease(FitPart::Chest, 30.0), FitLevel::Loose);
    }

    #[test]
    fn test_thresholds_ascend() {
        for part in FitPart::ALL {
            let t = EaseThresholds::for_part(part);
            assert!(t.tight < t.slim && t.slim < t.good && t.good < t.relaxed, "{part}");
        }
    }

    #[test]
    fn test_distance_from_good() {
        assert_eq!(FitLevel::Good.distance_from_good(), 0);
        assert_eq!(FitLevel::Tight.distance_from_good(), 2);
        assert_eq!(FitLevel::Relaxed.distance_from_good(), 1);
        assert!(FitLevel::Tight < FitLevel::Loose);
    }
}
