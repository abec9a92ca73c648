//! Statistical body lookup with inverse-distance interpolation.
//!
//! Reference entries are banded by height and weight per gender. A lookup
//! ranks every entry of the requested gender by its scaled distance to the
//! query, then either returns an exact band match verbatim or blends the
//! nearest entries with inverse-distance weights.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{FitCheckError, Result};

use super::field::{BodyDimensions, Gender};
use super::reference;
use super::round_to_tenth;

/// Half-open numeric band `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Centre of the band.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// One row of the population reference table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnthropometricEntry {
    pub gender: Gender,
    pub height: Band,
    pub weight: Band,
    pub shoulder_width: f64,
    pub chest_circ: f64,
    pub waist_circ: f64,
    pub hip_circ: f64,
    pub neck_circ: f64,
    pub arm_length: f64,
    pub torso_length: f64,
    pub inseam: f64,
}

impl AnthropometricEntry {
    /// Build an entry from bands and the eight measurements in table order:
    /// shoulder, chest, waist, hip, neck, arm, torso, inseam.
    pub const fn new(gender: Gender, height: Band, weight: Band, values: [f64; 8]) -> Self {
        Self {
            gender,
            height,
            weight,
            shoulder_width: values[0],
            chest_circ: values[1],
            waist_circ: values[2],
            hip_circ: values[3],
            neck_circ: values[4],
            arm_length: values[5],
            torso_length: values[6],
            inseam: values[7],
        }
    }

    /// The eight numeric measurements in table order.
    pub fn values(&self) -> [f64; 8] {
        [
            self.shoulder_width,
            self.chest_circ,
            self.waist_circ,
            self.hip_circ,
            self.neck_circ,
            self.arm_length,
            self.torso_length,
            self.inseam,
        ]
    }

    /// Project onto the seven estimated body fields.
    pub fn dimensions(&self) -> BodyDimensions {
        BodyDimensions {
            shoulder_width: self.shoulder_width,
            chest_circ: self.chest_circ,
            waist_circ: self.waist_circ,
            hip_circ: self.hip_circ,
            neck_circ: self.neck_circ,
            arm_length: self.arm_length,
            torso_length: self.torso_length,
        }
    }
}

/// Tuning for table lookups.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Number of nearest entries blended together.
    pub neighbours: usize,
    /// Divisor applied to both the height (cm) and weight (kg) axes.
    pub distance_scale: f64,
    /// Distances below this are exact band matches; also added to every
    /// distance before taking its reciprocal.
    pub epsilon: f64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            neighbours: 3,
            distance_scale: 5.0,
            epsilon: 0.01,
        }
    }
}

/// Read-only reference table, partitioned by gender.
#[derive(Debug, Clone)]
pub struct StatisticalBodyTable {
    male: Vec<AnthropometricEntry>,
    female: Vec<AnthropometricEntry>,
    config: LookupConfig,
}

static BUILTIN: Lazy<StatisticalBodyTable> = Lazy::new(|| {
    StatisticalBodyTable::from_entries(reference::ENTRIES.to_vec(), LookupConfig::default())
        .expect("built-in reference table covers both genders")
});

impl StatisticalBodyTable {
    /// Build a table from entries. Fails if either gender has no entries or
    /// the scale or epsilon is not positive.
    pub fn from_entries(entries: Vec<AnthropometricEntry>, config: LookupConfig) -> Result<Self> {
        if config.distance_scale <= 0.0 || !config.distance_scale.is_finite() {
            return Err(FitCheckError::Config(format!(
                "distance scale must be positive, got {}",
                config.distance_scale
            )));
        }
        if config.epsilon <= 0.0 || !config.epsilon.is_finite() {
            return Err(FitCheckError::Config(format!(
                "epsilon must be positive, got {}",
                config.epsilon
            )));
        }

        let (male, female): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .partition(|e| e.gender == Gender::Male);

        for (gender, list) in [(Gender::Male, &male), (Gender::Female, &female)] {
            if list.is_empty() {
                return Err(FitCheckError::Config(format!(
                    "reference table has no entries for {}",
                    gender
                )));
            }
        }

        Ok(Self {
            male,
            female,
            config,
        })
    }

    /// The built-in table, constructed once on first use.
    pub fn builtin() -> &'static StatisticalBodyTable {
        &BUILTIN
    }

    /// A copy of the built-in entries with a different lookup configuration.
    pub fn builtin_with_config(config: LookupConfig) -> Result<Self> {
        Self::from_entries(reference::ENTRIES.to_vec(), config)
    }

    /// Entries for one gender, in table order.
    pub fn entries(&self, gender: Gender) -> &[AnthropometricEntry] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Total number of entries across both genders.
    pub fn len(&self) -> usize {
        self.male.len() + self.female.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Scaled Euclidean distance from a query to an entry's band midpoint.
    pub fn distance(&self, entry: &AnthropometricEntry, height: f64, weight: f64) -> f64 {
        let scale = self.config.distance_scale;
        let dh = (height - entry.height.midpoint()) / scale;
        let dw = (weight - entry.weight.midpoint()) / scale;
        (dh * dh + dw * dw).sqrt()
    }

    /// Look up (or interpolate) the reference entry for a height/weight.
    ///
    /// Callers are expected to pass finite values; the facade validates user
    /// input before it gets here.
    pub fn lookup(&self, gender: Gender, height: f64, weight: f64) -> AnthropometricEntry {
        let mut ranked: Vec<(f64, &AnthropometricEntry)> = self
            .entries(gender)
            .iter()
            .map(|entry| (self.distance(entry, height, weight), entry))
            .collect();

        // Stable sort: ties keep table order.
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
        ranked.truncate(self.config.neighbours.max(1));

        // Non-empty: from_entries rejects a gender without entries.
        let (closest, nearest) = ranked[0];
        if closest < self.config.epsilon {
            log::trace!(
                "exact band match for {} {}cm/{}kg",
                gender,
                height,
                weight
            );
            return *nearest;
        }

        let mut weighted = [0.0_f64; 8];
        let mut total_weight = 0.0;
        for (distance, entry) in &ranked {
            let w = 1.0 / (distance + self.config.epsilon);
            for (acc, value) in weighted.iter_mut().zip(entry.values()) {
                *acc += value * w;
            }
            total_weight += w;
        }

        let values = weighted.map(|sum| round_to_tenth(sum / total_weight));
        AnthropometricEntry::new(
            gender,
            Band::new(height - 2.5, height + 2.5),
            Band::new(weight - 2.5, weight + 2.5),
            values,
        )
    }
}

/// Look up the built-in reference table.
pub fn lookup_reference(gender: Gender, height: f64, weight: f64) -> AnthropometricEntry {
    StatisticalBodyTable::builtin().lookup(gender, height, weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(gender: Gender, h: (f64, f64), w: (f64, f64), base: f64) -> AnthropometricEntry {
        AnthropometricEntry::new(
            gender,
            Band::new(h.0, h.1),
            Band::new(w.0, w.1),
            [base; 8],
        )
    }

    fn small_table() -> StatisticalBodyTable {
        StatisticalBodyTable::from_entries(
            vec![
                entry(Gender::Male, (170.0, 175.0), (65.0, 70.0), 90.0),
                entry(Gender::Male, (175.0, 180.0), (65.0, 70.0), 100.0),
                entry(Gender::Male, (180.0, 185.0), (80.0, 85.0), 120.0),
                entry(Gender::Female, (160.0, 165.0), (50.0, 55.0), 80.0),
            ],
            LookupConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_builtin_table_has_both_genders() {
        let table = StatisticalBodyTable::builtin();
        assert!(!table.entries(Gender::Male).is_empty());
        assert!(!table.entries(Gender::Female).is_empty());
        assert!(table.entries(Gender::Male).iter().all(|e| e.gender == Gender::Male));
    }

    #[test]
    fn test_missing_gender_is_config_error() {
        let result = StatisticalBodyTable::from_entries(
            vec![entry(Gender::Male, (170.0, 175.0), (65.0, 70.0), 90.0)],
            LookupConfig::default(),
        );
        assert!(matches!(result, Err(FitCheckError::Config(_))));
    }

    #[test]
    fn test_non_positive_epsilon_is_config_error() {
        for epsilon in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let config = LookupConfig {
                epsilon,
                ..LookupConfig::default()
            };
            assert!(matches!(
                StatisticalBodyTable::builtin_with_config(config),
                Err(FitCheckError::Config(_))
            ));
        }

        let tiny = LookupConfig {
            epsilon: 1e-9,
            ..LookupConfig::default()
        };
        let table = StatisticalBodyTable::builtin_with_config(tiny).unwrap();
        let at_centre = table.lookup(Gender::Male, 172.5, 67.5);
        assert!(at_centre.values().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_exact_midpoint_returns_entry() {
        let table = small_table();
        let found = table.lookup(Gender::Male, 172.5, 67.5);
        assert_eq!(found, table.entries(Gender::Male)[0]);
    }

    #[test]
    fn test_midway_between_two_bands() {
        let table = small_table();
        // Equidistant from the first two entries; the third is far away.
        let found = table.lookup(Gender::Male, 175.0, 67.5);
        assert!(found.chest_circ > 90.0 && found.chest_circ < 100.0);
        assert!(found.chest_circ > 95.0, "far entry pulls the blend upward");
        assert_eq!(found.height, Band::new(172.5, 177.5));
        assert_eq!(found.weight, Band::new(65.0, 70.0));
    }

    #[test]
    fn test_fewer_entries_than_neighbours() {
        let table = small_table();
        let found = table.lookup(Gender::Female, 170.0, 60.0);
        assert_eq!(found.chest_circ, 80.0);
        assert_eq!(found.gender, Gender::Female);
    }

    #[test]
    fn test_distance_scaling() {
        let table = small_table();
        let e = &table.entries(Gender::Male)[0];
        // 5cm and 5kg each count as one unit.
        let d = table.distance(e, 177.5, 72.5);
        assert!((d - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_builtin_lookup_is_positive() {
        for gender in [Gender::Male, Gender::Female] {
            let found = lookup_reference(gender, 168.0, 61.0);
            assert!(found.values().iter().all(|v| *v > 0.0));
        }
    }
}
