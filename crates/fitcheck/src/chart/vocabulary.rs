//! Header vocabulary: canonical measurement keys and their retailer synonyms.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Canonical garment measurement recognised in size-chart headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeasurementKey {
    ShoulderWidth,
    ChestWidth,
    TotalLength,
    SleeveLength,
    HemCirc,
    WaistCirc,
    HipCirc,
    ThighCirc,
    KneeCirc,
    Rise,
    Inseam,
    SleeveCirc,
    CuffCirc,
    ElbowCirc,
    NeckCirc,
}

/// How a chart value was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    /// Across the garment laid flat: half of the circumference.
    Flat,
    /// All the way around.
    Circumference,
    /// A linear span (lengths, shoulder point to point).
    Length,
}

impl MeasurementKey {
    pub const ALL: [MeasurementKey; 15] = [
        MeasurementKey::ShoulderWidth,
        MeasurementKey::ChestWidth,
        MeasurementKey::TotalLength,
        MeasurementKey::SleeveLength,
        MeasurementKey::HemCirc,
        MeasurementKey::WaistCirc,
        MeasurementKey::HipCirc,
        MeasurementKey::ThighCirc,
        MeasurementKey::KneeCirc,
        MeasurementKey::Rise,
        MeasurementKey::Inseam,
        MeasurementKey::SleeveCirc,
        MeasurementKey::CuffCirc,
        MeasurementKey::ElbowCirc,
        MeasurementKey::NeckCirc,
    ];

    /// Normalised header spellings for this key. The first entry is the
    /// preferred Korean label.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            MeasurementKey::ShoulderWidth => &[
                "어깨너비", "어깨", "어깨넓이", "어깨단면", "shoulder", "shoulders",
                "shoulder width",
            ],
            MeasurementKey::ChestWidth => &[
                "가슴단면", "가슴", "가슴너비", "가슴둘레", "품", "chest", "chest width",
                "bust", "pit to pit",
            ],
            MeasurementKey::TotalLength => &[
                "총장", "총기장", "기장", "전체길이", "length", "total length", "body length",
            ],
            MeasurementKey::SleeveLength => &[
                "소매길이", "소매", "소매기장", "팔길이", "sleeve", "sleeve length",
            ],
            MeasurementKey::HemCirc => &[
                "밑단단면", "밑단", "밑단둘레", "hem", "hem width", "bottom width",
            ],
            MeasurementKey::WaistCirc => &["허리단면", "허리", "허리둘레", "waist"],
            MeasurementKey::HipCirc => &[
                "엉덩이단면", "엉덩이", "엉덩이둘레", "힙", "힙단면", "hip", "hips",
            ],
            MeasurementKey::ThighCirc => &["허벅지단면", "허벅지", "허벅지둘레", "thigh"],
            MeasurementKey::KneeCirc => &["무릎단면", "무릎", "무릎둘레", "knee"],
            MeasurementKey::Rise => &["밑위", "밑위길이", "앞밑위", "rise", "front rise"],
            MeasurementKey::Inseam => &["인심", "안기장", "안쪽기장", "inseam", "inside leg"],
            MeasurementKey::SleeveCirc => &[
                "소매통", "소매단면", "팔통", "암통", "sleeve width", "upper arm", "bicep",
            ],
            MeasurementKey::CuffCirc => &[
                "소매끝", "소매부리", "소맷부리", "커프스", "cuff", "sleeve opening",
            ],
            MeasurementKey::ElbowCirc => &["팔꿈치단면", "팔꿈치", "팔꿈치둘레", "elbow"],
            MeasurementKey::NeckCirc => &["목둘레", "목", "넥", "neck", "collar"],
        }
    }

    /// How values for this key are usually given when the header is silent.
    pub fn default_kind(self) -> MeasurementKind {
        match self {
            MeasurementKey::ShoulderWidth
            | MeasurementKey::TotalLength
            | MeasurementKey::SleeveLength
            | MeasurementKey::Rise
            | MeasurementKey::Inseam => MeasurementKind::Length,
            MeasurementKey::NeckCirc => MeasurementKind::Circumference,
            _ => MeasurementKind::Flat,
        }
    }

    pub fn label(self) -> &'static str {
        self.synonyms()[0]
    }

    /// The camelCase name used in serialized data.
    pub fn name(self) -> &'static str {
        match self {
            MeasurementKey::ShoulderWidth => "shoulderWidth",
            MeasurementKey::ChestWidth => "chestWidth",
            MeasurementKey::TotalLength => "totalLength",
            MeasurementKey::SleeveLength => "sleeveLength",
            MeasurementKey::HemCirc => "hemCirc",
            MeasurementKey::WaistCirc => "waistCirc",
            MeasurementKey::HipCirc => "hipCirc",
            MeasurementKey::ThighCirc => "thighCirc",
            MeasurementKey::KneeCirc => "kneeCirc",
            MeasurementKey::Rise => "rise",
            MeasurementKey::Inseam => "inseam",
            MeasurementKey::SleeveCirc => "sleeveCirc",
            MeasurementKey::CuffCirc => "cuffCirc",
            MeasurementKey::ElbowCirc => "elbowCirc",
            MeasurementKey::NeckCirc => "neckCirc",
        }
    }
}

impl fmt::Display for MeasurementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Header cells that name the size-label column (normalised).
const SIZE_COLUMN_WORDS: &[&str] = &[
    "", "-", "사이즈", "size", "sizes", "호칭", "치수", "구분", "사이즈명", "size name",
];

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Lowercase, drop `(cm)`/`(단면)` markers, collapse whitespace.
pub fn normalize_header(header: &str) -> String {
    let lowered = header.to_lowercase().replace("(cm)", "").replace("(단면)", "");
    WHITESPACE.replace_all(lowered.trim(), " ").into_owned()
}

/// Whether a header cell names the size-label column.
pub fn is_size_header(header: &str) -> bool {
    let normalized = normalize_header(header);
    SIZE_COLUMN_WORDS.contains(&normalized.as_str())
}

/// True when a header gives a full circumference (`둘레`) rather than a flat
/// (`단면`) or width (`폭`) measurement, so its values must be halved to
/// compare with flat widths.
pub fn needs_halving(header: &str) -> bool {
    header.contains("둘레") && !header.contains("단면") && !header.contains("폭")
}

/// Map a header to a key by exact synonym match only.
pub fn exact_header_key(header: &str) -> Option<MeasurementKey> {
    let normalized = normalize_header(header);
    if normalized.is_empty() {
        return None;
    }
    MeasurementKey::ALL
        .into_iter()
        .find(|key| key.synonyms().contains(&normalized.as_str()))
}

/// Map a header to a key: exact synonym first, then substring containment
/// in either direction.
///
/// When several synonyms overlap the header, the longest overlap wins, then
/// the one starting earliest in the header, then the key declared first.
pub fn map_header(header: &str) -> Option<MeasurementKey> {
    if let Some(key) = exact_header_key(header) {
        return Some(key);
    }

    let normalized = normalize_header(header);
    if normalized.is_empty() {
        return None;
    }

    let mut best: Option<(usize, usize, MeasurementKey)> = None;
    for key in MeasurementKey::ALL {
        for alias in key.synonyms() {
            let candidate = if let Some(pos) = normalized.find(alias) {
                (alias.chars().count(), pos)
            } else if alias.contains(normalized.as_str()) {
                (normalized.chars().count(), 0)
            } else {
                continue;
            };

            let better = match best {
                None => true,
                Some((len, pos, _)) => candidate.0 > len || (candidate.0 == len && candidate.1 < pos),
            };
            if better {
                best = Some((candidate.0, candidate.1, key));
            }
        }
    }

    best.map(|(_, _, key)| key)
}

/// Decide how a column's values were taken from its header text.
pub fn kind_for_header(header: &str, key: MeasurementKey) -> MeasurementKind {
    let default = key.default_kind();
    if default == MeasurementKind::Length {
        return default;
    }
    if needs_halving(header) {
        return MeasurementKind::Circumference;
    }

    let lowered = header.to_lowercase();
    let flat_markers = ["단면", "폭", "flat", "half", "width", "1/2", "pit to pit"];
    if flat_markers.iter().any(|m| lowered.contains(m)) {
        return MeasurementKind::Flat;
    }
    let circ_markers = ["circumference", "girth", "around"];
    if circ_markers.iter().any(|m| lowered.contains(m)) {
        return MeasurementKind::Circumference;
    }
    default
}
