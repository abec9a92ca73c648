//! Parsed size-chart representation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::vocabulary::{MeasurementKey, MeasurementKind};

/// Cell separator detected from the header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    Tab,
    Pipe,
    /// Runs of two or more whitespace characters.
    Whitespace,
}

/// Which strategy recovered the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ChartLayout {
    /// One line per row.
    Tabular { delimiter: Delimiter },
    /// Single line: size labels, then headers, then values row by row.
    Flattened,
    /// Single line: headers, then each label followed by its values.
    Interleaved,
}

/// One size row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRow {
    /// Size label as written (`M`, `95`, ...), or `RowN` when blank.
    pub label: String,
    /// Positive values by canonical key, in column order.
    pub measurements: IndexMap<MeasurementKey, f64>,
}

impl SizeRow {
    pub fn get(&self, key: MeasurementKey) -> Option<f64> {
        self.measurements.get(&key).copied()
    }
}

/// A recovered size chart.
///
/// `mapped_keys` and `kinds` are parallel to `headers`; unrecognised headers
/// (and the size column) carry `None`. When two columns map to the same key,
/// the leftmost one supplies the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSizeChart {
    pub headers: Vec<String>,
    pub mapped_keys: Vec<Option<MeasurementKey>>,
    pub kinds: Vec<Option<MeasurementKind>>,
    /// Column holding size labels (`None` for single-line layouts).
    pub size_column: Option<usize>,
    pub rows: Vec<SizeRow>,
    pub layout: ChartLayout,
}

impl ParsedSizeChart {
    /// Keys present in the chart, in column order, without duplicates.
    pub fn keys(&self) -> Vec<MeasurementKey> {
        let mut keys = Vec::new();
        for key in self.mapped_keys.iter().flatten() {
            if !keys.contains(key) {
                keys.push(*key);
            }
        }
        keys
    }

    /// Headers that did not map to any key (excluding the size column).
    pub fn unmapped_headers(&self) -> Vec<&str> {
        self.headers
            .iter()
            .zip(&self.mapped_keys)
            .enumerate()
            .filter(|(i, (_, key))| key.is_none() && Some(*i) != self.size_column)
            .map(|(_, (header, _))| header.as_str())
            .collect()
    }

    /// How the values for a key were taken.
    pub fn kind(&self, key: MeasurementKey) -> Option<MeasurementKind> {
        let col = self.mapped_keys.iter().position(|k| *k == Some(key))?;
        self.kinds.get(col).copied().flatten()
    }

    /// Find a row by label, ignoring case.
    pub fn row(&self, label: &str) -> Option<&SizeRow> {
        let label = label.trim();
        self.rows.iter().find(|r| r.label.eq_ignore_ascii_case(label))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.label.as_str()).collect()
    }

    /// A row's value as a flat width: circumference columns are halved,
    /// flat and length columns pass through.
    pub fn flat_value(&self, row: &SizeRow, key: MeasurementKey) -> Option<f64> {
        let value = row.get(key)?;
        match self.kind(key) {
            Some(MeasurementKind::Circumference) => Some(value / 2.0),
            _ => Some(value),
        }
    }

    /// A row's value as a full circumference: flat columns are doubled.
    pub fn circumference_value(&self, row: &SizeRow, key: MeasurementKey) -> Option<f64> {
        let value = row.get(key)?;
        match self.kind(key) {
            Some(MeasurementKind::Flat) => Some(value * 2.0),
            _ => Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> ParsedSizeChart {
        let mut measurements = IndexMap::new();
        measurements.insert(MeasurementKey::ChestWidth, 104.0);
        measurements.insert(MeasurementKey::WaistCirc, 40.0);
        ParsedSizeChart {
            headers: vec!["size".into(), "가슴둘레".into(), "허리단면".into(), "color".into()],
            mapped_keys: vec![
                None,
                Some(MeasurementKey::ChestWidth),
                Some(MeasurementKey::WaistCirc),
                None,
            ],
            kinds: vec![
                None,
                Some(MeasurementKind::Circumference),
                Some(MeasurementKind::Flat),
                None,
            ],
            size_column: Some(0),
            rows: vec![SizeRow {
                label: "M".into(),
                measurements,
            }],
            layout: ChartLayout::Tabular {
                delimiter: Delimiter::Tab,
            },
        }
    }

    #[test]
    fn test_flat_and_circumference_values() {
        let chart = chart();
        let row = chart.row("m").unwrap();
        assert_eq!(chart.flat_value(row, MeasurementKey::ChestWidth), Some(52.0));
        assert_eq!(chart.circumference_value(row, MeasurementKey::ChestWidth), Some(104.0));
        assert_eq!(chart.flat_value(row, MeasurementKey::WaistCirc), Some(40.0));
        assert_eq!(chart.circumference_value(row, MeasurementKey::WaistCirc), Some(80.0));
        assert_eq!(chart.flat_value(row, MeasurementKey::HipCirc), None);
    }

    #[test]
    fn test_unmapped_headers_skip_size_column() {
        let chart = chart();
        assert_eq!(chart.unmapped_headers(), vec!["color"]);
        assert_eq!(
            chart.keys(),
            vec![MeasurementKey::ChestWidth, MeasurementKey::WaistCirc]
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(chart()).unwrap();
        assert_eq!(json["mappedKeys"][1], "chestWidth");
        assert_eq!(json["rows"][0]["measurements"]["waistCirc"], 40.0);
        assert_eq!(json["layout"]["type"], "tabular");
    }
}
