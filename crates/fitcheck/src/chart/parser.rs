//! Heuristic size-chart recovery from copy-pasted text.
//!
//! Multi-line input is read as a delimited table. A single line is tried
//! against each single-line strategy in order; the first that produces a
//! chart wins. Every strategy is independent and either returns a complete
//! chart or nothing.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::model::{ChartLayout, Delimiter, ParsedSizeChart, SizeRow};
use super::vocabulary::{
    MeasurementKey, MeasurementKind, exact_header_key, is_size_header, kind_for_header,
    map_header,
};

static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?(?:\d+(?:\.\d*)?|\.\d+)").unwrap());

static SIZE_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:xxs|xs|s|m|l|xl|xxl|xxxl|free|\d{2,3})$").unwrap());

/// A single-line recovery strategy.
type LineStrategy = fn(&str) -> Option<ParsedSizeChart>;

/// Single-line strategies, tried in order.
const SINGLE_LINE_STRATEGIES: &[(&str, LineStrategy)] = &[
    ("flattened", parse_flattened),
    ("interleaved", parse_interleaved),
];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Try to recover tables pasted onto a single line.
    pub flattened_recovery: bool,
    /// Maximum size rows to keep (None = all).
    pub max_rows: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            flattened_recovery: true,
            max_rows: None,
        }
    }
}

/// Recovers size charts from free text.
#[derive(Debug, Clone, Default)]
pub struct SizeChartParser {
    config: ParserConfig,
}

impl SizeChartParser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse pasted text. Returns `None` when no usable table is found.
    pub fn parse(&self, raw: &str) -> Option<ParsedSizeChart> {
        let lines = preprocess(raw);

        let mut chart = match lines.as_slice() {
            [] => {
                log::debug!("size chart: empty input");
                return None;
            }
            [line] => {
                if !self.config.flattened_recovery {
                    log::debug!("size chart: single line and flattened recovery disabled");
                    return None;
                }
                SINGLE_LINE_STRATEGIES.iter().find_map(|(name, strategy)| {
                    let chart = strategy(line);
                    log::debug!(
                        "size chart: {} strategy {}",
                        name,
                        if chart.is_some() { "matched" } else { "failed" }
                    );
                    chart
                })?
            }
            _ => parse_tabular(&lines)?,
        };

        if let Some(max) = self.config.max_rows {
            chart.rows.truncate(max);
        }
        Some(chart)
    }
}

/// Parse with the default configuration.
pub fn parse_size_chart(raw: &str) -> Option<ParsedSizeChart> {
    SizeChartParser::new().parse(raw)
}

/// Split into trimmed, non-blank lines.
fn preprocess(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

impl Delimiter {
    /// Pick a delimiter from the header line: tab, then pipe, then runs of
    /// whitespace.
    pub fn detect(line: &str) -> Self {
        if line.contains('\t') {
            Delimiter::Tab
        } else if line.contains('|') {
            Delimiter::Pipe
        } else {
            Delimiter::Whitespace
        }
    }

    /// Split a line into trimmed cells.
    pub fn split(self, line: &str) -> Vec<String> {
        let line = line.trim();
        match self {
            Delimiter::Tab => line.split('\t').map(|c| c.trim().to_string()).collect(),
            Delimiter::Pipe => {
                // Border pipes (`| a | b |`) do not open empty cells.
                let inner = line.strip_prefix('|').unwrap_or(line);
                let inner = inner.strip_suffix('|').unwrap_or(inner);
                inner.split('|').map(|c| c.trim().to_string()).collect()
            }
            Delimiter::Whitespace => MULTI_SPACE
                .split(line)
                .map(|c| c.trim().to_string())
                .collect(),
        }
    }
}

/// Read the leading number of a table cell (`"45"`, `"45.5cm"`, `"45~47"`).
pub fn parse_cell_number(cell: &str) -> Option<f64> {
    let m = LEADING_NUMBER.find(cell.trim())?;
    m.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Read a whole token as a number, allowing a trailing `cm`.
pub fn parse_token_number(token: &str) -> Option<f64> {
    let token = token.trim();
    let lowered = token.to_ascii_lowercase();
    let digits = lowered.strip_suffix("cm").unwrap_or(&lowered);
    if !LEADING_NUMBER.find(digits).is_some_and(|m| m.end() == digits.len()) {
        return None;
    }
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whether a token looks like a size label (`S`, `XL`, `FREE`, `95`).
pub fn is_size_label(token: &str) -> bool {
    SIZE_LABEL.is_match(token.trim())
}

/// Delimited table: first line is the header row.
pub fn parse_tabular(lines: &[&str]) -> Option<ParsedSizeChart> {
    let (header_line, data_lines) = lines.split_first()?;
    if data_lines.is_empty() {
        log::debug!("size chart: header line without data");
        return None;
    }

    let delimiter = Delimiter::detect(header_line);
    let headers = delimiter.split(header_line);
    if headers.len() < 2 {
        log::debug!("size chart: header row has {} cell(s)", headers.len());
        return None;
    }

    let size_column = headers.iter().position(|h| is_size_header(h)).unwrap_or(0);
    let mapped_keys: Vec<Option<MeasurementKey>> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| if i == size_column { None } else { map_header(h) })
        .collect();
    let kinds: Vec<Option<MeasurementKind>> = headers
        .iter()
        .zip(&mapped_keys)
        .map(|(h, key)| key.map(|k| kind_for_header(h, k)))
        .collect();

    let mut rows = Vec::new();
    for (n, line) in data_lines.iter().enumerate() {
        let cells = delimiter.split(line);
        if cells.len() < 2 {
            log::trace!("size chart: skipping short line {:?}", line);
            continue;
        }

        let has_number = cells
            .iter()
            .enumerate()
            .any(|(i, cell)| i != size_column && parse_cell_number(cell).is_some());
        if !has_number {
            log::trace!("size chart: skipping caption line {:?}", line);
            continue;
        }

        let mut measurements = IndexMap::new();
        for (i, key) in mapped_keys.iter().enumerate() {
            let Some(key) = key else { continue };
            let Some(value) = cells.get(i).and_then(|c| parse_cell_number(c)) else {
                continue;
            };
            if value > 0.0 {
                measurements.entry(*key).or_insert(value);
            }
        }
        if measurements.is_empty() {
            continue;
        }

        let label = cells
            .get(size_column)
            .filter(|c| !c.is_empty())
            .cloned()
            .unwrap_or_else(|| format!("Row{}", n + 1));
        rows.push(SizeRow {
            label,
            measurements,
        });
    }

    if rows.is_empty() {
        log::debug!("size chart: no data rows survived filtering");
        return None;
    }

    Some(ParsedSizeChart {
        headers,
        mapped_keys,
        kinds,
        size_column: Some(size_column),
        rows,
        layout: ChartLayout::Tabular { delimiter },
    })
}

/// Header tokens of a single-line paste: first occurrence per key, plus the
/// index of the last header token seen.
struct HeaderTokens<'a> {
    found: Vec<(usize, &'a str, MeasurementKey)>,
    last: usize,
}

fn find_header_tokens<'a>(tokens: &[&'a str]) -> Option<HeaderTokens<'a>> {
    let mut found: Vec<(usize, &'a str, MeasurementKey)> = Vec::new();
    let mut last = None;
    for (i, &token) in tokens.iter().enumerate() {
        // Exact matches only: a stray `L` must not read as "length".
        if let Some(key) = exact_header_key(token) {
            last = Some(i);
            if !found.iter().any(|(_, _, k)| *k == key) {
                found.push((i, token, key));
            }
        }
    }
    Some(HeaderTokens { found, last: last? })
}

fn single_line_chart(
    headers: &HeaderTokens<'_>,
    labelled_values: Vec<(String, Vec<f64>)>,
    layout: ChartLayout,
) -> Option<ParsedSizeChart> {
    let keys: Vec<MeasurementKey> = headers.found.iter().map(|(_, _, k)| *k).collect();
    let rows: Vec<SizeRow> = labelled_values
        .into_iter()
        .filter_map(|(label, values)| {
            let measurements: IndexMap<MeasurementKey, f64> = keys
                .iter()
                .zip(values)
                .filter(|(_, v)| *v > 0.0)
                .map(|(k, v)| (*k, v))
                .collect();
            (!measurements.is_empty()).then_some(SizeRow {
                label,
                measurements,
            })
        })
        .collect();

    if rows.is_empty() {
        return None;
    }

    Some(ParsedSizeChart {
        headers: headers.found.iter().map(|(_, t, _)| t.to_string()).collect(),
        mapped_keys: keys.iter().map(|k| Some(*k)).collect(),
        kinds: headers
            .found
            .iter()
            .map(|(_, t, k)| Some(kind_for_header(t, *k)))
            .collect(),
        size_column: None,
        rows,
        layout,
    })
}

/// Single line laid out as `labels… headers… values…`, values row-major.
pub fn parse_flattened(line: &str) -> Option<ParsedSizeChart> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let headers = find_header_tokens(&tokens)?;
    let first = headers.found[0].0;

    let labels: Vec<&str> = tokens[..first]
        .iter()
        .copied()
        .filter(|t| is_size_label(t))
        .collect();
    if labels.is_empty() {
        return None;
    }

    let numbers: Vec<f64> = tokens[headers.last + 1..]
        .iter()
        .filter_map(|t| parse_token_number(t))
        .collect();
    let width = headers.found.len();
    if numbers.len() != labels.len() * width {
        log::debug!(
            "size chart: {} values for {} sizes x {} headers",
            numbers.len(),
            labels.len(),
            width
        );
        return None;
    }

    let labelled = labels
        .iter()
        .zip(numbers.chunks(width))
        .map(|(label, values)| (label.to_string(), values.to_vec()))
        .collect();
    single_line_chart(&headers, labelled, ChartLayout::Flattened)
}

/// Single line laid out as `headers… LABEL v v v LABEL v v v`.
pub fn parse_interleaved(line: &str) -> Option<ParsedSizeChart> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let headers = find_header_tokens(&tokens)?;
    let width = headers.found.len();

    let rest = &tokens[headers.last + 1..];
    if rest.is_empty() || rest.len() % (width + 1) != 0 {
        return None;
    }

    let mut labelled = Vec::new();
    for group in rest.chunks(width + 1) {
        let (label, values) = group.split_first()?;
        if !is_size_label(label) {
            return None;
        }
        let values: Option<Vec<f64>> = values.iter().map(|t| parse_token_number(t)).collect();
        labelled.push((label.to_string(), values?));
    }
    single_line_chart(&headers, labelled, ChartLayout::Interleaved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(parse_size_chart("").is_none());
        assert!(parse_size_chart("  \n\t\n ").is_none());
    }

    #[test]
    fn test_single_header_line() {
        assert!(parse_size_chart("single header line only").is_none());
        assert!(parse_size_chart("사이즈\t어깨\t가슴").is_none());
    }

    #[test]
    fn test_tab_table() {
        let text = "사이즈\t어깨너비\t가슴단면\t총장\t소매길이\nS\t43\t51\t67\t59\nM\t45\t53\t69\t61";
        let chart = parse_size_chart(text).unwrap();

        assert_eq!(chart.rows.len(), 2);
        assert_eq!(
            chart.mapped_keys,
            vec![
                None,
                Some(MeasurementKey::ShoulderWidth),
                Some(MeasurementKey::ChestWidth),
                Some(MeasurementKey::TotalLength),
                Some(MeasurementKey::SleeveLength),
            ]
        );
        let m = chart.row("M").unwrap();
        assert_eq!(m.get(MeasurementKey::ShoulderWidth), Some(45.0));
        assert_eq!(m.get(MeasurementKey::ChestWidth), Some(53.0));
        assert_eq!(m.get(MeasurementKey::TotalLength), Some(69.0));
        assert_eq!(m.get(MeasurementKey::SleeveLength), Some(61.0));
        assert_eq!(
            chart.layout,
            ChartLayout::Tabular {
                delimiter: Delimiter::Tab
            }
        );
    }

    #[test]
    fn test_pipe_table_with_borders() {
        let text = "| Size | Shoulder | Chest | Length |\n|---|---|---|---|\n| M | 45 | 53 | 69 |\n| L | 47 | 56 | 71 |";
        let chart = parse_size_chart(text).unwrap();
        assert_eq!(chart.headers[0], "Size");
        assert_eq!(chart.size_column, Some(0));
        assert_eq!(chart.labels(), vec!["M", "L"]);
        assert_eq!(chart.row("L").unwrap().get(MeasurementKey::ChestWidth), Some(56.0));
    }

    #[test]
    fn test_space_table_keeps_spaced_headers() {
        let text = "Size (cm)   Chest Width   Total Length\nM   53   69\nL   56   71";
        let chart = parse_size_chart(text).unwrap();
        assert_eq!(chart.headers, vec!["Size (cm)", "Chest Width", "Total Length"]);
        assert_eq!(
            chart.row("M").unwrap().get(MeasurementKey::TotalLength),
            Some(69.0)
        );
    }

    #[test]
    fn test_caption_rows_skipped() {
        let text = "사이즈\t어깨\t가슴\n단위\tcm\tcm\nS\t43\t51\n* 측정 방법에 따라 1~2cm 오차\nM\t45\t53";
        let chart = parse_size_chart(text).unwrap();
        assert_eq!(chart.labels(), vec!["S", "M"]);
    }

    #[test]
    fn test_size_column_not_first() {
        let text = "어깨\t사이즈\t가슴\n43\tS\t51\n45\tM\t53";
        let chart = parse_size_chart(text).unwrap();
        assert_eq!(chart.size_column, Some(1));
        assert_eq!(chart.labels(), vec!["S", "M"]);
        assert_eq!(chart.row("S").unwrap().get(MeasurementKey::ShoulderWidth), Some(43.0));
    }

    #[test]
    fn test_unmapped_header_and_bad_cells() {
        let text = "size\tcolor\tchest\twaist\nM\t2\t-3\t40\nL\tred\tabc\t0";
        let chart = parse_size_chart(text).unwrap();

        assert_eq!(chart.mapped_keys[1], None);
        assert_eq!(chart.unmapped_headers(), vec!["color"]);

        // Non-positive and non-numeric cells are dropped, not stored.
        let m = chart.row("M").unwrap();
        assert_eq!(m.get(MeasurementKey::ChestWidth), None);
        assert_eq!(m.get(MeasurementKey::WaistCirc), Some(40.0));

        // L has numbers but no positive mapped value.
        assert!(chart.row("L").is_none());
    }

    #[test]
    fn test_blank_size_cell_gets_row_label() {
        let text = "어깨\t사이즈\t가슴\n43\t\t51";
        let chart = parse_size_chart(text).unwrap();
        assert_eq!(chart.labels(), vec!["Row1"]);
    }

    #[test]
    fn test_no_rows_returns_none() {
        assert!(parse_size_chart("사이즈\t어깨\n안내\t참고").is_none());
        assert!(parse_size_chart("name\tcolor\nM\t2").is_none());
    }

    #[test]
    fn test_flattened_recovery() {
        let line = "S M L 어깨 가슴 총장 43 51 67 45 53 69 47 55 71";
        let chart = parse_size_chart(line).unwrap();
        assert_eq!(chart.layout, ChartLayout::Flattened);
        assert_eq!(chart.headers, vec!["어깨", "가슴", "총장"]);
        assert_eq!(chart.labels(), vec!["S", "M", "L"]);
        assert_eq!(chart.row("L").unwrap().get(MeasurementKey::TotalLength), Some(71.0));
        assert_eq!(chart.size_column, None);
    }

    #[test]
    fn test_flattened_count_mismatch() {
        assert!(parse_flattened("S M 어깨 가슴 43 51 45").is_none());
    }

    #[test]
    fn test_flattened_needs_labels() {
        assert!(parse_flattened("어깨 가슴 43 51").is_none());
    }

    #[test]
    fn test_flattened_drops_empty_rows() {
        let chart = parse_flattened("S M 어깨 가슴 0 0 45 53").unwrap();
        assert_eq!(chart.labels(), vec!["M"]);
    }

    #[test]
    fn test_interleaved_recovery() {
        let line = "사이즈 어깨너비 가슴단면 총장 S 43 51 67 M 45 53 69";
        let chart = parse_size_chart(line).unwrap();
        assert_eq!(chart.layout, ChartLayout::Interleaved);
        assert_eq!(chart.labels(), vec!["S", "M"]);
        assert_eq!(chart.row("M").unwrap().get(MeasurementKey::ChestWidth), Some(53.0));
    }

    #[test]
    fn test_single_line_disabled() {
        let parser = SizeChartParser::with_config(ParserConfig {
            flattened_recovery: false,
            max_rows: None,
        });
        assert!(parser.parse("S M 어깨 가슴 43 51 45 53").is_none());
    }

    #[test]
    fn test_max_rows() {
        let parser = SizeChartParser::with_config(ParserConfig {
            flattened_recovery: true,
            max_rows: Some(1),
        });
        let chart = parser.parse("size\tchest\nS\t50\nM\t52").unwrap();
        assert_eq!(chart.labels(), vec!["S"]);
    }

    #[test]
    fn test_number_parsing() {
        assert_eq!(parse_cell_number("45.5cm"), Some(45.5));
        assert_eq!(parse_cell_number("45~47"), Some(45.0));
        assert_eq!(parse_cell_number("약 45"), None);
        assert_eq!(parse_token_number("45cm"), Some(45.0));
        assert_eq!(parse_token_number("2XL"), None);
        assert_eq!(parse_token_number("inf"), None);
    }

    #[test]
    fn test_size_labels() {
        for label in ["S", "xl", "FREE", "95", "100"] {
            assert!(is_size_label(label), "{}", label);
        }
        for label in ["XXXXL", "1", "1000", "어깨"] {
            assert!(!is_size_label(label), "{}", label);
        }
    }
}
