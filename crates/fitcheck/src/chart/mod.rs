//! Size-chart recovery from pasted retailer text.

mod model;
mod parser;
mod vocabulary;

pub use model::{ChartLayout, Delimiter, ParsedSizeChart, SizeRow};
pub use parser::{
    ParserConfig, SizeChartParser, is_size_label, parse_cell_number, parse_flattened,
    parse_interleaved, parse_size_chart, parse_tabular, parse_token_number,
};
pub use vocabulary::{
    MeasurementKey, MeasurementKind, exact_header_key, is_size_header, kind_for_header,
    map_header, needs_halving, normalize_header,
};
