//! Fuzz target for the size-chart parser.
//!
//! This fuzzer tests that the parser:
//! 1. Never panics on malformed input
//! 2. Only returns charts whose rows hold positive values
//! 3. Keeps headers, keys and kinds parallel

#![no_main]

use fitcheck::chart::{ParserConfig, SizeChartParser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let text = String::from_utf8_lossy(data);
    let parser = SizeChartParser::new();

    if let Some(chart) = parser.parse(&text) {
        assert_eq!(chart.headers.len(), chart.mapped_keys.len());
        assert_eq!(chart.headers.len(), chart.kinds.len());
        for row in &chart.rows {
            assert!(!row.measurements.is_empty());
            assert!(row.measurements.values().all(|v| *v > 0.0));
            for key in row.measurements.keys() {
                let _ = chart.flat_value(row, *key);
                let _ = chart.circumference_value(row, *key);
            }
        }
    }

    let strict = SizeChartParser::with_config(ParserConfig {
        flattened_recovery: false,
        max_rows: Some(3),
    });
    if let Some(chart) = strict.parse(&text) {
        assert!(chart.rows.len() <= 3);
    }
});
