//! Chart command - parse a pasted size chart.

use std::path::PathBuf;

use colored::Colorize;
use fitcheck::chart::ChartLayout;
use fitcheck::garment::ClothingDimensions;
use fitcheck::FitCheck;

use super::load_chart;

pub fn run(file: PathBuf, json_output: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let fitcheck = FitCheck::new();
    let chart = load_chart(&fitcheck, &file)?;

    if json_output {
        let dimensions: Vec<_> = chart
            .rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "size": row.label,
                    "dimensions": ClothingDimensions::from_chart_row(&chart, row),
                })
            })
            .collect();
        let output = serde_json::json!({
            "chart": chart,
            "clothingDimensions": dimensions,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let layout = match chart.layout {
        ChartLayout::Tabular { delimiter } => format!("tabular, {:?}-delimited", delimiter).to_lowercase(),
        ChartLayout::Flattened => "single line, flattened".to_string(),
        ChartLayout::Interleaved => "single line, interleaved".to_string(),
    };
    println!(
        "{} {} ({})",
        "Size chart:".cyan().bold(),
        format!("{} size(s)", chart.rows.len()).white(),
        layout
    );
    println!();

    let keys = chart.keys();
    print!("  {:<8}", "Size".bold());
    for key in &keys {
        print!(" {:>10}", key.label().bold());
    }
    println!();
    for row in &chart.rows {
        print!("  {:<8}", row.label.green());
        for key in &keys {
            match row.get(*key) {
                Some(v) => print!(" {:>10.1}", v),
                None => print!(" {:>10}", "-".dimmed()),
            }
        }
        println!();
    }

    let unmapped = chart.unmapped_headers();
    if !unmapped.is_empty() {
        println!();
        println!("{} {}", "Ignored columns:".yellow(), unmapped.join(", "));
    }

    if verbose {
        println!();
        println!("{}", "Column kinds:".yellow().bold());
        for key in &keys {
            if let Some(kind) = chart.kind(*key) {
                println!("  {:<14} {:?}", key.name(), kind);
            }
        }
    }

    Ok(())
}
