//! Recommend command - judge every size of a chart against the body.

use std::path::PathBuf;

use colored::Colorize;
use fitcheck::fit::{FitLevel, judge_fit};
use fitcheck::FitCheck;

use super::{estimate_body, load_chart, print_body, worn_size_overrides};
use crate::cli::{MeasurementArgs, ProfileArgs, WornArgs};

pub fn run(
    chart_path: PathBuf,
    profile: ProfileArgs,
    measurements: MeasurementArgs,
    worn: WornArgs,
    wardrobe: Option<PathBuf>,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let fitcheck = FitCheck::new();
    let chart = load_chart(&fitcheck, &chart_path)?;
    let worn = worn_size_overrides(&fitcheck, &worn, Some(&chart))?;
    let report = estimate_body(&fitcheck, &profile, &measurements, worn, wardrobe.as_deref())?;
    let body = &report.dimensions;
    let recommendation = fitcheck.recommend(&chart, body);

    if json_output {
        let sizes: Vec<_> = chart
            .rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "size": row.label,
                    "judgments": judge_fit(&chart, row, body),
                })
            })
            .collect();
        let output = serde_json::json!({
            "body": report,
            "sizes": sizes,
            "recommendation": recommendation,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if verbose {
        println!("{}", "Body estimate:".cyan().bold());
        print_body(&report);
        println!();
    }

    for row in &chart.rows {
        let judgments = fitcheck.judge(&chart, &row.label, body)?;
        let marker = match &recommendation {
            Some(r) if r.label == row.label => "*".green().bold(),
            _ => " ".normal(),
        };
        print!("{} {:<8}", marker, row.label.bold());
        if judgments.is_empty() {
            print!(" {}", "nothing comparable".dimmed());
        }
        for j in &judgments {
            let level = match j.level {
                FitLevel::Tight => j.level.to_string().red(),
                FitLevel::Slim | FitLevel::Relaxed => j.level.to_string().yellow(),
                FitLevel::Good => j.level.to_string().green(),
                FitLevel::Loose => j.level.to_string().magenta(),
            };
            print!("  {} {} ({:+.1})", j.part, level, j.ease);
        }
        println!();
    }

    println!();
    match recommendation {
        Some(r) => println!("{} {}", "Recommended size:".cyan().bold(), r.label.green().bold()),
        None => println!("{}", "No size could be compared with the body.".yellow()),
    }

    Ok(())
}
