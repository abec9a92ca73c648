//! CLI command implementations.

pub mod body;
pub mod chart;
pub mod recommend;
pub mod reverse;

use std::io::Read;
use std::path::Path;

use colored::Colorize;
use fitcheck::body::{OverrideLayers, OverrideSource, PartialBody, Provenance};
use fitcheck::garment::{ClothingCategory, FitFeedback};
use fitcheck::{BodyReport, FitCheck, ParsedSizeChart, Wardrobe};

use crate::cli::{MeasurementArgs, ProfileArgs, WornArgs};

type CommandResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Read a chart file, or stdin for "-".
fn read_chart_text(path: &Path) -> CommandResult<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e).into())
}

fn load_chart(fitcheck: &FitCheck, path: &Path) -> CommandResult<ParsedSizeChart> {
    let text = read_chart_text(path)?;
    fitcheck.parse_chart(&text).ok_or_else(|| {
        format!(
            "Could not recognize a size chart in {} - try entering measurements manually",
            path.display()
        )
        .into()
    })
}

/// Overrides implied by `--worn-size`, read from `--worn-chart` or, when
/// that is absent, from `default_chart`.
fn worn_size_overrides(
    fitcheck: &FitCheck,
    worn: &WornArgs,
    default_chart: Option<&ParsedSizeChart>,
) -> CommandResult<Option<PartialBody<f64>>> {
    let Some(label) = &worn.worn_size else {
        return Ok(None);
    };

    let loaded;
    let chart = match (&worn.worn_chart, default_chart) {
        (Some(path), _) => {
            loaded = load_chart(fitcheck, path)?;
            &loaded
        }
        (None, Some(chart)) => chart,
        (None, None) => return Err("--worn-size needs --worn-chart".into()),
    };

    let feedback = worn.feedback.unwrap_or(FitFeedback::Good);
    let overrides = fitcheck.size_chart_overrides(chart, label, ClothingCategory::Top, feedback)?;
    Ok(Some(overrides))
}

/// Estimate the body from command-line flags, a worn size and an optional
/// wardrobe.
///
/// Measurement flags outrank the wardrobe profile's stored measurements;
/// the worn size outranks values reverse-estimated from garments.
fn estimate_body(
    fitcheck: &FitCheck,
    profile: &ProfileArgs,
    measurements: &MeasurementArgs,
    worn: Option<PartialBody<f64>>,
    wardrobe: Option<&Path>,
) -> CommandResult<BodyReport> {
    let mut layers =
        OverrideLayers::new().with(OverrideSource::UserInput, measurements.to_overrides());
    if let Some(worn) = worn {
        layers = layers.with(OverrideSource::SizeChart, worn);
    }

    let report = match wardrobe {
        Some(path) => {
            let wardrobe = Wardrobe::load(path)?;
            fitcheck
                .estimate_with_wardrobe(profile.gender, profile.height, profile.weight, layers, &wardrobe)?
                .body
        }
        None => fitcheck.estimate_body(profile.gender, profile.height, profile.weight, &layers)?,
    };
    Ok(report)
}

fn print_body(report: &BodyReport) {
    println!(
        "  {:<14} {:>8} {:>10}  {}",
        "Field".bold(),
        "Estimate".bold(),
        "Baseline".bold(),
        "Source".bold()
    );
    for (field, value) in report.dimensions.iter() {
        let source = match report.provenance.get(&field) {
            Some(Provenance::Override(source)) => source.to_string().green(),
            Some(Provenance::Propagated) => "propagated".yellow(),
            _ => "baseline".dimmed(),
        };
        println!(
            "  {:<14} {:>8.1} {:>10.1}  {}",
            field.name(),
            value,
            report.baseline.get(field),
            source
        );
    }
}
