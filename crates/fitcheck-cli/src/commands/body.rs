//! Body command - estimate a full set of body measurements.

use std::path::PathBuf;

use colored::Colorize;
use fitcheck::FitCheck;

use super::{estimate_body, print_body, worn_size_overrides};
use crate::cli::{MeasurementArgs, ProfileArgs, WornArgs};

pub fn run(
    profile: ProfileArgs,
    measurements: MeasurementArgs,
    worn: WornArgs,
    wardrobe: Option<PathBuf>,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let fitcheck = FitCheck::new();
    let worn = worn_size_overrides(&fitcheck, &worn, None)?;
    let report = estimate_body(&fitcheck, &profile, &measurements, worn, wardrobe.as_deref())?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {}, {} cm, {} kg",
        "Body estimate for".cyan().bold(),
        profile.gender,
        profile.height,
        profile.weight
    );
    println!();
    print_body(&report);

    Ok(())
}
