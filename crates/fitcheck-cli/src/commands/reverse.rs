//! Reverse command - body measurements from owned garments.

use std::path::PathBuf;

use colored::Colorize;
use fitcheck::{FitCheck, Wardrobe};

use super::print_body;

pub fn run(wardrobe_path: PathBuf, json_output: bool, _verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let wardrobe = Wardrobe::load(&wardrobe_path)?;
    let fitcheck = FitCheck::new();
    // With a saved profile the garments also refine a full body estimate.
    let (estimates, body) = match &wardrobe.profile {
        Some(_) => {
            let report = fitcheck.estimate_from_wardrobe(&wardrobe)?;
            (report.garment_estimates, Some(report.body))
        }
        None => (fitcheck.garment_estimates(&wardrobe), None),
    };

    if json_output {
        let output = serde_json::json!({
            "garmentEstimates": estimates,
            "body": body,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {} ({} garment(s))",
        "Reverse estimate from".cyan().bold(),
        wardrobe_path.display(),
        wardrobe.garments.len()
    );
    println!();

    if estimates.is_empty() {
        println!("{}", "No garment measurement matched a body field.".yellow());
    }
    for (field, estimate) in estimates.iter() {
        let count = match estimate.count {
            1 => "1 observation".to_string().dimmed(),
            n => format!("{} observations", n).white(),
        };
        println!("  {:<14} {:>6.1} cm  {}", field.name(), estimate.value, count);
    }

    if let (Some(body), Some(profile)) = (&body, &wardrobe.profile) {
        println!();
        println!(
            "{} {}, {} cm, {} kg",
            "Body estimate for".cyan().bold(),
            profile.gender,
            profile.height,
            profile.weight
        );
        print_body(body);
    }

    Ok(())
}
