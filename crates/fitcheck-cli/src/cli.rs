//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use fitcheck::body::{BodyField, PartialBody};
use fitcheck::garment::FitFeedback;
use fitcheck::Gender;
use std::path::PathBuf;

/// FitCheck: predict garment fit from body statistics and size charts
#[derive(Parser)]
#[command(name = "fitcheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a pasted size chart
    Chart {
        /// Text file holding the pasted chart ("-" for stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate a full set of body measurements
    Body {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        measurements: MeasurementArgs,

        #[command(flatten)]
        worn: WornArgs,

        /// Wardrobe file whose garments refine the estimate
        #[arg(long)]
        wardrobe: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate body measurements from the garments in a wardrobe
    Reverse {
        /// Path to the wardrobe file
        #[arg(value_name = "WARDROBE")]
        wardrobe: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Judge every size of a chart and recommend one
    Recommend {
        /// Text file holding the pasted chart ("-" for stdin)
        #[arg(long, value_name = "FILE")]
        chart: PathBuf,

        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        measurements: MeasurementArgs,

        #[command(flatten)]
        worn: WornArgs,

        /// Wardrobe file whose garments refine the estimate
        #[arg(long)]
        wardrobe: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Height, weight and reference population.
#[derive(Args, Clone, Debug)]
pub struct ProfileArgs {
    /// Reference population (male/female)
    #[arg(short, long, value_parser = parse_gender)]
    pub gender: Gender,

    /// Height in cm
    #[arg(long)]
    pub height: f64,

    /// Weight in kg
    #[arg(long)]
    pub weight: f64,
}

/// Measurements taken directly on the body, in cm.
#[derive(Args, Clone, Debug, Default)]
pub struct MeasurementArgs {
    /// Shoulder width
    #[arg(long)]
    pub shoulder: Option<f64>,

    /// Chest circumference
    #[arg(long)]
    pub chest: Option<f64>,

    /// Waist circumference
    #[arg(long)]
    pub waist: Option<f64>,

    /// Hip circumference
    #[arg(long)]
    pub hip: Option<f64>,

    /// Neck circumference
    #[arg(long)]
    pub neck: Option<f64>,

    /// Arm length, shoulder to wrist
    #[arg(long)]
    pub arm: Option<f64>,

    /// Torso length, back neck to waist
    #[arg(long)]
    pub torso: Option<f64>,
}

impl MeasurementArgs {
    pub fn to_overrides(&self) -> PartialBody<f64> {
        let pairs = [
            (BodyField::ShoulderWidth, self.shoulder),
            (BodyField::ChestCirc, self.chest),
            (BodyField::WaistCirc, self.waist),
            (BodyField::HipCirc, self.hip),
            (BodyField::NeckCirc, self.neck),
            (BodyField::ArmLength, self.arm),
            (BodyField::TorsoLength, self.torso),
        ];

        let mut overrides = PartialBody::new();
        for (field, value) in pairs {
            if let Some(value) = value {
                overrides.set(field, value);
            }
        }
        overrides
    }
}

/// A size already worn, with how it fit.
#[derive(Args, Clone, Debug, Default)]
pub struct WornArgs {
    /// Label of a size you already wear (e.g. M)
    #[arg(long, value_name = "LABEL")]
    pub worn_size: Option<String>,

    /// Chart the worn size comes from (recommend defaults to --chart)
    #[arg(long, value_name = "FILE", requires = "worn_size")]
    pub worn_chart: Option<PathBuf>,

    /// How the worn size fit: very_tight, tight, good, loose, very_loose
    #[arg(long, value_parser = parse_feedback, requires = "worn_size")]
    pub feedback: Option<FitFeedback>,
}

fn parse_feedback(s: &str) -> Result<FitFeedback, String> {
    FitFeedback::parse(s).ok_or_else(|| {
        format!(
            "Unknown fit feedback: {}. Use very_tight, tight, good, loose or very_loose.",
            s
        )
    })
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    Gender::parse(s).ok_or_else(|| format!("Unknown gender: {}. Use male or female.", s))
}
