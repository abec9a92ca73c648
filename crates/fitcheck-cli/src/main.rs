//! FitCheck CLI - garment fit prediction.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Chart { file, json } => commands::chart::run(file, json, cli.verbose),

        Commands::Body {
            profile,
            measurements,
            worn,
            wardrobe,
            json,
        } => commands::body::run(profile, measurements, worn, wardrobe, json, cli.verbose),

        Commands::Reverse { wardrobe, json } => commands::reverse::run(wardrobe, json, cli.verbose),

        Commands::Recommend {
            chart,
            profile,
            measurements,
            worn,
            wardrobe,
            json,
        } => commands::recommend::run(chart, profile, measurements, worn, wardrobe, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize logging (reads RUST_LOG env var).
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(log::LevelFilter::Warn);
    }
    builder.init();
}
