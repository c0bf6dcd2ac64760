mod calc;
mod cli;
mod config;
mod error;
mod report;
mod types;

use crate::error::ImcError;
use crate::types::config::FormatSetting;
use crate::types::measurement::{validate_height, Measurement, Sex};
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: cli::Cli) -> Result<i32, ImcError> {
    tracing::info!("imc v{}", env!("CARGO_PKG_VERSION"));
    match cli.command {
        cli::Commands::Calc(cmd) => {
            let cwd = std::env::current_dir()?;
            let loaded = config::load_config(&cwd, cmd.config.as_deref())?;

            let weight = cmd.weight.unwrap_or_else(|| loaded.weight_kg());
            let height = cmd.height.unwrap_or_else(|| loaded.height_m());
            let sex = Sex::from_text(cmd.sex.as_deref().unwrap_or_else(|| loaded.sex()));

            let measurement = Measurement::new(weight, height)?;
            let assessment = calc::evaluate(&measurement, sex);
            tracing::info!(
                adjusted_bmi = assessment.adjusted_bmi,
                category = assessment.category.label(),
                "assessment complete"
            );

            let output_format = match cmd.format {
                Some(cli::ReportFormat::Text) => report::OutputFormat::Text,
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                None => match loaded.format() {
                    FormatSetting::Text => report::OutputFormat::Text,
                    FormatSetting::Json => report::OutputFormat::Json,
                    FormatSetting::Md => report::OutputFormat::Md,
                },
            };
            let rendered = report::render(&assessment, output_format, loaded.precision())?;
            println!("{rendered}");

            if assessment.ideal_weight_available() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Classify(cmd) => {
            println!("Classificação: {}", calc::classify_bmi(cmd.bmi).label());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Ideal(cmd) => {
            let height = validate_height(cmd.height)?;
            let ideal = calc::compute_ideal_weight(height, Sex::from_text(&cmd.sex));
            println!(
                "{}",
                report::ideal_weight_line(ideal, types::config::DEFAULT_PRECISION)
            );
            if ideal.is_some() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Table => {
            for category in calc::BmiCategory::all() {
                let range = match category.published_range() {
                    (None, Some(upper)) => format!("< {upper}"),
                    (Some(lower), Some(upper)) => format!("[{lower}, {upper})"),
                    (Some(lower), None) => format!(">= {lower}"),
                    (None, None) => "-".to_string(),
                };
                println!(
                    "{:<14} {} ({})",
                    range,
                    category.label(),
                    category.english()
                );
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e @ ImcError::InvalidMeasurement(_)) => {
            eprintln!("{e}");
            std::process::exit(exit_code::INVALID_INPUT);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
