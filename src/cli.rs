use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "imc",
    version,
    about = "Body mass index (IMC) and ideal weight calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors (results are still printed)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute adjusted BMI, its classification and the ideal weight
    Calc(CalcCommand),
    /// Classify an already adjusted BMI value
    Classify(ClassifyCommand),
    /// Estimate the ideal weight for a height and sex
    Ideal(IdealCommand),
    /// Print the classification thresholds
    Table,
}

#[derive(Args)]
pub struct CalcCommand {
    /// Weight in kilograms
    #[arg(short, long, allow_negative_numbers = true)]
    pub weight: Option<f64>,
    /// Height in meters
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    pub height: Option<f64>,
    /// Sex ("Masculino" or "Feminino"; other text skips the adjustment)
    #[arg(short, long)]
    pub sex: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Config file to use instead of ./imc.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ClassifyCommand {
    #[arg(allow_negative_numbers = true)]
    pub bmi: f64,
}

#[derive(Args)]
pub struct IdealCommand {
    /// Height in meters
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    pub height: f64,
    #[arg(short, long)]
    pub sex: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}
