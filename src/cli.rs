use crate::engine::PolicyBoost;
use crate::types::reading::TransportMode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "asos",
    version,
    about = "Sustainability scoring and policy impact simulation CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory to read asos.toml from (defaults to the current directory)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a set of utility readings
    Score(ScoreCommand),
    /// Aggregate policy impact and project baseline metrics
    Policy(PolicyCommand),
    /// Simulate a policy across the fixed community baseline
    Community(CommunityCommand),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Electricity usage in kWh
    #[arg(long, allow_negative_numbers = true)]
    pub electricity: f64,

    /// Water usage in liters
    #[arg(long, allow_negative_numbers = true)]
    pub water: f64,

    /// Household waste in kg
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub waste: f64,

    #[arg(long, value_enum, default_value = "bike")]
    pub transport: TransportMode,

    /// Apply a named intervention to the final score
    #[arg(long, value_enum)]
    pub boost: Option<PolicyBoost>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct PolicyCommand {
    /// Policy identifiers to include in the simulation
    pub select: Vec<String>,

    /// List the policy catalog instead of simulating
    #[arg(long)]
    pub list: bool,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CommunityCommand {
    /// Policy strength as a percentage
    #[arg(allow_negative_numbers = true)]
    pub strength: f64,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}
