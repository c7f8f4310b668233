use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Indicators of Hydrologic Alteration for daily discharge series.
#[derive(Parser)]
#[command(
    name = "iha",
    version,
    about = "Annual Indicators of Hydrologic Alteration from daily discharge"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute every annual indicator.
    Compute(ComputeArgs),
    /// Build the month x year median table.
    Calendar(CalendarArgs),
    /// Compute one annual k-day rolling-mean extreme.
    Extreme(ExtremeArgs),
}

/// Arguments for the `compute` subcommand.
#[derive(clap::Args)]
pub struct ComputeArgs {
    /// Path to input CSV; overrides `[io].input`.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output path; overrides `[io].output`. Writes to stdout when unset.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: csv or json; overrides `[io].format`.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Pulse threshold source: whole-series or per-year; overrides
    /// `[pulse].source`.
    #[arg(long = "pulse-source")]
    pub pulse_source: Option<String>,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Path to input CSV; overrides `[io].input`.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output CSV path. Writes to stdout when unset.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `extreme` subcommand.
#[derive(clap::Args)]
pub struct ExtremeArgs {
    /// Path to input CSV; overrides `[io].input`.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Rolling window length in days.
    #[arg(short, long, default_value_t = 7)]
    pub k: usize,

    /// Which extreme: min or max.
    #[arg(short, long, default_value = "min")]
    pub direction: String,

    /// Output CSV path. Writes to stdout when unset.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
