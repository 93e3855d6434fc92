//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "telemap",
    version,
    about = "Reconcile telemetry and sensor channel names",
    long_about = "Reconcile two independently-named channel header sets.\n\n\
                  Builds a confidence-ranked correspondence between telemetry\n\
                  (data logger) and sensor (simulation) channel names using\n\
                  exact, dictionary-assisted and token-overlap matching."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the three-pass reconciliation and write match tables.
    Run(RunArgs),

    /// Resolve channel names through the shorthand dictionary.
    Lookup(LookupArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Two-column shorthand dictionary CSV (shorthand, longhand).
    #[arg(long = "dictionary", value_name = "FILE")]
    pub dictionary: PathBuf,

    /// Telemetry export whose header row names the logger channels.
    #[arg(long = "telemetry", value_name = "FILE")]
    pub telemetry: PathBuf,

    /// Sensor export whose header row names the simulation channels.
    #[arg(long = "sensor", value_name = "FILE")]
    pub sensor: PathBuf,

    /// 1-based row holding the telemetry channel names.
    #[arg(long = "telemetry-header-row", value_name = "N", default_value_t = 15)]
    pub telemetry_header_row: usize,

    /// 1-based row holding the sensor channel names.
    #[arg(long = "sensor-header-row", value_name = "N", default_value_t = 1)]
    pub sensor_header_row: usize,

    /// Directory for the generated match tables (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Match and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// How many top matches to show in the summary.
    #[arg(long = "top", value_name = "N", default_value_t = 20)]
    pub top: usize,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Two-column shorthand dictionary CSV (shorthand, longhand).
    #[arg(long = "dictionary", value_name = "FILE")]
    pub dictionary: PathBuf,

    /// Channel names to resolve.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
