use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// wd — how many days until a warmer one
#[derive(Parser, Debug)]
#[command(
    name = "wd",
    version,
    about = "For each daily reading, count the days until a strictly warmer one",
    long_about = None
)]
pub struct Cli {
    /// Path to a TOML configuration file
    /// (default: ~/.waitdays/waitdays.toml)
    #[arg(short, long, global = true, env = "WAITDAYS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run on the configured sample (73 74 75 71 69 72 76 73 by default)
    Demo(ReportArgs),

    /// Run on readings given on the command line
    Run(RunArgs),

    /// Print the resolved configuration as JSON and exit
    Config,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Daily readings, space and/or comma separated (e.g. `73 74 75` or `73,74,75`)
    #[arg(value_name = "READINGS", allow_negative_numbers = true)]
    pub readings: Vec<String>,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Output format (default: from config, `text` if unset)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print one line per day with its reading and the day it waits for
    #[arg(long, overrides_with = "no_detail")]
    pub detail: bool,

    /// Print the bare list of waits even if the config asks for detail
    #[arg(long, overrides_with = "detail")]
    pub no_detail: bool,
}

impl ReportArgs {
    /// `Some` when either flag was given; the last one on the command line wins.
    pub fn detail(&self) -> Option<bool> {
        match (self.detail, self.no_detail) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}
