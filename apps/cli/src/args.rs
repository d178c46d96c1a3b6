//! # CLI Argument Definitions

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Configures the Volume-Volume module against a simulation and registers channels.
#[derive(Debug, Parser)]
#[command(name = "vvlink")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Volume-Volume coupling module wiring")]
pub(crate) struct Cli {
    /// Settings document holding the `VV` section (TOML, YAML or JSON)
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Case directory whose `constant/` and `system/` dictionaries are probed
    #[arg(short, long, value_name = "DIR", conflicts_with = "objects")]
    pub case: Option<PathBuf>,

    /// Object registered with an in-memory simulation (repeatable)
    #[arg(short, long = "object", value_name = "NAME")]
    pub objects: Vec<String>,

    /// Channel to register a reader for (repeatable)
    #[arg(short, long = "read", value_name = "CHANNEL")]
    pub reads: Vec<String>,

    /// Channel to register a writer for (repeatable)
    #[arg(short, long = "write", value_name = "CHANNEL")]
    pub writes: Vec<String>,

    /// Increase diagnostics verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to rolling files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Write log files as JSON lines
    #[arg(long, requires = "log_dir")]
    pub json: bool,

    /// Print the supported channel families and exit
    #[arg(long)]
    pub list_channels: bool,
}
