//! # CLI Argument Definitions

use clap::{Parser, ValueEnum};
use paycard_logger::LevelFilter;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "paycard-inspect")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Derive card component configurations from a raw configuration file")]
pub(crate) struct Cli {
    /// Raw configuration file (JSON, TOML or YAML)
    pub file: PathBuf,

    /// Which configuration to print
    #[arg(short, long, value_enum, default_value_t = Shape::Both)]
    pub shape: Shape,

    /// JSON array of postal addresses served by the address lookup
    #[arg(short, long)]
    pub addresses: Option<PathBuf>,

    /// Run an address lookup through the configured billing address form instead
    #[arg(long, value_name = "TERM")]
    pub search: Option<String>,

    /// Minimum level of diagnostics written to stderr
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Write diagnostics as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Shape {
    /// Standalone card component
    Component,
    /// Drop-in checkout card settings
    Dropin,
    /// Both configurations keyed by shape
    Both,
}
