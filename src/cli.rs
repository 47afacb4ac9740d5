// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::WorkId;

/// Command-line arguments for `workdeps`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "workdeps",
    version,
    about = "Evaluate work dependency date constraints and render schedule arrows.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the project snapshot (TOML).
    ///
    /// Default: `Workdeps.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Workdeps.toml")]
    pub project: String,

    /// Only report the minimum dates for this work.
    #[arg(long, value_name = "ID")]
    pub work: Option<WorkId>,

    /// Write the SVG overlay to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub out: Option<String>,

    /// Keep running and re-render the overlay whenever the project file changes.
    #[arg(long)]
    pub watch: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WORKDEPS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print works and dependencies, but render nothing.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
