// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::request::loader::default_input_path;
use crate::types::{InputFormat, OutputFormat};

/// Command-line arguments for `taskorder`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskorder",
    version,
    about = "Recommend an execution order for tasks with dependencies.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the request file (JSON or TOML), or `-` for stdin.
    #[arg(long, short, value_name = "PATH", default_value_os_t = default_input_path())]
    pub input: PathBuf,

    /// Input encoding: auto, json or toml.
    ///
    /// `auto` picks TOML for `.toml` files and JSON otherwise.
    #[arg(long, value_name = "FORMAT", default_value = "auto")]
    pub format: InputFormat,

    /// Output encoding: text or json.
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Also print what the resolver had to work around.
    #[arg(long)]
    pub report: bool,

    /// Reject malformed requests (unknown dependencies, cycles, duplicate
    /// titles) instead of degrading gracefully.
    #[arg(long)]
    pub strict: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKORDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
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
