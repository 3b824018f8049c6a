// src/types.rs

use std::path::Path;
use std::str::FromStr;

/// Encoding of a schedule request on disk or stdin.
///
/// - `Auto`: pick from the file extension, falling back to JSON.
/// - `Json`: `{"tasks": [...]}` or a bare array of tasks.
/// - `Toml`: `[[tasks]]` array of tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Auto,
    Json,
    Toml,
}

impl InputFormat {
    /// Resolve `Auto` against a path. Explicit formats are returned unchanged.
    pub fn resolve_for(self, path: Option<&Path>) -> InputFormat {
        if self != InputFormat::Auto {
            return self;
        }

        let ext = path
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("toml") => InputFormat::Toml,
            _ => InputFormat::Json,
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(InputFormat::Auto),
            "json" => Ok(InputFormat::Json),
            "toml" => Ok(InputFormat::Toml),
            other => Err(format!(
                "invalid input format: {other} (expected \"auto\", \"json\" or \"toml\")"
            )),
        }
    }
}

/// How the resolved order is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One numbered title per line.
    #[default]
    Text,
    /// The response object as pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "invalid output format: {other} (expected \"text\" or \"json\")"
            )),
        }
    }
}
