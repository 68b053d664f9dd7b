//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::report::{APP_DIR, REPORTS_DIR};
use crate::error::{Error, Result};

/// Output format for rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable table.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl ReportFormat {
    /// File extension for reports in this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::config(
                format!("Unknown report format '{other}'"),
                "Set VOCALSPLIT_FORMAT to 'text' or 'json'",
            )),
        }
    }
}

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory reports are written to
    pub output_dir: PathBuf,
    /// Report format
    pub format: ReportFormat,
    /// Run the HTML sanitizer on every input, not just `.html` files
    pub sanitize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            format: ReportFormat::default(),
            sanitize: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(dir) = env::var("VOCALSPLIT_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(shellexpand::tilde(&dir).to_string());
        }

        if let Ok(format) = env::var("VOCALSPLIT_FORMAT") {
            config.format = format.parse()?;
        }

        if let Ok(flag) = env::var("VOCALSPLIT_SANITIZE") {
            config.sanitize = parse_flag(&flag);
        }

        Ok(config)
    }
}

/// Interpret `1`, `true`, `yes` and `on` (any case) as enabled.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// `<data_dir>/vocalsplit/reports`, or `./reports` without a data dir.
fn default_output_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(REPORTS_DIR),
        |d| d.join(APP_DIR).join(REPORTS_DIR),
    )
}
