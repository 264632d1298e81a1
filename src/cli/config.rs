//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every invocation:
//!
//! ```toml
//! # fcsparse.toml
//! [parser]
//! text_encoding = "latin1"   # or "utf-8"
//!
//! [output]
//! json = false
//! pretty = true
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use fcsparse::{ParserConfig, TextEncoding};

/// Root configuration structure for fcsparse.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Parser settings.
    #[serde(default)]
    pub parser: ParserConfig,

    /// Output settings for the info command.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for printed output.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Print JSON instead of the text summary.
    pub json: Option<bool>,

    /// Indent JSON output.
    pub pretty: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Parser configuration with an optional command-line encoding override.
    pub fn parser_config(&self, encoding: Option<TextEncoding>) -> ParserConfig {
        match encoding {
            Some(encoding) => self.parser.clone().with_text_encoding(encoding),
            None => self.parser.clone(),
        }
    }
}
