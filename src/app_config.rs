use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Application configuration module
/// This module holds the settings used to drive the subtitle download tool.
/// The command-line front end always runs with `Config::default()`; library
/// callers may build or deserialize their own.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// External program used to retrieve subtitles
    #[serde(default = "default_tool")]
    pub tool: String,

    /// Subtitle language requested from the tool (ISO 639)
    #[serde(default = "default_subtitle_language")]
    pub subtitle_language: String,

    /// Fixed output basename handed to the tool
    #[serde(default = "default_output_basename")]
    pub output_basename: String,

    /// Extension of the subtitle files read back from the working directory
    #[serde(default = "default_subtitle_extension")]
    pub subtitle_extension: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_tool() -> String {
    "yt-dlp".to_string()
}

fn default_subtitle_language() -> String {
    "en".to_string()
}

fn default_output_basename() -> String {
    "subs".to_string()
}

fn default_subtitle_extension() -> String {
    "vtt".to_string()
}

impl Config {
    /// Parse a configuration from JSON, filling missing fields with defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)
            .context("Failed to parse configuration JSON")?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.tool.trim().is_empty() {
            return Err(anyhow!("Subtitle tool must not be empty"));
        }

        crate::language_utils::validate_language_code(&self.subtitle_language)
            .with_context(|| format!("Unsupported subtitle language: '{}'", self.subtitle_language))?;

        if self.output_basename.trim().is_empty() {
            return Err(anyhow!("Output basename must not be empty"));
        }

        if self.subtitle_extension.trim().trim_start_matches('.').is_empty() {
            return Err(anyhow!("Subtitle extension must not be empty"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            tool: default_tool(),
            subtitle_language: default_subtitle_language(),
            output_basename: default_output_basename(),
            subtitle_extension: default_subtitle_extension(),
            log_level: LogLevel::default(),
        }
    }
}
