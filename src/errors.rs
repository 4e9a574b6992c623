/*!
 * Error types for the ytranscript application.
 *
 * Fetch failures are terminal for the command-line tool; the cleaning step
 * has no error conditions and therefore no error type of its own.
 */

use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur while retrieving subtitles with the external tool
#[derive(Error, Debug)]
pub enum FetchError {
    /// The external tool is not installed or not on the PATH
    #[error("{tool} not found. Please install it.")]
    ToolMissing {
        /// Program name that failed to spawn
        tool: String,
    },

    /// The external tool ran and exited with a failure status
    #[error("Error running {tool}: {stderr}")]
    ToolExecution {
        /// Program name
        tool: String,
        /// Exit status reported by the OS
        status: ExitStatus,
        /// Diagnostic output captured from the tool
        stderr: String,
    },

    /// The tool succeeded but left no subtitle file behind
    #[error("No subtitles found.")]
    NoSubtitlesFound,

    /// The tool's output directory could not be listed or read back
    #[error("Failed to read subtitle output: {0}")]
    Output(String),

    /// Any other I/O failure around the tool call
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the subtitle fetch step
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(format!("{:#}", error))
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
