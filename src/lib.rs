/*!
 * # ytranscript - plain-text transcripts of online videos
 *
 * A Rust library that downloads a video's subtitles with an external tool
 * (yt-dlp) and turns the WebVTT markup into readable text.
 *
 * ## Architecture
 *
 * - `transcript_cleaner`: pure WebVTT to text conversion
 * - `subtitle_fetcher`: runs the download tool in a temporary directory
 * - `app_controller`: fetch then clean
 * - `app_config`: tool and language settings
 * - `file_utils`: subtitle file discovery and reading
 * - `language_utils`: ISO language code checks
 * - `errors`: error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod subtitle_fetcher;
pub mod transcript_cleaner;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, FetchError};
pub use subtitle_fetcher::{SubtitleFetcher, SubtitleFile};
pub use transcript_cleaner::{clean, classify_line, LineKind};
