use anyhow::Context;
use log::{debug, info};
use crate::app_config::Config;
use crate::errors::AppError;
use crate::language_utils;
use crate::subtitle_fetcher::SubtitleFetcher;
use crate::transcript_cleaner;

// @module: Application controller for transcript retrieval

/// Main application controller: fetch subtitles, then clean them
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Tool runner built from the configuration
    fetcher: SubtitleFetcher,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> anyhow::Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let fetcher = SubtitleFetcher::new(config.clone());
        Ok(Self { config, fetcher })
    }

    /// Configuration this controller was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Retrieve and clean the transcript of a video
    pub async fn transcript(&self, url: &str) -> Result<String, AppError> {
        let language = language_utils::get_language_name(&self.config.subtitle_language)
            .unwrap_or_else(|_| self.config.subtitle_language.clone());
        info!("Fetching {} subtitles for {}", language, url);

        let subtitle = self.fetcher.fetch(url).await?;
        let transcript = transcript_cleaner::clean(&subtitle.content);

        debug!(
            "Cleaned {} into {} transcript lines",
            subtitle.file_name,
            transcript.lines().count()
        );

        Ok(transcript)
    }
}
