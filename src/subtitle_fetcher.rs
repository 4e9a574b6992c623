use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use log::{debug, info, warn};
use tempfile::TempDir;
use tokio::process::Command;
use crate::app_config::Config;
use crate::errors::FetchError;
use crate::file_utils::FileManager;

// @module: Subtitle retrieval through an external download tool

/// Subtitle file read back from the tool's working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleFile {
    /// File name as written by the tool (e.g. `subs.en.vtt`)
    pub file_name: String,

    /// Raw WebVTT text
    pub content: String,
}

/// Runs the download tool in a throwaway directory and returns one subtitle file
pub struct SubtitleFetcher {
    // @field: Tool and subtitle settings
    config: Config,
}

impl SubtitleFetcher {
    /// Create a fetcher from the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Arguments passed to the tool for a given video URL
    pub fn build_args(&self, url: &str) -> Vec<String> {
        vec![
            "--write-subs".to_string(),
            "--write-auto-subs".to_string(),
            "--skip-download".to_string(),
            "--sub-lang".to_string(),
            self.config.subtitle_language.clone(),
            "--output".to_string(),
            self.config.output_basename.clone(),
            url.to_string(),
        ]
    }

    /// Fetch the subtitle file for a video.
    ///
    /// The working directory lives only for the duration of this call and is
    /// removed on every return path.
    pub async fn fetch(&self, url: &str) -> Result<SubtitleFile, FetchError> {
        let work_dir = TempDir::new()?;
        debug!("Using temporary directory {:?}", work_dir.path());

        self.run_tool(url, work_dir.path()).await?;

        let subtitle_path = self.first_subtitle(work_dir.path())?;
        let content = FileManager::read_to_string_lossy(&subtitle_path)
            .map_err(|e| FetchError::Output(format!("{:#}", e)))?;

        let file_name = subtitle_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!("Retrieved subtitles: {} ({} bytes)", file_name, content.len());

        Ok(SubtitleFile { file_name, content })
    }

    // @runs: The tool to completion inside the working directory
    async fn run_tool(&self, url: &str, work_dir: &Path) -> Result<(), FetchError> {
        let tool = &self.config.tool;
        let args = self.build_args(url);
        debug!("Running {} {}", tool, args.join(" "));

        let output = Command::new(tool)
            .args(&args)
            .current_dir(work_dir)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => FetchError::ToolMissing { tool: tool.clone() },
                _ => FetchError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = Self::summarize_stderr(&String::from_utf8_lossy(&output.stderr));
            debug!("{} exited with {}", tool, output.status);
            return Err(FetchError::ToolExecution {
                tool: tool.clone(),
                status: output.status,
                stderr,
            });
        }

        Ok(())
    }

    // @returns: First subtitle file by name in the working directory
    fn first_subtitle(&self, work_dir: &Path) -> Result<PathBuf, FetchError> {
        let candidates = FileManager::find_files(work_dir, &self.config.subtitle_extension)
            .map_err(|e| FetchError::Output(format!("{:#}", e)))?;

        if candidates.len() > 1 {
            warn!("Found {} subtitle files, using the first one", candidates.len());
        }

        candidates.into_iter().next().ok_or(FetchError::NoSubtitlesFound)
    }

    /// Drop blank lines from the tool's stderr
    fn summarize_stderr(stderr: &str) -> String {
        let meaningful: Vec<&str> = stderr
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .collect();

        if meaningful.is_empty() {
            "no diagnostic output".to_string()
        } else {
            meaningful.join("\n")
        }
    }
}
