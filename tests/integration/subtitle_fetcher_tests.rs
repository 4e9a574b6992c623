/*!
 * Tests for the download tool invocation, using shell scripts in place of yt-dlp
 */

use anyhow::Result;
use ytranscript::app_config::Config;
use ytranscript::errors::FetchError;
use ytranscript::subtitle_fetcher::SubtitleFetcher;

const VIDEO_URL: &str = "https://www.youtube.com/watch?v=abc123";

/// The argument list requests manual and automatic subtitles without media
#[test]
fn test_build_args_withDefaultConfig_shouldRequestSubtitlesOnly() {
    let fetcher = SubtitleFetcher::new(Config::default());
    assert_eq!(
        fetcher.build_args(VIDEO_URL),
        vec![
            "--write-subs",
            "--write-auto-subs",
            "--skip-download",
            "--sub-lang",
            "en",
            "--output",
            "subs",
            VIDEO_URL,
        ]
    );
}

/// A tool that cannot be spawned is reported as missing
#[tokio::test]
async fn test_fetch_withMissingTool_shouldReturnToolMissing() {
    let _guard = crate::common::TOOL_LOCK.lock().await;
    let config = Config {
        tool: "/nonexistent/bin/yt-dlp-not-installed".to_string(),
        ..Config::default()
    };

    let error = SubtitleFetcher::new(config).fetch(VIDEO_URL).await.unwrap_err();
    assert!(matches!(error, FetchError::ToolMissing { ref tool } if tool.ends_with("yt-dlp-not-installed")));
}

#[cfg(unix)]
mod with_fake_tool {
    use super::*;
    use crate::common;

    fn config_for(tool: &std::path::Path) -> Config {
        Config {
            tool: tool.to_string_lossy().into_owned(),
            ..Config::default()
        }
    }

    /// Successful run returns the subtitle file and releases the working directory
    #[tokio::test]
    async fn test_fetch_withSubtitleWritten_shouldReturnContent() -> Result<()> {
        let _guard = common::TOOL_LOCK.lock().await;
        let scratch = common::create_temp_dir()?;
        let body = common::write_subtitle_body("subs.en.vtt", "WEBVTT\n\n00:00:00.000 --> 00:00:01.000\nhello");
        let tool = common::create_fake_tool(scratch.path(), "fake-yt-dlp", &body)?;

        let subtitle = SubtitleFetcher::new(config_for(&tool)).fetch(VIDEO_URL).await?;

        assert_eq!(subtitle.file_name, "subs.en.vtt");
        assert!(subtitle.content.starts_with("WEBVTT"));
        assert!(subtitle.content.contains("hello"));

        let args = common::recorded_args(scratch.path())?;
        assert_eq!(args.last().map(String::as_str), Some(VIDEO_URL));
        assert!(args.iter().any(|a| a == "--skip-download"));

        let work_dir = common::recorded_cwd(scratch.path())?;
        assert!(!work_dir.exists(), "working directory {:?} was not removed", work_dir);

        Ok(())
    }

    /// With several candidates the first by name wins
    #[tokio::test]
    async fn test_fetch_withSeveralSubtitleFiles_shouldPickFirstByName() -> Result<()> {
        let _guard = common::TOOL_LOCK.lock().await;
        let scratch = common::create_temp_dir()?;
        let body = format!(
            "{}\n{}\n{}",
            common::write_subtitle_body("subs.en-orig.vtt", "WEBVTT\nsecond"),
            common::write_subtitle_body("subs.en.vtt", "WEBVTT\nthird"),
            common::write_subtitle_body("subs.en-US.vtt", "WEBVTT\nfirst"),
        );
        let tool = common::create_fake_tool(scratch.path(), "fake-yt-dlp", &body)?;

        let subtitle = SubtitleFetcher::new(config_for(&tool)).fetch(VIDEO_URL).await?;

        assert_eq!(subtitle.file_name, "subs.en-US.vtt");
        assert!(subtitle.content.contains("first"));

        Ok(())
    }

    /// Failing tool surfaces its stderr and still cleans up
    #[tokio::test]
    async fn test_fetch_withFailingTool_shouldReturnToolExecution() -> Result<()> {
        let _guard = common::TOOL_LOCK.lock().await;
        let scratch = common::create_temp_dir()?;
        let body = "echo 'ERROR: [youtube] abc123: Video unavailable' >&2\nexit 1";
        let tool = common::create_fake_tool(scratch.path(), "fake-yt-dlp", body)?;

        let error = SubtitleFetcher::new(config_for(&tool)).fetch(VIDEO_URL).await.unwrap_err();

        match error {
            FetchError::ToolExecution { status, stderr, .. } => {
                assert_eq!(status.code(), Some(1));
                assert_eq!(stderr, "ERROR: [youtube] abc123: Video unavailable");
            }
            other => panic!("expected ToolExecution, got {:?}", other),
        }

        let work_dir = common::recorded_cwd(scratch.path())?;
        assert!(!work_dir.exists());

        Ok(())
    }

    /// Successful tool run without output files means no subtitles
    #[tokio::test]
    async fn test_fetch_withNoSubtitleWritten_shouldReturnNoSubtitlesFound() -> Result<()> {
        let _guard = common::TOOL_LOCK.lock().await;
        let scratch = common::create_temp_dir()?;
        let body = common::write_subtitle_body("subs.info.json", "{}");
        let tool = common::create_fake_tool(scratch.path(), "fake-yt-dlp", &body)?;

        let error = SubtitleFetcher::new(config_for(&tool)).fetch(VIDEO_URL).await.unwrap_err();

        assert!(matches!(error, FetchError::NoSubtitlesFound));
        let work_dir = common::recorded_cwd(scratch.path())?;
        assert!(!work_dir.exists());

        Ok(())
    }

    /// Configured language is passed through to the tool
    #[tokio::test]
    async fn test_fetch_withCustomLanguage_shouldPassSubLang() -> Result<()> {
        let _guard = common::TOOL_LOCK.lock().await;
        let scratch = common::create_temp_dir()?;
        let body = common::write_subtitle_body("clip.de.vtt", "WEBVTT\nHallo");
        let tool = common::create_fake_tool(scratch.path(), "fake-yt-dlp", &body)?;
        let config = Config {
            subtitle_language: "de".to_string(),
            output_basename: "clip".to_string(),
            ..config_for(&tool)
        };

        SubtitleFetcher::new(config).fetch(VIDEO_URL).await?;

        let args = common::recorded_args(scratch.path())?;
        let lang_pos = args.iter().position(|a| a == "--sub-lang").expect("--sub-lang missing");
        assert_eq!(args[lang_pos + 1], "de");
        let output_pos = args.iter().position(|a| a == "--output").expect("--output missing");
        assert_eq!(args[output_pos + 1], "clip");

        Ok(())
    }
}
