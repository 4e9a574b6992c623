// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use clap::Parser;
use log::{error, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::{ErrorKind, IsTerminal, Write};
use std::process::ExitCode;

use ytranscript::app_config::Config;
use ytranscript::app_controller::Controller;
use ytranscript::errors::AppError;

/// ytranscript - plain-text transcripts of online videos
///
/// Downloads the English subtitles of a video with yt-dlp (manual or
/// auto-generated) and prints them as plain text, without timings or markup.
#[derive(Parser, Debug)]
#[command(name = "ytranscript")]
#[command(version)]
#[command(about = "Fetch a video transcript as plain text")]
#[command(long_about = "ytranscript downloads the subtitles of a video with yt-dlp and prints them as plain text.

EXAMPLES:
    ytranscript https://www.youtube.com/watch?v=dQw4w9WgXcQ
    ytranscript https://youtu.be/dQw4w9WgXcQ > transcript.txt

REQUIREMENTS:
    yt-dlp must be installed and on the PATH.")]
struct CommandLineOptions {
    /// Video URL
    #[arg(value_name = "URL")]
    url: String,
}

// @struct: Stderr logger
struct CustomLogger {
    level: LevelFilter,
    colored: bool,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger {
            level,
            colored: std::io::stderr().is_terminal(),
        });
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let now = chrono::Local::now().format("%H:%M:%S.%3f");
        let mut stderr = std::io::stderr();
        let _ = if self.colored {
            writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()), now, record.level(), record.args()
            )
        } else {
            writeln!(stderr, "{} {:<5} {}", now, record.level(), record.args())
        };
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = CommandLineOptions::parse();
    let config = Config::default();

    if let Err(e) = CustomLogger::init(config.log_level.to_level_filter()) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match run(&cli.url, config).await {
        Ok(transcript) => match writeln!(std::io::stdout().lock(), "{}", transcript) {
            Ok(()) => ExitCode::SUCCESS,
            // Reader went away (e.g. piped into `head`)
            Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
            Err(e) => {
                error!("Failed to write transcript: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(url: &str, config: Config) -> Result<String, AppError> {
    let controller = Controller::with_config(config)?;
    controller.transcript(url).await
}
