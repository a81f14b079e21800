//! Logging setup for the console front end.
//!
//! stdout belongs to the status renderer, so terminal logging goes to stderr
//! and the usual destination is a log file next to the working directory.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const DEFAULT_LOG_FILE: &str = "restore.log";

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    Terminal,
    Both(PathBuf),
}

impl Default for LogDestination {
    fn default() -> Self {
        LogDestination::File(PathBuf::from(DEFAULT_LOG_FILE))
    }
}

impl LogDestination {
    /// Reads `--log <file|terminal|both>` from the command line. Without the
    /// switch the default file destination is used.
    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let Some(arg) = args.next() else {
            return Ok(Self::default());
        };
        if arg != "--log" {
            return Err(format!("unknown argument: {arg}"));
        }
        let value = args.next().ok_or("--log needs a value: file, terminal or both")?;
        match value.as_str() {
            "file" => Ok(Self::default()),
            "terminal" => Ok(LogDestination::Terminal),
            "both" => Ok(LogDestination::Both(PathBuf::from(DEFAULT_LOG_FILE))),
            other => Err(format!("unknown log destination: {other}")),
        }
    }
}

/// Installs the global logger. A second call is ignored.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    let file = match destination {
        LogDestination::File(path) => Some(path),
        LogDestination::Terminal => {
            loggers.push(stderr_logger(level, config.clone()));
            None
        }
        LogDestination::Both(path) => {
            loggers.push(stderr_logger(level, config.clone()));
            Some(path)
        }
    };
    if let Some(path) = file {
        if let Some(file_logger) = create_file_logger(&path, level, config) {
            loggers.push(file_logger);
        }
    }
    if loggers.is_empty() {
        return;
    }

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn stderr_logger(level: LevelFilter, config: Config) -> Box<TermLogger> {
    TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: could not create log file at {:?}: {}", path, err);
            None
        }
    }
}
