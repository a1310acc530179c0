//! Logging setup driven by environment variables.
//!
//! - `LOG_MODE`: `stdout` (default) or `file`
//! - `LOG_LEVEL`: `trace`, `debug`, `info` (default), `warn` or `error`
//! - `LOG_DATA_DIR`: directory for log files in file mode (default `./logs`)
//! - `LOG_MAX_SIZE`: size in bytes after which a new file is started (default 1GB)
//!
//! Files are named `stellar-chef-YYYY-MM-DD.N.log`.

use chrono::Utc;
use log::info;
use simplelog::{Config, LevelFilter, SimpleLogger, WriteLogger};
use std::{
    env,
    fs::{create_dir_all, metadata, OpenOptions},
    path::Path,
};
use thiserror::Error;

const LOG_FILE_NAME: &str = "stellar-chef.log";
const DEFAULT_LOG_MAX_SIZE: u64 = 1_073_741_824;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("LOG_MAX_SIZE must be a valid u64, got '{0}'")]
    InvalidMaxSize(String),
    #[error("Unable to prepare log file {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to initialize logger: {0}")]
    Init(#[from] log::SetLoggerError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Stdout,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub mode: LogMode,
    pub level: LevelFilter,
    pub data_dir: String,
    pub max_size: u64,
}

impl LoggingSettings {
    pub fn from_env() -> Result<Self, LoggingError> {
        let mode = match env::var("LOG_MODE") {
            Ok(mode) if mode.eq_ignore_ascii_case("file") => LogMode::File,
            _ => LogMode::Stdout,
        };
        let max_size = match env::var("LOG_MAX_SIZE") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| LoggingError::InvalidMaxSize(raw))?,
            Err(_) => DEFAULT_LOG_MAX_SIZE,
        };
        let data_dir = env::var("LOG_DATA_DIR").unwrap_or_else(|_| "./logs".to_string());

        Ok(Self {
            mode,
            level: parse_level(&env::var("LOG_LEVEL").unwrap_or_default()),
            data_dir: format!("{}/", data_dir.trim_end_matches('/')),
            max_size,
        })
    }

    pub fn base_file_path(&self) -> String {
        format!("{}{}", self.data_dir, LOG_FILE_NAME)
    }
}

/// Unknown levels fall back to `info`.
pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// `dir/name.log` + date + index -> `dir/name-<date>.<index>.log`
pub fn compute_rolled_file_path(base_file_path: &str, date_str: &str, index: u32) -> String {
    let stem = base_file_path
        .strip_suffix(".log")
        .unwrap_or(base_file_path);
    format!("{}-{}.{}.log", stem, date_str, index)
}

pub fn time_based_rolling(base_file_path: &str, date_str: &str, index: u32) -> String {
    compute_rolled_file_path(base_file_path, date_str, index)
}

/// Moves to the next index while the candidate file is larger than `max_size`.
pub fn space_based_rolling(
    file_path: &str,
    base_file_path: &str,
    date_str: &str,
    max_size: u64,
) -> String {
    let mut final_path = file_path.to_string();
    let mut index = 1;
    while let Ok(metadata) = metadata(&final_path) {
        if metadata.len() <= max_size {
            break;
        }
        final_path = compute_rolled_file_path(base_file_path, date_str, index);
        index += 1;
    }
    final_path
}

/// Resolves today's log file, creating the directory if needed.
pub fn resolve_log_file_path(
    settings: &LoggingSettings,
    date_str: &str,
) -> Result<String, LoggingError> {
    let base_file_path = settings.base_file_path();
    let time_based_path = time_based_rolling(&base_file_path, date_str, 1);

    if let Some(parent) = Path::new(&time_based_path).parent() {
        create_dir_all(parent).map_err(|source| LoggingError::File {
            path: parent.display().to_string(),
            source,
        })?;
    }

    Ok(space_based_rolling(
        &time_based_path,
        &base_file_path,
        date_str,
        settings.max_size,
    ))
}

/// Installs the global logger. Fails if called twice in one process.
pub fn setup_logging() -> Result<(), LoggingError> {
    let settings = LoggingSettings::from_env()?;

    match settings.mode {
        LogMode::File => {
            let date_str = Utc::now().format("%Y-%m-%d").to_string();
            let final_path = resolve_log_file_path(&settings, &date_str)?;
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&final_path)
                .map_err(|source| LoggingError::File {
                    path: final_path.clone(),
                    source,
                })?;
            WriteLogger::init(settings.level, Config::default(), log_file)?;
            info!("Logging to file {}", final_path);
        }
        LogMode::Stdout => {
            SimpleLogger::init(settings.level, Config::default())?;
        }
    }

    info!(
        "Logging is successfully configured (mode: {:?}, level: {})",
        settings.mode, settings.level
    );
    Ok(())
}
