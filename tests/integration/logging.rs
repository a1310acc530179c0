//! Integration tests for file logging.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: when using file mode, the directory of the log files (default "./logs")
//! - LOG_MAX_SIZE: size in bytes after which the next file index is used
//!   Refer to `src/logging/mod.rs` for more details.
use chrono::Utc;
use stellar_chef::logging::{
    resolve_log_file_path, setup_logging, space_based_rolling, time_based_rolling, LogMode,
    LoggingError, LoggingSettings,
};
use std::{
    env, fs,
    fs::{create_dir_all, remove_dir_all},
    io::Write,
    path::Path,
    sync::Mutex,
    thread,
    time::Duration,
};
use tempfile::TempDir;

use lazy_static::lazy_static;
use simplelog::LevelFilter;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

// Global lazy_static that initializes logging only once per test binary.
lazy_static! {
    static ref INIT_LOGGING: bool = setup_logging().is_ok();
}

pub fn compute_final_log_path(base_file_path: &str, date_str: &str, max_size: u64) -> String {
    let time_based_path = time_based_rolling(base_file_path, date_str, 1);
    space_based_rolling(&time_based_path, base_file_path, date_str, max_size)
}

#[test]
fn test_invalid_log_max_size() {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_log_dir = temp_dir.path().to_str().unwrap();

    env::set_var("LOG_MODE", "file");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("LOG_DATA_DIR", format!("{}/", temp_log_dir));
    env::set_var("LOG_MAX_SIZE", "invalid_value");

    // rejected before any logger is installed
    let result = setup_logging();
    env::remove_var("LOG_MAX_SIZE");

    match result {
        Err(LoggingError::InvalidMaxSize(value)) => assert_eq!(value, "invalid_value"),
        other => panic!("expected InvalidMaxSize, got {:?}", other),
    }
}

#[test]
fn test_setup_logging_file_mode_creates_log_file() {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_log_dir = temp_dir.path().to_str().unwrap();

    env::remove_var("LOG_MAX_SIZE");
    env::set_var("LOG_MODE", "file");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("LOG_DATA_DIR", format!("{}/", temp_log_dir));

    let _ = remove_dir_all(temp_log_dir);
    create_dir_all(temp_log_dir).expect("Failed to create log directory");

    assert!(*INIT_LOGGING, "logger should install on first use");
    log::info!("file logging integration test");

    // Sleep for the logger to flush.
    thread::sleep(Duration::from_millis(200));

    let date_str = Utc::now().format("%Y-%m-%d").to_string();
    let expected_path = time_based_rolling(
        &format!("{}/stellar-chef.log", temp_log_dir),
        &date_str,
        1,
    );

    assert!(
        Path::new(&expected_path).exists(),
        "Expected log file {} does not exist",
        expected_path
    );
}

/// A pre-existing file above the size limit makes the next index the target.
#[test]
fn test_log_file_rolls_when_existing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_log_dir = temp_dir.path();

    let base_file = temp_log_dir.join("stellar-chef.log");
    let date_str = Utc::now().format("%Y-%m-%d").to_string();
    let first = time_based_rolling(base_file.to_str().unwrap(), &date_str, 1);
    fs::write(&first, "Existing log file above ten bytes").expect("Failed to create log file");

    let rolled_path = compute_final_log_path(base_file.to_str().unwrap(), &date_str, 10);

    assert_ne!(rolled_path, first);
    assert!(rolled_path.contains("stellar-chef-"));
    assert!(rolled_path.ends_with(".2.log"));
}

#[test]
fn test_space_based_rolling_returns_original_when_under_max_size() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_log_dir = temp_dir.path().to_str().unwrap();
    let base_file_path = format!("{}/test_chef.log", temp_log_dir);
    let date_str = Utc::now().format("%Y-%m-%d").to_string();
    let time_based_path = time_based_rolling(&base_file_path, &date_str, 1);

    let mut file = fs::File::create(&time_based_path).expect("Failed to create test log file");
    write!(file, "small file").expect("Failed to write to test log file");

    let rolled_file_path =
        space_based_rolling(&time_based_path, &base_file_path, &date_str, 10_000);
    assert_eq!(rolled_file_path, time_based_path);
}

#[test]
fn test_resolve_log_file_path_creates_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let nested = temp_dir.path().join("nested/logs");
    let settings = LoggingSettings {
        mode: LogMode::File,
        level: LevelFilter::Info,
        data_dir: format!("{}/", nested.display()),
        max_size: 1024,
    };

    let path = resolve_log_file_path(&settings, "2025-01-31").unwrap();
    assert!(nested.exists());
    assert!(path.ends_with("stellar-chef-2025-01-31.1.log"));
}
