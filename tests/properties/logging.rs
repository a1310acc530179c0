//! Property-based tests for log file naming.
//!
//! `compute_rolled_file_path` must insert the date and index before the
//! `.log` suffix, and append them when the base has no such suffix.
//!
//!   Refer to `src/logging/mod.rs` for more details.
use proptest::{prelude::*, test_runner::Config};
use stellar_chef::logging::{compute_rolled_file_path, parse_level};

proptest! {
  #![proptest_config(Config {
    cases: 1000, ..Config::default()
  })]

  #[test]
  fn prop_compute_rolled_file_path_with_log_suffix(
    base in ".*[^.]",
    date in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
    index in 1u32..1000
  ) {
      let base_with_log = format!("{}.log", base);
      let result = compute_rolled_file_path(&base_with_log, &date, index);
      let expected = format!("{}-{}.{}.log", base, date, index);
      prop_assert_eq!(result, expected);
  }

  #[test]
  fn prop_compute_rolled_file_path_without_log_suffix(
    base in ".*",
    date in "[0-9]{4}-[0-9]{2}-[0-9]{2}"
  ) {
      let base_non_log = if base.ends_with(".log") {
        format!("{}x", base)
      } else {
        base
      };
      let result = compute_rolled_file_path(&base_non_log, &date, 1);
      let expected = format!("{}-{}.1.log", base_non_log, date);
      prop_assert_eq!(result, expected);
  }

  #[test]
  fn prop_unknown_levels_default_to_info(level in "[a-z]{6,12}") {
      prop_assume!(!["trace", "debug", "info", "warn", "error"].contains(&level.as_str()));
      prop_assert_eq!(parse_level(&level), log::LevelFilter::Info);
  }
}
