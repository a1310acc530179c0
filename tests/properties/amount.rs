//! Property-based tests for decimal amount parsing and formatting.
//!
//!   Refer to `src/models/amount.rs` for more details.
use proptest::{prelude::*, test_runner::Config};
use stellar_chef::models::{format_amount, parse_amount};

proptest! {
  #![proptest_config(Config {
    cases: 1000, ..Config::default()
  })]

  /// Formatting always yields exactly seven decimals and parses back.
  #[test]
  fn prop_format_then_parse(stroops in 0i64..=i64::MAX) {
      let formatted = format_amount(stroops);
      let (_, decimals) = formatted.split_once('.').unwrap();
      prop_assert_eq!(decimals.len(), 7);
      prop_assert_eq!(parse_amount(&formatted).unwrap(), stroops);
  }

  /// A parsed amount re-formats to the same value padded to seven decimals.
  #[test]
  fn prop_parse_then_format(whole in 0u64..1_000_000_000u64, frac in "[0-9]{0,7}") {
      let input = if frac.is_empty() {
        whole.to_string()
      } else {
        format!("{}.{}", whole, frac)
      };
      let stroops = parse_amount(&input).unwrap();
      let expected = format!("{}.{:0<7}", whole, frac);
      prop_assert_eq!(format_amount(stroops), expected);
  }

  #[test]
  fn prop_more_than_seven_decimals_rejected(whole in 0u32..1000, frac in "[0-9]{8,12}") {
      let input = format!("{}.{}", whole, frac);
      prop_assert!(parse_amount(&input).is_err());
  }

  #[test]
  fn prop_negative_amounts_rejected(value in 1u32..1_000_000) {
      let input = format!("-{}", value);
      prop_assert!(parse_amount(&input).is_err());
  }
}
