//! Defaults applied by the recipe forms when a field is left empty.

pub const DEFAULT_DISTRIBUTOR_PAYMENT_AMOUNT: &str = "10000";
pub const DEFAULT_NUMBER_OF_HOLDERS: u32 = 1;
pub const DEFAULT_BALANCE_PER_HOLDER: &str = "100";
