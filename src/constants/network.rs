//! Well-known Stellar network endpoints and passphrases.

pub const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";
pub const PUBLIC_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";
pub const FUTURENET_PASSPHRASE: &str = "Test SDF Future Network ; October 2022";

pub const TESTNET_HORIZON_URL: &str = "https://horizon-testnet.stellar.org";
pub const PUBLIC_HORIZON_URL: &str = "https://horizon.stellar.org";
pub const FUTURENET_HORIZON_URL: &str = "https://horizon-futurenet.stellar.org";

pub const TESTNET_FRIENDBOT_URL: &str = "https://friendbot.stellar.org";
pub const FUTURENET_FRIENDBOT_URL: &str = "https://friendbot-futurenet.stellar.org";

pub const STELLAR_EXPERT_EXPLORER_URL: &str = "https://stellar.expert/explorer";

pub const DEFAULT_HORIZON_TIMEOUT_SECONDS: u64 = 30;
