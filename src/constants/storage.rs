//! Keys used in the local key/value storage.

pub const ASSETS_STORAGE_KEY: &str = "assets";
pub const NETWORKS_STORAGE_KEY: &str = "networks";
pub const SELECTED_NETWORK_STORAGE_KEY: &str = "selectedNetwork";

pub const DEFAULT_STORAGE_PATH: &str = "./data/storage.json";
