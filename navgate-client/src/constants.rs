//! Application-wide constants

/// Application directory name (used in config directory path)
pub const APP_DIR_NAME: &str = "navgate";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Route shown to users who are not logged in
pub const LOGIN_PATH: &str = "/login";

/// Route shown when a logged-in user lacks access to a screen
pub const NOT_AUTHORIZED_PATH: &str = "/not-authorized";

/// Default time allowed for a tree fetch, in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

/// Bounds for the configurable fetch timeout, in seconds
pub const MIN_FETCH_TIMEOUT_SECS: u64 = 1;
pub const MAX_FETCH_TIMEOUT_SECS: u64 = 120;
