//! User preference settings
//!
//! Stored as pretty-printed JSON in `<config_dir>/navgate/config.json`.
//! Missing fields take their defaults; an unreadable or invalid file falls
//! back to defaults entirely.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use navgate_common::{DEFAULT_PORT, PlatformClass};
use tracing::warn;

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_FETCH_TIMEOUT_SECS, MAX_FETCH_TIMEOUT_SECS,
    MIN_FETCH_TIMEOUT_SECS,
};

/// File permissions for the config file on Unix (owner read/write only)
#[cfg(unix)]
const CONFIG_FILE_MODE: u32 = 0o600;

/// Default tree provider address
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1";

/// Errors from saving or locating the config file
#[derive(Debug)]
pub enum ConfigError {
    /// The platform config directory could not be determined
    NoConfigDir,
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "could not determine config directory"),
            ConfigError::Io(e) => write!(f, "config I/O error: {}", e),
            ConfigError::Json(e) => write!(f, "config serialization error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::NoConfigDir => None,
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

/// Client preferences
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    /// Tree provider host name or IP address
    #[serde(default = "default_server_address")]
    pub server_address: String,

    /// Tree provider port
    #[serde(default = "default_server_port")]
    pub server_port: u16,

    /// Username to fetch the tree for when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Platform class to request the tree for
    #[serde(default)]
    pub platform: PlatformClass,

    /// Time allowed for a whole fetch, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_address: default_server_address(),
            server_port: default_server_port(),
            username: None,
            platform: PlatformClass::default(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

fn default_server_address() -> String {
    DEFAULT_SERVER_ADDRESS.to_string()
}

fn default_server_port() -> u16 {
    DEFAULT_PORT
}

fn default_fetch_timeout_secs() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

impl Settings {
    /// Get the platform-specific config file path
    ///
    /// Returns None if the config directory cannot be determined.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load settings from the default path, or defaults if unavailable
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from `path`, or defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let parsed = fs::read_to_string(path)
            .map_err(ConfigError::from)
            .and_then(|contents| serde_json::from_str::<Settings>(&contents).map_err(Into::into));

        match parsed {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                Self::default()
            }
        }
    }

    /// Save settings to the default path
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save settings to `path` with restrictive permissions
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(CONFIG_FILE_MODE))?;
        }

        Ok(())
    }

    /// Fetch timeout clamped to the supported range
    pub fn fetch_timeout(&self) -> Duration {
        Self::clamp_fetch_timeout(self.fetch_timeout_secs)
    }

    /// Fetch timeout for a command-line override, falling back to the setting
    pub fn fetch_timeout_with(&self, override_secs: Option<u64>) -> Duration {
        match override_secs {
            Some(secs) => Self::clamp_fetch_timeout(secs),
            None => self.fetch_timeout(),
        }
    }

    fn clamp_fetch_timeout(secs: u64) -> Duration {
        Duration::from_secs(secs.clamp(MIN_FETCH_TIMEOUT_SECS, MAX_FETCH_TIMEOUT_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server_address, "127.0.0.1");
        assert_eq!(settings.server_port, DEFAULT_PORT);
        assert_eq!(settings.platform, PlatformClass::Desktop);
        assert_eq!(settings.fetch_timeout(), Duration::from_secs(15));
        assert!(settings.username.is_none());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert_eq!(settings.username.as_deref(), Some("alice"));
        assert_eq!(settings.server_port, DEFAULT_PORT);
        assert_eq!(settings.fetch_timeout_secs, DEFAULT_FETCH_TIMEOUT_SECS);
    }

    #[test]
    fn test_timeout_clamped() {
        let mut settings = Settings::default();
        settings.fetch_timeout_secs = 0;
        assert_eq!(settings.fetch_timeout(), Duration::from_secs(1));
        settings.fetch_timeout_secs = 10_000;
        assert_eq!(settings.fetch_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_timeout_override_clamped() {
        let settings = Settings {
            fetch_timeout_secs: 30,
            ..Settings::default()
        };
        assert_eq!(settings.fetch_timeout_with(None), Duration::from_secs(30));
        assert_eq!(settings.fetch_timeout_with(Some(5)), Duration::from_secs(5));
        assert_eq!(settings.fetch_timeout_with(Some(0)), Duration::from_secs(1));
        assert_eq!(
            settings.fetch_timeout_with(Some(u64::MAX)),
            Duration::from_secs(120)
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let settings = Settings {
            server_address: "tree.example.com".to_string(),
            server_port: 9000,
            username: Some("alice".to_string()),
            platform: PlatformClass::Mobile,
            fetch_timeout_secs: 30,
        };
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path), settings);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_sets_owner_only_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        Settings::default().save_to(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, CONFIG_FILE_MODE);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            Settings::load_from(&dir.path().join("absent.json")),
            Settings::default()
        );
    }
}
