//! Path namespaces and client platform classes

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which path/visibility regime is active for the mounted screen
///
/// Passed explicitly to every resolver call. Entering an admin-settings
/// screen switches the caller to `AdminSettingsConfiguration`, leaving it
/// switches back to `Normal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PathNamespace {
    #[default]
    Normal,
    AdminSettingsConfiguration,
}

impl PathNamespace {
    /// Namespace for a screen, given whether it is an admin-settings screen
    #[must_use]
    pub fn for_screen(is_admin_settings: bool) -> Self {
        if is_admin_settings {
            Self::AdminSettingsConfiguration
        } else {
            Self::Normal
        }
    }

    #[must_use]
    pub fn is_admin_settings(self) -> bool {
        self == Self::AdminSettingsConfiguration
    }
}

impl fmt::Display for PathNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::AdminSettingsConfiguration => f.write_str("admin-settings"),
        }
    }
}

/// Client platform class the permission tree is requested for
///
/// Derived by the caller from client characteristics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformClass {
    #[default]
    Desktop,
    Mobile,
}

impl PlatformClass {
    /// Convert to the tag used on the wire
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for PlatformClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
