//! Access levels granted by the permission tree
//!
//! The tree stores one grant per node. Wire values are matched
//! case-insensitively; anything outside the closed set is rejected when the
//! tree is decoded rather than being read as "no access".

use std::fmt;

use serde::{Deserialize, Serialize};

/// Access granted to a single feature
///
/// `Full` covers view, create, edit and delete. `ReadOnly` covers view only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AccessLevel {
    /// View, create, edit and delete
    Full,
    /// View only
    ReadOnly,
    /// No access (also used when a node carries no explicit grant)
    #[default]
    None,
}

/// Error returned for an access level string outside the closed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessLevelError(pub String);

impl fmt::Display for AccessLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown access level '{}'", self.0)
    }
}

impl std::error::Error for AccessLevelError {}

impl AccessLevel {
    /// Convert to the string representation used on the wire
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::ReadOnly => "read_only",
            Self::None => "none",
        }
    }

    /// Parse a wire value
    ///
    /// Accepts `full`, `read_only`/`readonly` and `none` in any letter case.
    pub fn parse(s: &str) -> Result<Self, AccessLevelError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "read_only" | "readonly" => Ok(Self::ReadOnly),
            "none" => Ok(Self::None),
            _ => Err(AccessLevelError(s.to_string())),
        }
    }

    /// Whether this grant allows viewing the feature
    #[must_use]
    pub fn can_view(self) -> bool {
        self != Self::None
    }

    /// Whether this grant allows create, edit and delete
    #[must_use]
    pub fn can_edit(self) -> bool {
        self == Self::Full
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for AccessLevel {
    type Error = AccessLevelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccessLevel> for String {
    fn from(level: AccessLevel) -> Self {
        level.as_str().to_string()
    }
}
