//! Tree fetch errors

use std::fmt;

use navgate_common::TreeError;
use navgate_common::io::ProtocolError;

/// Errors from fetching the permission tree
///
/// All of them are recoverable: the fetcher keeps the last good tree and
/// the user may retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The fetch did not complete in time
    Timeout,
    /// Could not reach the provider or the connection failed
    Transport(String),
    /// The provider answered with `success: false`
    Rejected(String),
    /// The response could not be understood
    InvalidResponse(String),
    /// The provider speaks an incompatible protocol version
    IncompatibleVersion(String),
    /// The tree failed validation
    InvalidTree(TreeError),
    /// A newer fetch was started before this one completed; its result was discarded
    Superseded,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Timeout => write!(f, "Timed out loading permissions"),
            FetchError::Transport(msg) => write!(f, "Could not load permissions: {}", msg),
            FetchError::Rejected(msg) => write!(f, "Permissions request was rejected: {}", msg),
            FetchError::InvalidResponse(msg) => {
                write!(f, "Invalid permissions response: {}", msg)
            }
            FetchError::IncompatibleVersion(version) => write!(
                f,
                "Permissions service version {} is not supported",
                version
            ),
            FetchError::InvalidTree(err) => write!(f, "Invalid permission tree: {}", err),
            FetchError::Superseded => write!(f, "Superseded by a newer request"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::InvalidTree(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TreeError> for FetchError {
    fn from(err: TreeError) -> Self {
        FetchError::InvalidTree(err)
    }
}

impl From<ProtocolError> for FetchError {
    fn from(err: ProtocolError) -> Self {
        match err {
            ProtocolError::Timeout => FetchError::Timeout,
            ProtocolError::InvalidJson(msg) => FetchError::InvalidResponse(msg),
            ProtocolError::LineTooLong => FetchError::InvalidResponse(err.to_string()),
            ProtocolError::Io(_) | ProtocolError::ConnectionClosed => {
                FetchError::Transport(err.to_string())
            }
        }
    }
}
