//! Protocol definitions for permission tree retrieval
//!
//! One request and one response per connection, each sent as a single line
//! of JSON. The provider echoes the request id so the client can reject a
//! response that belongs to a different request.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::namespace::PlatformClass;
use crate::tree::NavigationNode;

/// Request for the permission tree of the authenticated user
#[derive(Clone, Serialize, Deserialize)]
pub struct TreeRequest {
    /// Protocol version of the requesting client
    pub version: String,
    /// Correlation id echoed in the response
    pub request_id: Uuid,
    /// User the tree is requested for
    pub username: String,
    /// Session token issued by the authentication service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Client platform class
    pub platform: PlatformClass,
}

impl TreeRequest {
    /// Create a request with a fresh request id and this build's version
    pub fn new(username: &str, token: Option<&str>, platform: PlatformClass) -> Self {
        Self {
            version: crate::PROTOCOL_VERSION.to_string(),
            request_id: Uuid::new_v4(),
            username: username.to_string(),
            token: token.map(str::to_string),
            platform,
        }
    }
}

impl fmt::Debug for TreeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeRequest")
            .field("version", &self.version)
            .field("request_id", &self.request_id)
            .field("username", &self.username)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("platform", &self.platform)
            .finish()
    }
}

/// Response carrying the permission tree or an error message
///
/// `data` is left as raw nodes; the client validates it into a
/// [`crate::Tree`] so that a malformed tree is reported as such.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeResponse {
    /// Protocol version of the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Echo of the request id (absent in saved tree documents)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Uuid>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<NavigationNode>>,
    /// Human-readable error message when `success` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TreeResponse {
    /// Successful response for a request
    pub fn ok(request_id: Uuid, nodes: Vec<NavigationNode>) -> Self {
        Self {
            version: Some(crate::PROTOCOL_VERSION.to_string()),
            request_id: Some(request_id),
            success: true,
            data: Some(nodes),
            message: None,
        }
    }

    /// Error response for a request
    pub fn error(request_id: Uuid, message: &str) -> Self {
        Self {
            version: Some(crate::PROTOCOL_VERSION.to_string()),
            request_id: Some(request_id),
            success: false,
            data: None,
            message: Some(message.to_string()),
        }
    }
}
