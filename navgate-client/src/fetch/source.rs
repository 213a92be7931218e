//! Tree source abstraction

use std::fmt;

use async_trait::async_trait;
use navgate_common::protocol::TreeResponse;
use navgate_common::{PlatformClass, Tree};
use uuid::Uuid;

use super::error::FetchError;

/// The user a tree is fetched for
#[derive(Clone, PartialEq, Eq)]
pub struct UserContext {
    pub username: String,
    /// Session token issued at login
    pub token: Option<String>,
}

impl UserContext {
    pub fn new(username: &str, token: Option<&str>) -> Self {
        Self {
            username: username.to_string(),
            token: token.map(str::to_string),
        }
    }
}

impl fmt::Debug for UserContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserContext")
            .field("username", &self.username)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Something that can produce a permission tree for a user
#[async_trait]
pub trait TreeSource: Send + Sync {
    /// Fetch and validate the tree for `user` on `platform`
    async fn fetch_tree(&self, user: &UserContext, platform: PlatformClass)
    -> Result<Tree, FetchError>;
}

/// Turn a provider response into a validated tree
///
/// When `expected_id` is given the response must echo it.
pub fn tree_from_response(
    response: TreeResponse,
    expected_id: Option<Uuid>,
) -> Result<Tree, FetchError> {
    if let Some(version) = response.version.as_deref()
        && !navgate_common::version::is_compatible(version)
    {
        return Err(FetchError::IncompatibleVersion(version.to_string()));
    }

    if let Some(expected) = expected_id
        && response.request_id != Some(expected)
    {
        return Err(FetchError::InvalidResponse(
            "response does not match request".to_string(),
        ));
    }

    if !response.success {
        let message = response
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "no reason given".to_string());
        return Err(FetchError::Rejected(message));
    }

    let nodes = response
        .data
        .ok_or_else(|| FetchError::InvalidResponse("missing tree data".to_string()))?;
    Ok(Tree::new(nodes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use navgate_common::{AccessLevel, NavigationNode, TreeError};

    fn nodes() -> Vec<NavigationNode> {
        vec![NavigationNode::leaf("1", "ASSETS", "Assets", AccessLevel::Full)]
    }

    #[test]
    fn test_success() {
        let id = Uuid::new_v4();
        let tree = tree_from_response(TreeResponse::ok(id, nodes()), Some(id)).unwrap();
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_mismatched_request_id() {
        let response = TreeResponse::ok(Uuid::new_v4(), nodes());
        assert!(matches!(
            tree_from_response(response, Some(Uuid::new_v4())),
            Err(FetchError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_rejected_carries_message() {
        let id = Uuid::new_v4();
        assert_eq!(
            tree_from_response(TreeResponse::error(id, "token expired"), Some(id)),
            Err(FetchError::Rejected("token expired".to_string()))
        );
    }

    #[test]
    fn test_rejected_without_message() {
        let mut response = TreeResponse::error(Uuid::new_v4(), "");
        response.message = None;
        assert_eq!(
            tree_from_response(response, None),
            Err(FetchError::Rejected("no reason given".to_string()))
        );
    }

    #[test]
    fn test_incompatible_version() {
        let id = Uuid::new_v4();
        let mut response = TreeResponse::ok(id, nodes());
        response.version = Some("9.0.0".to_string());
        assert_eq!(
            tree_from_response(response, Some(id)),
            Err(FetchError::IncompatibleVersion("9.0.0".to_string()))
        );
    }

    #[test]
    fn test_missing_data() {
        let id = Uuid::new_v4();
        let mut response = TreeResponse::ok(id, nodes());
        response.data = None;
        assert!(matches!(
            tree_from_response(response, Some(id)),
            Err(FetchError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_invalid_tree() {
        let id = Uuid::new_v4();
        let mut data = nodes();
        data.push(NavigationNode::leaf("2", "ASSETS", "Dup", AccessLevel::None));
        assert_eq!(
            tree_from_response(TreeResponse::ok(id, data), Some(id)),
            Err(FetchError::InvalidTree(TreeError::DuplicateFeatureId(
                "ASSETS".to_string()
            )))
        );
    }

    #[test]
    fn test_user_context_debug_redacts_token() {
        let user = UserContext::new("alice", Some("secret"));
        let debug = format!("{:?}", user);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("secret"));
    }
}
