//! Tree retrieval from a saved document
//!
//! Accepts either a full provider response (`{"success": true, "data": [...]}`)
//! or a bare array of nodes. Useful for inspecting a captured tree offline.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use navgate_common::protocol::TreeResponse;
use navgate_common::{NavigationNode, PlatformClass, Tree};
use tracing::debug;

use super::error::FetchError;
use super::source::{TreeSource, UserContext, tree_from_response};

/// Reads the tree from a JSON file on every fetch
#[derive(Debug, Clone)]
pub struct FileTreeSource {
    path: PathBuf,
}

impl FileTreeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TreeSource for FileTreeSource {
    async fn fetch_tree(
        &self,
        user: &UserContext,
        platform: PlatformClass,
    ) -> Result<Tree, FetchError> {
        debug!(path = %self.path.display(), user = %user.username, %platform, "reading tree document");

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| FetchError::Transport(format!("{}: {}", self.path.display(), e)))?;

        // A top-level array is a bare node list, anything else a full response
        if contents.trim_start().starts_with('[') {
            let nodes: Vec<NavigationNode> = serde_json::from_str(&contents)
                .map_err(|e| FetchError::InvalidResponse(e.to_string()))?;
            Ok(Tree::new(nodes)?)
        } else {
            let response: TreeResponse = serde_json::from_str(&contents)
                .map_err(|e| FetchError::InvalidResponse(e.to_string()))?;
            tree_from_response(response, None)
        }
    }
}
