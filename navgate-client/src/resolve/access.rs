//! Access resolution
//!
//! Looks a feature up in the tree with the first-match depth-first order of
//! [`Tree::find`]. A missing tree, an empty tree and an unknown feature all
//! resolve to [`AccessLevel::None`], so callers never branch on "not found".

use navgate_common::{AccessLevel, Tree};

/// Access level the tree grants for a feature
pub fn resolve_access(tree: Option<&Tree>, feature_id: &str) -> AccessLevel {
    tree.and_then(|tree| tree.find(feature_id))
        .map(|node| node.access_level)
        .unwrap_or(AccessLevel::None)
}

/// Whether the user may view a feature
pub fn can_view(tree: Option<&Tree>, feature_id: &str) -> bool {
    resolve_access(tree, feature_id).can_view()
}

/// Whether the user may create, edit or delete within a feature
pub fn can_edit(tree: Option<&Tree>, feature_id: &str) -> bool {
    resolve_access(tree, feature_id).can_edit()
}
