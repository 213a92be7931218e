//! Namespace visibility filtering
//!
//! Rules per namespace:
//! - Normal: restricted features are hidden. A group survives only with at
//!   least one non-restricted child left, so a group made only of restricted
//!   features disappears.
//! - AdminSettingsConfiguration: only restricted features are shown. A group
//!   survives only if some descendant qualifies.
//!
//! In both namespaces a leaf also needs a grant other than `None`. Feature
//! ids are unique in a [`Tree`], so a leaf's own grant is the one
//! [`resolve_access`](super::resolve_access) would find for it. Groups
//! never need their own grant; what they show is computed from children.
//! Filtering produces a new tree and is idempotent.

use navgate_common::{PathNamespace, Tree};

use super::feature_set::FeatureSet;

/// Nodes of `tree` that should render in `namespace`
pub fn filter_tree(tree: &Tree, namespace: PathNamespace, restricted: &FeatureSet) -> Tree {
    tree.prune(|node, kept_children| {
        let is_restricted = restricted.contains(&node.feature_id);

        if node.is_group {
            return match namespace {
                PathNamespace::Normal => !is_restricted && !kept_children.is_empty(),
                PathNamespace::AdminSettingsConfiguration => !kept_children.is_empty(),
            };
        }

        let eligible = match namespace {
            PathNamespace::Normal => !is_restricted,
            PathNamespace::AdminSettingsConfiguration => is_restricted,
        };
        eligible && node.access_level.can_view()
    })
}
