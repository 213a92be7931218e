//! Permission tree model
//!
//! A [`Tree`] is an immutable, validated snapshot of the navigation nodes a
//! user may see. Cloning a tree shares the same node storage, so a refresh
//! that swaps in a new snapshot never disturbs readers holding the old one.
//!
//! Every traversal is an explicit depth-first walk over a stack of child
//! iterators. A node is visited before its children and its children before
//! its next sibling, which is also the first-match order used for lookups.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::access::AccessLevel;
use crate::validators::{FeatureIdError, validate_feature_id};

/// Maximum nesting depth accepted in a tree (top level is depth 1)
pub const MAX_TREE_DEPTH: usize = 16;

/// Maximum number of nodes accepted in a tree
pub const MAX_TREE_NODES: usize = 4096;

/// A node in the permission tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationNode {
    /// Opaque node identifier
    pub id: String,
    /// Business identifier used for access and path lookups
    pub feature_id: String,
    /// Display text (translation happens elsewhere)
    #[serde(default)]
    pub label: String,
    /// Groups may have children, leaves never do
    #[serde(default)]
    pub is_group: bool,
    /// Ordered children; order drives display order and lookup precedence
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavigationNode>,
    /// Grant for this node; a missing grant is `None`
    #[serde(default)]
    pub access_level: AccessLevel,
}

impl NavigationNode {
    /// Create a leaf node
    pub fn leaf(id: &str, feature_id: &str, label: &str, access_level: AccessLevel) -> Self {
        Self {
            id: id.to_string(),
            feature_id: feature_id.to_string(),
            label: label.to_string(),
            is_group: false,
            children: Vec::new(),
            access_level,
        }
    }

    /// Create a group node with the given children
    pub fn group(id: &str, feature_id: &str, label: &str, children: Vec<NavigationNode>) -> Self {
        Self {
            id: id.to_string(),
            feature_id: feature_id.to_string(),
            label: label.to_string(),
            is_group: true,
            children,
            access_level: AccessLevel::None,
        }
    }
}

/// Validation error for permission trees
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Two nodes share the same feature identifier
    DuplicateFeatureId(String),
    /// A node not marked as a group has children
    LeafWithChildren(String),
    /// A feature identifier failed validation
    InvalidFeatureId {
        feature_id: String,
        error: FeatureIdError,
    },
    /// Nesting exceeds [`MAX_TREE_DEPTH`]
    TooDeep,
    /// Node count exceeds [`MAX_TREE_NODES`]
    TooLarge,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::DuplicateFeatureId(id) => {
                write!(f, "feature id '{}' appears more than once", id)
            }
            TreeError::LeafWithChildren(id) => {
                write!(f, "leaf node '{}' has children", id)
            }
            TreeError::InvalidFeatureId { feature_id, error } => {
                write!(f, "invalid feature id '{}': {}", feature_id, error)
            }
            TreeError::TooDeep => {
                write!(f, "tree is nested deeper than {} levels", MAX_TREE_DEPTH)
            }
            TreeError::TooLarge => write!(f, "tree has more than {} nodes", MAX_TREE_NODES),
        }
    }
}

impl std::error::Error for TreeError {}

/// Immutable, validated permission tree
///
/// Guarantees: every feature identifier is valid and unique, leaves have no
/// children, and depth and size stay within the limits above.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tree {
    nodes: Arc<[NavigationNode]>,
}

impl Tree {
    /// Validate and wrap a sequence of top-level nodes
    ///
    /// Duplicate feature identifiers are rejected instead of letting the
    /// first one in traversal order shadow the rest.
    ///
    /// # Errors
    ///
    /// Returns the first [`TreeError`] found in traversal order.
    pub fn new(nodes: Vec<NavigationNode>) -> Result<Self, TreeError> {
        let mut seen = HashSet::new();
        let mut count = 0usize;

        for (node, depth) in Preorder::new(&nodes) {
            count += 1;
            if count > MAX_TREE_NODES {
                return Err(TreeError::TooLarge);
            }
            if depth > MAX_TREE_DEPTH {
                return Err(TreeError::TooDeep);
            }
            if let Err(error) = validate_feature_id(&node.feature_id) {
                return Err(TreeError::InvalidFeatureId {
                    feature_id: node.feature_id.clone(),
                    error,
                });
            }
            if !node.is_group && !node.children.is_empty() {
                return Err(TreeError::LeafWithChildren(node.feature_id.clone()));
            }
            if !seen.insert(node.feature_id.as_str()) {
                return Err(TreeError::DuplicateFeatureId(node.feature_id.clone()));
            }
        }

        Ok(Self {
            nodes: nodes.into(),
        })
    }

    /// An empty tree
    pub fn empty() -> Self {
        Self::default()
    }

    /// Top-level nodes in order
    pub fn nodes(&self) -> &[NavigationNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of nodes at every level
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Depth-first iterator yielding each node with its depth (top level = 1)
    pub fn iter(&self) -> Preorder<'_> {
        Preorder::new(&self.nodes)
    }

    /// First node in depth-first order whose feature id matches
    pub fn find(&self, feature_id: &str) -> Option<&NavigationNode> {
        self.iter()
            .map(|(node, _)| node)
            .find(|node| node.feature_id == feature_id)
    }

    /// Build a new tree keeping only the nodes `keep` accepts
    ///
    /// Children are pruned before their parent is offered to `keep`, which
    /// receives the node and its surviving children. Kept nodes carry only
    /// their surviving children and keep their original order. The result is
    /// a subset of a valid tree and needs no revalidation.
    pub fn prune<F>(&self, mut keep: F) -> Tree
    where
        F: FnMut(&NavigationNode, &[NavigationNode]) -> bool,
    {
        let nodes = prune_level(&self.nodes, &mut keep);
        Tree {
            nodes: nodes.into(),
        }
    }
}

// Recursion depth is bounded by MAX_TREE_DEPTH, enforced in Tree::new.
fn prune_level<F>(nodes: &[NavigationNode], keep: &mut F) -> Vec<NavigationNode>
where
    F: FnMut(&NavigationNode, &[NavigationNode]) -> bool,
{
    let mut kept = Vec::new();
    for node in nodes {
        let children = prune_level(&node.children, keep);
        if keep(node, &children) {
            kept.push(NavigationNode {
                id: node.id.clone(),
                feature_id: node.feature_id.clone(),
                label: node.label.clone(),
                is_group: node.is_group,
                children,
                access_level: node.access_level,
            });
        }
    }
    kept
}

impl Serialize for Tree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.nodes.serialize(serializer)
    }
}

impl TryFrom<Vec<NavigationNode>> for Tree {
    type Error = TreeError;

    fn try_from(nodes: Vec<NavigationNode>) -> Result<Self, Self::Error> {
        Self::new(nodes)
    }
}

/// Depth-first pre-order traversal over a stack of child iterators
pub struct Preorder<'a> {
    stack: Vec<std::slice::Iter<'a, NavigationNode>>,
}

impl<'a> Preorder<'a> {
    fn new(nodes: &'a [NavigationNode]) -> Self {
        Self {
            stack: vec![nodes.iter()],
        }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (&'a NavigationNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len();
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(node) => {
                    if !node.children.is_empty() {
                        self.stack.push(node.children.iter());
                    }
                    return Some((node, depth));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
