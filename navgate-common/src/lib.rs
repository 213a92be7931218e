//! navgate Common Library
//!
//! Shared permission-tree types, route configuration and the tree retrieval
//! protocol used by the navgate client and any tree provider.

pub mod access;
pub mod features;
pub mod io;
pub mod namespace;
pub mod protocol;
pub mod tree;
pub mod validators;
pub mod version;

pub use access::{AccessLevel, AccessLevelError};
pub use namespace::{PathNamespace, PlatformClass};
pub use tree::{NavigationNode, Tree, TreeError};

/// Version information for the tree retrieval protocol
pub const PROTOCOL_VERSION: &str = "0.3.0";

/// Default port for tree providers
pub const DEFAULT_PORT: u16 = 7700;

/// Path separator used by every route in the console
pub const PATH_SEPARATOR: char = '/';
