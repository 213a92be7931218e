//! Resolvers over the permission tree
//!
//! Everything in here is synchronous and pure: the namespace, the tree and
//! the route configuration are always passed in, never read from ambient
//! state.

mod access;
mod active;
mod feature_set;
mod gate;
mod path;
mod visibility;

pub use access::{can_edit, can_view, resolve_access};
pub use active::is_active;
pub use feature_set::FeatureSet;
pub use gate::{Admission, GateDecision, SessionState, decide_route, route_admission};
pub use path::{PathCollision, RouteTable};
pub use visibility::filter_tree;
