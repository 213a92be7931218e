//! navgate Client Library
//!
//! Navigation-driven access control for the asset console: resolvers that
//! answer access, path, visibility and active-route questions against a
//! permission tree, and the fetcher that keeps that tree current.

pub mod config;
pub mod constants;
pub mod fetch;
pub mod logging;
pub mod menu;
pub mod resolve;

pub use fetch::{FetchError, FetchStatus, TreeFetcher, TreeSnapshot, TreeSource, UserContext};
pub use resolve::{
    Admission, FeatureSet, GateDecision, RouteTable, SessionState, can_edit, can_view,
    decide_route, filter_tree, is_active, resolve_access, route_admission,
};
