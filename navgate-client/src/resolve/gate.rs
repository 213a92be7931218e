//! Route gating for protected screens
//!
//! While the tree is loading a protected route waits instead of denying, so
//! users never see a flash of "not authorized" before their tree arrives.
//!
//! ```text
//! Unauthenticated                         -> redirect to login
//! Authenticated, loading                  -> wait
//! Authenticated, loaded, granted          -> render
//! Authenticated, loaded, not granted      -> redirect to not-authorized
//! ```

use navgate_common::Tree;

use super::access::resolve_access;
use crate::constants::{LOGIN_PATH, NOT_AUTHORIZED_PATH};

/// Outcome of checking a route against the permission tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admit,
    Deny,
    /// The tree is still loading; render a neutral loading state
    Wait,
}

/// Authentication state of the session, owned by the login flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

/// What the router should do with a protected route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    Wait,
    Redirect(&'static str),
}

/// Check a route's required feature against the tree
///
/// Routes without a required feature are always admitted here; they only
/// depend on the session being authenticated (see [`decide_route`]).
pub fn route_admission(tree: Option<&Tree>, loading: bool, feature_id: Option<&str>) -> Admission {
    let Some(feature_id) = feature_id else {
        return Admission::Admit;
    };

    if loading {
        return Admission::Wait;
    }

    if resolve_access(tree, feature_id).can_view() {
        Admission::Admit
    } else {
        Admission::Deny
    }
}

/// Full routing decision including session authentication
pub fn decide_route(
    session: SessionState,
    tree: Option<&Tree>,
    loading: bool,
    feature_id: Option<&str>,
) -> GateDecision {
    if session == SessionState::Unauthenticated {
        return GateDecision::Redirect(LOGIN_PATH);
    }

    match route_admission(tree, loading, feature_id) {
        Admission::Admit => GateDecision::Render,
        Admission::Wait => GateDecision::Wait,
        Admission::Deny => GateDecision::Redirect(NOT_AUTHORIZED_PATH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navgate_common::{AccessLevel, NavigationNode};

    fn tree() -> Tree {
        Tree::new(vec![
            NavigationNode::leaf("1", "ASSETS", "Assets", AccessLevel::ReadOnly),
            NavigationNode::leaf("2", "VENDORS", "Vendors", AccessLevel::None),
        ])
        .unwrap()
    }

    #[test]
    fn test_wait_while_loading_regardless_of_tree() {
        let tree = tree();
        assert_eq!(route_admission(Some(&tree), true, Some("ASSETS")), Admission::Wait);
        assert_eq!(route_admission(Some(&tree), true, Some("VENDORS")), Admission::Wait);
        assert_eq!(route_admission(None, true, Some("ASSETS")), Admission::Wait);
    }

    #[test]
    fn test_loaded_admit_and_deny() {
        let tree = tree();
        assert_eq!(route_admission(Some(&tree), false, Some("ASSETS")), Admission::Admit);
        assert_eq!(route_admission(Some(&tree), false, Some("VENDORS")), Admission::Deny);
        assert_eq!(route_admission(Some(&tree), false, Some("UNKNOWN")), Admission::Deny);
        assert_eq!(route_admission(None, false, Some("ASSETS")), Admission::Deny);
    }

    #[test]
    fn test_no_feature_required() {
        assert_eq!(route_admission(None, true, None), Admission::Admit);
        assert_eq!(route_admission(None, false, None), Admission::Admit);
    }

    #[test]
    fn test_decide_unauthenticated_redirects_to_login() {
        let tree = tree();
        assert_eq!(
            decide_route(SessionState::Unauthenticated, Some(&tree), false, Some("ASSETS")),
            GateDecision::Redirect(LOGIN_PATH)
        );
        assert_eq!(
            decide_route(SessionState::Unauthenticated, None, true, None),
            GateDecision::Redirect(LOGIN_PATH)
        );
    }

    #[test]
    fn test_decide_authenticated() {
        let tree = tree();
        let session = SessionState::Authenticated;
        assert_eq!(
            decide_route(session, None, true, Some("ASSETS")),
            GateDecision::Wait
        );
        assert_eq!(
            decide_route(session, Some(&tree), false, Some("ASSETS")),
            GateDecision::Render
        );
        assert_eq!(
            decide_route(session, Some(&tree), false, Some("VENDORS")),
            GateDecision::Redirect(NOT_AUTHORIZED_PATH)
        );
        assert_eq!(decide_route(session, None, true, None), GateDecision::Render);
    }
}
