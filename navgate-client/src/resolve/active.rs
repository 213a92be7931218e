//! Active route matching
//!
//! A sidebar entry stays highlighted while any screen nested under its path
//! is open. Features in the exact-match set only match their own path,
//! because their path is a literal prefix of another feature's path.

use navgate_common::PATH_SEPARATOR;

use super::feature_set::FeatureSet;

/// Whether `current_path` is the active route for a feature
pub fn is_active(
    current_path: &str,
    resolved_path: &str,
    feature_id: &str,
    exact_match: &FeatureSet,
) -> bool {
    if exact_match.contains(feature_id) {
        return current_path == resolved_path;
    }

    current_path == resolved_path
        || current_path
            .strip_prefix(resolved_path)
            .is_some_and(|rest| rest.starts_with(PATH_SEPARATOR))
}
