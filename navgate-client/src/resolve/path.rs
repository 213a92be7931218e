//! Route path resolution
//!
//! A [`RouteTable`] holds the console's routing configuration. The builtin
//! table is built once from the static tables in
//! [`navgate_common::features`]; custom tables exist for embedding and tests.
//!
//! Resolution rules:
//! - unknown feature: [`DEFAULT_PATH`] in the normal namespace, the admin
//!   landing path in the admin settings namespace
//! - normal namespace: the base path unchanged
//! - admin settings namespace: the admin settings feature maps to the landing
//!   path, an override wins next, otherwise the base path is re-rooted under
//!   [`ADMIN_SETTINGS_ROOT`]

use std::collections::HashMap;

use once_cell::sync::Lazy;

use navgate_common::features::{
    ADMIN_SETTINGS_LANDING_PATH, ADMIN_SETTINGS_ROOT, DEFAULT_PATH, EXACT_MATCH_FEATURES,
    FEATURE_ADMIN_SETTINGS, OVERRIDE_MAP, PATH_MAP, RESTRICTED_FEATURES,
};
use navgate_common::{PATH_SEPARATOR, PathNamespace};

use super::active::is_active;
use super::feature_set::FeatureSet;

static BUILTIN: Lazy<RouteTable> = Lazy::new(|| {
    RouteTable::from_tables(PATH_MAP, OVERRIDE_MAP, RESTRICTED_FEATURES, EXACT_MATCH_FEATURES)
});

/// Routing configuration for the console
#[derive(Debug, Clone)]
pub struct RouteTable {
    base_paths: HashMap<String, String>,
    overrides: HashMap<String, String>,
    restricted: FeatureSet,
    exact_match: FeatureSet,
}

/// Two features whose resolved paths nest without an exact-match guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCollision {
    pub namespace: PathNamespace,
    /// Feature whose path is the prefix
    pub parent: String,
    /// Feature whose path lies under the parent's
    pub child: String,
}

impl RouteTable {
    /// The console's builtin routing configuration
    pub fn builtin() -> &'static RouteTable {
        &BUILTIN
    }

    /// Build a table from static `(feature_id, path)` pairs and feature lists
    pub fn from_tables(
        base_paths: &[(&str, &str)],
        overrides: &[(&str, &str)],
        restricted: &[&str],
        exact_match: &[&str],
    ) -> Self {
        let to_map = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|(id, path)| (id.to_string(), path.to_string()))
                .collect::<HashMap<_, _>>()
        };
        Self {
            base_paths: to_map(base_paths),
            overrides: to_map(overrides),
            restricted: FeatureSet::from_static(restricted),
            exact_match: FeatureSet::from_static(exact_match),
        }
    }

    /// Features only shown in the admin settings namespace
    pub fn restricted(&self) -> &FeatureSet {
        &self.restricted
    }

    /// Features whose active state needs exact path equality
    pub fn exact_match(&self) -> &FeatureSet {
        &self.exact_match
    }

    /// Resolve the route path for a feature in a namespace
    pub fn resolve(&self, feature_id: &str, namespace: PathNamespace) -> String {
        let Some(base_path) = self.base_paths.get(feature_id) else {
            return match namespace {
                PathNamespace::Normal => DEFAULT_PATH.to_string(),
                PathNamespace::AdminSettingsConfiguration => {
                    ADMIN_SETTINGS_LANDING_PATH.to_string()
                }
            };
        };

        match namespace {
            PathNamespace::Normal => base_path.clone(),
            PathNamespace::AdminSettingsConfiguration => {
                if feature_id == FEATURE_ADMIN_SETTINGS {
                    ADMIN_SETTINGS_LANDING_PATH.to_string()
                } else if let Some(path) = self.overrides.get(feature_id) {
                    path.clone()
                } else {
                    reroot(base_path)
                }
            }
        }
    }

    /// Whether `current_path` activates the entry for `feature_id`
    pub fn is_active(&self, current_path: &str, feature_id: &str, namespace: PathNamespace) -> bool {
        let resolved = self.resolve(feature_id, namespace);
        is_active(current_path, &resolved, feature_id, &self.exact_match)
    }

    /// Nested resolved paths whose parent feature is not exact-matched
    ///
    /// Each one would keep the parent highlighted while the child is open.
    /// Results are ordered by namespace, then parent, then child.
    pub fn collisions(&self) -> Vec<PathCollision> {
        let mut features: Vec<&str> = self.base_paths.keys().map(String::as_str).collect();
        features.sort_unstable();

        let mut found = Vec::new();
        for namespace in [
            PathNamespace::Normal,
            PathNamespace::AdminSettingsConfiguration,
        ] {
            let resolved: Vec<(&str, String)> = features
                .iter()
                .map(|id| (*id, self.resolve(id, namespace)))
                .collect();

            for (parent, parent_path) in &resolved {
                if self.exact_match.contains(parent) {
                    continue;
                }
                for (child, child_path) in &resolved {
                    if parent != child && is_nested(parent_path, child_path) {
                        found.push(PathCollision {
                            namespace,
                            parent: parent.to_string(),
                            child: child.to_string(),
                        });
                    }
                }
            }
        }
        found
    }
}

fn reroot(base_path: &str) -> String {
    let relative = base_path.strip_prefix(PATH_SEPARATOR).unwrap_or(base_path);
    if relative.is_empty() {
        ADMIN_SETTINGS_ROOT.to_string()
    } else {
        format!("{}{}{}", ADMIN_SETTINGS_ROOT, PATH_SEPARATOR, relative)
    }
}

fn is_nested(parent: &str, child: &str) -> bool {
    child
        .strip_prefix(parent)
        .is_some_and(|rest| rest.starts_with(PATH_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use navgate_common::features::{
        FEATURE_ASSETS, FEATURE_COLUMN_ACCESS_CONFIG, FEATURE_MAINTENANCE,
        FEATURE_MAINTENANCE_SCHEDULE, FEATURE_USER_ROLES,
    };

    const ADMIN: PathNamespace = PathNamespace::AdminSettingsConfiguration;

    #[test]
    fn test_normal_namespace_returns_base_path() {
        let table = RouteTable::builtin();
        assert_eq!(table.resolve(FEATURE_ASSETS, PathNamespace::Normal), "/assets");
        assert_eq!(
            table.resolve(FEATURE_USER_ROLES, PathNamespace::Normal),
            "/user-roles"
        );
        assert_eq!(
            table.resolve(FEATURE_ADMIN_SETTINGS, PathNamespace::Normal),
            "/adminsettings"
        );
    }

    #[test]
    fn test_unknown_feature_defaults() {
        let table = RouteTable::builtin();
        assert_eq!(table.resolve("UNKNOWN", PathNamespace::Normal), "/dashboard");
        assert_eq!(
            table.resolve("UNKNOWN", ADMIN),
            "/adminsettings/configuration"
        );
    }

    #[test]
    fn test_admin_root_feature_is_landing_path() {
        let table = RouteTable::builtin();
        assert_eq!(
            table.resolve(FEATURE_ADMIN_SETTINGS, ADMIN),
            ADMIN_SETTINGS_LANDING_PATH
        );
    }

    #[test]
    fn test_admin_override() {
        let table = RouteTable::builtin();
        assert_eq!(
            table.resolve(FEATURE_COLUMN_ACCESS_CONFIG, ADMIN),
            "/adminsettings/configuration/data-config"
        );
    }

    #[test]
    fn test_admin_reroots_base_path() {
        let table = RouteTable::builtin();
        assert_eq!(
            table.resolve(FEATURE_USER_ROLES, ADMIN),
            "/adminsettings/configuration/user-roles"
        );
        assert_eq!(
            table.resolve(FEATURE_MAINTENANCE_SCHEDULE, ADMIN),
            "/adminsettings/configuration/maintenance/schedule"
        );
    }

    #[test]
    fn test_reroot_strips_single_separator() {
        assert_eq!(reroot("/a"), "/adminsettings/configuration/a");
        assert_eq!(reroot("a"), "/adminsettings/configuration/a");
        assert_eq!(reroot("//a"), "/adminsettings/configuration//a");
        assert_eq!(reroot("/"), "/adminsettings/configuration");
    }

    #[test]
    fn test_normal_resolution_ignores_namespace_only_config() {
        let bare = RouteTable::from_tables(PATH_MAP, &[], &[], &[]);
        let builtin = RouteTable::builtin();
        for (id, _) in PATH_MAP {
            assert_eq!(
                bare.resolve(id, PathNamespace::Normal),
                builtin.resolve(id, PathNamespace::Normal)
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let table = RouteTable::builtin();
        for (id, _) in PATH_MAP {
            assert_eq!(table.resolve(id, ADMIN), table.resolve(id, ADMIN));
        }
    }

    #[test]
    fn test_builtin_has_no_unguarded_collisions() {
        assert_eq!(RouteTable::builtin().collisions(), Vec::new());
    }

    #[test]
    fn test_collision_detected_without_exact_match() {
        let table = RouteTable::from_tables(
            &[("MAINTENANCE", "/maintenance"), ("SCHEDULE", "/maintenance/schedule")],
            &[],
            &[],
            &[],
        );
        let collisions = table.collisions();
        assert!(collisions.contains(&PathCollision {
            namespace: PathNamespace::Normal,
            parent: "MAINTENANCE".to_string(),
            child: "SCHEDULE".to_string(),
        }));
    }

    #[test]
    fn test_table_is_active_uses_exact_match() {
        let table = RouteTable::builtin();
        assert!(table.is_active("/maintenance", FEATURE_MAINTENANCE, PathNamespace::Normal));
        assert!(!table.is_active(
            "/maintenance/schedule",
            FEATURE_MAINTENANCE,
            PathNamespace::Normal
        ));
        assert!(table.is_active("/assets/42", FEATURE_ASSETS, PathNamespace::Normal));
    }
}
