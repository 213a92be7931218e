//! Feature identifiers and static route configuration
//!
//! Feature identifiers are opaque tokens issued by the tree provider. The
//! tables below are the console's static routing data: base paths, admin
//! settings overrides, admin-only features and exact-match features.
//! The tables are kept in alphabetical order by feature id.

// =============================================================================
// Feature Identifiers
// =============================================================================

pub const FEATURE_ADMIN_SETTINGS: &str = "ADMINSETTINGS";
pub const FEATURE_ASSETS: &str = "ASSETS";
pub const FEATURE_ASSET_TYPES: &str = "ASSETTYPES";
pub const FEATURE_AUDIT_LOGS: &str = "AUDITLOGS";
pub const FEATURE_BREAKDOWN_REPORTS: &str = "BREAKDOWNREPORTS";
pub const FEATURE_BULK_SERIAL_NUMBER_PRINT: &str = "BULKSERIALNUMBERPRINT";
pub const FEATURE_COLUMN_ACCESS_CONFIG: &str = "COLUMNACCESSCONFIG";
pub const FEATURE_CRON_JOBS: &str = "CRONJOBS";
pub const FEATURE_DASHBOARD: &str = "DASHBOARD";
pub const FEATURE_DEPARTMENTS: &str = "DEPARTMENTS";
pub const FEATURE_LOCATIONS: &str = "LOCATIONS";
pub const FEATURE_MAINTENANCE: &str = "MAINTENANCE";
pub const FEATURE_MAINTENANCE_SCHEDULE: &str = "MAINTENANCESCHEDULE";
pub const FEATURE_REPORTS: &str = "REPORTS";
pub const FEATURE_USER_ROLES: &str = "USERROLES";
pub const FEATURE_USERS: &str = "USERS";
pub const FEATURE_VENDORS: &str = "VENDORS";

// =============================================================================
// Paths
// =============================================================================

/// Path used for an unknown feature in the normal namespace
pub const DEFAULT_PATH: &str = "/dashboard";

/// Landing path of the admin settings namespace
///
/// Also the fallback for unknown features while in that namespace.
pub const ADMIN_SETTINGS_LANDING_PATH: &str = "/adminsettings/configuration";

/// Prefix applied to base paths in the admin settings namespace
pub const ADMIN_SETTINGS_ROOT: &str = "/adminsettings/configuration";

/// Base path for every known feature
pub const PATH_MAP: &[(&str, &str)] = &[
    (FEATURE_ADMIN_SETTINGS, "/adminsettings"),
    (FEATURE_ASSETS, "/assets"),
    (FEATURE_ASSET_TYPES, "/asset-types"),
    (FEATURE_AUDIT_LOGS, "/audit-logs"),
    (FEATURE_BREAKDOWN_REPORTS, "/breakdown-reports"),
    (FEATURE_BULK_SERIAL_NUMBER_PRINT, "/bulk-serial-number-print"),
    (FEATURE_COLUMN_ACCESS_CONFIG, "/column-access-config"),
    (FEATURE_CRON_JOBS, "/cron-jobs"),
    (FEATURE_DASHBOARD, "/dashboard"),
    (FEATURE_DEPARTMENTS, "/departments"),
    (FEATURE_LOCATIONS, "/locations"),
    (FEATURE_MAINTENANCE, "/maintenance"),
    (FEATURE_MAINTENANCE_SCHEDULE, "/maintenance/schedule"),
    (FEATURE_REPORTS, "/reports"),
    (FEATURE_USER_ROLES, "/user-roles"),
    (FEATURE_USERS, "/users"),
    (FEATURE_VENDORS, "/vendors"),
];

/// Admin settings paths that are not a mechanical prefix of the base path
pub const OVERRIDE_MAP: &[(&str, &str)] = &[
    (
        FEATURE_BULK_SERIAL_NUMBER_PRINT,
        "/adminsettings/configuration/data-config/serial-print",
    ),
    (
        FEATURE_COLUMN_ACCESS_CONFIG,
        "/adminsettings/configuration/data-config",
    ),
];

/// Features shown only in the admin settings namespace
pub const RESTRICTED_FEATURES: &[&str] = &[
    FEATURE_BULK_SERIAL_NUMBER_PRINT,
    FEATURE_COLUMN_ACCESS_CONFIG,
    FEATURE_CRON_JOBS,
    FEATURE_USER_ROLES,
];

/// Features whose resolved path is a literal prefix of another feature's path
///
/// - `ADMINSETTINGS`: the admin landing path prefixes every admin path
/// - `COLUMNACCESSCONFIG`: data-config prefixes the serial print screen
/// - `MAINTENANCE`: `/maintenance` prefixes `/maintenance/schedule`
pub const EXACT_MATCH_FEATURES: &[&str] = &[
    FEATURE_ADMIN_SETTINGS,
    FEATURE_COLUMN_ACCESS_CONFIG,
    FEATURE_MAINTENANCE,
];

/// Look up a feature's base path
pub fn base_path(feature_id: &str) -> Option<&'static str> {
    lookup(PATH_MAP, feature_id)
}

/// Look up a feature's admin settings override path
pub fn override_path(feature_id: &str) -> Option<&'static str> {
    lookup(OVERRIDE_MAP, feature_id)
}

/// Check if a feature is only shown in the admin settings namespace
pub fn is_restricted_feature(feature_id: &str) -> bool {
    RESTRICTED_FEATURES.contains(&feature_id)
}

/// Check if a feature's active state requires exact path equality
pub fn is_exact_match_feature(feature_id: &str) -> bool {
    EXACT_MATCH_FEATURES.contains(&feature_id)
}

fn lookup(table: &[(&str, &'static str)], feature_id: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(id, _)| *id == feature_id)
        .map(|(_, path)| *path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::validate_feature_id;

    fn keys(table: &[(&str, &str)]) -> Vec<String> {
        table.iter().map(|(id, _)| id.to_string()).collect()
    }

    fn assert_sorted_unique(ids: &[String]) {
        let mut sorted = ids.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(ids, sorted.as_slice());
    }

    #[test]
    fn test_tables_sorted_and_unique() {
        assert_sorted_unique(&keys(PATH_MAP));
        assert_sorted_unique(&keys(OVERRIDE_MAP));
        let restricted: Vec<String> = RESTRICTED_FEATURES.iter().map(|s| s.to_string()).collect();
        assert_sorted_unique(&restricted);
        let exact: Vec<String> = EXACT_MATCH_FEATURES.iter().map(|s| s.to_string()).collect();
        assert_sorted_unique(&exact);
    }

    #[test]
    fn test_configured_features_have_base_paths() {
        for (id, _) in OVERRIDE_MAP {
            assert!(base_path(id).is_some(), "override for unmapped '{}'", id);
        }
        for id in RESTRICTED_FEATURES.iter().chain(EXACT_MATCH_FEATURES) {
            assert!(base_path(id).is_some(), "unmapped feature '{}'", id);
        }
    }

    #[test]
    fn test_feature_ids_valid() {
        for (id, _) in PATH_MAP {
            assert!(validate_feature_id(id).is_ok(), "invalid feature id '{}'", id);
        }
    }

    #[test]
    fn test_paths_absolute() {
        for (_, path) in PATH_MAP.iter().chain(OVERRIDE_MAP) {
            assert!(path.starts_with('/'), "relative path '{}'", path);
            assert!(!path.ends_with('/'), "trailing separator in '{}'", path);
        }
        assert!(OVERRIDE_MAP
            .iter()
            .all(|(_, path)| path.starts_with(ADMIN_SETTINGS_ROOT)));
    }

    #[test]
    fn test_lookups() {
        assert_eq!(base_path(FEATURE_ASSETS), Some("/assets"));
        assert_eq!(base_path("UNKNOWN"), None);
        assert_eq!(
            override_path(FEATURE_COLUMN_ACCESS_CONFIG),
            Some("/adminsettings/configuration/data-config")
        );
        assert_eq!(override_path(FEATURE_ASSETS), None);
        assert!(is_restricted_feature(FEATURE_USER_ROLES));
        assert!(!is_restricted_feature(FEATURE_ASSETS));
        assert!(is_exact_match_feature(FEATURE_MAINTENANCE));
        assert!(!is_exact_match_feature(FEATURE_VENDORS));
    }
}
