//! Feature identifier validation

use std::fmt;

/// Maximum length for feature identifiers in characters
pub const MAX_FEATURE_ID_LENGTH: usize = 64;

/// Validation error for feature identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureIdError {
    /// Identifier is empty
    Empty,
    /// Identifier exceeds maximum length
    TooLong,
    /// Identifier contains characters outside `[A-Za-z0-9_-]`
    InvalidCharacters,
}

impl fmt::Display for FeatureIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureIdError::Empty => write!(f, "feature id is empty"),
            FeatureIdError::TooLong => write!(
                f,
                "feature id is longer than {} characters",
                MAX_FEATURE_ID_LENGTH
            ),
            FeatureIdError::InvalidCharacters => {
                write!(f, "feature id contains invalid characters")
            }
        }
    }
}

impl std::error::Error for FeatureIdError {}

/// Validate a feature identifier
///
/// Checks:
/// - Not empty
/// - Does not exceed maximum length (64 characters)
/// - Contains only ASCII letters, digits, `_` and `-`
///
/// # Errors
///
/// Returns a `FeatureIdError` variant describing the validation failure.
pub fn validate_feature_id(feature_id: &str) -> Result<(), FeatureIdError> {
    if feature_id.is_empty() {
        return Err(FeatureIdError::Empty);
    }
    if feature_id.len() > MAX_FEATURE_ID_LENGTH {
        return Err(FeatureIdError::TooLong);
    }
    if !feature_id
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
    {
        return Err(FeatureIdError::InvalidCharacters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_feature_ids() {
        assert!(validate_feature_id("ASSETS").is_ok());
        assert!(validate_feature_id("COLUMNACCESSCONFIG").is_ok());
        assert!(validate_feature_id("asset_types").is_ok());
        assert!(validate_feature_id("REPORT-2").is_ok());
        assert!(validate_feature_id(&"A".repeat(MAX_FEATURE_ID_LENGTH)).is_ok());
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate_feature_id(""), Err(FeatureIdError::Empty));
    }

    #[test]
    fn test_too_long() {
        assert_eq!(
            validate_feature_id(&"A".repeat(MAX_FEATURE_ID_LENGTH + 1)),
            Err(FeatureIdError::TooLong)
        );
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            validate_feature_id("USER ROLES"),
            Err(FeatureIdError::InvalidCharacters)
        );
        assert_eq!(
            validate_feature_id("ASSETS/1"),
            Err(FeatureIdError::InvalidCharacters)
        );
        assert_eq!(
            validate_feature_id("ÄSSETS"),
            Err(FeatureIdError::InvalidCharacters)
        );
        assert_eq!(
            validate_feature_id("ASSETS\n"),
            Err(FeatureIdError::InvalidCharacters)
        );
    }
}
