//! Input validation functions
//!
//! Validators shared by the client and tree providers. Providers can use
//! them before serving a tree, the client enforces them when a tree arrives.

mod feature_id;

pub use feature_id::{FeatureIdError, MAX_FEATURE_ID_LENGTH, validate_feature_id};
