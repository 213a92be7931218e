//! Sets of feature identifiers used as static configuration

use std::collections::HashSet;

/// An immutable set of feature identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
    ids: HashSet<String>,
}

impl FeatureSet {
    /// Build a set from a static table
    pub fn from_static(ids: &[&str]) -> Self {
        Self {
            ids: ids.iter().map(|id| id.to_string()).collect(),
        }
    }

    pub fn contains(&self, feature_id: &str) -> bool {
        self.ids.contains(feature_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(str::to_string).collect(),
        }
    }
}
