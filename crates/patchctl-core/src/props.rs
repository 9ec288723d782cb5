//! Device and stream property bags.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Well-known server property keys.
pub mod keys {
    /// Device class ("monitor" for monitor devices)
    pub const DEVICE_CLASS: &str = "device.class";
    /// Factory that created the node
    pub const FACTORY_NAME: &str = "factory.name";
    /// Human-readable application name
    pub const APPLICATION_NAME: &str = "application.name";
    /// Application identifier (reverse-DNS)
    pub const APPLICATION_ID: &str = "application.id";
}

/// String-keyed property bag attached to server objects.
///
/// `get` returns `None` for an absent key, which is distinct from a key
/// that is present with an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap(HashMap<String, String>);

impl PropertyMap {
    /// Create an empty property map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a property value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// True when the key is present, even with an empty value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Set a property value, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no properties are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for PropertyMap {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }
}
