//! Text-valued, immutable property maps.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{PropertyContainer, PropertyMap};

/// A closed map from property name to text-encoded value.
///
/// Built once and never changed. Keys are kept sorted so equality, hashing
/// and `Display` do not depend on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImmutableProperties {
    entries: BTreeMap<String, String>,
}

impl ImmutableProperties {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read every property of a live container, text-encoding the values.
    pub fn from_container<C: PropertyContainer>(container: &C) -> Self {
        Self::from_property_map(container.properties())
    }

    pub fn from_property_map(properties: &PropertyMap) -> Self {
        properties.iter().map(|(k, v)| (k.clone(), v.to_text())).collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exactly the same keys as `live`, each with the same text encoding.
    pub fn matches(&self, live: &PropertyMap) -> bool {
        live.len() == self.entries.len()
            && live.iter().all(|(k, v)| self.get(k).is_some_and(|text| text == v.to_text()))
    }

    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries.clone()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ImmutableProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl From<BTreeMap<String, String>> for ImmutableProperties {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

impl From<HashMap<String, String>> for ImmutableProperties {
    fn from(entries: HashMap<String, String>) -> Self {
        entries.into_iter().collect()
    }
}

impl fmt::Display for ImmutableProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "{k}: {v}")?;
        }
        write!(f, "}}")
    }
}
