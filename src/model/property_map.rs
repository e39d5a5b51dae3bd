//! PropertyMap: the key-value store on nodes and relationships.

use std::collections::HashMap;
use super::Value;

/// A map of property names to values.
pub type PropertyMap = HashMap<String, Value>;

/// Anything that carries a live property map.
pub trait PropertyContainer {
    fn properties(&self) -> &PropertyMap;

    fn property_keys(&self) -> impl Iterator<Item = &str> {
        self.properties().keys().map(String::as_str)
    }
}
