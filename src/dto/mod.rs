//! # Immutable Snapshots
//!
//! Value objects capturing a live element's type (or labels) and properties
//! at one point in time. They hold no reference to the store or the
//! transaction, so they can be kept, compared and hashed after the
//! transaction that read them has ended.
//!
//! Properties are text-encoded ([`Value::to_text`](crate::Value::to_text)).
//! Constructors that take explicit properties use them *instead of* the live
//! ones, never merged with them.

pub mod properties;
pub mod relationship;
pub mod node;

pub use properties::ImmutableProperties;
pub use relationship::ImmutableRelationship;
pub use node::ImmutableNode;

/// Anything holding an immutable property map.
pub trait HasProperties {
    fn properties(&self) -> &ImmutableProperties;

    fn get_property(&self, key: &str) -> Option<&str> {
        self.properties().get(key)
    }

    fn has_property(&self, key: &str) -> bool {
        self.properties().contains_key(key)
    }
}

/// A relationship-shaped snapshot: a type label plus properties.
pub trait HasTypeAndProperties: HasProperties {
    fn rel_type(&self) -> &str;

    /// Same type and same properties.
    fn matches(&self, other: &dyn HasTypeAndProperties) -> bool {
        self.rel_type() == other.rel_type() && self.properties() == other.properties()
    }
}

/// A node-shaped snapshot: sorted, de-duplicated labels plus properties.
pub trait HasLabelsAndProperties: HasProperties {
    fn labels(&self) -> &[String];

    fn has_label(&self, label: &str) -> bool {
        self.labels().iter().any(|l| l == label)
    }

    /// Same labels and same properties.
    fn matches(&self, other: &dyn HasLabelsAndProperties) -> bool {
        self.labels() == other.labels() && self.properties() == other.properties()
    }
}
