//! Immutable relationship snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Relationship;
use crate::{Error, Result};
use super::{HasProperties, HasTypeAndProperties, ImmutableProperties};

/// A relationship's type and text-valued properties, frozen.
///
/// Equality and hashing are structural: two snapshots of different live
/// relationships with the same type and properties are equal. Deserializing
/// applies the same empty-type check as [`ImmutableRelationship::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawImmutableRelationship")]
pub struct ImmutableRelationship {
    rel_type: String,
    properties: ImmutableProperties,
}

impl ImmutableRelationship {
    /// Snapshot a live relationship, reading all of its properties.
    pub fn from_relationship(relationship: &Relationship) -> Self {
        Self {
            rel_type: relationship.rel_type.clone(),
            properties: ImmutableProperties::from_container(relationship),
        }
    }

    /// Snapshot a live relationship's type with `properties` in place of its
    /// own. The live properties are ignored.
    pub fn from_relationship_with(
        relationship: &Relationship,
        properties: impl Into<ImmutableProperties>,
    ) -> Self {
        Self {
            rel_type: relationship.rel_type.clone(),
            properties: properties.into(),
        }
    }

    /// A snapshot with no properties.
    pub fn of_type(rel_type: impl Into<String>) -> Result<Self> {
        Self::new(rel_type, ImmutableProperties::empty())
    }

    pub fn new(rel_type: impl Into<String>, properties: impl Into<ImmutableProperties>) -> Result<Self> {
        let rel_type = rel_type.into();
        if rel_type.is_empty() {
            return Err(Error::InvalidArgument("relationship type must not be empty".into()));
        }
        Ok(Self { rel_type, properties: properties.into() })
    }

    /// Copy of another relationship-shaped snapshot.
    pub fn from_snapshot(other: &dyn HasTypeAndProperties) -> Self {
        Self {
            rel_type: other.rel_type().to_owned(),
            properties: other.properties().clone(),
        }
    }

    /// Whether a live relationship currently has this type and exactly these
    /// properties.
    pub fn matches_relationship(&self, relationship: &Relationship) -> bool {
        self.rel_type == relationship.rel_type && self.properties.matches(&relationship.properties)
    }
}

#[derive(Deserialize)]
struct RawImmutableRelationship {
    rel_type: String,
    #[serde(default)]
    properties: ImmutableProperties,
}

impl TryFrom<RawImmutableRelationship> for ImmutableRelationship {
    type Error = Error;

    fn try_from(raw: RawImmutableRelationship) -> Result<Self> {
        Self::new(raw.rel_type, raw.properties)
    }
}

impl HasProperties for ImmutableRelationship {
    fn properties(&self) -> &ImmutableProperties {
        &self.properties
    }
}

impl HasTypeAndProperties for ImmutableRelationship {
    fn rel_type(&self) -> &str {
        &self.rel_type
    }
}

impl From<&Relationship> for ImmutableRelationship {
    fn from(relationship: &Relationship) -> Self {
        Self::from_relationship(relationship)
    }
}

impl fmt::Display for ImmutableRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rel_type, self.properties)
    }
}
