//! Policies that filter by label, relationship type/direction, or key.

use hashbrown::HashSet;

use crate::model::{Direction, Node, NodeId, Relationship};
use crate::{Error, Result};
use super::{NodeInclusionPolicy, PropertyInclusionPolicy, RelationshipInclusionPolicy};

fn name_set<I, S>(what: &str, names: I) -> Result<HashSet<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut set = HashSet::new();
    for name in names {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidArgument(format!("{what} must not be empty")));
        }
        set.insert(name);
    }
    Ok(set)
}

// ============================================================================
// Nodes
// ============================================================================

/// Includes nodes carrying at least one of the given labels.
///
/// With no labels configured every node is included.
#[derive(Debug, Clone, Default)]
pub struct IncludeNodesWithLabels {
    labels: HashSet<String>,
}

impl IncludeNodesWithLabels {
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self { labels: name_set("label", labels)? })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl NodeInclusionPolicy for IncludeNodesWithLabels {
    fn include(&self, node: &Node) -> bool {
        self.labels.is_empty() || self.labels.iter().any(|l| node.has_label(l))
    }
}

// ============================================================================
// Relationships
// ============================================================================

/// Includes relationships of the given types, seen in the given direction.
///
/// No types means any type. Direction only applies when the relationship is
/// judged from a point of view ([`RelationshipInclusionPolicy::include_from`]);
/// a self-loop satisfies every direction.
#[derive(Debug, Clone, Default)]
pub struct IncludeRelationships {
    types: HashSet<String>,
    direction: Direction,
}

impl IncludeRelationships {
    pub fn new<I, S>(types: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self { types: name_set("relationship type", types)?, direction: Direction::Both })
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl RelationshipInclusionPolicy for IncludeRelationships {
    fn include(&self, relationship: &Relationship) -> bool {
        self.types.is_empty() || self.types.contains(&relationship.rel_type)
    }

    fn include_from(&self, relationship: &Relationship, point_of_view: NodeId) -> bool {
        self.include(relationship)
            && relationship
                .direction_from(point_of_view)
                .is_some_and(|actual| self.direction.matches(actual))
    }
}

// ============================================================================
// Properties
// ============================================================================

/// Includes only the listed property keys, on any container.
#[derive(Debug, Clone, Default)]
pub struct IncludePropertyKeys {
    keys: HashSet<String>,
}

impl IncludePropertyKeys {
    pub fn new<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self { keys: name_set("property key", keys)? })
    }
}

impl<C: ?Sized> PropertyInclusionPolicy<C> for IncludePropertyKeys {
    fn include(&self, key: &str, _container: &C) -> bool {
        self.keys.contains(key)
    }
}
