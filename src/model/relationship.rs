//! Relationship (edge) in the property graph.

use serde::{Deserialize, Serialize};
use super::{NodeId, PropertyContainer, PropertyMap, Value};

/// Opaque relationship identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RelId(pub u64);

impl std::fmt::Display for RelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a relationship as seen from one of its nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Outgoing,
    Incoming,
    #[default]
    Both,
}

impl Direction {
    /// Whether a relationship seen in direction `actual` satisfies `self`.
    pub fn matches(self, actual: Direction) -> bool {
        self == Direction::Both || actual == Direction::Both || self == actual
    }
}

/// A live relationship (directed edge) as returned by a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: RelId,
    pub src: NodeId,
    pub dst: NodeId,
    pub rel_type: String,
    pub properties: PropertyMap,
}

impl Relationship {
    pub fn new(id: RelId, src: NodeId, dst: NodeId, rel_type: impl Into<String>) -> Self {
        Self {
            id,
            src,
            dst,
            rel_type: rel_type.into(),
            properties: PropertyMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Direction of this relationship from `point_of_view`.
    ///
    /// Self-loops are `Both`. Returns `None` when the node is not an end.
    pub fn direction_from(&self, point_of_view: NodeId) -> Option<Direction> {
        match (self.src == point_of_view, self.dst == point_of_view) {
            (true, true) => Some(Direction::Both),
            (true, false) => Some(Direction::Outgoing),
            (false, true) => Some(Direction::Incoming),
            (false, false) => None,
        }
    }
}

impl PropertyContainer for Relationship {
    fn properties(&self) -> &PropertyMap {
        &self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from() {
        let rel = Relationship::new(RelId(1), NodeId(1), NodeId(2), "KNOWS");
        assert_eq!(rel.direction_from(NodeId(1)), Some(Direction::Outgoing));
        assert_eq!(rel.direction_from(NodeId(2)), Some(Direction::Incoming));
        assert_eq!(rel.direction_from(NodeId(3)), None);

        let looped = Relationship::new(RelId(2), NodeId(4), NodeId(4), "SELF");
        assert_eq!(looped.direction_from(NodeId(4)), Some(Direction::Both));
    }

    #[test]
    fn test_direction_matches() {
        assert!(Direction::Both.matches(Direction::Incoming));
        assert!(Direction::Outgoing.matches(Direction::Outgoing));
        assert!(Direction::Outgoing.matches(Direction::Both));
        assert!(!Direction::Outgoing.matches(Direction::Incoming));
    }
}
