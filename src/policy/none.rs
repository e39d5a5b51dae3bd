//! Policies that include nothing. Each is a stateless singleton.

use crate::model::{Node, NodeId, Relationship};
use super::{NodeInclusionPolicy, PropertyInclusionPolicy, RelationshipInclusionPolicy};

/// [`NodeInclusionPolicy`] that includes no nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IncludeNoNodes;

static INCLUDE_NO_NODES: IncludeNoNodes = IncludeNoNodes;

impl IncludeNoNodes {
    pub fn instance() -> &'static Self {
        &INCLUDE_NO_NODES
    }
}

impl NodeInclusionPolicy for IncludeNoNodes {
    fn include(&self, _node: &Node) -> bool {
        false
    }
}

/// [`RelationshipInclusionPolicy`] that includes no relationships.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IncludeNoRelationships;

static INCLUDE_NO_RELATIONSHIPS: IncludeNoRelationships = IncludeNoRelationships;

impl IncludeNoRelationships {
    pub fn instance() -> &'static Self {
        &INCLUDE_NO_RELATIONSHIPS
    }
}

impl RelationshipInclusionPolicy for IncludeNoRelationships {
    fn include(&self, _relationship: &Relationship) -> bool {
        false
    }

    fn include_from(&self, _relationship: &Relationship, _point_of_view: NodeId) -> bool {
        false
    }
}

/// [`PropertyInclusionPolicy`] that includes no properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IncludeNoProperties;

static INCLUDE_NO_PROPERTIES: IncludeNoProperties = IncludeNoProperties;

impl IncludeNoProperties {
    pub fn instance() -> &'static Self {
        &INCLUDE_NO_PROPERTIES
    }
}

impl<C: ?Sized> PropertyInclusionPolicy<C> for IncludeNoProperties {
    fn include(&self, _key: &str, _container: &C) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RelId;

    #[test]
    fn test_includes_nothing() {
        let node = Node::new(NodeId(1)).with_labels(["Intern"]).with_property("age", 25);
        let rel = Relationship::new(RelId(1), NodeId(1), NodeId(1), "LIVES_IN");

        assert!(!IncludeNoNodes::instance().include(&node));
        assert!(!IncludeNoRelationships::instance().include(&rel));
        assert!(!IncludeNoRelationships::instance().include_from(&rel, NodeId(1)));
        assert!(!IncludeNoProperties::instance().include("age", &node));
    }
}
