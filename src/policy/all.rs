//! Policies that include everything. Each is a stateless singleton.

use crate::model::{Node, NodeId, Relationship};
use super::{NodeInclusionPolicy, PropertyInclusionPolicy, RelationshipInclusionPolicy};

/// [`NodeInclusionPolicy`] that includes all nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IncludeAllNodes;

static INCLUDE_ALL_NODES: IncludeAllNodes = IncludeAllNodes;

impl IncludeAllNodes {
    pub fn instance() -> &'static Self {
        &INCLUDE_ALL_NODES
    }
}

impl NodeInclusionPolicy for IncludeAllNodes {
    fn include(&self, _node: &Node) -> bool {
        true
    }
}

/// [`RelationshipInclusionPolicy`] that includes all relationships, from any
/// point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IncludeAllRelationships;

static INCLUDE_ALL_RELATIONSHIPS: IncludeAllRelationships = IncludeAllRelationships;

impl IncludeAllRelationships {
    pub fn instance() -> &'static Self {
        &INCLUDE_ALL_RELATIONSHIPS
    }
}

impl RelationshipInclusionPolicy for IncludeAllRelationships {
    fn include(&self, _relationship: &Relationship) -> bool {
        true
    }

    fn include_from(&self, _relationship: &Relationship, _point_of_view: NodeId) -> bool {
        true
    }
}

/// [`PropertyInclusionPolicy`] that includes every property of any container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IncludeAllProperties;

static INCLUDE_ALL_PROPERTIES: IncludeAllProperties = IncludeAllProperties;

impl IncludeAllProperties {
    pub fn instance() -> &'static Self {
        &INCLUDE_ALL_PROPERTIES
    }
}

impl<C: ?Sized> PropertyInclusionPolicy<C> for IncludeAllProperties {
    fn include(&self, _key: &str, _container: &C) -> bool {
        true
    }
}
