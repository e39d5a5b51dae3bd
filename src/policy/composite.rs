//! Conjunctions of policies.

use std::sync::Arc;

use crate::model::{Node, NodeId, Relationship};
use super::{NodeInclusionPolicy, RelationshipInclusionPolicy};

/// Includes a node iff every member policy includes it.
///
/// An empty composite includes everything.
#[derive(Debug, Clone, Default)]
pub struct CompositeNodeInclusionPolicy {
    policies: Vec<Arc<dyn NodeInclusionPolicy>>,
}

impl CompositeNodeInclusionPolicy {
    pub fn of(policies: impl IntoIterator<Item = Arc<dyn NodeInclusionPolicy>>) -> Self {
        Self { policies: policies.into_iter().collect() }
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl NodeInclusionPolicy for CompositeNodeInclusionPolicy {
    fn include(&self, node: &Node) -> bool {
        self.policies.iter().all(|p| p.include(node))
    }
}

/// Includes a relationship iff every member policy includes it.
#[derive(Debug, Clone, Default)]
pub struct CompositeRelationshipInclusionPolicy {
    policies: Vec<Arc<dyn RelationshipInclusionPolicy>>,
}

impl CompositeRelationshipInclusionPolicy {
    pub fn of(policies: impl IntoIterator<Item = Arc<dyn RelationshipInclusionPolicy>>) -> Self {
        Self { policies: policies.into_iter().collect() }
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl RelationshipInclusionPolicy for CompositeRelationshipInclusionPolicy {
    fn include(&self, relationship: &Relationship) -> bool {
        self.policies.iter().all(|p| p.include(relationship))
    }

    fn include_from(&self, relationship: &Relationship, point_of_view: NodeId) -> bool {
        self.policies.iter().all(|p| p.include_from(relationship, point_of_view))
    }
}
