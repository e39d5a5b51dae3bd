//! Policy bundles and their JSON configuration.
//!
//! ```json
//! {
//!   "nodes": { "labels": ["Employee", "Intern"] },
//!   "node_properties": "all",
//!   "relationships": { "types": ["WORKS_FOR"], "direction": "Outgoing" },
//!   "relationship_properties": { "keys": ["since"] }
//! }
//! ```
//!
//! Missing sections default to `"all"`. Unknown keys, at the top level or
//! inside a rule, are rejected.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::{Direction, Node, Relationship};
use crate::Result;
use super::{
    IncludeAllNodes, IncludeAllProperties, IncludeAllRelationships, IncludeNoNodes,
    IncludeNoProperties, IncludeNoRelationships, IncludeNodesWithLabels, IncludePropertyKeys,
    IncludeRelationships, NodeInclusionPolicy, PropertyInclusionPolicy,
    RelationshipInclusionPolicy,
};

// ============================================================================
// InclusionPolicies
// ============================================================================

/// One policy of each kind. Immutable; the `with_*` methods return a copy.
#[derive(Clone)]
pub struct InclusionPolicies {
    nodes: Arc<dyn NodeInclusionPolicy>,
    node_properties: Arc<dyn PropertyInclusionPolicy<Node>>,
    relationships: Arc<dyn RelationshipInclusionPolicy>,
    relationship_properties: Arc<dyn PropertyInclusionPolicy<Relationship>>,
}

impl InclusionPolicies {
    /// Include every node, relationship and property.
    pub fn all() -> Self {
        Self {
            nodes: Arc::new(IncludeAllNodes),
            node_properties: Arc::new(IncludeAllProperties),
            relationships: Arc::new(IncludeAllRelationships),
            relationship_properties: Arc::new(IncludeAllProperties),
        }
    }

    /// Include nothing.
    pub fn none() -> Self {
        Self {
            nodes: Arc::new(IncludeNoNodes),
            node_properties: Arc::new(IncludeNoProperties),
            relationships: Arc::new(IncludeNoRelationships),
            relationship_properties: Arc::new(IncludeNoProperties),
        }
    }

    pub fn with_node_inclusion_policy(&self, policy: impl NodeInclusionPolicy + 'static) -> Self {
        Self { nodes: Arc::new(policy), ..self.clone() }
    }

    pub fn with_node_property_inclusion_policy(
        &self,
        policy: impl PropertyInclusionPolicy<Node> + 'static,
    ) -> Self {
        Self { node_properties: Arc::new(policy), ..self.clone() }
    }

    pub fn with_relationship_inclusion_policy(
        &self,
        policy: impl RelationshipInclusionPolicy + 'static,
    ) -> Self {
        Self { relationships: Arc::new(policy), ..self.clone() }
    }

    pub fn with_relationship_property_inclusion_policy(
        &self,
        policy: impl PropertyInclusionPolicy<Relationship> + 'static,
    ) -> Self {
        Self { relationship_properties: Arc::new(policy), ..self.clone() }
    }

    pub fn nodes(&self) -> &dyn NodeInclusionPolicy {
        self.nodes.as_ref()
    }

    pub fn node_properties(&self) -> &dyn PropertyInclusionPolicy<Node> {
        self.node_properties.as_ref()
    }

    pub fn relationships(&self) -> &dyn RelationshipInclusionPolicy {
        self.relationships.as_ref()
    }

    pub fn relationship_properties(&self) -> &dyn PropertyInclusionPolicy<Relationship> {
        self.relationship_properties.as_ref()
    }
}

impl Default for InclusionPolicies {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Debug for InclusionPolicies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InclusionPolicies")
            .field("nodes", &self.nodes)
            .field("node_properties", &self.node_properties)
            .field("relationships", &self.relationships)
            .field("relationship_properties", &self.relationship_properties)
            .finish()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// `"all"` or `"none"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    All,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum NodeRule {
    Preset(Preset),
    Labels { labels: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum RelationshipRule {
    Preset(Preset),
    Types {
        types: Vec<String>,
        #[serde(default)]
        direction: Direction,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum PropertyRule {
    Preset(Preset),
    Keys { keys: Vec<String> },
}

impl Default for NodeRule {
    fn default() -> Self { NodeRule::Preset(Preset::All) }
}

impl Default for RelationshipRule {
    fn default() -> Self { RelationshipRule::Preset(Preset::All) }
}

impl Default for PropertyRule {
    fn default() -> Self { PropertyRule::Preset(Preset::All) }
}

/// Serializable description of an [`InclusionPolicies`] bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    pub nodes: NodeRule,
    pub node_properties: PropertyRule,
    pub relationships: RelationshipRule,
    pub relationship_properties: PropertyRule,
}

impl PolicyConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the bundle. Fails on empty label, type or key names.
    pub fn build(&self) -> Result<InclusionPolicies> {
        let nodes: Arc<dyn NodeInclusionPolicy> = match &self.nodes {
            NodeRule::Preset(Preset::All) => Arc::new(IncludeAllNodes),
            NodeRule::Preset(Preset::None) => Arc::new(IncludeNoNodes),
            NodeRule::Labels { labels } => Arc::new(IncludeNodesWithLabels::new(labels.iter().cloned())?),
        };

        let relationships: Arc<dyn RelationshipInclusionPolicy> = match &self.relationships {
            RelationshipRule::Preset(Preset::All) => Arc::new(IncludeAllRelationships),
            RelationshipRule::Preset(Preset::None) => Arc::new(IncludeNoRelationships),
            RelationshipRule::Types { types, direction } => Arc::new(
                IncludeRelationships::new(types.iter().cloned())?.with_direction(*direction),
            ),
        };

        let policies = InclusionPolicies {
            nodes,
            node_properties: property_policy(&self.node_properties)?,
            relationships,
            relationship_properties: property_policy(&self.relationship_properties)?,
        };
        tracing::debug!(?policies, "built inclusion policies from config");
        Ok(policies)
    }
}

fn property_policy<C: ?Sized + 'static>(
    rule: &PropertyRule,
) -> Result<Arc<dyn PropertyInclusionPolicy<C>>> {
    let policy: Arc<dyn PropertyInclusionPolicy<C>> = match rule {
        PropertyRule::Preset(Preset::All) => Arc::new(IncludeAllProperties),
        PropertyRule::Preset(Preset::None) => Arc::new(IncludeNoProperties),
        PropertyRule::Keys { keys } => Arc::new(IncludePropertyKeys::new(keys.iter().cloned())?),
    };
    Ok(policy)
}
