//! # Inclusion Policies
//!
//! A policy decides whether a graph element takes part in some operation
//! (a traversal, an export, a snapshot). Policies are pure predicates: no
//! state, no I/O, total over every element.
//!
//! | Policy | Kind | Includes |
//! |--------|------|----------|
//! | `IncludeAllNodes` / `IncludeNoNodes` | node | everything / nothing |
//! | `IncludeAllRelationships` / `IncludeNoRelationships` | relationship | everything / nothing |
//! | `IncludeAllProperties` / `IncludeNoProperties` | property | everything / nothing |
//! | `IncludeNodesWithLabels` | node | nodes carrying one of the labels |
//! | `IncludeRelationships` | relationship | matching types, optionally direction |
//! | `IncludePropertyKeys` | property | listed keys |
//! | `Composite*InclusionPolicy` | node / relationship | all members agree |
//!
//! The trivial variants are unit structs with one shared `'static` instance.
//! [`InclusionPolicies`] bundles one policy of each kind and can be built
//! from a JSON [`PolicyConfig`].

pub mod all;
pub mod none;
pub mod filter;
pub mod composite;
pub mod config;

use std::fmt;
use std::sync::Arc;

use crate::model::{Node, NodeId, Relationship};
use crate::storage::GraphStore;
use crate::Result;

pub use all::{IncludeAllNodes, IncludeAllRelationships, IncludeAllProperties};
pub use none::{IncludeNoNodes, IncludeNoRelationships, IncludeNoProperties};
pub use filter::{IncludeNodesWithLabels, IncludeRelationships, IncludePropertyKeys};
pub use composite::{CompositeNodeInclusionPolicy, CompositeRelationshipInclusionPolicy};
pub use config::{InclusionPolicies, PolicyConfig, Preset, NodeRule, RelationshipRule, PropertyRule};

// ============================================================================
// Policy traits
// ============================================================================

/// Decides which nodes are included.
pub trait NodeInclusionPolicy: Send + Sync + fmt::Debug {
    fn include(&self, node: &Node) -> bool;
}

/// Decides which relationships are included.
pub trait RelationshipInclusionPolicy: Send + Sync + fmt::Debug {
    fn include(&self, relationship: &Relationship) -> bool;

    /// Include `relationship` when reached from the node `point_of_view`.
    ///
    /// Policies that care about direction override this.
    fn include_from(&self, relationship: &Relationship, point_of_view: NodeId) -> bool {
        let _ = point_of_view;
        self.include(relationship)
    }
}

/// Decides which properties of a container `C` are included.
pub trait PropertyInclusionPolicy<C: ?Sized>: Send + Sync + fmt::Debug {
    fn include(&self, key: &str, container: &C) -> bool;
}

impl<P: NodeInclusionPolicy + ?Sized> NodeInclusionPolicy for Arc<P> {
    fn include(&self, node: &Node) -> bool {
        (**self).include(node)
    }
}

impl<P: RelationshipInclusionPolicy + ?Sized> RelationshipInclusionPolicy for Arc<P> {
    fn include(&self, relationship: &Relationship) -> bool {
        (**self).include(relationship)
    }

    fn include_from(&self, relationship: &Relationship, point_of_view: NodeId) -> bool {
        (**self).include_from(relationship, point_of_view)
    }
}

impl<C: ?Sized, P: PropertyInclusionPolicy<C> + ?Sized> PropertyInclusionPolicy<C> for Arc<P> {
    fn include(&self, key: &str, container: &C) -> bool {
        (**self).include(key, container)
    }
}

// ============================================================================
// Scans
// ============================================================================

/// All nodes in the store that `policy` includes, in store order.
pub async fn get_all_nodes<P, S>(policy: &P, store: &S, tx: &S::Tx) -> Result<Vec<Node>>
where
    P: NodeInclusionPolicy + ?Sized,
    S: GraphStore,
{
    let nodes = store.all_nodes(tx).await?;
    let scanned = nodes.len();
    let included: Vec<Node> = nodes.into_iter().filter(|n| policy.include(n)).collect();
    tracing::debug!(kind = "node", scanned, included = included.len(), ?policy, "policy scan");
    Ok(included)
}

/// All relationships in the store that `policy` includes, in store order.
pub async fn get_all_relationships<P, S>(
    policy: &P,
    store: &S,
    tx: &S::Tx,
) -> Result<Vec<Relationship>>
where
    P: RelationshipInclusionPolicy + ?Sized,
    S: GraphStore,
{
    let rels = store.all_relationships(tx).await?;
    let scanned = rels.len();
    let included: Vec<Relationship> = rels.into_iter().filter(|r| policy.include(r)).collect();
    tracing::debug!(kind = "relationship", scanned, included = included.len(), ?policy, "policy scan");
    Ok(included)
}
