//! # neo4j-policy: Inclusion Policies and Snapshots for Property Graphs
//!
//! A small toolkit that sits on top of a graph store:
//!
//! 1. **Policies**: stateless predicates deciding which nodes, relationships
//!    and properties take part in an operation
//! 2. **Snapshots**: immutable, structurally comparable copies of an
//!    element's type/labels and properties, usable after the transaction ends
//! 3. **Iterables**: `count`, `contains`, `to_list`, `random`, `get_single`
//!
//! The store is a collaborator behind the [`GraphStore`] trait; an in-memory
//! implementation ships for tests and embedding.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use neo4j_policy::{Graph, IncludeAllNodes, IncludeRelationships, HasTypeAndProperties};
//!
//! # async fn example() -> neo4j_policy::Result<()> {
//! let graph = Graph::open_memory().await?;
//!
//! let nodes = graph.included_nodes(IncludeAllNodes::instance()).await?;
//! println!("{} nodes", nodes.len());
//!
//! let works_for = IncludeRelationships::new(["WORKS_FOR"])?;
//! for snapshot in graph.relationship_snapshots(&works_for).await? {
//!     println!("{} {:?}", snapshot, snapshot.rel_type());
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod storage;
pub mod tx;
pub mod policy;
pub mod dto;
pub mod iterables;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Node, Relationship, Value, PropertyMap, PropertyContainer,
    NodeId, RelId, Direction,
};

// ============================================================================
// Re-exports: Storage & Transactions
// ============================================================================

pub use storage::{GraphStore, MemoryStore};
pub use tx::{Transaction, TxMode, TxId};

// ============================================================================
// Re-exports: Policies
// ============================================================================

pub use policy::{
    NodeInclusionPolicy, RelationshipInclusionPolicy, PropertyInclusionPolicy,
    IncludeAllNodes, IncludeNoNodes, IncludeAllRelationships, IncludeNoRelationships,
    IncludeAllProperties, IncludeNoProperties,
    IncludeNodesWithLabels, IncludeRelationships, IncludePropertyKeys,
    CompositeNodeInclusionPolicy, CompositeRelationshipInclusionPolicy,
    InclusionPolicies, PolicyConfig,
    get_all_nodes, get_all_relationships,
};

// ============================================================================
// Re-exports: Snapshots
// ============================================================================

pub use dto::{
    ImmutableProperties, ImmutableRelationship, ImmutableNode,
    HasProperties, HasTypeAndProperties, HasLabelsAndProperties,
};

// ============================================================================
// Top-level Graph handle
// ============================================================================

/// Entry point wrapping a store. Each `included_*` / `*_snapshots` call runs
/// in its own read-only transaction.
pub struct Graph<S: GraphStore> {
    store: S,
}

impl<S: GraphStore> Graph<S> {
    /// Create a Graph with the given store.
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Begin an explicit transaction.
    pub async fn begin(&self, mode: TxMode) -> Result<ExplicitTx<'_, S>> {
        let tx = self.store.begin_tx(mode).await?;
        Ok(ExplicitTx { graph: self, tx })
    }

    /// All live nodes the policy includes.
    pub async fn included_nodes<P>(&self, policy: &P) -> Result<Vec<Node>>
    where
        P: NodeInclusionPolicy + ?Sized,
    {
        let tx = self.store.begin_tx(TxMode::ReadOnly).await?;
        let nodes = get_all_nodes(policy, &self.store, &tx).await?;
        self.store.commit_tx(tx).await?;
        Ok(nodes)
    }

    /// All live relationships the policy includes.
    pub async fn included_relationships<P>(&self, policy: &P) -> Result<Vec<Relationship>>
    where
        P: RelationshipInclusionPolicy + ?Sized,
    {
        let tx = self.store.begin_tx(TxMode::ReadOnly).await?;
        let rels = get_all_relationships(policy, &self.store, &tx).await?;
        self.store.commit_tx(tx).await?;
        Ok(rels)
    }

    /// Snapshots of every included node, taken inside one transaction.
    pub async fn node_snapshots<P>(&self, policy: &P) -> Result<Vec<ImmutableNode>>
    where
        P: NodeInclusionPolicy + ?Sized,
    {
        let nodes = self.included_nodes(policy).await?;
        Ok(nodes.iter().map(ImmutableNode::from_node).collect())
    }

    /// Snapshots of every included relationship, taken inside one transaction.
    pub async fn relationship_snapshots<P>(&self, policy: &P) -> Result<Vec<ImmutableRelationship>>
    where
        P: RelationshipInclusionPolicy + ?Sized,
    {
        let rels = self.included_relationships(policy).await?;
        Ok(rels.iter().map(ImmutableRelationship::from_relationship).collect())
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// In-memory graph for testing and embedding.
impl Graph<MemoryStore> {
    pub async fn open_memory() -> Result<Self> {
        Ok(Self::with_store(MemoryStore::new()))
    }
}

/// Explicit transaction handle.
pub struct ExplicitTx<'g, S: GraphStore> {
    graph: &'g Graph<S>,
    tx: S::Tx,
}

impl<'g, S: GraphStore> ExplicitTx<'g, S> {
    /// The store-level transaction, for calling [`GraphStore`] methods.
    pub fn tx(&self) -> &S::Tx {
        &self.tx
    }

    pub fn tx_mut(&mut self) -> &mut S::Tx {
        &mut self.tx
    }

    pub fn store(&self) -> &'g S {
        &self.graph.store
    }

    pub async fn commit(self) -> Result<()> {
        self.graph.store.commit_tx(self.tx).await
    }

    pub async fn rollback(self) -> Result<()> {
        self.graph.store.rollback_tx(self.tx).await
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Illegal state: {0}")]
    IllegalState(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Transaction error: {0}")]
    TxError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
