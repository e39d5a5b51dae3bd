//! # Graph Store Trait
//!
//! The seam between this toolkit and the graph engine that owns the
//! elements. Policies and snapshots only ever read through it; the write
//! operations exist so fixtures can build a graph.
//!
//! ## Implementations
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `MemoryStore` | `memory` | In-memory, for tests and embedding |

pub mod memory;

use async_trait::async_trait;
use crate::model::*;
use crate::tx::{Transaction, TxMode};
use crate::Result;

pub use memory::MemoryStore;

// ============================================================================
// GraphStore Trait
// ============================================================================

/// The collaborator contract.
///
/// Every read takes a transaction; elements returned are owned copies, so
/// nothing borrowed from the store outlives the call.
#[async_trait]
pub trait GraphStore: Send + Sync + 'static {
    /// The transaction type for this store.
    type Tx: Transaction;

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Shut down the store.
    async fn shutdown(&self) -> Result<()>;

    // ========================================================================
    // Transactions
    // ========================================================================

    /// Begin a new transaction.
    async fn begin_tx(&self, mode: TxMode) -> Result<Self::Tx>;

    /// Commit a transaction.
    async fn commit_tx(&self, tx: Self::Tx) -> Result<()>;

    /// Roll back a transaction.
    async fn rollback_tx(&self, tx: Self::Tx) -> Result<()>;

    // ========================================================================
    // Nodes
    // ========================================================================

    /// Create a node with the given labels and properties.
    async fn create_node(
        &self,
        tx: &mut Self::Tx,
        labels: &[&str],
        props: PropertyMap,
    ) -> Result<NodeId>;

    /// Get a node by ID. Returns None if not found.
    async fn get_node(&self, tx: &Self::Tx, id: NodeId) -> Result<Option<Node>>;

    /// Set a property on a node (upsert).
    async fn set_node_property(
        &self,
        tx: &mut Self::Tx,
        id: NodeId,
        key: &str,
        val: Value,
    ) -> Result<()>;

    // ========================================================================
    // Relationships
    // ========================================================================

    /// Create a relationship between two existing nodes.
    async fn create_relationship(
        &self,
        tx: &mut Self::Tx,
        src: NodeId,
        dst: NodeId,
        rel_type: &str,
        props: PropertyMap,
    ) -> Result<RelId>;

    /// Get a relationship by ID.
    async fn get_relationship(&self, tx: &Self::Tx, id: RelId) -> Result<Option<Relationship>>;

    /// Set a property on a relationship (upsert).
    async fn set_relationship_property(
        &self,
        tx: &mut Self::Tx,
        id: RelId,
        key: &str,
        val: Value,
    ) -> Result<()>;

    // ========================================================================
    // Scan
    // ========================================================================

    /// Return all nodes, in a stable order.
    async fn all_nodes(&self, tx: &Self::Tx) -> Result<Vec<Node>>;

    /// Return all relationships, in a stable order.
    async fn all_relationships(&self, tx: &Self::Tx) -> Result<Vec<Relationship>>;

    /// Total number of nodes.
    ///
    /// Default scans; stores with a counter should override.
    async fn node_count(&self, tx: &Self::Tx) -> Result<u64> {
        Ok(self.all_nodes(tx).await?.len() as u64)
    }

    /// Total number of relationships.
    async fn relationship_count(&self, tx: &Self::Tx) -> Result<u64> {
        Ok(self.all_relationships(tx).await?.len() as u64)
    }
}
