//! In-memory graph store.
//!
//! The reference implementation of `GraphStore`, used as the test database.
//! Maps are ordered by id so scans come back in creation order.
//!
//! ## Limitations
//!
//! - **No real transactions**: `commit_tx()` and `rollback_tx()` only end the
//!   transaction. Writes are applied immediately. Rollback does NOT undo them.
//! - **Read-only is enforced**: writes through a `TxMode::ReadOnly`
//!   transaction fail with `Error::TxError`.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use parking_lot::RwLock;
use async_trait::async_trait;

use crate::model::*;
use crate::tx::{Transaction, TxMode, TxId};
use crate::{Error, Result};
use super::GraphStore;

// ============================================================================
// MemoryStore
// ============================================================================

/// In-memory property graph store. Cheap to clone; clones share state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    nodes: RwLock<BTreeMap<NodeId, Node>>,
    relationships: RwLock<BTreeMap<RelId, Relationship>>,
    next_node_id: AtomicU64,
    next_rel_id: AtomicU64,
    next_tx_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// MemoryTx
// ============================================================================

/// In-memory transaction (a marker carrying the mode, no MVCC).
#[derive(Debug)]
pub struct MemoryTx {
    id: TxId,
    mode: TxMode,
}

impl MemoryTx {
    fn check_writable(&self) -> Result<()> {
        if self.mode.allows_writes() {
            Ok(())
        } else {
            Err(Error::TxError(format!("{} is read-only", self.id)))
        }
    }
}

impl Transaction for MemoryTx {
    fn mode(&self) -> TxMode { self.mode }
    fn id(&self) -> TxId { self.id }
}

// ============================================================================
// GraphStore impl
// ============================================================================

#[async_trait]
impl GraphStore for MemoryStore {
    type Tx = MemoryTx;

    async fn shutdown(&self) -> Result<()> { Ok(()) }

    async fn begin_tx(&self, mode: TxMode) -> Result<MemoryTx> {
        let id = TxId(self.inner.next_tx_id.fetch_add(1, Ordering::Relaxed) + 1);
        tracing::debug!(%id, ?mode, "begin transaction");
        Ok(MemoryTx { id, mode })
    }

    async fn commit_tx(&self, tx: MemoryTx) -> Result<()> {
        tracing::debug!(id = %tx.id, "commit transaction");
        Ok(())
    }

    /// Ends the transaction. Mutations applied during it are NOT reverted.
    async fn rollback_tx(&self, tx: MemoryTx) -> Result<()> {
        tracing::debug!(id = %tx.id, "rollback transaction");
        Ok(())
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    async fn create_node(
        &self,
        tx: &mut MemoryTx,
        labels: &[&str],
        props: PropertyMap,
    ) -> Result<NodeId> {
        tx.check_writable()?;
        let id = NodeId(self.inner.next_node_id.fetch_add(1, Ordering::Relaxed) + 1);
        let mut node = Node::new(id).with_labels(labels.iter().copied());
        node.properties = props;

        self.inner.nodes.write().insert(id, node);
        Ok(id)
    }

    async fn get_node(&self, _tx: &MemoryTx, id: NodeId) -> Result<Option<Node>> {
        Ok(self.inner.nodes.read().get(&id).cloned())
    }

    async fn set_node_property(
        &self,
        tx: &mut MemoryTx,
        id: NodeId,
        key: &str,
        val: Value,
    ) -> Result<()> {
        tx.check_writable()?;
        let mut nodes = self.inner.nodes.write();
        let node = nodes.get_mut(&id).ok_or_else(|| Error::NotFound(format!("Node {id}")))?;
        node.properties.insert(key.to_string(), val);
        Ok(())
    }

    // ========================================================================
    // Relationships
    // ========================================================================

    async fn create_relationship(
        &self,
        tx: &mut MemoryTx,
        src: NodeId,
        dst: NodeId,
        rel_type: &str,
        props: PropertyMap,
    ) -> Result<RelId> {
        tx.check_writable()?;
        if rel_type.is_empty() {
            return Err(Error::InvalidArgument("relationship type must not be empty".into()));
        }

        // Verify both nodes exist
        {
            let nodes = self.inner.nodes.read();
            if !nodes.contains_key(&src) {
                return Err(Error::NotFound(format!("Source node {src}")));
            }
            if !nodes.contains_key(&dst) {
                return Err(Error::NotFound(format!("Target node {dst}")));
            }
        }

        let id = RelId(self.inner.next_rel_id.fetch_add(1, Ordering::Relaxed) + 1);
        let mut rel = Relationship::new(id, src, dst, rel_type);
        rel.properties = props;

        self.inner.relationships.write().insert(id, rel);
        Ok(id)
    }

    async fn get_relationship(&self, _tx: &MemoryTx, id: RelId) -> Result<Option<Relationship>> {
        Ok(self.inner.relationships.read().get(&id).cloned())
    }

    async fn set_relationship_property(
        &self,
        tx: &mut MemoryTx,
        id: RelId,
        key: &str,
        val: Value,
    ) -> Result<()> {
        tx.check_writable()?;
        let mut rels = self.inner.relationships.write();
        let rel = rels.get_mut(&id)
            .ok_or_else(|| Error::NotFound(format!("Relationship {id}")))?;
        rel.properties.insert(key.to_string(), val);
        Ok(())
    }

    // ========================================================================
    // Scan
    // ========================================================================

    async fn all_nodes(&self, _tx: &MemoryTx) -> Result<Vec<Node>> {
        Ok(self.inner.nodes.read().values().cloned().collect())
    }

    async fn all_relationships(&self, _tx: &MemoryTx) -> Result<Vec<Relationship>> {
        Ok(self.inner.relationships.read().values().cloned().collect())
    }

    async fn node_count(&self, _tx: &MemoryTx) -> Result<u64> {
        Ok(self.inner.nodes.read().len() as u64)
    }

    async fn relationship_count(&self, _tx: &MemoryTx) -> Result<u64> {
        Ok(self.inner.relationships.read().len() as u64)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get_node() {
        let db = MemoryStore::new();
        let mut tx = db.begin_tx(TxMode::ReadWrite).await.unwrap();

        let mut props = PropertyMap::new();
        props.insert("name".into(), Value::from("Michal"));

        let id = db.create_node(&mut tx, &["Employee"], props).await.unwrap();
        let node = db.get_node(&tx, id).await.unwrap().unwrap();

        assert_eq!(node.labels, vec!["Employee"]);
        assert_eq!(node.get("name"), Some(&Value::from("Michal")));
    }

    #[tokio::test]
    async fn test_create_relationship() {
        let db = MemoryStore::new();
        let mut tx = db.begin_tx(TxMode::ReadWrite).await.unwrap();

        let a = db.create_node(&mut tx, &["Employee"], PropertyMap::new()).await.unwrap();
        let b = db.create_node(&mut tx, &["Company"], PropertyMap::new()).await.unwrap();

        let rel_id = db.create_relationship(&mut tx, a, b, "WORKS_FOR", PropertyMap::new()).await.unwrap();
        let rel = db.get_relationship(&tx, rel_id).await.unwrap().unwrap();

        assert_eq!(rel.src, a);
        assert_eq!(rel.dst, b);
        assert_eq!(rel.rel_type, "WORKS_FOR");
    }

    #[tokio::test]
    async fn test_relationship_requires_existing_nodes() {
        let db = MemoryStore::new();
        let mut tx = db.begin_tx(TxMode::ReadWrite).await.unwrap();
        let a = db.create_node(&mut tx, &[], PropertyMap::new()).await.unwrap();

        let result = db.create_relationship(&mut tx, a, NodeId(99), "KNOWS", PropertyMap::new()).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_empty_relationship_type_rejected() {
        let db = MemoryStore::new();
        let mut tx = db.begin_tx(TxMode::ReadWrite).await.unwrap();
        let a = db.create_node(&mut tx, &[], PropertyMap::new()).await.unwrap();

        let result = db.create_relationship(&mut tx, a, a, "", PropertyMap::new()).await;
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_read_only_tx_rejects_writes() {
        let db = MemoryStore::new();
        let mut tx = db.begin_tx(TxMode::ReadOnly).await.unwrap();

        let result = db.create_node(&mut tx, &["Person"], PropertyMap::new()).await;
        assert!(matches!(result, Err(Error::TxError(_))));
    }

    #[tokio::test]
    async fn test_all_nodes_in_creation_order() {
        let db = MemoryStore::new();
        let mut tx = db.begin_tx(TxMode::ReadWrite).await.unwrap();

        let a = db.create_node(&mut tx, &["Person"], PropertyMap::new()).await.unwrap();
        let b = db.create_node(&mut tx, &["Company"], PropertyMap::new()).await.unwrap();
        let c = db.create_node(&mut tx, &["Person"], PropertyMap::new()).await.unwrap();

        let ids: Vec<NodeId> = db.all_nodes(&tx).await.unwrap().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![a, b, c]);
        assert_eq!(db.node_count(&tx).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_relationship_properties() {
        let db = MemoryStore::new();
        let mut tx = db.begin_tx(TxMode::ReadWrite).await.unwrap();

        let a = db.create_node(&mut tx, &["Person"], PropertyMap::new()).await.unwrap();
        let b = db.create_node(&mut tx, &["Person"], PropertyMap::new()).await.unwrap();
        let rel_id = db.create_relationship(
            &mut tx, a, b, "KNOWS", PropertyMap::new(),
        ).await.unwrap();

        db.set_relationship_property(&mut tx, rel_id, "since", Value::from(2025i64)).await.unwrap();
        let rel = db.get_relationship(&tx, rel_id).await.unwrap().unwrap();
        assert_eq!(rel.properties.get("since"), Some(&Value::from(2025i64)));
        assert_eq!(db.relationship_count(&tx).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_set_property_on_missing_node() {
        let db = MemoryStore::new();
        let mut tx = db.begin_tx(TxMode::ReadWrite).await.unwrap();

        let result = db.set_node_property(&mut tx, NodeId(7), "name", Value::from("x")).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_rollback_ends_tx_without_undoing_writes() {
        let db = MemoryStore::new();
        let mut tx = db.begin_tx(TxMode::ReadWrite).await.unwrap();
        db.create_node(&mut tx, &["Place"], PropertyMap::new()).await.unwrap();
        db.rollback_tx(tx).await.unwrap();

        let tx = db.begin_tx(TxMode::ReadOnly).await.unwrap();
        assert_eq!(db.node_count(&tx).await.unwrap(), 1);
        db.commit_tx(tx).await.unwrap();
        db.shutdown().await.unwrap();
    }
}
