//! Immutable node snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::model::Node;
use super::{HasLabelsAndProperties, HasProperties, ImmutableProperties};

type Labels = SmallVec<[String; 2]>;

fn sorted_labels(labels: impl IntoIterator<Item = impl Into<String>>) -> Labels {
    let mut labels: Labels = labels.into_iter().map(Into::into).collect();
    labels.sort();
    labels.dedup();
    labels
}

/// A node's labels and text-valued properties, frozen.
///
/// Deserialized snapshots go through [`ImmutableNode::new`], so their labels
/// are sorted and de-duplicated like any other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawImmutableNode")]
pub struct ImmutableNode {
    labels: Labels,
    properties: ImmutableProperties,
}

impl ImmutableNode {
    /// Snapshot a live node, reading all of its properties.
    pub fn from_node(node: &Node) -> Self {
        Self {
            labels: sorted_labels(node.labels.iter().cloned()),
            properties: ImmutableProperties::from_container(node),
        }
    }

    /// Snapshot a live node's labels with `properties` in place of its own.
    pub fn from_node_with(node: &Node, properties: impl Into<ImmutableProperties>) -> Self {
        Self {
            labels: sorted_labels(node.labels.iter().cloned()),
            properties: properties.into(),
        }
    }

    pub fn new(
        labels: impl IntoIterator<Item = impl Into<String>>,
        properties: impl Into<ImmutableProperties>,
    ) -> Self {
        Self { labels: sorted_labels(labels), properties: properties.into() }
    }

    pub fn from_snapshot(other: &dyn HasLabelsAndProperties) -> Self {
        Self::new(other.labels().iter().cloned(), other.properties().clone())
    }

    /// Whether a live node currently has these labels and exactly these
    /// properties.
    pub fn matches_node(&self, node: &Node) -> bool {
        sorted_labels(node.labels.iter().cloned()) == self.labels
            && self.properties.matches(&node.properties)
    }
}

#[derive(Deserialize)]
struct RawImmutableNode {
    labels: Vec<String>,
    #[serde(default)]
    properties: ImmutableProperties,
}

impl From<RawImmutableNode> for ImmutableNode {
    fn from(raw: RawImmutableNode) -> Self {
        Self::new(raw.labels, raw.properties)
    }
}

impl HasProperties for ImmutableNode {
    fn properties(&self) -> &ImmutableProperties {
        &self.properties
    }
}

impl HasLabelsAndProperties for ImmutableNode {
    fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl From<&Node> for ImmutableNode {
    fn from(node: &Node) -> Self {
        Self::from_node(node)
    }
}

impl fmt::Display for ImmutableNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for label in &self.labels {
            write!(f, ":{label}")?;
        }
        if !self.properties.is_empty() {
            if !self.labels.is_empty() { write!(f, " ")?; }
            write!(f, "{}", self.properties)?;
        }
        write!(f, ")")
    }
}
