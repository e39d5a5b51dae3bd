//! # Property Graph Model
//!
//! The element types handed out by a graph store. Policies and snapshots
//! consume these as-is; nothing in this crate mutates a live element except
//! the store itself.
//!
//! Design rule: pure data. No I/O, no state, no async.

pub mod node;
pub mod relationship;
pub mod value;
pub mod property_map;

pub use node::{Node, NodeId};
pub use relationship::{Relationship, RelId, Direction};
pub use value::Value;
pub use property_map::{PropertyMap, PropertyContainer};
