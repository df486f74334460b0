//! fOS DOM - Document Object Model
//!
//! Arena-based DOM tree with document-level focus and selection state.
//!
//! Nodes are addressed by [`NodeId`], a 4-byte index into the arena. Tree
//! links (parent, children, siblings) are stored inline in each [`Node`] so
//! traversal never allocates.

mod node;
mod tree;
mod document;
mod selection;

pub use node::{Node, NodeData, ElementData, TextData, Attribute};
pub use tree::{DomTree, Children, Ancestors, Descendants};
pub use document::{Document, FocusChange};
pub use selection::{BoundaryPoint, Range, Selection, InputSelection, SelectionDirection};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this ID points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn to_option(self) -> Option<NodeId> {
        if self.is_valid() { Some(self) } else { None }
    }
}

/// DOM error
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Unknown node {0:?}")]
    UnknownNode(NodeId),

    #[error("Cannot insert {child:?} under {parent:?}: would create a cycle")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error("Node {0:?} cannot have children")]
    NotAContainer(NodeId),
}
