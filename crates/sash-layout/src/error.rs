//! Engine error taxonomy.

use std::fmt;

use crate::id::NodeId;
use crate::node::Position;

/// Caller-contract violations, raised synchronously at the point of use.
///
/// The engine never retries or rolls back a propagation already underway.
/// The shrink clamp in the resize path is a designed constraint adjustment,
/// not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A node config was used without a `position`.
    PositionRequired,
    /// Attaching a third child, or splitting a node that already has children.
    MaxChildrenExceeded { node_id: NodeId },
    /// The referenced id is absent from the tree.
    NodeNotFound { node_id: NodeId },
    /// The position cannot be used for the requested operation.
    InvalidPosition { position: Position },
    /// Negative extents where the contract forbids them.
    InvalidDimensions { width: f64, height: f64 },
    /// A caller-supplied id is already present in the tree.
    DuplicateId { node_id: NodeId },
    /// The root cannot be detached from its own tree.
    CannotDetachRoot { node_id: NodeId },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionRequired => {
                write!(f, "node config is missing a position")
            }
            Self::MaxChildrenExceeded { node_id } => {
                write!(f, "node {node_id} already has two children")
            }
            Self::NodeNotFound { node_id } => {
                write!(f, "node {node_id} does not exist in this tree")
            }
            Self::InvalidPosition { position } => {
                write!(f, "position {position} is not valid for this operation")
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "dimensions {width}x{height} must be non-negative")
            }
            Self::DuplicateId { node_id } => {
                write!(f, "node id {node_id} is already present in this tree")
            }
            Self::CannotDetachRoot { node_id } => {
                write!(f, "root node {node_id} cannot be detached")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
