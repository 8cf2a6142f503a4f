#![forbid(unsafe_code)]

//! Binary split-tree layout engine.
//!
//! A host application carves a rectangular canvas into recursively
//! resizable panes. The tree keeps every pane's absolute geometry
//! consistent as panes are split, resized, or removed: size writes cascade
//! parent to children under a classic (proportional) or natural
//! (one-side-fixed) strategy with shrink-safety against descendant
//! minimums, while position writes translate whole subtrees. The
//! [`zone`] module classifies pointer positions over a pane into drop
//! intents for a drag/drop layer.
//!
//! ```
//! use sash_layout::{LayoutTree, NodeConfig, Position, DEFAULT_SPLIT_PERCENT};
//!
//! let mut tree = LayoutTree::new(NodeConfig::root(800.0, 600.0))?;
//! let root = tree.root_id().clone();
//! let (left, right) = tree.split(&root, Position::Right, DEFAULT_SPLIT_PERCENT)?;
//! tree.set_width(&root, 1000.0)?;
//! assert_eq!(tree.node(&left).unwrap().width(), 500.0);
//! assert_eq!(tree.node(&right).unwrap().width(), 500.0);
//! # Ok::<(), sash_layout::LayoutError>(())
//! ```

pub mod error;
pub mod id;
pub mod node;
pub mod tree;
pub mod zone;

pub use error::LayoutError;
pub use id::NodeId;
pub use node::{Node, NodeConfig, Position, ResizeStrategy, SplitAxis};
pub use sash_core::{Point, Rect};
pub use tree::{DEFAULT_SPLIT_PERCENT, LayoutTree};
pub use zone::{CENTER_FRACTION, Zone, center_box, classify};
