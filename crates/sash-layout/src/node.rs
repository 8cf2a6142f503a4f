//! Node records and construction parameters.

use std::collections::BTreeMap;
use std::fmt;

use sash_core::Rect;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::id::NodeId;

/// Placement of a node relative to its parent.
///
/// Exactly one node per tree is `Root`; every other node occupies one side
/// of its parent's split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Root,
    Top,
    Right,
    Bottom,
    Left,
}

impl Position {
    /// The partner side of a split pair.
    ///
    /// `Root` has no partner and is rejected.
    pub fn opposite(self) -> Result<Self, LayoutError> {
        match self {
            Self::Top => Ok(Self::Bottom),
            Self::Bottom => Ok(Self::Top),
            Self::Left => Ok(Self::Right),
            Self::Right => Ok(Self::Left),
            Self::Root => Err(LayoutError::InvalidPosition { position: self }),
        }
    }

    /// The split axis this side belongs to; `None` for `Root`.
    #[must_use]
    pub const fn axis(self) -> Option<SplitAxis> {
        match self {
            Self::Left | Self::Right => Some(SplitAxis::Horizontal),
            Self::Top | Self::Bottom => Some(SplitAxis::Vertical),
            Self::Root => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Root => "root",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

/// Orientation of a split.
///
/// `Horizontal` places children side by side (`left`/`right`); `Vertical`
/// stacks them (`top`/`bottom`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitAxis {
    Horizontal,
    Vertical,
}

/// How a split distributes a size delta across its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeStrategy {
    /// Distribute proportionally to each child's current share.
    #[default]
    Classic,
    /// Hold one child fixed and let the other absorb the whole delta; the
    /// fixed side is keyed by the resized node's own position.
    Natural,
}

/// Construction parameters for a node.
///
/// Deserializable with defaults so hosts can describe panes in data.
/// `position` is mandatory at the point of use; omitting it is a contract
/// violation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    pub position: Option<Position>,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub min_height: f64,
    pub resize_strategy: ResizeStrategy,
    pub id: Option<NodeId>,
    pub store: BTreeMap<String, String>,
}

impl NodeConfig {
    /// Config for a root node covering the given extent.
    #[must_use]
    pub fn root(width: f64, height: f64) -> Self {
        Self {
            position: Some(Position::Root),
            width,
            height,
            ..Self::default()
        }
    }
}

/// One element of the layout tree, stored in the tree's arena.
///
/// A node with no children is a leaf (a pane); a node with children is a
/// split. Geometry is absolute in the root's coordinate space and is only
/// written through the tree's propagating setters. The `store` bag is
/// opaque caller payload the engine never inspects.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) position: Position,
    pub(crate) frame: Rect,
    pub(crate) min_width: f64,
    pub(crate) min_height: f64,
    pub(crate) resize_strategy: ResizeStrategy,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) store: BTreeMap<String, String>,
}

impl Node {
    pub(crate) fn from_config(
        id: NodeId,
        position: Position,
        parent: Option<NodeId>,
        config: NodeConfig,
    ) -> Self {
        Self {
            id,
            position,
            frame: Rect::new(config.left, config.top, config.width, config.height),
            min_width: config.min_width,
            min_height: config.min_height,
            resize_strategy: config.resize_strategy,
            parent,
            children: Vec::new(),
            store: config.store,
        }
    }

    /// A fresh leaf produced by a split.
    pub(crate) fn split_child(
        id: NodeId,
        position: Position,
        frame: Rect,
        resize_strategy: ResizeStrategy,
        parent: NodeId,
    ) -> Self {
        Self {
            id,
            position,
            frame,
            min_width: 0.0,
            min_height: 0.0,
            resize_strategy,
            parent: Some(parent),
            children: Vec::new(),
            store: BTreeMap::new(),
        }
    }

    /// Node id. Immutable except through [`LayoutTree::swap_ids`].
    ///
    /// [`LayoutTree::swap_ids`]: crate::tree::LayoutTree::swap_ids
    #[must_use]
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Placement relative to the parent.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Absolute geometry.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Left edge in the root coordinate space.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.frame.left
    }

    /// Top edge in the root coordinate space.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.frame.top
    }

    /// Current width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.frame.width
    }

    /// Current height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.frame.height
    }

    /// Width floor below which this node refuses to shrink while a sibling
    /// still has slack.
    #[must_use]
    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    /// Set the width floor. Plain field write, no propagation.
    pub fn set_min_width(&mut self, min_width: f64) {
        self.min_width = min_width;
    }

    /// Height floor.
    #[must_use]
    pub fn min_height(&self) -> f64 {
        self.min_height
    }

    /// Set the height floor. Plain field write, no propagation.
    pub fn set_min_height(&mut self, min_height: f64) {
        self.min_height = min_height;
    }

    /// How this node distributes size deltas to its children.
    #[must_use]
    pub fn resize_strategy(&self) -> ResizeStrategy {
        self.resize_strategy
    }

    /// Change the distribution strategy for subsequent resizes.
    pub fn set_resize_strategy(&mut self, resize_strategy: ResizeStrategy) {
        self.resize_strategy = resize_strategy;
    }

    /// Non-owning back-reference to the parent; `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<&NodeId> {
        self.parent.as_ref()
    }

    /// Child ids in attach order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// A node with no children renders content.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A node with children divides its rectangle.
    #[must_use]
    pub fn is_split(&self) -> bool {
        !self.children.is_empty()
    }

    /// Opaque caller payload.
    #[must_use]
    pub fn store(&self) -> &BTreeMap<String, String> {
        &self.store
    }

    /// Mutable access to the caller payload.
    pub fn store_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.store
    }
}
