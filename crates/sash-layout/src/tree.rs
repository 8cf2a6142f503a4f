//! The layout tree arena: structure operations, geometry propagation,
//! minimum-size solving, and search/traversal.

use std::collections::BTreeMap;

use sash_core::Rect;

use crate::error::LayoutError;
use crate::id::NodeId;
use crate::node::{Node, NodeConfig, Position, ResizeStrategy, SplitAxis};

/// Default split fraction assigned to the first (left/top) child.
pub const DEFAULT_SPLIT_PERCENT: f64 = 0.5;

/// A tree of panes sharing one absolute coordinate space.
///
/// Nodes live in an id-keyed arena. Parent links are plain ids and never
/// drive propagation, which always flows parent to children. Every mutation
/// completes its full cascade before returning; there are no suspension
/// points and no partial rollback.
#[derive(Debug, Clone)]
pub struct LayoutTree {
    nodes: BTreeMap<NodeId, Node>,
    root: NodeId,
}

impl LayoutTree {
    /// Build a tree from a root config.
    ///
    /// The config must carry `Position::Root` and non-negative extents.
    pub fn new(mut config: NodeConfig) -> Result<Self, LayoutError> {
        let position = config.position.ok_or(LayoutError::PositionRequired)?;
        if position != Position::Root {
            return Err(LayoutError::InvalidPosition { position });
        }
        validate_extent(config.width, config.height)?;
        let id = config.id.take().unwrap_or_else(NodeId::generate);
        let node = Node::from_config(id.clone(), position, None, config);
        let mut nodes = BTreeMap::new();
        let _ = nodes.insert(id.clone(), node);
        Ok(Self { nodes, root: id })
    }

    /// Id of the root node.
    #[must_use]
    pub fn root_id(&self) -> &NodeId {
        &self.root
    }

    /// The root node.
    ///
    /// # Panics
    ///
    /// Never in practice; the root record exists for the tree's lifetime.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.nodes[&self.root]
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Mutable node access for payload and constraint updates.
    ///
    /// Geometry and structure are only written through the tree's own
    /// operations.
    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// All nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    // ── structure ────────────────────────────────────────────────────────

    /// Convert a leaf into a split with two freshly created children.
    ///
    /// `position` selects the axis: `left`/`right` place the children side
    /// by side, `top`/`bottom` stack them. The left/top child receives
    /// `extent * percent`, the other child the remainder; both inherit the
    /// parent's cross-axis geometry and resize strategy. Returns the
    /// (left-or-top, right-or-bottom) child ids.
    pub fn split(
        &mut self,
        id: &NodeId,
        position: Position,
        percent: f64,
    ) -> Result<(NodeId, NodeId), LayoutError> {
        let axis = position
            .axis()
            .ok_or(LayoutError::InvalidPosition { position })?;
        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| LayoutError::NodeNotFound {
                node_id: id.clone(),
            })?;
        if !node.children.is_empty() {
            return Err(LayoutError::MaxChildrenExceeded {
                node_id: id.clone(),
            });
        }
        if !(0.0..=1.0).contains(&percent) {
            // Report the child extent the percent would drive negative.
            let spill = if percent < 0.0 { percent } else { 1.0 - percent };
            return Err(LayoutError::InvalidDimensions {
                width: node.frame.width * spill,
                height: node.frame.height * spill,
            });
        }
        let frame = node.frame;
        let strategy = node.resize_strategy;

        let (first_frame, second_frame, first_position, second_position) = match axis {
            SplitAxis::Horizontal => {
                let first_width = frame.width * percent;
                (
                    Rect::new(frame.left, frame.top, first_width, frame.height),
                    Rect::new(
                        frame.left + first_width,
                        frame.top,
                        frame.width - first_width,
                        frame.height,
                    ),
                    Position::Left,
                    Position::Right,
                )
            }
            SplitAxis::Vertical => {
                let first_height = frame.height * percent;
                (
                    Rect::new(frame.left, frame.top, frame.width, first_height),
                    Rect::new(
                        frame.left,
                        frame.top + first_height,
                        frame.width,
                        frame.height - first_height,
                    ),
                    Position::Top,
                    Position::Bottom,
                )
            }
        };

        let first_id = self.allocate_id();
        let first = Node::split_child(
            first_id.clone(),
            first_position,
            first_frame,
            strategy,
            id.clone(),
        );
        let _ = self.nodes.insert(first_id.clone(), first);

        let second_id = self.allocate_id();
        let second = Node::split_child(
            second_id.clone(),
            second_position,
            second_frame,
            strategy,
            id.clone(),
        );
        let _ = self.nodes.insert(second_id.clone(), second);

        if let Some(parent) = self.nodes.get_mut(id) {
            parent.children.push(first_id.clone());
            parent.children.push(second_id.clone());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(parent = %id, axis = ?axis, percent, "split leaf");

        Ok((first_id, second_id))
    }

    /// Attach a caller-built child without computing its geometry.
    ///
    /// The child config must name a side position; when a sibling already
    /// exists the new position must be its opposite. The caller is
    /// responsible for supplying a frame consistent with the parent.
    pub fn add_child(
        &mut self,
        parent_id: &NodeId,
        mut config: NodeConfig,
    ) -> Result<NodeId, LayoutError> {
        let position = config.position.ok_or(LayoutError::PositionRequired)?;
        if position.axis().is_none() {
            return Err(LayoutError::InvalidPosition { position });
        }
        validate_extent(config.width, config.height)?;
        let parent = self
            .nodes
            .get(parent_id)
            .ok_or_else(|| LayoutError::NodeNotFound {
                node_id: parent_id.clone(),
            })?;
        if parent.children.len() >= 2 {
            return Err(LayoutError::MaxChildrenExceeded {
                node_id: parent_id.clone(),
            });
        }
        if let Some(sibling_id) = parent.children.first()
            && let Some(sibling) = self.nodes.get(sibling_id)
            && sibling.position.opposite()? != position
        {
            return Err(LayoutError::InvalidPosition { position });
        }

        let id = match config.id.take() {
            Some(id) => {
                if self.nodes.contains_key(&id) {
                    return Err(LayoutError::DuplicateId { node_id: id });
                }
                id
            }
            None => self.allocate_id(),
        };
        let node = Node::from_config(id.clone(), position, Some(parent_id.clone()), config);
        let _ = self.nodes.insert(id.clone(), node);
        if let Some(parent) = self.nodes.get_mut(parent_id) {
            parent.children.push(id.clone());
        }
        Ok(id)
    }

    /// Remove a subtree from the tree.
    ///
    /// The parent keeps its remaining child and is not collapsed; a
    /// single-child split is a tolerated state that callers needing a
    /// strict binary tree must resolve themselves.
    pub fn detach(&mut self, id: &NodeId) -> Result<(), LayoutError> {
        if !self.nodes.contains_key(id) {
            return Err(LayoutError::NodeNotFound {
                node_id: id.clone(),
            });
        }
        if *id == self.root {
            return Err(LayoutError::CannotDetachRoot {
                node_id: id.clone(),
            });
        }
        let parent_id = self.nodes.get(id).and_then(|node| node.parent.clone());
        let removed = self.subtree_ids(id)?;
        for node_id in &removed {
            let _ = self.nodes.remove(node_id);
        }
        if let Some(parent_id) = parent_id
            && let Some(parent) = self.nodes.get_mut(&parent_id)
        {
            parent.children.retain(|child| child != id);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(node = %id, removed = removed.len(), "detached subtree");

        Ok(())
    }

    /// Exchange the id labels of two nodes in place.
    ///
    /// Geometry, position, and payload stay with their tree locations; only
    /// the identities trade owners, including every parent/child reference
    /// and the root label.
    pub fn swap_ids(&mut self, first: &NodeId, second: &NodeId) -> Result<(), LayoutError> {
        if !self.nodes.contains_key(first) {
            return Err(LayoutError::NodeNotFound {
                node_id: first.clone(),
            });
        }
        if !self.nodes.contains_key(second) {
            return Err(LayoutError::NodeNotFound {
                node_id: second.clone(),
            });
        }
        if first == second {
            return Ok(());
        }

        let relabel = |id: &NodeId| -> NodeId {
            if id == first {
                second.clone()
            } else if id == second {
                first.clone()
            } else {
                id.clone()
            }
        };
        for node in self.nodes.values_mut() {
            if let Some(parent) = node.parent.take() {
                node.parent = Some(relabel(&parent));
            }
            for child in &mut node.children {
                *child = relabel(child);
            }
        }
        self.root = relabel(&self.root);
        if let (Some(mut a), Some(mut b)) = (self.nodes.remove(first), self.nodes.remove(second)) {
            a.id = second.clone();
            b.id = first.clone();
            let _ = self.nodes.insert(second.clone(), a);
            let _ = self.nodes.insert(first.clone(), b);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(first = %first, second = %second, "swapped node ids");

        Ok(())
    }

    // ── geometry propagation ─────────────────────────────────────────────

    /// Set a node's width and cascade the change through its descendants.
    pub fn set_width(&mut self, id: &NodeId, width: f64) -> Result<(), LayoutError> {
        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| LayoutError::NodeNotFound {
                node_id: id.clone(),
            })?;
        if width < 0.0 {
            return Err(LayoutError::InvalidDimensions {
                width,
                height: node.frame.height,
            });
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(node = %id, width, "set width");
        self.propagate_width(id, width);
        Ok(())
    }

    /// Set a node's height and cascade the change through its descendants.
    pub fn set_height(&mut self, id: &NodeId, height: f64) -> Result<(), LayoutError> {
        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| LayoutError::NodeNotFound {
                node_id: id.clone(),
            })?;
        if height < 0.0 {
            return Err(LayoutError::InvalidDimensions {
                width: node.frame.width,
                height,
            });
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(node = %id, height, "set height");
        self.propagate_height(id, height);
        Ok(())
    }

    /// Move a node's left edge, translating the whole subtree.
    pub fn set_left(&mut self, id: &NodeId, left: f64) -> Result<(), LayoutError> {
        if !self.nodes.contains_key(id) {
            return Err(LayoutError::NodeNotFound {
                node_id: id.clone(),
            });
        }
        self.propagate_left(id, left);
        Ok(())
    }

    /// Move a node's top edge, translating the whole subtree.
    pub fn set_top(&mut self, id: &NodeId, top: f64) -> Result<(), LayoutError> {
        if !self.nodes.contains_key(id) {
            return Err(LayoutError::NodeNotFound {
                node_id: id.clone(),
            });
        }
        self.propagate_top(id, top);
        Ok(())
    }

    /// The cascade writes the new value before recursing so nested reads
    /// observe the updated parent. Internal writes are unvalidated: when the
    /// parent is below its subtree minimum, a clamped sibling can lawfully
    /// push the other child negative (the violation is inherited upward).
    fn propagate_width(&mut self, id: &NodeId, width: f64) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        let dist = width - node.frame.width;
        node.frame.width = width;
        let strategy = node.resize_strategy;
        let position = node.position;
        let parent_left = node.frame.left;

        match self.split_axis(id) {
            None => {}
            Some(SplitAxis::Vertical) => {
                // Cross axis: the width passes through unchanged.
                for child_id in self.children_of(id) {
                    self.propagate_width(&child_id, width);
                }
            }
            Some(SplitAxis::Horizontal) => {
                let Some((left_id, right_id)) =
                    self.side_pair(id, Position::Left, Position::Right)
                else {
                    // Post-detach single-child split: the lone child absorbs
                    // the whole delta.
                    if let Some(child_id) = self.children_of(id).first().cloned() {
                        let child_width =
                            self.nodes.get(&child_id).map_or(0.0, |node| node.frame.width);
                        self.propagate_width(&child_id, child_width + dist);
                    }
                    return;
                };
                let left_width = self
                    .nodes
                    .get(&left_id)
                    .map_or(0.0, |node| node.frame.width);
                let right_width = self
                    .nodes
                    .get(&right_id)
                    .map_or(0.0, |node| node.frame.width);

                let mut new_left = match strategy {
                    ResizeStrategy::Classic => {
                        let total = left_width + right_width;
                        if total > 0.0 {
                            left_width + dist * (left_width / total)
                        } else {
                            left_width + dist * 0.5
                        }
                    }
                    ResizeStrategy::Natural => {
                        if position == Position::Right {
                            // This node hugs the right edge: its right child
                            // stays fixed and the left child absorbs.
                            left_width + dist
                        } else {
                            left_width
                        }
                    }
                };

                if dist < 0.0 {
                    let left_min = self
                        .nodes
                        .get(&left_id)
                        .map_or(0.0, |node| self.min_width_of(node));
                    let right_min = self
                        .nodes
                        .get(&right_id)
                        .map_or(0.0, |node| self.min_width_of(node));
                    if new_left < left_min {
                        // Constrained child keeps its width; the sibling
                        // takes the whole shrink. One-sided: when both
                        // children would violate, this branch wins.
                        new_left = left_width;
                    } else if width - new_left < right_min {
                        new_left = width - right_width;
                    }
                }

                self.propagate_width(&left_id, new_left);
                self.propagate_width(&right_id, width - new_left);
                self.propagate_left(&right_id, parent_left + new_left);
            }
        }
    }

    fn propagate_height(&mut self, id: &NodeId, height: f64) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        let dist = height - node.frame.height;
        node.frame.height = height;
        let strategy = node.resize_strategy;
        let position = node.position;
        let parent_top = node.frame.top;

        match self.split_axis(id) {
            None => {}
            Some(SplitAxis::Horizontal) => {
                // Cross axis: the height passes through unchanged.
                for child_id in self.children_of(id) {
                    self.propagate_height(&child_id, height);
                }
            }
            Some(SplitAxis::Vertical) => {
                let Some((top_id, bottom_id)) = self.side_pair(id, Position::Top, Position::Bottom)
                else {
                    if let Some(child_id) = self.children_of(id).first().cloned() {
                        let child_height = self
                            .nodes
                            .get(&child_id)
                            .map_or(0.0, |node| node.frame.height);
                        self.propagate_height(&child_id, child_height + dist);
                    }
                    return;
                };
                let top_height = self
                    .nodes
                    .get(&top_id)
                    .map_or(0.0, |node| node.frame.height);
                let bottom_height = self
                    .nodes
                    .get(&bottom_id)
                    .map_or(0.0, |node| node.frame.height);

                let mut new_top = match strategy {
                    ResizeStrategy::Classic => {
                        let total = top_height + bottom_height;
                        if total > 0.0 {
                            top_height + dist * (top_height / total)
                        } else {
                            top_height + dist * 0.5
                        }
                    }
                    ResizeStrategy::Natural => {
                        if position == Position::Bottom {
                            top_height + dist
                        } else {
                            top_height
                        }
                    }
                };

                if dist < 0.0 {
                    let top_min = self
                        .nodes
                        .get(&top_id)
                        .map_or(0.0, |node| self.min_height_of(node));
                    let bottom_min = self
                        .nodes
                        .get(&bottom_id)
                        .map_or(0.0, |node| self.min_height_of(node));
                    if new_top < top_min {
                        new_top = top_height;
                    } else if height - new_top < bottom_min {
                        new_top = height - bottom_height;
                    }
                }

                self.propagate_height(&top_id, new_top);
                self.propagate_height(&bottom_id, height - new_top);
                self.propagate_top(&bottom_id, parent_top + new_top);
            }
        }
    }

    /// Position writes never redistribute; they translate the subtree.
    fn propagate_left(&mut self, id: &NodeId, left: f64) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        let dist = left - node.frame.left;
        node.frame.left = left;
        if dist == 0.0 {
            return;
        }
        for child_id in self.children_of(id) {
            let child_left = self.nodes.get(&child_id).map_or(0.0, |node| node.frame.left);
            self.propagate_left(&child_id, child_left + dist);
        }
    }

    fn propagate_top(&mut self, id: &NodeId, top: f64) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        let dist = top - node.frame.top;
        node.frame.top = top;
        if dist == 0.0 {
            return;
        }
        for child_id in self.children_of(id) {
            let child_top = self.nodes.get(&child_id).map_or(0.0, |node| node.frame.top);
            self.propagate_top(&child_id, child_top + dist);
        }
    }

    // ── minimum-size solver ──────────────────────────────────────────────

    /// Smallest width the subtree can compress to without violating a
    /// descendant floor. Never below the node's own floor.
    pub fn subtree_min_width(&self, id: &NodeId) -> Result<f64, LayoutError> {
        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| LayoutError::NodeNotFound {
                node_id: id.clone(),
            })?;
        Ok(self.min_width_of(node))
    }

    /// Smallest height the subtree can compress to without violating a
    /// descendant floor.
    pub fn subtree_min_height(&self, id: &NodeId) -> Result<f64, LayoutError> {
        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| LayoutError::NodeNotFound {
                node_id: id.clone(),
            })?;
        Ok(self.min_height_of(node))
    }

    fn min_width_of(&self, node: &Node) -> f64 {
        if node.children.is_empty() {
            return node.min_width;
        }
        let children = node
            .children
            .iter()
            .filter_map(|child_id| self.nodes.get(child_id));
        match self.split_axis(&node.id) {
            // Widths add along a side-by-side split.
            Some(SplitAxis::Horizontal) => {
                let sum: f64 = children.map(|child| self.min_width_of(child)).sum();
                node.min_width.max(sum)
            }
            // Widths are shared across a stacked split.
            _ => {
                let widest = children
                    .map(|child| self.min_width_of(child))
                    .fold(0.0, f64::max);
                node.min_width.max(widest)
            }
        }
    }

    fn min_height_of(&self, node: &Node) -> f64 {
        if node.children.is_empty() {
            return node.min_height;
        }
        let children = node
            .children
            .iter()
            .filter_map(|child_id| self.nodes.get(child_id));
        match self.split_axis(&node.id) {
            // Heights add along a stacked split.
            Some(SplitAxis::Vertical) => {
                let sum: f64 = children.map(|child| self.min_height_of(child)).sum();
                node.min_height.max(sum)
            }
            _ => {
                let tallest = children
                    .map(|child| self.min_height_of(child))
                    .fold(0.0, f64::max);
                node.min_height.max(tallest)
            }
        }
    }

    // ── search & traversal ───────────────────────────────────────────────

    /// Split axis of a node's children, if any.
    #[must_use]
    pub fn split_axis(&self, id: &NodeId) -> Option<SplitAxis> {
        let node = self.nodes.get(id)?;
        let child_id = node.children.first()?;
        self.nodes.get(child_id)?.position.axis()
    }

    /// Whether the node divides its rectangle side by side.
    #[must_use]
    pub fn is_left_right_split(&self, id: &NodeId) -> bool {
        matches!(self.split_axis(id), Some(SplitAxis::Horizontal))
    }

    /// Whether the node stacks its children.
    #[must_use]
    pub fn is_top_bottom_split(&self, id: &NodeId) -> bool {
        matches!(self.split_axis(id), Some(SplitAxis::Vertical))
    }

    fn child_at(&self, id: &NodeId, position: Position) -> Option<&Node> {
        let node = self.nodes.get(id)?;
        node.children
            .iter()
            .filter_map(|child_id| self.nodes.get(child_id))
            .find(|child| child.position == position)
    }

    /// Child occupying the left slot, if present.
    #[must_use]
    pub fn left_child(&self, id: &NodeId) -> Option<&Node> {
        self.child_at(id, Position::Left)
    }

    /// Child occupying the right slot, if present.
    #[must_use]
    pub fn right_child(&self, id: &NodeId) -> Option<&Node> {
        self.child_at(id, Position::Right)
    }

    /// Child occupying the top slot, if present.
    #[must_use]
    pub fn top_child(&self, id: &NodeId) -> Option<&Node> {
        self.child_at(id, Position::Top)
    }

    /// Child occupying the bottom slot, if present.
    #[must_use]
    pub fn bottom_child(&self, id: &NodeId) -> Option<&Node> {
        self.child_at(id, Position::Bottom)
    }

    /// Children in fixed `[top, right, bottom, left]` order, `None` for
    /// absent slots.
    #[must_use]
    pub fn children_by_side(&self, id: &NodeId) -> [Option<&Node>; 4] {
        [
            self.top_child(id),
            self.right_child(id),
            self.bottom_child(id),
            self.left_child(id),
        ]
    }

    /// Parent of the node with the given id.
    #[must_use]
    pub fn parent_of(&self, id: &NodeId) -> Option<&Node> {
        let parent_id = self.nodes.get(id)?.parent.as_ref()?;
        self.nodes.get(parent_id)
    }

    /// The other child of the node's parent.
    #[must_use]
    pub fn sibling_of(&self, id: &NodeId) -> Option<&Node> {
        let parent = self.parent_of(id)?;
        parent
            .children
            .iter()
            .find(|child| *child != id)
            .and_then(|child_id| self.nodes.get(child_id))
    }

    /// Every id in the subtree, depth-first, parent before children.
    pub fn subtree_ids(&self, from: &NodeId) -> Result<Vec<NodeId>, LayoutError> {
        if !self.nodes.contains_key(from) {
            return Err(LayoutError::NodeNotFound {
                node_id: from.clone(),
            });
        }
        let mut ids = Vec::new();
        self.collect_preorder(from, &mut ids);
        Ok(ids)
    }

    /// Every childless node in the subtree; a leaf yields itself.
    pub fn leaf_ids(&self, from: &NodeId) -> Result<Vec<NodeId>, LayoutError> {
        Ok(self
            .subtree_ids(from)?
            .into_iter()
            .filter(|id| self.nodes.get(id).is_some_and(Node::is_leaf))
            .collect())
    }

    /// Depth-first post-order visit of the subtree: descendants before the
    /// node itself.
    ///
    /// The schedule is a snapshot of each node's children taken as the node
    /// is entered; structural mutation while a walk is in progress is
    /// unspecified and should be avoided.
    pub fn walk<F>(&self, from: &NodeId, mut visit: F) -> Result<(), LayoutError>
    where
        F: FnMut(&Node),
    {
        for id in self.postorder_ids(from)? {
            if let Some(node) = self.nodes.get(&id) {
                visit(node);
            }
        }
        Ok(())
    }

    /// Post-order walk with mutable access for payload and constraint
    /// edits. Nodes removed mid-walk are skipped.
    pub fn walk_mut<F>(&mut self, from: &NodeId, mut visit: F) -> Result<(), LayoutError>
    where
        F: FnMut(&mut Node),
    {
        for id in self.postorder_ids(from)? {
            if let Some(node) = self.nodes.get_mut(&id) {
                visit(node);
            }
        }
        Ok(())
    }

    fn postorder_ids(&self, from: &NodeId) -> Result<Vec<NodeId>, LayoutError> {
        if !self.nodes.contains_key(from) {
            return Err(LayoutError::NodeNotFound {
                node_id: from.clone(),
            });
        }
        let mut ids = Vec::new();
        self.collect_postorder(from, &mut ids);
        Ok(ids)
    }

    fn collect_preorder(&self, id: &NodeId, out: &mut Vec<NodeId>) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        out.push(id.clone());
        for child_id in &node.children {
            self.collect_preorder(child_id, out);
        }
    }

    fn collect_postorder(&self, id: &NodeId, out: &mut Vec<NodeId>) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        for child_id in node.children.clone() {
            self.collect_postorder(&child_id, out);
        }
        out.push(id.clone());
    }

    // ── internals ────────────────────────────────────────────────────────

    fn children_of(&self, id: &NodeId) -> Vec<NodeId> {
        self.nodes
            .get(id)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    fn side_pair(
        &self,
        id: &NodeId,
        first: Position,
        second: Position,
    ) -> Option<(NodeId, NodeId)> {
        Some((
            self.child_at(id, first)?.id.clone(),
            self.child_at(id, second)?.id.clone(),
        ))
    }

    fn allocate_id(&self) -> NodeId {
        loop {
            let id = NodeId::generate();
            if !self.nodes.contains_key(&id) {
                return id;
            }
        }
    }
}

fn validate_extent(width: f64, height: f64) -> Result<(), LayoutError> {
    if width < 0.0 || height < 0.0 {
        return Err(LayoutError::InvalidDimensions { width, height });
    }
    Ok(())
}
