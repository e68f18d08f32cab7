//! Tree layout engine
//!
//! Positions every node of an organization tree on a canvas:
//!
//! - every depth gets its own row, so all nodes of one depth share a `y`,
//! - a parent is centered horizontally over the span of its descendants,
//! - sibling subtrees never overlap and are separated by a fixed gap.
//!
//! The work is split into two passes that must run in this order:
//!
//! 1. [`relative::layout`] walks the tree bottom-up and measures every
//!    subtree, producing offsets relative to each subtree's own origin.
//! 2. [`absolute::position`] walks the measured tree top-down, turning
//!    relative offsets into canvas coordinates and stamping the row `y`.
//!
//! [`LayoutEngine`] runs both passes for a given anchor point.

pub mod absolute;
pub mod relative;

mod positioned;

pub use positioned::{Layout, NodeIndex, PositionedNode};
pub use relative::RelativeNode;

use std::collections::HashSet;

use log::{debug, info};
use thiserror::Error;

use orgchart_core::{
    geometry::{Point, Size},
    identifier::NodeId,
    tree::TreeNode,
};

/// Errors raised while laying out a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The same identifier was found twice while walking the tree.
    #[error("duplicate node identifier `{0}` in tree")]
    DuplicateNode(NodeId),
}

/// Fixed dimensions shared by every node of a layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    node_size: Size,
    horizontal_gap: f32,
    vertical_gap: f32,
}

impl LayoutMetrics {
    /// Creates metrics for boxes of `node_size` separated by the given gaps.
    pub fn new(node_size: Size, horizontal_gap: f32, vertical_gap: f32) -> Self {
        Self {
            node_size,
            horizontal_gap,
            vertical_gap,
        }
    }

    /// Size of the box every node is drawn as.
    pub fn node_size(&self) -> Size {
        self.node_size
    }

    pub fn node_width(&self) -> f32 {
        self.node_size.width()
    }

    pub fn node_height(&self) -> f32 {
        self.node_size.height()
    }

    /// Gap between neighbouring sibling subtrees.
    pub fn horizontal_gap(&self) -> f32 {
        self.horizontal_gap
    }

    /// Gap between the bottom of one row and the top of the next.
    pub fn vertical_gap(&self) -> f32 {
        self.vertical_gap
    }

    /// Vertical distance between the tops of two consecutive rows.
    pub fn row_step(&self) -> f32 {
        self.node_size.height() + self.vertical_gap
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            node_size: Size::new(240.0, 60.0),
            horizontal_gap: 40.0,
            vertical_gap: 100.0,
        }
    }
}

/// Runs both layout passes with a fixed set of [`LayoutMetrics`].
///
/// The engine holds configuration only; every call to
/// [`calculate`](Self::calculate) builds a fresh [`Layout`].
///
/// # Examples
///
/// ```
/// use orgchart::layout::LayoutEngine;
/// use orgchart_core::{geometry::Point, identifier::NodeId, tree::TreeNode};
///
/// let tree = TreeNode::new(NodeId::new(1), "CEO")
///     .with_child(TreeNode::new(NodeId::new(2), "CTO"))
///     .with_child(TreeNode::new(NodeId::new(3), "CFO"));
///
/// let layout = LayoutEngine::new()
///     .calculate(&tree, Point::new(0.0, 0.0))
///     .unwrap();
///
/// assert_eq!(layout.len(), 3);
/// assert_eq!(layout.root().y(), 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    metrics: LayoutMetrics,
}

impl LayoutEngine {
    /// Create a new engine with default metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given metrics instead of the defaults
    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Set the size of every node box
    pub fn with_node_size(mut self, size: Size) -> Self {
        self.metrics.node_size = size;
        self
    }

    /// Set the gap between sibling subtrees
    pub fn with_horizontal_gap(mut self, gap: f32) -> Self {
        self.metrics.horizontal_gap = gap;
        self
    }

    /// Set the gap between rows
    pub fn with_vertical_gap(mut self, gap: f32) -> Self {
        self.metrics.vertical_gap = gap;
        self
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Lay out `tree` with the left edge of its span and its top row at `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DuplicateNode`] if an identifier repeats.
    pub fn calculate(&self, tree: &TreeNode, anchor: Point) -> Result<Layout, LayoutError> {
        info!(nodes = tree.node_count(); "Calculating tree layout");

        let relative = relative::layout(tree, &self.metrics)?;
        debug!(root_width = relative.width(); "Relative pass complete");

        let layout = absolute::position(&relative, &self.metrics, anchor);
        debug!(
            positioned = layout.len(),
            anchor_x = anchor.x(),
            anchor_y = anchor.y();
            "Absolute pass complete"
        );

        Ok(layout)
    }
}

/// Checks that every identifier in `tree` occurs once.
///
/// Unlike the relative pass this walks the whole tree, including
/// subtrees that are currently collapsed.
pub fn ensure_unique_ids(tree: &TreeNode) -> Result<(), LayoutError> {
    let mut seen = HashSet::new();
    for node in tree.iter() {
        if !seen.insert(node.id()) {
            return Err(LayoutError::DuplicateNode(node.id()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn node(id: u64, name: &str) -> TreeNode {
        TreeNode::new(NodeId::new(id), name)
    }

    /// Root `R` with children `A` (reports `A1`, `A2`) and leaf `B`.
    fn scenario_tree() -> TreeNode {
        node(1, "R").with_children([
            node(2, "A").with_children([node(4, "A1"), node(5, "A2")]),
            node(3, "B"),
        ])
    }

    #[test]
    fn test_metrics_defaults() {
        let metrics = LayoutMetrics::default();
        assert_approx_eq!(f32, metrics.node_width(), 240.0);
        assert_approx_eq!(f32, metrics.node_height(), 60.0);
        assert_approx_eq!(f32, metrics.horizontal_gap(), 40.0);
        assert_approx_eq!(f32, metrics.vertical_gap(), 100.0);
        assert_approx_eq!(f32, metrics.row_step(), 160.0);
    }

    #[test]
    fn test_engine_builder_overrides() {
        let engine = LayoutEngine::new()
            .with_node_size(Size::new(100.0, 40.0))
            .with_horizontal_gap(10.0)
            .with_vertical_gap(20.0);

        let metrics = engine.metrics();
        assert_approx_eq!(f32, metrics.node_width(), 100.0);
        assert_approx_eq!(f32, metrics.row_step(), 60.0);
        assert_approx_eq!(f32, metrics.horizontal_gap(), 10.0);
    }

    #[test]
    fn test_scenario_absolute_coordinates() {
        let layout = LayoutEngine::new()
            .calculate(&scenario_tree(), Point::new(500.0, 50.0))
            .unwrap();

        let at = |id: u64| {
            let index = layout.find(NodeId::new(id)).unwrap();
            layout.node(index).unwrap()
        };

        // Rows
        assert_approx_eq!(f32, at(1).y(), 50.0);
        assert_approx_eq!(f32, at(2).y(), 210.0);
        assert_approx_eq!(f32, at(3).y(), 210.0);
        assert_approx_eq!(f32, at(4).y(), 370.0);
        assert_approx_eq!(f32, at(5).y(), 370.0);

        // Leaves sit at their slots
        assert_approx_eq!(f32, at(4).x(), 500.0);
        assert_approx_eq!(f32, at(5).x(), 780.0);
        assert_approx_eq!(f32, at(3).x(), 1060.0);

        // A is centered over [500, 1020], R over [500, 1300]
        assert_approx_eq!(f32, at(2).x(), 640.0);
        assert_approx_eq!(f32, at(1).x(), 780.0);
        assert_approx_eq!(f32, at(1).width(), 800.0);
    }

    #[test]
    fn test_single_node_tree() {
        let layout = LayoutEngine::new()
            .calculate(&node(1, "Solo"), Point::new(10.0, 20.0))
            .unwrap();

        assert_eq!(layout.len(), 1);
        let root = layout.root();
        assert_approx_eq!(f32, root.x(), 10.0);
        assert_approx_eq!(f32, root.y(), 20.0);
        assert_approx_eq!(f32, root.width(), 240.0);
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_calculate_rejects_duplicate_ids() {
        let tree = node(1, "R").with_children([node(2, "A"), node(2, "B")]);
        let err = LayoutEngine::new()
            .calculate(&tree, Point::default())
            .unwrap_err();
        assert_eq!(err, LayoutError::DuplicateNode(NodeId::new(2)));
    }

    #[test]
    fn test_ensure_unique_ids() {
        assert!(ensure_unique_ids(&scenario_tree()).is_ok());

        let nested = node(1, "R").with_child(node(2, "A").with_child(node(1, "again")));
        assert_eq!(
            ensure_unique_ids(&nested),
            Err(LayoutError::DuplicateNode(NodeId::new(1)))
        );
    }

    #[test]
    fn test_calculate_is_deterministic() {
        let engine = LayoutEngine::new();
        let tree = scenario_tree();
        let first = engine.calculate(&tree, Point::new(3.0, 4.0)).unwrap();
        let second = engine.calculate(&tree, Point::new(3.0, 4.0)).unwrap();
        assert_eq!(first, second);
    }
}
