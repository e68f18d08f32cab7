//! Absolute positioning pass.
//!
//! Converts a measured [`RelativeNode`] tree into a [`Layout`]: subtree-local
//! offsets become canvas coordinates, every node gets the `y` of its row,
//! and each node records a non-owning link to its parent.

use log::trace;

use orgchart_core::geometry::Point;

use super::{Layout, LayoutMetrics, NodeIndex, PositionedNode, RelativeNode};

/// Place a measured tree on the canvas.
///
/// The root subtree's span starts at `anchor.x()` and the root row sits at
/// `anchor.y()`. Each child subtree is placed at its slot relative to the
/// start of its parent's span, one row step further down.
///
/// The input is left untouched, so positioning the same measurement twice
/// yields equal layouts.
pub fn position(root: &RelativeNode<'_>, metrics: &LayoutMetrics, anchor: Point) -> Layout {
    let mut nodes = Vec::with_capacity(root.node().node_count());
    place(root, metrics, anchor.x(), anchor.y(), None, 0, &mut nodes);
    Layout::from_nodes(nodes)
}

fn place(
    relative: &RelativeNode<'_>,
    metrics: &LayoutMetrics,
    offset_x: f32,
    offset_y: f32,
    parent: Option<NodeIndex>,
    depth: usize,
    nodes: &mut Vec<PositionedNode>,
) -> NodeIndex {
    let node = relative.node();
    let span_x = offset_x + relative.slot();
    let position = Point::new(span_x + relative.x(), offset_y);

    trace!(
        id = node.id().value(),
        x = position.x(),
        y = position.y(),
        depth;
        "Positioned node"
    );

    let index = Layout::push(
        nodes,
        PositionedNode::new(
            node.id(),
            node.name().to_string(),
            node.title().map(str::to_string),
            position,
            metrics.node_size(),
            span_x,
            relative.width(),
            depth,
            parent,
        ),
    );

    let child_y = offset_y + metrics.row_step();
    let children = relative
        .children()
        .iter()
        .map(|child| place(child, metrics, span_x, child_y, Some(index), depth + 1, nodes))
        .collect();
    Layout::set_children(nodes, index, children);

    index
}
