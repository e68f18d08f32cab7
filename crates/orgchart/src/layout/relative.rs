//! Relative layout pass.
//!
//! Measures every subtree bottom-up. Each [`RelativeNode`] knows how wide
//! its subtree is and where its own box sits inside that width, but nothing
//! about where the subtree ends up on the canvas.

use std::collections::HashSet;

use log::trace;

use orgchart_core::{identifier::NodeId, tree::TreeNode};

use super::{LayoutError, LayoutMetrics};

/// A tree node measured in subtree-local coordinates.
///
/// Two horizontal frames are involved:
///
/// - the node's own subtree frame, whose origin is the left edge of the
///   subtree span; [`x`](Self::x) is the left edge of the node's box there,
/// - the parent's subtree frame; [`slot`](Self::slot) is where this
///   subtree's span starts in it (0 for the root and first children).
#[derive(Debug, Clone, PartialEq)]
pub struct RelativeNode<'a> {
    node: &'a TreeNode,
    slot: f32,
    x: f32,
    width: f32,
    children: Vec<RelativeNode<'a>>,
}

impl<'a> RelativeNode<'a> {
    /// The input node this measurement belongs to.
    pub fn node(&self) -> &'a TreeNode {
        self.node
    }

    pub fn id(&self) -> NodeId {
        self.node.id()
    }

    /// Left edge of this subtree's span in the parent's frame.
    pub fn slot(&self) -> f32 {
        self.slot
    }

    /// Left edge of this node's box in its own subtree frame.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Width of the subtree span; never less than the node width.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn children(&self) -> &[RelativeNode<'a>] {
        &self.children
    }
}

/// Measure `tree` and all of its descendants.
///
/// Leaves take exactly one node width. Children are packed left to right,
/// one horizontal gap apart, and the parent box is centered over the
/// combined span of its children.
///
/// # Errors
///
/// Returns [`LayoutError::DuplicateNode`] as soon as an identifier is seen
/// a second time.
pub fn layout<'a>(
    tree: &'a TreeNode,
    metrics: &LayoutMetrics,
) -> Result<RelativeNode<'a>, LayoutError> {
    let mut seen = HashSet::new();
    layout_subtree(tree, metrics, &mut seen)
}

fn layout_subtree<'a>(
    node: &'a TreeNode,
    metrics: &LayoutMetrics,
    seen: &mut HashSet<NodeId>,
) -> Result<RelativeNode<'a>, LayoutError> {
    if !seen.insert(node.id()) {
        return Err(LayoutError::DuplicateNode(node.id()));
    }

    let node_width = metrics.node_width();

    if node.is_leaf() {
        return Ok(RelativeNode {
            node,
            slot: 0.0,
            x: 0.0,
            width: node_width,
            children: Vec::new(),
        });
    }

    let mut children = node
        .children()
        .iter()
        .map(|child| layout_subtree(child, metrics, seen))
        .collect::<Result<Vec<_>, _>>()?;

    let mut cursor = 0.0;
    for child in &mut children {
        child.slot = cursor;
        cursor += child.width + metrics.horizontal_gap();
    }
    let total_width = cursor - metrics.horizontal_gap();

    // Center over [leftmost child edge, rightmost child edge]
    let span_left = children.first().map(|child| child.slot).unwrap_or_default();
    let span_right = children
        .last()
        .map(|child| child.slot + child.width)
        .unwrap_or(node_width);
    let x = (span_left + span_right) / 2.0 - node_width / 2.0;

    trace!(id = node.id().value(), x, total_width; "Measured subtree");

    Ok(RelativeNode {
        node,
        slot: 0.0,
        x,
        width: node_width.max(total_width),
        children,
    })
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn node(id: u64) -> TreeNode {
        TreeNode::new(NodeId::new(id), format!("n{id}"))
    }

    #[test]
    fn test_leaf_layout() {
        let leaf = node(1);
        let measured = layout(&leaf, &LayoutMetrics::default()).unwrap();

        assert_approx_eq!(f32, measured.x(), 0.0);
        assert_approx_eq!(f32, measured.slot(), 0.0);
        assert_approx_eq!(f32, measured.width(), 240.0);
        assert!(measured.children().is_empty());
    }

    #[test]
    fn test_single_child_sits_under_parent() {
        let tree = node(1).with_child(node(2));
        let measured = layout(&tree, &LayoutMetrics::default()).unwrap();

        assert_approx_eq!(f32, measured.x(), 0.0);
        assert_approx_eq!(f32, measured.width(), 240.0);
        assert_approx_eq!(f32, measured.children()[0].slot(), 0.0);
    }

    #[test]
    fn test_scenario_relative_offsets() {
        let tree = node(1).with_children([node(2).with_children([node(4), node(5)]), node(3)]);
        let measured = layout(&tree, &LayoutMetrics::default()).unwrap();

        let a = &measured.children()[0];
        let b = &measured.children()[1];

        assert_approx_eq!(f32, a.children()[0].slot(), 0.0);
        assert_approx_eq!(f32, a.children()[1].slot(), 280.0);
        assert_approx_eq!(f32, a.width(), 520.0);
        assert_approx_eq!(f32, a.x(), 140.0);

        assert_approx_eq!(f32, a.slot(), 0.0);
        assert_approx_eq!(f32, b.slot(), 560.0);

        assert_approx_eq!(f32, measured.width(), 800.0);
        assert_approx_eq!(f32, measured.x(), 280.0);
    }

    #[test]
    fn test_siblings_separated_by_gap() {
        let metrics = LayoutMetrics::default();
        let tree = node(1).with_children([
            node(2).with_children([node(5), node(6), node(7)]),
            node(3),
            node(4).with_child(node(8)),
        ]);
        let measured = layout(&tree, &metrics).unwrap();

        for pair in measured.children().windows(2) {
            assert!(pair[1].slot() >= pair[0].slot() + pair[0].width() + metrics.horizontal_gap());
        }
    }

    #[test]
    fn test_custom_gap() {
        let metrics = LayoutMetrics::new(orgchart_core::geometry::Size::new(100.0, 30.0), 10.0, 5.0);
        let tree = node(1).with_children([node(2), node(3), node(4)]);
        let measured = layout(&tree, &metrics).unwrap();

        assert_approx_eq!(f32, measured.width(), 320.0);
        assert_approx_eq!(f32, measured.children()[2].slot(), 220.0);
        assert_approx_eq!(f32, measured.x(), 110.0);
    }

    #[test]
    fn test_duplicate_identifier_fails_fast() {
        let tree = node(1).with_children([node(2).with_child(node(3)), node(3)]);
        let err = layout(&tree, &LayoutMetrics::default()).unwrap_err();
        assert_eq!(err, LayoutError::DuplicateNode(NodeId::new(3)));
    }
}
