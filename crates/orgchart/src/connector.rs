//! Connector geometry between a parent box and a child box.
//!
//! A connector leaves the parent at the bottom-center of its box and enters
//! the child at the top-center of its box. The curve between the two is a
//! cubic Bézier whose control points sit `curve_strength` below the start
//! and `curve_strength` above the end, which gives the familiar S-shaped
//! org chart link.

use orgchart_core::geometry::Point;

use crate::layout::{Layout, NodeIndex, PositionedNode};

/// A curved link from a parent node to one of its children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    parent: NodeIndex,
    child: NodeIndex,
    start: Point,
    control_start: Point,
    control_end: Point,
    end: Point,
}

impl Connector {
    /// Builds the connector between two positioned nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use orgchart::{connector::Connector, layout::LayoutEngine};
    /// use orgchart_core::{geometry::Point, identifier::NodeId, tree::TreeNode};
    ///
    /// let tree = TreeNode::new(NodeId::new(1), "Lead")
    ///     .with_child(TreeNode::new(NodeId::new(2), "Report"));
    /// let layout = LayoutEngine::new().calculate(&tree, Point::default()).unwrap();
    ///
    /// let child = layout.find(NodeId::new(2)).unwrap();
    /// let connector = Connector::between(&layout, layout.root_index(), child, 50.0).unwrap();
    ///
    /// assert_eq!(connector.start(), Point::new(120.0, 60.0));
    /// assert_eq!(connector.end(), Point::new(120.0, 160.0));
    /// ```
    pub fn between(
        layout: &Layout,
        parent: NodeIndex,
        child: NodeIndex,
        curve_strength: f32,
    ) -> Option<Self> {
        let parent_node = layout.node(parent)?;
        let child_node = layout.node(child)?;

        let start = bottom_center(parent_node);
        let end = top_center(child_node);

        Some(Self {
            parent,
            child,
            start,
            control_start: start.with_y(start.y() + curve_strength),
            control_end: end.with_y(end.y() - curve_strength),
            end,
        })
    }

    pub fn parent(&self) -> NodeIndex {
        self.parent
    }

    pub fn child(&self) -> NodeIndex {
        self.child
    }

    /// Anchor on the parent box.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Anchor on the child box.
    pub fn end(&self) -> Point {
        self.end
    }

    /// The two Bézier control points, start side first.
    pub fn control_points(&self) -> (Point, Point) {
        (self.control_start, self.control_end)
    }

    /// SVG path data for the curve.
    pub fn path_data(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x(),
            self.start.y(),
            self.control_start.x(),
            self.control_start.y(),
            self.control_end.x(),
            self.control_end.y(),
            self.end.x(),
            self.end.y()
        )
    }
}

/// Connectors for every parent/child pair of `layout`.
pub fn connectors(layout: &Layout, curve_strength: f32) -> Vec<Connector> {
    layout
        .edges()
        .filter_map(|(parent, child)| Connector::between(layout, parent, child, curve_strength))
        .collect()
}

fn bottom_center(node: &PositionedNode) -> Point {
    let bounds = node.bounds();
    Point::new(bounds.center().x(), bounds.max_y())
}

fn top_center(node: &PositionedNode) -> Point {
    let bounds = node.bounds();
    Point::new(bounds.center().x(), bounds.min_y())
}
