//! Positioned nodes and the layout arena that owns them.

use std::{collections::HashMap, fmt};

use orgchart_core::{
    geometry::{Bounds, Point, Size},
    identifier::NodeId,
};

/// Index of a [`PositionedNode`] inside its [`Layout`].
///
/// Indices are only meaningful for the layout that produced them; a new
/// layout is built on every relayout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub(super) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in the layout's pre-order arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A tree node with absolute canvas coordinates.
///
/// The node's box is `size()` large with its top-left corner at
/// `position()`. The subtree below it spans `width()` starting at
/// `span_x()`.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedNode {
    id: NodeId,
    name: String,
    title: Option<String>,
    position: Point,
    size: Size,
    span_x: f32,
    width: f32,
    depth: usize,
    parent: Option<NodeIndex>,
    children: Vec<NodeIndex>,
    hidden_children: usize,
}

impl PositionedNode {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        id: NodeId,
        name: String,
        title: Option<String>,
        position: Point,
        size: Size,
        span_x: f32,
        width: f32,
        depth: usize,
        parent: Option<NodeIndex>,
    ) -> Self {
        Self {
            id,
            name,
            title,
            position,
            size,
            span_x,
            width,
            depth,
            parent,
            children: Vec::new(),
            hidden_children: 0,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Top-left corner of the node's box.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn x(&self) -> f32 {
        self.position.x()
    }

    pub fn y(&self) -> f32 {
        self.position.y()
    }

    /// Size of the node's box.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Left edge of the span covered by this node's subtree.
    pub fn span_x(&self) -> f32 {
        self.span_x
    }

    /// Width of the span covered by this node's subtree.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Distance from the root, which has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The node's parent; `None` for the root.
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Visible children, left to right.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Number of direct children hidden because this node is collapsed.
    pub fn hidden_children(&self) -> usize {
        self.hidden_children
    }

    /// Whether the node should offer an expand/collapse affordance.
    pub fn is_toggleable(&self) -> bool {
        !self.children.is_empty() || self.hidden_children > 0
    }

    /// Whether the node currently shows its children.
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Bounds of the node's box.
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.position, self.size)
    }

    /// Horizontal extent of the subtree span on this node's row.
    pub fn span_bounds(&self) -> Bounds {
        Bounds::new_from_top_left(
            self.position.with_x(self.span_x),
            Size::new(self.width, self.size.height()),
        )
    }
}

/// The result of a layout: every visible node with absolute coordinates.
///
/// Nodes live in an arena in pre-order, so the root is always the first
/// entry and a parent always precedes its children. Parent links are plain
/// [`NodeIndex`] values into the same arena.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    nodes: Vec<PositionedNode>,
    by_id: HashMap<NodeId, NodeIndex>,
}

impl Layout {
    /// Builds a layout from nodes already stored in pre-order.
    pub(super) fn from_nodes(nodes: Vec<PositionedNode>) -> Self {
        let by_id = nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (node.id, NodeIndex::new(idx)))
            .collect();
        Self { nodes, by_id }
    }

    pub(super) fn push(nodes: &mut Vec<PositionedNode>, node: PositionedNode) -> NodeIndex {
        let index = NodeIndex::new(nodes.len());
        nodes.push(node);
        index
    }

    pub(super) fn set_children(
        nodes: &mut [PositionedNode],
        parent: NodeIndex,
        children: Vec<NodeIndex>,
    ) {
        if let Some(node) = nodes.get_mut(parent.0) {
            node.children = children;
        }
    }

    /// The root of the layout.
    ///
    /// # Panics
    ///
    /// Never panics for layouts produced by the layout engine, which always
    /// contain at least the root.
    pub fn root(&self) -> &PositionedNode {
        &self.nodes[0]
    }

    /// Index of the root node.
    pub fn root_index(&self) -> NodeIndex {
        NodeIndex::new(0)
    }

    pub fn node(&self, index: NodeIndex) -> Option<&PositionedNode> {
        self.nodes.get(index.0)
    }

    /// All nodes in pre-order.
    pub fn nodes(&self) -> &[PositionedNode] {
        &self.nodes
    }

    /// All nodes in pre-order together with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &PositionedNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeIndex::new(idx), node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The parent of the node at `index`, if any.
    pub fn parent(&self, index: NodeIndex) -> Option<&PositionedNode> {
        self.node(index)
            .and_then(|node| node.parent)
            .and_then(|parent| self.node(parent))
    }

    /// The visible children of the node at `index`, left to right.
    pub fn children(&self, index: NodeIndex) -> impl Iterator<Item = &PositionedNode> {
        self.node(index)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|&child| self.node(child))
    }

    /// Finds the node carrying the given identifier.
    pub fn find(&self, id: NodeId) -> Option<NodeIndex> {
        self.by_id.get(&id).copied()
    }

    /// Depth of the node at `index`, with the root at 0.
    pub fn depth_of(&self, index: NodeIndex) -> Option<usize> {
        self.node(index).map(PositionedNode::depth)
    }

    /// Every parent/child pair, parents in pre-order and children left to right.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.iter().flat_map(|(parent, node)| {
            node.children.iter().map(move |&child| (parent, child))
        })
    }

    /// Smallest bounds containing every node box.
    pub fn bounds(&self) -> Bounds {
        self.nodes
            .iter()
            .map(PositionedNode::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
            .unwrap_or_default()
    }

    /// Records how many children each collapsed node is hiding.
    pub fn annotate_hidden_children(&mut self, hidden: &HashMap<NodeId, usize>) {
        for node in &mut self.nodes {
            node.hidden_children = hidden.get(&node.id).copied().unwrap_or_default();
        }
    }
}
