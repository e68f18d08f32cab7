//! The input organization tree.
//!
//! A [`TreeNode`] is one person or role together with its ordered reports.
//! The serialized form is the JSON document produced by the chart's data
//! source:
//!
//! ```json
//! { "id": 1, "name": "Ada", "title": "CEO", "children": [ { "id": 2, "name": "Grace" } ] }
//! ```
//!
//! `id` must be a non-negative integer (see [`NodeId`]); `title` is
//! optional, and `children` may be missing or `null` for leaves.
//! Trees are immutable once built; pruning produces a new tree.

use serde::{Deserialize, Deserializer, Serialize};

use crate::identifier::NodeId;

/// A node of the organization tree, owning its ordered children.
///
/// # Examples
///
/// ```
/// # use orgchart_core::{identifier::NodeId, tree::TreeNode};
/// let tree = TreeNode::new(NodeId::new(1), "Ada")
///     .with_title("CEO")
///     .with_child(TreeNode::new(NodeId::new(2), "Grace"))
///     .with_child(TreeNode::new(NodeId::new(3), "Linus"));
///
/// assert_eq!(tree.node_count(), 3);
/// assert_eq!(tree.depth(), 2);
/// assert_eq!(tree.find(NodeId::new(3)).map(|n| n.name()), Some("Linus"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    id: NodeId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_children",
        skip_serializing_if = "Vec::is_empty"
    )]
    children: Vec<TreeNode>,
}

/// Accepts a missing, `null` or array `children` field.
fn deserialize_children<'de, D>(deserializer: D) -> Result<Vec<TreeNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<TreeNode>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl TreeNode {
    /// Creates a leaf node without a title.
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            title: None,
            children: Vec::new(),
        }
    }

    /// Sets the subtitle shown under the name (builder style).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends a child after the existing ones (builder style).
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several children in order (builder style).
    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.children.extend(children);
        self
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

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including this node.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// Number of levels in this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::depth)
            .max()
            .unwrap_or_default()
    }

    /// Finds the first node with the given identifier in pre-order.
    pub fn find(&self, id: NodeId) -> Option<&TreeNode> {
        self.iter().find(|node| node.id == id)
    }

    /// Iterates over this subtree in pre-order (parent before children,
    /// children left to right).
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Builds a copy of this tree keeping a node's children only when
    /// `is_expanded` accepts it.
    ///
    /// The closure receives the node and its depth (0 for the node this is
    /// called on). Children of a rejected node are dropped together with
    /// their whole subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orgchart_core::{identifier::NodeId, tree::TreeNode};
    /// let tree = TreeNode::new(NodeId::new(1), "root").with_child(
    ///     TreeNode::new(NodeId::new(2), "lead").with_child(TreeNode::new(NodeId::new(3), "ic")),
    /// );
    ///
    /// let top_two = tree.pruned(&|_, depth| depth == 0);
    /// assert_eq!(top_two.node_count(), 2);
    /// ```
    pub fn pruned<F>(&self, is_expanded: &F) -> TreeNode
    where
        F: Fn(&TreeNode, usize) -> bool,
    {
        self.pruned_at(is_expanded, 0)
    }

    fn pruned_at<F>(&self, is_expanded: &F, depth: usize) -> TreeNode
    where
        F: Fn(&TreeNode, usize) -> bool,
    {
        let children = if is_expanded(self, depth) {
            self.children
                .iter()
                .map(|child| child.pruned_at(is_expanded, depth + 1))
                .collect()
        } else {
            Vec::new()
        };

        TreeNode {
            id: self.id,
            name: self.name.clone(),
            title: self.title.clone(),
            children,
        }
    }
}

/// Pre-order iterator over a [`TreeNode`] and its descendants.
#[derive(Debug)]
pub struct PreOrder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        TreeNode::new(NodeId::new(1), "R").with_children([
            TreeNode::new(NodeId::new(2), "A").with_children([
                TreeNode::new(NodeId::new(4), "A1"),
                TreeNode::new(NodeId::new(5), "A2"),
            ]),
            TreeNode::new(NodeId::new(3), "B"),
        ])
    }

    #[test]
    fn test_leaf_node() {
        let leaf = TreeNode::new(NodeId::new(9), "Solo");
        assert!(leaf.is_leaf());
        assert_eq!(leaf.node_count(), 1);
        assert_eq!(leaf.depth(), 1);
        assert_eq!(leaf.title(), None);
    }

    #[test]
    fn test_counts_and_depth() {
        let tree = sample();
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.depth(), 3);
        assert!(!tree.is_leaf());
    }

    #[test]
    fn test_pre_order_iteration() {
        let tree = sample();
        let names: Vec<&str> = tree.iter().map(TreeNode::name).collect();
        assert_eq!(names, vec!["R", "A", "A1", "A2", "B"]);
    }

    #[test]
    fn test_find() {
        let tree = sample();
        assert_eq!(tree.find(NodeId::new(5)).map(TreeNode::name), Some("A2"));
        assert!(tree.find(NodeId::new(42)).is_none());
    }

    #[test]
    fn test_pruned_keeps_expanded_children_only() {
        let tree = sample();

        let collapsed = tree.pruned(&|_, _| false);
        assert_eq!(collapsed.node_count(), 1);
        assert_eq!(collapsed.id(), NodeId::new(1));

        let root_only = tree.pruned(&|node, _| node.id() == NodeId::new(1));
        assert_eq!(root_only.node_count(), 3);
        assert!(root_only.children()[0].is_leaf());

        let everything = tree.pruned(&|_, _| true);
        assert_eq!(everything, tree);
    }

    #[test]
    fn test_pruned_passes_depth() {
        let tree = sample();
        let depth_one = tree.pruned(&|_, depth| depth < 1);
        assert_eq!(depth_one.node_count(), 3);
    }

    #[test]
    fn test_deserialize_document() {
        let json = r#"{
            "id": 1,
            "name": "Ada",
            "title": "CEO",
            "children": [
                { "id": 2, "name": "Grace", "children": null },
                { "id": 3, "name": "Linus", "title": "CTO", "children": [] }
            ]
        }"#;

        let tree: TreeNode = serde_json::from_str(json).unwrap();
        assert_eq!(tree.id(), NodeId::new(1));
        assert_eq!(tree.title(), Some("CEO"));
        assert_eq!(tree.children().len(), 2);
        assert!(tree.children()[0].is_leaf());
        assert_eq!(tree.children()[1].title(), Some("CTO"));
    }

    #[test]
    fn test_deserialize_rejects_missing_id() {
        let result: Result<TreeNode, _> = serde_json::from_str(r#"{ "name": "Nobody" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_non_integer_id() {
        for json in [
            r#"{ "id": -1, "name": "Ada" }"#,
            r#"{ "id": 2.5, "name": "Ada" }"#,
            r#"{ "id": 1, "name": "Ada", "children": [ { "id": -3, "name": "Grace" } ] }"#,
        ] {
            let result: Result<TreeNode, _> = serde_json::from_str(json);
            assert!(result.is_err(), "{json} should be rejected");
        }
    }

    #[test]
    fn test_serialize_omits_empty_fields() {
        let json = serde_json::to_string(&TreeNode::new(NodeId::new(1), "Ada")).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Ada"}"#);
    }
}
