//! Expand/collapse state and pruning of the visible tree.
//!
//! Only nodes reachable through expanded ancestors are laid out. The root
//! starts expanded and every other node starts collapsed until the state
//! says otherwise.

use std::collections::HashMap;

use log::trace;

use orgchart_core::{identifier::NodeId, tree::TreeNode};

/// Which nodes currently show their children.
///
/// Nodes without an explicit entry fall back to the default: expanded for
/// the root, collapsed for everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandState {
    entries: HashMap<NodeId, bool>,
}

impl ExpandState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is expanded, applying the default for missing entries.
    pub fn is_expanded(&self, id: NodeId, is_root: bool) -> bool {
        self.entries.get(&id).copied().unwrap_or(is_root)
    }

    /// Returns the explicit entry for `id`, if one was set.
    pub fn get(&self, id: NodeId) -> Option<bool> {
        self.entries.get(&id).copied()
    }

    pub fn set(&mut self, id: NodeId, expanded: bool) {
        self.entries.insert(id, expanded);
    }

    pub fn expand(&mut self, id: NodeId) {
        self.set(id, true);
    }

    pub fn collapse(&mut self, id: NodeId) {
        self.set(id, false);
    }

    /// Flips the state of `id` and returns the new value.
    pub fn toggle(&mut self, id: NodeId, is_root: bool) -> bool {
        let expanded = !self.is_expanded(id, is_root);
        self.set(id, expanded);
        trace!(id = id.value(), expanded; "Toggled node");
        expanded
    }

    /// Marks every node of `tree` that has children as expanded.
    pub fn expand_all(&mut self, tree: &TreeNode) {
        for node in tree.iter().filter(|node| !node.is_leaf()) {
            self.expand(node.id());
        }
    }

    /// Marks every node of `tree`, the root included, as collapsed.
    pub fn collapse_all(&mut self, tree: &TreeNode) {
        for node in tree.iter() {
            self.collapse(node.id());
        }
    }

    /// Drops all explicit entries, restoring the defaults.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<NodeId> for ExpandState {
    /// Builds a state where the given nodes are expanded.
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|id| (id, true)).collect(),
        }
    }
}

/// The subtree of `tree` that is currently visible under `state`.
pub fn visible_tree(tree: &TreeNode, state: &ExpandState) -> TreeNode {
    tree.pruned(&|node, depth| state.is_expanded(node.id(), depth == 0))
}

/// How many direct children each visible, collapsed node is hiding.
///
/// Only nodes that are themselves visible and have at least one hidden
/// child appear in the result.
pub fn hidden_children(tree: &TreeNode, state: &ExpandState) -> HashMap<NodeId, usize> {
    let mut hidden = HashMap::new();
    collect_hidden(tree, state, true, &mut hidden);
    hidden
}

fn collect_hidden(
    node: &TreeNode,
    state: &ExpandState,
    is_root: bool,
    hidden: &mut HashMap<NodeId, usize>,
) {
    if node.is_leaf() {
        return;
    }

    if state.is_expanded(node.id(), is_root) {
        for child in node.children() {
            collect_hidden(child, state, false, hidden);
        }
    } else {
        hidden.insert(node.id(), node.children().len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: u64) -> TreeNode {
        TreeNode::new(NodeId::new(id), format!("n{id}"))
    }

    /// 1 -> [2 -> [4, 5], 3 -> [6]]
    fn sample() -> TreeNode {
        node(1).with_children([node(2).with_children([node(4), node(5)]), node(3).with_child(node(6))])
    }

    #[test]
    fn test_defaults() {
        let state = ExpandState::new();
        assert!(state.is_expanded(NodeId::new(1), true));
        assert!(!state.is_expanded(NodeId::new(2), false));
        assert!(state.is_empty());
        assert_eq!(state.get(NodeId::new(1)), None);
    }

    #[test]
    fn test_default_visible_tree_shows_root_and_children() {
        let visible = visible_tree(&sample(), &ExpandState::new());
        assert_eq!(visible.node_count(), 3);
        assert!(visible.children().iter().all(TreeNode::is_leaf));
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut state = ExpandState::new();

        assert!(state.toggle(NodeId::new(2), false));
        assert!(state.is_expanded(NodeId::new(2), false));
        assert!(!state.toggle(NodeId::new(2), false));

        assert!(!state.toggle(NodeId::new(1), true));
        assert!(!state.is_expanded(NodeId::new(1), true));
    }

    #[test]
    fn test_expand_makes_grandchildren_visible() {
        let mut state = ExpandState::new();
        state.expand(NodeId::new(2));

        let visible = visible_tree(&sample(), &state);
        assert_eq!(visible.node_count(), 5);
        assert!(visible.find(NodeId::new(6)).is_none());
    }

    #[test]
    fn test_collapsed_ancestor_hides_expanded_descendant() {
        let mut state = ExpandState::new();
        state.expand(NodeId::new(2));
        state.collapse(NodeId::new(1));

        let visible = visible_tree(&sample(), &state);
        assert_eq!(visible.node_count(), 1);
    }

    #[test]
    fn test_expand_all_and_collapse_all() {
        let tree = sample();
        let mut state = ExpandState::new();

        state.expand_all(&tree);
        assert_eq!(visible_tree(&tree, &state), tree);
        assert_eq!(state.len(), 3);

        state.collapse_all(&tree);
        assert_eq!(visible_tree(&tree, &state).node_count(), 1);

        state.reset();
        assert_eq!(visible_tree(&tree, &state).node_count(), 3);
    }

    #[test]
    fn test_from_iterator_expands_listed_nodes() {
        let state: ExpandState = [NodeId::new(3)].into_iter().collect();
        let visible = visible_tree(&sample(), &state);
        assert!(visible.find(NodeId::new(6)).is_some());
        assert!(visible.find(NodeId::new(4)).is_none());
    }

    #[test]
    fn test_hidden_children_counts() {
        let tree = sample();
        let state = ExpandState::new();

        let hidden = hidden_children(&tree, &state);
        assert_eq!(hidden.get(&NodeId::new(2)), Some(&2));
        assert_eq!(hidden.get(&NodeId::new(3)), Some(&1));
        assert_eq!(hidden.get(&NodeId::new(1)), None);

        let mut collapsed_root = ExpandState::new();
        collapsed_root.collapse(NodeId::new(1));
        let hidden = hidden_children(&tree, &collapsed_root);
        assert_eq!(hidden.len(), 1);
        assert_eq!(hidden.get(&NodeId::new(1)), Some(&2));
    }
}
