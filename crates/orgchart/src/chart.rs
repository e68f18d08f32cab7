//! Interactive chart session.

use log::{debug, info};

use orgchart_core::{identifier::NodeId, tree::TreeNode};

use crate::{ChartBuilder, OrgChartError, layout::Layout, visibility::ExpandState};

/// A chart together with its expand/collapse state and current layout.
///
/// Every state change produces exactly one relayout of the visible tree;
/// [`revision`](Self::revision) counts them, starting at 1 for the layout
/// built by [`new`](Self::new).
#[derive(Debug, Clone)]
pub struct OrgChart {
    builder: ChartBuilder,
    tree: TreeNode,
    state: ExpandState,
    layout: Layout,
    revision: u64,
}

impl OrgChart {
    /// Lay out `tree` with the default expand state.
    ///
    /// # Errors
    ///
    /// Returns [`OrgChartError::Layout`] if an identifier repeats.
    pub fn new(tree: TreeNode, builder: ChartBuilder) -> Result<Self, OrgChartError> {
        Self::with_state(tree, ExpandState::new(), builder)
    }

    /// Lay out `tree` starting from a given expand state.
    ///
    /// # Errors
    ///
    /// Returns [`OrgChartError::TooDeep`] for trees deeper than
    /// [`MAX_DEPTH`](crate::MAX_DEPTH) and [`OrgChartError::Layout`] if an
    /// identifier repeats.
    pub fn with_state(
        tree: TreeNode,
        state: ExpandState,
        builder: ChartBuilder,
    ) -> Result<Self, OrgChartError> {
        crate::validate_tree(&tree)?;
        let layout = builder.layout(&tree, &state)?;
        info!(visible = layout.len(); "Chart session started");

        Ok(Self {
            builder,
            tree,
            state,
            layout,
            revision: 1,
        })
    }

    /// Flip the expanded flag of `id` and relayout. Returns the new flag.
    ///
    /// # Errors
    ///
    /// Returns [`OrgChartError::UnknownNode`] if `id` is not in the tree and
    /// [`OrgChartError::LeafNode`] if it has no children. Neither changes
    /// the state or triggers a relayout. A failed relayout also leaves the
    /// state, layout and revision as they were.
    pub fn toggle(&mut self, id: NodeId) -> Result<bool, OrgChartError> {
        let node = self.tree.find(id).ok_or(OrgChartError::UnknownNode(id))?;
        if node.is_leaf() {
            return Err(OrgChartError::LeafNode(id));
        }

        let mut state = self.state.clone();
        let expanded = state.toggle(id, self.tree.id() == id);
        debug!(id = id.value(), expanded; "Toggled node");

        self.commit(state)?;
        Ok(expanded)
    }

    /// Expand every node and relayout.
    pub fn expand_all(&mut self) -> Result<(), OrgChartError> {
        let mut state = self.state.clone();
        state.expand_all(&self.tree);
        self.commit(state)
    }

    /// Collapse every node, the root included, and relayout.
    pub fn collapse_all(&mut self) -> Result<(), OrgChartError> {
        let mut state = self.state.clone();
        state.collapse_all(&self.tree);
        self.commit(state)
    }

    /// Render the current layout to SVG.
    pub fn render_svg(&self) -> Result<String, OrgChartError> {
        self.builder.render_svg(&self.layout)
    }

    pub fn tree(&self) -> &TreeNode {
        &self.tree
    }

    pub fn state(&self) -> &ExpandState {
        &self.state
    }

    /// The layout of the currently visible tree.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of layouts computed so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Lays out `state` and adopts it only if the layout succeeds.
    fn commit(&mut self, state: ExpandState) -> Result<(), OrgChartError> {
        self.layout = self.builder.layout(&self.tree, &state)?;
        self.state = state;
        self.revision += 1;
        debug!(revision = self.revision, visible = self.layout.len(); "Relayout complete");
        Ok(())
    }
}
