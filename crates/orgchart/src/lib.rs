//! Orgchart - Automatic layout and rendering of organization charts.
//!
//! Loads an organization tree from JSON, prunes it to the nodes that are
//! currently expanded, lays it out so every level forms one row and every
//! manager is centered over their reports, and renders the result as SVG
//! with curved connectors.

pub mod config;
pub mod connector;
pub mod export;
pub mod layout;
pub mod visibility;

mod chart;
mod error;

pub use orgchart_core::{color, geometry, identifier, tree};

pub use chart::OrgChart;
pub use error::OrgChartError;

use log::{debug, info, trace};
use serde::Deserialize;

use orgchart_core::tree::TreeNode;

use config::AppConfig;
use export::Exporter;
use layout::{Layout, LayoutEngine};
use visibility::ExpandState;

/// Deepest tree, counted in levels with the root as level 1, that
/// [`ChartBuilder::parse`] accepts.
///
/// Every level nests a node object inside its parent's `children` array, so
/// the document may nest up to twice this many objects and arrays.
pub const MAX_DEPTH: usize = 128;

/// Builder for loading, laying out and rendering organization charts.
///
/// # Examples
///
/// ```rust
/// use orgchart::{ChartBuilder, config::AppConfig, visibility::ExpandState};
///
/// let source = r#"{ "id": 1, "name": "Ada", "children": [ { "id": 2, "name": "Grace" } ] }"#;
///
/// let builder = ChartBuilder::new(AppConfig::default());
/// let tree = builder.parse(source).expect("Failed to parse");
/// let layout = builder.layout(&tree, &ExpandState::new()).expect("Failed to lay out");
/// let svg = builder.render_svg(&layout).expect("Failed to render");
///
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChartBuilder {
    config: AppConfig,
}

impl ChartBuilder {
    /// Create a new chart builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a JSON chart document into a tree.
    ///
    /// # Errors
    ///
    /// Returns [`OrgChartError::TooDeep`] for trees with more than
    /// [`MAX_DEPTH`] levels, [`OrgChartError::Parse`] for malformed JSON or
    /// documents that do not match the node shape, and
    /// [`OrgChartError::Layout`] if an identifier occurs more than once.
    pub fn parse(&self, source: &str) -> Result<TreeNode, OrgChartError> {
        info!("Parsing chart document");

        // Reject before deserializing, which recurses once per nesting level
        if json_nesting(source) > 2 * MAX_DEPTH {
            return Err(OrgChartError::TooDeep { max: MAX_DEPTH });
        }

        let mut deserializer = serde_json::Deserializer::from_str(source);
        deserializer.disable_recursion_limit();
        let tree = TreeNode::deserialize(&mut deserializer)
            .and_then(|tree| deserializer.end().map(|()| tree))
            .map_err(|err| OrgChartError::new_parse_error(err, source))?;
        validate_tree(&tree)?;

        debug!(nodes = tree.node_count(), depth = tree.depth(); "Chart parsed successfully");
        trace!(tree:?; "Parsed tree");

        Ok(tree)
    }

    /// Lay out the part of `tree` that is visible under `state`.
    ///
    /// A fresh [`LayoutEngine`] is configured for every call, and collapsed
    /// nodes in the result carry the number of reports they hide.
    ///
    /// # Errors
    ///
    /// Returns [`OrgChartError::Layout`] if the visible tree repeats an
    /// identifier.
    pub fn layout(&self, tree: &TreeNode, state: &ExpandState) -> Result<Layout, OrgChartError> {
        let visible = visibility::visible_tree(tree, state);
        info!(
            total = tree.node_count(),
            visible = visible.node_count();
            "Laying out visible tree"
        );

        let layout_config = self.config.layout();
        let engine = LayoutEngine::new().with_metrics(layout_config.metrics());
        let mut layout = engine.calculate(&visible, layout_config.anchor())?;
        layout.annotate_hidden_children(&visibility::hidden_children(tree, state));

        Ok(layout)
    }

    /// Render a layout to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`OrgChartError::Export`] if the style holds an invalid color.
    pub fn render_svg(&self, layout: &Layout) -> Result<String, OrgChartError> {
        info!(nodes = layout.len(); "Rendering SVG");

        let svg = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .with_curve_strength(self.config.layout().curve_strength())
            .build()?;

        let mut out = Vec::new();
        svg.export_layout(layout, &mut out)?;

        String::from_utf8(out)
            .map_err(|err| export::Error::Render(err.to_string()).into())
    }
}

/// Checks the limits every chart must satisfy before it is laid out.
fn validate_tree(tree: &TreeNode) -> Result<(), OrgChartError> {
    if tree.depth() > MAX_DEPTH {
        return Err(OrgChartError::TooDeep { max: MAX_DEPTH });
    }
    layout::ensure_unique_ids(tree)?;
    Ok(())
}

/// Deepest nesting of JSON objects and arrays, ignoring brackets in strings.
fn json_nesting(source: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0;
    let mut in_string = false;
    let mut escaped = false;

    for byte in source.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}
