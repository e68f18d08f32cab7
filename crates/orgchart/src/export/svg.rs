//! SVG export backend.
//!
//! [`SvgBuilder`] resolves the configured style into concrete colors and
//! produces an [`Svg`] renderer. Connectors are drawn first so node boxes
//! sit on top of the curves.

mod connector;
mod node;

use std::io;

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use orgchart_core::{
    color::Color,
    geometry::{Bounds, Insets},
};

use super::{Error, Exporter};
use crate::{config::StyleConfig, connector::connectors, layout::Layout};

/// Colors resolved from a [`StyleConfig`].
#[derive(Debug, Clone)]
struct Palette {
    background: Option<Color>,
    node_fill: Color,
    node_stroke: Color,
    text: Color,
    connector: Color,
}

impl Palette {
    fn from_style(style: &StyleConfig) -> Result<Self, Error> {
        let render_err = |err: orgchart_core::color::ColorError| Error::Render(err.to_string());
        Ok(Self {
            background: style.background_color().map_err(render_err)?,
            node_fill: style.node_fill().map_err(render_err)?,
            node_stroke: style.node_stroke().map_err(render_err)?,
            text: style.text_color().map_err(render_err)?,
            connector: style.connector_color().map_err(render_err)?,
        })
    }
}

/// Builder for [`Svg`] renderers.
#[derive(Debug, Clone)]
pub struct SvgBuilder {
    style: StyleConfig,
    curve_strength: f32,
    margin: f32,
}

impl Default for SvgBuilder {
    fn default() -> Self {
        Self {
            style: StyleConfig::default(),
            curve_strength: 50.0,
            margin: 20.0,
        }
    }
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the colors of `style`
    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Set the vertical offset of connector control points
    pub fn with_curve_strength(mut self, curve_strength: f32) -> Self {
        self.curve_strength = curve_strength;
        self
    }

    /// Set the empty space kept around the chart
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Resolve the style and create the renderer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a configured color does not parse.
    pub fn build(self) -> Result<Svg, Error> {
        Ok(Svg {
            palette: Palette::from_style(&self.style)?,
            curve_strength: self.curve_strength,
            margin: self.margin,
        })
    }
}

/// Renders a [`Layout`] as an SVG document.
#[derive(Debug, Clone)]
pub struct Svg {
    palette: Palette,
    curve_strength: f32,
    margin: f32,
}

impl Svg {
    /// Area covered by the document: the layout bounds plus the margin.
    pub fn canvas_bounds(&self, layout: &Layout) -> Bounds {
        layout.bounds().add_padding(Insets::uniform(self.margin))
    }

    /// Renders the complete layout to an SVG document.
    pub fn render_layout(&self, layout: &Layout) -> Document {
        let canvas = self.canvas_bounds(layout);
        debug!(
            width = canvas.width(),
            height = canvas.height();
            "Rendering SVG canvas"
        );

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    canvas.min_x(),
                    canvas.min_y(),
                    canvas.width(),
                    canvas.height()
                ),
            )
            .set("width", canvas.width())
            .set("height", canvas.height());

        if let Some(background) = &self.palette.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", canvas.min_x())
                    .set("y", canvas.min_y())
                    .set("width", canvas.width())
                    .set("height", canvas.height())
                    .set("fill", background.to_string()),
            );
        }

        let mut connector_group = svg_element::Group::new().set("class", "org-connectors");
        for connector in connectors(layout, self.curve_strength) {
            connector_group = connector_group.add(self.render_connector(&connector));
        }

        let mut node_group = svg_element::Group::new().set("class", "org-nodes");
        for (_, node) in layout.iter() {
            node_group = node_group.add(self.render_node(node));
        }

        doc.add(connector_group).add(node_group)
    }
}

impl Exporter for Svg {
    fn export_layout(&self, layout: &Layout, out: &mut dyn io::Write) -> Result<(), Error> {
        let doc = self.render_layout(layout);
        debug!("SVG document rendered");

        write!(out, "{doc}")?;
        info!(nodes = layout.len(); "SVG exported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use orgchart_core::{geometry::Point, identifier::NodeId, tree::TreeNode};

    use super::*;
    use crate::layout::LayoutEngine;

    fn sample_layout() -> Layout {
        let tree = TreeNode::new(NodeId::new(1), "Ada")
            .with_title("CEO")
            .with_children([
                TreeNode::new(NodeId::new(2), "Grace"),
                TreeNode::new(NodeId::new(3), "Linus"),
            ]);
        LayoutEngine::new()
            .calculate(&tree, Point::new(0.0, 0.0))
            .unwrap()
    }

    fn render(svg: &Svg, layout: &Layout) -> String {
        let mut out = Vec::new();
        svg.export_layout(layout, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_canvas_bounds_include_margin() {
        let svg = SvgBuilder::new().with_margin(10.0).build().unwrap();
        let canvas = svg.canvas_bounds(&sample_layout());

        assert_approx_eq!(f32, canvas.min_x(), -10.0);
        assert_approx_eq!(f32, canvas.min_y(), -10.0);
        assert_approx_eq!(f32, canvas.width(), 540.0);
        assert_approx_eq!(f32, canvas.height(), 240.0);
    }

    #[test]
    fn test_document_contains_nodes_and_connectors() {
        let svg = SvgBuilder::new().build().unwrap();
        let output = render(&svg, &sample_layout());

        assert!(output.contains("<svg"));
        assert!(output.contains("</svg>"));
        assert_eq!(output.matches("data-node-id=").count(), 3);
        assert_eq!(output.matches("class=\"org-connector\"").count(), 2);
        assert!(output.contains("Ada"));
        assert!(output.contains("CEO"));
    }

    #[test]
    fn test_background_only_when_configured() {
        let layout = sample_layout();

        let plain = render(&SvgBuilder::new().build().unwrap(), &layout);
        let style = StyleConfig::default().with_background_color("white");
        let filled = render(&SvgBuilder::new().with_style(&style).build().unwrap(), &layout);

        assert_eq!(plain.matches("<rect").count(), 3);
        assert_eq!(filled.matches("<rect").count(), 4);
    }

    #[test]
    fn test_invalid_style_fails_to_build() {
        let style = StyleConfig::default().with_background_color("nope");
        let result = SvgBuilder::new().with_style(&style).build();
        assert!(matches!(result, Err(Error::Render(_))));
    }
}
