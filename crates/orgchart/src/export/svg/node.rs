//! SVG rendering for chart nodes.

use svg::node::{Text as SvgText, element as svg_element};

use orgchart_core::geometry::Point;

use super::Svg;
use crate::layout::PositionedNode;

const NAME_FONT_SIZE: f32 = 16.0;
const TITLE_FONT_SIZE: f32 = 12.0;
const CORNER_RADIUS: f32 = 8.0;
const TOGGLE_RADIUS: f32 = 9.0;

impl Svg {
    /// Renders one node: its box, labels and, when it has reports, the
    /// expand/collapse affordance on the bottom edge.
    pub(super) fn render_node(&self, node: &PositionedNode) -> svg_element::Group {
        let bounds = node.bounds();
        let center = bounds.center();

        let rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("rx", CORNER_RADIUS)
            .set("fill", self.palette.node_fill.to_string())
            .set("stroke", self.palette.node_stroke.to_string())
            .set("stroke-width", 1.5);

        let mut group = svg_element::Group::new()
            .set("class", "org-node")
            .set("data-node-id", node.id().to_string())
            .add(rect);

        // Shift the name up to make room for the subtitle
        let name_y = match node.title() {
            Some(_) => center.y() - TITLE_FONT_SIZE / 2.0,
            None => center.y(),
        };
        group = group.add(self.render_label(
            node.name(),
            center.with_y(name_y),
            NAME_FONT_SIZE,
            "bold",
        ));

        if let Some(title) = node.title() {
            group = group.add(self.render_label(
                title,
                center.with_y(name_y + NAME_FONT_SIZE),
                TITLE_FONT_SIZE,
                "normal",
            ));
        }

        if node.is_toggleable() {
            group = group.add(self.render_toggle(node, Point::new(center.x(), bounds.max_y())));
        }

        group
    }

    fn render_label(
        &self,
        content: &str,
        position: Point,
        font_size: f32,
        font_weight: &str,
    ) -> svg_element::Text {
        svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", "Arial")
            .set("font-size", font_size)
            .set("font-weight", font_weight)
            .set("fill", self.palette.text.to_string())
            .add(SvgText::new(content))
    }

    /// The clickable toggle. Front ends look for `data-toggle` and report
    /// the carried node id back to the chart session.
    fn render_toggle(&self, node: &PositionedNode, center: Point) -> svg_element::Group {
        let symbol = if node.is_expanded() { "−" } else { "+" };

        let circle = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", TOGGLE_RADIUS)
            .set("fill", self.palette.node_fill.to_string())
            .set("stroke", self.palette.node_stroke.to_string());

        svg_element::Group::new()
            .set("class", "org-toggle")
            .set("data-toggle", node.id().to_string())
            .set("data-expanded", node.is_expanded().to_string())
            .set("data-hidden-children", node.hidden_children())
            .add(circle)
            .add(self.render_label(symbol, center, TITLE_FONT_SIZE, "bold"))
    }
}
