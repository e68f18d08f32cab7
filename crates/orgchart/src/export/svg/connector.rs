//! SVG rendering for parent/child connectors.

use svg::node::element as svg_element;

use super::Svg;
use crate::connector::Connector;

impl Svg {
    pub(super) fn render_connector(&self, connector: &Connector) -> svg_element::Path {
        svg_element::Path::new()
            .set("class", "org-connector")
            .set("d", connector.path_data())
            .set("fill", "none")
            .set("stroke", self.palette.connector.to_string())
            .set("stroke-width", 2)
    }
}
