//! Configuration types for chart layout and rendering.
//!
//! All types implement [`serde::Deserialize`] and fall back to defaults for
//! any missing field, so a config file only needs to name what it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Node box size, gaps, anchor point and connector curvature.
//! - [`StyleConfig`] - Colors used by the SVG renderer.
//!
//! # Example
//!
//! ```
//! # use orgchart::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.layout().metrics().node_width(), 240.0);
//! ```

use serde::Deserialize;

use orgchart_core::{
    color::{Color, ColorError},
    geometry::{Point, Size},
};

use crate::layout::LayoutMetrics;

/// Top-level configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks every section, returning a description of the first problem.
    ///
    /// # Errors
    ///
    /// Returns an error for non-positive node dimensions, negative gaps or
    /// colors that do not parse.
    pub fn validate(&self) -> Result<(), String> {
        self.layout.validate()?;
        self.style.validate()
    }
}

/// Node box size, spacing and placement of the chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    node_width: f32,
    node_height: f32,
    horizontal_gap: f32,
    vertical_gap: f32,
    anchor_x: f32,
    anchor_y: f32,
    /// Vertical offset of the connector control points.
    curve_strength: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let metrics = LayoutMetrics::default();
        Self {
            node_width: metrics.node_width(),
            node_height: metrics.node_height(),
            horizontal_gap: metrics.horizontal_gap(),
            vertical_gap: metrics.vertical_gap(),
            anchor_x: 0.0,
            anchor_y: 0.0,
            curve_strength: 50.0,
        }
    }
}

impl LayoutConfig {
    /// Returns a copy placing the chart at `anchor`.
    pub fn with_anchor(mut self, anchor: Point) -> Self {
        self.anchor_x = anchor.x();
        self.anchor_y = anchor.y();
        self
    }

    /// Returns a copy using the given box size and gaps.
    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.node_width = metrics.node_width();
        self.node_height = metrics.node_height();
        self.horizontal_gap = metrics.horizontal_gap();
        self.vertical_gap = metrics.vertical_gap();
        self
    }

    /// Returns a copy using the given connector curvature.
    pub fn with_curve_strength(mut self, curve_strength: f32) -> Self {
        self.curve_strength = curve_strength;
        self
    }

    /// Box size and gaps for the layout engine.
    pub fn metrics(&self) -> LayoutMetrics {
        LayoutMetrics::new(
            Size::new(self.node_width, self.node_height),
            self.horizontal_gap,
            self.vertical_gap,
        )
    }

    /// Where the left edge of the chart and its top row are placed.
    pub fn anchor(&self) -> Point {
        Point::new(self.anchor_x, self.anchor_y)
    }

    pub fn curve_strength(&self) -> f32 {
        self.curve_strength
    }

    fn validate(&self) -> Result<(), String> {
        if self.node_width <= 0.0 || self.node_height <= 0.0 {
            return Err(format!(
                "Node size must be positive, got {}x{}",
                self.node_width, self.node_height
            ));
        }
        if self.horizontal_gap < 0.0 || self.vertical_gap < 0.0 {
            return Err(format!(
                "Gaps must not be negative, got horizontal {} and vertical {}",
                self.horizontal_gap, self.vertical_gap
            ));
        }
        Ok(())
    }
}

/// Colors used when rendering a chart, as CSS color strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Optional background fill behind the whole chart.
    background_color: Option<String>,
    node_fill: String,
    node_stroke: String,
    text_color: String,
    connector_color: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            node_fill: "#ffffff".to_string(),
            node_stroke: "#4a5568".to_string(),
            text_color: "#1a202c".to_string(),
            connector_color: "#a0aec0".to_string(),
        }
    }
}

impl StyleConfig {
    /// Returns a copy with the given background color string.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    pub fn background_color(&self) -> Result<Option<Color>, ColorError> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
    }

    pub fn node_fill(&self) -> Result<Color, ColorError> {
        Color::new(&self.node_fill)
    }

    pub fn node_stroke(&self) -> Result<Color, ColorError> {
        Color::new(&self.node_stroke)
    }

    pub fn text_color(&self) -> Result<Color, ColorError> {
        Color::new(&self.text_color)
    }

    pub fn connector_color(&self) -> Result<Color, ColorError> {
        Color::new(&self.connector_color)
    }

    fn validate(&self) -> Result<(), String> {
        let invalid = |err: ColorError| format!("Invalid color in style config: {err}");
        self.background_color().map_err(invalid)?;
        self.node_fill().map_err(invalid)?;
        self.node_stroke().map_err(invalid)?;
        self.text_color().map_err(invalid)?;
        self.connector_color().map_err(invalid)?;
        Ok(())
    }
}
