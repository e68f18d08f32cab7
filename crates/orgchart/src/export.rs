//! Export functionality for organization charts.
//!
//! This module provides the [`Exporter`] trait that turns a laid-out chart
//! into an output document. It is the last stage of the pipeline:
//!
//! ```text
//! JSON document
//!     ↓ parse
//! TreeNode
//!     ↓ prune (expand/collapse state)
//! Visible tree
//!     ↓ layout (relative pass, absolute pass)
//! Layout
//!     ↓ export (this module)
//! SVG
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]

pub mod svg;

use std::io;

use thiserror::Error;

use crate::layout::Layout;

/// Abstraction for chart export backends.
pub trait Exporter {
    /// Writes `layout` to `out` in the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_layout(&self, layout: &Layout, out: &mut dyn io::Write) -> Result<(), Error>;
}

/// Errors that can occur during chart export.
///
/// Converted into [`OrgChartError::Export`](crate::OrgChartError::Export)
/// at the crate boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    #[error("Render error: {0}")]
    Render(String),

    /// An I/O error encountered while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
