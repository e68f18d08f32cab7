//! Error types for Orgchart operations.
//!
//! This module provides the main error type [`OrgChartError`] which wraps
//! the error conditions that can occur while loading, laying out and
//! rendering a chart.

use std::io;

use thiserror::Error;

use orgchart_core::identifier::NodeId;

use crate::layout::LayoutError;

/// The main error type for Orgchart operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the JSON source next to the parser error so
/// front ends can point at the offending line and column.
#[derive(Debug, Error)]
pub enum OrgChartError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid chart document: {err}")]
    Parse { err: serde_json::Error, src: String },

    #[error("Chart is deeper than the supported {max} levels")]
    TooDeep { max: usize },

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("Node {0} has no children to expand or collapse")]
    LeafNode(NodeId),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for OrgChartError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl OrgChartError {
    /// Create a new `Parse` error with the associated source document.
    pub fn new_parse_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
