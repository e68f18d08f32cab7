//! Orgchart CLI library
//!
//! This module contains the core CLI logic for rendering organization charts.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{debug, info};

use orgchart::{
    ChartBuilder, OrgChartError, identifier::NodeId, tree::TreeNode, visibility::ExpandState,
};

/// Run the Orgchart CLI application
///
/// This function loads the input chart, lays out the nodes that are
/// visible under the requested expand state and writes the resulting SVG
/// to the output file.
///
/// # Errors
///
/// Returns `OrgChartError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors and duplicate ids
/// - `--expand` ids that are not in the chart
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), OrgChartError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing chart"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = ChartBuilder::new(app_config);
    let tree = builder.parse(&source)?;
    let state = initial_state(args, &tree)?;
    debug!(expanded = state.len(); "Initial expand state");

    let layout = builder.layout(&tree, &state)?;
    let svg = builder.render_svg(&layout)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output, nodes = layout.len(); "SVG exported successfully");

    Ok(())
}

fn initial_state(args: &Args, tree: &TreeNode) -> Result<ExpandState, OrgChartError> {
    let mut state = ExpandState::new();
    if args.expand_all {
        state.expand_all(tree);
    }

    for id in args.expand.iter().copied().map(NodeId::new) {
        if tree.find(id).is_none() {
            return Err(OrgChartError::UnknownNode(id));
        }
        state.expand(id);
    }

    Ok(state)
}
