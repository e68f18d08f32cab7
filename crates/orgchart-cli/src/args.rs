//! Command-line argument definitions for the Orgchart CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the initial expand state and logging verbosity.

use clap::Parser;

/// Command-line arguments for the orgchart renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON chart
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Expand every node before rendering
    #[arg(long)]
    pub expand_all: bool,

    /// Expand the node with this id; may be repeated
    #[arg(long = "expand", value_name = "ID")]
    pub expand: Vec<u64>,
}
