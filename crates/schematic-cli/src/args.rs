//! Command-line argument definitions for the Schematic CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Every argument is optional: without any, the diagram is
//! rendered as PNG into the current directory.

use clap::Parser;

use schematic::config::{LayoutEngine, OutputFormat, RankDirection};

/// Renders the web application architecture diagram
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory the image is written to
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Output format (png, jpg, svg, pdf, dot)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Graphviz layout engine (dot, neato, fdp, sfdp, circo, twopi)
    #[arg(short, long)]
    pub layout: Option<LayoutEngine>,

    /// Rank direction (LR, TB, BT, RL)
    #[arg(short, long)]
    pub direction: Option<RankDirection>,

    /// File name stem, instead of one derived from the diagram title
    #[arg(long)]
    pub file_name: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the DOT source to stdout instead of rendering
    #[arg(long)]
    pub emit_dot: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
