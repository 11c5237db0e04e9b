//! Graphviz export backend.

use std::io;

use dot_structures::Graph;
use graphviz_rust::{cmd::CommandArg, exec, printer::PrinterContext};
use log::{debug, info};

use super::{Error, Exporter, dot};
use crate::config::{LayoutEngine, OutputFormat};

/// Name of the Graphviz executable `graphviz-rust` invokes.
const PROGRAM: &str = "dot";

/// Renders DOT graphs by running Graphviz.
///
/// The [`OutputFormat::Dot`] format is printed directly and never starts
/// Graphviz.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphvizExporter {
    layout: LayoutEngine,
}

impl GraphvizExporter {
    pub fn new(layout: LayoutEngine) -> Self {
        Self { layout }
    }
}

impl Exporter for GraphvizExporter {
    fn export(&mut self, graph: Graph, format: OutputFormat) -> Result<Vec<u8>, Error> {
        let Some(graphviz_format) = format.graphviz_format() else {
            debug!("Printing DOT source without Graphviz");
            return Ok(dot::print(&graph).into_bytes());
        };

        info!(layout:? = self.layout, format:% = format; "Running Graphviz");
        let args = vec![
            CommandArg::Layout(self.layout.graphviz_layout()),
            CommandArg::Format(graphviz_format),
        ];
        exec(graph, &mut PrinterContext::default(), args).map_err(classify)
    }
}

/// Separates a missing Graphviz installation from Graphviz failing on its input.
fn classify(err: io::Error) -> Error {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => Error::Unavailable {
            program: PROGRAM.to_string(),
            source: err,
        },
        _ => Error::Render(err.to_string()),
    }
}
