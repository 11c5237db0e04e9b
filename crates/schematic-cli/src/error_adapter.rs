//! Error adapter for converting SchematicError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use schematic::{SchematicError, export, semantic::GraphError};

/// Adapter giving a [`SchematicError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a SchematicError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            SchematicError::Io(_) => "schematic::io",
            SchematicError::Graph(_) => "schematic::graph",
            SchematicError::Config(_) => "schematic::config",
            SchematicError::Export(_) => "schematic::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            SchematicError::Export(export::Error::Unavailable { .. }) => {
                "install Graphviz and make sure `dot` is on PATH, or pass `--format dot`"
            }
            SchematicError::Graph(GraphError::EmptyCluster { .. }) => {
                "add a node to the cluster or connect to one of its nodes instead"
            }
            SchematicError::Graph(GraphError::ForeignEndpoint { .. }) => {
                "edges can only join nodes and clusters of the same diagram"
            }
            SchematicError::Config(_) => "check the configuration file against the documented keys",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
