//! Export functionality for Schematic diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning a DOT graph into output bytes. It is the final stage in the
//! Schematic processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Scope calls
//!     ↓ accumulate
//! Semantic Model (Diagram)
//!     ↓ validate + structure
//! DOT graph (dot module)
//!     ↓ export (Exporter)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`graphviz::GraphvizExporter`] runs Graphviz through `graphviz-rust`.
//!
//! # Error Handling
//!
//! Export operations return [`Error`], which converts into
//! [`SchematicError::Export`] at the crate boundary.
//!
//! [`SchematicError::Export`]: crate::SchematicError::Export

pub mod dot;
pub mod graphviz;

use std::io;

pub use dot_structures::Graph;
use thiserror::Error;

use crate::config::OutputFormat;

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// Converts a DOT graph into the bytes of an image in `format`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unavailable`] if the backend cannot be started and
    /// [`Error::Render`] if it ran but failed.
    fn export(&mut self, graph: Graph, format: OutputFormat) -> Result<Vec<u8>, Error>;
}

/// Errors raised while exporting a diagram.
#[derive(Debug, Error)]
pub enum Error {
    #[error("renderer `{program}` is not available")]
    Unavailable {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("renderer failed: {0}")]
    Render(String),
}
