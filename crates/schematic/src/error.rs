//! Error types for Schematic operations.
//!
//! This module provides the main error type [`SchematicError`] which wraps
//! the error conditions that can occur while rendering a diagram.

use std::io;

use thiserror::Error;

use schematic_core::semantic::GraphError;

use crate::export;

/// The main error type for Schematic operations.
#[derive(Debug, Error)]
pub enum SchematicError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Export(#[from] export::Error),
}

impl SchematicError {
    /// Returns `true` if the error comes from a missing Graphviz installation.
    pub fn is_renderer_unavailable(&self) -> bool {
        matches!(
            self,
            SchematicError::Export(export::Error::Unavailable { .. })
        )
    }
}
