use std::fmt;

use thiserror::Error;

/// Which end of an edge a problem was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    Source,
    Target,
}

impl fmt::Display for EdgeEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeEnd::Source => f.write_str("source"),
            EdgeEnd::Target => f.write_str("target"),
        }
    }
}

/// Structural problems found in a diagram description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("{end} of edge #{edge} refers to an element of another diagram")]
    ForeignEndpoint { edge: usize, end: EdgeEnd },

    #[error("node #{index} belongs to another diagram")]
    ForeignNode { index: usize },

    #[error("cluster #{index} belongs to another diagram")]
    ForeignCluster { index: usize },

    #[error("cluster `{path}` contains no node to attach an edge to")]
    EmptyCluster { path: String },
}
