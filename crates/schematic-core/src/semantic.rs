//! Semantic model of a diagram description.
//!
//! A [`Diagram`] owns every [`Node`], [`Cluster`] and [`Edge`] declared for it.
//! Content is added through a [`Scope`], which decides the cluster new
//! elements are grouped under. Handles ([`NodeHandle`], [`ClusterHandle`]) are
//! plain `Copy` values tied to the diagram that issued them.

mod diagram;
mod element;
mod error;
mod scope;

pub use diagram::Diagram;
pub use element::{
    Cluster, ClusterHandle, DiagramKey, Direction, Edge, Endpoint, Member, Node, NodeHandle,
};
pub use error::{EdgeEnd, GraphError};
pub use scope::Scope;
