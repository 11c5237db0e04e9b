//! Schematic Core Types and Definitions
//!
//! This crate provides the data model behind Schematic architecture diagrams.
//! It includes:
//!
//! - **Identifiers**: String-interned cluster paths ([`identifier::Id`])
//! - **Colors**: CSS color parsing and Graphviz-friendly formatting ([`color::Color`])
//! - **Categories**: The kind of architectural element a node stands for ([`category::Category`])
//! - **Semantic**: Nodes, clusters, edges, the [`semantic::Diagram`] description
//!   and the [`semantic::Scope`] used to populate it

pub mod category;
pub mod color;
pub mod identifier;
pub mod semantic;
