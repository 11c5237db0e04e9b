//! Conversion of a [`Diagram`] into a Graphviz DOT graph.
//!
//! Nodes are named `n<index>` and clusters `cluster_<index>` after their
//! creation order, so the same description always produces the same DOT text.

use std::fmt::Display;

use dot_generator::id;
use dot_structures::{
    Attribute, Edge as DotEdge, EdgeTy, Graph, GraphAttributes, Id, Node as DotNode, NodeId, Stmt,
    Subgraph, Vertex,
};
use graphviz_rust::printer::{DotPrinter, PrinterContext};

use schematic_core::semantic::{Diagram, Direction, Edge, Endpoint, GraphError, Member};

use crate::config::AppConfig;

/// Cluster backgrounds, picked by nesting depth.
const CLUSTER_BACKGROUNDS: [&str; 4] = ["#E5F5FD", "#EBF3E7", "#ECE8F6", "#FDF7E3"];

const FONT_COLOR: &str = "#2D3436";
const CLUSTER_BORDER: &str = "#AEB6BE";

/// Builds DOT graphs for diagrams using one configuration.
pub struct DotBuilder<'a> {
    config: &'a AppConfig,
}

impl<'a> DotBuilder<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Builds the DOT graph for `diagram`.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphError`] if an edge uses a handle of another diagram
    /// or ends on a cluster without nodes.
    pub fn build(&self, diagram: &Diagram) -> Result<Graph, GraphError> {
        diagram.validate()?;

        let mut stmts = self.defaults(diagram);
        for member in diagram.members() {
            stmts.push(self.member(diagram, *member));
        }
        for edge in diagram.edges() {
            stmts.push(self.edge(diagram, edge)?);
        }

        Ok(Graph::DiGraph {
            id: id!(esc escape(diagram.title())),
            strict: false,
            stmts,
        })
    }

    fn defaults(&self, diagram: &Diagram) -> Vec<Stmt> {
        let style = self.config.style();
        let render = self.config.render();

        let mut graph_attrs = vec![
            attr("label", diagram.title()),
            attr("rankdir", render.direction().as_rankdir()),
            attr("compound", "true"),
            attr("fontname", style.font_name()),
            attr("fontsize", 15),
            attr("fontcolor", FONT_COLOR),
            attr("pad", "2.0"),
            attr("nodesep", "0.60"),
            attr("ranksep", "0.75"),
            attr("splines", style.splines()),
        ];
        if let Some(background) = style.background_color() {
            graph_attrs.push(attr("bgcolor", background.to_hex()));
        }

        vec![
            Stmt::GAttribute(GraphAttributes::Graph(graph_attrs)),
            Stmt::GAttribute(GraphAttributes::Node(vec![
                attr("shape", "box"),
                attr("style", "rounded,filled"),
                attr("fontname", style.font_name()),
                attr("fontsize", 13),
                attr("fontcolor", FONT_COLOR),
            ])),
            Stmt::GAttribute(GraphAttributes::Edge(vec![
                attr("color", style.edge_color().to_hex()),
                attr("fontname", style.font_name()),
                attr("fontsize", 13),
            ])),
        ]
    }

    fn member(&self, diagram: &Diagram, member: Member) -> Stmt {
        match member {
            Member::Node(handle) => {
                let node = &diagram.nodes()[handle.index()];
                let category = node.category();
                Stmt::Node(DotNode {
                    id: node_id(handle.index()),
                    attributes: vec![
                        attr("label", node.label()),
                        attr("shape", category.shape()),
                        attr("fillcolor", self.config.style().fill(category).to_hex()),
                    ],
                })
            }
            Member::Cluster(handle) => {
                let cluster = &diagram.clusters()[handle.index()];
                let background = CLUSTER_BACKGROUNDS[cluster.depth() % CLUSTER_BACKGROUNDS.len()];
                let mut stmts = vec![
                    Stmt::Attribute(attr("label", cluster.label())),
                    Stmt::Attribute(attr("style", "rounded,filled")),
                    Stmt::Attribute(attr("labeljust", "l")),
                    Stmt::Attribute(attr("pencolor", CLUSTER_BORDER)),
                    Stmt::Attribute(attr("fontsize", 12)),
                    Stmt::Attribute(attr("bgcolor", background)),
                ];
                stmts.extend(
                    cluster
                        .members()
                        .iter()
                        .map(|child| self.member(diagram, *child)),
                );
                Stmt::Subgraph(Subgraph {
                    id: id!(cluster_name(handle.index())),
                    stmts,
                })
            }
        }
    }

    fn edge(&self, diagram: &Diagram, edge: &Edge) -> Result<Stmt, GraphError> {
        let tail = diagram.anchor(edge.source())?;
        let head = diagram.anchor(edge.target())?;

        let mut attributes = Vec::new();
        match edge.direction() {
            Direction::Forward => {}
            Direction::Backward => attributes.push(attr("dir", "back")),
            Direction::Undirected => attributes.push(attr("dir", "none")),
        }
        if let Endpoint::Cluster(cluster) = edge.source() {
            attributes.push(attr("ltail", cluster_name(cluster.index())));
        }
        if let Endpoint::Cluster(cluster) = edge.target() {
            attributes.push(attr("lhead", cluster_name(cluster.index())));
        }

        Ok(Stmt::Edge(DotEdge {
            ty: EdgeTy::Pair(
                Vertex::N(node_id(tail.index())),
                Vertex::N(node_id(head.index())),
            ),
            attributes,
        }))
    }
}

/// Prints a DOT graph as text.
pub fn print(graph: &Graph) -> String {
    graph.print(&mut PrinterContext::default())
}

fn node_id(index: usize) -> NodeId {
    NodeId(id!(format!("n{index}")), None)
}

fn cluster_name(index: usize) -> String {
    format!("cluster_{index}")
}

fn attr(key: &str, value: impl Display) -> Attribute {
    Attribute(id!(key), id!(esc escape(&value.to_string())))
}

/// Escapes text for use inside a double-quoted DOT string.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}
