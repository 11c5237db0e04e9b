//! Structural analysis of a diagram description.
//!
//! The description is projected onto a `petgraph` directed graph over its
//! nodes. Cluster endpoints are resolved to their anchor node, backward edges
//! are reversed and undirected edges only count towards connectivity.

use petgraph::{algo::is_cyclic_directed, graph::DiGraph};

use schematic_core::semantic::{Diagram, Direction, GraphError};

/// Summary figures of a diagram description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramStats {
    pub nodes: usize,
    pub clusters: usize,
    pub edges: usize,
    pub undirected_edges: usize,
    /// Deepest cluster nesting level; 0 when there are no nested clusters.
    pub max_depth: usize,
    /// Whether the arrows form at least one directed cycle.
    pub cyclic: bool,
    /// Nodes not touched by any edge.
    pub isolated: usize,
}

pub(crate) fn analyze(diagram: &Diagram) -> Result<DiagramStats, GraphError> {
    let mut graph: DiGraph<usize, ()> =
        DiGraph::with_capacity(diagram.nodes().len(), diagram.edges().len());
    let indices: Vec<_> = (0..diagram.nodes().len())
        .map(|index| graph.add_node(index))
        .collect();
    let mut degree = vec![0usize; diagram.nodes().len()];
    let mut undirected_edges = 0;

    for edge in diagram.edges() {
        let source = diagram.anchor(edge.source())?.index();
        let target = diagram.anchor(edge.target())?.index();
        degree[source] += 1;
        degree[target] += 1;

        match edge.direction() {
            Direction::Forward => {
                graph.add_edge(indices[source], indices[target], ());
            }
            Direction::Backward => {
                graph.add_edge(indices[target], indices[source], ());
            }
            Direction::Undirected => undirected_edges += 1,
        }
    }

    Ok(DiagramStats {
        nodes: diagram.nodes().len(),
        clusters: diagram.clusters().len(),
        edges: diagram.edges().len(),
        undirected_edges,
        max_depth: diagram
            .clusters()
            .iter()
            .map(|cluster| cluster.depth())
            .max()
            .unwrap_or(0),
        cyclic: is_cyclic_directed(&graph),
        isolated: degree.iter().filter(|&&d| d == 0).count(),
    })
}

#[cfg(test)]
mod tests {
    use schematic_core::category::Category;

    use super::*;

    #[test]
    fn test_acyclic_chain() {
        let mut diagram = Diagram::new("Chain");
        let mut root = diagram.root();
        let nodes = root.nodes(["a", "b", "c", "lonely"], Category::Backend);
        root.connect(nodes[0], nodes[1]);
        root.connect(nodes[1], nodes[2]);

        let stats = analyze(&diagram).unwrap();
        assert_eq!(stats.nodes, 4);
        assert_eq!(stats.edges, 2);
        assert!(!stats.cyclic);
        assert_eq!(stats.isolated, 1);
    }

    #[test]
    fn test_cycle_is_reported_not_rejected() {
        let mut diagram = Diagram::new("Cycle");
        let mut root = diagram.root();
        let a = root.node("a", Category::Backend);
        let b = root.node("b", Category::Backend);
        root.connect(a, b);
        root.connect(b, a);

        assert!(analyze(&diagram).unwrap().cyclic);
    }

    #[test]
    fn test_backward_edge_reverses_arrow() {
        let mut diagram = Diagram::new("Back");
        let mut root = diagram.root();
        let a = root.node("a", Category::Backend);
        let b = root.node("b", Category::Backend);
        root.connect(a, b);
        root.connect_back(a, b);

        assert!(analyze(&diagram).unwrap().cyclic);
    }

    #[test]
    fn test_undirected_edges_do_not_form_cycles() {
        let mut diagram = Diagram::new("Links");
        let mut root = diagram.root();
        let a = root.node("a", Category::Frontend);
        let b = root.node("b", Category::Frontend);
        root.connect(a, b);
        root.link(a, b);

        let stats = analyze(&diagram).unwrap();
        assert!(!stats.cyclic);
        assert_eq!(stats.undirected_edges, 1);
        assert_eq!(stats.isolated, 0);
    }

    #[test]
    fn test_depth() {
        let mut diagram = Diagram::new("Depth");
        diagram.root().cluster("a", |a| {
            a.cluster("b", |b| {
                b.cluster("c", |c| {
                    c.node("leaf", Category::Backend);
                });
            });
        });

        assert_eq!(analyze(&diagram).unwrap().max_depth, 2);
    }
}
