//! Property tests for edge fan-out and description determinism.

use proptest::prelude::*;

use schematic_core::{
    category::Category,
    semantic::{Diagram, Direction, Endpoint},
};

/// Builds a diagram from a list of (source, targets) fan-outs over `size` nodes.
fn build(size: usize, fans: &[(usize, Vec<usize>)]) -> Diagram {
    let mut diagram = Diagram::new("Property");
    let mut root = diagram.root();
    let nodes = root.nodes((0..size).map(|i| format!("n{i}")), Category::Backend);
    for (source, targets) in fans {
        root.fan_out(nodes[*source], targets.iter().map(|&t| nodes[t]));
    }
    diagram
}

fn shape(diagram: &Diagram) -> Vec<(Endpoint, Endpoint, Direction)> {
    diagram
        .edges()
        .iter()
        .map(|edge| (edge.source(), edge.target(), edge.direction()))
        .collect()
}

proptest! {
    #[test]
    fn fan_out_creates_one_edge_per_target_in_order(
        size in 1usize..12,
        source_seed in any::<usize>(),
        target_seeds in proptest::collection::vec(any::<usize>(), 0..20),
    ) {
        let mut diagram = Diagram::new("Fan out");
        let mut root = diagram.root();
        let nodes = root.nodes((0..size).map(|i| format!("n{i}")), Category::Frontend);
        let source = nodes[source_seed % size];
        let targets: Vec<_> = target_seeds.iter().map(|seed| nodes[seed % size]).collect();

        let created = root.fan_out(source, targets.iter().copied());

        prop_assert_eq!(created, targets.len());
        prop_assert_eq!(diagram.edges().len(), targets.len());
        for (edge, target) in diagram.edges().iter().zip(&targets) {
            prop_assert_eq!(edge.source(), Endpoint::from(source));
            prop_assert_eq!(edge.target(), Endpoint::from(*target));
            prop_assert_eq!(edge.direction(), Direction::Forward);
        }
        prop_assert!(diagram.validate().is_ok());
    }

    #[test]
    fn same_declarations_give_same_description(
        size in 1usize..8,
        raw_fans in proptest::collection::vec(
            (any::<usize>(), proptest::collection::vec(any::<usize>(), 0..6)),
            0..6,
        ),
    ) {
        let fans: Vec<(usize, Vec<usize>)> = raw_fans
            .into_iter()
            .map(|(s, ts)| (s % size, ts.into_iter().map(|t| t % size).collect()))
            .collect();

        let first = build(size, &fans);
        let second = build(size, &fans);

        let labels = |d: &Diagram| {
            d.nodes()
                .iter()
                .map(|n| n.label().to_string())
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(labels(&first), labels(&second));

        let indices = |d: &Diagram| {
            shape(d)
                .into_iter()
                .map(|(s, t, dir)| (index(s), index(t), dir))
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(indices(&first), indices(&second));
    }
}

fn index(endpoint: Endpoint) -> usize {
    match endpoint {
        Endpoint::Node(node) => node.index(),
        Endpoint::Cluster(cluster) => cluster.index(),
    }
}
