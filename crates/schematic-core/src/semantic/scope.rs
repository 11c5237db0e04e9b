//! Scoped construction of diagram content.

use super::{ClusterHandle, Diagram, Direction, Endpoint, NodeHandle};
use crate::{category::Category, identifier::Id};

/// A position in a [`Diagram`] where new nodes and clusters are placed.
///
/// The root scope places elements at the top level. [`Scope::cluster`] opens
/// a nested scope for the duration of a closure; everything created inside
/// the closure is grouped under the new cluster. Edges are diagram-wide and
/// may join elements of any scope.
///
/// # Examples
///
/// ```
/// use schematic_core::{category::Category, semantic::Diagram};
///
/// let mut diagram = Diagram::new("Client");
/// diagram.root().cluster("Client", |client| {
///     let index = client.node("index.html", Category::Frontend);
///     let pages = client.cluster("Pages", |pages| {
///         pages.nodes(["timeline", "post"], Category::Frontend)
///     });
///     client.fan_out(index, pages.iter().copied());
/// });
///
/// assert_eq!(diagram.clusters().len(), 2);
/// assert_eq!(diagram.edges().len(), 2);
/// ```
#[derive(Debug)]
pub struct Scope<'d> {
    diagram: &'d mut Diagram,
    cluster: Option<ClusterHandle>,
}

impl<'d> Scope<'d> {
    pub(crate) fn new(diagram: &'d mut Diagram, cluster: Option<ClusterHandle>) -> Self {
        Self { diagram, cluster }
    }

    /// The cluster this scope adds to, `None` at the top level.
    pub fn cluster_handle(&self) -> Option<ClusterHandle> {
        self.cluster
    }

    /// Qualified path of the enclosing cluster.
    pub fn path(&self) -> Option<Id> {
        self.cluster
            .and_then(|cluster| self.diagram.cluster(cluster))
            .map(|cluster| cluster.path())
    }

    /// Creates a node in this scope.
    pub fn node(&mut self, label: impl Into<String>, category: Category) -> NodeHandle {
        self.diagram.insert_node(self.cluster, label.into(), category)
    }

    /// Creates one node per label, all of the same category, in input order.
    pub fn nodes<I>(&mut self, labels: I, category: Category) -> Vec<NodeHandle>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        labels
            .into_iter()
            .map(|label| self.node(label, category))
            .collect()
    }

    /// Creates a cluster in this scope and runs `build` inside it.
    ///
    /// The value returned by `build` is passed through. The new cluster's
    /// handle is available inside `build` via [`Scope::cluster_handle`].
    pub fn cluster<R>(
        &mut self,
        label: impl Into<String>,
        build: impl FnOnce(&mut Scope<'_>) -> R,
    ) -> R {
        let handle = self.diagram.insert_cluster(self.cluster, label.into());
        let mut inner = Scope::new(&mut *self.diagram, Some(handle));
        build(&mut inner)
    }

    /// Adds an arrow from `source` to `target`.
    pub fn connect(&mut self, source: impl Into<Endpoint>, target: impl Into<Endpoint>) {
        self.diagram.add_edge(source, target, Direction::Forward);
    }

    /// Adds an arrow pointing from `target` back to `source`.
    pub fn connect_back(&mut self, source: impl Into<Endpoint>, target: impl Into<Endpoint>) {
        self.diagram.add_edge(source, target, Direction::Backward);
    }

    /// Adds a plain line between `source` and `target`.
    pub fn link(&mut self, source: impl Into<Endpoint>, target: impl Into<Endpoint>) {
        self.diagram.add_edge(source, target, Direction::Undirected);
    }

    /// Adds an arrow from `source` to each target, in order.
    ///
    /// Returns the number of edges created, which equals the number of targets.
    pub fn fan_out<I>(&mut self, source: impl Into<Endpoint>, targets: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Endpoint>,
    {
        self.diagram.fan_out(source, targets, Direction::Forward)
    }

    /// Adds a plain line from `source` to each target, in order.
    pub fn link_out<I>(&mut self, source: impl Into<Endpoint>, targets: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Endpoint>,
    {
        self.diagram.fan_out(source, targets, Direction::Undirected)
    }

    /// Adds an arrow from each source to `target`, in order.
    pub fn fan_in<I>(&mut self, sources: I, target: impl Into<Endpoint>) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Endpoint>,
    {
        self.diagram.fan_in(sources, target, Direction::Forward)
    }

    /// Adds an arrow from every source to every target.
    ///
    /// Edges are ordered by source first, then by target.
    pub fn connect_all<S, T>(&mut self, sources: &[S], targets: &[T]) -> usize
    where
        S: Copy + Into<Endpoint>,
        T: Copy + Into<Endpoint>,
    {
        sources
            .iter()
            .map(|&source| self.fan_out(source, targets.iter().copied()))
            .sum()
    }

    /// Adds an arrow from `sources[i]` to `targets[i]` for every index both
    /// slices have.
    pub fn zip<S, T>(&mut self, sources: &[S], targets: &[T]) -> usize
    where
        S: Copy + Into<Endpoint>,
        T: Copy + Into<Endpoint>,
    {
        let mut created = 0;
        for (&source, &target) in sources.iter().zip(targets) {
            self.connect(source, target);
            created += 1;
        }
        created
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::Edge;

    fn endpoints(edges: &[Edge]) -> Vec<(Endpoint, Endpoint)> {
        edges.iter().map(|e| (e.source(), e.target())).collect()
    }

    #[test]
    fn test_fan_out_preserves_order() {
        let mut diagram = Diagram::new("Fan out");
        let mut root = diagram.root();
        let main = root.node("main.rs", Category::Backend);
        let routes = root.nodes(["route", "user", "post"], Category::Backend);

        assert_eq!(root.fan_out(main, routes.iter().copied()), 3);

        let expected: Vec<(Endpoint, Endpoint)> =
            routes.iter().map(|&r| (main.into(), r.into())).collect();
        assert_eq!(endpoints(diagram.edges()), expected);
    }

    #[test]
    fn test_fan_out_with_no_targets() {
        let mut diagram = Diagram::new("Empty fan out");
        let mut root = diagram.root();
        let main = root.node("main.rs", Category::Backend);

        assert_eq!(root.fan_out(main, Vec::<NodeHandle>::new()), 0);
        assert!(diagram.edges().is_empty());
    }

    #[test]
    fn test_link_out_is_undirected() {
        let mut diagram = Diagram::new("Links");
        let mut root = diagram.root();
        let index = root.node("index.ts", Category::Frontend);
        let parts = root.nodes(["TextField", "Section"], Category::Frontend);
        root.link_out(index, parts);

        assert!(
            diagram
                .edges()
                .iter()
                .all(|edge| edge.direction() == Direction::Undirected)
        );
    }

    #[test]
    fn test_fan_in() {
        let mut diagram = Diagram::new("Fan in");
        let mut root = diagram.root();
        let pages = root.nodes(["timeline", "post"], Category::Frontend);
        let index = root.node("index.ts", Category::Frontend);

        assert_eq!(root.fan_in(pages.iter().copied(), index), 2);
        assert!(
            diagram
                .edges()
                .iter()
                .all(|e| e.target() == Endpoint::from(index))
        );
    }

    #[test]
    fn test_connect_all_orders_by_source_then_target() {
        let mut diagram = Diagram::new("Cross");
        let mut root = diagram.root();
        let sources = root.nodes(["a", "b"], Category::Frontend);
        let targets = root.nodes(["x", "y", "z"], Category::Frontend);

        assert_eq!(root.connect_all(&sources, &targets), 6);

        let mut expected: Vec<(Endpoint, Endpoint)> = Vec::new();
        for &s in &sources {
            for &t in &targets {
                expected.push((s.into(), t.into()));
            }
        }
        assert_eq!(endpoints(diagram.edges()), expected);
    }

    #[test]
    fn test_zip_stops_at_shorter_side() {
        let mut diagram = Diagram::new("Zip");
        let mut root = diagram.root();
        let routes = root.nodes(["route", "user", "post"], Category::Backend);
        let services = root.nodes(["service", "user"], Category::Backend);

        assert_eq!(root.zip(&routes, &services), 2);
        assert_eq!(
            endpoints(diagram.edges()),
            vec![
                (Endpoint::from(routes[0]), Endpoint::from(services[0])),
                (Endpoint::from(routes[1]), Endpoint::from(services[1]))
            ]
        );
    }

    #[test]
    fn test_connect_back_direction() {
        let mut diagram = Diagram::new("Back");
        let mut root = diagram.root();
        let a = root.node("a", Category::Backend);
        let b = root.node("b", Category::Backend);
        root.connect_back(a, b);

        assert_eq!(diagram.edges()[0].direction(), Direction::Backward);
        assert_eq!(diagram.edges()[0].source(), Endpoint::from(a));
    }

    #[test]
    fn test_scope_path() {
        let mut diagram = Diagram::new("Path");
        let mut root = diagram.root();
        assert!(root.path().is_none());

        let path = root.cluster("Server", |server| {
            server.cluster("Routes", |routes| routes.path())
        });
        assert_eq!(path.unwrap(), "Server::Routes");
    }
}
