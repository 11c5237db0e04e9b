//! The diagram description.

use log::{debug, trace};

use super::{
    Cluster, ClusterHandle, Direction, Edge, EdgeEnd, Endpoint, GraphError, Member, Node,
    NodeHandle, Scope, element::DiagramKey,
};
use crate::{category::Category, identifier::Id};

/// Everything declared for one diagram: nodes, clusters and edges, in the
/// order they were created.
///
/// A `Diagram` only accumulates. Handles it issues are tied to it, and
/// [`Diagram::validate`] reports edges that use handles of another diagram.
///
/// # Examples
///
/// ```
/// use schematic_core::{category::Category, semantic::Diagram};
///
/// let mut diagram = Diagram::new("Architecture");
/// let mut root = diagram.root();
/// let db = root.node("MariaDB", Category::Datastore);
/// root.cluster("Server", |server| {
///     let main = server.node("main.rs", Category::Backend);
///     server.connect(main, db);
/// });
///
/// assert_eq!(diagram.nodes().len(), 2);
/// assert_eq!(diagram.edges().len(), 1);
/// assert!(diagram.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Diagram {
    key: DiagramKey,
    title: String,
    nodes: Vec<Node>,
    clusters: Vec<Cluster>,
    members: Vec<Member>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Creates an empty diagram with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        debug!(title = title.as_str(); "Diagram opened");
        Self {
            key: DiagramKey::next(),
            title,
            nodes: Vec::new(),
            clusters: Vec::new(),
            members: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// All nodes, indexed by [`NodeHandle::index`].
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All clusters, indexed by [`ClusterHandle::index`].
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// All edges in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Top-level members in creation order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Looks up a node, returning `None` for handles of another diagram.
    pub fn node(&self, handle: NodeHandle) -> Option<&Node> {
        if handle.owner() != self.key {
            return None;
        }
        self.nodes.get(handle.index())
    }

    /// Looks up a cluster, returning `None` for handles of another diagram.
    pub fn cluster(&self, handle: ClusterHandle) -> Option<&Cluster> {
        if handle.owner() != self.key {
            return None;
        }
        self.clusters.get(handle.index())
    }

    /// Returns `true` if the endpoint was issued by this diagram.
    pub fn owns(&self, endpoint: Endpoint) -> bool {
        match endpoint {
            Endpoint::Node(node) => self.node(node).is_some(),
            Endpoint::Cluster(cluster) => self.cluster(cluster).is_some(),
        }
    }

    /// Opens a scope at the top level of the diagram.
    pub fn root(&mut self) -> Scope<'_> {
        Scope::new(self, None)
    }

    /// Reopens the scope of an existing cluster.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ForeignCluster`] if the cluster belongs to
    /// another diagram.
    pub fn scope(&mut self, cluster: ClusterHandle) -> Result<Scope<'_>, GraphError> {
        if self.cluster(cluster).is_none() {
            return Err(GraphError::ForeignCluster {
                index: cluster.index(),
            });
        }
        Ok(Scope::new(self, Some(cluster)))
    }

    /// Records an edge. Endpoints are not checked here; see [`Diagram::validate`].
    pub fn add_edge(
        &mut self,
        source: impl Into<Endpoint>,
        target: impl Into<Endpoint>,
        direction: Direction,
    ) {
        let edge = Edge::new(source.into(), target.into(), direction);
        trace!(index = self.edges.len(), direction:% = direction; "Edge added");
        self.edges.push(edge);
    }

    /// Records one edge from `source` to each of `targets`, in order.
    ///
    /// Returns the number of edges created.
    pub fn fan_out<I>(
        &mut self,
        source: impl Into<Endpoint>,
        targets: I,
        direction: Direction,
    ) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Endpoint>,
    {
        let source = source.into();
        let before = self.edges.len();
        for target in targets {
            self.add_edge(source, target, direction);
        }
        self.edges.len() - before
    }

    /// Records one edge from each of `sources` to `target`, in order.
    ///
    /// Returns the number of edges created.
    pub fn fan_in<I>(
        &mut self,
        sources: I,
        target: impl Into<Endpoint>,
        direction: Direction,
    ) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Endpoint>,
    {
        let target = target.into();
        let before = self.edges.len();
        for source in sources {
            self.add_edge(source, target, direction);
        }
        self.edges.len() - before
    }

    /// Resolves the node an edge attaches to.
    ///
    /// A node endpoint is its own anchor. A cluster endpoint is anchored on
    /// the first node found depth-first in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyCluster`] if the cluster holds no node at
    /// any depth, and [`GraphError::ForeignNode`] or
    /// [`GraphError::ForeignCluster`] if the handle belongs to another diagram.
    pub fn anchor(&self, endpoint: Endpoint) -> Result<NodeHandle, GraphError> {
        match endpoint {
            Endpoint::Node(node) => match self.node(node) {
                Some(_) => Ok(node),
                None => Err(GraphError::ForeignNode {
                    index: node.index(),
                }),
            },
            Endpoint::Cluster(handle) => {
                let cluster = self.cluster(handle).ok_or(GraphError::ForeignCluster {
                    index: handle.index(),
                })?;
                self.first_node(cluster).ok_or_else(|| GraphError::EmptyCluster {
                    path: cluster.path().to_string(),
                })
            }
        }
    }

    fn first_node(&self, cluster: &Cluster) -> Option<NodeHandle> {
        cluster.members().iter().find_map(|member| match member {
            Member::Node(node) => Some(*node),
            Member::Cluster(child) => self.first_node(&self.clusters[child.index()]),
        })
    }

    /// Checks that every edge endpoint was issued by this diagram and that
    /// cluster endpoints have a node to attach to.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in edge declaration order.
    pub fn validate(&self) -> Result<(), GraphError> {
        for (index, edge) in self.edges.iter().enumerate() {
            for (end, endpoint) in [
                (EdgeEnd::Source, edge.source()),
                (EdgeEnd::Target, edge.target()),
            ] {
                if !self.owns(endpoint) {
                    return Err(GraphError::ForeignEndpoint { edge: index, end });
                }
                self.anchor(endpoint)?;
            }
        }
        Ok(())
    }

    pub(crate) fn insert_node(
        &mut self,
        parent: Option<ClusterHandle>,
        label: String,
        category: Category,
    ) -> NodeHandle {
        let handle = NodeHandle::new(self.key, self.nodes.len());
        trace!(label = label.as_str(), category:% = category; "Node added");
        self.nodes.push(Node::new(label, category, parent));
        self.push_member(parent, Member::Node(handle));
        handle
    }

    pub(crate) fn insert_cluster(
        &mut self,
        parent: Option<ClusterHandle>,
        label: String,
    ) -> ClusterHandle {
        let handle = ClusterHandle::new(self.key, self.clusters.len());
        let (path, depth) = match parent {
            Some(parent) => {
                let parent = &self.clusters[parent.index()];
                (
                    parent.path().create_nested(Id::new(&label)),
                    parent.depth() + 1,
                )
            }
            None => (Id::new(&label), 0),
        };
        trace!(path:% = path, depth = depth; "Cluster added");
        self.clusters.push(Cluster::new(label, path, depth, parent));
        self.push_member(parent, Member::Cluster(handle));
        handle
    }

    fn push_member(&mut self, parent: Option<ClusterHandle>, member: Member) {
        match parent {
            Some(parent) => self.clusters[parent.index()].push_member(member),
            None => self.members.push(member),
        }
    }
}
