//! Elements of a diagram description: nodes, clusters, edges and the handles
//! that refer to them.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{category::Category, identifier::Id};

/// Identity of the [`Diagram`](super::Diagram) that issued a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagramKey(u64);

impl DiagramKey {
    /// Returns a key no other diagram in this process has.
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Refers to a node created in a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    owner: DiagramKey,
    index: usize,
}

impl NodeHandle {
    pub(crate) fn new(owner: DiagramKey, index: usize) -> Self {
        Self { owner, index }
    }

    /// Position of the node in creation order.
    pub fn index(self) -> usize {
        self.index
    }

    pub(crate) fn owner(self) -> DiagramKey {
        self.owner
    }
}

/// Refers to a cluster created in a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClusterHandle {
    owner: DiagramKey,
    index: usize,
}

impl ClusterHandle {
    pub(crate) fn new(owner: DiagramKey, index: usize) -> Self {
        Self { owner, index }
    }

    /// Position of the cluster in creation order.
    pub fn index(self) -> usize {
        self.index
    }

    pub(crate) fn owner(self) -> DiagramKey {
        self.owner
    }
}

/// One end of an edge.
///
/// Edges usually join nodes. An edge may also end on a cluster, in which case
/// it is drawn to the cluster border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Node(NodeHandle),
    Cluster(ClusterHandle),
}

impl Endpoint {
    pub(crate) fn owner(self) -> DiagramKey {
        match self {
            Endpoint::Node(node) => node.owner(),
            Endpoint::Cluster(cluster) => cluster.owner(),
        }
    }
}

impl From<NodeHandle> for Endpoint {
    fn from(node: NodeHandle) -> Self {
        Endpoint::Node(node)
    }
}

impl From<&NodeHandle> for Endpoint {
    fn from(node: &NodeHandle) -> Self {
        Endpoint::Node(*node)
    }
}

impl From<ClusterHandle> for Endpoint {
    fn from(cluster: ClusterHandle) -> Self {
        Endpoint::Cluster(cluster)
    }
}

/// A direct child of the diagram root or of a cluster, in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Member {
    Node(NodeHandle),
    Cluster(ClusterHandle),
}

/// Where the arrowhead of an edge is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Arrow from source to target.
    #[default]
    Forward,

    /// Arrow pointing back at the source.
    Backward,

    /// Plain line without arrowheads.
    Undirected,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
            Direction::Undirected => "undirected",
        };
        f.write_str(name)
    }
}

/// A labeled vertex representing one architectural element.
#[derive(Debug, Clone)]
pub struct Node {
    label: String,
    category: Category,
    parent: Option<ClusterHandle>,
}

impl Node {
    pub(crate) fn new(label: String, category: Category, parent: Option<ClusterHandle>) -> Self {
        Self {
            label,
            category,
            parent,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The cluster this node was created in, `None` for top-level nodes.
    pub fn parent(&self) -> Option<ClusterHandle> {
        self.parent
    }
}

/// A named group of nodes and nested clusters.
#[derive(Debug, Clone)]
pub struct Cluster {
    label: String,
    path: Id,
    depth: usize,
    parent: Option<ClusterHandle>,
    members: Vec<Member>,
}

impl Cluster {
    pub(crate) fn new(
        label: String,
        path: Id,
        depth: usize,
        parent: Option<ClusterHandle>,
    ) -> Self {
        Self {
            label,
            path,
            depth,
            parent,
            members: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Qualified path built from the labels of all enclosing clusters.
    pub fn path(&self) -> Id {
        self.path
    }

    /// Nesting depth; top-level clusters have depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn parent(&self) -> Option<ClusterHandle> {
        self.parent
    }

    /// Direct children in creation order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub(crate) fn push_member(&mut self, member: Member) {
        self.members.push(member);
    }
}

/// A relationship between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    source: Endpoint,
    target: Endpoint,
    direction: Direction,
}

impl Edge {
    pub(crate) fn new(source: Endpoint, target: Endpoint, direction: Direction) -> Self {
        Self {
            source,
            target,
            direction,
        }
    }

    pub fn source(&self) -> Endpoint {
        self.source
    }

    pub fn target(&self) -> Endpoint {
        self.target
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}
