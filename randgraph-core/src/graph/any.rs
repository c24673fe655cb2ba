//! Runtime selection between directed and undirected storage.

use std::fmt;

use super::{Adjacency, DirectedGraph, Edge, Graph, UndirectedGraph, VertexId, Weight};
use crate::error::Result;

/// Names the edge semantics of a graph.
///
/// # Examples
/// ```
/// use randgraph_core::{Graph, GraphKind};
///
/// let graph = GraphKind::Undirected.empty(true);
/// assert!(!graph.is_directed());
/// assert_eq!(graph.kind(), GraphKind::Undirected);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum GraphKind {
    /// `(u, v)` and `(v, u)` are independent edges.
    #[default]
    Directed,
    /// Each edge is stored in both directions.
    Undirected,
}

impl GraphKind {
    /// Returns the stable lowercase label for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }

    /// Creates an empty graph of this kind.
    #[must_use]
    pub const fn empty(self, weighted: bool) -> AnyGraph {
        match self {
            Self::Directed => AnyGraph::Directed(DirectedGraph::new(weighted)),
            Self::Undirected => AnyGraph::Undirected(UndirectedGraph::new(weighted)),
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A graph whose direction is chosen at runtime.
///
/// Every [`Graph`] operation is forwarded to the wrapped variant, so callers
/// can hold one value and swap its kind on regeneration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AnyGraph {
    /// Directed storage.
    Directed(DirectedGraph),
    /// Undirected storage.
    Undirected(UndirectedGraph),
}

impl AnyGraph {
    /// Returns the kind of the wrapped graph.
    #[must_use]
    pub const fn kind(&self) -> GraphKind {
        match self {
            Self::Directed(_) => GraphKind::Directed,
            Self::Undirected(_) => GraphKind::Undirected,
        }
    }
}

impl Default for AnyGraph {
    fn default() -> Self {
        GraphKind::default().empty(true)
    }
}

impl From<DirectedGraph> for AnyGraph {
    fn from(graph: DirectedGraph) -> Self {
        Self::Directed(graph)
    }
}

impl From<UndirectedGraph> for AnyGraph {
    fn from(graph: UndirectedGraph) -> Self {
        Self::Undirected(graph)
    }
}

macro_rules! forward {
    ($self:ident, $graph:ident => $call:expr) => {
        match $self {
            AnyGraph::Directed($graph) => $call,
            AnyGraph::Undirected($graph) => $call,
        }
    };
}

impl Graph for AnyGraph {
    fn set_vertex_count(&mut self, count: usize) {
        forward!(self, graph => graph.set_vertex_count(count));
    }

    fn vertex_count(&self) -> usize {
        forward!(self, graph => graph.vertex_count())
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        forward!(self, graph => graph.add_edge(from, to, weight))
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) {
        forward!(self, graph => graph.remove_edge(from, to));
    }

    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        forward!(self, graph => graph.has_edge(from, to))
    }

    fn weight(&self, from: VertexId, to: VertexId) -> Result<Weight> {
        forward!(self, graph => graph.weight(from, to))
    }

    fn set_weight(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        forward!(self, graph => graph.set_weight(from, to, weight))
    }

    fn neighbors(&self, vertex: VertexId) -> Result<&Adjacency> {
        forward!(self, graph => graph.neighbors(vertex))
    }

    fn set_vertex_weights(&mut self, weights: &[Weight]) {
        forward!(self, graph => graph.set_vertex_weights(weights));
    }

    fn vertex_weight(&self, vertex: VertexId) -> Result<Weight> {
        forward!(self, graph => graph.vertex_weight(vertex))
    }

    fn vertex_weights(&self) -> &[Weight] {
        forward!(self, graph => graph.vertex_weights())
    }

    fn is_weighted(&self) -> bool {
        forward!(self, graph => graph.is_weighted())
    }

    fn set_weighted(&mut self, weighted: bool) {
        forward!(self, graph => graph.set_weighted(weighted));
    }

    fn is_directed(&self) -> bool {
        forward!(self, graph => graph.is_directed())
    }

    fn edges(&self) -> Vec<Edge> {
        forward!(self, graph => graph.edges())
    }

    fn edge_count(&self) -> usize {
        forward!(self, graph => graph.edge_count())
    }
}
