//! The graph contract shared by directed and undirected storage.
//!
//! [`Graph`] is the capability set consumed by the generator and by
//! presentation layers. Storage lives in [`AdjacencyGraph`], parameterized by
//! an [`EdgeDirection`] strategy, and [`AnyGraph`] offers a tagged variant for
//! callers that pick the direction at runtime.

use std::collections::HashMap;

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{
    error::Result,
    generate::{self, GenerationParams, GenerationReport},
};

mod adjacency;
mod any;

pub use adjacency::{
    AdjacencyGraph, Directed, DirectedGraph, EdgeDirection, Undirected, UndirectedGraph,
};
pub use any::{AnyGraph, GraphKind};

/// Index of a vertex, valid in `0..vertex_count`.
pub type VertexId = usize;

/// Integer weight attached to edges and vertices.
pub type Weight = i32;

/// Mapping from neighbour index to the weight of the edge leading to it.
pub type Adjacency = HashMap<VertexId, Weight>;

/// Weight given to new vertices and to edges added without an explicit weight.
pub const DEFAULT_WEIGHT: Weight = 1;

/// A single logical edge as reported by [`Graph::edges`].
///
/// Ordering compares `from`, then `to`, then `weight`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    /// Source endpoint (the lower endpoint for undirected graphs).
    pub from: VertexId,
    /// Target endpoint.
    pub to: VertexId,
    /// Stored edge weight.
    pub weight: Weight,
}

/// Capability set for weighted graphs with a dense vertex domain.
///
/// Implementations decide whether edges are mirrored; every other behaviour
/// (range checks, reset semantics, weight storage) is shared.
///
/// # Examples
/// ```
/// use randgraph_core::{Graph, UndirectedGraph};
///
/// let mut graph = UndirectedGraph::new(true);
/// graph.set_vertex_count(3);
/// graph.add_edge(0, 2, 7)?;
/// assert!(graph.has_edge(2, 0));
/// assert_eq!(graph.weight(2, 0)?, 7);
///
/// graph.remove_edge(2, 0);
/// assert!(!graph.has_edge(0, 2));
/// # Ok::<(), randgraph_core::GraphError>(())
/// ```
pub trait Graph {
    /// Resets the graph to `count` isolated vertices with default weights.
    ///
    /// This is a hard reset: all adjacency is discarded even when `count`
    /// equals the current vertex count.
    fn set_vertex_count(&mut self, count: usize);

    /// Returns the number of addressable vertices.
    fn vertex_count(&self) -> usize;

    /// Stores an edge, overwriting the weight of an existing one.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::VertexOutOfRange`] when either endpoint is
    /// not below [`Graph::vertex_count`].
    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()>;

    /// Stores an edge with [`DEFAULT_WEIGHT`].
    ///
    /// # Errors
    /// Same as [`Graph::add_edge`].
    fn add_unit_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.add_edge(from, to, DEFAULT_WEIGHT)
    }

    /// Removes an edge if it exists. Out-of-range endpoints are ignored.
    fn remove_edge(&mut self, from: VertexId, to: VertexId);

    /// Reports whether an edge is stored. Out-of-range endpoints yield `false`.
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool;

    /// Returns the weight of an existing edge.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::NoSuchEdge`] when [`Graph::has_edge`] would
    /// return `false`, including for out-of-range endpoints.
    fn weight(&self, from: VertexId, to: VertexId) -> Result<Weight>;

    /// Updates the weight of an existing edge without changing topology.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::NoSuchEdge`] when the edge is absent.
    fn set_weight(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()>;

    /// Returns a read-only view of `vertex`'s outgoing edges.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::VertexOutOfRange`] for invalid indices.
    fn neighbors(&self, vertex: VertexId) -> Result<&Adjacency>;

    /// Replaces all vertex weights.
    ///
    /// The call is ignored when `weights.len()` differs from the vertex
    /// count; callers needing confirmation must compare lengths first.
    fn set_vertex_weights(&mut self, weights: &[Weight]);

    /// Returns the weight of `vertex`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::VertexOutOfRange`] for invalid indices.
    fn vertex_weight(&self, vertex: VertexId) -> Result<Weight>;

    /// Returns all vertex weights in index order.
    fn vertex_weights(&self) -> &[Weight];

    /// Reports whether weights are meaningful for this graph.
    fn is_weighted(&self) -> bool;

    /// Updates the weighted flag. Stored weights are left untouched.
    fn set_weighted(&mut self, weighted: bool);

    /// Reports whether `(u, v)` and `(v, u)` are independent edges.
    fn is_directed(&self) -> bool;

    /// Returns every logical edge once, sorted by endpoints.
    ///
    /// Undirected edges are reported with `from <= to`.
    fn edges(&self) -> Vec<Edge> {
        let directed = self.is_directed();
        let mut edges: Vec<Edge> = (0..self.vertex_count())
            .filter_map(|from| self.neighbors(from).ok().map(|adjacency| (from, adjacency)))
            .flat_map(|(from, adjacency)| {
                adjacency
                    .iter()
                    .filter(move |&(&to, _)| directed || from <= to)
                    .map(move |(&to, &weight)| Edge { from, to, weight })
            })
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Returns the number of logical edges, counting mirrored pairs once.
    fn edge_count(&self) -> usize {
        let directed = self.is_directed();
        (0..self.vertex_count())
            .filter_map(|from| self.neighbors(from).ok().map(|adjacency| (from, adjacency)))
            .map(|(from, adjacency)| {
                if directed {
                    adjacency.len()
                } else {
                    adjacency.keys().filter(|&&to| from <= to).count()
                }
            })
            .sum()
    }

    /// Replaces the graph with a random one satisfying `params`.
    ///
    /// Uses the seed from [`GenerationParams::seed`] when present and system
    /// entropy otherwise.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::{DirectedGraph, GenerationParams, Graph};
    ///
    /// let mut graph = DirectedGraph::new(false);
    /// let params = GenerationParams::new()
    ///     .with_vertices(6, 6)
    ///     .with_edges(3, 3)
    ///     .with_weighted(true);
    /// let report = graph.generate_random(&params);
    /// assert_eq!(graph.vertex_count(), 6);
    /// assert!(graph.is_weighted());
    /// assert!(report.realized_edges <= 3);
    /// ```
    fn generate_random(&mut self, params: &GenerationParams) -> GenerationReport
    where
        Self: Sized,
    {
        let mut rng = params
            .seed()
            .map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
        generate::generate_with(self, params, &mut rng)
    }

    /// Replaces the graph with a random one drawn from `rng`.
    fn generate_random_with<R>(
        &mut self,
        params: &GenerationParams,
        rng: &mut R,
    ) -> GenerationReport
    where
        Self: Sized,
        R: Rng + ?Sized,
    {
        generate::generate_with(self, params, rng)
    }
}
