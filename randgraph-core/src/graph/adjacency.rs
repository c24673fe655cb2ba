//! Adjacency-list storage parameterized by an edge-mirroring strategy.

use std::{fmt, marker::PhantomData};

use tracing::debug;

use super::{Adjacency, DEFAULT_WEIGHT, Graph, VertexId, Weight};
use crate::error::{GraphError, Result};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Directed {}
    impl Sealed for super::Undirected {}
}

/// Decides how a logical edge maps onto adjacency entries.
///
/// Implemented by the zero-sized [`Directed`] and [`Undirected`] markers.
/// Callers guarantee both endpoints are in range before calling.
pub trait EdgeDirection:
    sealed::Sealed + Clone + Copy + fmt::Debug + Default + Eq + PartialEq
{
    /// Whether `(u, v)` and `(v, u)` are independent edges.
    const DIRECTED: bool;

    /// Inserts or overwrites the entries backing the edge `from -> to`.
    fn store(adjacency: &mut [Adjacency], from: VertexId, to: VertexId, weight: Weight);

    /// Removes the entries backing the edge `from -> to`.
    fn erase(adjacency: &mut [Adjacency], from: VertexId, to: VertexId);
}

/// Edges are stored once, in the direction they were added.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Directed;

/// Edges are stored in both directions with the same weight.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Undirected;

impl EdgeDirection for Directed {
    const DIRECTED: bool = true;

    fn store(adjacency: &mut [Adjacency], from: VertexId, to: VertexId, weight: Weight) {
        if let Some(entries) = adjacency.get_mut(from) {
            entries.insert(to, weight);
        }
    }

    fn erase(adjacency: &mut [Adjacency], from: VertexId, to: VertexId) {
        if let Some(entries) = adjacency.get_mut(from) {
            entries.remove(&to);
        }
    }
}

impl EdgeDirection for Undirected {
    const DIRECTED: bool = false;

    fn store(adjacency: &mut [Adjacency], from: VertexId, to: VertexId, weight: Weight) {
        Directed::store(adjacency, from, to, weight);
        Directed::store(adjacency, to, from, weight);
    }

    fn erase(adjacency: &mut [Adjacency], from: VertexId, to: VertexId) {
        Directed::erase(adjacency, from, to);
        Directed::erase(adjacency, to, from);
    }
}

/// Weighted graph backed by one hash map per vertex.
///
/// # Examples
/// ```
/// use randgraph_core::{DirectedGraph, Graph};
///
/// let mut graph = DirectedGraph::new(true);
/// graph.set_vertex_count(2);
/// graph.add_edge(0, 1, 4)?;
/// assert!(graph.has_edge(0, 1));
/// assert!(!graph.has_edge(1, 0));
/// # Ok::<(), randgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AdjacencyGraph<D: EdgeDirection> {
    adjacency: Vec<Adjacency>,
    vertex_weights: Vec<Weight>,
    weighted: bool,
    direction: PhantomData<D>,
}

/// Graph whose edges are independent per direction.
pub type DirectedGraph = AdjacencyGraph<Directed>;

/// Graph whose edges are mirrored across both endpoints.
pub type UndirectedGraph = AdjacencyGraph<Undirected>;

impl<D: EdgeDirection> AdjacencyGraph<D> {
    /// Creates an empty graph with the given weighted flag.
    #[must_use]
    pub const fn new(weighted: bool) -> Self {
        Self {
            adjacency: Vec::new(),
            vertex_weights: Vec::new(),
            weighted,
            direction: PhantomData,
        }
    }

    /// Creates a graph with `count` isolated vertices.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::{Graph, UndirectedGraph};
    ///
    /// let graph = UndirectedGraph::with_vertex_count(4, false);
    /// assert_eq!(graph.vertex_count(), 4);
    /// assert_eq!(graph.vertex_weights(), &[1, 1, 1, 1]);
    /// ```
    #[must_use]
    pub fn with_vertex_count(count: usize, weighted: bool) -> Self {
        let mut graph = Self::new(weighted);
        graph.set_vertex_count(count);
        graph
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex < self.adjacency.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.adjacency.len(),
            })
        }
    }
}

impl<D: EdgeDirection> Graph for AdjacencyGraph<D> {
    fn set_vertex_count(&mut self, count: usize) {
        self.adjacency.clear();
        self.adjacency.resize_with(count, Adjacency::new);
        self.vertex_weights.clear();
        self.vertex_weights.resize(count, DEFAULT_WEIGHT);
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        D::store(&mut self.adjacency, from, to, weight);
        Ok(())
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) {
        if from < self.vertex_count() && to < self.vertex_count() {
            D::erase(&mut self.adjacency, from, to);
        }
    }

    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        to < self.vertex_count()
            && self
                .adjacency
                .get(from)
                .is_some_and(|entries| entries.contains_key(&to))
    }

    fn weight(&self, from: VertexId, to: VertexId) -> Result<Weight> {
        if to >= self.vertex_count() {
            return Err(GraphError::NoSuchEdge { from, to });
        }
        self.adjacency
            .get(from)
            .and_then(|entries| entries.get(&to))
            .copied()
            .ok_or(GraphError::NoSuchEdge { from, to })
    }

    fn set_weight(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        if !self.has_edge(from, to) {
            return Err(GraphError::NoSuchEdge { from, to });
        }
        D::store(&mut self.adjacency, from, to, weight);
        Ok(())
    }

    fn neighbors(&self, vertex: VertexId) -> Result<&Adjacency> {
        self.adjacency
            .get(vertex)
            .ok_or(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.adjacency.len(),
            })
    }

    fn set_vertex_weights(&mut self, weights: &[Weight]) {
        if weights.len() != self.vertex_weights.len() {
            debug!(
                provided = weights.len(),
                vertex_count = self.vertex_weights.len(),
                "ignoring vertex weights with mismatched length"
            );
            return;
        }
        self.vertex_weights.copy_from_slice(weights);
    }

    fn vertex_weight(&self, vertex: VertexId) -> Result<Weight> {
        self.vertex_weights
            .get(vertex)
            .copied()
            .ok_or(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_weights.len(),
            })
    }

    fn vertex_weights(&self) -> &[Weight] {
        &self.vertex_weights
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }

    fn set_weighted(&mut self, weighted: bool) {
        self.weighted = weighted;
    }

    fn is_directed(&self) -> bool {
        D::DIRECTED
    }
}
