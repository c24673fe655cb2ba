//! Random graph generation shared by every [`Graph`] implementation.
//!
//! The algorithm only uses the contract's mutation operations. Directed
//! graphs receive exactly the drawn number of insertion attempts, so
//! duplicate draws overwrite each other and the realized edge count may fall
//! short. Undirected graphs reject duplicate pairs and keep drawing until the
//! requested number of distinct edges exists; that request is capped at
//! `n * (n - 1) / 2` so the loop always terminates.
//!
//! If the graph rejects an insertion, the remaining draws are abandoned and
//! the error is logged; the report describes whatever was stored up to then.

use rand::Rng;
use tracing::{Span, debug, error, field, info, instrument, warn};

use crate::{
    error::Result,
    graph::{DEFAULT_WEIGHT, Graph, VertexId, Weight},
};

mod params;

pub use params::GenerationParams;

/// Outcome of a single generation run.
///
/// # Examples
/// ```
/// use randgraph_core::{GenerationParams, Graph, UndirectedGraph};
///
/// let mut graph = UndirectedGraph::new(true);
/// let params = GenerationParams::new()
///     .with_vertices(3, 3)
///     .with_edges(10, 10)
///     .with_seed(1);
/// let report = graph.generate_random(&params);
/// assert_eq!(report.vertex_count, 3);
/// assert_eq!(report.requested_edges, 10);
/// assert_eq!(report.realized_edges, 3);
/// assert!(report.capped);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GenerationReport {
    /// Number of vertices drawn for the graph.
    pub vertex_count: usize,
    /// Number of edges drawn from the edge range (zero when fewer than two
    /// vertices were drawn).
    pub requested_edges: usize,
    /// Number of logical edges present after generation.
    pub realized_edges: usize,
    /// Whether weights were randomized.
    pub weighted: bool,
    /// Whether the undirected edge request exceeded the number of distinct
    /// pairs and was reduced.
    pub capped: bool,
}

/// Returns the number of distinct loop-free edges an undirected graph with
/// `vertex_count` vertices can hold.
///
/// # Examples
/// ```
/// use randgraph_core::max_undirected_edges;
///
/// assert_eq!(max_undirected_edges(0), 0);
/// assert_eq!(max_undirected_edges(1), 0);
/// assert_eq!(max_undirected_edges(4), 6);
/// ```
#[must_use]
pub const fn max_undirected_edges(vertex_count: usize) -> usize {
    if vertex_count < 2 {
        return 0;
    }
    let (even, odd) = if vertex_count % 2 == 0 {
        (vertex_count, vertex_count - 1)
    } else {
        (vertex_count - 1, vertex_count)
    };
    (even / 2).saturating_mul(odd)
}

#[instrument(
    name = "graph.generate",
    skip(graph, params, rng),
    fields(
        directed = graph.is_directed(),
        weighted = params.weighted(),
        vertex_count = field::Empty,
        edge_count = field::Empty,
    ),
)]
pub(crate) fn generate_with<G, R>(
    graph: &mut G,
    params: &GenerationParams,
    rng: &mut R,
) -> GenerationReport
where
    G: Graph + ?Sized,
    R: Rng + ?Sized,
{
    let span = Span::current();
    let weighted = params.weighted();
    graph.set_weighted(weighted);

    let vertex_count = rng.gen_range(params.vertices());
    graph.set_vertex_count(vertex_count);
    span.record("vertex_count", vertex_count);

    if vertex_count < 2 {
        span.record("edge_count", 0_usize);
        debug!(vertex_count, "too few vertices for loop-free edges");
        return GenerationReport {
            vertex_count,
            requested_edges: 0,
            realized_edges: 0,
            weighted,
            capped: false,
        };
    }

    let requested_edges = rng.gen_range(params.edges());

    if weighted {
        let weights: Vec<Weight> = (0..vertex_count)
            .map(|_| rng.gen_range(params.weights()))
            .collect();
        graph.set_vertex_weights(&weights);
    }

    let sampler = EdgeSampler {
        vertex_count,
        params,
    };
    let mut capped = false;
    let inserted = if graph.is_directed() {
        sampler.insert_attempts(graph, rng, requested_edges)
    } else {
        let limit = max_undirected_edges(vertex_count);
        let target = if requested_edges > limit {
            warn!(
                requested = requested_edges,
                limit, "requested edges exceed distinct pairs; capping"
            );
            capped = true;
            limit
        } else {
            requested_edges
        };
        sampler.insert_distinct(graph, rng, target)
    };

    // Only reachable with a `Graph` impl that rejects in-range pairs.
    if let Err(err) = inserted {
        error!(
            error = %err,
            code = %err.code(),
            "edge insertion failed; generation stopped"
        );
    }

    let realized_edges = graph.edge_count();
    span.record("edge_count", realized_edges);
    info!(
        vertex_count,
        requested_edges, realized_edges, capped, "graph generated"
    );

    GenerationReport {
        vertex_count,
        requested_edges,
        realized_edges,
        weighted,
        capped,
    }
}

struct EdgeSampler<'a> {
    vertex_count: usize,
    params: &'a GenerationParams,
}

impl EdgeSampler<'_> {
    /// Draws two endpoints, shifting the target on collision so the pair
    /// never forms a loop. Requires at least two vertices.
    fn endpoints<R: Rng + ?Sized>(&self, rng: &mut R) -> (VertexId, VertexId) {
        let from = rng.gen_range(0..self.vertex_count);
        let to = rng.gen_range(0..self.vertex_count);
        if from == to {
            (from, (to + 1) % self.vertex_count)
        } else {
            (from, to)
        }
    }

    fn weight<R: Rng + ?Sized>(&self, rng: &mut R) -> Weight {
        if self.params.weighted() {
            rng.gen_range(self.params.weights())
        } else {
            DEFAULT_WEIGHT
        }
    }

    fn insert_attempts<G, R>(&self, graph: &mut G, rng: &mut R, attempts: usize) -> Result<()>
    where
        G: Graph + ?Sized,
        R: Rng + ?Sized,
    {
        for _ in 0..attempts {
            let (from, to) = self.endpoints(rng);
            let weight = self.weight(rng);
            graph.add_edge(from, to, weight)?;
        }
        Ok(())
    }

    fn insert_distinct<G, R>(&self, graph: &mut G, rng: &mut R, target: usize) -> Result<()>
    where
        G: Graph + ?Sized,
        R: Rng + ?Sized,
    {
        let mut added = 0_usize;
        while added < target {
            let (from, to) = self.endpoints(rng);
            if graph.has_edge(from, to) {
                continue;
            }
            let weight = self.weight(rng);
            graph.add_edge(from, to, weight)?;
            added += 1;
        }
        Ok(())
    }
}
