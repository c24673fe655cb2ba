//! Benchmark parameter types.

use std::fmt;

use randgraph_core::GenerationParams;

/// Seed used by every benchmark so runs draw identical graphs.
pub const SEED: u64 = 42;

/// Graph sizes shared by the generation and layout benchmarks.
pub const GRID: &[GraphBenchParams] = &[
    GraphBenchParams {
        vertex_count: 10,
        edge_count: 20,
    },
    GraphBenchParams {
        vertex_count: 100,
        edge_count: 400,
    },
    GraphBenchParams {
        vertex_count: 1_000,
        edge_count: 5_000,
    },
];

/// Size of one benchmarked graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphBenchParams {
    /// Exact number of vertices.
    pub vertex_count: usize,
    /// Exact number of edge insertions.
    pub edge_count: usize,
}

impl GraphBenchParams {
    /// Pins both ranges to the exact sizes, weighted, with no fixed seed.
    ///
    /// Benchmarks pass their own seeded RNG, so the parameters leave the
    /// seed unset.
    #[must_use]
    pub fn generation_params(self) -> GenerationParams {
        GenerationParams::new()
            .with_vertices(self.vertex_count, self.vertex_count)
            .with_edges(self.edge_count, self.edge_count)
    }
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertex_count, self.edge_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn display_names_both_sizes() {
        let params = GraphBenchParams {
            vertex_count: 7,
            edge_count: 9,
        };
        assert_eq!(params.to_string(), "n=7,m=9");
    }

    #[rstest]
    fn generation_params_pin_exact_sizes() {
        for params in GRID {
            let generation = params.generation_params();
            assert_eq!(
                generation.vertices(),
                params.vertex_count..=params.vertex_count
            );
            assert_eq!(generation.edges(), params.edge_count..=params.edge_count);
            assert_eq!(generation.seed(), None);
        }
    }
}
