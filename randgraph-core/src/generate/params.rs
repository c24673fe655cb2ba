//! Parameters accepted by random graph generation.

use std::ops::RangeInclusive;

use crate::graph::Weight;

/// Bounds and options for [`crate::Graph::generate_random`].
///
/// Bounds are stored as given and normalized on read, so `min > max` behaves
/// exactly like the swapped pair.
///
/// # Examples
/// ```
/// use randgraph_core::GenerationParams;
///
/// let params = GenerationParams::new()
///     .with_vertices(8, 3)
///     .with_edges(2, 4)
///     .with_weights(-5, 5)
///     .with_weighted(false)
///     .with_seed(7);
/// assert_eq!(params.vertices(), 3..=8);
/// assert_eq!(params.edges(), 2..=4);
/// assert_eq!(params.weights(), -5..=5);
/// assert!(!params.weighted());
/// assert_eq!(params.seed(), Some(7));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenerationParams {
    vertices: (usize, usize),
    edges: (usize, usize),
    weights: (Weight, Weight),
    weighted: bool,
    seed: Option<u64>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            vertices: Self::DEFAULT_VERTICES,
            edges: Self::DEFAULT_EDGES,
            weights: Self::DEFAULT_WEIGHTS,
            weighted: true,
            seed: None,
        }
    }
}

impl GenerationParams {
    /// Default `(min, max)` vertex-count bounds.
    pub const DEFAULT_VERTICES: (usize, usize) = (5, 10);

    /// Default `(min, max)` edge-count bounds.
    pub const DEFAULT_EDGES: (usize, usize) = (5, 20);

    /// Default `(min, max)` weight bounds.
    pub const DEFAULT_WEIGHTS: (Weight, Weight) = (1, 10);

    /// Creates parameters populated with the default ranges.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::GenerationParams;
    ///
    /// let params = GenerationParams::new();
    /// assert_eq!(params.vertices(), 5..=10);
    /// assert_eq!(params.edges(), 5..=20);
    /// assert_eq!(params.weights(), 1..=10);
    /// assert!(params.weighted());
    /// assert_eq!(params.seed(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive vertex-count bounds.
    #[must_use]
    pub const fn with_vertices(mut self, min: usize, max: usize) -> Self {
        self.vertices = (min, max);
        self
    }

    /// Sets the inclusive edge-count bounds.
    #[must_use]
    pub const fn with_edges(mut self, min: usize, max: usize) -> Self {
        self.edges = (min, max);
        self
    }

    /// Sets the inclusive bounds for edge and vertex weights.
    #[must_use]
    pub const fn with_weights(mut self, min: Weight, max: Weight) -> Self {
        self.weights = (min, max);
        self
    }

    /// Chooses whether weights are randomized.
    ///
    /// When `false`, every edge gets weight 1 and vertex weights keep their
    /// default.
    #[must_use]
    pub const fn with_weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Fixes the random seed so generation becomes reproducible.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the normalized vertex-count range.
    #[must_use]
    pub fn vertices(&self) -> RangeInclusive<usize> {
        ordered(self.vertices)
    }

    /// Returns the normalized edge-count range.
    #[must_use]
    pub fn edges(&self) -> RangeInclusive<usize> {
        ordered(self.edges)
    }

    /// Returns the normalized weight range.
    #[must_use]
    pub fn weights(&self) -> RangeInclusive<Weight> {
        ordered(self.weights)
    }

    /// Returns whether weights are randomized.
    #[must_use]
    pub const fn weighted(&self) -> bool {
        self.weighted
    }

    /// Returns the fixed seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
}

fn ordered<T: Ord>((low, high): (T, T)) -> RangeInclusive<T> {
    if low > high { high..=low } else { low..=high }
}
