//! Error types for the layout crate.

use randgraph_core::{VertexId, define_error_codes};
use thiserror::Error;

/// An error produced by [`crate::Layout`] queries.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LayoutError {
    /// The vertex has no position in the current layout.
    ///
    /// Usually a stale index kept across a regeneration.
    #[error("vertex {vertex} has no position; layout holds {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: VertexId,
        /// Number of positioned vertices.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`LayoutError`] variants.
    enum LayoutErrorCode for LayoutError {
        /// The vertex has no position in the current layout.
        VertexOutOfRange => VertexOutOfRange { .. } => "LAYOUT_VERTEX_OUT_OF_RANGE",
    }
}
