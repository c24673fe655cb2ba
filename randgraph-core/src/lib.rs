//! Randgraph core library.
//!
//! Provides the [`Graph`] contract, directed and undirected adjacency
//! storage, and the random generator that populates any [`Graph`] under
//! vertex, edge, and weight constraints.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod generate;
mod graph;

pub use crate::{
    error::{GraphError, GraphErrorCode, Result},
    generate::{GenerationParams, GenerationReport, max_undirected_edges},
    graph::{
        Adjacency, AdjacencyGraph, AnyGraph, DEFAULT_WEIGHT, Directed, DirectedGraph, Edge,
        EdgeDirection, Graph, GraphKind, Undirected, UndirectedGraph, VertexId, Weight,
    },
};
