//! Contract tests shared by every `Graph` implementation.

use randgraph_core::{
    AnyGraph, DirectedGraph, Graph, GraphError, GraphErrorCode, GraphKind, UndirectedGraph,
};
use rstest::{fixture, rstest};

#[fixture]
fn triangle() -> UndirectedGraph {
    let mut graph = UndirectedGraph::with_vertex_count(3, true);
    for (from, to, weight) in [(0, 1, 4), (1, 2, 5), (2, 0, 6)] {
        graph.add_edge(from, to, weight).expect("in range");
    }
    graph
}

fn exercise_add_then_remove<G: Graph>(mut graph: G) {
    graph.set_vertex_count(6);
    for from in 0..6 {
        for to in 0..6 {
            let weight = i32::try_from(from * 10 + to).expect("small weight");
            graph.add_edge(from, to, weight).expect("in range");
            assert!(graph.has_edge(from, to));
            assert_eq!(graph.weight(from, to), Ok(weight));
            if !graph.is_directed() {
                assert!(graph.has_edge(to, from));
                assert_eq!(graph.weight(to, from), Ok(weight));
            }

            graph.remove_edge(from, to);
            assert!(!graph.has_edge(from, to));
            assert!(graph.is_directed() || !graph.has_edge(to, from));
        }
    }
}

#[rstest]
fn directed_add_then_remove() {
    exercise_add_then_remove(DirectedGraph::new(true));
}

#[rstest]
fn undirected_add_then_remove() {
    exercise_add_then_remove(UndirectedGraph::new(true));
}

#[rstest]
#[case::directed(GraphKind::Directed)]
#[case::undirected(GraphKind::Undirected)]
fn any_graph_add_then_remove(#[case] kind: GraphKind) {
    exercise_add_then_remove(kind.empty(false));
}

#[rstest]
#[case::directed(GraphKind::Directed)]
#[case::undirected(GraphKind::Undirected)]
fn repeated_reset_is_idempotent(#[case] kind: GraphKind, #[values(0, 1, 5)] count: usize) {
    let mut graph: AnyGraph = kind.empty(true);
    graph.set_vertex_count(count);
    let first = graph.clone();
    if count > 1 {
        graph.add_unit_edge(0, 1).expect("in range");
    }
    graph.set_vertex_count(count);

    assert_eq!(graph, first);
    assert_eq!(graph.vertex_count(), count);
    assert_eq!(graph.edge_count(), 0);
    assert!((0..count).all(|vertex| graph.vertex_weight(vertex) == Ok(1)));
}

#[rstest]
fn set_weight_updates_both_directions(mut triangle: UndirectedGraph) {
    triangle.set_weight(1, 0, 40).expect("edge exists");
    assert_eq!(triangle.weight(0, 1), Ok(40));
    assert_eq!(triangle.weight(1, 0), Ok(40));
    assert_eq!(triangle.edge_count(), 3);
}

#[rstest]
fn neighbor_view_reflects_mirrored_edges(triangle: UndirectedGraph) {
    let neighbors = triangle.neighbors(0).expect("vertex in range");
    assert_eq!(neighbors.len(), 2);
    assert_eq!(neighbors.get(&1), Some(&4));
    assert_eq!(neighbors.get(&2), Some(&6));
}

#[rstest]
fn removing_missing_edge_is_a_noop(mut triangle: UndirectedGraph) {
    let before = triangle.clone();
    triangle.remove_edge(0, 0);
    triangle.remove_edge(3, 1);
    triangle.remove_edge(1, usize::MAX);
    assert_eq!(triangle, before);
}

#[rstest]
fn set_vertex_weights_replaces_matching_sequence(mut triangle: UndirectedGraph) {
    triangle.set_vertex_weights(&[7, -2, 0]);
    assert_eq!(triangle.vertex_weights(), &[7, -2, 0]);
    assert_eq!(triangle.vertex_weight(1), Ok(-2));

    triangle.set_vertex_weights(&[1, 2]);
    assert_eq!(triangle.vertex_weights(), &[7, -2, 0]);
}

#[rstest]
fn errors_carry_stable_codes(triangle: UndirectedGraph) {
    let missing = triangle.weight(0, 7).expect_err("edge absent");
    assert_eq!(missing.code(), GraphErrorCode::NoSuchEdge);
    assert_eq!(missing.to_string(), "edge 0 -> 7 does not exist");

    let out_of_range = triangle.vertex_weight(3).expect_err("vertex absent");
    assert_eq!(out_of_range.code(), GraphErrorCode::VertexOutOfRange);
    assert_eq!(
        out_of_range,
        GraphError::VertexOutOfRange {
            vertex: 3,
            vertex_count: 3
        }
    );
}

#[rstest]
#[case(
    GraphError::VertexOutOfRange { vertex: 1, vertex_count: 0 },
    GraphErrorCode::VertexOutOfRange,
    "GRAPH_VERTEX_OUT_OF_RANGE",
)]
#[case(
    GraphError::NoSuchEdge { from: 0, to: 1 },
    GraphErrorCode::NoSuchEdge,
    "GRAPH_NO_SUCH_EDGE",
)]
fn returns_expected_graph_code(
    #[case] error: GraphError,
    #[case] expected: GraphErrorCode,
    #[case] label: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), label);
    assert_eq!(expected.to_string(), label);
}
