//! Behavioural tests for random generation through the public API.

use randgraph_core::{
    DirectedGraph, GenerationParams, Graph, GraphKind, UndirectedGraph, max_undirected_edges,
};
use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use randgraph_test_support::tracing::RecordingLayer;

fn assert_no_self_loops(graph: &impl Graph) {
    for vertex in 0..graph.vertex_count() {
        assert!(!graph.has_edge(vertex, vertex), "loop at {vertex}");
    }
}

#[rstest]
fn directed_five_vertices_four_weighted_edges() {
    // Entropy-seeded: assertions hold for every draw.
    for _ in 0..64 {
        let mut graph = DirectedGraph::new(false);
        let params = GenerationParams::new()
            .with_vertices(5, 5)
            .with_edges(4, 4)
            .with_weights(2, 2)
            .with_weighted(true);
        let report = graph.generate_random(&params);

        assert_eq!(graph.vertex_count(), 5);
        assert!(graph.is_weighted());
        assert!((1..=4).contains(&graph.edge_count()));
        assert_eq!(report.realized_edges, graph.edge_count());
        assert!(graph.edges().iter().all(|edge| edge.weight == 2));
        assert!(graph.vertex_weights().iter().all(|&weight| weight == 2));
        assert_no_self_loops(&graph);
    }
}

#[rstest]
fn directed_generation_stores_drawn_edges() {
    for _ in 0..64 {
        let mut graph = DirectedGraph::new(true);
        let params = GenerationParams::new()
            .with_vertices(200, 200)
            .with_edges(5, 5);
        let report = graph.generate_random(&params);

        assert_eq!(report.requested_edges, 5);
        assert!((1..=5).contains(&report.realized_edges));
        assert_eq!(graph.edges().len(), report.realized_edges);
    }
}

#[rstest]
fn directed_pair_is_saturated_by_many_attempts() {
    let mut graph = DirectedGraph::new(false);
    let params = GenerationParams::new()
        .with_vertices(2, 2)
        .with_edges(50, 50)
        .with_seed(50);
    let report = graph.generate_random(&params);

    assert_eq!(report.realized_edges, 2);
    assert!(graph.has_edge(0, 1));
    assert!(graph.has_edge(1, 0));
}

#[rstest]
fn undirected_four_vertices_three_unweighted_edges() {
    for _ in 0..64 {
        let mut graph = UndirectedGraph::new(true);
        let params = GenerationParams::new()
            .with_vertices(4, 4)
            .with_edges(3, 3)
            .with_weights(1, 1)
            .with_weighted(false);
        let report = graph.generate_random(&params);

        assert_eq!(graph.vertex_count(), 4);
        assert!(!graph.is_weighted());
        assert_eq!(graph.edge_count(), 3);
        assert!(!report.capped);
        assert!(graph.edges().iter().all(|edge| edge.weight == 1));
        assert!(graph.vertex_weights().iter().all(|&weight| weight == 1));
        assert_no_self_loops(&graph);
    }
}

#[rstest]
fn unweighted_generation_ignores_weight_range() {
    let mut graph = UndirectedGraph::new(true);
    let params = GenerationParams::new()
        .with_vertices(6, 6)
        .with_edges(5, 5)
        .with_weights(50, 90)
        .with_weighted(false)
        .with_seed(99);
    graph.generate_random(&params);

    assert!(graph.edges().iter().all(|edge| edge.weight == 1));
    assert!(graph.vertex_weights().iter().all(|&weight| weight == 1));
}

#[rstest]
#[case::directed(GraphKind::Directed)]
#[case::undirected(GraphKind::Undirected)]
fn seeded_generation_is_reproducible(#[case] kind: GraphKind) {
    let params = GenerationParams::new()
        .with_vertices(4, 12)
        .with_edges(3, 15)
        .with_weights(-3, 30)
        .with_seed(2024);

    let mut first = kind.empty(true);
    let mut second = kind.empty(false);
    let first_report = first.generate_random(&params);
    let second_report = second.generate_random(&params);

    assert_eq!(first_report, second_report);
    assert_eq!(first.edges(), second.edges());
    assert_eq!(first.vertex_weights(), second.vertex_weights());
}

#[rstest]
fn injected_rng_drives_generation() {
    let params = GenerationParams::new().with_vertices(7, 7).with_edges(6, 6);
    let mut left = UndirectedGraph::new(true);
    let mut right = UndirectedGraph::new(true);
    left.generate_random_with(&params, &mut SmallRng::seed_from_u64(5));
    right.generate_random_with(&params, &mut SmallRng::seed_from_u64(5));
    assert_eq!(left, right);
}

#[rstest]
fn undirected_complete_graph_terminates() {
    let mut graph = UndirectedGraph::new(false);
    let params = GenerationParams::new()
        .with_vertices(6, 6)
        .with_edges(1_000, 2_000)
        .with_weighted(false);
    let report = graph.generate_random(&params);

    assert!(report.capped);
    assert_eq!(graph.edge_count(), max_undirected_edges(6));
}

#[rstest]
fn generation_emits_span_with_counts() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let report = tracing::subscriber::with_default(subscriber, || {
        let mut graph = UndirectedGraph::new(true);
        let params = GenerationParams::new()
            .with_vertices(5, 5)
            .with_edges(4, 4)
            .with_seed(1);
        graph.generate_random(&params)
    });

    let span = layer
        .span_named("graph.generate")
        .expect("generation span must be recorded");
    assert_eq!(span.fields.get("directed").map(String::as_str), Some("false"));
    assert_eq!(span.fields.get("weighted").map(String::as_str), Some("true"));
    assert_eq!(span.fields.get("vertex_count").map(String::as_str), Some("5"));
    assert_eq!(
        span.fields.get("edge_count"),
        Some(&report.realized_edges.to_string())
    );

    let infos = layer.events_at(Level::INFO);
    assert!(
        infos
            .iter()
            .any(|event| event.message() == Some("graph generated"))
    );
}

#[rstest]
fn capping_emits_warning() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    tracing::subscriber::with_default(subscriber, || {
        let mut graph = UndirectedGraph::new(false);
        let params = GenerationParams::new()
            .with_vertices(3, 3)
            .with_edges(9, 9)
            .with_seed(4);
        graph.generate_random(&params);
    });

    let warnings = layer.events_at(Level::WARN);
    let warning = warnings.first().expect("cap must be logged");
    assert_eq!(warning.fields.get("requested").map(String::as_str), Some("9"));
    assert_eq!(warning.fields.get("limit").map(String::as_str), Some("3"));
}
