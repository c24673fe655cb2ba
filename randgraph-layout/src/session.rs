//! The context object owning the active graph and its presentation state.
//!
//! [`GraphSession`] is the only owner of the graph a user interacts with.
//! Every operation that replaces or resizes the graph also rebuilds the
//! layout and drops any drag in progress, so positions always match the
//! graph's vertex count.

use randgraph_core::{AnyGraph, GenerationParams, GenerationReport, Graph, GraphKind, VertexId};
use tracing::{Span, field, info, instrument};

use crate::{
    drag::DragState,
    geometry::{Point, Viewport},
    layout::Layout,
};

/// Settings applied on the next [`GraphSession::regenerate`].
///
/// # Examples
/// ```
/// use randgraph_core::{GenerationParams, GraphKind};
/// use randgraph_layout::{SessionConfig, Viewport};
///
/// let config = SessionConfig::new()
///     .with_kind(GraphKind::Undirected)
///     .with_params(GenerationParams::new().with_vertices(3, 4))
///     .with_viewport(Viewport::new(640, 480));
/// assert_eq!(config.kind(), GraphKind::Undirected);
/// assert_eq!(config.params().vertices(), 3..=4);
/// assert_eq!(config.viewport(), Viewport::new(640, 480));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SessionConfig {
    params: GenerationParams,
    kind: GraphKind,
    viewport: Viewport,
}

impl SessionConfig {
    /// Creates a configuration with default generation parameters, a
    /// directed graph, and an 800x600 viewport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the generation parameters.
    #[must_use]
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Chooses the kind of graph to generate.
    #[must_use]
    pub const fn with_kind(mut self, kind: GraphKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the drawing area used for layout.
    #[must_use]
    pub const fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Returns the generation parameters.
    #[must_use]
    pub const fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Returns the configured graph kind.
    #[must_use]
    pub const fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Returns the configured viewport.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// Owns a graph together with the layout and drag state derived from it.
///
/// # Examples
/// ```
/// use randgraph_core::{GenerationParams, Graph, GraphKind};
/// use randgraph_layout::{GraphSession, SessionConfig};
///
/// let config = SessionConfig::new()
///     .with_kind(GraphKind::Undirected)
///     .with_params(GenerationParams::new().with_vertices(6, 6).with_edges(4, 4));
/// let mut session = GraphSession::new(config);
/// assert_eq!(session.graph().vertex_count(), 0);
///
/// let report = session.regenerate();
/// assert_eq!(report.vertex_count, 6);
/// assert_eq!(session.layout().len(), session.graph().vertex_count());
/// assert_eq!(session.graph().edge_count(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct GraphSession {
    config: SessionConfig,
    graph: AnyGraph,
    layout: Layout,
    drag: DragState,
    last_report: Option<GenerationReport>,
}

impl GraphSession {
    /// Creates a session holding an empty graph of the configured kind.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let graph = config.kind().empty(config.params().weighted());
        Self {
            config,
            graph,
            layout: Layout::default(),
            drag: DragState::default(),
            last_report: None,
        }
    }

    /// Creates a session and generates its first graph.
    #[must_use]
    pub fn generated(config: SessionConfig) -> Self {
        let mut session = Self::new(config);
        session.regenerate();
        session
    }

    /// Returns the active graph.
    #[must_use]
    pub const fn graph(&self) -> &AnyGraph {
        &self.graph
    }

    /// Returns the current layout.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the configuration used by the next regeneration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the report of the most recent regeneration.
    #[must_use]
    pub const fn last_report(&self) -> Option<GenerationReport> {
        self.last_report
    }

    /// Returns the vertex being dragged, if any.
    #[must_use]
    pub fn selected(&self) -> Option<VertexId> {
        self.drag.selected()
    }

    /// Replaces the configuration. The active graph is kept until the next
    /// [`GraphSession::regenerate`]; a changed viewport is applied at once.
    pub fn set_config(&mut self, config: SessionConfig) {
        let resized = config.viewport() != self.config.viewport();
        self.config = config;
        if resized {
            self.relayout();
        }
    }

    /// Replaces the graph with a freshly generated one of the configured
    /// kind and rebuilds the layout.
    #[instrument(
        name = "session.regenerate",
        skip(self),
        fields(kind = %self.config.kind(), vertex_count = field::Empty),
    )]
    pub fn regenerate(&mut self) -> GenerationReport {
        let mut graph = self.config.kind().empty(self.config.params().weighted());
        let report = graph.generate_random(self.config.params());
        self.graph = graph;
        self.last_report = Some(report);
        self.relayout();
        Span::current().record("vertex_count", report.vertex_count);
        info!(
            edges = report.realized_edges,
            capped = report.capped,
            "session regenerated"
        );
        report
    }

    /// Lays the graph out again for a new drawing area. Dragged positions
    /// are discarded.
    pub fn resize(&mut self, viewport: Viewport) {
        self.config.viewport = viewport;
        self.relayout();
    }

    /// Returns the vertex under `point`, if any.
    #[must_use]
    pub fn vertex_at(&self, point: Point) -> Option<VertexId> {
        self.layout.hit_test(point)
    }

    /// Starts dragging the vertex under `point`.
    pub fn press(&mut self, point: Point) -> Option<VertexId> {
        self.drag.press(&self.layout, point)
    }

    /// Moves the dragged vertex. Returns `true` when a vertex moved.
    pub fn drag_to(&mut self, point: Point) -> bool {
        self.drag.drag_to(&mut self.layout, point)
    }

    /// Ends the current drag.
    pub fn release(&mut self) -> Option<VertexId> {
        self.drag.release()
    }

    fn relayout(&mut self) {
        self.drag.release();
        self.layout = Layout::circular(self.graph.vertex_count(), self.config.viewport());
    }
}
