//! Command implementations and argument parsing for the randgraph CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use randgraph_core::{
    Edge, GenerationParams, GenerationReport, Graph, GraphError, GraphKind, VertexId, Weight,
};
use randgraph_layout::{GraphSession, LayoutError, Point, SessionConfig, Viewport};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_MIN_VERTICES: usize = GenerationParams::DEFAULT_VERTICES.0;
const DEFAULT_MAX_VERTICES: usize = GenerationParams::DEFAULT_VERTICES.1;
const DEFAULT_MIN_EDGES: usize = GenerationParams::DEFAULT_EDGES.0;
const DEFAULT_MAX_EDGES: usize = GenerationParams::DEFAULT_EDGES.1;
const DEFAULT_MIN_WEIGHT: Weight = GenerationParams::DEFAULT_WEIGHTS.0;
const DEFAULT_MAX_WEIGHT: Weight = GenerationParams::DEFAULT_WEIGHTS.1;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "randgraph", about = "Generate and lay out random graphs.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate one random graph and list its vertices and edges.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
///
/// Reversed bounds are accepted and treated as the ordered range.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Lower bound on the number of vertices.
    #[arg(long, default_value_t = DEFAULT_MIN_VERTICES)]
    pub min_vertices: usize,

    /// Upper bound on the number of vertices.
    #[arg(long, default_value_t = DEFAULT_MAX_VERTICES)]
    pub max_vertices: usize,

    /// Lower bound on the number of edge insertions.
    #[arg(long, default_value_t = DEFAULT_MIN_EDGES)]
    pub min_edges: usize,

    /// Upper bound on the number of edge insertions.
    #[arg(long, default_value_t = DEFAULT_MAX_EDGES)]
    pub max_edges: usize,

    /// Lower bound for vertex and edge weights.
    #[arg(long, default_value_t = DEFAULT_MIN_WEIGHT, allow_negative_numbers = true)]
    pub min_weight: Weight,

    /// Upper bound for vertex and edge weights.
    #[arg(long, default_value_t = DEFAULT_MAX_WEIGHT, allow_negative_numbers = true)]
    pub max_weight: Weight,

    /// Kind of graph to generate.
    #[arg(long, value_enum, default_value_t = KindArg::Directed)]
    pub kind: KindArg,

    /// Give every vertex and edge the unit weight.
    #[arg(long)]
    pub unweighted: bool,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Width of the layout area in pixels.
    #[arg(long, default_value_t = Viewport::DEFAULT_WIDTH)]
    pub width: i32,

    /// Height of the layout area in pixels.
    #[arg(long, default_value_t = Viewport::DEFAULT_HEIGHT)]
    pub height: i32,
}

impl Default for GenerateCommand {
    fn default() -> Self {
        Self {
            min_vertices: DEFAULT_MIN_VERTICES,
            max_vertices: DEFAULT_MAX_VERTICES,
            min_edges: DEFAULT_MIN_EDGES,
            max_edges: DEFAULT_MAX_EDGES,
            min_weight: DEFAULT_MIN_WEIGHT,
            max_weight: DEFAULT_MAX_WEIGHT,
            kind: KindArg::Directed,
            unweighted: false,
            seed: None,
            width: Viewport::DEFAULT_WIDTH,
            height: Viewport::DEFAULT_HEIGHT,
        }
    }
}

impl GenerateCommand {
    /// Translates the flags into a session configuration.
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        let mut params = GenerationParams::new()
            .with_vertices(self.min_vertices, self.max_vertices)
            .with_edges(self.min_edges, self.max_edges)
            .with_weights(self.min_weight, self.max_weight)
            .with_weighted(!self.unweighted);
        if let Some(seed) = self.seed {
            params = params.with_seed(seed);
        }
        SessionConfig::new()
            .with_params(params)
            .with_kind(self.kind.into())
            .with_viewport(Viewport::new(self.width, self.height))
    }
}

/// Graph kinds selectable on the command line.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum KindArg {
    /// Edges have a direction.
    #[default]
    Directed,
    /// Every edge is stored in both directions.
    Undirected,
}

impl From<KindArg> for GraphKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Directed => Self::Directed,
            KindArg::Undirected => Self::Undirected,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A graph query failed.
    #[error(transparent)]
    Core(#[from] GraphError),
    /// A layout query failed.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

impl CliError {
    /// Returns the stable code of the underlying error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Core(err) => err.code().as_str(),
            Self::Layout(err) => err.code().as_str(),
        }
    }
}

/// One vertex of a generated graph with its layout position.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct VertexSummary {
    /// Vertex index.
    pub index: VertexId,
    /// Vertex weight.
    pub weight: Weight,
    /// Position on the layout circle.
    pub position: Point,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Kind of the generated graph.
    pub kind: GraphKind,
    /// Outcome of the generation pass.
    pub report: GenerationReport,
    /// Vertices in index order.
    pub vertices: Vec<VertexSummary>,
    /// Logical edges in ascending order.
    pub edges: Vec<Edge>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading back the generated graph fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use randgraph_cli::cli::{Cli, Command, GenerateCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         min_vertices: 3,
///         max_vertices: 3,
///         seed: Some(11),
///         ..GenerateCommand::default()
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.vertices.len(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_generate(&generate)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(kind = field::Empty, seed = field::Empty),
)]
pub(super) fn run_generate(command: &GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let config = command.session_config();
    let span = Span::current();
    span.record("kind", field::display(config.kind()));
    if let Some(seed) = command.seed {
        span.record("seed", seed);
    }

    let mut session = GraphSession::new(config);
    let report = session.regenerate();
    let summary = summarise(&session, report)?;
    info!(
        vertices = summary.vertices.len(),
        edges = summary.edges.len(),
        "command completed"
    );
    Ok(summary)
}

pub(super) fn summarise(
    session: &GraphSession,
    report: GenerationReport,
) -> Result<ExecutionSummary, CliError> {
    let graph = session.graph();
    let vertices = (0..graph.vertex_count())
        .map(|index| {
            Ok(VertexSummary {
                index,
                weight: graph.vertex_weight(index)?,
                position: session.layout().position(index)?,
            })
        })
        .collect::<Result<Vec<_>, CliError>>()?;
    Ok(ExecutionSummary {
        kind: graph.kind(),
        report,
        vertices,
        edges: graph.edges(),
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// Undirected edges are listed once, joined by `--` instead of `->`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use randgraph_cli::cli::{ExecutionSummary, VertexSummary, render_summary};
/// # use randgraph_core::{Edge, GenerationReport, GraphKind};
/// # use randgraph_layout::Point;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     kind: GraphKind::Undirected,
///     report: GenerationReport {
///         vertex_count: 2,
///         requested_edges: 1,
///         realized_edges: 1,
///         weighted: false,
///         capped: false,
///     },
///     vertices: vec![
///         VertexSummary { index: 0, weight: 1, position: Point::new(10, 0) },
///         VertexSummary { index: 1, weight: 1, position: Point::new(-10, 0) },
///     ],
///     edges: vec![Edge { from: 0, to: 1, weight: 1 }],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.ends_with("0 -- 1\tweight 1\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let report = &summary.report;
    writeln!(writer, "kind: {}", summary.kind)?;
    writeln!(writer, "weighted: {}", report.weighted)?;
    writeln!(writer, "vertices: {}", summary.vertices.len())?;
    writeln!(writer, "edges: {}", summary.edges.len())?;
    if report.capped {
        writeln!(
            writer,
            "requested edges: {} (capped)",
            report.requested_edges
        )?;
    }
    for vertex in &summary.vertices {
        writeln!(
            writer,
            "{}\tweight {}\tat ({}, {})",
            vertex.index, vertex.weight, vertex.position.x, vertex.position.y
        )?;
    }
    let arrow = match summary.kind {
        GraphKind::Directed => "->",
        GraphKind::Undirected => "--",
    };
    for edge in &summary.edges {
        writeln!(
            writer,
            "{} {arrow} {}\tweight {}",
            edge.from, edge.to, edge.weight
        )?;
    }
    Ok(())
}
