//! Command-line interface orchestration for randgraph.
//!
//! The `generate` command builds one random graph through a
//! [`randgraph_layout::GraphSession`], lays it out, and lists the result.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GenerateCommand, KindArg, VertexSummary,
    render_summary, run_cli,
};
