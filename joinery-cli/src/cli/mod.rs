//! Command-line parsing and execution for the joinery CLI.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GraphArgs, GraphSummary, SearchArg, SourcePaths,
    UnionFindArgs, UnionFindSummary, VariantArg, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
