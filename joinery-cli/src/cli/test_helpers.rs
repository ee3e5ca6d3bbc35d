//! Helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, ExecutionSummary, GraphSummary, UnionFindSummary, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn expect_graph(summary: ExecutionSummary) -> GraphSummary {
    match summary {
        ExecutionSummary::Graph(graph) => graph,
        ExecutionSummary::UnionFind(other) => panic!("expected a graph summary, got {other:?}"),
    }
}

pub(super) fn expect_union_find(summary: ExecutionSummary) -> UnionFindSummary {
    match summary {
        ExecutionSummary::UnionFind(set) => set,
        ExecutionSummary::Graph(other) => panic!("expected a union-find summary, got {other:?}"),
    }
}
