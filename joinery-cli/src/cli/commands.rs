//! Command implementations and argument parsing for the joinery CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use joinery_core::{
    Bipartite, BreadthFirstPaths, ConnectedComponents, Cycle, DepthFirstPaths, DfsStrategy,
    Graph, JoineryError, Paths, UnionFind, UnionFindVariant,
};
use joinery_providers_text::{TextProviderError, read_disjoint_set, read_graph};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "joinery",
    about = "Answer connectivity questions about graphs and pair streams."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load a graph and report its structure, components, cycles and colouring.
    Graph(GraphArgs),
    /// Load a pair stream into a union-find structure and report its classes.
    UnionFind(UnionFindArgs),
}

/// Options accepted by the `graph` command.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Path to a text file holding `V`, `E` and then `E` vertex pairs.
    pub path: PathBuf,

    /// Report a path from this vertex to every other vertex.
    #[arg(long)]
    pub source: Option<usize>,

    /// Search used for `--source` paths.
    #[arg(long, value_enum, default_value_t = SearchArg::Iterative)]
    pub search: SearchArg,

    /// Print the adjacency lists.
    #[arg(long)]
    pub dump: bool,
}

/// Options accepted by the `union-find` command.
#[derive(Debug, Args, Clone)]
pub struct UnionFindArgs {
    /// Path to a text file holding `N` followed by `p q` pairs.
    pub path: PathBuf,

    /// Union-find variant used to process the pairs.
    #[arg(long, value_enum, default_value_t = VariantArg::Weighted)]
    pub variant: VariantArg,
}

/// Path searches selectable from the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum SearchArg {
    /// Depth-first search with an explicit stack.
    Iterative,
    /// Depth-first search by recursion.
    Recursive,
    /// Breadth-first search; paths have the fewest edges.
    Breadth,
}

impl SearchArg {
    const fn label(self) -> &'static str {
        match self {
            Self::Iterative => "iterative",
            Self::Recursive => "recursive",
            Self::Breadth => "breadth",
        }
    }

    fn search(self, graph: &Graph, source: usize) -> Box<dyn Paths> {
        match self {
            Self::Iterative => Box::new(DepthFirstPaths::with_strategy(
                graph,
                source,
                DfsStrategy::Iterative,
            )),
            Self::Recursive => Box::new(DepthFirstPaths::with_strategy(
                graph,
                source,
                DfsStrategy::Recursive,
            )),
            Self::Breadth => Box::new(BreadthFirstPaths::new(graph, source)),
        }
    }
}

/// Union-find variants selectable from the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum VariantArg {
    /// Eager relabelling; constant-time `find`.
    QuickFind,
    /// Lazy forest linking.
    QuickUnion,
    /// Forest linking by size with path halving.
    Weighted,
}

impl From<VariantArg> for UnionFindVariant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::QuickFind => Self::QuickFind,
            VariantArg::QuickUnion => Self::QuickUnion,
            VariantArg::Weighted => Self::WeightedQuickUnion,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Parsing the input text failed.
    #[error(transparent)]
    Text(#[from] TextProviderError),
    /// A core operation rejected its arguments.
    #[error(transparent)]
    Core(#[from] JoineryError),
}

impl CliError {
    /// Machine-readable code of the underlying failure, when it has one.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => None,
            Self::Text(err) => Some(err.code().as_str()),
            Self::Core(err) => Some(err.code().as_str()),
        }
    }
}

/// Paths from one source vertex, indexed by destination.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SourcePaths {
    /// Vertex the search started from.
    pub source: usize,
    /// Search that produced the paths.
    pub search: SearchArg,
    /// Source-to-destination vertex sequence, or `None` when unreachable.
    pub routes: Vec<Option<Vec<usize>>>,
}

/// Outcome of the `graph` command.
#[derive(Debug, Clone)]
pub struct GraphSummary {
    /// Name derived from the input file.
    pub data_source: String,
    /// The loaded graph.
    pub graph: Graph,
    /// Number of connected components.
    pub components: usize,
    /// Whether the graph contains a cycle.
    pub has_cycle: bool,
    /// Whether the graph is two-colourable.
    pub is_bipartite: bool,
    /// Whether the adjacency lists should be rendered.
    pub dump: bool,
    /// Paths requested through `--source`.
    pub paths: Option<SourcePaths>,
}

/// Outcome of the `union-find` command.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UnionFindSummary {
    /// Name derived from the input file.
    pub data_source: String,
    /// Variant that processed the pairs.
    pub variant: UnionFindVariant,
    /// Size of the element universe.
    pub elements: usize,
    /// Unions that joined two distinct classes.
    pub merged: usize,
    /// Members of every class, each ascending, ordered by smallest member.
    pub components: Vec<Vec<usize>>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Result of `graph`.
    Graph(GraphSummary),
    /// Result of `union-find`.
    UnionFind(UnionFindSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or parsed, or when
/// `--source` names a vertex outside the graph.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use joinery_cli::cli::{Cli, Command, ExecutionSummary, UnionFindArgs, VariantArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "4\n0 1\n2 3\n1 0\n")?;
/// let cli = Cli {
///     command: Command::UnionFind(UnionFindArgs {
///         path: file.path().to_path_buf(),
///         variant: VariantArg::QuickFind,
///     }),
/// };
/// let ExecutionSummary::UnionFind(summary) = run_cli(cli)? else {
///     panic!("union-find must produce a union-find summary");
/// };
/// assert_eq!(summary.merged, 2);
/// assert_eq!(summary.components, vec![vec![0, 1], vec![2, 3]]);
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
    let span = Span::current();
    match cli.command {
        Command::Graph(args) => {
            span.record("command", field::display("graph"));
            run_graph(args).map(ExecutionSummary::Graph)
        }
        Command::UnionFind(args) => {
            span.record("command", field::display("union-find"));
            run_union_find(args).map(ExecutionSummary::UnionFind)
        }
    }
}

#[instrument(
    name = "cli.graph",
    err,
    skip(args),
    fields(path = %args.path.display(), source = field::Empty, search = args.search.label()),
)]
pub(super) fn run_graph(args: GraphArgs) -> Result<GraphSummary, CliError> {
    let GraphArgs {
        path,
        source,
        search,
        dump,
    } = args;
    let graph = read_graph(open_text_reader(&path)?)?;

    let paths = match source {
        Some(vertex) => {
            Span::current().record("source", vertex);
            Some(trace_paths(&graph, vertex, search)?)
        }
        None => None,
    };

    let summary = GraphSummary {
        data_source: derive_data_source_name(&path),
        components: ConnectedComponents::new(&graph).count(),
        has_cycle: Cycle::new(&graph).has_cycle(),
        is_bipartite: Bipartite::new(&graph).is_bipartite(),
        graph,
        dump,
        paths,
    };
    info!(
        data_source = summary.data_source.as_str(),
        vertices = summary.graph.vertex_count(),
        edges = summary.graph.edge_count(),
        components = summary.components,
        "graph command completed"
    );
    Ok(summary)
}

fn trace_paths(graph: &Graph, source: usize, search: SearchArg) -> Result<SourcePaths, CliError> {
    let vertex_count = graph.vertex_count();
    if source >= vertex_count {
        return Err(JoineryError::VertexOutOfRange {
            vertex: source,
            vertex_count,
        }
        .into());
    }

    let paths = search.search(graph, source);
    let routes = (0..vertex_count)
        .map(|v| {
            paths.path_to(v).map(|mut route| {
                route.reverse();
                route
            })
        })
        .collect();
    Ok(SourcePaths {
        source,
        search,
        routes,
    })
}

#[instrument(
    name = "cli.union_find",
    err,
    skip(args),
    fields(path = %args.path.display(), variant = field::Empty),
)]
pub(super) fn run_union_find(args: UnionFindArgs) -> Result<UnionFindSummary, CliError> {
    let UnionFindArgs { path, variant } = args;
    let variant = UnionFindVariant::from(variant);
    Span::current().record("variant", field::display(variant));

    let mut set = read_disjoint_set(open_text_reader(&path)?, variant)?;
    let summary = UnionFindSummary {
        data_source: derive_data_source_name(&path),
        variant,
        elements: set.len(),
        merged: set.len() - set.count(),
        components: set.components(),
    };
    info!(
        data_source = summary.data_source.as_str(),
        components = summary.components.len(),
        merged = summary.merged,
        "union-find command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.open_text_reader", err, fields(path = %path.display()))]
pub(super) fn open_text_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "input".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` as plain text.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Graph(graph) => render_graph(graph, &mut writer),
        ExecutionSummary::UnionFind(set) => render_union_find(set, &mut writer),
    }
}

fn render_graph(summary: &GraphSummary, writer: &mut impl Write) -> io::Result<()> {
    let graph = &summary.graph;
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "vertices: {}", graph.vertex_count())?;
    writeln!(writer, "edges: {}", graph.edge_count())?;
    writeln!(writer, "max degree: {}", graph.max_degree())?;
    match graph.average_degree() {
        Some(average) => writeln!(writer, "average degree: {average}")?,
        None => writeln!(writer, "average degree: n/a")?,
    }
    writeln!(writer, "self loops: {}", graph.self_loop_count())?;
    writeln!(writer, "components: {}", summary.components)?;
    writeln!(writer, "has cycle: {}", summary.has_cycle)?;
    writeln!(writer, "bipartite: {}", summary.is_bipartite)?;
    if summary.dump {
        writeln!(writer, "{graph}")?;
    }
    if let Some(paths) = &summary.paths {
        writeln!(
            writer,
            "paths from {} ({}):",
            paths.source,
            paths.search.label()
        )?;
        for (v, route) in paths.routes.iter().enumerate() {
            write!(writer, "{} to {v}:", paths.source)?;
            match route {
                Some(route) => {
                    let hops: Vec<String> = route.iter().map(ToString::to_string).collect();
                    writeln!(writer, " {}", hops.join("-"))?;
                }
                None => writeln!(writer, " not connected")?,
            }
        }
    }
    Ok(())
}

fn render_union_find(summary: &UnionFindSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "variant: {}", summary.variant)?;
    writeln!(writer, "elements: {}", summary.elements)?;
    writeln!(writer, "merged: {}", summary.merged)?;
    writeln!(writer, "components: {}", summary.components.len())?;
    for (index, members) in summary.components.iter().enumerate() {
        let members: Vec<String> = members.iter().map(ToString::to_string).collect();
        writeln!(writer, "{index}\t{}", members.join(" "))?;
    }
    Ok(())
}
