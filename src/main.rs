use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bcc_forge::bridges::{analyze, low_link_tree};
use bcc_forge::config::load_blueprint;
use bcc_forge::debugging::draw_low_link;
use bcc_forge::input::{from_file, graph_from_file};
use bcc_forge::output::{draw_graph, path_to_string, to_file, write_edges};
use bcc_forge::reduce::{ReductionOutcome, reduce_to_target};
use bcc_forge::shift::shift_vertices;
use bcc_forge::synthesis::BlockSynthesizer;

#[derive(Parser)]
#[command(name = "bcc_forge")]
#[command(version)]
#[command(about = "Generate and analyze graphs with a controlled biconnected structure", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate blocks joined into a tree
    Generate(GenerateArgs),

    /// Write the path 1 - 2 - ... - n+1
    Path(PathArgs),

    /// Add a constant to every vertex id
    Shift(ShiftArgs),

    /// Report bridges and biconnected components
    Analyze(AnalyzeArgs),

    /// Delete bridges until a target component count is reached
    Reduce(ReduceArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Blueprint file (TOML), the sample blueprint is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of blocks, random blocks are drawn when it differs from the blueprint
    #[arg(short, long)]
    num_blocks: Option<usize>,

    /// Random seed, overrides the blueprint's seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output edge list
    #[arg(short, long, default_value = "graph.txt")]
    output: PathBuf,
}

#[derive(Args)]
struct PathArgs {
    /// Number of edges
    n: usize,

    /// Output edge list
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct ShiftArgs {
    input: PathBuf,
    output: PathBuf,

    /// Offset added to both endpoints
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    by: i64,
}

#[derive(Args)]
struct AnalyzeArgs {
    input: PathBuf,

    /// Write the graph in DOT format with bridges dashed
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Write the DFS forest with discovery and low-link values in DOT format
    #[arg(long)]
    low_link_dot: Option<PathBuf>,
}

#[derive(Args)]
struct ReduceArgs {
    input: PathBuf,

    /// Component count to reach
    #[arg(short, long)]
    target: usize,

    /// Output edge list
    #[arg(short, long, default_value = "output_edges.txt")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::EnvFilter::new(&cli.log_level))
        .init();

    match cli.command {
        Commands::Generate(args) => generate(args),
        Commands::Path(args) => {
            to_file(&path_to_string(args.n)?, &args.output)
                .with_context(|| format!("failed to write {}", args.output.display()))?;
            tracing::info!(edges = args.n, output = %args.output.display(), "path written");
            Ok(())
        }
        Commands::Shift(args) => {
            let edges = from_file(&args.input)
                .with_context(|| format!("failed to read {}", args.input.display()))?;
            write_edges(&shift_vertices(&edges, args.by)?, &args.output)?;
            tracing::info!(edges = edges.len(), output = %args.output.display(), "shifted");
            Ok(())
        }
        Commands::Analyze(args) => run_analyze(args),
        Commands::Reduce(args) => run_reduce(args),
    }
}

fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut blueprint = load_blueprint(args.config.as_deref()).context("failed to load blueprint")?;
    if args.num_blocks.is_some() {
        blueprint.num_blocks = args.num_blocks;
    }

    let mut rng = match args.seed.or(blueprint.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let specs = blueprint.specs(&mut rng)?;
    let mut synthesizer = BlockSynthesizer::new(rng);
    let graph = synthesizer.generate_tree(&specs)?;

    for block in &graph.blocks {
        tracing::info!(
            shape = %block.shape,
            size = block.size,
            edges = block.edge_count,
            bridge_vertex = block.bridge_vertex,
            "block"
        );
    }
    for (u, v) in &graph.links {
        tracing::info!("bridge edge {} - {}", u, v);
    }

    write_edges(&graph.edges, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    tracing::info!(
        vertices = graph.vertex_count,
        edges = graph.edges.len(),
        output = %args.output.display(),
        "graph written"
    );
    Ok(())
}

fn run_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let (n, edges) = graph_from_file(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let analysis = analyze(n, &edges)?;

    tracing::info!(
        vertices = n,
        edges = edges.len(),
        bridges = analysis.bridges.len(),
        bcc_count = analysis.bcc_count,
        "analysis"
    );
    for (u, v) in &analysis.bridges {
        tracing::info!("bridge {} - {}", u, v);
    }

    if let Some(path) = &args.dot {
        to_file(&draw_graph(&edges, &analysis), path)?;
    }
    if let Some(path) = &args.low_link_dot {
        to_file(&draw_low_link(&low_link_tree(n, &edges)?)?, path)?;
    }
    Ok(())
}

fn run_reduce(args: ReduceArgs) -> anyhow::Result<()> {
    let (n, edges) = graph_from_file(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    tracing::info!(edges = edges.len(), max_vertex = n, "graph loaded");

    let reduction = reduce_to_target(n, &edges, args.target)?;
    for (u, v) in &reduction.deleted {
        tracing::info!("deleted {} - {}", u, v);
    }
    match reduction.outcome {
        ReductionOutcome::Reached => tracing::info!(
            deleted = reduction.deleted.len(),
            bcc_count = reduction.bcc_count,
            "target reached"
        ),
        ReductionOutcome::TargetUnreachable => tracing::warn!(
            deleted = reduction.deleted.len(),
            bcc_count = reduction.bcc_count,
            target = args.target,
            "no bridges left, target not reached"
        ),
    }

    write_edges(&reduction.edges, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    Ok(())
}
