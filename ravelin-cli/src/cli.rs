//! Command-line interface orchestration for the ravelin generator.
//!
//! One subcommand per topology family; shared flags configure the risk
//! pipeline. The exported adjacency mapping is rendered as JSON on stdout
//! so downstream routing/reliability tooling can consume it directly.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use ravelin_core::{
    AdjacencyExport, DEFAULT_ELEVATED_COST, DEFAULT_MAX_NORMAL_COST, DEFAULT_MIN_NORMAL_COST,
    DEFAULT_RISK_EDGE_RATIO, DEFAULT_RNG_SEED, EngineError, GeneratorError, PipelineBuilder,
    RiskTopology,
};
use ravelin_generators::{
    AdjacencyMatrix, DiagramBased, FixedRadius, PercentageNearest, UniformEdgeCount,
};
use thiserror::Error;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "ravelin", about = "Synthesise risk-augmented test topologies.")]
pub struct Cli {
    /// Pipeline configuration shared by every family.
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Render the exported adjacency with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Topology family to generate.
    #[command(subcommand)]
    pub family: FamilyCommand,
}

/// Pipeline flags shared by every topology family.
#[derive(Debug, Args, Clone)]
pub struct EngineArgs {
    /// Fraction of edges flagged as risk edges, strictly between 0 and 1.
    #[arg(long, default_value_t = DEFAULT_RISK_EDGE_RATIO)]
    pub risk_edge_ratio: f64,

    /// Source node the risk bias routes from (defaults to node 0).
    #[arg(long, requires = "target")]
    pub source: Option<usize>,

    /// Target node the risk bias routes to (defaults to the highest node).
    #[arg(long, requires = "source")]
    pub target: Option<usize>,

    /// Lower bound of the uniform normal-edge cost range.
    #[arg(long, default_value_t = DEFAULT_MIN_NORMAL_COST)]
    pub min_normal_cost: u32,

    /// Upper bound of the uniform normal-edge cost range.
    #[arg(long, default_value_t = DEFAULT_MAX_NORMAL_COST)]
    pub max_normal_cost: u32,

    /// Elevated magnitude assigned to risk edges.
    #[arg(long, default_value_t = DEFAULT_ELEVATED_COST)]
    pub elevated_cost: u32,

    /// Seed for the pipeline's random source.
    #[arg(long, default_value_t = DEFAULT_RNG_SEED)]
    pub seed: u64,
}

/// Supported topology families.
#[derive(Debug, Subcommand, Clone)]
pub enum FamilyCommand {
    /// G(n, M): a fixed number of uniformly sampled edges.
    UniformEdgeCount {
        /// Number of nodes.
        #[arg(long)]
        nodes: usize,
        /// Number of edges, at most `n(n-1)/2`.
        #[arg(long)]
        edges: usize,
    },
    /// Random grid positions with edges inside a fixed radius.
    FixedRadius {
        /// Number of nodes.
        #[arg(long)]
        nodes: usize,
        /// Grid width.
        #[arg(long)]
        width: u32,
        /// Grid height.
        #[arg(long)]
        height: u32,
        /// Connection radius; pairs strictly closer are joined.
        #[arg(long)]
        radius: f64,
    },
    /// Random grid positions, each node joining its nearest percentage.
    PercentageNearest {
        /// Number of nodes.
        #[arg(long)]
        nodes: usize,
        /// Percentage of nearest neighbours to join, in (0, 100].
        #[arg(long)]
        percentage: f64,
        /// Grid width.
        #[arg(long)]
        width: u32,
        /// Grid height.
        #[arg(long)]
        height: u32,
    },
    /// Symmetric Bernoulli adjacency matrix.
    AdjacencyMatrix {
        /// Number of nodes.
        #[arg(long)]
        nodes: usize,
        /// Independent connection probability per pair, in [0, 1].
        #[arg(long)]
        probability: f64,
    },
    /// Adjacency of neighbouring Voronoi cells over random points.
    DiagramBased {
        /// Number of points (and nodes).
        #[arg(long)]
        points: usize,
    },
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A topology family rejected its parameters.
    #[error(transparent)]
    Family(#[from] GeneratorError),
    /// The pipeline rejected its configuration or failed while running.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// The exported adjacency could not be serialised.
    #[error("failed to serialise the exported adjacency: {0}")]
    Serialise(#[from] serde_json::Error),
    /// Writing the rendered output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Summarises the outcome of one generation run.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Name of the generated topology family.
    pub family: &'static str,
    /// Number of nodes in the repaired topology.
    pub nodes: usize,
    /// Number of edges in the repaired topology.
    pub edges: usize,
    /// Number of edges flagged as risk edges.
    pub risk_edges: usize,
    /// The boundary artifact handed to downstream consumers.
    pub export: AdjacencyExport,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when family parameters, pipeline configuration, or
/// the run itself fail.
pub fn run_cli(cli: Cli) -> Result<GenerationSummary, CliError> {
    let mut builder = PipelineBuilder::new()
        .with_risk_edge_ratio(cli.engine.risk_edge_ratio)
        .with_normal_cost_range(cli.engine.min_normal_cost, cli.engine.max_normal_cost)
        .with_elevated_cost(cli.engine.elevated_cost)
        .with_rng_seed(cli.engine.seed);
    if let (Some(source), Some(target)) = (cli.engine.source, cli.engine.target) {
        builder = builder.with_endpoints(source, target);
    }
    let pipeline = builder.build()?;

    let (family, annotated): (&'static str, RiskTopology) = match cli.family {
        FamilyCommand::UniformEdgeCount { nodes, edges } => (
            "uniform-edge-count",
            pipeline.run(&UniformEdgeCount::new(nodes, edges)?)?,
        ),
        FamilyCommand::FixedRadius {
            nodes,
            width,
            height,
            radius,
        } => (
            "fixed-radius",
            pipeline.run(&FixedRadius::new(nodes, width, height, radius)?)?,
        ),
        FamilyCommand::PercentageNearest {
            nodes,
            percentage,
            width,
            height,
        } => (
            "percentage-nearest",
            pipeline.run(&PercentageNearest::new(nodes, percentage, width, height)?)?,
        ),
        FamilyCommand::AdjacencyMatrix { nodes, probability } => (
            "adjacency-matrix",
            pipeline.run(&AdjacencyMatrix::new(nodes, probability)?)?,
        ),
        FamilyCommand::DiagramBased { points } => (
            "diagram-based",
            pipeline.run(&DiagramBased::new(points)?)?,
        ),
    };

    Ok(GenerationSummary {
        family,
        nodes: annotated.topology().node_count(),
        edges: annotated.topology().edge_count(),
        risk_edges: annotated.risk_edges().len(),
        export: annotated.export(),
    })
}

/// Renders the exported adjacency as JSON followed by a newline.
///
/// # Errors
/// Returns [`CliError`] when serialisation or writing fails.
pub fn render_export<W: Write>(
    summary: &GenerationSummary,
    writer: &mut W,
    pretty: bool,
) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &summary.export)?;
    } else {
        serde_json::to_writer(&mut *writer, &summary.export)?;
    }
    writeln!(writer)?;
    Ok(())
}
