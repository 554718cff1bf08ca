//! Pipeline orchestration: generate, repair, select, allocate, price.
//!
//! One [`Pipeline`] value holds a validated configuration and can run any
//! number of topology families; each run seeds a fresh random source so
//! identical seeds and inputs reproduce identical annotated topologies.

use std::sync::Arc;

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{info, instrument};

use crate::{
    cost::{CostProfile, assign_costs},
    error::{EndpointKind, EngineError, Result},
    generator::TopologyGenerator,
    graph::Topology,
    repair::ConnectivityRepairer,
    result::RiskTopology,
    risk::select_risk_edges,
    support::allocate_support_nodes,
};

/// Entry point for synthesising risk-augmented topologies.
///
/// # Examples
/// ```
/// use rand::rngs::SmallRng;
/// use ravelin_core::{
///     GeneratorError, PipelineBuilder, RawTopology, TopologyGenerator,
/// };
///
/// /// Deterministic path over `n` nodes.
/// struct Path(usize);
///
/// impl TopologyGenerator for Path {
///     fn family(&self) -> &str { "path" }
///     fn generate(&self, _rng: &mut SmallRng) -> Result<RawTopology, GeneratorError> {
///         let edges = (1..self.0).map(|node| (node - 1, node)).collect();
///         Ok(RawTopology::new(self.0, edges))
///     }
/// }
///
/// let pipeline = PipelineBuilder::new()
///     .with_risk_edge_ratio(0.3)
///     .build()
///     .expect("configuration is valid");
/// let annotated = pipeline.run(&Path(8)).expect("run must succeed");
/// assert!(annotated.topology().is_connected());
/// assert_eq!(annotated.risk_edges().len(), 2);
/// for &edge in annotated.risk_edges() {
///     assert!(annotated.support_node(edge).is_some());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Pipeline {
    risk_edge_ratio: f64,
    source: Option<usize>,
    target: Option<usize>,
    cost_profile: CostProfile,
    rng_seed: u64,
}

impl Pipeline {
    pub(crate) fn new(
        risk_edge_ratio: f64,
        source: Option<usize>,
        target: Option<usize>,
        cost_profile: CostProfile,
        rng_seed: u64,
    ) -> Self {
        Self {
            risk_edge_ratio,
            source,
            target,
            cost_profile,
            rng_seed,
        }
    }

    /// Returns the configured risk-edge ratio.
    #[must_use]
    pub fn risk_edge_ratio(&self) -> f64 {
        self.risk_edge_ratio
    }

    /// Returns the configured cost profile.
    #[must_use]
    pub fn cost_profile(&self) -> CostProfile {
        self.cost_profile
    }

    /// Returns the seed used for the pipeline's random source.
    #[must_use]
    pub fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    /// Runs the full pipeline against one topology family.
    ///
    /// # Errors
    /// Returns [`EngineError::Generator`] when the family fails,
    /// [`EngineError::EmptyTopology`] when it produces no nodes,
    /// [`EngineError::EndpointOutOfRange`] when a configured endpoint does
    /// not exist, and the component errors documented in [`EngineError`]
    /// for the repair, selection, and allocation stages.
    #[instrument(
        name = "engine.run",
        err,
        skip(self, generator),
        fields(
            family = %generator.family(),
            risk_edge_ratio = self.risk_edge_ratio,
            seed = self.rng_seed,
        ),
    )]
    pub fn run<G: TopologyGenerator>(&self, generator: &G) -> Result<RiskTopology> {
        let mut rng = SmallRng::seed_from_u64(self.rng_seed);
        let raw = generator
            .generate(&mut rng)
            .map_err(|source| EngineError::Generator {
                family: Arc::from(generator.family()),
                source,
            })?;
        if raw.node_count() == 0 {
            return Err(EngineError::EmptyTopology {
                family: Arc::from(generator.family()),
            });
        }

        let mut topology = Topology::from_raw(raw)?;
        let added_edges = ConnectivityRepairer::new(&mut topology).repair()?;
        let (source, target) = self.resolve_endpoints(topology.node_count())?;
        let count = risk_edge_count(topology.edge_count(), self.risk_edge_ratio);
        let risk_edges = select_risk_edges(&topology, source, target, count, &mut rng)?;
        let supports = allocate_support_nodes(&topology, &risk_edges, &mut rng)?;

        let annotated = assign_costs(
            topology,
            risk_edges,
            &supports,
            self.cost_profile,
            &mut rng,
        );
        info!(
            nodes = annotated.topology().node_count(),
            edges = annotated.topology().edge_count(),
            risk_edges = annotated.risk_edges().len(),
            added_edges,
            source,
            target,
            "risk topology synthesised"
        );
        Ok(annotated)
    }

    fn resolve_endpoints(&self, node_count: usize) -> Result<(usize, usize)> {
        let source = self.source.unwrap_or(0);
        let target = self.target.unwrap_or(node_count - 1);
        for (kind, node) in [(EndpointKind::Source, source), (EndpointKind::Target, target)] {
            if node >= node_count {
                return Err(EngineError::EndpointOutOfRange {
                    kind,
                    node,
                    node_count,
                });
            }
        }
        Ok((source, target))
    }
}

/// Number of risk edges implied by an edge count and a ratio.
fn risk_edge_count(edge_count: usize, ratio: f64) -> usize {
    (edge_count as f64 * ratio).floor() as usize
}
