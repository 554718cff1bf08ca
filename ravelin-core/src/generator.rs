//! Topology-generation capability consumed by the pipeline.
//!
//! A generator supplies only the initial node/edge/position set for one
//! topology family; connectivity repair, risk selection, support allocation,
//! and cost assignment are the pipeline's job.

use rand::rngs::SmallRng;

use crate::{error::GeneratorError, geometry::Position};

/// Raw node/edge/position set handed from a generator to the pipeline.
///
/// Edges may arrive in any order and may repeat; the pipeline collapses them
/// into a simple undirected relation. Positions are present only for
/// spatially embedded families.
///
/// # Examples
/// ```
/// use ravelin_core::RawTopology;
///
/// let raw = RawTopology::new(3, vec![(0, 1), (1, 2)]);
/// assert_eq!(raw.node_count(), 3);
/// assert!(raw.positions().is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RawTopology {
    node_count: usize,
    edges: Vec<(usize, usize)>,
    positions: Option<Vec<Position>>,
}

impl RawTopology {
    /// Creates a purely combinatorial topology (no positions).
    #[must_use]
    pub fn new(node_count: usize, edges: Vec<(usize, usize)>) -> Self {
        Self {
            node_count,
            edges,
            positions: None,
        }
    }

    /// Creates a spatially embedded topology with one position per node.
    ///
    /// # Panics
    /// Panics when the number of positions does not match `node_count`.
    #[must_use]
    pub fn with_positions(
        node_count: usize,
        edges: Vec<(usize, usize)>,
        positions: Vec<Position>,
    ) -> Self {
        assert_eq!(
            positions.len(),
            node_count,
            "a spatially embedded topology needs one position per node"
        );
        Self {
            node_count,
            edges,
            positions: Some(positions),
        }
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the raw edge list as produced by the generator.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Returns the node positions when the family is spatially embedded.
    #[must_use]
    pub fn positions(&self) -> Option<&[Position]> {
        self.positions.as_deref()
    }

    pub(crate) fn into_parts(self) -> (usize, Vec<(usize, usize)>, Option<Vec<Position>>) {
        (self.node_count, self.edges, self.positions)
    }
}

/// One topology family's initial-graph sampler.
///
/// Implementations draw every random decision from the supplied [`SmallRng`]
/// so a pipeline seed reproduces the whole run.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use ravelin_core::{GeneratorError, RawTopology, TopologyGenerator};
///
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
/// let mut rng = SmallRng::seed_from_u64(7);
/// let raw = Path(4).generate(&mut rng).expect("path generation cannot fail");
/// assert_eq!(raw.edges().len(), 3);
/// ```
pub trait TopologyGenerator {
    /// Returns the family name used in diagnostics and error wrapping.
    fn family(&self) -> &str;

    /// Samples the initial node/edge/position set.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidParameter`] when the family's
    /// parameters are structurally unsatisfiable.
    fn generate(&self, rng: &mut SmallRng) -> Result<RawTopology, GeneratorError>;
}
