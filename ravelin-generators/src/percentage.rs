//! Spatial proximity family: each node links a percentage of its nearest
//! neighbours.

use rand::rngs::SmallRng;
use ravelin_core::{GeneratorError, RawTopology, TopologyGenerator};

use crate::grid::{random_grid_positions, validate_grid};

/// Percentage-nearest family: every node connects to its
/// `ceil(percentage/100 · (n-1))` nearest neighbours on a random grid.
///
/// The relation is symmetrised by the undirected graph model, so a node can
/// end up with more links than its own quota when it is a near neighbour of
/// many others.
#[derive(Clone, Copy, Debug)]
pub struct PercentageNearest {
    nodes: usize,
    percentage: f64,
    width: u32,
    height: u32,
}

impl PercentageNearest {
    /// Creates the family after validating the percentage and the grid.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidParameter`] when the percentage lies
    /// outside `(0, 100]` or the grid cannot host `nodes` distinct
    /// positions.
    pub fn new(
        nodes: usize,
        percentage: f64,
        width: u32,
        height: u32,
    ) -> Result<Self, GeneratorError> {
        if !(percentage.is_finite() && percentage > 0.0 && percentage <= 100.0) {
            return Err(GeneratorError::InvalidParameter {
                reason: format!("neighbour percentage must lie in (0, 100] (got {percentage})"),
            });
        }
        validate_grid(width, height, nodes)?;
        Ok(Self {
            nodes,
            percentage,
            width,
            height,
        })
    }

    fn quota(&self) -> usize {
        (self.percentage / 100.0 * (self.nodes.saturating_sub(1)) as f64).ceil() as usize
    }
}

impl TopologyGenerator for PercentageNearest {
    fn family(&self) -> &str {
        "percentage-nearest"
    }

    fn generate(&self, rng: &mut SmallRng) -> Result<RawTopology, GeneratorError> {
        let positions = random_grid_positions(self.width, self.height, self.nodes, rng);
        let quota = self.quota();
        let mut edges = Vec::new();
        for node in 0..self.nodes {
            let mut ranked: Vec<usize> = (0..self.nodes).filter(|&other| other != node).collect();
            // Distance first, node id second: grid points can tie exactly.
            ranked.sort_by(|&a, &b| {
                let da = positions[node].distance(positions[a]);
                let db = positions[node].distance(positions[b]);
                da.total_cmp(&db).then(a.cmp(&b))
            });
            for &neighbour in ranked.iter().take(quota) {
                edges.push((node, neighbour));
            }
        }
        Ok(RawTopology::with_positions(self.nodes, edges, positions))
    }
}
