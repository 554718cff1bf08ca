//! Spatial proximity family: edges within a fixed connection radius.

use rand::rngs::SmallRng;
use ravelin_core::{GeneratorError, RawTopology, TopologyGenerator};

use crate::grid::{random_grid_positions, validate_grid};

/// Fixed-radius family: nodes on a random integer grid, an edge for every
/// pair strictly closer than the connection radius.
///
/// Sparse placements routinely leave isolates and fragments; the pipeline's
/// connectivity repair closes them.
#[derive(Clone, Copy, Debug)]
pub struct FixedRadius {
    nodes: usize,
    width: u32,
    height: u32,
    radius: f64,
}

impl FixedRadius {
    /// Creates the family after validating grid capacity and radius.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidParameter`] when the radius is not a
    /// positive finite number or the grid cannot host `nodes` distinct
    /// positions.
    pub fn new(nodes: usize, width: u32, height: u32, radius: f64) -> Result<Self, GeneratorError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeneratorError::InvalidParameter {
                reason: format!("connection radius must be positive and finite (got {radius})"),
            });
        }
        validate_grid(width, height, nodes)?;
        Ok(Self {
            nodes,
            width,
            height,
            radius,
        })
    }
}

impl TopologyGenerator for FixedRadius {
    fn family(&self) -> &str {
        "fixed-radius"
    }

    fn generate(&self, rng: &mut SmallRng) -> Result<RawTopology, GeneratorError> {
        let positions = random_grid_positions(self.width, self.height, self.nodes, rng);
        let mut edges = Vec::new();
        for a in 0..self.nodes {
            for b in a + 1..self.nodes {
                if positions[a].distance(positions[b]) < self.radius {
                    edges.push((a, b));
                }
            }
        }
        Ok(RawTopology::with_positions(self.nodes, edges, positions))
    }
}
