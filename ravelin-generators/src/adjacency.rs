//! Combinatorial family driven by a random symmetric adjacency matrix.

use rand::{Rng, rngs::SmallRng};
use ravelin_core::{GeneratorError, RawTopology, TopologyGenerator};

/// Adjacency-matrix family: every unordered pair joins independently with a
/// fixed connection probability, equivalent to sampling a symmetric boolean
/// adjacency matrix with a zero diagonal.
#[derive(Clone, Copy, Debug)]
pub struct AdjacencyMatrix {
    nodes: usize,
    connection_probability: f64,
}

impl AdjacencyMatrix {
    /// Creates the family after validating the connection probability.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidParameter`] when the probability
    /// lies outside `[0, 1]`.
    pub fn new(nodes: usize, connection_probability: f64) -> Result<Self, GeneratorError> {
        if !(connection_probability.is_finite()
            && (0.0..=1.0).contains(&connection_probability))
        {
            return Err(GeneratorError::InvalidParameter {
                reason: format!(
                    "connection probability must lie in [0, 1] (got {connection_probability})"
                ),
            });
        }
        Ok(Self {
            nodes,
            connection_probability,
        })
    }
}

impl TopologyGenerator for AdjacencyMatrix {
    fn family(&self) -> &str {
        "adjacency-matrix"
    }

    fn generate(&self, rng: &mut SmallRng) -> Result<RawTopology, GeneratorError> {
        let mut edges = Vec::new();
        for a in 0..self.nodes {
            for b in a + 1..self.nodes {
                if rng.gen_bool(self.connection_probability) {
                    edges.push((a, b));
                }
            }
        }
        Ok(RawTopology::new(self.nodes, edges))
    }
}
