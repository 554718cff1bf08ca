//! G(n, M): a fixed number of edges sampled uniformly.

use rand::{rngs::SmallRng, seq::SliceRandom};
use ravelin_core::{GeneratorError, RawTopology, TopologyGenerator};

/// Uniform-edge-count family: `edges` distinct unordered pairs drawn
/// uniformly from all `n(n-1)/2` candidates.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use ravelin_generators::UniformEdgeCount;
/// use ravelin_core::TopologyGenerator;
///
/// let family = UniformEdgeCount::new(10, 15).expect("15 <= 45");
/// let mut rng = SmallRng::seed_from_u64(3);
/// let raw = family.generate(&mut rng).expect("generation must succeed");
/// assert_eq!(raw.edges().len(), 15);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct UniformEdgeCount {
    nodes: usize,
    edges: usize,
}

impl UniformEdgeCount {
    /// Creates the family after checking the combinatorial maximum.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidParameter`] when `edges` exceeds
    /// `nodes * (nodes - 1) / 2`.
    pub fn new(nodes: usize, edges: usize) -> Result<Self, GeneratorError> {
        let maximum = nodes * nodes.saturating_sub(1) / 2;
        if edges > maximum {
            return Err(GeneratorError::InvalidParameter {
                reason: format!(
                    "{edges} edges requested but {nodes} nodes admit at most {maximum}"
                ),
            });
        }
        Ok(Self { nodes, edges })
    }
}

impl TopologyGenerator for UniformEdgeCount {
    fn family(&self) -> &str {
        "uniform-edge-count"
    }

    fn generate(&self, rng: &mut SmallRng) -> Result<RawTopology, GeneratorError> {
        let mut candidates = Vec::with_capacity(self.nodes * self.nodes.saturating_sub(1) / 2);
        for a in 0..self.nodes {
            for b in a + 1..self.nodes {
                candidates.push((a, b));
            }
        }
        let edges = candidates
            .choose_multiple(rng, self.edges)
            .copied()
            .collect();
        Ok(RawTopology::new(self.nodes, edges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    #[test]
    fn produces_exactly_the_requested_edge_count() {
        let family = UniformEdgeCount::new(8, 12).expect("12 <= 28");
        let mut rng = SmallRng::seed_from_u64(7);
        let raw = family.generate(&mut rng).expect("generation must succeed");
        assert_eq!(raw.node_count(), 8);
        assert_eq!(raw.edges().len(), 12);
        let distinct: BTreeSet<(usize, usize)> = raw.edges().iter().copied().collect();
        assert_eq!(distinct.len(), 12, "pairs must be sampled without replacement");
        assert!(raw.positions().is_none());
    }

    #[test]
    fn complete_graph_is_the_upper_bound() {
        let family = UniformEdgeCount::new(5, 10).expect("10 == 5*4/2");
        let mut rng = SmallRng::seed_from_u64(2);
        let raw = family.generate(&mut rng).expect("generation must succeed");
        assert_eq!(raw.edges().len(), 10);
    }

    #[test]
    fn combinatorial_overflow_is_rejected() {
        let err = UniformEdgeCount::new(5, 11).expect_err("11 > 10");
        assert!(matches!(err, GeneratorError::InvalidParameter { .. }));
    }
}
