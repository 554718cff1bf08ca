//! Greedy support-node allocation for risk edges.
//!
//! Each risk edge draws its support node from the concatenation of both
//! endpoints' open neighbourhoods. Allocation enforces strict uniqueness:
//! a node already serving another risk edge is filtered out of the pool,
//! and an empty pool is surfaced to the caller rather than degraded.

use std::collections::{BTreeMap, BTreeSet};

use rand::{rngs::SmallRng, seq::SliceRandom};
use tracing::debug;

use crate::{
    error::{EngineError, Result},
    graph::{Edge, Topology},
};

/// Allocates one support node per risk edge, in the list's order.
///
/// The candidate pool keeps duplicates (a node adjacent to both endpoints
/// is drawn with doubled weight) and includes the endpoints themselves when
/// they neighbour the opposite endpoint.
pub(crate) fn allocate_support_nodes(
    topology: &Topology,
    risk_edges: &[Edge],
    rng: &mut SmallRng,
) -> Result<BTreeMap<Edge, usize>> {
    let mut used: BTreeSet<usize> = BTreeSet::new();
    let mut allocations = BTreeMap::new();
    for &edge in risk_edges {
        let (left, right) = edge.endpoints();
        let pool: Vec<usize> = topology
            .neighbours(left)
            .chain(topology.neighbours(right))
            .filter(|candidate| !used.contains(candidate))
            .collect();
        let Some(&support) = pool.choose(rng) else {
            return Err(EngineError::NoSupportCandidate { left, right });
        };
        used.insert(support);
        allocations.insert(edge, support);
        debug!(left, right, support, "allocated support node");
    }
    Ok(allocations)
}
