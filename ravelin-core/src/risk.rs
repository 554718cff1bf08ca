//! Risk-edge selection biased towards shortest source→target paths.
//!
//! Selection is intentionally two-phase: a uniform draw of `count - 1`
//! edges, then one edge appended from the not-yet-drawn shortest-path edge
//! set. When the uniform draw already covers that set the result stays one
//! short of the target; the shortfall is a documented outcome, not an
//! error.

use std::collections::{BTreeSet, VecDeque};

use rand::{rngs::SmallRng, seq::SliceRandom};
use tracing::{debug, warn};

use crate::{
    error::{EngineError, Result},
    graph::{Edge, Topology},
};

/// Draws `count` distinct risk edges, at least one of which lies on a
/// shortest source→target path whenever the draw leaves one available.
pub(crate) fn select_risk_edges(
    topology: &Topology,
    source: usize,
    target: usize,
    count: usize,
    rng: &mut SmallRng,
) -> Result<Vec<Edge>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let edges = topology.edges();
    if count - 1 > edges.len() {
        return Err(EngineError::InsufficientEdges {
            requested: count - 1,
            available: edges.len(),
        });
    }

    let mut picked: Vec<Edge> = edges
        .choose_multiple(rng, count - 1)
        .copied()
        .collect();
    let drawn: BTreeSet<Edge> = picked.iter().copied().collect();
    let on_path = shortest_path_edge_set(topology, source, target);
    let available: Vec<Edge> = on_path.difference(&drawn).copied().collect();
    if let Some(&edge) = available.choose(rng) {
        debug!(
            left = edge.left(),
            right = edge.right(),
            "appended shortest-path edge to risk set"
        );
        picked.push(edge);
    } else {
        warn!(
            requested = count,
            selected = picked.len(),
            "shortest-path edge set exhausted by uniform draw; risk set short by one"
        );
    }
    Ok(picked)
}

/// Collects every edge lying on at least one shortest source→target path.
///
/// An edge `(u, v)` lies on a shortest path exactly when the hop distances
/// satisfy `d_source(u) + 1 + d_target(v) = d_source(target)` in one of the
/// two orientations, so two breadth-first labellings cover all paths without
/// enumerating them.
pub(crate) fn shortest_path_edge_set(
    topology: &Topology,
    source: usize,
    target: usize,
) -> BTreeSet<Edge> {
    let from_source = hop_distances(topology, source);
    let from_target = hop_distances(topology, target);
    let Some(Some(total)) = from_source.get(target).copied() else {
        return BTreeSet::new();
    };

    let mut on_path = BTreeSet::new();
    for edge in topology.edges() {
        let (left, right) = edge.endpoints();
        if lies_on_shortest_path(&from_source, &from_target, left, right, total)
            || lies_on_shortest_path(&from_source, &from_target, right, left, total)
        {
            on_path.insert(edge);
        }
    }
    on_path
}

fn lies_on_shortest_path(
    from_source: &[Option<usize>],
    from_target: &[Option<usize>],
    near: usize,
    far: usize,
    total: usize,
) -> bool {
    match (from_source[near], from_target[far]) {
        (Some(to_near), Some(from_far)) => to_near + 1 + from_far == total,
        _ => false,
    }
}

/// Unweighted hop distances from `origin`; unreachable nodes stay `None`.
fn hop_distances(topology: &Topology, origin: usize) -> Vec<Option<usize>> {
    let mut distances = vec![None; topology.node_count()];
    if origin >= topology.node_count() {
        return distances;
    }
    distances[origin] = Some(0);
    let mut queue = VecDeque::from([origin]);
    while let Some(node) = queue.pop_front() {
        let next = distances[node].unwrap_or(0) + 1;
        for neighbour in topology.neighbours(node) {
            if distances[neighbour].is_none() {
                distances[neighbour] = Some(next);
                queue.push_back(neighbour);
            }
        }
    }
    distances
}
