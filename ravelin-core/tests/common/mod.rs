//! Shared fixtures for the pipeline integration tests.

use std::collections::{BTreeSet, VecDeque};

use rand::rngs::SmallRng;
use ravelin_core::{Edge, GeneratorError, RawTopology, Topology, TopologyGenerator};

/// Generator stub that replays a predetermined raw topology.
pub struct Fixed {
    name: &'static str,
    raw: RawTopology,
}

impl Fixed {
    pub fn new(name: &'static str, raw: RawTopology) -> Self {
        Self { name, raw }
    }
}

impl TopologyGenerator for Fixed {
    fn family(&self) -> &str {
        self.name
    }

    fn generate(&self, _rng: &mut SmallRng) -> Result<RawTopology, GeneratorError> {
        Ok(self.raw.clone())
    }
}

/// Generator stub that always fails parameter validation.
pub struct Failing;

impl TopologyGenerator for Failing {
    fn family(&self) -> &str {
        "failing"
    }

    fn generate(&self, _rng: &mut SmallRng) -> Result<RawTopology, GeneratorError> {
        Err(GeneratorError::InvalidParameter {
            reason: "unsatisfiable fixture".into(),
        })
    }
}

/// Recomputes the edges lying on shortest source→target paths by walking
/// the breadth-first predecessor DAG backwards from the target.
///
/// Intentionally a different algorithm from the engine's bidirectional
/// labelling, so the two implementations check each other.
pub fn shortest_path_edges(topology: &Topology, source: usize, target: usize) -> BTreeSet<Edge> {
    let node_count = topology.node_count();
    let mut dist: Vec<Option<usize>> = vec![None; node_count];
    dist[source] = Some(0);
    let mut queue = VecDeque::from([source]);
    while let Some(node) = queue.pop_front() {
        let next = dist[node].unwrap_or(0) + 1;
        for neighbour in topology.neighbours(node) {
            if dist[neighbour].is_none() {
                dist[neighbour] = Some(next);
                queue.push_back(neighbour);
            }
        }
    }

    let mut edges = BTreeSet::new();
    if dist[target].is_none() || source == target {
        return edges;
    }
    let mut on_dag = vec![false; node_count];
    on_dag[target] = true;
    let mut stack = vec![target];
    while let Some(node) = stack.pop() {
        let Some(depth) = dist[node] else { continue };
        if depth == 0 {
            continue;
        }
        for neighbour in topology.neighbours(node) {
            if dist[neighbour] == Some(depth - 1) {
                edges.insert(Edge::new(neighbour, node));
                if !on_dag[neighbour] {
                    on_dag[neighbour] = true;
                    stack.push(neighbour);
                }
            }
        }
    }
    edges
}
