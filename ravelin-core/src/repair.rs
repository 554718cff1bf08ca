//! Connectivity repair: greedy augmentation to a single component.
//!
//! Repair runs in two stages. Spatially embedded topologies first connect
//! every isolated node to its Euclidean-nearest anchored neighbour; the
//! component merge then joins every remaining component to the largest one
//! through the closest cross pair (or, without positions, through the
//! smallest node ids). The result is checked before it is returned: more
//! than one surviving component is an internal invariant violation.

use tracing::{debug, info};

use crate::{
    error::{EngineError, Result},
    geometry::Position,
    graph::{Edge, Topology},
};

pub(crate) struct ConnectivityRepairer<'topo> {
    topology: &'topo mut Topology,
}

impl<'topo> ConnectivityRepairer<'topo> {
    pub(crate) fn new(topology: &'topo mut Topology) -> Self {
        Self { topology }
    }

    /// Augments the topology until it has exactly one connected component
    /// and returns the number of edges added.
    ///
    /// # Errors
    /// Returns [`EngineError::DisconnectedTopology`] when more than one
    /// component survives. The merge stage makes this unreachable; the
    /// check guards the invariant before the topology leaves this stage.
    pub(crate) fn repair(mut self) -> Result<usize> {
        if self.topology.node_count() <= 1 {
            return Ok(0);
        }
        let mut added = self.connect_isolates();
        added += self.merge_components();
        let components = self.topology.components().len();
        if components != 1 {
            return Err(EngineError::DisconnectedTopology { components });
        }
        info!(added_edges = added, "connectivity repair completed");
        Ok(added)
    }

    /// Connects every degree-zero node to its nearest anchored neighbour.
    ///
    /// Requires positions; combinatorial topologies leave their isolates to
    /// the component merge. The anchored set is snapshotted up front so a
    /// repaired isolate never attracts a later one.
    fn connect_isolates(&mut self) -> usize {
        let Some(positions) = self.topology.positions() else {
            return 0;
        };
        let node_count = self.topology.node_count();
        let isolates: Vec<usize> = (0..node_count)
            .filter(|&node| self.topology.degree(node) == 0)
            .collect();
        let anchored: Vec<usize> = (0..node_count)
            .filter(|&node| self.topology.degree(node) > 0)
            .collect();
        if isolates.is_empty() || anchored.is_empty() {
            return 0;
        }

        let planned: Vec<Edge> = isolates
            .iter()
            .map(|&node| {
                let neighbour = nearest_node(node, &anchored, positions);
                Edge::new(node, neighbour)
            })
            .collect();
        for edge in &planned {
            self.topology.add_edge(*edge);
            debug!(
                node = edge.left(),
                neighbour = edge.right(),
                "connected isolated node to nearest neighbour"
            );
        }
        planned.len()
    }

    /// Joins every smaller component to the largest one.
    fn merge_components(&mut self) -> usize {
        let mut components = self.topology.components();
        if components.len() <= 1 {
            return 0;
        }
        components.sort_by_key(Vec::len);
        let Some(main) = components.pop() else {
            return 0;
        };
        let mut added = 0;
        for component in &components {
            let edge = match self.topology.positions() {
                Some(positions) => closest_cross_pair(component, &main, positions),
                // Without positions there is no distance to minimise; the
                // smallest ids on either side are the documented pick.
                None => Edge::new(component[0], main[0]),
            };
            if self.topology.add_edge(edge) {
                added += 1;
            }
            debug!(
                left = edge.left(),
                right = edge.right(),
                component_size = component.len(),
                "bridged component into main component"
            );
        }
        added
    }
}

/// Returns the candidate closest to `node`, favouring the first minimum
/// encountered in ascending candidate order.
fn nearest_node(node: usize, candidates: &[usize], positions: &[Position]) -> usize {
    let origin = positions[node];
    let mut best = candidates[0];
    let mut best_distance = origin.distance(positions[best]);
    for &candidate in &candidates[1..] {
        let distance = origin.distance(positions[candidate]);
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}

/// Returns the globally closest pair across the two node sets, favouring the
/// first minimum encountered in ascending order on both sides.
fn closest_cross_pair(component: &[usize], main: &[usize], positions: &[Position]) -> Edge {
    let mut best = Edge::new(component[0], main[0]);
    let mut best_distance = positions[component[0]].distance(positions[main[0]]);
    for &node in component {
        for &main_node in main {
            let distance = positions[node].distance(positions[main_node]);
            if distance < best_distance {
                best = Edge::new(node, main_node);
                best_distance = distance;
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;
    use rstest::rstest;

    fn spatial(positions: Vec<(f64, f64)>, edges: &[(usize, usize)]) -> Topology {
        let node_count = positions.len();
        let positions = positions
            .into_iter()
            .map(|(x, y)| Position::new(x, y))
            .collect();
        let mut topology = Topology::with_positions(node_count, positions);
        for &(a, b) in edges {
            topology.add_edge(Edge::new(a, b));
        }
        topology
    }

    #[test]
    fn single_node_is_a_noop() {
        let mut topology = Topology::new(1);
        let added = ConnectivityRepairer::new(&mut topology)
            .repair()
            .expect("single node needs no repair");
        assert_eq!(added, 0);
        assert!(topology.is_connected());
    }

    #[test]
    fn isolated_node_joins_its_nearest_neighbour() {
        // Node 4 sits alone near node 2; everything else forms a path.
        let mut topology = spatial(
            vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (2.2, 0.4)],
            &[(0, 1), (1, 2), (2, 3)],
        );
        let added = ConnectivityRepairer::new(&mut topology)
            .repair()
            .expect("repair must converge");
        assert_eq!(added, 1);
        assert!(topology.contains_edge(Edge::new(4, 2)));
        assert!(topology.is_connected());
    }

    #[test]
    fn two_components_merge_through_the_closest_cross_pair() {
        // Components {0,1} and {2,3,4,5}; the closest cross pair is (1, 2).
        let mut topology = spatial(
            vec![
                (0.0, 0.0),
                (1.0, 0.0),
                (2.5, 0.0),
                (3.5, 0.0),
                (4.5, 0.0),
                (5.5, 0.0),
            ],
            &[(0, 1), (2, 3), (3, 4), (4, 5)],
        );
        let added = ConnectivityRepairer::new(&mut topology)
            .repair()
            .expect("repair must converge");
        assert_eq!(added, 1);
        assert!(topology.contains_edge(Edge::new(1, 2)));
        assert_eq!(topology.components().len(), 1);
    }

    #[test]
    fn combinatorial_components_merge_through_smallest_ids() {
        let mut topology = Topology::new(6);
        topology.add_edge(Edge::new(0, 1));
        topology.add_edge(Edge::new(2, 3));
        topology.add_edge(Edge::new(3, 4));
        topology.add_edge(Edge::new(4, 5));
        let added = ConnectivityRepairer::new(&mut topology)
            .repair()
            .expect("repair must converge");
        assert_eq!(added, 1);
        assert!(topology.contains_edge(Edge::new(0, 2)));
        assert!(topology.is_connected());
    }

    #[rstest]
    #[case::all_isolated_spatial(true)]
    #[case::all_isolated_combinatorial(false)]
    fn edge_free_graphs_become_connected(#[case] spatial_family: bool) {
        let mut topology = if spatial_family {
            spatial(vec![(0.0, 0.0), (4.0, 0.0), (1.0, 1.0), (9.0, 9.0)], &[])
        } else {
            Topology::new(4)
        };
        let added = ConnectivityRepairer::new(&mut topology)
            .repair()
            .expect("repair must converge");
        assert_eq!(added, 3);
        assert!(topology.is_connected());
    }
}
