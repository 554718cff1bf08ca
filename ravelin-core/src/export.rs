//! Flattening of annotated topologies into the boundary artifact.

use std::collections::BTreeMap;

use crate::{cost::Cost, result::RiskTopology};

/// Neutral adjacency mapping handed to routing/reliability consumers:
/// `node -> {neighbour -> cost}` with both directions materialised.
///
/// Keys and neighbours enumerate in ascending order; a [`Cost`] serializes
/// as a scalar for normal edges and a two-element sequence for risk edges,
/// so consumers discriminate by shape.
pub type AdjacencyExport = BTreeMap<usize, BTreeMap<usize, Cost>>;

/// Builds the symmetric adjacency mapping for an annotated topology.
///
/// Every node appears as a key, isolated or not, matching the node set of
/// the topology; each undirected edge contributes one entry per direction
/// with an equal cost value.
pub(crate) fn flatten(annotated: &RiskTopology) -> AdjacencyExport {
    let mut export: AdjacencyExport = (0..annotated.topology().node_count())
        .map(|node| (node, BTreeMap::new()))
        .collect();
    for (edge, cost) in annotated.costs() {
        let (left, right) = edge.endpoints();
        if let Some(neighbours) = export.get_mut(&left) {
            neighbours.insert(right, cost);
        }
        if let Some(neighbours) = export.get_mut(&right) {
            neighbours.insert(left, cost);
        }
    }
    export
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::{
        cost::{Cost, CostProfile, assign_costs},
        graph::{Edge, Topology},
    };
    use rand::{SeedableRng, rngs::SmallRng};

    fn annotated() -> crate::RiskTopology {
        let mut topology = Topology::new(4);
        for (a, b) in [(0, 1), (1, 2), (2, 3)] {
            topology.add_edge(Edge::new(a, b));
        }
        let supports = BTreeMap::from([(Edge::new(1, 2), 0)]);
        let mut rng = SmallRng::seed_from_u64(2);
        assign_costs(
            topology,
            vec![Edge::new(1, 2)],
            &supports,
            CostProfile::default(),
            &mut rng,
        )
    }

    #[test]
    fn export_is_symmetric() {
        let export = annotated().export();
        for (&node, neighbours) in &export {
            for (&neighbour, cost) in neighbours {
                assert_eq!(export[&neighbour].get(&node), Some(cost));
            }
        }
    }

    #[test]
    fn export_is_idempotent() {
        let annotated = annotated();
        assert_eq!(annotated.export(), annotated.export());
    }

    #[test]
    fn export_preserves_cost_shapes() {
        let export = annotated().export();
        assert!(matches!(
            export[&1][&2],
            Cost::Risk {
                magnitude: 20,
                support: 0
            }
        ));
        assert!(matches!(export[&0][&1], Cost::Normal(_)));
    }

    #[test]
    fn export_lists_every_node() {
        let export = annotated().export();
        assert_eq!(export.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }
}
