//! Property tests for the pipeline invariants.

mod common;

use common::Fixed;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use ravelin_core::{Cost, EngineError, PipelineBuilder, RawTopology};

/// Arbitrary small raw topologies: a node count plus an unfiltered pair
/// soup; self-pairs are dropped and duplicates collapse in the engine.
fn raw_topologies() -> impl Strategy<Value = RawTopology> {
    (2usize..20).prop_flat_map(|node_count| {
        prop::collection::vec((0..node_count, 0..node_count), 0..48).prop_map(move |pairs| {
            let edges = pairs.into_iter().filter(|(a, b)| a != b).collect();
            RawTopology::new(node_count, edges)
        })
    })
}

proptest! {
    #[test]
    fn pipeline_invariants_hold_for_arbitrary_topologies(
        raw in raw_topologies(),
        ratio in 0.05f64..0.95,
        seed in any::<u64>(),
    ) {
        let pipeline = PipelineBuilder::new()
            .with_risk_edge_ratio(ratio)
            .with_rng_seed(seed)
            .build()
            .expect("configuration is valid");
        let annotated = match pipeline.run(&Fixed::new("arbitrary", raw)) {
            Ok(annotated) => annotated,
            // Sparse topologies can legitimately exhaust the support pool;
            // every other failure is a bug.
            Err(EngineError::NoSupportCandidate { .. }) => return Ok(()),
            Err(other) => return Err(TestCaseError::fail(format!("unexpected error: {other}"))),
        };

        let topology = annotated.topology();
        prop_assert!(topology.is_connected());

        let expected = (topology.edge_count() as f64 * ratio).floor() as usize;
        let selected = annotated.risk_edges().len();
        prop_assert!(
            selected == expected || (expected > 0 && selected == expected - 1),
            "risk set size {selected} must be the target {expected} or the documented shortfall"
        );

        for &edge in annotated.risk_edges() {
            let support = annotated.support_node(edge).expect("risk edges carry supports");
            let (left, right) = edge.endpoints();
            prop_assert!(
                topology.neighbours(left).any(|n| n == support)
                    || topology.neighbours(right).any(|n| n == support)
            );
        }

        for (_, cost) in annotated.costs() {
            match cost {
                Cost::Normal(value) => prop_assert!((1..=10).contains(&value)),
                Cost::Risk { magnitude, .. } => prop_assert_eq!(magnitude, 20),
            }
        }

        let export = annotated.export();
        prop_assert_eq!(export.len(), topology.node_count());
        for (&node, neighbours) in &export {
            for (&neighbour, cost) in neighbours {
                prop_assert_eq!(export[&neighbour].get(&node), Some(cost));
            }
        }
        prop_assert_eq!(annotated.export(), export);
    }

    #[test]
    fn distinct_supports_for_distinct_risk_edges(
        raw in raw_topologies(),
        seed in any::<u64>(),
    ) {
        let pipeline = PipelineBuilder::new()
            .with_risk_edge_ratio(0.3)
            .with_rng_seed(seed)
            .build()
            .expect("configuration is valid");
        let Ok(annotated) = pipeline.run(&Fixed::new("arbitrary", raw)) else {
            return Ok(());
        };
        let supports: Vec<usize> = annotated
            .risk_edges()
            .iter()
            .filter_map(|&edge| annotated.support_node(edge))
            .collect();
        let mut deduped = supports.clone();
        deduped.sort_unstable();
        deduped.dedup();
        prop_assert_eq!(supports.len(), deduped.len(), "support nodes must be unique");
    }
}
