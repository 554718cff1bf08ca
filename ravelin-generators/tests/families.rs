//! Every topology family driven end-to-end through the pipeline.

use ravelin_core::{Cost, EngineError, PipelineBuilder, RiskTopology, TopologyGenerator};
use ravelin_generators::{
    AdjacencyMatrix, DiagramBased, FixedRadius, PercentageNearest, UniformEdgeCount,
};

fn run_family<G: TopologyGenerator>(family: &G, seed: u64) -> Result<RiskTopology, EngineError> {
    PipelineBuilder::new()
        .with_risk_edge_ratio(0.2)
        .with_rng_seed(seed)
        .build()
        .expect("configuration is valid")
        .run(family)
}

fn assert_invariants(annotated: &RiskTopology) {
    let topology = annotated.topology();
    assert!(topology.is_connected(), "pipeline output must be connected");

    let expected = (topology.edge_count() as f64 * 0.2).floor() as usize;
    let selected = annotated.risk_edges().len();
    assert!(
        selected == expected || (expected > 0 && selected == expected - 1),
        "risk set size {selected} must be the target {expected} or one short"
    );

    for &edge in annotated.risk_edges() {
        let support = annotated
            .support_node(edge)
            .expect("every risk edge carries a support node");
        let (left, right) = edge.endpoints();
        assert!(
            topology.neighbours(left).any(|n| n == support)
                || topology.neighbours(right).any(|n| n == support)
        );
    }

    for (_, cost) in annotated.costs() {
        match cost {
            Cost::Normal(value) => assert!((1..=10).contains(&value)),
            Cost::Risk { magnitude, .. } => assert_eq!(magnitude, 20),
        }
    }

    let export = annotated.export();
    for (&node, neighbours) in &export {
        for (&neighbour, cost) in neighbours {
            assert_eq!(export[&neighbour].get(&node), Some(cost));
        }
    }
}

#[test]
fn uniform_edge_count_family_runs_end_to_end() {
    let family = UniformEdgeCount::new(10, 20).expect("20 <= 45");
    for seed in 0..8 {
        let annotated = run_family(&family, seed).expect("dense G(n, M) must succeed");
        assert_eq!(annotated.topology().node_count(), 10);
        assert_invariants(&annotated);
    }
}

#[test]
fn fixed_radius_family_runs_end_to_end() {
    let family = FixedRadius::new(12, 10, 10, 4.0).expect("parameters are valid");
    for seed in 0..8 {
        let annotated = run_family(&family, seed).expect("dense radius graph must succeed");
        assert_invariants(&annotated);
        assert!(annotated.topology().positions().is_some());
    }
}

#[test]
fn percentage_nearest_family_runs_end_to_end() {
    let family = PercentageNearest::new(10, 30.0, 12, 12).expect("parameters are valid");
    for seed in 0..8 {
        let annotated = run_family(&family, seed).expect("30% neighbours must succeed");
        assert_invariants(&annotated);
    }
}

#[test]
fn adjacency_matrix_family_runs_end_to_end() {
    let family = AdjacencyMatrix::new(12, 0.5).expect("parameters are valid");
    for seed in 0..8 {
        let annotated = run_family(&family, seed).expect("p = 0.5 must succeed");
        assert_invariants(&annotated);
    }
}

#[test]
fn diagram_based_family_runs_end_to_end() {
    let family = DiagramBased::new(15).expect("parameters are valid");
    for seed in 0..8 {
        let annotated = run_family(&family, seed).expect("triangulated points must succeed");
        assert_invariants(&annotated);
        assert!(annotated.topology().positions().is_some());
    }
}

#[test]
fn sparse_families_survive_connectivity_repair() {
    // p = 0 leaves every node isolated; the repairer must still hand the
    // risk stages a connected topology.
    let family = AdjacencyMatrix::new(8, 0.0).expect("parameters are valid");
    for seed in 0..8 {
        let annotated = run_family(&family, seed).expect("repaired star must succeed");
        assert!(annotated.topology().is_connected());
        assert_eq!(annotated.topology().edge_count(), 7);
        assert_invariants(&annotated);
    }
}
