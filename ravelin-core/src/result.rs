//! Annotated output of a pipeline run.

use std::collections::BTreeMap;

use crate::{
    cost::Cost,
    export::{self, AdjacencyExport},
    graph::{Edge, Topology},
};

/// A connected topology annotated with risk edges, support nodes, and
/// per-edge traversal costs.
///
/// This is the value returned by [`crate::Pipeline::run`]; downstream
/// consumers usually flatten it with [`RiskTopology::export`].
#[derive(Clone, Debug, PartialEq)]
pub struct RiskTopology {
    topology: Topology,
    risk_edges: Vec<Edge>,
    costs: BTreeMap<Edge, Cost>,
}

impl RiskTopology {
    pub(crate) fn new(
        topology: Topology,
        risk_edges: Vec<Edge>,
        costs: BTreeMap<Edge, Cost>,
    ) -> Self {
        Self {
            topology,
            risk_edges,
            costs,
        }
    }

    /// Returns the underlying connected topology.
    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Returns the risk edges in selection order.
    #[must_use]
    pub fn risk_edges(&self) -> &[Edge] {
        &self.risk_edges
    }

    /// Returns the cost carried by one edge, if the edge exists.
    #[must_use]
    pub fn cost(&self, edge: Edge) -> Option<Cost> {
        self.costs.get(&edge).copied()
    }

    /// Iterates `(edge, cost)` pairs in canonical edge order.
    pub fn costs(&self) -> impl Iterator<Item = (Edge, Cost)> + '_ {
        self.costs.iter().map(|(&edge, &cost)| (edge, cost))
    }

    /// Returns the support node allocated to a risk edge.
    #[must_use]
    pub fn support_node(&self, edge: Edge) -> Option<usize> {
        self.cost(edge).and_then(Cost::support)
    }

    /// Flattens the annotated topology into the neutral adjacency mapping
    /// handed to downstream consumers.
    ///
    /// The transform is pure: calling it twice yields identical mappings.
    #[must_use]
    pub fn export(&self) -> AdjacencyExport {
        export::flatten(self)
    }
}
