//! Ravelin core library: the risk-augmented topology engine.
//!
//! Ravelin synthesises test topologies for resilience-analysis research.
//! A pluggable [`TopologyGenerator`] supplies a raw random graph; the
//! pipeline repairs it into a single connected component, selects a
//! risk-edge subset biased to intersect a shortest source→target path,
//! allocates each risk edge a support node from its endpoints'
//! neighbourhoods, assigns traversal costs, and flattens the result into a
//! neutral adjacency export.
//!
//! # Determinism
//!
//! Every random decision flows from one seedable [`rand::rngs::SmallRng`]
//! configured through [`PipelineBuilder::with_rng_seed`]; identical seeds
//! and inputs reproduce identical exports. Ties in nearest-neighbour and
//! component enumeration resolve to the first minimum encountered under
//! ascending node order.

mod builder;
mod cost;
mod error;
mod export;
mod generator;
mod geometry;
mod graph;
mod pipeline;
mod repair;
mod result;
mod risk;
mod support;

pub use crate::{
    builder::{DEFAULT_RISK_EDGE_RATIO, DEFAULT_RNG_SEED, PipelineBuilder},
    cost::{
        Cost, CostProfile, DEFAULT_ELEVATED_COST, DEFAULT_MAX_NORMAL_COST,
        DEFAULT_MIN_NORMAL_COST,
    },
    error::{
        EndpointKind, EngineError, EngineErrorCode, GeneratorError, GeneratorErrorCode, Result,
    },
    export::AdjacencyExport,
    generator::{RawTopology, TopologyGenerator},
    geometry::Position,
    graph::{Edge, Topology},
    pipeline::Pipeline,
    result::RiskTopology,
};
