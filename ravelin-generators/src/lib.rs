//! Topology families for the Ravelin pipeline.
//!
//! Each family implements [`ravelin_core::TopologyGenerator`] and supplies
//! only the initial node/edge/position set; connectivity repair and the
//! risk stages live in the core pipeline. Spatially embedded families
//! ([`FixedRadius`], [`PercentageNearest`], [`DiagramBased`]) attach node
//! positions; the combinatorial families ([`UniformEdgeCount`],
//! [`AdjacencyMatrix`]) leave them absent.

mod adjacency;
mod diagram;
mod fixed_radius;
mod grid;
mod percentage;
mod uniform;

pub use crate::{
    adjacency::AdjacencyMatrix,
    diagram::DiagramBased,
    fixed_radius::FixedRadius,
    percentage::PercentageNearest,
    uniform::UniformEdgeCount,
};
