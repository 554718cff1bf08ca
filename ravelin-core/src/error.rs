//! Error types for the Ravelin core library.
//!
//! Defines the generator-facing and pipeline-facing error enums together
//! with stable machine-readable codes for logging surfaces.

use core::fmt;
use std::sync::Arc;

use thiserror::Error;

/// An error produced by a [`crate::TopologyGenerator`] implementation.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// The family's parameters cannot produce a topology.
    #[error("invalid generator parameter: {reason}")]
    InvalidParameter {
        /// Human-readable description of the unsatisfiable parameter.
        reason: String,
    },
}

impl GeneratorError {
    /// Returns a stable, machine-readable code for the variant.
    #[must_use]
    pub const fn code(&self) -> GeneratorErrorCode {
        match self {
            Self::InvalidParameter { .. } => GeneratorErrorCode::InvalidParameter,
        }
    }
}

/// Machine-readable codes for [`GeneratorError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GeneratorErrorCode {
    /// The family's parameters cannot produce a topology.
    InvalidParameter,
}

impl GeneratorErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidParameter => "GENERATOR_INVALID_PARAMETER",
        }
    }
}

impl fmt::Display for GeneratorErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies which pipeline endpoint an error refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EndpointKind {
    /// The node the risk bias routes from.
    Source,
    /// The node the risk bias routes to.
    Target,
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Error type produced when configuring or running the pipeline.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EngineError {
    /// The risk-edge ratio must lie strictly between zero and one.
    #[error("risk_edge_ratio must lie in (0, 1) (got {got})")]
    InvalidRiskRatio {
        /// The rejected ratio supplied by the caller.
        got: f64,
    },
    /// The cost bounds violate `1 <= min <= max < elevated`.
    #[error(
        "cost bounds must satisfy 1 <= min <= max < elevated \
         (got min={min_normal}, max={max_normal}, elevated={elevated})"
    )]
    InvalidCostBounds {
        /// Lower bound for normal edge costs.
        min_normal: u32,
        /// Upper bound for normal edge costs.
        max_normal: u32,
        /// Elevated magnitude assigned to risk edges.
        elevated: u32,
    },
    /// The generator produced a topology without nodes.
    #[error("topology family `{family}` produced no nodes")]
    EmptyTopology {
        /// Name of the family that produced the empty topology.
        family: Arc<str>,
    },
    /// The generator produced a malformed edge.
    #[error("edge ({left}, {right}) is not a simple edge over {node_count} nodes")]
    InvalidEdge {
        /// First endpoint as provided.
        left: usize,
        /// Second endpoint as provided.
        right: usize,
        /// Number of nodes in the topology.
        node_count: usize,
    },
    /// A configured endpoint does not exist in the generated topology.
    #[error("{kind} node {node} is outside the topology of {node_count} nodes")]
    EndpointOutOfRange {
        /// Which endpoint was rejected.
        kind: EndpointKind,
        /// The rejected node id.
        node: usize,
        /// Number of nodes in the topology.
        node_count: usize,
    },
    /// The uniform draw asked for more edges than the topology has.
    #[error("cannot sample {requested} distinct edges from {available}")]
    InsufficientEdges {
        /// Number of edges requested without replacement.
        requested: usize,
        /// Number of edges available in the topology.
        available: usize,
    },
    /// A risk edge has no eligible support node left.
    #[error("risk edge ({left}, {right}) has no unallocated support candidate")]
    NoSupportCandidate {
        /// Smaller endpoint of the risk edge.
        left: usize,
        /// Larger endpoint of the risk edge.
        right: usize,
    },
    /// Connectivity repair failed to converge to one component.
    #[error("topology still has {components} components after connectivity repair")]
    DisconnectedTopology {
        /// Number of components remaining after repair.
        components: usize,
    },
    /// A topology family failed while generating the initial graph.
    #[error("topology family `{family}` failed: {source}")]
    Generator {
        /// Name of the failing family.
        family: Arc<str>,
        /// Underlying generator error.
        #[source]
        source: GeneratorError,
    },
}

impl EngineError {
    /// Returns a stable, machine-readable code for the variant.
    #[must_use]
    pub const fn code(&self) -> EngineErrorCode {
        match self {
            Self::InvalidRiskRatio { .. } => EngineErrorCode::InvalidRiskRatio,
            Self::InvalidCostBounds { .. } => EngineErrorCode::InvalidCostBounds,
            Self::EmptyTopology { .. } => EngineErrorCode::EmptyTopology,
            Self::InvalidEdge { .. } => EngineErrorCode::InvalidEdge,
            Self::EndpointOutOfRange { .. } => EngineErrorCode::EndpointOutOfRange,
            Self::InsufficientEdges { .. } => EngineErrorCode::InsufficientEdges,
            Self::NoSupportCandidate { .. } => EngineErrorCode::NoSupportCandidate,
            Self::DisconnectedTopology { .. } => EngineErrorCode::DisconnectedTopology,
            Self::Generator { .. } => EngineErrorCode::GeneratorFailure,
        }
    }

    /// Retrieves the inner [`GeneratorErrorCode`] when the error originated
    /// in a topology family.
    #[must_use]
    pub const fn generator_code(&self) -> Option<GeneratorErrorCode> {
        match self {
            Self::Generator { source, .. } => Some(source.code()),
            _ => None,
        }
    }
}

/// Machine-readable codes for [`EngineError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum EngineErrorCode {
    /// The risk-edge ratio must lie strictly between zero and one.
    InvalidRiskRatio,
    /// The cost bounds violate the required strict ordering.
    InvalidCostBounds,
    /// The generator produced a topology without nodes.
    EmptyTopology,
    /// The generator produced a malformed edge.
    InvalidEdge,
    /// A configured endpoint does not exist in the generated topology.
    EndpointOutOfRange,
    /// The uniform draw asked for more edges than the topology has.
    InsufficientEdges,
    /// A risk edge has no eligible support node left.
    NoSupportCandidate,
    /// Connectivity repair failed to converge to one component.
    DisconnectedTopology,
    /// A topology family failed while generating the initial graph.
    GeneratorFailure,
}

impl EngineErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRiskRatio => "INVALID_RISK_RATIO",
            Self::InvalidCostBounds => "INVALID_COST_BOUNDS",
            Self::EmptyTopology => "EMPTY_TOPOLOGY",
            Self::InvalidEdge => "INVALID_EDGE",
            Self::EndpointOutOfRange => "ENDPOINT_OUT_OF_RANGE",
            Self::InsufficientEdges => "INSUFFICIENT_EDGES",
            Self::NoSupportCandidate => "NO_SUPPORT_CANDIDATE",
            Self::DisconnectedTopology => "DISCONNECTED_TOPOLOGY",
            Self::GeneratorFailure => "GENERATOR_FAILURE",
        }
    }
}

impl fmt::Display for EngineErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, EngineError>;
