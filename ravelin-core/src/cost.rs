//! Traversal-cost model and cost assignment.
//!
//! Normal edges draw a uniform scalar cost; risk edges carry a fixed
//! elevated magnitude plus their support node. The elevated magnitude is
//! strictly greater than every possible normal cost, so a risk edge is
//! always nominally more expensive but recoverable through its support
//! node. Serialization discriminates the two shapes: a normal cost is a
//! bare integer, a risk cost a two-element sequence.

use std::collections::BTreeMap;

use rand::{Rng, rngs::SmallRng};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::Error as _,
    ser::SerializeTuple,
};
use tracing::debug;

use crate::{
    error::{EngineError, Result},
    graph::{Edge, Topology},
    result::RiskTopology,
};

/// Default lower bound for normal edge costs.
pub const DEFAULT_MIN_NORMAL_COST: u32 = 1;
/// Default upper bound for normal edge costs.
pub const DEFAULT_MAX_NORMAL_COST: u32 = 10;
/// Default elevated magnitude assigned to risk edges.
pub const DEFAULT_ELEVATED_COST: u32 = 20;

/// Traversal cost carried by one edge of the annotated topology.
///
/// # Examples
/// ```
/// use ravelin_core::Cost;
///
/// let normal = Cost::Normal(4);
/// let risk = Cost::Risk { magnitude: 20, support: 7 };
/// assert!(!normal.is_risk());
/// assert_eq!(risk.support(), Some(7));
/// assert_eq!(risk.magnitude(), 20);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cost {
    /// Plain scalar cost of a normal edge.
    Normal(u32),
    /// Elevated cost of a risk edge, recoverable through its support node.
    Risk {
        /// Fixed elevated magnitude, strictly above every normal cost.
        magnitude: u32,
        /// Node allocated to substitute for the edge if it fails.
        support: usize,
    },
}

impl Cost {
    /// Returns whether this is a risk cost.
    #[must_use]
    pub const fn is_risk(self) -> bool {
        matches!(self, Self::Risk { .. })
    }

    /// Returns the scalar magnitude regardless of shape.
    #[must_use]
    pub const fn magnitude(self) -> u32 {
        match self {
            Self::Normal(value) => value,
            Self::Risk { magnitude, .. } => magnitude,
        }
    }

    /// Returns the support node for a risk cost.
    #[must_use]
    pub const fn support(self) -> Option<usize> {
        match self {
            Self::Normal(_) => None,
            Self::Risk { support, .. } => Some(support),
        }
    }
}

impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        match *self {
            Self::Normal(value) => serializer.serialize_u32(value),
            Self::Risk { magnitude, support } => {
                let mut pair = serializer.serialize_tuple(2)?;
                pair.serialize_element(&magnitude)?;
                pair.serialize_element(&support)?;
                pair.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Cost {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape {
            Scalar(u32),
            Pair(u32, usize),
        }

        match Shape::deserialize(deserializer) {
            Ok(Shape::Scalar(value)) => Ok(Self::Normal(value)),
            Ok(Shape::Pair(magnitude, support)) => Ok(Self::Risk { magnitude, support }),
            Err(_) => Err(D::Error::custom(
                "expected a scalar cost or a [magnitude, support] pair",
            )),
        }
    }
}

/// Validated cost bounds threaded through the pipeline.
///
/// # Examples
/// ```
/// use ravelin_core::CostProfile;
///
/// let profile = CostProfile::new(1, 10, 20).expect("defaults are valid");
/// assert_eq!(profile.elevated(), 20);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CostProfile {
    min_normal: u32,
    max_normal: u32,
    elevated: u32,
}

impl CostProfile {
    /// Validates and constructs a cost profile.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidCostBounds`] unless
    /// `1 <= min <= max < elevated`; the strict upper inequality is what
    /// keeps risk edges nominally more expensive than every normal edge.
    pub fn new(min_normal: u32, max_normal: u32, elevated: u32) -> Result<Self> {
        if min_normal == 0 || min_normal > max_normal || elevated <= max_normal {
            return Err(EngineError::InvalidCostBounds {
                min_normal,
                max_normal,
                elevated,
            });
        }
        Ok(Self {
            min_normal,
            max_normal,
            elevated,
        })
    }

    /// Returns the lower bound for normal costs.
    #[must_use]
    #[rustfmt::skip]
    pub fn min_normal(self) -> u32 { self.min_normal }

    /// Returns the upper bound for normal costs.
    #[must_use]
    #[rustfmt::skip]
    pub fn max_normal(self) -> u32 { self.max_normal }

    /// Returns the elevated magnitude for risk costs.
    #[must_use]
    #[rustfmt::skip]
    pub fn elevated(self) -> u32 { self.elevated }
}

impl Default for CostProfile {
    fn default() -> Self {
        Self {
            min_normal: DEFAULT_MIN_NORMAL_COST,
            max_normal: DEFAULT_MAX_NORMAL_COST,
            elevated: DEFAULT_ELEVATED_COST,
        }
    }
}

/// Writes a cost onto every edge and assembles the annotated topology.
///
/// Edges are visited in canonical ascending order so a fixed seed
/// reproduces the same normal costs.
pub(crate) fn assign_costs(
    topology: Topology,
    risk_edges: Vec<Edge>,
    supports: &BTreeMap<Edge, usize>,
    profile: CostProfile,
    rng: &mut SmallRng,
) -> RiskTopology {
    let mut costs = BTreeMap::new();
    for edge in topology.edges() {
        let cost = match supports.get(&edge) {
            Some(&support) => Cost::Risk {
                magnitude: profile.elevated(),
                support,
            },
            None => Cost::Normal(rng.gen_range(profile.min_normal()..=profile.max_normal())),
        };
        costs.insert(edge, cost);
    }
    debug!(
        edges = costs.len(),
        risk_edges = risk_edges.len(),
        "assigned traversal costs"
    );
    RiskTopology::new(topology, risk_edges, costs)
}
