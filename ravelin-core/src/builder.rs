//! Builder for configuring and validating the pipeline.

use crate::{
    cost::CostProfile,
    error::{EngineError, Result},
    pipeline::Pipeline,
};

/// Default fraction of edges flagged as risk edges.
pub const DEFAULT_RISK_EDGE_RATIO: f64 = 0.2;
/// Default seed for the pipeline's random source.
pub const DEFAULT_RNG_SEED: u64 = 0x5AFE_0DD5;

/// Configures and constructs [`Pipeline`] instances.
///
/// # Examples
/// ```
/// use ravelin_core::PipelineBuilder;
///
/// let pipeline = PipelineBuilder::new()
///     .with_risk_edge_ratio(0.3)
///     .with_rng_seed(17)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(pipeline.risk_edge_ratio(), 0.3);
/// ```
#[derive(Clone, Debug)]
pub struct PipelineBuilder {
    risk_edge_ratio: f64,
    source: Option<usize>,
    target: Option<usize>,
    min_normal_cost: u32,
    max_normal_cost: u32,
    elevated_cost: u32,
    rng_seed: u64,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        let profile = CostProfile::default();
        Self {
            risk_edge_ratio: DEFAULT_RISK_EDGE_RATIO,
            source: None,
            target: None,
            min_normal_cost: profile.min_normal(),
            max_normal_cost: profile.max_normal(),
            elevated_cost: profile.elevated(),
            rng_seed: DEFAULT_RNG_SEED,
        }
    }
}

impl PipelineBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the fraction of edges flagged as risk edges.
    ///
    /// The value is validated by [`Self::build`]; it must lie strictly
    /// between zero and one.
    #[must_use]
    pub fn with_risk_edge_ratio(mut self, ratio: f64) -> Self {
        self.risk_edge_ratio = ratio;
        self
    }

    /// Overrides the source and target nodes the risk bias routes between.
    ///
    /// Defaults to node `0` and the highest node id; both are range-checked
    /// against the generated topology at run time.
    #[must_use]
    pub fn with_endpoints(mut self, source: usize, target: usize) -> Self {
        self.source = Some(source);
        self.target = Some(target);
        self
    }

    /// Overrides the inclusive cost range drawn for normal edges.
    #[must_use]
    pub fn with_normal_cost_range(mut self, min: u32, max: u32) -> Self {
        self.min_normal_cost = min;
        self.max_normal_cost = max;
        self
    }

    /// Overrides the elevated magnitude assigned to risk edges.
    ///
    /// Must stay strictly greater than the normal-cost maximum; the pair is
    /// validated by [`Self::build`].
    #[must_use]
    pub fn with_elevated_cost(mut self, elevated: u32) -> Self {
        self.elevated_cost = elevated;
        self
    }

    /// Seeds the pipeline's random source to make runs reproducible.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Validates the configuration and constructs a [`Pipeline`].
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidRiskRatio`] when the ratio lies outside
    /// `(0, 1)` and [`EngineError::InvalidCostBounds`] when the cost bounds
    /// violate `1 <= min <= max < elevated`.
    ///
    /// # Examples
    /// ```
    /// use ravelin_core::{EngineError, PipelineBuilder};
    ///
    /// let err = PipelineBuilder::new()
    ///     .with_risk_edge_ratio(1.0)
    ///     .build()
    ///     .expect_err("a ratio of one leaves no normal edges");
    /// assert!(matches!(err, EngineError::InvalidRiskRatio { .. }));
    /// ```
    pub fn build(self) -> Result<Pipeline> {
        if !(self.risk_edge_ratio > 0.0 && self.risk_edge_ratio < 1.0) {
            return Err(EngineError::InvalidRiskRatio {
                got: self.risk_edge_ratio,
            });
        }
        let profile = CostProfile::new(
            self.min_normal_cost,
            self.max_normal_cost,
            self.elevated_cost,
        )?;
        Ok(Pipeline::new(
            self.risk_edge_ratio,
            self.source,
            self.target,
            profile,
            self.rng_seed,
        ))
    }
}
