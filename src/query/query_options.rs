use crate::math::Real;

/// Tunable bounds and tolerances of the collision queries.
///
/// The defaults are the values the rest of this crate is calibrated for. Lowering the iteration
/// bounds trades accuracy for a hard limit on the cost of a single query.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(default))]
pub struct QueryOptions {
    /// Maximum number of GJK refinement steps before giving up.
    pub gjk_max_iterations: usize,
    /// Maximum number of EPA expansion steps before giving up.
    pub epa_max_iterations: usize,
    /// EPA stops once a new support point improves the closest face by less than this.
    ///
    /// This value is also added to the reported penetration depth.
    pub epa_accuracy: Real,
    /// Slack used when deciding whether a new EPA face must be flipped to face outward.
    pub winding_bias: Real,
}

impl QueryOptions {
    /// The default GJK iteration bound.
    pub const DEFAULT_GJK_MAX_ITERATIONS: usize = 128;
    /// The default EPA iteration bound.
    pub const DEFAULT_EPA_MAX_ITERATIONS: usize = 255;
    /// The default EPA convergence tolerance.
    pub const DEFAULT_EPA_ACCURACY: Real = 1.0e-4;
    /// The default EPA face winding slack.
    pub const DEFAULT_WINDING_BIAS: Real = 1.0e-6;
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            gjk_max_iterations: Self::DEFAULT_GJK_MAX_ITERATIONS,
            epa_max_iterations: Self::DEFAULT_EPA_MAX_ITERATIONS,
            epa_accuracy: Self::DEFAULT_EPA_ACCURACY,
            winding_bias: Self::DEFAULT_WINDING_BIAS,
        }
    }
}
