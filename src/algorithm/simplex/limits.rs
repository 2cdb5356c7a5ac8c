//! # Iteration limits
//!
//! Degenerate pivots can make the simplex method cycle. Every search loop in this crate is
//! bounded by one of these limits, and reports `Error::IterationLimit` when it is exceeded.

/// Bounds on the number of steps the searches take.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Limits {
    /// Maximum number of pivots in a single feasibility, optimality or row deletion search.
    pub max_pivots: usize,
    /// Maximum number of cutting planes added by the integer extension.
    pub max_cuts: usize,
}

impl Limits {
    /// Default maximum number of pivots per search.
    pub const DEFAULT_MAX_PIVOTS: usize = 1_000;
    /// Default maximum number of cutting planes.
    pub const DEFAULT_MAX_CUTS: usize = 100;

    /// Replace the maximum number of pivots per search.
    #[must_use]
    pub fn with_max_pivots(self, max_pivots: usize) -> Self {
        Self { max_pivots, ..self }
    }

    /// Replace the maximum number of cutting planes.
    #[must_use]
    pub fn with_max_cuts(self, max_cuts: usize) -> Self {
        Self { max_cuts, ..self }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_pivots: Self::DEFAULT_MAX_PIVOTS,
            max_cuts: Self::DEFAULT_MAX_CUTS,
        }
    }
}
