//! Vertex-count plans for benchmark sweeps.

use crate::error::SweepPlanError;

/// Fixed count measured before the stepped range in the standard plan.
pub const STANDARD_LEADING_COUNT: i64 = 2;
/// First count of the standard stepped range.
pub const STANDARD_START: i64 = 500;
/// Inclusive last count of the standard stepped range.
pub const STANDARD_STOP: i64 = 20_000;
/// Step of the standard stepped range.
pub const STANDARD_STEP: i64 = 500;

const STANDARD_STRIDE: usize = 500;

/// An ordered sequence of vertex counts to benchmark.
///
/// Counts are kept as signed integers so that invalid values reach the
/// builder and are rejected there rather than being coerced while parsing.
///
/// # Examples
/// ```
/// use primsweep_core::SweepPlan;
///
/// let plan = SweepPlan::standard();
/// assert_eq!(plan.counts().first(), Some(&2));
/// assert_eq!(plan.counts().last(), Some(&20_000));
/// assert_eq!(plan.len(), 41);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SweepPlan {
    counts: Vec<i64>,
}

impl SweepPlan {
    /// Returns `[2, 500, 1000, …, 20000]`.
    #[must_use]
    pub fn standard() -> Self {
        let mut counts = vec![STANDARD_LEADING_COUNT];
        counts.extend((STANDARD_START..=STANDARD_STOP).step_by(STANDARD_STRIDE));
        Self { counts }
    }

    /// Wraps an explicit list of counts, preserving its order.
    #[must_use]
    pub const fn from_counts(counts: Vec<i64>) -> Self {
        Self { counts }
    }

    /// Builds a plan of `leading` counts followed by `start..=stop` in
    /// increments of `step`.
    ///
    /// # Errors
    /// Returns [`SweepPlanError::NonPositiveStep`] when `step <= 0` and
    /// [`SweepPlanError::EmptyRange`] when `start > stop`.
    ///
    /// # Examples
    /// ```
    /// use primsweep_core::SweepPlan;
    ///
    /// let plan = SweepPlan::stepped(&[2], 100, 300, 100).expect("valid range");
    /// assert_eq!(plan.counts(), &[2, 100, 200, 300]);
    /// ```
    pub fn stepped(
        leading: &[i64],
        start: i64,
        stop: i64,
        step: i64,
    ) -> Result<Self, SweepPlanError> {
        let stride = usize::try_from(step)
            .ok()
            .filter(|stride| *stride > 0)
            .ok_or(SweepPlanError::NonPositiveStep { step })?;
        if start > stop {
            return Err(SweepPlanError::EmptyRange { start, stop });
        }

        let mut counts = leading.to_vec();
        counts.extend((start..=stop).step_by(stride));
        Ok(Self { counts })
    }

    /// Returns the counts in measurement order.
    #[must_use]
    pub const fn counts(&self) -> &[i64] {
        self.counts.as_slice()
    }

    /// Returns the number of counts in the plan.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` when the plan holds no counts.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self::standard()
    }
}
