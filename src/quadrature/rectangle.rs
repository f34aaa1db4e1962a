//! Fixed-step left-endpoint rectangle rule.

use serde::{Deserialize, Serialize};

use super::Integrand;
use crate::error::{AnalysisError, Result};
use crate::{PulseConfig, Signal};

/// Default integration step in seconds.
pub const DEFAULT_STEP: f64 = 0.0001;

/// Ratios this close (relative) to an integer count as that integer when
/// computing the number of steps.
const STEP_COUNT_SNAP: f64 = 1e-9;

/// How the rule walks from the lower to the upper bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Stepping {
    /// Precompute `ceil((upper - lower) / step)` and sample at
    /// `lower + i * step`.
    #[default]
    Indexed,
    /// Repeatedly add `step` to a running position while it is below the
    /// upper bound. Rounding in the running sum can add one step near the
    /// boundary; this reproduces the historical results bit for bit.
    Accumulated,
}

/// Left-endpoint rectangle rule with a fixed step.
///
/// Each step contributes `step * f(position, k)`, with `position` taken at the
/// left edge of the step. Contributions are summed sequentially in increasing
/// time order.
///
/// # Examples
///
/// ```
/// use overtone::quadrature::RectangleRule;
///
/// let rule = RectangleRule::default();
/// let area = rule.integrate(0.0, 0.0166, &|_t: f64, _k: u32| 1.0, 0);
/// assert!((area - 0.0166).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleRule {
    step: f64,
    stepping: Stepping,
}

impl Default for RectangleRule {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            stepping: Stepping::default(),
        }
    }
}

impl RectangleRule {
    /// Creates a rule with the given step and indexed stepping.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidConfig`] if `step` is not positive and
    /// finite.
    pub fn new(step: f64) -> Result<Self> {
        if !(step.is_finite() && step > 0.0) {
            return Err(AnalysisError::invalid(
                "step",
                format!("must be positive and finite, got {step}"),
            ));
        }
        Ok(Self {
            step,
            stepping: Stepping::default(),
        })
    }

    /// Creates the rule described by a configuration.
    pub fn from_config(config: &PulseConfig) -> Result<Self> {
        Ok(Self::new(config.step)?.with_stepping(config.stepping))
    }

    /// Sets the stepping policy.
    pub fn with_stepping(mut self, stepping: Stepping) -> Self {
        self.stepping = stepping;
        self
    }

    /// Gets the step in seconds.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Gets the stepping policy.
    pub fn stepping(&self) -> Stepping {
        self.stepping
    }

    /// Number of steps the indexed policy takes over `[lower, upper)`.
    ///
    /// Zero for empty, reversed or non-finite intervals.
    pub fn step_count(&self, lower: f64, upper: f64) -> usize {
        if !(lower.is_finite() && upper.is_finite()) || upper <= lower {
            return 0;
        }
        let ratio = (upper - lower) / self.step;
        let nearest = ratio.round();
        if (ratio - nearest).abs() <= STEP_COUNT_SNAP * nearest.max(1.0) {
            nearest as usize
        } else {
            ratio.ceil() as usize
        }
    }

    /// Approximates the integral of `integrand(t, harmonic)` over
    /// `[lower, upper]`.
    ///
    /// `harmonic` is passed through to the integrand unchanged. Empty,
    /// reversed or non-finite intervals integrate to 0.
    pub fn integrate<I>(&self, lower: f64, upper: f64, integrand: &I, harmonic: u32) -> f64
    where
        I: Integrand + ?Sized,
    {
        match self.stepping {
            Stepping::Indexed => self.integrate_indexed(lower, upper, integrand, harmonic),
            Stepping::Accumulated => self.integrate_accumulated(lower, upper, integrand, harmonic),
        }
    }

    /// Approximates the integral of a signal over `[lower, upper]`.
    pub fn integrate_signal<S: Signal + ?Sized>(&self, lower: f64, upper: f64, signal: &S) -> f64 {
        self.integrate(lower, upper, &|t: f64, _: u32| signal.value_at(t), 0)
    }

    fn integrate_indexed<I>(&self, lower: f64, upper: f64, integrand: &I, harmonic: u32) -> f64
    where
        I: Integrand + ?Sized,
    {
        let mut sum = 0.0;
        for i in 0..self.step_count(lower, upper) {
            let position = lower + i as f64 * self.step;
            sum += self.step * integrand.eval(position, harmonic);
        }
        sum
    }

    fn integrate_accumulated<I>(&self, lower: f64, upper: f64, integrand: &I, harmonic: u32) -> f64
    where
        I: Integrand + ?Sized,
    {
        if !(lower.is_finite() && upper.is_finite()) {
            return 0.0;
        }
        let mut sum = 0.0;
        let mut position = lower;
        while position < upper {
            sum += self.step * integrand.eval(position, harmonic);
            let next = position + self.step;
            if next <= position {
                // The step is below the resolution of `position`.
                tracing::warn!(position, step = self.step, "rectangle rule stalled");
                break;
            }
            position = next;
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrianglePulse;

    const T: f64 = 0.0166;

    fn one(_t: f64, _k: u32) -> f64 {
        1.0
    }

    #[test]
    fn test_rejects_bad_step() {
        assert!(RectangleRule::new(0.0).is_err());
        assert!(RectangleRule::new(-0.001).is_err());
        assert!(RectangleRule::new(f64::NAN).is_err());
        assert!(RectangleRule::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_zero_width_interval() {
        for stepping in [Stepping::Indexed, Stepping::Accumulated] {
            let rule = RectangleRule::default().with_stepping(stepping);
            for x in [-1.0, 0.0, 0.0083, 12.5] {
                assert_eq!(rule.integrate(x, x, &one, 3), 0.0);
            }
        }
    }

    #[test]
    fn test_reversed_interval_is_zero() {
        for stepping in [Stepping::Indexed, Stepping::Accumulated] {
            let rule = RectangleRule::default().with_stepping(stepping);
            assert_eq!(rule.integrate(T, 0.0, &one, 0), 0.0);
        }
    }

    #[test]
    fn test_non_finite_bounds_are_zero() {
        for stepping in [Stepping::Indexed, Stepping::Accumulated] {
            let rule = RectangleRule::default().with_stepping(stepping);
            assert_eq!(rule.integrate(0.0, f64::INFINITY, &one, 0), 0.0);
            assert_eq!(rule.integrate(f64::NAN, 1.0, &one, 0), 0.0);
        }
    }

    #[test]
    fn test_constant_function() {
        let rule = RectangleRule::default();
        let area = rule.integrate(0.0, T, &one, 0);
        assert!((area - T).abs() <= rule.step());
    }

    #[test]
    fn test_step_count() {
        let rule = RectangleRule::default();
        assert_eq!(rule.step_count(0.0, T), 166);
        assert_eq!(rule.step_count(0.0, 0.00015), 2);
        assert_eq!(rule.step_count(0.0, 1.0), 10000);
        assert_eq!(rule.step_count(1.0, 0.0), 0);
    }

    #[test]
    fn test_accumulated_drift_takes_extra_step() {
        // The running position lands just below T after 166 additions
        let rule = RectangleRule::default().with_stepping(Stepping::Accumulated);
        let area = rule.integrate(0.0, T, &one, 0);
        assert!((area - 0.0167).abs() < 1e-12);
    }

    #[test]
    fn test_harmonic_passed_through() {
        let rule = RectangleRule::default();
        let area = rule.integrate(0.0, 1.0, &|_t: f64, k: u32| k as f64, 7);
        assert!((area - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_left_endpoint_bias() {
        // For an increasing function the left rule underestimates
        let rule = RectangleRule::new(0.1).unwrap();
        let area = rule.integrate(0.0, 1.0, &|t: f64, _k: u32| t, 0);
        assert!((area - 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_integrate_signal() {
        let rule = RectangleRule::default();
        let pulse = TrianglePulse::new(T, 0.5, 0.0083);
        // Triangle area: base * height / 2
        let area = rule.integrate_signal(0.0, T, &pulse);
        assert!((area - 0.0083 * 0.5 / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_policies_agree_on_pulse() {
        let pulse = TrianglePulse::new(T, 0.5, 0.0083);
        let indexed = RectangleRule::default().integrate_signal(0.0, T, &pulse);
        let accumulated = RectangleRule::default()
            .with_stepping(Stepping::Accumulated)
            .integrate_signal(0.0, T, &pulse);
        assert!((indexed - accumulated).abs() < 1e-12);
    }

    #[test]
    fn test_stalled_accumulation_terminates() {
        let rule = RectangleRule::new(1e-12)
            .unwrap()
            .with_stepping(Stepping::Accumulated);
        let area = rule.integrate(1e6, 1e6 + 1.0, &one, 0);
        assert!(area > 0.0);
    }

    #[test]
    fn test_deterministic() {
        let rule = RectangleRule::default();
        let f = |t: f64, k: u32| (t * k as f64 * 378.505).cos();
        assert_eq!(rule.integrate(0.0, T, &f, 3), rule.integrate(0.0, T, &f, 3));
    }
}
