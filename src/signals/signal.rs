//! Signal trait.
//!
//! This module provides the fundamental `Signal` trait that represents
//! any time-domain function that can be evaluated at an arbitrary instant.

/// Common interface for all time-domain signals.
///
/// Unlike a streaming oscillator, a `Signal` here is a pure function of time:
/// evaluating it never changes its state, so the same instant always yields
/// the same value. This is what lets a quadrature rule sample it at any
/// position, in any order, as many times as it needs.
pub trait Signal {
    /// Evaluates the signal at time `t` (seconds).
    fn value_at(&self, t: f64) -> f64;

    /// Evaluates the signal at every instant in `times`.
    ///
    /// # Arguments
    ///
    /// * `times` - Instants to evaluate, in seconds
    ///
    /// # Returns
    ///
    /// One value per instant, in the same order
    fn sample(&self, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&t| self.value_at(t)).collect()
    }
}

/// Implementation of `Signal` for `f64` representing a constant signal value.
///
/// Useful for DC levels and for sanity checks of integration rules.
///
/// # Examples
///
/// ```
/// use overtone::Signal;
///
/// let constant = 0.5_f64;
/// assert_eq!(constant.value_at(-3.0), 0.5);
/// assert_eq!(constant.sample(&[0.0, 1.0]), vec![0.5, 0.5]);
/// ```
impl Signal for f64 {
    fn value_at(&self, _t: f64) -> f64 {
        *self
    }
}

impl<S: Signal + ?Sized> Signal for &S {
    fn value_at(&self, t: f64) -> f64 {
        (**self).value_at(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_signal() {
        let constant = 2.5_f64;
        assert_eq!(constant.value_at(0.0), 2.5);
        assert_eq!(constant.value_at(-100.0), 2.5);
        assert_eq!(constant.value_at(f64::MAX), 2.5);
    }

    #[test]
    fn test_sample_preserves_order() {
        let constant = 1.0_f64;
        let values = constant.sample(&[3.0, 1.0, 2.0]);
        assert_eq!(values, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_sample_empty() {
        assert!(0.0_f64.sample(&[]).is_empty());
    }

    #[test]
    fn test_reference_is_signal() {
        fn evaluate<S: Signal>(signal: S) -> f64 {
            signal.value_at(1.0)
        }

        let constant = 4.0_f64;
        let by_ref: &f64 = &constant;
        let as_dyn: &dyn Signal = &constant;
        assert_eq!(evaluate(by_ref), 4.0);
        assert_eq!(evaluate(as_dyn), 4.0);
    }
}
