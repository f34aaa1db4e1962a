//! Numerical integration.
//!
//! Integrands are functions of time and a harmonic index. The index is not
//! used by the rule itself; it is handed through so one integrand can serve
//! every harmonic.

mod rectangle;

pub use rectangle::{DEFAULT_STEP, RectangleRule, Stepping};

/// A function of `(time, harmonic_index)` that can be integrated over time.
pub trait Integrand {
    /// Evaluates the integrand at time `t` for harmonic `harmonic`.
    fn eval(&self, t: f64, harmonic: u32) -> f64;
}

impl<F> Integrand for F
where
    F: Fn(f64, u32) -> f64,
{
    fn eval(&self, t: f64, harmonic: u32) -> f64 {
        self(t, harmonic)
    }
}

/// Integrates with the default rule (0.0001 s step, indexed stepping).
///
/// # Examples
///
/// ```
/// use overtone::quadrature::integrate;
///
/// assert_eq!(integrate(1.0, 1.0, &|_t: f64, _k: u32| 1.0, 0), 0.0);
/// ```
pub fn integrate<I>(lower: f64, upper: f64, integrand: &I, harmonic: u32) -> f64
where
    I: Integrand + ?Sized,
{
    RectangleRule::default().integrate(lower, upper, integrand, harmonic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_integrand() {
        let f = |t: f64, k: u32| t + k as f64;
        assert_eq!(f.eval(0.5, 2), 2.5);
    }

    #[test]
    fn test_dyn_integrand() {
        let f = |t: f64, _k: u32| 2.0 * t;
        let dynamic: &dyn Integrand = &f;
        let area = integrate(0.0, 1.0, dynamic, 0);
        assert!((area - 1.0).abs() < 1e-3);
    }
}
