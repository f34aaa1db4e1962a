//! Trigonometric Fourier coefficients by numerical integration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::quadrature::RectangleRule;
use crate::{PulseConfig, Signal, SignalExt, TrianglePulse};

/// Which basis function a coefficient is projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    /// `b[k]`, projection onto `sin(k w1 t)`
    Sine,
    /// `a[k]`, projection onto `cos(k w1 t)`
    Cosine,
}

impl Component {
    /// Evaluates the basis function at `phase` radians.
    pub fn basis(self, phase: f64) -> f64 {
        match self {
            Component::Sine => phase.sin(),
            Component::Cosine => phase.cos(),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Sine => write!(f, "sine"),
            Component::Cosine => write!(f, "cosine"),
        }
    }
}

/// `basis(t * k * w1)`, the basis function of one harmonic as a signal.
///
/// Multiplied with the analysed signal it gives the integrand of one
/// coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicBasis {
    component: Component,
    harmonic: u32,
    angular_frequency: f64,
}

impl HarmonicBasis {
    pub fn new(component: Component, harmonic: u32, angular_frequency: f64) -> Self {
        Self {
            component,
            harmonic,
            angular_frequency,
        }
    }
}

impl Signal for HarmonicBasis {
    fn value_at(&self, t: f64) -> f64 {
        self.component.basis(t * self.harmonic as f64 * self.angular_frequency)
    }
}

/// Computes Fourier coefficients of one period of a signal.
///
/// Every coefficient is integrated over `[0, period]` with the same rule, so
/// coefficients from one engine are always comparable.
///
/// # Examples
///
/// ```
/// use overtone::{Component, CoefficientEngine, PulseConfig};
///
/// let engine = CoefficientEngine::from_config(&PulseConfig::default()).unwrap();
/// let a0 = engine.dc_coefficient();
/// let b1 = engine.trigonometric_coefficient(1, Component::Sine);
/// assert!(b1 > 0.0 && b1 < a0);
/// ```
#[derive(Debug, Clone)]
pub struct CoefficientEngine<S: Signal> {
    signal: S,
    rule: RectangleRule,
    period: f64,
    angular_frequency: f64,
}

impl<S: Signal> CoefficientEngine<S> {
    /// Creates an engine for `signal`.
    ///
    /// # Arguments
    ///
    /// * `signal` - Periodic signal to analyse
    /// * `rule` - Integration rule used for every coefficient
    /// * `period` - Period T in seconds, also the integration range
    /// * `angular_frequency` - Fundamental angular frequency w1 in rad/s
    pub fn new(signal: S, rule: RectangleRule, period: f64, angular_frequency: f64) -> Self {
        Self {
            signal,
            rule,
            period,
            angular_frequency,
        }
    }

    pub fn signal(&self) -> &S {
        &self.signal
    }

    pub fn rule(&self) -> &RectangleRule {
        &self.rule
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    /// `2/T * ∫₀ᵀ signal(t) · basis(t k w1) dt`.
    pub fn trigonometric_coefficient(&self, k: u32, component: Component) -> f64 {
        let basis = HarmonicBasis::new(component, k, self.angular_frequency);
        let integrand = (&self.signal).multiply(basis);
        2.0 / self.period * self.rule.integrate_signal(0.0, self.period, &integrand)
    }

    /// DC coefficient `a0`, the cosine coefficient of harmonic 0.
    pub fn dc_coefficient(&self) -> f64 {
        self.trigonometric_coefficient(0, Component::Cosine)
    }

    /// Mean signal level `A0 = a0 / 2`.
    pub fn mean_level(&self) -> f64 {
        self.dc_coefficient() / 2.0
    }

    /// True average power `1/T * ∫₀ᵀ signal(t)² dt`.
    pub fn average_power(&self) -> f64 {
        let power = (&self.signal).squared();
        1.0 / self.period * self.rule.integrate_signal(0.0, self.period, &power)
    }
}

impl CoefficientEngine<TrianglePulse> {
    /// Creates an engine for the pulse and rule described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn from_config(config: &PulseConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            TrianglePulse::from_config(config),
            RectangleRule::from_config(config)?,
            config.period,
            config.angular_frequency,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadrature::Stepping;

    const T: f64 = 0.0166;

    fn engine() -> CoefficientEngine<TrianglePulse> {
        CoefficientEngine::from_config(&PulseConfig::default()).unwrap()
    }

    #[test]
    fn test_component_basis() {
        assert_eq!(Component::Sine.basis(0.0), 0.0);
        assert_eq!(Component::Cosine.basis(0.0), 1.0);
    }

    #[test]
    fn test_harmonic_basis() {
        let w1 = std::f64::consts::TAU;
        let basis = HarmonicBasis::new(Component::Cosine, 2, w1);
        assert_eq!(basis.value_at(0.0), 1.0);
        assert!((basis.value_at(0.25) + 1.0).abs() < 1e-12);
        // Harmonic 0 of the cosine is the constant 1
        let dc = HarmonicBasis::new(Component::Cosine, 0, w1);
        assert_eq!(dc.value_at(0.3), 1.0);
    }

    #[test]
    fn test_coefficient_matches_direct_integrand() {
        let engine = engine();
        let pulse = *engine.signal();
        let w1 = PulseConfig::default().angular_frequency;
        let direct = |t: f64, k: u32| pulse.value_at(t) * (t * k as f64 * w1).sin();
        let expected = 2.0 / T * engine.rule().integrate(0.0, T, &direct, 3);
        let b3 = engine.trigonometric_coefficient(3, Component::Sine);
        assert_eq!(b3.to_bits(), expected.to_bits());
    }

    #[test]
    fn test_component_display() {
        assert_eq!(Component::Sine.to_string(), "sine");
        assert_eq!(Component::Cosine.to_string(), "cosine");
    }

    #[test]
    fn test_dc_coefficient_matches_triangle_area() {
        // 2/T * (A * ti / 2)
        let config = PulseConfig::default();
        let expected = config.amplitude * config.pulse_width / config.period;
        let a0 = engine().dc_coefficient();
        assert!(((a0 - expected) / expected).abs() < 1e-3);
    }

    #[test]
    fn test_mean_level_is_half_dc() {
        let engine = engine();
        assert_eq!(engine.mean_level(), engine.dc_coefficient() / 2.0);
    }

    #[test]
    fn test_sine_k0_is_zero() {
        assert_eq!(engine().trigonometric_coefficient(0, Component::Sine), 0.0);
    }

    #[test]
    fn test_idempotent() {
        let engine = engine();
        for k in [1, 2, 7, 20] {
            for component in [Component::Sine, Component::Cosine] {
                let first = engine.trigonometric_coefficient(k, component);
                let second = engine.trigonometric_coefficient(k, component);
                assert_eq!(first.to_bits(), second.to_bits());
            }
        }
    }

    #[test]
    fn test_first_harmonic_is_sine_dominated() {
        // The pulse is symmetric about ti/2 = T/4, a quarter period
        let engine = engine();
        let a1 = engine.trigonometric_coefficient(1, Component::Cosine);
        let b1 = engine.trigonometric_coefficient(1, Component::Sine);
        assert!(a1.abs() < 1e-5);
        assert!((b1 - 0.2026).abs() < 1e-3);
    }

    #[test]
    fn test_second_harmonic_is_cosine_dominated() {
        let engine = engine();
        let a2 = engine.trigonometric_coefficient(2, Component::Cosine);
        let b2 = engine.trigonometric_coefficient(2, Component::Sine);
        assert!((a2 + 0.1013).abs() < 1e-3);
        assert!(b2.abs() < 1e-5);
    }

    #[test]
    fn test_average_power() {
        // Mean of a triangle squared: A² * ti / (3T)
        let config = PulseConfig::default();
        let expected =
            config.amplitude * config.amplitude * config.pulse_width / (3.0 * config.period);
        let power = engine().average_power();
        assert!(((power - expected) / expected).abs() < 1e-3);
    }

    #[test]
    fn test_constant_signal_coefficients() {
        // A constant c has a0 = 2c and no harmonics
        let engine =
            CoefficientEngine::new(0.75, RectangleRule::default(), 1.0, std::f64::consts::TAU);
        assert!((engine.dc_coefficient() - 1.5).abs() < 1e-9);
        assert!(engine.trigonometric_coefficient(3, Component::Cosine).abs() < 1e-9);
        assert!(engine.trigonometric_coefficient(3, Component::Sine).abs() < 1e-9);
        assert!((engine.average_power() - 0.5625).abs() < 1e-9);
    }

    #[test]
    fn test_stepping_policies_agree() {
        let indexed = engine();
        let config = PulseConfig {
            stepping: Stepping::Accumulated,
            ..Default::default()
        };
        let accumulated = CoefficientEngine::from_config(&config).unwrap();
        for k in 0..=20 {
            for component in [Component::Sine, Component::Cosine] {
                let x = indexed.trigonometric_coefficient(k, component);
                let y = accumulated.trigonometric_coefficient(k, component);
                assert!((x - y).abs() < 1e-9, "k={k} {component}: {x} vs {y}");
            }
        }
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = PulseConfig {
            step: 0.0,
            ..Default::default()
        };
        assert!(CoefficientEngine::from_config(&config).is_err());
    }
}
