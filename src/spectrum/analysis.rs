//! One complete Fourier analysis of the configured pulse.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use super::{CoefficientEngine, Component, PowerBalance, harmonic_count, truncated_energy};
use crate::error::{AnalysisError, Result};
use crate::{PulseConfig, Signal};

/// Phase `atan(b / a)` of a harmonic with cosine part `a` and sine part `b`.
///
/// When `a` is exactly zero the limit is used: `π/2` for positive `b`, `-π/2`
/// for negative `b`, and `0` when both parts vanish.
///
/// # Examples
///
/// ```
/// use overtone::spectrum::phase;
///
/// assert!((phase(1.0, 1.0) - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
/// assert_eq!(phase(0.0, -2.0), -std::f64::consts::FRAC_PI_2);
/// assert_eq!(phase(0.0, 0.0), 0.0);
/// ```
pub fn phase(cosine: f64, sine: f64) -> f64 {
    if cosine == 0.0 {
        if sine > 0.0 {
            FRAC_PI_2
        } else if sine < 0.0 {
            -FRAC_PI_2
        } else {
            0.0
        }
    } else {
        (sine / cosine).atan()
    }
}

/// Cosine and sine coefficients of one harmonic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Harmonic {
    /// Harmonic number k (1 is the fundamental)
    pub index: u32,
    /// `a[k]`
    pub cosine: f64,
    /// `b[k]`
    pub sine: f64,
}

impl Harmonic {
    pub fn new(index: u32, cosine: f64, sine: f64) -> Self {
        Self {
            index,
            cosine,
            sine,
        }
    }

    /// `sqrt(a² + b²)`
    pub fn amplitude(&self) -> f64 {
        (self.sine * self.sine + self.cosine * self.cosine).sqrt()
    }

    /// `atan(b / a)`, see [`phase`].
    pub fn phase(&self) -> f64 {
        phase(self.cosine, self.sine)
    }

    /// `a² + b²`
    pub fn power(&self) -> f64 {
        self.sine * self.sine + self.cosine * self.cosine
    }
}

/// The full set of results for one pulse configuration.
///
/// Built once by [`SpectrumAnalysis::compute`] and read-only afterwards.
///
/// # Examples
///
/// ```
/// use overtone::{PulseConfig, SpectrumAnalysis};
///
/// let analysis = SpectrumAnalysis::compute(&PulseConfig::default()).unwrap();
/// assert_eq!(analysis.harmonics().len(), 20);
/// assert_eq!(analysis.power().harmonic_count, 12);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct SpectrumAnalysis {
    config: PulseConfig,
    dc_coefficient: f64,
    harmonics: Vec<Harmonic>,
    power: PowerBalance,
}

impl SpectrumAnalysis {
    /// Validates `config` and computes every coefficient and derived figure.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidConfig`] for a bad configuration and
    /// [`AnalysisError::NonFiniteCoefficient`] if any coefficient comes out
    /// NaN or infinite.
    pub fn compute(config: &PulseConfig) -> Result<Self> {
        let engine = CoefficientEngine::from_config(config)?;
        Self::with_engine(config, &engine)
    }

    /// Computes the analysis with an existing engine.
    ///
    /// `config` supplies the harmonic count and bandwidth; the engine supplies
    /// the signal, period and rule.
    pub fn with_engine<S: Signal>(
        config: &PulseConfig,
        engine: &CoefficientEngine<S>,
    ) -> Result<Self> {
        let dc_coefficient = checked(0, Component::Cosine, engine.dc_coefficient())?;

        let mut harmonics = Vec::with_capacity(config.harmonics as usize);
        for k in 1..=config.harmonics {
            let cosine = engine.trigonometric_coefficient(k, Component::Cosine);
            let cosine = checked(k, Component::Cosine, cosine)?;
            let sine = engine.trigonometric_coefficient(k, Component::Sine);
            let sine = checked(k, Component::Sine, sine)?;
            if cosine == 0.0 {
                tracing::debug!(
                    k,
                    sine,
                    "cosine coefficient is zero, phase taken as its limit"
                );
            }
            tracing::debug!(k, cosine, sine, "harmonic coefficients");
            harmonics.push(Harmonic::new(k, cosine, sine));
        }

        let mut count = harmonic_count(config.bandwidth, config.fundamental_frequency);
        if count as usize > harmonics.len() {
            tracing::warn!(
                needed = count,
                computed = harmonics.len(),
                "bandwidth needs more harmonics than were computed, truncating"
            );
            count = harmonics.len() as u32;
        }

        let energy = truncated_energy(dc_coefficient / 2.0, &harmonics[..count as usize]);
        let power = PowerBalance::new(count, energy, engine.average_power());

        tracing::info!(
            dc = dc_coefficient,
            harmonics = harmonics.len(),
            harmonic_count = power.harmonic_count,
            relative_error = power.relative_error,
            "spectrum analysis complete"
        );

        Ok(Self {
            config: config.clone(),
            dc_coefficient,
            harmonics,
            power,
        })
    }

    /// Configuration the analysis was computed from.
    pub fn config(&self) -> &PulseConfig {
        &self.config
    }

    /// DC coefficient `a0`.
    pub fn dc_coefficient(&self) -> f64 {
        self.dc_coefficient
    }

    /// Mean level `A0 = a0 / 2`.
    pub fn mean_level(&self) -> f64 {
        self.dc_coefficient / 2.0
    }

    /// Harmonics 1..=N in index order.
    pub fn harmonics(&self) -> &[Harmonic] {
        &self.harmonics
    }

    /// Harmonic `k`, if it was computed.
    pub fn harmonic(&self, k: u32) -> Option<&Harmonic> {
        let index = (k as usize).checked_sub(1)?;
        self.harmonics.get(index)
    }

    /// `a[1..=N]`
    pub fn cosine_coefficients(&self) -> Vec<f64> {
        self.harmonics.iter().map(|h| h.cosine).collect()
    }

    /// `b[1..=N]`
    pub fn sine_coefficients(&self) -> Vec<f64> {
        self.harmonics.iter().map(|h| h.sine).collect()
    }

    pub fn amplitudes(&self) -> Vec<f64> {
        self.harmonics.iter().map(Harmonic::amplitude).collect()
    }

    pub fn phases(&self) -> Vec<f64> {
        self.harmonics.iter().map(Harmonic::phase).collect()
    }

    /// Truncated energy against true average power.
    pub fn power(&self) -> &PowerBalance {
        &self.power
    }
}

fn checked(index: u32, component: Component, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::error!(index, %component, value, "non-finite coefficient");
        Err(AnalysisError::NonFiniteCoefficient { index, component })
    }
}
