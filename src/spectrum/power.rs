//! Power of the truncated spectrum against the true signal power.

use serde::{Deserialize, Serialize};

use super::Harmonic;

/// Number of harmonics needed to carry `bandwidth` Hz of a signal whose
/// fundamental is `fundamental_frequency` Hz: `ceil(bandwidth / F1)`.
///
/// # Examples
///
/// ```
/// use overtone::spectrum::harmonic_count;
///
/// assert_eq!(harmonic_count(700.0, 60.24), 12);
/// ```
pub fn harmonic_count(bandwidth: f64, fundamental_frequency: f64) -> u32 {
    (bandwidth / fundamental_frequency).ceil() as u32
}

/// Energy carried by the DC level and the given harmonics:
/// `A0² + ½ Σ (a[k]² + b[k]²)`.
pub fn truncated_energy(mean_level: f64, harmonics: &[Harmonic]) -> f64 {
    let harmonic_sum: f64 = harmonics.iter().map(Harmonic::power).sum();
    mean_level * mean_level + 0.5 * harmonic_sum
}

/// Comparison of the truncated-spectrum energy with the true average power.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerBalance {
    /// Harmonics included in the truncated energy
    pub harmonic_count: u32,
    /// `A0² + ½ Σ_{k=1..N} (a[k]² + b[k]²)`
    pub truncated_energy: f64,
    /// `1/T ∫₀ᵀ s(t)² dt`
    pub average_power: f64,
    /// `|average_power - truncated_energy|`
    pub absolute_error: f64,
    /// `absolute_error / average_power`, NaN when the power is zero
    pub relative_error: f64,
}

impl PowerBalance {
    /// Derives both error figures from the two power estimates.
    pub fn new(harmonic_count: u32, truncated_energy: f64, average_power: f64) -> Self {
        let absolute_error = (average_power - truncated_energy).abs();
        let relative_error = if average_power == 0.0 {
            tracing::warn!("average power is zero, relative error is undefined");
            f64::NAN
        } else {
            absolute_error / average_power
        };
        Self {
            harmonic_count,
            truncated_energy,
            average_power,
            absolute_error,
            relative_error,
        }
    }
}
