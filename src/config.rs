//! Pulse and analysis configuration.
//!
//! All values are fixed for one analysis run. The defaults reproduce the
//! reference experiment: a 0.5 V triangular pulse, 8.3 ms wide, repeating
//! every 16.6 ms, analysed up to a 700 Hz bandwidth.
//!
//! A configuration can also be loaded from TOML. Every key is optional and
//! falls back to its default:
//!
//! ```
//! use overtone::PulseConfig;
//!
//! let config = PulseConfig::from_toml_str("amplitude = 1.0\nharmonics = 10").unwrap();
//! assert_eq!(config.amplitude, 1.0);
//! assert_eq!(config.harmonics, 10);
//! assert_eq!(config.period, 0.0166);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::quadrature::{DEFAULT_STEP, Stepping};

/// Time window sampled for the waveform plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaveformWindow {
    /// First sampled instant in seconds
    pub start: f64,
    /// Distance between samples in seconds
    pub spacing: f64,
    /// Number of samples
    pub samples: usize,
}

impl Default for WaveformWindow {
    fn default() -> Self {
        Self {
            start: -0.02,
            spacing: 0.00001,
            samples: 4000,
        }
    }
}

/// Parameters of the periodic pulse and of the numerical analysis.
///
/// `angular_frequency` and `fundamental_frequency` are kept as independent
/// values rather than derived from `period`, so rounded published constants
/// can be reproduced exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PulseConfig {
    /// Period length T in seconds
    pub period: f64,
    /// Pulse peak amplitude A in volts
    pub amplitude: f64,
    /// Pulse base width ti in seconds
    pub pulse_width: f64,
    /// Fundamental frequency F1 in Hz
    pub fundamental_frequency: f64,
    /// Fundamental angular frequency w1 in rad/s
    pub angular_frequency: f64,
    /// Bandwidth delta_Fk the truncated spectrum must carry, in Hz
    pub bandwidth: f64,
    /// Number of harmonics tabulated (k = 1..=harmonics)
    pub harmonics: u32,
    /// Rectangle-rule step in seconds
    pub step: f64,
    /// How the rectangle rule walks the interval
    pub stepping: Stepping,
    /// Waveform plot window
    pub window: WaveformWindow,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            period: 0.0166,
            amplitude: 0.5,
            pulse_width: 0.0083,
            fundamental_frequency: 60.24,
            angular_frequency: 378.505,
            bandwidth: 700.0,
            harmonics: 20,
            step: DEFAULT_STEP,
            stepping: Stepping::default(),
            window: WaveformWindow::default(),
        }
    }
}

impl PulseConfig {
    /// Parses a configuration from TOML text and validates it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: PulseConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Half of the pulse width, the length of each ramp.
    pub fn half_width(&self) -> f64 {
        self.pulse_width / 2.0
    }

    /// Checks that every parameter describes a usable pulse and rule.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        positive("period", self.period)?;
        positive("amplitude", self.amplitude)?;
        positive("pulse_width", self.pulse_width)?;
        positive("fundamental_frequency", self.fundamental_frequency)?;
        positive("angular_frequency", self.angular_frequency)?;
        positive("bandwidth", self.bandwidth)?;
        positive("step", self.step)?;
        positive("window.spacing", self.window.spacing)?;

        if self.pulse_width > self.period {
            return Err(AnalysisError::invalid(
                "pulse_width",
                format!(
                    "must not exceed the period ({} > {})",
                    self.pulse_width, self.period
                ),
            ));
        }
        if self.step >= self.period {
            return Err(AnalysisError::invalid(
                "step",
                format!(
                    "must be smaller than the period ({} >= {})",
                    self.step, self.period
                ),
            ));
        }
        if self.harmonics == 0 {
            return Err(AnalysisError::invalid("harmonics", "must be at least 1"));
        }
        if !self.window.start.is_finite() {
            return Err(AnalysisError::invalid("window.start", "must be finite"));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::invalid(
            field,
            format!("must be positive and finite, got {value}"),
        ))
    }
}
