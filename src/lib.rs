//! Overtone - Fourier series of a periodic triangular pulse
//!
//! This library approximates the trigonometric Fourier series of a periodic
//! triangular pulse by numerical integration, and compares the energy carried
//! by a bandwidth-limited set of harmonics with the true signal power.
//!
//! ```
//! use overtone::{PulseConfig, SpectrumAnalysis};
//!
//! let analysis = SpectrumAnalysis::compute(&PulseConfig::default()).unwrap();
//! let power = analysis.power();
//! assert_eq!(power.harmonic_count, 12);
//! assert!(power.relative_error < 1e-3);
//! ```

pub mod config;
pub mod error;
#[cfg(feature = "cli")]
pub mod logging;
pub mod quadrature;
pub mod report;
pub mod signals;
pub mod spectrum;

// Re-export commonly used types at the crate root
pub use config::{PulseConfig, WaveformWindow};
pub use error::{AnalysisError, Result};
pub use quadrature::{Integrand, RectangleRule, Stepping};
pub use signals::{Signal, SignalExt, TrianglePulse};
pub use spectrum::{CoefficientEngine, Component, Harmonic, PowerBalance, SpectrumAnalysis};
