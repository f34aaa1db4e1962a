//! Fourier coefficients and the quantities derived from them.
//!
//! The series being approximated is
//!
//! ```text
//! s(t) = a0/2 + Σ_{k≥1} ( a[k] cos(k w1 t) + b[k] sin(k w1 t) )
//! ```
//!
//! with every coefficient obtained by integrating one period numerically.

mod analysis;
mod coefficients;
mod power;

pub use analysis::{Harmonic, SpectrumAnalysis, phase};
pub use coefficients::{CoefficientEngine, Component, HarmonicBasis};
pub use power::{PowerBalance, harmonic_count, truncated_energy};
