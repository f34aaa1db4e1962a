//! Time-domain signal model.
//!
//! This module provides the signal abstractions evaluated by the quadrature
//! rule:
//! - `Signal` trait for pure functions of time
//! - `TrianglePulse`, the periodic pulse being analysed
//! - `SignalExt` and the combinators used to build integrands

mod combinators;
mod pulse;
mod signal;

pub use combinators::{Multiply, SignalExt, Squared};
pub use pulse::TrianglePulse;
pub use signal::Signal;
