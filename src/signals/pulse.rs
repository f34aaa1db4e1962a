//! Periodic triangular pulse.

use super::Signal;
use crate::PulseConfig;

/// A periodic triangular pulse.
///
/// Within each period the pulse rises linearly from 0 to `amplitude` over the
/// first half of its width, falls back to 0 over the second half, and stays at
/// 0 for the rest of the period:
///
/// ```text
///  A |    /\
///    |   /  \
///  0 +--/----\----------+--/\---
///    0     ti           T
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrianglePulse {
    /// Period length in seconds
    period: f64,
    /// Peak value
    amplitude: f64,
    /// Length of each ramp (half the pulse width) in seconds
    half_width: f64,
}

impl TrianglePulse {
    /// Creates a new triangular pulse.
    ///
    /// # Arguments
    ///
    /// * `period` - Period length T in seconds
    /// * `amplitude` - Peak value A
    /// * `pulse_width` - Base width ti of the pulse in seconds
    ///
    /// # Examples
    ///
    /// ```
    /// use overtone::{Signal, TrianglePulse};
    ///
    /// let pulse = TrianglePulse::new(0.0166, 0.5, 0.0083);
    /// assert_eq!(pulse.value_at(0.0), 0.0);
    /// assert_eq!(pulse.value_at(0.0083 / 2.0), 0.5);
    /// ```
    pub fn new(period: f64, amplitude: f64, pulse_width: f64) -> Self {
        Self {
            period,
            amplitude,
            half_width: pulse_width / 2.0,
        }
    }

    /// Creates the pulse described by a configuration.
    pub fn from_config(config: &PulseConfig) -> Self {
        Self::new(config.period, config.amplitude, config.pulse_width)
    }

    /// Gets the period length in seconds.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Gets the peak value.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Gets the base width of the pulse in seconds.
    pub fn pulse_width(&self) -> f64 {
        self.half_width * 2.0
    }

    /// Reduces `t` into `[0, period)` with an exact floored modulo.
    ///
    /// Negative times wrap to their positive representative, so
    /// `reduce(-0.001)` is `period - 0.001`, not `-0.001`.
    pub fn reduce(&self, t: f64) -> f64 {
        let time = t.rem_euclid(self.period);
        // A tiny negative t can round up to exactly one period.
        if time >= self.period { 0.0 } else { time }
    }
}

impl Signal for TrianglePulse {
    fn value_at(&self, t: f64) -> f64 {
        let time = self.reduce(t);
        if time < self.half_width {
            // Rising: 0 to A
            self.amplitude * time / self.half_width
        } else if time < 2.0 * self.half_width {
            // Falling: A to 0
            self.amplitude * (1.0 - (time - self.half_width) / self.half_width)
        } else {
            0.0
        }
    }
}
