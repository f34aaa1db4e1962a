//! Signal combinators for building integrands out of simpler signals.

use super::Signal;

/// Multiplies two signals together.
///
/// # Examples
///
/// ```
/// use overtone::{Signal, signals::Multiply};
///
/// let product = Multiply::new(2.0, 3.0);
/// assert_eq!(product.value_at(0.0), 6.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Multiply<A: Signal, B: Signal> {
    a: A,
    b: B,
}

impl<A: Signal, B: Signal> Multiply<A, B> {
    /// Creates a new Multiply combinator.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: Signal, B: Signal> Signal for Multiply<A, B> {
    fn value_at(&self, t: f64) -> f64 {
        self.a.value_at(t) * self.b.value_at(t)
    }
}

/// Squares a signal, giving its instantaneous power into a 1 Ω load.
///
/// The source is evaluated once per instant.
#[derive(Debug, Clone, Copy)]
pub struct Squared<S: Signal> {
    pub source: S,
}

impl<S: Signal> Signal for Squared<S> {
    fn value_at(&self, t: f64) -> f64 {
        let value = self.source.value_at(t);
        value * value
    }
}

/// Extension trait for chaining signal combinators.
///
/// # Examples
///
/// ```
/// use overtone::{Signal, SignalExt, TrianglePulse};
///
/// let pulse = TrianglePulse::new(1.0, 2.0, 1.0);
/// let power = pulse.squared();
/// assert_eq!(power.value_at(0.5), 4.0);
/// ```
pub trait SignalExt: Signal + Sized {
    /// Multiplies this signal with another signal.
    fn multiply<S: Signal>(self, other: S) -> Multiply<Self, S> {
        Multiply { a: self, b: other }
    }

    /// Squares this signal.
    fn squared(self) -> Squared<Self> {
        Squared { source: self }
    }
}

impl<T: Signal> SignalExt for T {}
