//! Presentation of an analysis: console text and plot data.
//!
//! Nothing here computes coefficients; everything reads a finished
//! [`SpectrumAnalysis`](crate::SpectrumAnalysis).

mod console;
#[cfg(feature = "plot")]
mod render;
mod series;

pub use console::ConsoleReport;
#[cfg(feature = "plot")]
pub use render::render_png;
pub use series::{PlotSeries, Series};
