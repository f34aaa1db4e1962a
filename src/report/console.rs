//! Plain-text report of an analysis.

use std::fmt;

use crate::{PowerBalance, SpectrumAnalysis};

/// Column where values start in the dotted summary lines.
const LEADER_WIDTH: usize = 53;

/// Formats an analysis the way the console tool prints it.
///
/// Amplitudes and phases are rounded to three decimals; the raw `a` and `b`
/// coefficients are printed in full.
///
/// # Examples
///
/// ```
/// use overtone::{PulseConfig, SpectrumAnalysis, report::ConsoleReport};
///
/// let analysis = SpectrumAnalysis::compute(&PulseConfig::default()).unwrap();
/// let text = ConsoleReport::new(&analysis).to_string();
/// assert!(text.contains("Number of harmonics"));
/// ```
pub struct ConsoleReport<'a> {
    analysis: &'a SpectrumAnalysis,
}

impl<'a> ConsoleReport<'a> {
    pub fn new(analysis: &'a SpectrumAnalysis) -> Self {
        Self { analysis }
    }
}

impl fmt::Display for ConsoleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.analysis;
        writeln!(f, "harmonics: {}", rounded(&analysis.amplitudes()))?;
        writeln!(f, "phsii:     {}", rounded(&analysis.phases()))?;
        writeln!(f, "ak:        {}", full(&analysis.cosine_coefficients()))?;
        writeln!(f, "bk:        {}", full(&analysis.sine_coefficients()))?;
        writeln!(f)?;

        let PowerBalance {
            harmonic_count,
            truncated_energy: energy,
            average_power,
            absolute_error,
            relative_error,
        } = *analysis.power();
        // Label, dots up to the value column, then the gap before the value
        let rows = [
            ("Number of harmonics ", " ", f64::from(harmonic_count)),
            ("Power of signal (energetic spectrum)", "", energy),
            ("Average power of signal", "", average_power),
            ("Absolute error", "", absolute_error),
            ("Relative error", "", relative_error),
        ];
        for (label, gap, value) in rows {
            let width = LEADER_WIDTH - gap.len();
            writeln!(f, "{label:.<width$}{gap}{value}")?;
        }
        Ok(())
    }
}

fn rounded(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| format!("{v:.3}")).collect();
    format!("[{}]", items.join(", "))
}

fn full(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}
