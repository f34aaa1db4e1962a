//! Plot data as plain `(x, y)` sequences.

use serde::Serialize;

use crate::{Harmonic, Signal, SpectrumAnalysis, TrianglePulse};

/// A sequence of `(x, y)` points.
pub type Series = Vec<(f64, f64)>;

/// The four diagnostic plots of an analysis.
///
/// Rendering is left to the caller; see the `plot` feature for a PNG
/// renderer.
///
/// # Examples
///
/// ```
/// use overtone::{PulseConfig, SpectrumAnalysis, report::PlotSeries};
///
/// let analysis = SpectrumAnalysis::compute(&PulseConfig::default()).unwrap();
/// let series = PlotSeries::from_analysis(&analysis);
/// assert_eq!(series.waveform.len(), 4000);
/// assert_eq!(series.amplitude_spectrum.len(), 21);
/// assert_eq!(series.phase_spectrum.len(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSeries {
    /// Signal value against time over the configured window
    pub waveform: Series,
    /// `(0, a0)` then `(k, amplitude[k])`
    pub amplitude_spectrum: Series,
    /// `(0, a0)` then `(k, a[k]² + b[k]²)`
    pub power_spectrum: Series,
    /// `(k, phase[k])`
    pub phase_spectrum: Series,
}

impl PlotSeries {
    pub fn from_analysis(analysis: &SpectrumAnalysis) -> Self {
        Self {
            waveform: waveform(analysis),
            amplitude_spectrum: with_dc(analysis, |h| h.amplitude()),
            // The DC point is a0 itself, not its square
            power_spectrum: with_dc(analysis, |h| h.power()),
            phase_spectrum: analysis
                .harmonics()
                .iter()
                .map(|h| (h.index as f64, h.phase()))
                .collect(),
        }
    }
}

fn waveform(analysis: &SpectrumAnalysis) -> Series {
    let config = analysis.config();
    let pulse = TrianglePulse::from_config(config);
    let window = config.window;
    (0..window.samples)
        .map(|i| {
            let t = i as f64 * window.spacing + window.start;
            (t, pulse.value_at(t))
        })
        .collect()
}

fn with_dc(analysis: &SpectrumAnalysis, value: impl Fn(&Harmonic) -> f64) -> Series {
    std::iter::once((0.0, analysis.dc_coefficient()))
        .chain(
            analysis
                .harmonics()
                .iter()
                .map(|h| (h.index as f64, value(h))),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PulseConfig;
    use crate::config::WaveformWindow;

    fn series() -> (SpectrumAnalysis, PlotSeries) {
        let analysis = SpectrumAnalysis::compute(&PulseConfig::default()).unwrap();
        let series = PlotSeries::from_analysis(&analysis);
        (analysis, series)
    }

    #[test]
    fn test_waveform_window() {
        let (_, series) = series();
        assert_eq!(series.waveform.len(), 4000);
        assert_eq!(series.waveform[0].0, -0.02);
        let last = series.waveform[3999].0;
        assert!((last - 0.01999).abs() < 1e-12);
        for &(_, y) in &series.waveform {
            assert!((0.0..=0.5).contains(&y));
        }
    }

    #[test]
    fn test_waveform_repeats() {
        let (_, series) = series();
        // 0.0166 s is 1660 samples at 10 µs
        for i in 0..(4000 - 1660) {
            let a = series.waveform[i].1;
            let b = series.waveform[i + 1660].1;
            assert!((a - b).abs() < 1e-9, "sample {i}: {a} vs {b}");
        }
    }

    #[test]
    fn test_spectra_start_with_dc() {
        let (analysis, series) = series();
        assert_eq!(
            series.amplitude_spectrum[0],
            (0.0, analysis.dc_coefficient())
        );
        assert_eq!(series.power_spectrum[0], (0.0, analysis.dc_coefficient()));
        assert_eq!(series.amplitude_spectrum.len(), 21);
        assert_eq!(series.power_spectrum.len(), 21);
    }

    #[test]
    fn test_spectra_values() {
        let (analysis, series) = series();
        for (i, h) in analysis.harmonics().iter().enumerate() {
            assert_eq!(
                series.amplitude_spectrum[i + 1],
                (h.index as f64, h.amplitude())
            );
            assert_eq!(series.power_spectrum[i + 1], (h.index as f64, h.power()));
            assert_eq!(series.phase_spectrum[i], (h.index as f64, h.phase()));
        }
        assert_eq!(series.phase_spectrum[0].0, 1.0);
        assert_eq!(series.phase_spectrum[19].0, 20.0);
    }

    #[test]
    fn test_custom_window() {
        let config = PulseConfig {
            window: WaveformWindow {
                start: 0.0,
                spacing: 0.001,
                samples: 10,
            },
            ..Default::default()
        };
        let analysis = SpectrumAnalysis::compute(&config).unwrap();
        let series = PlotSeries::from_analysis(&analysis);
        assert_eq!(series.waveform.len(), 10);
        assert_eq!(series.waveform[0], (0.0, 0.0));
    }
}
