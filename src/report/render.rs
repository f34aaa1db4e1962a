//! PNG rendering of the plot series.

use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use super::{PlotSeries, Series};
use crate::error::{AnalysisError, Result};

const SIZE: (u32, u32) = (1024, 768);

struct Chart<'a> {
    name: &'static str,
    caption: &'static str,
    x_desc: &'static str,
    y_desc: &'static str,
    points: &'a Series,
}

/// Draws the four charts as `waveform.png`, `amplitude.png`, `power.png`
/// and `phase.png` inside `dir`, creating it if needed.
///
/// Returns the written paths in that order.
pub fn render_png(series: &PlotSeries, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let charts = [
        Chart {
            name: "waveform",
            caption: "Signal",
            x_desc: "Time, s",
            y_desc: "Signal, V",
            points: &series.waveform,
        },
        Chart {
            name: "amplitude",
            caption: "Amplitude spectrum",
            x_desc: "No. of harmonics",
            y_desc: "Amplitude of harmonics, V",
            points: &series.amplitude_spectrum,
        },
        Chart {
            name: "power",
            caption: "Power spectrum",
            x_desc: "No. of harmonics",
            y_desc: "Power of signal, W",
            points: &series.power_spectrum,
        },
        Chart {
            name: "phase",
            caption: "Phase spectrum",
            x_desc: "k",
            y_desc: "Ψk",
            points: &series.phase_spectrum,
        },
    ];

    let mut written = Vec::with_capacity(charts.len());
    for chart in &charts {
        let path = dir.join(format!("{}.png", chart.name));
        draw(chart, &path)?;
        tracing::info!(path = %path.display(), "chart written");
        written.push(path);
    }
    Ok(written)
}

fn draw(chart: &Chart<'_>, path: &Path) -> Result<()> {
    let failed = |e: &dyn std::fmt::Display| AnalysisError::Render {
        chart: chart.name,
        reason: e.to_string(),
    };

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| failed(&e))?;

    let (x_range, y_range) = bounds(chart.points);
    let mut ctx = ChartBuilder::on(&root)
        .caption(chart.caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| failed(&e))?;

    ctx.configure_mesh()
        .x_desc(chart.x_desc)
        .y_desc(chart.y_desc)
        .draw()
        .map_err(|e| failed(&e))?;

    ctx.draw_series(LineSeries::new(chart.points.iter().copied(), &BLUE))
        .map_err(|e| failed(&e))?;

    root.present().map_err(|e| failed(&e))?;
    Ok(())
}

/// Axis ranges covering every point, padded by 5% vertically.
fn bounds(points: &[(f64, f64)]) -> (Range<f64>, Range<f64>) {
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if points.is_empty() {
        return (0.0..1.0, 0.0..1.0);
    }
    if x_max <= x_min {
        x_max = x_min + 1.0;
    }
    let pad = if y_max > y_min {
        (y_max - y_min) * 0.05
    } else {
        0.5
    };
    (x_min..x_max, (y_min - pad)..(y_max + pad))
}
