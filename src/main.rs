//! Command-line front end: computes the analysis and prints the report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use overtone::logging::{LogConfig, LogFormat, LogLevel, init_logging};
use overtone::report::{ConsoleReport, PlotSeries};
use overtone::{PulseConfig, SpectrumAnalysis, Stepping};

/// Fourier series of a periodic triangular pulse by numerical integration.
#[derive(Debug, Parser)]
#[command(name = "overtone", version, about)]
struct Cli {
    /// TOML file with pulse and analysis parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Integration step in seconds
    #[arg(long)]
    step: Option<f64>,

    /// How the rectangle rule walks the period
    #[arg(long, value_enum)]
    stepping: Option<Stepping>,

    /// Number of harmonics to tabulate
    #[arg(long)]
    harmonics: Option<u32>,

    /// Print the analysis as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Directory to write PNG charts into
    #[arg(long)]
    plot_dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,

    #[arg(long, value_enum, default_value = "compact")]
    log_format: LogFormat,
}

impl Cli {
    fn pulse_config(&self) -> Result<PulseConfig> {
        let mut config = match &self.config {
            Some(path) => PulseConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => PulseConfig::default(),
        };
        if let Some(step) = self.step {
            config.step = step;
        }
        if let Some(stepping) = self.stepping {
            config.stepping = stepping;
        }
        if let Some(harmonics) = self.harmonics {
            config.harmonics = harmonics;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig {
        level: cli.log_level,
        format: cli.log_format,
    });

    let config = cli.pulse_config()?;
    tracing::debug!(?config, "configuration");
    let analysis = SpectrumAnalysis::compute(&config).context("computing the spectrum")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&analysis).context("serializing the analysis")?;
        println!("{json}");
    } else {
        print!("{}", ConsoleReport::new(&analysis));
    }

    if let Some(dir) = &cli.plot_dir {
        write_plots(&PlotSeries::from_analysis(&analysis), dir)?;
    }
    Ok(())
}

#[cfg(feature = "plot")]
fn write_plots(series: &PlotSeries, dir: &Path) -> Result<()> {
    let paths = overtone::report::render_png(series, dir)
        .with_context(|| format!("rendering charts into {}", dir.display()))?;
    for path in paths {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

#[cfg(not(feature = "plot"))]
fn write_plots(_series: &PlotSeries, dir: &Path) -> Result<()> {
    anyhow::bail!(
        "cannot write charts into {}: built without the `plot` feature",
        dir.display()
    )
}
