//! Error types for the Fourier analysis.

use crate::spectrum::Component;

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can abort an analysis run.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Invalid configuration value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("{component} coefficient for harmonic {index} is not finite")]
    NonFiniteCoefficient { index: u32, component: Component },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[cfg(feature = "plot")]
    #[error("Failed to render {chart}: {reason}")]
    Render { chart: &'static str, reason: String },
}

impl AnalysisError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
