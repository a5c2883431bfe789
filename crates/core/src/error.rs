use thiserror::Error;

/// Top-level error type used across the entire workspace.
#[derive(Debug, Error)]
pub enum VitalsError {
    /// A series or generator was built with parameters it cannot honour
    /// (zero/negative capacity, inverted range, empty script).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Statistics were requested from a series holding no samples.
    #[error("statistics requested on an empty series")]
    EmptySeries,

    /// A body measurement outside what a formula can work with.
    #[error("invalid measurement: {0}")]
    InvalidMeasurement(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = VitalsError> = std::result::Result<T, E>;
