//! Error types for the engine binary.
//!
//! [`EngineError`] wraps every failure mode during startup and the
//! optimization run, so `main` can propagate with `?`.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: hedonic_core::ConfigError,
    },

    /// The optimizer could not be built.
    #[error("optimizer error: {source}")]
    Optimizer {
        /// The underlying optimizer error.
        #[from]
        source: hedonic_core::OptimizerError,
    },

    /// The result could not be written out.
    #[error("output error: {source}")]
    Output {
        /// The underlying serialization error.
        #[from]
        source: serde_json::Error,
    },

    /// The logging filter could not be built from the configured level.
    #[error("invalid log level {level:?}: {message}")]
    LogLevel {
        /// The configured level string.
        level: String,
        /// Why the filter rejected it.
        message: String,
    },
}
