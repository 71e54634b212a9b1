//! Error types for the server binary.
//!
//! [`ServerBinError`] wraps every failure mode of startup and serving so
//! `main` can propagate with `?`.

/// Top-level error for the server binary.
#[derive(Debug, thiserror::Error)]
pub enum ServerBinError {
    /// Configuration loading or an environment override failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: snipes_core::ConfigError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: snipes_api::ServerError,
    },
}
