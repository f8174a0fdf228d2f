//! Errors that can occur while setting up the application.

use tracing_subscriber::util::TryInitError;

/// Failed to initialize the application infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// Configuration could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),
    /// A global tracing subscriber was already installed.
    #[error("failed to initialize logging: {0}")]
    Logging(#[from] TryInitError),
}
