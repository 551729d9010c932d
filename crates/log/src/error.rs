//! Error types for the logging layer.

use thiserror::Error;

/// Errors raised while configuring loggers.
#[derive(Debug, Error)]
pub enum LogError {
	/// A severity name did not match any known level.
	#[error("unknown severity: {0}")]
	UnknownSeverity(String),

	/// The logger configuration could not be parsed.
	#[error("invalid logger configuration: {0}")]
	Config(#[from] toml::de::Error),
}

/// Result type for logging operations.
pub type Result<T> = std::result::Result<T, LogError>;
