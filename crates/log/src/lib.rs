//! Logging layer for checker output.
//!
//! * [`Severity`]: ordered log levels, including the `pass` class for passing checks
//! * [`Logger`]: named logger with visibility filtering and per-severity call counts
//! * [`LogSink`]: destination for visible records ([`TracingSink`], [`MemorySink`])
//! * [`LoggerRegistry`]: name-based logger resolution with a default logger
//! * [`LogConfig`]: TOML visibility configuration

pub mod config;
pub mod error;
pub mod location;
pub mod logger;
pub mod registry;
pub mod severity;
pub mod sink;

pub use config::{LogConfig, LoggerConfig};
pub use error::{LogError, Result};
pub use location::Location;
pub use logger::{Logger, Visibility};
pub use registry::{DEFAULT_LOGGER, LoggerRegistry};
pub use severity::Severity;
pub use sink::{LogEntry, LogRecord, LogSink, MemorySink, TracingSink};
