//! Options for creating checkers.

use std::sync::Arc;

use verdict_log::{Logger, Severity};

/// Default severity for failing checks without an explicit level.
pub const DEFAULT_SEVERITY: Severity = Severity::Error;

/// Where a new checker gets its logger from.
#[derive(Debug, Clone, Default)]
pub enum LoggerSource {
	/// The store's default logger.
	#[default]
	Default,
	/// A logger resolved (or created) by name through the store's logger registry.
	Named(String),
	/// An existing logger, shared with whoever else holds it.
	Logger(Arc<Logger>),
}

/// Options for [`CheckerStore::new_checker`](crate::CheckerStore::new_checker).
///
/// ```
/// use verdict_checker::{CheckerConfig, CheckerStore};
/// use verdict_log::Severity;
///
/// let store = CheckerStore::default();
/// let c = store.new_checker(CheckerConfig::named("uart").default_severity(Severity::Warning));
/// assert_eq!(store.get_default_log_level(c), Ok(Severity::Warning));
/// ```
#[derive(Debug, Clone)]
pub struct CheckerConfig {
	pub logger: LoggerSource,
	pub default_severity: Severity,
}

impl CheckerConfig {
	/// Binds the checker to the logger called `name`.
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			logger: LoggerSource::Named(name.into()),
			..Self::default()
		}
	}

	/// Binds the checker to an existing logger.
	pub fn with_logger(logger: Arc<Logger>) -> Self {
		Self {
			logger: LoggerSource::Logger(logger),
			..Self::default()
		}
	}

	/// Sets the severity used by failing checks without an explicit level.
	pub fn default_severity(mut self, severity: Severity) -> Self {
		self.default_severity = severity;
		self
	}
}

impl Default for CheckerConfig {
	fn default() -> Self {
		Self {
			logger: LoggerSource::Default,
			default_severity: DEFAULT_SEVERITY,
		}
	}
}

impl From<&str> for CheckerConfig {
	fn from(name: &str) -> Self {
		Self::named(name)
	}
}

impl From<String> for CheckerConfig {
	fn from(name: String) -> Self {
		Self::named(name)
	}
}

impl From<Arc<Logger>> for CheckerConfig {
	fn from(logger: Arc<Logger>) -> Self {
		Self::with_logger(logger)
	}
}
