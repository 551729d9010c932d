//! Name-based logger resolution.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::sink::{LogSink, TracingSink};
use crate::{LogConfig, Logger};

/// Name of the logger returned by [`LoggerRegistry::default_logger`].
pub const DEFAULT_LOGGER: &str = "default";

/// Resolves logger names to shared [`Logger`]s, creating them on first use.
///
/// Every logger created by a registry writes to the registry's sink and starts
/// with the visibility the current [`LogConfig`] assigns to its name.
///
/// Thread-safe; can be shared via `Arc<LoggerRegistry>`.
pub struct LoggerRegistry {
	sink: Arc<dyn LogSink>,
	config: RwLock<LogConfig>,
	loggers: RwLock<HashMap<String, Arc<Logger>>>,
	default: Arc<Logger>,
}

impl LoggerRegistry {
	/// Creates a registry whose loggers write to `sink`.
	pub fn new(sink: Arc<dyn LogSink>) -> Self {
		Self::with_config(sink, LogConfig::default())
	}

	/// Creates a registry whose loggers write through `tracing`.
	pub fn tracing() -> Self {
		Self::new(Arc::new(TracingSink::new()))
	}

	/// Creates a registry with an initial configuration.
	pub fn with_config(sink: Arc<dyn LogSink>, config: LogConfig) -> Self {
		let default = Arc::new(Logger::with_visibility(
			DEFAULT_LOGGER,
			sink.clone(),
			config.visibility_for(DEFAULT_LOGGER),
		));
		let mut loggers = HashMap::new();
		loggers.insert(DEFAULT_LOGGER.to_string(), default.clone());
		Self {
			sink,
			config: RwLock::new(config),
			loggers: RwLock::new(loggers),
			default,
		}
	}

	/// The process-wide default logger of this registry.
	pub fn default_logger(&self) -> Arc<Logger> {
		self.default.clone()
	}

	/// Returns the logger called `name`, if it exists.
	pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
		self.loggers.read().get(name).cloned()
	}

	/// Returns the logger called `name`, creating it if needed.
	///
	/// An empty name resolves to the default logger.
	pub fn get_or_create(&self, name: &str) -> Arc<Logger> {
		if name.is_empty() {
			return self.default_logger();
		}
		if let Some(logger) = self.get(name) {
			return logger;
		}

		let mut loggers = self.loggers.write();
		loggers
			.entry(name.to_string())
			.or_insert_with(|| {
				debug!(logger = name, "creating logger");
				let visibility = self.config.read().visibility_for(name);
				Arc::new(Logger::with_visibility(name, self.sink.clone(), visibility))
			})
			.clone()
	}

	/// Names of all known loggers, sorted.
	pub fn names(&self) -> Vec<String> {
		let mut names: Vec<_> = self.loggers.read().keys().cloned().collect();
		names.sort();
		names
	}

	/// Applies `config` to every existing logger and to loggers created later.
	pub fn apply(&self, config: LogConfig) {
		// Publish before touching existing loggers, so a logger created in
		// between picks up the new config or is visited below.
		*self.config.write() = config.clone();
		for (name, logger) in self.loggers.read().iter() {
			logger.set_visibility(config.visibility_for(name));
		}
	}

	/// The sink shared by this registry's loggers.
	pub fn sink(&self) -> Arc<dyn LogSink> {
		self.sink.clone()
	}
}

impl Default for LoggerRegistry {
	fn default() -> Self {
		Self::tracing()
	}
}

impl core::fmt::Debug for LoggerRegistry {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("LoggerRegistry")
			.field("loggers", &self.names())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::{MemorySink, Severity};

	fn registry() -> (LoggerRegistry, Arc<MemorySink>) {
		let sink = Arc::new(MemorySink::new());
		(LoggerRegistry::new(sink.clone()), sink)
	}

	#[test]
	fn test_get_or_create_is_idempotent() {
		let (reg, _) = registry();
		let a = reg.get_or_create("uart");
		let b = reg.get_or_create("uart");
		assert!(Arc::ptr_eq(&a, &b));
		assert_eq!(reg.names(), ["default", "uart"]);
	}

	#[test]
	fn test_empty_name_resolves_to_default() {
		let (reg, _) = registry();
		assert!(Arc::ptr_eq(&reg.get_or_create(""), &reg.default_logger()));
		assert_eq!(reg.default_logger().name(), DEFAULT_LOGGER);
	}

	#[test]
	fn test_loggers_share_the_sink() {
		let (reg, sink) = registry();
		reg.get_or_create("a").log("from a", Severity::Error, None);
		reg.get_or_create("b").log("from b", Severity::Error, None);

		let loggers: Vec<_> = sink.records().into_iter().map(|e| e.logger).collect();
		assert_eq!(loggers, ["a", "b"]);
	}

	#[test]
	fn test_apply_updates_existing_and_future_loggers() {
		let (reg, _) = registry();
		let uart = reg.get_or_create("uart");
		assert!(!uart.is_visible(Severity::Pass));

		let cfg = LogConfig::from_toml(
			r#"
[loggers.uart]
threshold = "pass"

[loggers.spi]
hidden = ["error"]
"#,
		)
		.unwrap();
		reg.apply(cfg);

		assert!(uart.is_visible(Severity::Pass));
		let spi = reg.get_or_create("spi");
		assert!(!spi.is_visible(Severity::Error));
		assert!(spi.is_visible(Severity::Failure));
	}

	#[test]
	fn test_apply_reaches_loggers_created_concurrently() {
		let (reg, _) = registry();
		let cfg = LogConfig::from_toml(r#"threshold = "pass""#).unwrap();

		let created: Vec<Arc<Logger>> = std::thread::scope(|s| {
			let creator = s.spawn(|| {
				(0..200)
					.map(|i| reg.get_or_create(&format!("dut{i}")))
					.collect::<Vec<_>>()
			});
			reg.apply(cfg);
			creator.join().unwrap()
		});

		for logger in created.iter().chain([&reg.default_logger()]) {
			assert!(
				logger.is_visible(Severity::Pass),
				"{} kept the old threshold",
				logger.name()
			);
		}
	}
}
