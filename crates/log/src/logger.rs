//! Named loggers with visibility filtering and per-severity call counts.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::sink::{LogRecord, LogSink};
use crate::{Location, Severity};

/// Decides which severities a logger materializes to its sink.
///
/// A severity is visible when it is at or above `threshold` and has not been
/// hidden explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
	threshold: Severity,
	hidden: [bool; Severity::COUNT],
}

impl Visibility {
	/// Default threshold. Passing checks stay hidden until it is lowered.
	pub const DEFAULT_THRESHOLD: Severity = Severity::Info;

	/// Shows every severity at or above `threshold`.
	pub const fn at_least(threshold: Severity) -> Self {
		Self {
			threshold,
			hidden: [false; Severity::COUNT],
		}
	}

	/// Shows every severity.
	pub const fn all() -> Self {
		Self::at_least(Severity::Trace)
	}

	/// Lowest severity shown, unless hidden explicitly.
	pub const fn threshold(&self) -> Severity {
		self.threshold
	}

	/// Replaces the threshold; explicit hides are kept.
	pub fn set_threshold(&mut self, threshold: Severity) {
		self.threshold = threshold;
	}

	/// Hides `severity` regardless of the threshold.
	pub fn hide(&mut self, severity: Severity) {
		self.hidden[severity.index()] = true;
	}

	/// Clears an explicit hide for `severity`.
	pub fn show(&mut self, severity: Severity) {
		self.hidden[severity.index()] = false;
	}

	/// Whether `severity` passes this filter.
	pub const fn is_visible(&self, severity: Severity) -> bool {
		severity as usize >= self.threshold as usize && !self.hidden[severity.index()]
	}
}

impl Default for Visibility {
	fn default() -> Self {
		Self::at_least(Self::DEFAULT_THRESHOLD)
	}
}

/// A named logger.
///
/// Every call to [`Logger::log`] is counted against its severity, whether or
/// not the record is visible. Only visible records reach the sink.
///
/// Loggers are shared by reference (`Arc<Logger>`); any number of checkers may
/// write through the same logger.
pub struct Logger {
	name: String,
	visibility: RwLock<Visibility>,
	counts: [AtomicU64; Severity::COUNT],
	sink: Arc<dyn LogSink>,
}

impl Logger {
	/// Creates a logger with default visibility.
	pub fn new(name: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
		Self::with_visibility(name, sink, Visibility::default())
	}

	/// Creates a logger with the given visibility.
	pub fn with_visibility(
		name: impl Into<String>,
		sink: Arc<dyn LogSink>,
		visibility: Visibility,
	) -> Self {
		Self {
			name: name.into(),
			visibility: RwLock::new(visibility),
			counts: std::array::from_fn(|_| AtomicU64::new(0)),
			sink,
		}
	}

	/// Name the logger was created with.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Logs `message` at `severity`.
	pub fn log(&self, message: &str, severity: Severity, location: Option<Location>) {
		self.log_with(severity, location, |_| message);
	}

	/// Logs at `severity` with a message chosen from the visibility decision.
	///
	/// Visibility is read exactly once: `message` receives it, and the record
	/// reaches the sink only when it was `true`. The call is counted either way.
	pub fn log_with<'m, F>(&self, severity: Severity, location: Option<Location>, message: F)
	where
		F: FnOnce(bool) -> &'m str,
	{
		self.counts[severity.index()].fetch_add(1, Ordering::Relaxed);
		let visible = self.is_visible(severity);
		let message = message(visible);
		if !visible {
			return;
		}
		self.sink.write(&LogRecord {
			logger: &self.name,
			message,
			severity,
			location,
		});
	}

	/// Whether records at `severity` currently reach the sink.
	pub fn is_visible(&self, severity: Severity) -> bool {
		self.visibility.read().is_visible(severity)
	}

	/// Returns a copy of the current visibility setting.
	pub fn visibility(&self) -> Visibility {
		*self.visibility.read()
	}

	/// Replaces the visibility setting.
	pub fn set_visibility(&self, visibility: Visibility) {
		*self.visibility.write() = visibility;
	}

	/// Shows every severity at or above `threshold`, keeping explicit hides.
	pub fn set_threshold(&self, threshold: Severity) {
		self.visibility.write().set_threshold(threshold);
	}

	/// Hides `severity` regardless of the threshold.
	pub fn hide(&self, severity: Severity) {
		self.visibility.write().hide(severity);
	}

	/// Clears an explicit hide for `severity`.
	pub fn show(&self, severity: Severity) {
		self.visibility.write().show(severity);
	}

	/// Number of `log` calls made at `severity`, visible or not.
	pub fn log_count(&self, severity: Severity) -> u64 {
		self.counts[severity.index()].load(Ordering::Relaxed)
	}

	/// Number of `log` calls made at any severity.
	pub fn total_log_count(&self) -> u64 {
		self.counts.iter().map(|c| c.load(Ordering::Relaxed)).sum()
	}

	/// Zeroes every per-severity call count.
	pub fn reset_log_counts(&self) {
		for count in &self.counts {
			count.store(0, Ordering::Relaxed);
		}
	}
}

impl core::fmt::Debug for Logger {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Logger")
			.field("name", &self.name)
			.field("visibility", &self.visibility())
			.field("total_log_count", &self.total_log_count())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;
	use crate::MemorySink;

	fn memory_logger() -> (Logger, Arc<MemorySink>) {
		let sink = Arc::new(MemorySink::new());
		(Logger::new("tb", sink.clone()), sink)
	}

	#[rstest]
	#[case(Severity::Pass, false)]
	#[case(Severity::Debug, false)]
	#[case(Severity::Info, true)]
	#[case(Severity::Warning, true)]
	#[case(Severity::Failure, true)]
	fn test_default_visibility(#[case] severity: Severity, #[case] visible: bool) {
		let (logger, _) = memory_logger();
		assert_eq!(logger.is_visible(severity), visible);
	}

	#[test]
	fn test_hidden_overrides_threshold() {
		let (logger, _) = memory_logger();
		logger.hide(Severity::Warning);
		assert!(!logger.is_visible(Severity::Warning));
		assert!(logger.is_visible(Severity::Error));

		logger.show(Severity::Warning);
		assert!(logger.is_visible(Severity::Warning));
	}

	#[test]
	fn test_invisible_records_are_counted_not_written() {
		let (logger, sink) = memory_logger();
		logger.log("quiet", Severity::Pass, None);
		logger.log("loud", Severity::Error, Some(Location::new("tb.rs", 3)));

		assert_eq!(logger.log_count(Severity::Pass), 1);
		assert_eq!(logger.log_count(Severity::Error), 1);
		assert_eq!(logger.total_log_count(), 2);

		let records = sink.records();
		assert_eq!(records.len(), 1);
		assert_eq!(records[0].message, "loud");
		assert_eq!(records[0].logger, "tb");
		assert_eq!(records[0].location, Some(Location::new("tb.rs", 3)));
	}

	#[test]
	fn test_lowering_threshold_materializes_passes() {
		let (logger, sink) = memory_logger();
		logger.set_threshold(Severity::Pass);
		logger.log("ok", Severity::Pass, None);
		assert_eq!(sink.len(), 1);
		assert_eq!(logger.visibility().threshold(), Severity::Pass);
	}

	#[test]
	fn test_log_with_decides_visibility_once() {
		let (logger, sink) = memory_logger();
		let mut seen = Vec::new();
		logger.log_with(Severity::Pass, None, |visible| {
			seen.push(visible);
			if visible { "detail" } else { "" }
		});
		logger.set_threshold(Severity::Pass);
		logger.log_with(Severity::Pass, None, |visible| {
			seen.push(visible);
			if visible { "detail" } else { "" }
		});

		assert_eq!(seen, [false, true]);
		assert_eq!(logger.log_count(Severity::Pass), 2);
		let messages: Vec<_> = sink.records().into_iter().map(|e| e.message).collect();
		assert_eq!(messages, ["detail"]);
	}

	#[test]
	fn test_reset_log_counts() {
		let (logger, _) = memory_logger();
		logger.log("x", Severity::Info, None);
		logger.reset_log_counts();
		assert_eq!(logger.total_log_count(), 0);
	}
}
