//! Destinations for visible log records.

use std::collections::VecDeque;

use parking_lot::RwLock;

use crate::{LogConfig, Location, Severity};

/// Default number of records retained by a [`MemorySink`].
pub const DEFAULT_MEMORY_CAPACITY: usize = 1000;

/// A log record on its way to a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord<'a> {
	/// Name of the logger that produced the record.
	pub logger: &'a str,
	/// Message text; empty for placeholder records.
	pub message: &'a str,
	/// Severity of the record.
	pub severity: Severity,
	/// Source location, if the caller supplied one.
	pub location: Option<Location>,
}

impl LogRecord<'_> {
	/// Copies the record into an owned [`LogEntry`].
	pub fn to_entry(&self) -> LogEntry {
		LogEntry {
			logger: self.logger.to_string(),
			message: self.message.to_string(),
			severity: self.severity,
			location: self.location,
		}
	}
}

/// Owned copy of a [`LogRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
	pub logger: String,
	pub message: String,
	pub severity: Severity,
	pub location: Option<Location>,
}

/// Receives records that passed a logger's visibility filter.
pub trait LogSink: Send + Sync {
	/// Writes one record.
	fn write(&self, record: &LogRecord<'_>);
}

/// Forwards records to the `tracing` dispatcher under the `verdict` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
	/// Creates a sink forwarding to the current `tracing` dispatcher.
	pub fn new() -> Self {
		Self
	}
}

macro_rules! emit {
	($level:expr, $record:expr) => {
		tracing::event!(
			target: "verdict",
			$level,
			logger = $record.logger,
			severity = $record.severity.as_str(),
			file = $record.location.map(|l| l.file),
			line = $record.location.map(|l| l.line),
			"{}",
			$record.message
		)
	};
}

impl LogSink for TracingSink {
	fn write(&self, record: &LogRecord<'_>) {
		use tracing::Level;

		match record.severity {
			Severity::Trace => emit!(Level::TRACE, record),
			Severity::Debug => emit!(Level::DEBUG, record),
			Severity::Pass | Severity::Info => emit!(Level::INFO, record),
			Severity::Warning => emit!(Level::WARN, record),
			Severity::Error | Severity::Failure => emit!(Level::ERROR, record),
		}
	}
}

/// Bounded in-memory sink. Evicts the oldest record once full.
pub struct MemorySink {
	capacity: usize,
	entries: RwLock<VecDeque<LogEntry>>,
}

impl MemorySink {
	/// Creates a sink holding up to [`DEFAULT_MEMORY_CAPACITY`] records.
	pub fn new() -> Self {
		Self::with_capacity(DEFAULT_MEMORY_CAPACITY)
	}

	/// Creates a sink holding up to `capacity` records (at least one).
	pub fn with_capacity(capacity: usize) -> Self {
		let capacity = capacity.max(1);
		Self {
			capacity,
			entries: RwLock::new(VecDeque::with_capacity(capacity)),
		}
	}

	/// Creates a sink sized by `config.capacity`, or the default capacity.
	pub fn from_config(config: &LogConfig) -> Self {
		Self::with_capacity(config.capacity.unwrap_or(DEFAULT_MEMORY_CAPACITY))
	}

	/// Returns a snapshot of the retained records, oldest first.
	pub fn records(&self) -> Vec<LogEntry> {
		self.entries.read().iter().cloned().collect()
	}

	/// Returns the most recent record.
	pub fn last(&self) -> Option<LogEntry> {
		self.entries.read().back().cloned()
	}

	/// Number of retained records.
	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	/// Returns true if no record is retained.
	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	/// Maximum number of retained records.
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Drops every retained record.
	pub fn clear(&self) {
		self.entries.write().clear();
	}
}

impl Default for MemorySink {
	fn default() -> Self {
		Self::new()
	}
}

impl core::fmt::Debug for MemorySink {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("MemorySink")
			.field("capacity", &self.capacity)
			.field("len", &self.len())
			.finish()
	}
}

impl LogSink for MemorySink {
	fn write(&self, record: &LogRecord<'_>) {
		let mut entries = self.entries.write();
		if entries.len() >= self.capacity {
			entries.pop_front();
		}
		entries.push_back(record.to_entry());
	}
}
