//! Checker allocation, registry and field access.

use std::sync::{Arc, OnceLock};

use parking_lot::{Mutex, RwLock};
use tracing::debug;
use verdict_log::{Logger, LoggerRegistry, Severity};

use crate::config::{CheckerConfig, LoggerSource};
use crate::error::{CheckerError, Result};
use crate::report::{CheckerReport, StatReport};
use crate::{Checker, CheckerStat};

static GLOBAL: OnceLock<CheckerStore> = OnceLock::new();

/// Mutable part of a checker, guarded as one unit so that snapshots are
/// always consistent.
#[derive(Debug)]
pub(crate) struct EntryState {
	pub(crate) default_severity: Severity,
	pub(crate) stat: CheckerStat,
}

/// Field block of one checker.
#[derive(Debug)]
pub(crate) struct Entry {
	pub(crate) logger: Arc<Logger>,
	pub(crate) state: Mutex<EntryState>,
}

/// Append-only registry of checkers.
///
/// Handles index into the registry; entries are never moved out or removed, so
/// a handle stays valid for the lifetime of the store. Loggers are resolved
/// through the store's [`LoggerRegistry`].
///
/// Thread-safe: the registry takes a write lock only to append, and each
/// checker's counters sit behind their own lock.
pub struct CheckerStore {
	loggers: Arc<LoggerRegistry>,
	entries: RwLock<Vec<Arc<Entry>>>,
}

impl CheckerStore {
	/// Creates an empty store resolving loggers through `loggers`.
	pub fn new(loggers: Arc<LoggerRegistry>) -> Self {
		Self {
			loggers,
			entries: RwLock::new(Vec::new()),
		}
	}

	/// The process-wide store.
	///
	/// Created on first use with a `tracing`-backed logger registry and kept
	/// for the rest of the process.
	pub fn global() -> &'static CheckerStore {
		GLOBAL.get_or_init(CheckerStore::default)
	}

	/// The logger registry used to resolve logger names.
	pub fn loggers(&self) -> &Arc<LoggerRegistry> {
		&self.loggers
	}

	/// Allocates a checker with zeroed statistics.
	///
	/// # Panics
	///
	/// Panics if the store already holds `u32::MAX` checkers.
	pub fn new_checker(&self, config: impl Into<CheckerConfig>) -> Checker {
		let config = config.into();
		let logger = match config.logger {
			LoggerSource::Default => self.loggers.default_logger(),
			LoggerSource::Named(name) => self.loggers.get_or_create(&name),
			LoggerSource::Logger(logger) => logger,
		};

		let mut entries = self.entries.write();
		let index = u32::try_from(entries.len())
			.ok()
			.filter(|&i| i != Checker::NULL.id());
		let Some(index) = index else {
			panic!("checker registry exhausted");
		};
		let checker = Checker::from_index(index);

		debug!(
			checker = checker.id(),
			logger = logger.name(),
			default_severity = config.default_severity.as_str(),
			"checker created"
		);
		entries.push(Arc::new(Entry {
			logger,
			state: Mutex::new(EntryState {
				default_severity: config.default_severity,
				stat: CheckerStat::ZERO,
			}),
		}));
		checker
	}

	pub(crate) fn entry(&self, checker: Checker) -> Result<Arc<Entry>> {
		if checker.is_null() {
			return Err(CheckerError::NullChecker);
		}
		self.entries
			.read()
			.get(checker.index())
			.cloned()
			.ok_or(CheckerError::UnknownChecker { id: checker.id() })
	}

	/// The logger the checker writes to, shared with any other holders.
	pub fn get_logger(&self, checker: Checker) -> Result<Arc<Logger>> {
		Ok(self.entry(checker)?.logger.clone())
	}

	/// Severity used by failing checks without an explicit level.
	pub fn get_default_log_level(&self, checker: Checker) -> Result<Severity> {
		Ok(self.entry(checker)?.state.lock().default_severity)
	}

	/// Changes the severity used by later failing checks without an explicit level.
	pub fn set_default_log_level(&self, checker: Checker, severity: Severity) -> Result<()> {
		self.entry(checker)?.state.lock().default_severity = severity;
		Ok(())
	}

	/// Consistent snapshot of the checker's counters.
	pub fn get_checker_stat(&self, checker: Checker) -> Result<CheckerStat> {
		Ok(self.entry(checker)?.state.lock().stat)
	}

	/// Zeroes the checker's counters. Logger and default severity are kept.
	pub fn reset_checker_stat(&self, checker: Checker) -> Result<()> {
		self.entry(checker)?.state.lock().stat = CheckerStat::ZERO;
		debug!(checker = checker.id(), "checker stat reset");
		Ok(())
	}

	/// Whether a passing check's message would reach the checker's log sink.
	///
	/// Lets callers skip building a message that would be discarded.
	pub fn is_passed_visible(&self, checker: Checker) -> Result<bool> {
		Ok(self.entry(checker)?.logger.is_visible(Severity::Pass))
	}

	/// All checkers, in creation order.
	pub fn checkers(&self) -> Vec<Checker> {
		let len = self.entries.read().len();
		// `new_checker` keeps len below u32::MAX.
		(0..len as u32).map(Checker::from_index).collect()
	}

	/// Number of checkers created so far.
	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	/// Returns true if no checker has been created yet.
	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	/// Sum of every checker's statistics.
	pub fn total_stat(&self) -> CheckerStat {
		self.entries
			.read()
			.iter()
			.map(|entry| entry.state.lock().stat)
			.sum()
	}

	/// Zeroes the counters of every checker.
	pub fn reset_all_stats(&self) {
		let entries = self.entries.read();
		for entry in entries.iter() {
			entry.state.lock().stat = CheckerStat::ZERO;
		}
		debug!(checkers = entries.len(), "all checker stats reset");
	}

	/// Per-checker statistics plus the total.
	pub fn report(&self) -> StatReport {
		let checkers: Vec<_> = self
			.entries
			.read()
			.iter()
			.enumerate()
			.map(|(id, entry)| {
				let state = entry.state.lock();
				CheckerReport {
					id: id as u32,
					logger: entry.logger.name().to_string(),
					default_severity: state.default_severity,
					stat: state.stat,
				}
			})
			.collect();
		let total = checkers.iter().map(|c| c.stat).sum();
		StatReport { checkers, total }
	}
}

impl Default for CheckerStore {
	fn default() -> Self {
		Self::new(Arc::new(LoggerRegistry::tracing()))
	}
}

impl core::fmt::Debug for CheckerStore {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("CheckerStore")
			.field("checkers", &self.len())
			.field("loggers", &self.loggers)
			.finish()
	}
}
