//! Recording of check outcomes.
//!
//! Counters are updated before the logger is consulted, so statistics never
//! depend on logger visibility. Each recorded check makes exactly one logger
//! call.
//!
//! Building without the `recording` feature turns both operations into no-ops.

#[cfg(feature = "recording")]
use tracing::trace;
use verdict_log::{Location, Severity};

use crate::error::Result;
use crate::{Checker, CheckerStore};

/// A passing check to record.
///
/// `PassingCheck::default()` is the minimal form: an empty record with no
/// location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassingCheck<'a> {
	pub message: &'a str,
	pub location: Option<Location>,
}

impl<'a> PassingCheck<'a> {
	/// Full form carrying `message`, shown only when passes are visible.
	pub const fn new(message: &'a str) -> Self {
		Self {
			message,
			location: None,
		}
	}

	/// Attaches a source location.
	pub const fn at(mut self, location: Location) -> Self {
		self.location = Some(location);
		self
	}

	/// Attaches the caller's source location.
	#[track_caller]
	pub fn here(self) -> Self {
		self.at(Location::caller())
	}
}

/// A failing check to record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailingCheck<'a> {
	pub message: &'a str,
	/// Explicit severity; `None` uses the checker's default at call time.
	pub level: Option<Severity>,
	pub location: Option<Location>,
}

impl<'a> FailingCheck<'a> {
	/// Failure carrying `message`, logged at the checker's default severity.
	pub const fn new(message: &'a str) -> Self {
		Self {
			message,
			level: None,
			location: None,
		}
	}

	/// Logs at `level` instead of the checker's default severity.
	pub const fn level(mut self, level: Severity) -> Self {
		self.level = Some(level);
		self
	}

	/// Attaches a source location.
	pub const fn at(mut self, location: Location) -> Self {
		self.location = Some(location);
		self
	}

	/// Attaches the caller's source location.
	#[track_caller]
	pub fn here(self) -> Self {
		self.at(Location::caller())
	}
}

impl CheckerStore {
	/// Records a passing check.
	///
	/// Increments `checks` and `passed`, then logs at [`Severity::Pass`]: the
	/// message and location if passes are visible, an empty record otherwise.
	#[cfg(feature = "recording")]
	pub fn passing_check(&self, checker: Checker, check: PassingCheck<'_>) -> Result<()> {
		let entry = self.entry(checker)?;
		entry.state.lock().stat.record_pass();
		trace!(checker = checker.id(), "passing check");

		entry
			.logger
			.log_with(Severity::Pass, check.location, |visible| {
				if visible { check.message } else { "" }
			});
		Ok(())
	}

	/// Records a failing check.
	///
	/// Increments `checks` and `failed`, then logs the message at the explicit
	/// level, or at the checker's current default severity. Failures are
	/// always passed to the logger.
	#[cfg(feature = "recording")]
	pub fn failing_check(&self, checker: Checker, check: FailingCheck<'_>) -> Result<()> {
		let entry = self.entry(checker)?;
		let severity = {
			let mut state = entry.state.lock();
			state.stat.record_fail();
			check.level.unwrap_or(state.default_severity)
		};
		trace!(checker = checker.id(), severity = severity.as_str(), "failing check");

		entry.logger.log(check.message, severity, check.location);
		Ok(())
	}

	#[cfg(not(feature = "recording"))]
	#[inline(always)]
	pub fn passing_check(&self, _checker: Checker, _check: PassingCheck<'_>) -> Result<()> {
		Ok(())
	}

	#[cfg(not(feature = "recording"))]
	#[inline(always)]
	pub fn failing_check(&self, _checker: Checker, _check: FailingCheck<'_>) -> Result<()> {
		Ok(())
	}

	/// Records `passed` as a passing or failing check.
	///
	/// `message` is built only for failures, or for passes when passing
	/// messages are visible.
	pub fn check<M>(&self, checker: Checker, passed: bool, message: M) -> Result<()>
	where
		M: FnOnce() -> String,
	{
		if passed {
			if self.is_passed_visible(checker)? {
				let message = message();
				self.passing_check(checker, PassingCheck::new(&message))
			} else {
				self.passing_check(checker, PassingCheck::default())
			}
		} else {
			let message = message();
			self.failing_check(checker, FailingCheck::new(&message))
		}
	}
}
