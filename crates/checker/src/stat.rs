//! Pass/fail statistics and their arithmetic.

use core::iter::Sum;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Snapshot of a checker's counters.
///
/// Snapshots taken from a store always satisfy `checks == failed + passed`.
/// Arithmetic is field-wise and unchecked: subtracting snapshots that do not
/// share a baseline may yield negative fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckerStat {
	/// Total checks recorded.
	pub checks: i64,
	/// Checks that failed.
	pub failed: i64,
	/// Checks that passed.
	pub passed: i64,
}

impl CheckerStat {
	pub const ZERO: Self = Self::new(0, 0, 0);

	pub const fn new(checks: i64, failed: i64, passed: i64) -> Self {
		Self {
			checks,
			failed,
			passed,
		}
	}

	/// Returns true when `checks == failed + passed`.
	pub const fn is_consistent(&self) -> bool {
		self.checks == self.failed + self.passed
	}

	pub(crate) fn record_pass(&mut self) {
		self.checks += 1;
		self.passed += 1;
	}

	pub(crate) fn record_fail(&mut self) {
		self.checks += 1;
		self.failed += 1;
	}
}

impl Add for CheckerStat {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self::new(
			self.checks + rhs.checks,
			self.failed + rhs.failed,
			self.passed + rhs.passed,
		)
	}
}

impl Sub for CheckerStat {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		Self::new(
			self.checks - rhs.checks,
			self.failed - rhs.failed,
			self.passed - rhs.passed,
		)
	}
}

impl AddAssign for CheckerStat {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl SubAssign for CheckerStat {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

impl Sum for CheckerStat {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, Add::add)
	}
}

impl<'a> Sum<&'a CheckerStat> for CheckerStat {
	fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.copied().sum()
	}
}

impl core::fmt::Display for CheckerStat {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(
			f,
			"checker_stat'(checks => {}, failed => {}, passed => {})",
			self.checks, self.failed, self.passed
		)
	}
}
