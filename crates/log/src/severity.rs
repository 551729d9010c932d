//! Ordered log severities.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Log severity levels, ordered from least to most severe.
///
/// [`Severity::Pass`] is the class used for passing checks. It sits below
/// [`Severity::Info`] so that the default visibility threshold hides passing
/// checks until a caller asks for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
	/// Verbose diagnostic information.
	Trace,
	/// Debugging information for developers.
	Debug,
	/// A check that passed.
	Pass,
	/// General informational messages.
	Info,
	/// A condition worth attention that does not fail the run.
	#[serde(alias = "warn")]
	Warning,
	/// A failed check.
	Error,
	/// An unrecoverable failure.
	Failure,
}

impl Severity {
	/// All severities in ascending order.
	pub const ALL: [Severity; 7] = [
		Severity::Trace,
		Severity::Debug,
		Severity::Pass,
		Severity::Info,
		Severity::Warning,
		Severity::Error,
		Severity::Failure,
	];

	/// Number of distinct severities.
	pub const COUNT: usize = Self::ALL.len();

	/// Returns the lower case name of the severity.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Trace => "trace",
			Self::Debug => "debug",
			Self::Pass => "pass",
			Self::Info => "info",
			Self::Warning => "warning",
			Self::Error => "error",
			Self::Failure => "failure",
		}
	}

	/// Dense index in `0..Severity::COUNT`, usable for per-severity tables.
	pub const fn index(self) -> usize {
		self as usize
	}
}

impl core::fmt::Display for Severity {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Severity {
	type Err = LogError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"trace" => Ok(Self::Trace),
			"debug" => Ok(Self::Debug),
			"pass" => Ok(Self::Pass),
			"info" => Ok(Self::Info),
			"warning" | "warn" => Ok(Self::Warning),
			"error" => Ok(Self::Error),
			"failure" => Ok(Self::Failure),
			_ => Err(LogError::UnknownSeverity(s.to_string())),
		}
	}
}
