//! Statistics reports across all checkers of a store.

use serde::Serialize;
use verdict_log::Severity;

use crate::CheckerStat;

/// One checker's row in a [`StatReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckerReport {
	pub id: u32,
	/// Name of the checker's logger.
	pub logger: String,
	pub default_severity: Severity,
	pub stat: CheckerStat,
}

/// Statistics of every checker in creation order, plus their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatReport {
	pub checkers: Vec<CheckerReport>,
	pub total: CheckerStat,
}

impl StatReport {
	/// Renders the report as pretty-printed JSON.
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(self)
	}

	/// Returns true if any checker recorded a failure.
	pub fn has_failures(&self) -> bool {
		self.total.failed > 0
	}
}

impl core::fmt::Display for StatReport {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		for c in &self.checkers {
			writeln!(f, "checker#{} ({}): {}", c.id, c.logger, c.stat)?;
		}
		write!(f, "total: {}", self.total)
	}
}
