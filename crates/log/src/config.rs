//! TOML configuration for logger visibility.
//!
//! ```toml
//! threshold = "info"
//! capacity = 500
//!
//! [loggers.uart]
//! threshold = "pass"
//! hidden = ["warning"]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::{Severity, Visibility};

/// Logger configuration for a whole registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
	/// Threshold applied to loggers without a section of their own.
	#[serde(default)]
	pub threshold: Option<Severity>,
	/// Records retained by a [`MemorySink`](crate::MemorySink) built from this config.
	#[serde(default)]
	pub capacity: Option<usize>,
	/// Per-logger overrides keyed by logger name.
	#[serde(default)]
	pub loggers: BTreeMap<String, LoggerConfig>,
}

/// Visibility overrides for one logger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
	#[serde(default)]
	pub threshold: Option<Severity>,
	/// Severities hidden regardless of the threshold.
	#[serde(default)]
	pub hidden: Vec<Severity>,
}

impl LogConfig {
	/// Parses a configuration from TOML text.
	pub fn from_toml(text: &str) -> Result<Self> {
		Ok(toml::from_str(text)?)
	}

	/// Visibility for loggers without their own section.
	pub fn base_visibility(&self) -> Visibility {
		self.threshold
			.map(Visibility::at_least)
			.unwrap_or_default()
	}

	/// Visibility for the logger called `name`.
	pub fn visibility_for(&self, name: &str) -> Visibility {
		let base = self.base_visibility();
		match self.loggers.get(name) {
			Some(cfg) => cfg.apply(base),
			None => base,
		}
	}
}

impl LoggerConfig {
	/// Applies these overrides on top of `base`.
	pub fn apply(&self, mut base: Visibility) -> Visibility {
		if let Some(threshold) = self.threshold {
			base.set_threshold(threshold);
		}
		for &severity in &self.hidden {
			base.hide(severity);
		}
		base
	}
}
