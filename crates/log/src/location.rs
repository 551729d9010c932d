//! Source locations for log records.

/// Source location attached to a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
	/// Source file name.
	pub file: &'static str,
	/// One-based line number.
	pub line: u32,
}

impl Location {
	/// Creates a location from a file name and line number.
	pub const fn new(file: &'static str, line: u32) -> Self {
		Self { file, line }
	}

	/// Returns the location of the caller.
	///
	/// Propagates through functions annotated with `#[track_caller]`, so an
	/// assertion helper reports the line of the assertion, not its own.
	#[track_caller]
	pub fn caller() -> Self {
		let loc = std::panic::Location::caller();
		Self::new(loc.file(), loc.line())
	}
}

impl core::fmt::Display for Location {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "{}:{}", self.file, self.line)
	}
}
