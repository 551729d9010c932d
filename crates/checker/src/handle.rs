/// Opaque handle to a checker allocated by a [`CheckerStore`](crate::CheckerStore).
///
/// Handles are plain indices: copying one never copies checker state, and all
/// copies observe the same counters and default severity. A handle stays
/// valid for the lifetime of the store that allocated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Checker(u32);

impl Checker {
	/// The "no checker" marker. Every store operation rejects it.
	pub const NULL: Self = Self(u32::MAX);

	pub(crate) const fn from_index(index: u32) -> Self {
		Self(index)
	}

	/// Creation-order identity, starting at 0.
	pub const fn id(self) -> u32 {
		self.0
	}

	/// Returns true for [`Checker::NULL`].
	pub const fn is_null(self) -> bool {
		self.0 == Self::NULL.0
	}

	pub(crate) const fn index(self) -> usize {
		self.0 as usize
	}
}

impl Default for Checker {
	fn default() -> Self {
		Self::NULL
	}
}

impl core::fmt::Display for Checker {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		if self.is_null() {
			f.write_str("checker#null")
		} else {
			write!(f, "checker#{}", self.0)
		}
	}
}
