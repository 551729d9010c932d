//! Error types for checker operations.

use thiserror::Error;

/// Errors returned by [`CheckerStore`](crate::CheckerStore) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckerError {
	/// The handle was [`Checker::NULL`](crate::Checker::NULL).
	#[error("operation on the null checker")]
	NullChecker,

	/// The handle was not allocated by this store.
	#[error("unknown checker #{id}")]
	UnknownChecker {
		/// Identity carried by the rejected handle.
		id: u32,
	},
}

/// Result type for checker operations.
pub type Result<T> = std::result::Result<T, CheckerError>;
