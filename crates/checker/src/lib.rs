//! Checker handles that accumulate pass/fail outcomes of a verification run.
//!
//! * [`CheckerStore`]: append-only registry of checkers and their field accessors
//! * [`Checker`]: opaque, copyable handle into a store
//! * [`PassingCheck`] / [`FailingCheck`]: outcomes fed to the store's recorder
//! * [`CheckerStat`]: counter snapshots with field-wise arithmetic
//! * [`StatReport`]: per-checker statistics for end-of-run reporting
//!
//! ```
//! use verdict_checker::{CheckerStat, CheckerStore, FailingCheck, PassingCheck};
//!
//! let store = CheckerStore::default();
//! let c = store.new_checker("uart");
//! store.passing_check(c, PassingCheck::default()).unwrap();
//! store.failing_check(c, FailingCheck::new("parity error")).unwrap();
//! assert_eq!(store.get_checker_stat(c), Ok(CheckerStat::new(2, 1, 1)));
//! ```

pub mod config;
pub mod error;
pub mod handle;
pub mod recorder;
pub mod report;
pub mod stat;
pub mod store;


pub use config::{CheckerConfig, DEFAULT_SEVERITY, LoggerSource};
pub use error::{CheckerError, Result};
pub use handle::Checker;
pub use recorder::{FailingCheck, PassingCheck};
pub use report::{CheckerReport, StatReport};
pub use stat::CheckerStat;
pub use store::CheckerStore;
pub use verdict_log::{Location, Logger, Severity};
