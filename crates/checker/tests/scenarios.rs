//! End-to-end checker scenarios against an in-memory log sink.

#![cfg(feature = "recording")]

use std::sync::Arc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use verdict_checker::{
	CheckerConfig, CheckerStat, CheckerStore, FailingCheck, Location, Logger, PassingCheck,
	Severity,
};
use verdict_log::{LoggerRegistry, MemorySink};

fn store() -> (CheckerStore, Arc<MemorySink>) {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
	let sink = Arc::new(MemorySink::new());
	(
		CheckerStore::new(Arc::new(LoggerRegistry::new(sink.clone()))),
		sink,
	)
}

#[test]
fn three_passes_two_failures() {
	let (store, _) = store();
	let c1 = store.new_checker(CheckerConfig::default().default_severity(Severity::Error));

	for _ in 0..3 {
		store.passing_check(c1, PassingCheck::default()).unwrap();
	}
	for _ in 0..2 {
		store.failing_check(c1, FailingCheck::new("bad")).unwrap();
	}

	assert_eq!(store.get_checker_stat(c1).unwrap(), CheckerStat::new(5, 2, 3));
}

#[test]
fn explicit_level_overrides_default() {
	let (store, sink) = store();
	let c2 = store.new_checker(CheckerConfig::default());

	store
		.failing_check(c2, FailingCheck::new("x").level(Severity::Warning))
		.unwrap();

	let entry = sink.last().unwrap();
	assert_eq!(entry.severity, Severity::Warning);
	assert_eq!(entry.message, "x");
}

#[test]
fn shared_logger_receives_both_records() {
	let (store, sink) = store();
	let shared = store.loggers().get_or_create("bus");
	shared.set_threshold(Severity::Pass);

	let a = store.new_checker(shared.clone());
	let b = store.new_checker(CheckerConfig::with_logger(shared.clone()));
	store.passing_check(a, PassingCheck::new("a ok")).unwrap();
	store.passing_check(b, PassingCheck::new("b ok")).unwrap();

	assert_eq!(store.get_checker_stat(a).unwrap(), CheckerStat::new(1, 0, 1));
	assert_eq!(store.get_checker_stat(b).unwrap(), CheckerStat::new(1, 0, 1));
	assert_eq!(shared.log_count(Severity::Pass), 2);

	let messages: Vec<_> = sink.records().into_iter().map(|e| e.message).collect();
	assert_eq!(messages, ["a ok", "b ok"]);
}

#[test]
fn one_logger_call_per_passing_check() {
	let (store, _) = store();
	let logger: Arc<Logger> = store.loggers().get_or_create("uart");
	let c = store.new_checker(logger.clone());

	store.passing_check(c, PassingCheck::default()).unwrap();
	store.passing_check(c, PassingCheck::new("hidden")).unwrap();
	logger.set_threshold(Severity::Pass);
	store.passing_check(c, PassingCheck::new("shown")).unwrap();

	assert_eq!(logger.log_count(Severity::Pass), 3);
	assert_eq!(logger.total_log_count(), 3);
}

#[test]
fn stats_since_checkpoint() {
	let (store, _) = store();
	let c = store.new_checker(CheckerConfig::default());
	store.passing_check(c, PassingCheck::default()).unwrap();
	let checkpoint = store.get_checker_stat(c).unwrap();

	store.failing_check(c, FailingCheck::new("late")).unwrap();
	store.passing_check(c, PassingCheck::default()).unwrap();

	let delta = store.get_checker_stat(c).unwrap() - checkpoint;
	assert_eq!(delta, CheckerStat::new(2, 1, 1));
}

#[test]
fn location_is_captured_at_call_site() {
	let (store, sink) = store();
	let c = store.new_checker(CheckerConfig::default());

	let line = line!() + 1;
	store.failing_check(c, FailingCheck::new("here").here()).unwrap();

	let loc: Location = sink.last().unwrap().location.unwrap();
	assert_eq!(loc.line, line);
	assert!(loc.file.ends_with("scenarios.rs"));
}

#[test]
fn global_store_is_shared() {
	let before = CheckerStore::global().len();
	let c = CheckerStore::global().new_checker("global");
	assert!(c.id() as usize >= before);
	assert!(std::ptr::eq(CheckerStore::global(), CheckerStore::global()));
	assert_eq!(
		CheckerStore::global().get_checker_stat(c).unwrap(),
		CheckerStat::ZERO
	);
}

proptest! {
	#[test]
	fn counters_stay_consistent(outcomes in proptest::collection::vec(any::<bool>(), 0..64)) {
		let (store, _) = store();
		let c = store.new_checker(CheckerConfig::default());
		let mut expected = CheckerStat::ZERO;

		for passed in outcomes {
			if passed {
				store.passing_check(c, PassingCheck::default()).unwrap();
				expected.checks += 1;
				expected.passed += 1;
			} else {
				store.failing_check(c, FailingCheck::new("f")).unwrap();
				expected.checks += 1;
				expected.failed += 1;
			}
			let stat = store.get_checker_stat(c).unwrap();
			prop_assert!(stat.is_consistent());
			prop_assert_eq!(stat, expected);
		}
	}

	#[test]
	fn identities_are_distinct_and_ordered(n in 1usize..32) {
		let (store, _) = store();
		let ids: Vec<u32> = (0..n)
			.map(|_| store.new_checker(CheckerConfig::default()).id())
			.collect();
		let expected: Vec<u32> = (0..n as u32).collect();
		prop_assert_eq!(ids, expected);
	}
}
