//! Performance instrumentation tests.

use graphboard::perf::{
    OperationStats, ScopedTimer, measure, measure_and_log, operation_stats, reset_stats,
};

#[test]
fn operation_stats_track_count_and_max() {
    let mut stats = OperationStats::default();
    stats.record(1.0);
    stats.record(5.0);
    stats.record(3.0);
    assert_eq!(stats.count, 3);
    assert_eq!(stats.max_ms, 5.0);
    assert!((stats.average() - 3.0).abs() < 1e-9);
}

#[test]
fn scoped_timer_feeds_the_global_table() {
    reset_stats();
    for _ in 0..3 {
        let _t = ScopedTimer::new("timer_table_test", 1000.0);
    }
    let stats = operation_stats("timer_table_test").unwrap();
    assert_eq!(stats.count, 3);
    assert!(operation_stats("never_recorded").is_none());
}

#[test]
fn measure_helpers_pass_values_through() {
    let (value, elapsed) = measure(|| "done");
    assert_eq!(value, "done");
    assert!(elapsed >= 0.0);
    assert_eq!(measure_and_log("quick", 1000.0, || 7), 7);
}
