//! Performance instrumentation.
//!
//! Scoped RAII timers plus aggregated per-operation statistics for the
//! hot paths (simulation step, frame plan, hit testing, paint). Enable
//! the `profiling` feature for trace-level scope logging; without it the
//! macros compile to nothing beyond a slow-operation warning.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::trace;
use tracing::warn;

/// Frame budget at 60 FPS.
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Samples kept per operation for rolling statistics.
const STATS_SAMPLE_COUNT: usize = 100;

/// Profile a scope with the given name. Zero-cost when profiling is
/// disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// Profile the enclosing function.
#[macro_export]
macro_rules! profile_function {
    () => {
        $crate::profile_scope!(module_path!());
    };
}

pub use profile_function;
pub use profile_scope;

/// Rolling timing statistics for one named operation.
#[derive(Debug, Clone, Default)]
pub struct OperationStats {
    samples: VecDeque<f64>,
    pub count: u64,
    pub max_ms: f64,
    sum_ms: f64,
}

impl OperationStats {
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }
}

static STATS: Lazy<Mutex<HashMap<&'static str, OperationStats>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Record a sample for a named operation.
pub fn record_operation(name: &'static str, elapsed_ms: f64) {
    STATS.lock().entry(name).or_default().record(elapsed_ms);
}

/// Snapshot of one operation's statistics, or None if never recorded.
pub fn operation_stats(name: &str) -> Option<OperationStats> {
    STATS.lock().get(name).cloned()
}

/// Clear all collected statistics.
pub fn reset_stats() {
    STATS.lock().clear();
}

/// RAII timer recording into the global stats on drop; warns when the
/// elapsed time crosses the threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Low-threshold timer for hot-path scopes.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        record_operation(self.name, elapsed_ms);

        #[cfg(feature = "profiling")]
        if elapsed_ms > self.threshold_ms {
            trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);
        }

        #[cfg(not(feature = "profiling"))]
        if elapsed_ms > self.threshold_ms.max(TARGET_FRAME_MS) {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{elapsed_ms:.2}"),
                "Slow operation"
            );
        }
    }
}

/// Measure a closure, returning the result and elapsed milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}

/// Measure a closure and warn if it exceeds the threshold.
#[inline]
pub fn measure_and_log<T, F: FnOnce() -> T>(name: &str, threshold_ms: f64, f: F) -> T {
    let (result, elapsed_ms) = measure(f);
    if elapsed_ms > threshold_ms {
        warn!(
            operation = name,
            elapsed_ms = format!("{elapsed_ms:.2}"),
            "Slow operation"
        );
    }
    result
}
