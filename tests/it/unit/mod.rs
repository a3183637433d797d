//! Unit tests against the public API.

mod adapter_tests;
mod perf_tests;
mod snapshot_tests;
