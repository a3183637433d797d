//! Single test binary entry point.
//!
//! All integration-level tests live in one binary to keep link time down.
//!
//! Structure:
//! - unit: single-component tests against the public API
//! - integration: multi-component interaction and simulation workflows

mod helpers;
mod integration;
mod unit;
