//! pixgen-test - Regression test framework for pixgen
//!
//! Each `tests/*_reg.rs` file drives one [`RegParams`] through a series of
//! numbered comparisons and asserts on [`RegParams::cleanup`] at the end.
//! Failures are collected rather than panicking on the first one, so a
//! single run reports every mismatch.
//!
//! # Usage
//!
//! ```ignore
//! use pixgen_test::RegParams;
//!
//! let mut rp = RegParams::new("line");
//! rp.compare_values(6.0, pixels.len() as f64, 0.0);
//! rp.compare_pta(&[(0, 0), (1, 0)], &pixels);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to log every compared pixel list

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
