//! Regression test parameters and operations

use std::collections::BTreeSet;

use crate::error::{TestError, TestResult};
use pixgen_core::{Point, Pta};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results against expectations (default)
    #[default]
    Compare,
    /// Compare, and also log every pixel list that is compared
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the index of the current comparison, and every
/// failure seen so far.
pub struct RegParams {
    /// Name of the test (e.g., "line")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "circle")
    pub fn new(test_name: &str) -> Self {
        crate::init_tracing();
        let mode = RegTestMode::from_env();

        tracing::info!(test = %test_name, ?mode, "starting regression test");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        tracing::error!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Check a boolean condition
    ///
    /// # Returns
    ///
    /// The condition itself.
    pub fn compare_bool(&mut self, expected: bool, actual: bool) -> bool {
        self.index += 1;
        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: condition for index {} expected {}, got {}",
                self.test_name, self.index, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare a pixel list against an expected sequence, in order
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected `(x, y)` sequence
    /// * `actual` - Pixel list produced by a rasterizer
    ///
    /// # Returns
    ///
    /// `true` if both sequences are identical, `false` otherwise.
    pub fn compare_pta(&mut self, expected: &[(i32, i32)], actual: &Pta) -> bool {
        self.index += 1;
        if self.display() {
            tracing::info!(index = self.index, pixels = ?actual.to_points(), "pixel list");
        }

        if expected.len() != actual.len() {
            let msg = format!(
                "Failure in {}_reg: pixel list for index {} has {} points, expected {}",
                self.test_name,
                self.index,
                actual.len(),
                expected.len()
            );
            self.fail(msg);
            return false;
        }

        for (i, (&e, a)) in expected.iter().zip(actual.iter()).enumerate() {
            let e = Point::from(e);
            if e != a {
                let msg = format!(
                    "Failure in {}_reg: pixel list for index {} differs at position {}: \
                     expected {}, got {}",
                    self.test_name, self.index, i, e, a
                );
                self.fail(msg);
                return false;
            }
        }

        true
    }

    /// Compare two pixel lists as sets (order and multiplicity ignored)
    ///
    /// # Returns
    ///
    /// `true` if both lists cover the same pixels, `false` otherwise.
    pub fn compare_point_sets(&mut self, expected: &Pta, actual: &Pta) -> bool {
        self.index += 1;
        let e: BTreeSet<Point> = expected.iter().collect();
        let a: BTreeSet<Point> = actual.iter().collect();
        if e == a {
            return true;
        }

        let missing: Vec<&Point> = e.difference(&a).take(8).collect();
        let extra: Vec<&Point> = a.difference(&e).take(8).collect();
        let msg = format!(
            "Failure in {}_reg: point set for index {} differs\n\
             missing = {:?}\n\
             extra = {:?}",
            self.test_name, self.index, missing, extra
        );
        self.fail(msg);
        false
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            tracing::info!(test = %self.test_name, comparisons = self.index, "SUCCESS");
        } else {
            tracing::error!(test = %self.test_name, failures = self.failures.len(), "FAILURE");
        }
        self.success
    }

    /// Finish the test, turning recorded failures into an error
    ///
    /// # Errors
    ///
    /// Returns [`TestError::Failures`] if any comparison failed.
    pub fn into_result(self) -> TestResult<()> {
        match self.failures.first() {
            None => Ok(()),
            Some(first) => Err(TestError::Failures {
                test_name: self.test_name.clone(),
                count: self.failures.len(),
                first: first.clone(),
            }),
        }
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
