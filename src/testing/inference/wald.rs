//! The two-sided Wald test for a scalar parameter.
//!
//! The test assumes the estimator of the parameter `θ` is asymptotically normal, which holds for
//! Bernoulli trials with the maximum likelihood estimator among many others. It tests
//! `H0: θ = null` against `H1: θ != null` using the statistic `(θ̂ - null) / se(θ̂)`.

use crate::testing::WaldResult;
use crate::testing::distribution::standard_normal;
use crate::testing::quantile::normal_quantile;
use crate::testing::sample::{RawSample, Sample, standard_error};
use anyhow::anyhow;
use tracing::debug;

/// A Wald test of a given size. A test with size `α` has confidence level `1 - α`.
///
/// The critical value `z_{α/2}` is resolved once, when the test is built or its size changes, so
/// the test holds no mutable state and can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaldTest {
    size: f64,
    null: f64,
    critical_value: f64,
}

impl Default for WaldTest {
    fn default() -> Self {
        WaldTest::new(0.05)
    }
}

impl WaldTest {
    /// Create a test of the given size against a null value of 0.
    ///
    /// `size` is not validated; see [`normal_quantile`] for the critical value produced outside
    /// `(0, 1)`. Use [`WaldTest::checked`] to reject such sizes instead.
    pub fn new(size: f64) -> Self {
        let critical_value = normal_quantile(size);
        debug!(size, critical_value, "resolved Wald critical value");
        WaldTest {
            size,
            null: 0.0,
            critical_value,
        }
    }

    /// Create a test after checking that `size` lies in `(0, 1)` and `null` is finite.
    pub fn checked(size: f64, null: f64) -> anyhow::Result<Self> {
        if !(size > 0.0 && size < 1.0) {
            return Err(anyhow!("Test size must be in (0, 1), got {}", size));
        }
        if !null.is_finite() {
            return Err(anyhow!("Null value must be finite, got {}", null));
        }
        Ok(WaldTest::new(size).with_null(null))
    }

    /// Set the hypothesized parameter value.
    pub fn with_null(mut self, null: f64) -> Self {
        self.null = null;
        self
    }

    /// Change the size of the test, resolving the matching critical value.
    pub fn with_size(self, size: f64) -> Self {
        WaldTest::new(size).with_null(self.null)
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn null(&self) -> f64 {
        self.null
    }

    pub fn confidence_level(&self) -> f64 {
        1.0 - self.size
    }

    /// The critical value `z_{α/2}` of the test.
    pub fn critical_value(&self) -> f64 {
        self.critical_value
    }

    pub fn statistic<S: Sample + ?Sized>(&self, sample: &S) -> f64 {
        (sample.estimator() - self.null) / standard_error(sample)
    }

    pub fn p_value<S: Sample + ?Sized>(&self, sample: &S) -> f64 {
        2.0 * standard_normal().cdf(-self.statistic(sample).abs())
    }

    pub fn confidence_interval<S: Sample + ?Sized>(&self, sample: &S) -> (f64, f64) {
        let estimate = sample.estimator();
        let epsilon = standard_error(sample) * self.critical_value;
        (estimate - epsilon, estimate + epsilon)
    }

    /// Probability of correctly rejecting the null hypothesis, assuming the true parameter equals
    /// the sample's estimate.
    pub fn power<S: Sample + ?Sized>(&self, sample: &S) -> f64 {
        let normal = standard_normal();
        let z = self.critical_value;
        let x = (self.null - sample.estimator()) / standard_error(sample);
        1.0 - normal.cdf(x + z) + normal.cdf(x - z)
    }

    /// `|statistic| > z_{α/2}`; an undefined (NaN) statistic never rejects.
    pub fn reject_null<S: Sample + ?Sized>(&self, sample: &S) -> bool {
        self.statistic(sample).abs() > self.critical_value
    }

    /// Perform the test on a sample.
    ///
    /// The sample's estimate and variance are read exactly once and every quantity in the result
    /// is computed from that snapshot.
    ///
    /// # Example
    /// ```
    /// use wald_statistics::testing::inference::wald::WaldTest;
    /// use wald_statistics::testing::sample::RawSample;
    ///
    /// let result = WaldTest::new(0.05).test(&RawSample::new(1.0, 1.0));
    /// assert_eq!(result.statistic, 1.0);
    /// assert!(!result.reject_null);
    /// ```
    pub fn test<S: Sample + ?Sized>(&self, sample: &S) -> WaldResult {
        let frozen = RawSample::freeze(sample);
        WaldResult {
            statistic: self.statistic(&frozen),
            p_value: self.p_value(&frozen),
            confidence_interval: self.confidence_interval(&frozen),
            confidence_level: self.confidence_level(),
            power: self.power(&frozen),
            reject_null: self.reject_null(&frozen),
            estimate: frozen.estimator(),
            standard_error: standard_error(&frozen),
        }
    }
}
