//! Standard normal distribution used by the Wald test.
//!
//! All CDF and inverse-CDF evaluations in the crate go through [`StandardNormal`], which wraps
//! `statrs`' [`Normal`] with mean 0 and standard deviation 1.

use statrs::distribution::{ContinuousCDF, Normal};
use std::sync::LazyLock;
use tracing::trace;

static STANDARD_NORMAL: LazyLock<StandardNormal> = LazyLock::new(|| StandardNormal {
    inner: Normal::new(0.0, 1.0).unwrap(),
});

/// The standard normal distribution N(0, 1).
#[derive(Debug, Clone, Copy)]
pub struct StandardNormal {
    inner: Normal,
}

/// Shared standard normal instance.
pub fn standard_normal() -> &'static StandardNormal {
    &STANDARD_NORMAL
}

impl StandardNormal {
    /// Φ(x). NaN input yields NaN.
    pub fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    /// Φ⁻¹(p) for `p` in `[0, 1]`, with `±∞` at the end points.
    ///
    /// Probabilities outside `[0, 1]` (including NaN) evaluate to NaN instead of panicking.
    pub fn inverse_cdf(&self, p: f64) -> f64 {
        if !(0.0..=1.0).contains(&p) {
            trace!(p, "probability outside [0, 1], inverse CDF undefined");
            return f64::NAN;
        }
        self.inner.inverse_cdf(p)
    }
}
