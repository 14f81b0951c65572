//! Estimation samples.
//!
//! A Wald test only needs two numbers from the data: the point estimate of the parameter and the
//! variance of that estimate's sampling distribution. The [`Sample`] trait captures exactly that,
//! and the concrete samples in this module compute them from their own data.

mod bernoulli;
mod paired;

pub use bernoulli::BernoulliSample;
pub use paired::PairedSample;

/// A sample drawn from some distribution with an unknown scalar parameter.
pub trait Sample {
    /// Maximum likelihood estimate of the parameter, evaluated over the sample data.
    fn estimator(&self) -> f64;

    /// Variance of the estimator's sampling distribution.
    fn variance(&self) -> f64;
}

impl<S: Sample + ?Sized> Sample for &S {
    fn estimator(&self) -> f64 {
        (**self).estimator()
    }

    fn variance(&self) -> f64 {
        (**self).variance()
    }
}

impl<S: Sample + ?Sized> Sample for Box<S> {
    fn estimator(&self) -> f64 {
        (**self).estimator()
    }

    fn variance(&self) -> f64 {
        (**self).variance()
    }
}

/// A precomputed `(estimate, variance)` pair.
///
/// Nothing is validated; NaN and infinite values are returned as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSample {
    estimate: f64,
    variance: f64,
}

impl RawSample {
    pub fn new(estimate: f64, variance: f64) -> Self {
        RawSample { estimate, variance }
    }

    /// Snapshot the current estimate and variance of any sample.
    pub fn freeze<S: Sample + ?Sized>(sample: &S) -> Self {
        RawSample::new(sample.estimator(), sample.variance())
    }
}

impl Sample for RawSample {
    fn estimator(&self) -> f64 {
        self.estimate
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}

/// Standard error of a sample, the standard deviation of the estimator's distribution.
///
/// The variance is itself an estimate, so this is too. Negative or NaN variances yield NaN.
pub fn standard_error<S: Sample + ?Sized>(sample: &S) -> f64 {
    sample.variance().sqrt()
}
