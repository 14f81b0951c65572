use crate::testing::sample::Sample;
use num_traits::Zero;

/// An IID sample from a Bernoulli distribution with unknown success probability `p`, such as a
/// series of weighted coin flips or clickthrough data for a campaign.
///
/// A sample is valid when `trials > 0` and `0 <= successes <= trials`. Invalid counts are not
/// rejected; they make both the estimate and the variance NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BernoulliSample {
    pub successes: i64,
    pub trials: i64,
}

impl BernoulliSample {
    pub fn new(successes: i64, trials: i64) -> Self {
        BernoulliSample { successes, trials }
    }

    /// Build a sample from individual outcomes, counting every non-zero observation as a success.
    ///
    /// # Example
    /// ```
    /// use wald_statistics::testing::sample::BernoulliSample;
    ///
    /// let sample = BernoulliSample::from_observations(&[1u8, 0, 0, 1, 1]);
    /// assert_eq!(sample, BernoulliSample::new(3, 5));
    /// ```
    pub fn from_observations<T>(observations: &[T]) -> Self
    where
        T: Zero,
    {
        let successes = observations.iter().filter(|x| !x.is_zero()).count();
        // slice lengths never exceed isize::MAX, so saturation is unreachable in practice
        BernoulliSample::new(
            i64::try_from(successes).unwrap_or(i64::MAX),
            i64::try_from(observations.len()).unwrap_or(i64::MAX),
        )
    }

    pub fn is_valid(&self) -> bool {
        self.trials > 0 && self.successes >= 0 && self.successes <= self.trials
    }
}

impl Sample for BernoulliSample {
    /// If `X = X_1 + ... + X_n` with `X_i` iid Bernoulli(p), the MLE of `p` is `X / n`.
    fn estimator(&self) -> f64 {
        if !self.is_valid() {
            return f64::NAN;
        }
        self.successes as f64 / self.trials as f64
    }

    fn variance(&self) -> f64 {
        let p = self.estimator();
        if p.is_nan() {
            return f64::NAN;
        }
        p * (1.0 - p) / self.trials as f64
    }
}
