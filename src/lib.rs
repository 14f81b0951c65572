//! # wald-statistics
//!
//! Two-sided Wald hypothesis testing for a single scalar parameter whose point estimator is
//! asymptotically normal.
//!
//! The crate is organised around the [`Sample`](testing::sample::Sample) trait: anything that can
//! report a point estimate and the variance of that estimate's sampling distribution can be fed
//! into a [`WaldTest`](testing::inference::wald::WaldTest), which produces the test statistic,
//! a confidence interval, a power estimate, a p-value and the reject/accept decision.
//!
//! ## Core Features
//!
//! - **Samples**: Bernoulli proportions, paired (difference) comparisons and raw
//!   `(estimate, variance)` pairs
//! - **Critical Values**: two-sided standard normal quantiles with tabulated common levels
//! - **Wald Test**: statistic, confidence interval, power, p-value and decision in one pass
//! - **Batch Testing**: parallel evaluation over many samples with multiple testing correction
//!
//! ## Quick Start
//!
//! ```rust
//! use wald_statistics::testing::inference::wald::WaldTest;
//! use wald_statistics::testing::sample::BernoulliSample;
//!
//! let clicks = BernoulliSample::new(75, 100);
//! let result = WaldTest::new(0.05).with_null(0.5).test(&clicks);
//! assert!(result.reject_null);
//! ```
//!
//! Invalid input never panics: malformed counts or negative variances surface as NaN in the
//! result and `reject_null` is `false`.
//!
//! ## Module Organization
//!
//! - **[`testing`]**: Samples, the Wald test, batch evaluation and multiple testing correction

pub mod testing;
