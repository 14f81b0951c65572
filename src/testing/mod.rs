pub mod correction;
pub mod distribution;
pub mod inference;
pub mod quantile;
pub mod sample;

/// Procedure used to adjust p-values across a batch of Wald tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectionMethod {
    Bonferroni,
    Holm,
    Hochberg,
    BenjaminiHochberg,
    BenjaminiYekutieli,
}

/// Outcome of a single two-sided Wald test.
///
/// Every quantity is computed against one frozen `(estimate, variance)` pair, so the fields are
/// mutually consistent even if the tested sample is not. Invalid samples are reported through
/// NaN fields rather than errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaldResult {
    /// The Wald statistic `(estimate - null) / standard_error`
    pub statistic: f64,
    /// Two-sided p-value of the statistic
    pub p_value: f64,
    /// Confidence interval for the parameter at `confidence_level`
    pub confidence_interval: (f64, f64),
    /// `1 - size` of the test that produced the result
    pub confidence_level: f64,
    /// Probability of rejecting the null if the true parameter equals the estimate
    pub power: f64,
    /// Whether the null hypothesis is rejected at the test size
    pub reject_null: bool,
    /// Point estimate the result was computed from
    pub estimate: f64,
    /// Standard error the result was computed from
    pub standard_error: f64,
}

impl WaldResult {
    /// Check if the result is statistically significant at the given threshold
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }

    /// Half-width of the confidence interval
    pub fn margin_of_error(&self) -> f64 {
        (self.confidence_interval.1 - self.confidence_interval.0) / 2.0
    }
}

/// Results of one Wald test applied to many samples, optionally with adjusted p-values.
///
/// # Example
/// ```
/// use wald_statistics::testing::inference::wald::WaldTest;
/// use wald_statistics::testing::sample::RawSample;
/// use wald_statistics::testing::{CorrectionMethod, MultipleWaldResults};
///
/// let test = WaldTest::new(0.05);
/// let results = MultipleWaldResults::new(vec![
///     test.test(&RawSample::new(4.0, 1.0)),
///     test.test(&RawSample::new(0.5, 1.0)),
/// ])
/// .with_adjusted_p_values(vec![1e-4, 1.0], CorrectionMethod::Bonferroni);
///
/// assert_eq!(results.significant_indices(0.05), vec![0]);
/// assert_eq!(results.correction, Some(CorrectionMethod::Bonferroni));
/// ```
#[derive(Debug, Clone)]
pub struct MultipleWaldResults {
    /// One result per tested sample, in input order
    pub results: Vec<WaldResult>,
    /// Raw (unadjusted) p-values
    pub p_values: Vec<f64>,
    /// Adjusted p-values (after multiple testing correction)
    pub adjusted_p_values: Option<Vec<f64>>,
    /// Procedure used to produce `adjusted_p_values`
    pub correction: Option<CorrectionMethod>,
}

impl MultipleWaldResults {
    pub fn new(results: Vec<WaldResult>) -> Self {
        let p_values = results.iter().map(|r| r.p_value).collect();
        MultipleWaldResults {
            results,
            p_values,
            adjusted_p_values: None,
            correction: None,
        }
    }

    /// Attach adjusted p-values and the procedure that produced them
    pub fn with_adjusted_p_values(
        mut self,
        adjusted_p_values: Vec<f64>,
        method: CorrectionMethod,
    ) -> Self {
        self.adjusted_p_values = Some(adjusted_p_values);
        self.correction = Some(method);
        self
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    fn ranking_p_values(&self) -> &[f64] {
        self.adjusted_p_values.as_deref().unwrap_or(&self.p_values)
    }

    /// Indices of comparisons significant at `alpha`, using adjusted p-values when present
    pub fn significant_indices(&self, alpha: f64) -> Vec<usize> {
        self.ranking_p_values()
            .iter()
            .enumerate()
            .filter_map(|(i, &p)| if p < alpha { Some(i) } else { None })
            .collect()
    }

    pub fn num_significant(&self, alpha: f64) -> usize {
        self.significant_indices(alpha).len()
    }

    /// Indices of the `n` smallest p-values; NaN p-values sort last.
    pub fn top_comparisons(&self, n: usize) -> Vec<usize> {
        let p_values = self.ranking_p_values();
        let mut indices: Vec<usize> = (0..p_values.len()).collect();
        indices.sort_by(|&a, &b| {
            let (pa, pb) = (p_values[a], p_values[b]);
            match (pa.is_nan(), pb.is_nan()) {
                (false, false) => pa.total_cmp(&pb),
                (a_nan, b_nan) => a_nan.cmp(&b_nan),
            }
        });
        indices.truncate(n);
        indices
    }
}
