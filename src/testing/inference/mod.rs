use crate::testing::correction::correct;
use crate::testing::inference::wald::WaldTest;
use crate::testing::sample::Sample;
use crate::testing::{CorrectionMethod, MultipleWaldResults, WaldResult};
use rayon::prelude::*;
use tracing::debug;

pub mod wald;

/// Wald testing over many samples at once, e.g. one comparison per campaign or per variant.
pub trait BatchWaldTests {
    /// Test every sample with the same test, returning results in input order.
    fn wald_tests(&self, test: &WaldTest) -> Vec<WaldResult>;

    /// Test every sample and adjust the p-values for multiple comparisons.
    ///
    /// Fails for an empty batch or when any p-value is undefined, which happens when one of the
    /// samples is invalid.
    fn wald_tests_corrected(
        &self,
        test: &WaldTest,
        method: CorrectionMethod,
    ) -> anyhow::Result<MultipleWaldResults>;
}

impl<S> BatchWaldTests for [S]
where
    S: Sample + Sync,
{
    fn wald_tests(&self, test: &WaldTest) -> Vec<WaldResult> {
        debug!(
            samples = self.len(),
            size = test.size(),
            null = test.null(),
            "running batch Wald tests"
        );
        self.par_iter().map(|sample| test.test(sample)).collect()
    }

    fn wald_tests_corrected(
        &self,
        test: &WaldTest,
        method: CorrectionMethod,
    ) -> anyhow::Result<MultipleWaldResults> {
        let results = MultipleWaldResults::new(self.wald_tests(test));
        let adjusted_p_values = correct(&results.p_values, method)?;

        let result = results.with_adjusted_p_values(adjusted_p_values, method);
        debug!(
            ?method,
            significant = result.num_significant(test.size()),
            "applied multiple testing correction"
        );
        Ok(result)
    }
}
