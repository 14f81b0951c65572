//! Multiple testing correction for batches of Wald tests.
//!
//! When many comparisons are tested at once, some will reject by chance alone. The procedures
//! here adjust raw p-values so that thresholding the adjusted values controls either the
//! family-wise error rate (Bonferroni, Holm, Hochberg) or the false discovery rate
//! (Benjamini-Hochberg, Benjamini-Yekutieli). Adjusted values are returned in input order.

use crate::testing::CorrectionMethod;
use anyhow::{Result, anyhow};
use tracing::trace;

/// Adjust p-values with the given procedure.
pub fn correct(p_values: &[f64], method: CorrectionMethod) -> Result<Vec<f64>> {
    trace!(?method, tests = p_values.len(), "adjusting p-values");
    match method {
        CorrectionMethod::Bonferroni => bonferroni_correction(p_values),
        CorrectionMethod::Holm => holm_bonferroni_correction(p_values),
        CorrectionMethod::Hochberg => hochberg_correction(p_values),
        CorrectionMethod::BenjaminiHochberg => benjamini_hochberg_correction(p_values),
        CorrectionMethod::BenjaminiYekutieli => benjamini_yekutieli_correction(p_values),
    }
}

fn validate(p_values: &[f64]) -> Result<()> {
    if p_values.is_empty() {
        return Err(anyhow!("Empty p-value array"));
    }
    for (i, &p) in p_values.iter().enumerate() {
        if !(0.0..=1.0).contains(&p) {
            return Err(anyhow!("Invalid p-value at index {}: {}", i, p));
        }
    }
    Ok(())
}

/// Indices of `p_values` in ascending order of p-value. Inputs are validated, so never NaN.
fn ascending_order(p_values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..p_values.len()).collect();
    order.sort_by(|&a, &b| p_values[a].total_cmp(&p_values[b]));
    order
}

/// Step-up adjustment shared by Hochberg and the FDR procedures.
///
/// `factor(rank)` scales the p-value at 1-based `rank`; a running minimum is taken from the
/// largest p-value downwards so the adjusted values stay monotone.
fn step_up(p_values: &[f64], factor: impl Fn(usize) -> f64) -> Vec<f64> {
    let order = ascending_order(p_values);
    let mut adjusted = vec![0.0; p_values.len()];
    let mut running_min: f64 = 1.0;

    for (i, &idx) in order.iter().enumerate().rev() {
        running_min = running_min.min((p_values[idx] * factor(i + 1)).min(1.0));
        adjusted[idx] = running_min;
    }
    adjusted
}

/// Bonferroni correction: multiply each p-value by the number of tests, capping at 1.
///
/// # Example
/// ```
/// use wald_statistics::testing::correction::bonferroni_correction;
///
/// let adjusted = bonferroni_correction(&[0.01, 0.03, 0.5]).unwrap();
/// assert_eq!(adjusted[2], 1.0);
/// ```
pub fn bonferroni_correction(p_values: &[f64]) -> Result<Vec<f64>> {
    validate(p_values)?;
    let m = p_values.len() as f64;
    Ok(p_values.iter().map(|&p| (p * m).min(1.0)).collect())
}

/// Holm's step-down procedure. Controls the family-wise error rate and is uniformly more
/// powerful than Bonferroni.
pub fn holm_bonferroni_correction(p_values: &[f64]) -> Result<Vec<f64>> {
    validate(p_values)?;
    let m = p_values.len();
    let order = ascending_order(p_values);
    let mut adjusted = vec![0.0; m];
    let mut running_max: f64 = 0.0;

    for (i, &idx) in order.iter().enumerate() {
        running_max = running_max.max((p_values[idx] * (m - i) as f64).min(1.0));
        adjusted[idx] = running_max;
    }
    Ok(adjusted)
}

/// Hochberg's step-up procedure. Controls the family-wise error rate for independent tests.
pub fn hochberg_correction(p_values: &[f64]) -> Result<Vec<f64>> {
    validate(p_values)?;
    let m = p_values.len();
    Ok(step_up(p_values, |rank| (m - rank + 1) as f64))
}

/// Benjamini-Hochberg procedure, controlling the false discovery rate for independent or
/// positively dependent tests.
///
/// # Example
/// ```
/// use wald_statistics::testing::correction::benjamini_hochberg_correction;
///
/// let adjusted = benjamini_hochberg_correction(&[0.01, 0.04, 0.03]).unwrap();
/// assert!((adjusted[0] - 0.03).abs() < 1e-12);
/// ```
pub fn benjamini_hochberg_correction(p_values: &[f64]) -> Result<Vec<f64>> {
    validate(p_values)?;
    let m = p_values.len() as f64;
    Ok(step_up(p_values, |rank| m / rank as f64))
}

/// Benjamini-Yekutieli procedure, valid under arbitrary dependence between the tests.
pub fn benjamini_yekutieli_correction(p_values: &[f64]) -> Result<Vec<f64>> {
    validate(p_values)?;
    let m = p_values.len() as f64;
    let c_m: f64 = (1..=p_values.len()).map(|k| 1.0 / k as f64).sum();
    Ok(step_up(p_values, |rank| c_m * m / rank as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_all_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "Vectors have different lengths");
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert_relative_eq!(*a, *e, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_bonferroni() {
        let adjusted = bonferroni_correction(&[0.01, 0.02, 0.03, 0.1, 0.2]).unwrap();
        assert_all_close(&adjusted, &[0.05, 0.1, 0.15, 0.5, 1.0]);
    }

    #[test]
    fn test_holm() {
        let adjusted = holm_bonferroni_correction(&[0.01, 0.02, 0.03]).unwrap();
        assert_all_close(&adjusted, &[0.03, 0.04, 0.04]);

        // unordered input keeps its order
        let adjusted = holm_bonferroni_correction(&[0.03, 0.01, 0.02]).unwrap();
        assert_all_close(&adjusted, &[0.04, 0.03, 0.04]);
    }

    #[test]
    fn test_hochberg() {
        let adjusted = hochberg_correction(&[0.01, 0.02, 0.03]).unwrap();
        assert_all_close(&adjusted, &[0.03, 0.03, 0.03]);

        let adjusted = hochberg_correction(&[0.01, 0.04, 0.5]).unwrap();
        assert_all_close(&adjusted, &[0.03, 0.08, 0.5]);
    }

    #[test]
    fn test_benjamini_hochberg_unordered() {
        let adjusted = benjamini_hochberg_correction(&[0.05, 0.01, 0.1, 0.04, 0.02]).unwrap();
        assert_all_close(&adjusted, &[0.0625, 0.05, 0.1, 0.0625, 0.05]);
    }

    #[test]
    fn test_benjamini_hochberg_ties_and_ones() {
        let adjusted = benjamini_hochberg_correction(&[0.05, 0.05, 0.05]).unwrap();
        assert_all_close(&adjusted, &[0.05, 0.05, 0.05]);

        let adjusted = benjamini_hochberg_correction(&[0.1, 0.2, 1.0]).unwrap();
        assert_relative_eq!(adjusted[2], 1.0);
    }

    #[test]
    fn test_benjamini_yekutieli() {
        let adjusted = benjamini_yekutieli_correction(&[0.01, 0.02, 0.03]).unwrap();
        let c_3 = 1.0 + 1.0 / 2.0 + 1.0 / 3.0;
        assert_all_close(&adjusted, &[0.03 * c_3, 0.03 * c_3, 0.03 * c_3]);
    }

    #[test]
    fn test_correct_dispatch() {
        let p_values = [0.01, 0.02, 0.03];
        assert_eq!(
            correct(&p_values, CorrectionMethod::Bonferroni).unwrap(),
            bonferroni_correction(&p_values).unwrap()
        );
        assert_eq!(
            correct(&p_values, CorrectionMethod::BenjaminiHochberg).unwrap(),
            benjamini_hochberg_correction(&p_values).unwrap()
        );
    }

    #[test]
    fn test_invalid_inputs() {
        let result = benjamini_hochberg_correction(&[]);
        assert_eq!(result.unwrap_err().to_string(), "Empty p-value array");

        let result = holm_bonferroni_correction(&[0.01, -0.5, 0.03]);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Invalid p-value at index 1")
        );

        // NaN p-values come from invalid samples
        assert!(bonferroni_correction(&[0.01, f64::NAN]).is_err());
        assert!(hochberg_correction(&[1.5]).is_err());
        assert!(benjamini_yekutieli_correction(&[]).is_err());
    }
}
