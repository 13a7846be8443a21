//! Descriptive statistics for the analysis boundary.
//!
//! The only inferential piece the report consumes is a Pearson
//! correlation with a two-sided significance check, used over the
//! per-customer (order_count, total_spend) pair set.

use serde::Serialize;

use crate::error::{Error, Result};

/// Pearson correlation with its significance test.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationResult {
    /// Correlation coefficient r
    pub r: f64,
    /// t-statistic of the test against r = 0
    pub statistic: f64,
    /// Two-sided p-value (normal approximation)
    pub pvalue: f64,
    /// Whether significant at the 5% level
    pub significant: bool,
    /// Degrees of freedom (n - 2)
    pub df: usize,
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Pearson correlation coefficient between two equal-length samples,
/// with a t-test against the null hypothesis of zero correlation.
///
/// Requires at least three pairs and non-zero variance on both sides.
/// The p-value uses the standard normal approximation to the t
/// distribution, which is adequate at the sample sizes this report sees.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<CorrelationResult> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }
    let n = x.len();
    if n < 3 {
        return Err(Error::InsufficientData(format!(
            "correlation needs at least 3 pairs, got {}",
            n
        )));
    }

    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return Err(Error::InsufficientData(
            "correlation undefined for a zero-variance sample".to_string(),
        ));
    }

    let r = cov / (var_x.sqrt() * var_y.sqrt());
    let df = n - 2;

    // A perfectly linear sample makes the t denominator vanish.
    let (statistic, pvalue) = if (1.0 - r * r) <= f64::EPSILON {
        (f64::INFINITY.copysign(r), 0.0)
    } else {
        let t = r * (df as f64 / (1.0 - r * r)).sqrt();
        (t, two_sided_pvalue(t))
    };

    Ok(CorrelationResult {
        r,
        statistic,
        pvalue,
        significant: pvalue < 0.05,
        df,
    })
}

fn two_sided_pvalue(t: f64) -> f64 {
    2.0 * (1.0 - standard_normal_cdf(t.abs()))
}

/// Standard normal CDF via the Abramowitz & Stegun 7.1.26 erf
/// approximation (absolute error below 1.5e-7).
fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))
}

fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();
    sign * y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_perfect_positive_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        let result = pearson(&x, &y).unwrap();
        assert!((result.r - 1.0).abs() < 1e-12);
        assert_eq!(result.pvalue, 0.0);
        assert!(result.significant);
    }

    #[test]
    fn test_perfect_negative_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [8.0, 6.0, 4.0, 2.0];
        let result = pearson(&x, &y).unwrap();
        assert!((result.r + 1.0).abs() < 1e-12);
        assert!(result.significant);
    }

    #[test]
    fn test_strong_correlation_is_significant() {
        let x: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v + (v % 2.0)).collect();
        let result = pearson(&x, &y).unwrap();
        assert!(result.r > 0.99);
        assert!(result.pvalue < 0.01);
        assert!(result.significant);
    }

    #[test]
    fn test_too_few_pairs_rejected() {
        assert!(pearson(&[1.0, 2.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_zero_variance_rejected() {
        assert!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert!(pearson(&[1.0, 2.0, 3.0], &[1.0, 2.0]).is_err());
    }
}
