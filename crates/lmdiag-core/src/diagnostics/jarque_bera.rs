//! Jarque-Bera test for normality
//!
//! Checks whether a sample's skewness and excess kurtosis are consistent
//! with a normal distribution. Typically applied to fit residuals as a
//! numeric companion to the quantile-quantile comparison.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::errors::{LmError, LmResult};

/// Result of the Jarque-Bera normality test
#[derive(Debug, Clone)]
pub struct JarqueBeraResult {
    /// JB test statistic
    pub statistic: f64,
    /// p-value from chi-squared with 2 degrees of freedom
    pub p_value: f64,
    /// Sample skewness
    pub skewness: f64,
    /// Excess kurtosis
    pub kurtosis: f64,
    /// Number of observations used
    pub n: usize,
}

/// Run the Jarque-Bera test on a sample
///
/// Non-finite values are dropped first. Requires at least 3 usable
/// observations and non-zero variance.
pub fn jarque_bera(data: &[f64]) -> LmResult<JarqueBeraResult> {
    let clean: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
    let n = clean.len();
    if n < 3 {
        return Err(LmError::InsufficientData { needed: 3, actual: n });
    }

    let n_f = n as f64;
    let mean = clean.iter().sum::<f64>() / n_f;

    let mut m2 = 0.0;
    let mut m3 = 0.0;
    let mut m4 = 0.0;
    for &v in &clean {
        let d = v - mean;
        let d2 = d * d;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
    }
    m2 /= n_f;
    m3 /= n_f;
    m4 /= n_f;

    if m2 <= 0.0 {
        return Err(LmError::InvalidInput("sample has zero variance".into()));
    }

    let skewness = m3 / m2.powf(1.5);
    let kurtosis = m4 / (m2 * m2) - 3.0;

    // JB = n/6 · (S² + K²/4)
    let statistic = n_f / 6.0 * (skewness * skewness + kurtosis * kurtosis / 4.0);

    let chi2 = ChiSquared::new(2.0).unwrap();
    let p_value = 1.0 - chi2.cdf(statistic);

    Ok(JarqueBeraResult {
        statistic,
        p_value,
        skewness,
        kurtosis,
        n,
    })
}
