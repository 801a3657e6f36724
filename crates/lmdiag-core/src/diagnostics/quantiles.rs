//! Order statistics for residual assessment
//!
//! Normal-quantile pairing for Q-Q comparison and the five-number
//! summary printed by the reporter.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::errors::{LmError, LmResult};

/// One point of a normal quantile-quantile comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantilePair {
    /// Theoretical standard-normal quantile at plotting position (i - 0.5)/n
    pub theoretical: f64,
    /// The i-th smallest sample value
    pub sample: f64,
}

/// Pair sorted sample values with theoretical standard-normal quantiles
///
/// Sorts ascending and pairs the i-th order statistic (1-based) with
/// the normal quantile at probability (i - 0.5)/n. The caller judges
/// linearity of the resulting point set; nothing is decided here.
pub fn normal_quantile_pairs(values: &[f64]) -> Vec<QuantilePair> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let normal = Normal::new(0.0, 1.0).unwrap();
    let n_f = n as f64;
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, sample)| QuantilePair {
            theoretical: normal.inverse_cdf((i as f64 + 0.5) / n_f),
            sample,
        })
        .collect()
}

/// Five-number summary: minimum, quartiles, maximum
#[derive(Debug, Clone, Copy)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Five-number summary of a sample
///
/// Quartiles use linear interpolation between order statistics (R's
/// type-7 convention).
pub fn five_number_summary(values: &[f64]) -> LmResult<FiveNumberSummary> {
    if values.is_empty() {
        return Err(LmError::InvalidInput(
            "cannot summarize an empty sample".into(),
        ));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    Ok(FiveNumberSummary {
        min: sorted[0],
        q1: quantile_type7(&sorted, 0.25),
        median: quantile_type7(&sorted, 0.5),
        q3: quantile_type7(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

/// Interpolated quantile over pre-sorted data
fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}
