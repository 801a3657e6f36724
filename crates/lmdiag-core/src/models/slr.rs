//! Simple linear regression by ordinary least squares
//!
//! Closed-form fit for a single predictor: slope = Sxy / Sxx,
//! intercept = ȳ - slope·x̄. Two O(n) passes, no iteration. Inference
//! (standard errors, t and F statistics, intervals) comes from the
//! Student's t and Fisher-Snedecor distributions with n - 2 degrees of
//! freedom.

use crate::errors::{LmError, LmResult};
use crate::inference::{confidence_interval_t, pvalue_f, pvalue_t};
use crate::types::{Coefficient, FitResult, Sample, SlrOptions};

/// Fit a simple linear regression through paired samples
///
/// # Arguments
/// * `samples` - Paired (x, y) observations; rows with NaN or infinite
///   values are dropped before fitting
/// * `options` - Fitting options
///
/// # Returns
/// * `FitResult` with coefficients, fit statistics, and inference
pub fn fit(samples: &[Sample], options: &SlrOptions) -> LmResult<FitResult> {
    let clean: Vec<Sample> = samples.iter().copied().filter(Sample::is_finite).collect();
    if clean.is_empty() && !samples.is_empty() {
        return Err(LmError::NoValidData);
    }

    let n = clean.len();
    if n < 2 {
        return Err(LmError::InsufficientData { needed: 2, actual: n });
    }

    // The slope is undefined when the predictor never varies
    if clean.iter().all(|s| s.x == clean[0].x) {
        return Err(LmError::InsufficientDataMsg(
            "need at least 2 distinct x values to determine a slope".into(),
        ));
    }

    // A constant response has zero total sum of squares and leaves
    // R-squared undefined
    if clean.iter().all(|s| s.y == clean[0].y) {
        return Err(LmError::DegenerateResponse { n });
    }

    let n_f = n as f64;
    let x_mean = clean.iter().map(|s| s.x).sum::<f64>() / n_f;
    let y_mean = clean.iter().map(|s| s.y).sum::<f64>() / n_f;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for s in &clean {
        let dx = s.x - x_mean;
        sxx += dx * dx;
        sxy += dx * (s.y - y_mean);
    }
    if sxx <= 0.0 {
        return Err(LmError::InsufficientDataMsg(
            "predictor variance vanishes in floating point".into(),
        ));
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    // Second pass: residual and total sums of squares
    let mut rss = 0.0;
    let mut tss = 0.0;
    for s in &clean {
        let e = s.y - (intercept + slope * s.x);
        rss += e * e;
        let dy = s.y - y_mean;
        tss += dy * dy;
    }
    if tss <= 0.0 {
        return Err(LmError::DegenerateResponse { n });
    }

    // Clamped so the documented [0, 1] invariant survives rounding
    let r_squared = (1.0 - rss / tss).clamp(0.0, 1.0);

    let df = n - 2;
    let df_f = df as f64;

    // Error variance and everything derived from it are undefined at
    // df = 0; the NaNs propagate through the inference helpers
    let sigma2 = if df == 0 { f64::NAN } else { rss / df_f };
    let residual_std_error = sigma2.sqrt();

    let slope_se = (sigma2 / sxx).sqrt();
    let intercept_se = (sigma2 * (1.0 / n_f + x_mean * x_mean / sxx)).sqrt();

    let adj_r_squared = if df == 0 {
        f64::NAN
    } else {
        1.0 - (1.0 - r_squared) * (n_f - 1.0) / df_f
    };

    let f_statistic = if df == 0 {
        f64::NAN
    } else if rss == 0.0 {
        f64::INFINITY
    } else {
        (tss - rss) / sigma2
    };
    let f_pvalue = pvalue_f(f_statistic, 1.0, df_f);

    let coefficient = |estimate: f64, std_error: f64| {
        let t_value = estimate / std_error;
        let (ci_lower, ci_upper) =
            confidence_interval_t(estimate, std_error, df_f, options.confidence_level);
        Coefficient {
            estimate,
            std_error,
            t_value,
            p_value: pvalue_t(t_value, df_f),
            ci_lower,
            ci_upper,
        }
    };

    Ok(FitResult {
        intercept: coefficient(intercept, intercept_se),
        slope: coefficient(slope, slope_se),
        r_squared,
        adj_r_squared,
        residual_std_error,
        df_residual: df,
        f_statistic,
        f_pvalue,
        confidence_level: options.confidence_level,
        n_observations: n,
    })
}

/// Fit from parallel x and y slices
///
/// Convenience wrapper over [`fit`] for callers holding separate columns.
pub fn fit_xy(x: &[f64], y: &[f64], options: &SlrOptions) -> LmResult<FitResult> {
    if x.len() != y.len() {
        return Err(LmError::DimensionMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }
    let samples: Vec<Sample> = x.iter().zip(y).map(|(&x, &y)| Sample::new(x, y)).collect();
    fit(&samples, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn samples_from(x: &[f64], y: &[f64]) -> Vec<Sample> {
        x.iter().zip(y).map(|(&x, &y)| Sample::new(x, y)).collect()
    }

    #[test]
    fn test_exact_line() {
        // y = 2x + 1 with no noise
        let samples = samples_from(&[0.0, 1.0, 2.0, 3.0, 4.0], &[1.0, 3.0, 5.0, 7.0, 9.0]);
        let result = fit(&samples, &SlrOptions::default()).unwrap();

        assert_abs_diff_eq!(result.intercept.estimate, 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(result.slope.estimate, 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(result.r_squared, 1.0, epsilon = 1e-10);
        assert_eq!(result.df_residual, 3);
        assert_eq!(result.n_observations, 5);
    }

    #[test]
    fn test_noisy_fit_inference() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let y = vec![2.1, 4.0, 5.9, 8.1, 10.0, 11.9, 14.1, 16.0, 17.9, 20.1];
        let result = fit(&samples_from(&x, &y), &SlrOptions::default()).unwrap();

        assert_abs_diff_eq!(result.slope.estimate, 2.0, epsilon = 0.05);
        assert!(result.slope.std_error > 0.0);
        assert!(result.slope.p_value < 0.05);
        assert!(result.r_squared > 0.99);
        assert_eq!(result.df_residual, 8);

        // Interval should cover the true slope
        assert!(result.slope.ci_lower < 2.0 && 2.0 < result.slope.ci_upper);

        // One predictor: the omnibus F test and the slope t test agree
        assert_abs_diff_eq!(
            result.f_statistic,
            result.slope.t_value * result.slope.t_value,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(result.f_pvalue, result.slope.p_value, epsilon = 1e-9);
    }

    #[test]
    fn test_r_squared_identity() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y = vec![2.0, 1.0, 4.0, 3.0, 6.0, 5.0];
        let result = fit(&samples_from(&x, &y), &SlrOptions::default()).unwrap();

        assert!(result.r_squared >= 0.0 && result.r_squared <= 1.0);
        assert!(result.adj_r_squared <= result.r_squared);
    }

    #[test]
    fn test_degenerate_response() {
        let samples = samples_from(&[1.0, 2.0, 3.0, 4.0], &[5.0, 5.0, 5.0, 5.0]);
        let result = fit(&samples, &SlrOptions::default());
        assert!(matches!(result, Err(LmError::DegenerateResponse { n: 4 })));
    }

    #[test]
    fn test_constant_predictor() {
        let samples = samples_from(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]);
        let result = fit(&samples, &SlrOptions::default());
        assert!(matches!(result, Err(LmError::InsufficientDataMsg(_))));
    }

    #[test]
    fn test_too_few_observations() {
        let samples = vec![Sample::new(1.0, 2.0)];
        let result = fit(&samples, &SlrOptions::default());
        assert!(matches!(
            result,
            Err(LmError::InsufficientData {
                needed: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_nan_rows_filtered() {
        let samples = vec![
            Sample::new(0.0, 1.0),
            Sample::new(f64::NAN, 2.0),
            Sample::new(1.0, 3.0),
            Sample::new(2.0, f64::INFINITY),
            Sample::new(2.0, 5.0),
        ];
        let result = fit(&samples, &SlrOptions::default()).unwrap();
        assert_eq!(result.n_observations, 3);
        assert_abs_diff_eq!(result.slope.estimate, 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_all_rows_invalid() {
        let samples = vec![Sample::new(f64::NAN, 1.0), Sample::new(2.0, f64::NAN)];
        let result = fit(&samples, &SlrOptions::default());
        assert!(matches!(result, Err(LmError::NoValidData)));
    }

    #[test]
    fn test_two_point_fit_has_nan_inference() {
        let samples = samples_from(&[0.0, 1.0], &[1.0, 3.0]);
        let result = fit(&samples, &SlrOptions::default()).unwrap();

        assert_abs_diff_eq!(result.slope.estimate, 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(result.intercept.estimate, 1.0, epsilon = 1e-10);
        assert_eq!(result.df_residual, 0);
        assert!(result.residual_std_error.is_nan());
        assert!(result.slope.std_error.is_nan());
        assert!(result.slope.p_value.is_nan());
        assert!(result.adj_r_squared.is_nan());
        assert!(result.f_statistic.is_nan());
    }

    #[test]
    fn test_perfect_fit_f_statistic() {
        let samples = samples_from(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0]);
        let result = fit(&samples, &SlrOptions::default()).unwrap();

        assert_eq!(result.residual_std_error, 0.0);
        assert!(result.f_statistic.is_infinite());
        assert_eq!(result.f_pvalue, 0.0);
    }

    #[test]
    fn test_fit_xy_dimension_mismatch() {
        let result = fit_xy(&[1.0, 2.0, 3.0], &[1.0, 2.0], &SlrOptions::default());
        assert!(matches!(
            result,
            Err(LmError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_fit_xy_matches_fit() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![1.2, 1.9, 3.2, 3.8, 5.1];
        let a = fit_xy(&x, &y, &SlrOptions::default()).unwrap();
        let b = fit(&samples_from(&x, &y), &SlrOptions::default()).unwrap();
        assert_eq!(a.slope.estimate, b.slope.estimate);
        assert_eq!(a.intercept.estimate, b.intercept.estimate);
    }

    #[test]
    fn test_wider_confidence_level_widens_interval() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let y = vec![1.1, 2.3, 2.9, 4.2, 4.8, 6.1, 7.2, 7.9];
        let narrow = fit_xy(
            &x,
            &y,
            &SlrOptions {
                confidence_level: 0.90,
            },
        )
        .unwrap();
        let wide = fit_xy(
            &x,
            &y,
            &SlrOptions {
                confidence_level: 0.99,
            },
        )
        .unwrap();

        let narrow_width = narrow.slope.ci_upper - narrow.slope.ci_lower;
        let wide_width = wide.slope.ci_upper - wide.slope.ci_lower;
        assert!(wide_width > narrow_width);
    }
}
