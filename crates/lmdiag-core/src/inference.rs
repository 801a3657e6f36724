//! Distribution-based inference helpers
//!
//! Two-sided p-values, confidence intervals, and significance codes used
//! by the fitter and the summary reporter. Invalid input yields NaN
//! rather than a panic so callers can propagate "not applicable" values.

use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

/// Two-sided p-value for a t-statistic with `df` degrees of freedom
pub fn pvalue_t(t: f64, df: f64) -> f64 {
    if df <= 0.0 || t.is_nan() {
        return f64::NAN;
    }
    if t.is_infinite() {
        return 0.0;
    }
    let dist = match StudentsT::new(0.0, 1.0, df) {
        Ok(d) => d,
        Err(_) => return f64::NAN,
    };
    2.0 * (1.0 - dist.cdf(t.abs()))
}

/// Upper-tail p-value for an F-statistic with (df1, df2) degrees of freedom
pub fn pvalue_f(f: f64, df1: f64, df2: f64) -> f64 {
    if df1 <= 0.0 || df2 <= 0.0 || f.is_nan() || f < 0.0 {
        return f64::NAN;
    }
    if f.is_infinite() {
        return 0.0;
    }
    let dist = match FisherSnedecor::new(df1, df2) {
        Ok(d) => d,
        Err(_) => return f64::NAN,
    };
    1.0 - dist.cdf(f)
}

/// Confidence interval from the t-distribution
///
/// # Arguments
/// * `estimate` - Point estimate
/// * `std_error` - Standard error of the estimate
/// * `df` - Degrees of freedom
/// * `confidence` - Confidence level (e.g. 0.95)
///
/// # Returns
/// (lower_bound, upper_bound), or NaN bounds when the inputs do not
/// admit an interval
pub fn confidence_interval_t(estimate: f64, std_error: f64, df: f64, confidence: f64) -> (f64, f64) {
    if !estimate.is_finite() || !std_error.is_finite() || std_error < 0.0 || df <= 0.0 {
        return (f64::NAN, f64::NAN);
    }
    if !(0.0..1.0).contains(&confidence) {
        return (f64::NAN, f64::NAN);
    }
    let dist = match StudentsT::new(0.0, 1.0, df) {
        Ok(d) => d,
        Err(_) => return (f64::NAN, f64::NAN),
    };
    let alpha = 1.0 - confidence;
    let t_critical = dist.inverse_cdf(1.0 - alpha / 2.0);
    let margin = t_critical * std_error;
    (estimate - margin, estimate + margin)
}

/// Significance codes for a p-value, as printed in summary tables
///
/// "***" p < 0.001, "**" p < 0.01, "*" p < 0.05, "." p < 0.1, "" otherwise
/// (NaN falls through to "").
pub fn significance_stars(p_value: f64) -> &'static str {
    if p_value < 0.001 {
        "***"
    } else if p_value < 0.01 {
        "**"
    } else if p_value < 0.05 {
        "*"
    } else if p_value < 0.1 {
        "."
    } else {
        ""
    }
}
