//! Information criteria for comparing fitted models

use crate::types::FitResult;

// Estimated coefficients in a simple regression: intercept and slope
const N_PARAMS: f64 = 2.0;

/// Residual sum of squares recovered from the stored error scale
fn rss_of(fit: &FitResult) -> f64 {
    fit.residual_std_error * fit.residual_std_error * fit.df_residual as f64
}

/// Akaike Information Criterion
///
/// AIC = n·ln(RSS/n) + 2k. Lower indicates a better fit after
/// accounting for complexity; a perfect fit yields negative infinity.
pub fn aic(fit: &FitResult) -> f64 {
    let n = fit.n_observations as f64;
    let rss = rss_of(fit);
    if rss == 0.0 {
        return f64::NEG_INFINITY;
    }
    n * (rss / n).ln() + 2.0 * N_PARAMS
}

/// Bayesian Information Criterion
///
/// BIC = n·ln(RSS/n) + k·ln(n). Penalizes complexity more heavily than
/// AIC as the sample grows.
pub fn bic(fit: &FitResult) -> f64 {
    let n = fit.n_observations as f64;
    let rss = rss_of(fit);
    if rss == 0.0 {
        return f64::NEG_INFINITY;
    }
    n * (rss / n).ln() + N_PARAMS * n.ln()
}
