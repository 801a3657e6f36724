//! Residual computation for fitted models

use crate::diagnostics::quantiles::{normal_quantile_pairs, QuantilePair};
use crate::errors::{LmError, LmResult};
use crate::models::predict_one;
use crate::types::{FitResult, Sample};

/// Per-sample diagnostic quantities derived from a fit
///
/// Recomputed from the fit and the data on every call; nothing is
/// cached and the analyzer holds no state between calls.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    /// Fitted values, intercept + slope·x
    pub fitted: Vec<f64>,
    /// Raw residuals, y - fitted
    pub residuals: Vec<f64>,
    /// Residuals scaled by the residual standard error
    pub standardized: Vec<f64>,
    /// Hat-diagonal leverage of each observation
    pub leverage: Vec<f64>,
    /// Sorted residuals paired with theoretical normal quantiles
    pub qq: Vec<QuantilePair>,
}

/// Compute residual diagnostics for a fitted model
///
/// Applies the same non-finite row filter as the fitter, so passing the
/// dataset the fit came from always lines up with `fit.n_observations`.
pub fn diagnose(samples: &[Sample], fit: &FitResult) -> LmResult<Diagnostics> {
    let clean: Vec<Sample> = samples.iter().copied().filter(Sample::is_finite).collect();
    let n = clean.len();
    if n == 0 {
        return Err(LmError::NoValidData);
    }
    if n != fit.n_observations {
        return Err(LmError::DimensionMismatch {
            expected: fit.n_observations,
            actual: n,
        });
    }

    let fitted: Vec<f64> = clean.iter().map(|s| predict_one(fit, s.x)).collect();
    let residuals: Vec<f64> = clean
        .iter()
        .zip(&fitted)
        .map(|(s, yhat)| s.y - yhat)
        .collect();

    // Scale by the residual standard error when it is usable; otherwise
    // fall back to the raw residuals
    let scale = fit.residual_std_error;
    let standardized = if scale.is_finite() && scale > 0.0 {
        residuals.iter().map(|e| e / scale).collect()
    } else {
        residuals.clone()
    };

    // Hat diagonal for a one-predictor design: h = 1/n + (x - x̄)²/Sxx
    let n_f = n as f64;
    let x_mean = clean.iter().map(|s| s.x).sum::<f64>() / n_f;
    let sxx: f64 = clean.iter().map(|s| (s.x - x_mean).powi(2)).sum();
    let leverage: Vec<f64> = clean
        .iter()
        .map(|s| {
            if sxx > 0.0 {
                1.0 / n_f + (s.x - x_mean).powi(2) / sxx
            } else {
                1.0 / n_f
            }
        })
        .collect();

    let qq = normal_quantile_pairs(&residuals);

    Ok(Diagnostics {
        fitted,
        residuals,
        standardized,
        leverage,
        qq,
    })
}
