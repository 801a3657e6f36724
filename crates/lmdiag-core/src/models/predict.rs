//! Prediction from a fitted model

use crate::types::FitResult;

/// Predict the response at a single predictor value
pub fn predict_one(fit: &FitResult, x: f64) -> f64 {
    fit.intercept.estimate + fit.slope.estimate * x
}

/// Predict responses for a slice of predictor values
pub fn predict(fit: &FitResult, x: &[f64]) -> Vec<f64> {
    x.iter().map(|&xi| predict_one(fit, xi)).collect()
}
