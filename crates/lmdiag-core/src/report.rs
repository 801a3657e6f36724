//! Text summary of a fitted model
//!
//! Renders a fit and its diagnostics into a deterministic, fixed-layout
//! block: formula, residual five-number summary, coefficients table with
//! significance codes, and the overall fit statistics.

use crate::diagnostics::{five_number_summary, Diagnostics};
use crate::errors::{LmError, LmResult};
use crate::inference::significance_stars;
use crate::types::{Coefficient, FitResult};

/// Format a fitted model and its diagnostics as a text summary
///
/// Pure formatting: the same inputs always produce the same bytes.
/// Fails with `InvalidInput` when the fit record is malformed or the
/// diagnostics disagree with it.
pub fn format_summary(fit: &FitResult, diagnostics: &Diagnostics) -> LmResult<String> {
    validate(fit, diagnostics)?;

    let resid = five_number_summary(&diagnostics.residuals)?;

    let mut out = String::new();
    out.push_str("Call:\n");
    out.push_str("lm(formula = y ~ x)\n\n");

    out.push_str("Residuals:\n");
    out.push_str(&format!(
        "{:>10} {:>10} {:>10} {:>10} {:>10}\n",
        "Min", "1Q", "Median", "3Q", "Max"
    ));
    out.push_str(&format!(
        "{:>10} {:>10} {:>10} {:>10} {:>10}\n\n",
        cell(resid.min),
        cell(resid.q1),
        cell(resid.median),
        cell(resid.q3),
        cell(resid.max)
    ));

    out.push_str("Coefficients:\n");
    out.push_str(&format!(
        "{:<12} {:>10} {:>10} {:>8} {:>9}\n",
        "", "Estimate", "Std. Error", "t value", "Pr(>|t|)"
    ));
    out.push_str(&coefficient_row("(Intercept)", &fit.intercept));
    out.push_str(&coefficient_row("x", &fit.slope));
    out.push_str("---\n");
    out.push_str("Signif. codes:  0 '***' 0.001 '**' 0.01 '*' 0.05 '.' 0.1 ' ' 1\n\n");

    out.push_str(&format!(
        "Residual standard error: {} on {} degrees of freedom\n",
        cell(fit.residual_std_error),
        fit.df_residual
    ));
    out.push_str(&format!(
        "Multiple R-squared: {},  Adjusted R-squared: {}\n",
        cell(fit.r_squared),
        cell(fit.adj_r_squared)
    ));
    out.push_str(&format!(
        "F-statistic: {} on 1 and {} DF,  p-value: {}\n",
        cell(fit.f_statistic),
        fit.df_residual,
        cell(fit.f_pvalue)
    ));

    Ok(out)
}

fn validate(fit: &FitResult, diagnostics: &Diagnostics) -> LmResult<()> {
    if !fit.intercept.estimate.is_finite() || !fit.slope.estimate.is_finite() {
        return Err(LmError::InvalidInput(
            "coefficient estimates must be finite".into(),
        ));
    }
    if !(0.0..=1.0).contains(&fit.r_squared) {
        return Err(LmError::InvalidInput(format!(
            "R-squared {} outside [0, 1]",
            fit.r_squared
        )));
    }
    if fit.df_residual + 2 != fit.n_observations {
        return Err(LmError::InvalidInput(format!(
            "degrees of freedom {} inconsistent with {} observations",
            fit.df_residual, fit.n_observations
        )));
    }
    if diagnostics.residuals.len() != fit.n_observations
        || diagnostics.fitted.len() != fit.n_observations
    {
        return Err(LmError::InvalidInput(
            "diagnostics do not match the fitted model".into(),
        ));
    }
    Ok(())
}

fn coefficient_row(label: &str, c: &Coefficient) -> String {
    format!(
        "{:<12} {:>10} {:>10} {:>8} {:>9} {}\n",
        label,
        cell(c.estimate),
        cell(c.std_error),
        cell(c.t_value),
        cell(c.p_value),
        significance_stars(c.p_value)
    )
}

/// Fixed-width numeric cell; very small magnitudes switch to scientific
/// notation so p-values stay legible
fn cell(v: f64) -> String {
    if v.is_nan() {
        "NA".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "Inf" } else { "-Inf" }.to_string()
    } else if v != 0.0 && v.abs() < 1e-4 {
        format!("{:.3e}", v)
    } else {
        format!("{:.4}", v)
    }
}
