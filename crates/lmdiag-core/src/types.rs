/// A single paired observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Predictor value
    pub x: f64,
    /// Observed response
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite (neither NaN nor infinite)
    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Inference record for a single model term
#[derive(Debug, Clone)]
pub struct Coefficient {
    /// Point estimate
    pub estimate: f64,
    /// Standard error of the estimate
    pub std_error: f64,
    /// t-statistic (estimate / std_error)
    pub t_value: f64,
    /// Two-sided p-value from Student's t
    pub p_value: f64,
    /// Lower bound of the confidence interval
    pub ci_lower: f64,
    /// Upper bound of the confidence interval
    pub ci_upper: f64,
}

/// Result of a simple linear regression fit
///
/// Immutable once computed; owned by whichever caller requested the fit.
/// Inference fields are NaN when the residual degrees of freedom are zero:
/// a two-point fit determines the line exactly but leaves the error
/// variance unidentified.
#[derive(Debug, Clone)]
pub struct FitResult {
    /// Intercept term
    pub intercept: Coefficient,
    /// Slope of the single predictor
    pub slope: Coefficient,
    /// R-squared (coefficient of determination)
    pub r_squared: f64,
    /// Adjusted R-squared
    pub adj_r_squared: f64,
    /// Residual standard error, sqrt(RSS / (n - 2))
    pub residual_std_error: f64,
    /// Residual degrees of freedom (n - 2)
    pub df_residual: usize,
    /// F-statistic for overall model significance
    pub f_statistic: f64,
    /// p-value for the F-statistic with (1, n - 2) degrees of freedom
    pub f_pvalue: f64,
    /// Confidence level used for the coefficient intervals
    pub confidence_level: f64,
    /// Number of observations used in the fit
    pub n_observations: usize,
}

/// Options for simple linear regression fitting
#[derive(Debug, Clone)]
pub struct SlrOptions {
    /// Confidence level for coefficient intervals (default: 0.95)
    pub confidence_level: f64,
}

impl Default for SlrOptions {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
        }
    }
}
