//! Diagnostic functions for fitted models

mod information_criteria;
mod jarque_bera;
mod quantiles;
mod residuals;

pub use information_criteria::{aic, bic};
pub use jarque_bera::{jarque_bera, JarqueBeraResult};
pub use quantiles::{
    five_number_summary, normal_quantile_pairs, FiveNumberSummary, QuantilePair,
};
pub use residuals::{diagnose, Diagnostics};
