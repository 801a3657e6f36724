//! lmdiag-core: simple linear regression with residual diagnostics
//!
//! Fits a one-predictor least-squares line in closed form, derives
//! residual diagnostics (including a normal-quantile comparison for the
//! residuals), and renders a fixed-layout model summary. Everything is
//! a synchronous pure function of its inputs; fits over disjoint
//! datasets can run in parallel without coordination.
//!
//! # Example
//!
//! ```
//! use lmdiag_core::{diagnose, fit, format_summary, Sample, SlrOptions};
//!
//! let samples: Vec<Sample> = vec![
//!     (0.0, 1.1).into(),
//!     (1.0, 2.9).into(),
//!     (2.0, 5.2).into(),
//!     (3.0, 6.8).into(),
//!     (4.0, 9.1).into(),
//! ];
//!
//! let fitted = fit(&samples, &SlrOptions::default())?;
//! let diag = diagnose(&samples, &fitted)?;
//! println!("{}", format_summary(&fitted, &diag)?);
//! # Ok::<(), lmdiag_core::LmError>(())
//! ```

pub mod diagnostics;
pub mod errors;
pub mod inference;
pub mod models;
pub mod report;
pub mod types;

pub use diagnostics::{diagnose, Diagnostics};
pub use errors::{LmError, LmResult};
pub use models::{fit, fit_xy, predict, predict_one};
pub use report::format_summary;
pub use types::*;
