//! Model fitting and prediction

mod predict;
mod slr;

pub use predict::{predict, predict_one};
pub use slr::{fit, fit_xy};
