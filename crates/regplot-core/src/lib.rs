//! Scatter plots of feature/target data against a regression line whose slope
//! and intercept are supplied by the caller.
//!
//! The numeric part (`data::split`, `predict::predict`, `stats`) is pure;
//! `plot::render` is the only code that touches the filesystem.

pub mod cmd;
pub mod data;
pub mod plot;
pub mod predict;
pub mod report;
pub mod stats;

pub use data::{split, FeatureTargetSet, SplitError};
pub use predict::{predict, LineSample, PredictError, PredictionResult, RegressionParameters};
pub use stats::FitSummary;
