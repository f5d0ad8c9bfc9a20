use crate::predict::PredictError;

use serde::Serialize;

/// How well the supplied line matches the observed targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitSummary {
    pub n: usize,
    pub rmse: f64,
    /// `None` with fewer than two targets or when all targets are equal.
    pub r2: Option<f64>,
}

impl FitSummary {
    pub fn from_predictions(targets: &[f64], predictions: &[f64]) -> Result<Self, PredictError> {
        if targets.len() != predictions.len() {
            return Err(PredictError::LengthMismatch {
                len_targets: targets.len(),
                len_predictions: predictions.len(),
            });
        }
        if targets.is_empty() {
            return Err(PredictError::EmptyInput);
        }

        let n = targets.len();
        let ss_res: f64 = targets.iter().zip(predictions).map(|(&t, &p)| (t - p).powi(2)).sum();
        let rmse = (ss_res / n as f64).sqrt();

        let mean = targets.iter().sum::<f64>() / n as f64;
        let ss_tot: f64 = targets.iter().map(|&t| (t - mean).powi(2)).sum();
        let r2 = (n >= 2 && ss_tot != 0.0).then(|| 1.0 - ss_res / ss_tot);

        Ok(Self { n, rmse, r2 })
    }
}
