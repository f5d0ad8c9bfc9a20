use itertools::{Itertools, MinMaxResult};
use log::debug;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictError {
    #[error("no feature values to predict from")]
    EmptyInput,
    #[error("targets and predictions have different lengths: {len_targets} vs {len_predictions}")]
    LengthMismatch { len_targets: usize, len_predictions: usize },
}

/// Externally supplied line parameters. Never fitted from data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegressionParameters {
    pub slope: f64,
    pub intercept: f64,
}

impl fmt::Display for RegressionParameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.intercept < 0. {
            write!(f, "y = {}x - {}", self.slope, -self.intercept)
        } else {
            write!(f, "y = {}x + {}", self.slope, self.intercept)
        }
    }
}

impl RegressionParameters {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn calculate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Two endpoints of the regression line across the feature range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSample {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl LineSample {
    pub fn points(&self) -> [(f64, f64); 2] {
        [(self.x_min, self.y_min), (self.x_max, self.y_max)]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub predictions: Vec<f64>,
    pub line: LineSample,
}

/// Evaluates the line at every feature value and at the feature extremes.
pub fn predict(
    features: &[f64],
    params: RegressionParameters,
) -> Result<PredictionResult, PredictError> {
    let (x_min, x_max) = match features.iter().copied().minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => return Err(PredictError::EmptyInput),
        MinMaxResult::OneElement(x) => (x, x),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    };

    let predictions: Vec<f64> = features.iter().map(|&x| params.calculate(x)).collect();
    let line = LineSample {
        x_min,
        y_min: params.calculate(x_min),
        x_max,
        y_max: params.calculate(x_max),
    };
    debug!("{} predictions with {}, line {:?}", predictions.len(), params, line.points());

    Ok(PredictionResult { predictions, line })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_values() {
        let res = predict(&[1., 2., 3.], RegressionParameters::new(2., 1.)).unwrap();

        assert_eq!(res.predictions, vec![3., 5., 7.]);
        assert_eq!(res.line.points(), [(1., 3.), (3., 7.)]);
    }

    #[test]
    fn test_predict_unsorted() {
        let features = [4., -2., 0.5, 10., 3.];
        let params = RegressionParameters::new(-0.5, 2.);
        let res = predict(&features, params).unwrap();

        for (x, p) in features.iter().zip(&res.predictions) {
            assert_eq!(*p, -0.5 * x + 2.);
        }
        assert_eq!(res.line.x_min, -2.);
        assert_eq!(res.line.x_max, 10.);
        assert_eq!(res.line.y_min, 3.);
        assert_eq!(res.line.y_max, -3.);
    }

    #[test]
    fn test_predict_single() {
        let res = predict(&[2.], RegressionParameters::new(3., 0.)).unwrap();

        assert_eq!(res.predictions, vec![6.]);
        assert_eq!(res.line.points(), [(2., 6.), (2., 6.)]);
    }

    #[test]
    fn test_predict_empty() {
        assert_eq!(
            predict(&[], RegressionParameters::new(1., 1.)),
            Err(PredictError::EmptyInput)
        );
    }

    #[test]
    fn test_predict_idempotent() {
        let features = [0.1, 0.2, 0.3];
        let params = RegressionParameters::new(1.7, -0.3);

        assert_eq!(predict(&features, params), predict(&features, params));
    }

    #[test]
    fn test_params_display() {
        assert_eq!(RegressionParameters::new(2., 1.).to_string(), "y = 2x + 1");
        assert_eq!(RegressionParameters::new(0.5, -3.).to_string(), "y = 0.5x - 3");
    }
}
