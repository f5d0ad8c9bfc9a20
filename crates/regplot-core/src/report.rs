use crate::data::FeatureTargetSet;
use crate::predict::{LineSample, PredictionResult, RegressionParameters};
use crate::stats::FitSummary;

use serde::Serialize;
use std::io::{self, Write};

/// Everything a run produced, in one serializable record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub slope: f64,
    pub intercept: f64,
    pub features: Vec<f64>,
    pub targets: Vec<f64>,
    pub predictions: Vec<f64>,
    pub line: LineSample,
    pub fit: FitSummary,
}

impl Summary {
    pub fn new(
        params: RegressionParameters,
        set: &FeatureTargetSet,
        prediction: &PredictionResult,
        fit: FitSummary,
    ) -> Self {
        Self {
            slope: params.slope,
            intercept: params.intercept,
            features: set.features().to_vec(),
            targets: set.targets().to_vec(),
            predictions: prediction.predictions.clone(),
            line: prediction.line,
            fit,
        }
    }

    pub fn write_plain<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "features: {:?}", self.features)?;
        writeln!(out, "predicted: {:?}", self.predictions)?;
        writeln!(
            out,
            "line: ({}, {}) -> ({}, {})",
            self.line.x_min, self.line.y_min, self.line.x_max, self.line.y_max
        )?;
        match self.fit.r2 {
            Some(r2) => writeln!(out, "rmse: {:.6}, r2: {:.6}", self.fit.rmse, r2),
            None => writeln!(out, "rmse: {:.6}, r2: undefined", self.fit.rmse),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
