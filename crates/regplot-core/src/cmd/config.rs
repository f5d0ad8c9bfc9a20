use crate::data::{split, FeatureTargetSet, SplitError};
use crate::plot::{Chart, PlotError, PlotOptions};
use crate::predict::{predict, PredictError, PredictionResult, RegressionParameters};
use crate::report::Summary;
use crate::stats::FitSummary;

use log::{info, warn};
use std::io::{self, Write};
use std::path::PathBuf;

/* =================== Public configuration types =================== */

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data: Vec<String>,
    pub params: RegressionParameters,
    /// `None` skips rendering.
    pub output: Option<PathBuf>,
    pub plot: PlotOptions,
    pub json: bool,
}

/* =================== Error type (no process::exit) =================== */

#[derive(thiserror::Error, Debug)]
pub enum CmdError {
    #[error("invalid --data: {0}")]
    Split(#[from] SplitError),
    #[error("invalid --data: {0}")]
    Predict(#[from] PredictError),
    #[error("{0}")]
    Plot(#[from] PlotError),
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/* =================== Entry point =================== */

impl Config {
    /// Runs the whole pipeline, printing to stdout.
    pub fn run(&self) -> Result<Summary, CmdError> {
        let stdout = io::stdout();
        self.run_with(&mut stdout.lock())
    }

    /// Everything that can fail on bad input is checked before the first
    /// line is written to `out`.
    pub fn run_with<W: Write>(&self, out: &mut W) -> Result<Summary, CmdError> {
        let (set, prediction, fit) = self.evaluate()?;
        let chart =
            self.output.as_deref().map(|path| Chart::new(path, &set, &prediction)).transpose()?;
        let summary = Summary::new(self.params, &set, &prediction, fit);
        let json = if self.json { Some(summary.to_json()?) } else { None };

        match json {
            Some(json) => writeln!(out, "{json}")?,
            None => summary.write_plain(out)?,
        }

        match chart {
            Some(chart) => {
                chart.render(&self.plot)?;
                if !self.json {
                    writeln!(out, "plot written to {}", chart.path().display())?;
                }
            },
            None => info!("image output disabled"),
        }

        Ok(summary)
    }

    fn evaluate(&self) -> Result<(FeatureTargetSet, PredictionResult, FitSummary), CmdError> {
        let set = split(&self.data)?;
        let prediction = predict(set.features(), self.params)?;
        let fit = FitSummary::from_predictions(set.targets(), &prediction.predictions)?;
        if fit.n < 2 {
            warn!("only {} data point, regression line is a single point", fit.n);
        }
        info!("{} points, {}, rmse {}", fit.n, self.params, fit.rmse);

        Ok((set, prediction, fit))
    }
}
