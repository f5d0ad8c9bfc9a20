use crate::data::FeatureTargetSet;
use crate::predict::PredictionResult;

use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

pub const PLOT_WIDTH: u32 = 800;
pub const PLOT_HEIGHT: u32 = 600;
pub const DEFAULT_TITLE: &str = "Linear regression";

// fraction of the data range added on each side of an axis
const AXIS_PADDING: f64 = 0.05;

const OBSERVED_COLOR: RGBColor = RGBColor(31, 119, 180);
const PREDICTED_COLOR: RGBColor = RGBColor(255, 127, 14);
const LINE_COLOR: RGBColor = RGBColor(44, 160, 44);

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("unsupported image format for {0:?}, use svg, png, jpg, jpeg or bmp")]
    UnsupportedFormat(String),
    #[error("nothing to plot")]
    EmptyData,
    #[error("{axis} values do not fit on a chart axis (non-finite or too far apart)")]
    Range { axis: &'static str },
    #[error("failed to draw chart: {0}")]
    Draw(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotFormat {
    Svg,
    Bitmap,
}

impl PlotFormat {
    pub fn from_path(path: &Path) -> Result<Self, PlotError> {
        let ext = path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("svg") => Ok(PlotFormat::Svg),
            Some("png" | "jpg" | "jpeg" | "bmp") => Ok(PlotFormat::Bitmap),
            _ => Err(PlotError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self { width: PLOT_WIDTH, height: PLOT_HEIGHT, title: DEFAULT_TITLE.to_string() }
    }
}

/// Axis range covering `values`, padded on both sides. Never zero-width.
/// Every value and both padded bounds must be finite.
pub fn axis_range(
    axis: &'static str,
    values: impl IntoIterator<Item = f64>,
) -> Result<Range<f64>, PlotError> {
    let mut bounds: Option<(f64, f64)> = None;
    for v in values {
        if !v.is_finite() {
            return Err(PlotError::Range { axis });
        }
        bounds = match bounds {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        };
    }
    let (min, max) = bounds.ok_or(PlotError::EmptyData)?;

    let range = max - min;
    let padded = if range == 0.0 {
        (min - 1.0)..(max + 1.0)
    } else {
        (min - range * AXIS_PADDING)..(max + range * AXIS_PADDING)
    };
    if !range.is_finite() || !padded.start.is_finite() || !padded.end.is_finite() {
        return Err(PlotError::Range { axis });
    }
    Ok(padded)
}

/// A chart whose output format and axes have been checked. Building one
/// touches nothing on disk, so callers can validate before printing anything.
#[derive(Debug)]
pub struct Chart<'a> {
    path: &'a Path,
    format: PlotFormat,
    x_range: Range<f64>,
    y_range: Range<f64>,
    set: &'a FeatureTargetSet,
    prediction: &'a PredictionResult,
}

impl<'a> Chart<'a> {
    pub fn new(
        path: &'a Path,
        set: &'a FeatureTargetSet,
        prediction: &'a PredictionResult,
    ) -> Result<Self, PlotError> {
        let format = PlotFormat::from_path(path)?;
        let line = prediction.line.points();
        let x_range = axis_range("feature", set.features().iter().copied())?;
        let y_range = axis_range(
            "target",
            set.targets()
                .iter()
                .chain(prediction.predictions.iter())
                .copied()
                .chain(line.iter().map(|(_, y)| *y)),
        )?;

        Ok(Self { path, format, x_range, y_range, set, prediction })
    }

    pub fn path(&self) -> &Path {
        self.path
    }

    pub fn render(&self, options: &PlotOptions) -> Result<(), PlotError> {
        let size = (options.width, options.height);
        debug!(
            "rendering {:?} chart of {}x{} to {}",
            self.format,
            size.0,
            size.1,
            self.path.display()
        );

        match self.format {
            PlotFormat::Svg => {
                self.draw(SVGBackend::new(self.path, size).into_drawing_area(), options)
            },
            PlotFormat::Bitmap => {
                self.draw(BitMapBackend::new(self.path, size).into_drawing_area(), options)
            },
        }?;

        info!("wrote chart to {}", self.path.display());
        Ok(())
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: DrawingArea<DB, Shift>,
        options: &PlotOptions,
    ) -> Result<(), PlotError> {
        root.fill(&WHITE).map_err(draw_err)?;

        let mut ctx = ChartBuilder::on(&root)
            .caption(&options.title, ("sans-serif", 28))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(self.x_range.clone(), self.y_range.clone())
            .map_err(draw_err)?;

        ctx.configure_mesh().x_desc("Feature").y_desc("Target").draw().map_err(draw_err)?;

        ctx.draw_series(
            self.set.points().map(|point| Circle::new(point, 4, OBSERVED_COLOR.filled())),
        )
        .map_err(draw_err)?
        .label("Observed")
        .legend(|(x, y)| Circle::new((x, y), 4, OBSERVED_COLOR.filled()));

        ctx.draw_series(
            self.set
                .features()
                .iter()
                .zip(self.prediction.predictions.iter())
                .map(|(&x, &y)| Cross::new((x, y), 4, PREDICTED_COLOR.stroke_width(2))),
        )
        .map_err(draw_err)?
        .label("Predicted")
        .legend(|(x, y)| Cross::new((x, y), 4, PREDICTED_COLOR.stroke_width(2)));

        ctx.draw_series(LineSeries::new(
            self.prediction.line.points(),
            LINE_COLOR.stroke_width(2),
        ))
        .map_err(draw_err)?
        .label("Regression line")
        .legend(|(x, y)| PathElement::new(vec![(x - 10, y), (x + 10, y)], LINE_COLOR));

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
        Ok(())
    }
}

/// Draws observed points, predicted points and the regression line to `path`.
/// The backend is picked from the file extension.
pub fn render(
    path: &Path,
    set: &FeatureTargetSet,
    prediction: &PredictionResult,
    options: &PlotOptions,
) -> Result<(), PlotError> {
    Chart::new(path, set, prediction)?.render(options)
}

fn draw_err<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Draw(e.to_string())
}
