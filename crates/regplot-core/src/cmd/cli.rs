use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::cmd::config::Config;
use crate::plot::{PlotOptions, DEFAULT_TITLE, PLOT_HEIGHT, PLOT_WIDTH};
use crate::predict::RegressionParameters;

pub const DEFAULT_OUTPUT: &str = "./plot_image.jpeg";

#[derive(Debug, Parser)]
#[command(
    name = "regplot",
    about = "Plot feature/target data against a precomputed regression line",
    version
)]
pub struct Cli {
    /// Feature values followed by the same number of target values
    #[arg(
        long,
        required = true,
        num_args = 0..,
        allow_negative_numbers = true,
        value_name = "VALUE"
    )]
    pub data: Vec<String>,

    /// Slope of the regression line
    #[arg(long, allow_negative_numbers = true)]
    pub slope: f64,

    /// Intercept of the regression line
    #[arg(long, allow_negative_numbers = true)]
    pub intercept: f64,

    /// Image file to write; format follows the extension (svg, png, jpg, jpeg, bmp)
    #[arg(short = 'o', long, value_hint = ValueHint::FilePath, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = PLOT_WIDTH)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = PLOT_HEIGHT)]
    pub height: u32,

    /// Chart caption
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Only print the computed values, do not write an image
    #[arg(long = "no-image")]
    pub no_image: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

// -------- Map CLI -> Config --------

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            data: self.data,
            params: RegressionParameters::new(self.slope, self.intercept),
            output: if self.no_image { None } else { Some(self.output) },
            plot: PlotOptions { width: self.width, height: self.height, title: self.title },
            json: self.json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from([
            "regplot",
            "--data",
            "1",
            "2",
            "3",
            "4",
            "--slope",
            "2",
            "--intercept",
            "1",
        ])
        .unwrap();
        let cfg = cli.into_config();

        assert_eq!(cfg.data, vec!["1", "2", "3", "4"]);
        assert_eq!(cfg.params, RegressionParameters::new(2., 1.));
        assert_eq!(cfg.output, Some(PathBuf::from(DEFAULT_OUTPUT)));
        assert_eq!(cfg.plot, PlotOptions::default());
        assert!(!cfg.json);
    }

    #[test]
    fn test_parse_negative_numbers() {
        let cli = Cli::try_parse_from([
            "regplot",
            "--slope",
            "-0.5",
            "--intercept",
            "-3",
            "--data",
            "-1",
            "2",
            "-3.5",
            "4",
        ])
        .unwrap();

        assert_eq!(cli.data, vec!["-1", "2", "-3.5", "4"]);
        assert_eq!(cli.slope, -0.5);
        assert_eq!(cli.intercept, -3.);
    }

    #[test]
    fn test_parse_no_image() {
        let cli = Cli::try_parse_from([
            "regplot",
            "--data",
            "1",
            "2",
            "--slope",
            "1",
            "--intercept",
            "0",
            "--no-image",
            "--json",
            "-o",
            "out.svg",
        ])
        .unwrap();
        let cfg = cli.into_config();

        assert_eq!(cfg.output, None);
        assert!(cfg.json);
    }

    #[test]
    fn test_missing_required() {
        assert!(Cli::try_parse_from(["regplot", "--data", "1", "2", "--slope", "1"]).is_err());
        assert!(Cli::try_parse_from(["regplot", "--slope", "1", "--intercept", "0"]).is_err());
    }
}
