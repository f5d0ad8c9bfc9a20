use regplot_core::cmd::cli::Cli;
use regplot_core::cmd::config::Config;

use clap::Parser;
use log::debug;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let cfg: Config = cli.into_config();
    debug!("{:?}", cfg);
    if let Err(e) = cfg.run() {
        eprintln!("Err: {e}");
        process::exit(1);
    }
}
