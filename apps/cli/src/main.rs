#![allow(clippy::print_stdout)]

mod app;
mod args;

use crate::args::Cli;
use clap::Parser;
use std::process::ExitCode;
use vv_logger::{Logger, level_for_verbosity};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut logger =
        Logger::builder().name(env!("CARGO_BIN_NAME")).level(level_for_verbosity(cli.verbose));
    if let Some(directory) = &cli.log_dir {
        logger = logger.directory(directory.clone()).json(cli.json);
    }
    let _log = logger.init()?;

    app::run(&cli)
}
