#![allow(dead_code)]

mod cli;
mod application;
mod domain;
mod data;
mod ml;
mod infra;
mod web;
mod error;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    // One timestamped log file per run, mirrored on stdout.
    infra::logging::init("logs")?;

    let cli = Cli::parse();
    cli.run()
}
