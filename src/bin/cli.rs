// src/bin/cli.rs
use canoe_failures::{cli, log};
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();
    log::init(log::Sink::Stderr, args.verbose);

    cli::run(&args)?;
    Ok(())
}
