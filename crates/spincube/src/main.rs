//! Command-line front end for the Spincube engine.
//!
//! The renderer is an external collaborator, so this binary drives the
//! engine headless: it applies move sequences, scrambles, runs external
//! solver programs, and offers a small interactive stdin demo.

use clap::Parser;

mod cli;
mod keymap;
mod solvers;

fn main() -> eyre::Result<()> {
    color_eyre::install().expect("error initializing panic handler");
    env_logger::builder().init();

    let args = cli::Args::parse();
    cli::exec(args.subcommand)
}
