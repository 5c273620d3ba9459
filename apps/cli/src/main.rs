//! coursegrid CLI — decode a saved timetable page into a JSON schedule.
//!
//! Fetching the page is left to the user (browser "save as", curl, …);
//! this binary only reads markup from a file or stdin.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
