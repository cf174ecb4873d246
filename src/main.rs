mod cli;
mod commands;
mod dataset;
mod error;
mod filter;
mod output;
mod plant;
mod preferences;
mod tui;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
