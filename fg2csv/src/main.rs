use anyhow::Result;
use clap::Parser;

mod cli;
mod export;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Addresses(args) => export::run_addresses(args),
        Command::Vips(args) => export::run_vips(args),
    }
}
