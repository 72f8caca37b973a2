mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> miette::Result<()> {
    match Cli::parse().command {
        Commands::Welcome => commands::welcome::run(),
        Commands::Create {
            name,
            no_editor,
            no_dev,
        } => commands::create::run(name, no_editor, no_dev),
        Commands::Info => commands::info::run(),
    }
}
