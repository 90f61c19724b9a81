//! romex CLI
//!
//! Usage: romex [OPTIONS] [ROM]

use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    match commands::extract::cmd_extract(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            ui::error::print_error(&err, json);
            std::process::exit(1);
        }
    }
}
