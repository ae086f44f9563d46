use clap::Parser;
use colored::Colorize;
use env_logger::Env;

mod config;
mod output;
mod sort;

use config::{Cli, SortConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default level depends on --debug, RUST_LOG overrides
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("error")
    };
    env_logger::Builder::from_env(env).init();

    let config = SortConfig::try_from(cli)?;
    log::debug!("{config:?}");

    sort::execute(&config)
}
