//! fixnotes - Hugo upgrade guide generator
//!
//! Concatenates the bundled, version-named fix notes that fall inside an
//! inclusive `--low`/`--high` range into a single markdown guide on stdout.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod fixes;
mod selector;
mod ui;
mod version;

use cli::{Cli, Commands};
use commands::helpers::SelectOptions;

fn main() {
    let cli = Cli::parse();
    let reporter = ui::reporter(cli.verbose);

    let options = SelectOptions {
        low: cli.low,
        high: cli.high,
        fixes_dir: cli.fixes_dir,
    };

    let result = match cli.command {
        None => commands::render::run(&options, reporter.as_ref()),
        Some(Commands::List) => commands::list::run(&options, reporter.as_ref()),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
