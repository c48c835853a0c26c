//! textpatch - guarded find-and-replace for text files
//!
//! Replaces an exact literal block of text in one file and writes it back,
//! refusing to touch the file when the expected block is missing.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod patch;
mod patcher;
mod ui;

use cli::{Cli, Commands};

fn main() {
    // clap would exit with 2 on usage errors, which is reserved for mismatches
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                error::EXIT_FAILURE
            } else {
                0
            };
            std::process::exit(code);
        }
    };
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Apply(args) => commands::apply::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        ui::print_error(&e);
        std::process::exit(e.exit_code());
    }
}
