//! Main entry point for the wishlist CLI.
//!
//! It provides commands for maintaining a shared gift wishlist:
//! - `add-user` / `show-user`: Register and look up users
//! - `add-item` / `delete-item`: Manage your own wishes
//! - `list`: See everybody's wishes without spoiling your own surprises
//! - `reserve` / `unreserve` / `owner`: Claim gifts you intend to buy

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    let logger = wishlist::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: logging disabled: {e}");
    }

    let global = GlobalOptions {
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    let result = match cli.command {
        cli::Command::AddUser(cmd) => cmd.execute(&global),
        cli::Command::ShowUser(cmd) => cmd.execute(&global),
        cli::Command::AddItem(cmd) => cmd.execute(&global),
        cli::Command::DeleteItem(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Reserve(cmd) => cmd.execute(&global),
        cli::Command::Unreserve(cmd) => cmd.execute(&global),
        cli::Command::Owner(cmd) => cmd.execute(&global),
        cli::Command::Verify(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
