//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddItemCommand, AddUserCommand, CompletionsCommand, DeleteItemCommand, ListCommand,
    OwnerCommand, ReserveCommand, ShowUserCommand, UnreserveCommand, VerifyCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for a shared gift wishlist.
#[derive(Parser)]
#[command(name = "wishlist")]
#[command(version, about = "Manage a shared gift wishlist", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "WISHLIST_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in milliseconds)
    #[arg(long, value_name = "MILLISECONDS", global = true)]
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization
    #[arg(long, global = true)]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Register a new user
    AddUser(AddUserCommand),

    /// Look up a user by email or id
    ShowUser(ShowUserCommand),

    /// Put an item on the wishlist
    AddItem(AddItemCommand),

    /// Remove one of your own items
    DeleteItem(DeleteItemCommand),

    /// Show the wishlist as seen by one user
    List(ListCommand),

    /// Reserve an item
    Reserve(ReserveCommand),

    /// Give up a reservation
    Unreserve(UnreserveCommand),

    /// Show who holds the reservation on an item
    Owner(OwnerCommand),

    /// Check the store for corruption
    Verify(VerifyCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
