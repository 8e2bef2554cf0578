//! Build script for wishlist-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is restated here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this synchronized with src/cli.rs.
fn build_cli() -> Command {
    let acting_user = || {
        Arg::new("as")
            .long("as")
            .value_name("EMAIL")
            .help("Email of the acting user")
            .env("WISHLIST_USER")
            .required(true)
    };
    let item_id = || {
        Arg::new("item")
            .value_name("ITEM_ID")
            .help("Id of the item")
            .required(true)
    };
    let format = || {
        Arg::new("format")
            .long("format")
            .value_parser(["table", "json", "csv"])
            .help("Output format")
    };

    Command::new("wishlist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage a shared gift wishlist")
        .long_about(
            "Command-line tool for a shared gift wishlist where item creators \
             can see that a wish is reserved but not by whom",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("WISHLIST_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the busy timeout (in milliseconds)")
                .value_name("MILLISECONDS")
                .global(true),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("add-user")
                .about("Register a new user")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("email").long("email").required(true)),
            Command::new("show-user")
                .about("Look up a user by email or id")
                .arg(Arg::new("email").long("email"))
                .arg(Arg::new("id").long("id"))
                .arg(format()),
            Command::new("add-item")
                .about("Put an item on the wishlist")
                .arg(acting_user())
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("link").long("link").value_name("URL"))
                .arg(Arg::new("reserved-by").long("reserved-by").value_name("EMAIL")),
            Command::new("delete-item")
                .about("Remove one of your own items")
                .arg(acting_user())
                .arg(item_id()),
            Command::new("list")
                .about("Show the wishlist as seen by one user")
                .arg(acting_user())
                .arg(format()),
            Command::new("reserve")
                .about("Reserve an item")
                .arg(acting_user())
                .arg(item_id())
                .arg(
                    Arg::new("if-free")
                        .long("if-free")
                        .help("Fail instead of taking over an existing reservation")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("unreserve")
                .about("Give up a reservation")
                .arg(acting_user())
                .arg(item_id())
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help("Clear the reservation even if somebody else holds it")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("owner")
                .about("Show who holds the reservation on an item")
                .long_about("Show who holds the reservation on an item; refused for the item's creator")
                .arg(acting_user())
                .arg(item_id())
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
            Command::new("verify").about("Check the store for corruption"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("wishlist.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
