//! Build script for tripbook-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("tripbook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Record travel reservations and build trip reports")
        .long_about(
            "Command-line tool for recording flights, bus trips, hotel stays and restaurant \
             bookings around Bolivia, and summarizing them as a chronological trip report",
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
                .env("TRIPBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .help("Override the reservation store file")
                .value_name("PATH")
                .global(true)
                .env("TRIPBOOK_STORE"),
        )
        .subcommands(vec![
            Command::new("reserve-flight")
                .about("Reserve a flight between two departments")
                .long_about("Validate and record a flight departing on a future date"),
            Command::new("reserve-bus")
                .about("Reserve a bus trip between two departments")
                .long_about("Validate and record a bus trip departing on a future date"),
            Command::new("reserve-hotel")
                .about("Reserve a hotel stay")
                .long_about("Validate and record a hotel stay with a future check-in date"),
            Command::new("reserve-restaurant")
                .about("Reserve a table at a restaurant")
                .long_about("Validate and record a restaurant booking at a future date and time"),
            Command::new("list")
                .about("List stored reservations in insertion order")
                .long_about("Display stored reservations as a table, JSON, CSV or TSV"),
            Command::new("report")
                .about("Build the chronological trip report")
                .long_about(
                    "Order every reservation by date and print the itinerary with its total cost",
                ),
            Command::new("departments")
                .about("List the known Bolivian departments")
                .long_about("List department names or check the spelling of one"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a tripbook configuration file for errors"),
            Command::new("show-store")
                .about("Show the resolved store backend and location")
                .long_about("Display which backend is used and where reservations are stored"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("tripbook.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
