//! Main entry point for the tripbook CLI.
//!
//! Records reservations for flights, bus trips, hotel stays and restaurant
//! bookings, and summarizes them as a trip report:
//! - `reserve-flight`, `reserve-bus`: record a trip between departments
//! - `reserve-hotel`: record a hotel stay
//! - `reserve-restaurant`: record a restaurant booking
//! - `list`, `report`: inspect what has been recorded

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    tripbook::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        store: cli.store,
    };

    let result = match cli.command {
        cli::Command::ReserveFlight(cmd) => cmd.execute(&global),
        cli::Command::ReserveBus(cmd) => cmd.execute(&global),
        cli::Command::ReserveHotel(cmd) => cmd.execute(&global),
        cli::Command::ReserveRestaurant(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Report(cmd) => cmd.execute(&global),
        cli::Command::Departments(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::ShowStore(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
