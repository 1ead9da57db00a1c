//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, DepartmentsCommand, ListCommand, ReportCommand, ReserveBusCommand,
    ReserveFlightCommand, ReserveHotelCommand, ReserveRestaurantCommand, ShowStoreCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Record travel reservations and build trip reports.
#[derive(Parser)]
#[command(name = "tripbook")]
#[command(version, about = "Record travel reservations and build trip reports", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "TRIPBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the reservation store file
    #[arg(long, value_name = "PATH", global = true, env = "TRIPBOOK_STORE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Reserve a flight between two departments
    ReserveFlight(ReserveFlightCommand),

    /// Reserve a bus trip between two departments
    ReserveBus(ReserveBusCommand),

    /// Reserve a hotel stay
    ReserveHotel(ReserveHotelCommand),

    /// Reserve a table at a restaurant
    ReserveRestaurant(ReserveRestaurantCommand),

    /// List stored reservations in insertion order
    List(ListCommand),

    /// Build the chronological trip report
    Report(ReportCommand),

    /// List the known Bolivian departments
    Departments(DepartmentsCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Show the resolved store backend and location
    ShowStore(ShowStoreCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
