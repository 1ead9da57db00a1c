//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, store resolution, output format
//! selection and record printing.

use crate::error::CliError;
use clap::ValueEnum;
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use tripbook::config::{OutputFormat, StoreConfig};
use tripbook::store::{open_store, resolve_store_path, ReservationStore, StoredRecord};
use tripbook::{BookingDesk, Config, ConfigBuilder, Reservation};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the reservation store file.
    pub store: Option<PathBuf>,
}

/// Output format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => Self::Table,
            FormatArg::Json => Self::Json,
            FormatArg::Csv => Self::Csv,
            FormatArg::Tsv => Self::Tsv,
        }
    }
}

/// Picks the output format: the flag, then `output_format` from the
/// configuration, then `fallback`.
pub fn select_format(
    flag: Option<FormatArg>,
    config: &Config,
    fallback: OutputFormat,
) -> OutputFormat {
    flag.map(OutputFormat::from)
        .or(config.output_format)
        .unwrap_or(fallback)
}

/// Load configuration from files, the environment and global options.
///
/// `--store` is applied last so it beats every configured `store.path`.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    if let Some(ref store) = global.store {
        let path = absolutize(store)?;
        builder = builder.with_config(Config {
            store: Some(StoreConfig {
                path: Some(path),
                ..StoreConfig::default()
            }),
            ..Config::default()
        });
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the configured store location.
pub fn resolve_store(global: &GlobalOptions, config: &Config) -> Result<PathBuf, CliError> {
    resolve_store_path(config, global.data_dir.as_deref()).map_err(CliError::from)
}

/// Open the configured reservation store.
pub fn open_configured_store(
    global: &GlobalOptions,
    config: &Config,
) -> Result<Box<dyn ReservationStore>, CliError> {
    open_store(config, global.data_dir.as_deref()).map_err(CliError::from)
}

/// Load the configuration and open a booking desk on the configured store.
pub fn open_booking_desk(
    global: &GlobalOptions,
) -> Result<BookingDesk<Box<dyn ReservationStore>>, CliError> {
    let config = load_configuration(global)?;
    let store = open_configured_store(global, &config)?;
    Ok(BookingDesk::new(store, config))
}

/// Make a path absolute against the current directory without touching the
/// filesystem.
fn absolutize(path: &Path) -> Result<PathBuf, CliError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

/// Print the stored form of a reservation as pretty JSON on stdout.
pub fn print_record(reservation: &Reservation) -> Result<(), CliError> {
    let record = StoredRecord::from_reservation(reservation)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

/// Write rows as a tab-separated table with an uppercase header line.
pub fn write_table<W: Write>(
    out: &mut W,
    headers: &[&str],
    rows: &[Vec<String>],
) -> Result<(), CliError> {
    let header_line = headers
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;

    for row in rows {
        let cells: Vec<&str> = row
            .iter()
            .map(|cell| if cell.is_empty() { "-" } else { cell.as_str() })
            .collect();
        writeln!(out, "{}", cells.join("\t"))?;
    }
    Ok(())
}

/// Write rows as delimited output (CSV or TSV) with a header record.
pub fn write_delimited<W: Write>(
    out: W,
    headers: &[&str],
    rows: &[Vec<String>],
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
