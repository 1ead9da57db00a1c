//! List command implementation.
//!
//! This module implements the `list` command, which displays stored
//! reservations in insertion order in various formats (table, JSON, CSV,
//! TSV).

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_configured_store, select_format, write_delimited, write_table,
    FormatArg, GlobalOptions,
};
use clap::{Args, ValueEnum};
use std::io::Write;
use tripbook::config::OutputFormat;
use tripbook::store::StoredRecord;
use tripbook::{Reservation, ReservationKind, TripType};

/// Column headers for table, CSV and TSV output.
const COLUMN_HEADERS: [&str; 6] = ["index", "type", "date", "description", "cost", "comments"];

/// List stored reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format (default: `output_format` from configuration, then table)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,

    /// Only show reservations of this type
    #[arg(long = "type", value_enum, value_name = "TYPE")]
    pub filter_type: Option<ReservationFilter>,
}

/// Reservation types accepted by `--type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ReservationFilter {
    /// Flights
    Flight,
    /// Bus trips
    Bus,
    /// Hotel stays
    Hotel,
    /// Restaurant bookings
    Restaurant,
}

impl ReservationFilter {
    fn matches(self, reservation: &Reservation) -> bool {
        match self {
            Self::Flight => reservation.trip_type() == Some(TripType::Flight),
            Self::Bus => reservation.trip_type() == Some(TripType::Bus),
            Self::Hotel => reservation.kind() == ReservationKind::Hotel,
            Self::Restaurant => reservation.kind() == ReservationKind::Restaurant,
        }
    }
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Read every stored record
        let store = open_configured_store(global, &config)?;
        let records = store.load_all()?;

        // 3. Type each record, keeping its insertion index
        let mut listed = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let reservation = record.to_reservation(index)?;
            if self.filter_type.map_or(true, |f| f.matches(&reservation)) {
                listed.push((index, record, reservation));
            }
        }

        // 4. Format and output to stdout
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match select_format(self.format, &config, OutputFormat::Table) {
            OutputFormat::Table => write_table(&mut handle, &COLUMN_HEADERS, &rows(&listed)),
            OutputFormat::Json => {
                let raw: Vec<&StoredRecord> = listed.iter().map(|(_, record, _)| record).collect();
                serde_json::to_writer_pretty(&mut handle, &raw)?;
                writeln!(handle)?;
                Ok(())
            }
            OutputFormat::Csv => write_delimited(handle, &COLUMN_HEADERS, &rows(&listed), b','),
            OutputFormat::Tsv => write_delimited(handle, &COLUMN_HEADERS, &rows(&listed), b'\t'),
        }
    }
}

fn rows(listed: &[(usize, StoredRecord, Reservation)]) -> Vec<Vec<String>> {
    listed
        .iter()
        .map(|(index, _, reservation)| {
            let kind = match reservation.kind() {
                ReservationKind::Trip => reservation
                    .trip_type()
                    .map_or_else(String::new, |t| t.to_string()),
                ReservationKind::Hotel => "hotel".to_string(),
                ReservationKind::Restaurant => "restaurant".to_string(),
            };
            vec![
                index.to_string(),
                kind,
                reservation.date_label(),
                reservation.describe(),
                reservation.cost().to_string(),
                reservation.comments().unwrap_or_default().to_string(),
            ]
        })
        .collect()
}
