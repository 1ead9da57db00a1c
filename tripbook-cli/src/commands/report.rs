//! Report command implementation.
//!
//! Builds the chronological trip report from every stored reservation and
//! prints it. JSON is the default so the output can be fed to other tools;
//! the table form adds a closing total line.

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_configured_store, select_format, write_delimited, write_table,
    FormatArg, GlobalOptions,
};
use clap::Args;
use std::io::Write;
use tripbook::config::OutputFormat;
use tripbook::{build_report_from_store, TripReport};

const COLUMN_HEADERS: [&str; 4] = ["date", "activity", "cost", "comment"];

/// Build the trip report.
#[derive(Args)]
pub struct ReportCommand {
    /// Output format (default: `output_format` from configuration, then json)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,

    /// Print only the total cost
    #[arg(long, conflicts_with = "format")]
    pub total_only: bool,
}

impl ReportCommand {
    /// Execute the report command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_configured_store(global, &config)?;
        let report = build_report_from_store(&*store)?;

        if self.total_only {
            println!("{}", report.total_cost);
            return Ok(());
        }

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match select_format(self.format, &config, OutputFormat::Json) {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, &report)?;
                writeln!(handle)?;
                Ok(())
            }
            OutputFormat::Table => {
                write_table(&mut handle, &COLUMN_HEADERS, &rows(&report))?;
                writeln!(handle, "TOTAL\t-\t{}\t-", report.total_cost)?;
                Ok(())
            }
            OutputFormat::Csv => write_delimited(handle, &COLUMN_HEADERS, &rows(&report), b','),
            OutputFormat::Tsv => write_delimited(handle, &COLUMN_HEADERS, &rows(&report), b'\t'),
        }
    }
}

fn rows(report: &TripReport) -> Vec<Vec<String>> {
    report
        .activities
        .iter()
        .map(|activity| {
            vec![
                activity.date.clone(),
                activity.name.clone(),
                activity.cost.to_string(),
                activity.comment.clone(),
            ]
        })
        .collect()
}
