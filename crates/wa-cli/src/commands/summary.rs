//! Summary report command.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use wa_core::{LedgerError, SummaryReport};
use wa_store::CsvStore;

use super::util::{format_grams, format_whole_grams, load_ledger};

pub const NO_DATA: &str = "No data available. Please add some waste entries first.";

/// Formats the human-readable summary report.
pub fn format_summary(report: &SummaryReport) -> String {
    let rule = "=".repeat(50);
    let mut output = String::new();

    writeln!(output, "{rule}").unwrap();
    writeln!(output, "WASTE AUDIT SUMMARY REPORT").unwrap();
    writeln!(output, "{rule}").unwrap();
    writeln!(
        output,
        "Total Waste: {} grams ({:.2} kg)",
        format_grams(report.total_grams),
        report.total_kg
    )
    .unwrap();

    writeln!(output).unwrap();
    writeln!(output, "--- Waste by Category ---").unwrap();
    for share in &report.categories {
        writeln!(
            output,
            "{}: {}g ({:.1}%)",
            share.category,
            format_grams(share.weight_grams),
            share.percent
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    writeln!(
        output,
        "Daily Average: {} grams",
        format_whole_grams(report.daily_average_grams)
    )
    .unwrap();
    writeln!(output, "Data collected over {} days", report.day_count).unwrap();
    output
}

pub fn run<W: Write>(writer: &mut W, store: &CsvStore, json: bool) -> Result<()> {
    let ledger = load_ledger(store)?;
    let report = match ledger.summary_report() {
        Ok(report) => report,
        Err(LedgerError::EmptyLedger) => {
            writeln!(writer, "{NO_DATA}")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)?;
    } else {
        write!(writer, "{}", format_summary(&report))?;
    }
    Ok(())
}
