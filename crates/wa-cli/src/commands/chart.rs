//! Text charts: category composition and daily totals.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use wa_core::WasteLedger;
use wa_store::CsvStore;

use super::util::{format_grams, load_ledger, progress_bar};

pub const NO_DATA: &str = "No data available for visualization.";

const BAR_WIDTH: usize = 20;

/// Formats both charts. The ledger must not be empty.
pub fn format_charts(ledger: &WasteLedger) -> String {
    let mut output = String::new();
    let total = ledger.total_weight();
    let breakdown = ledger.category_breakdown();
    let label_width = breakdown
        .iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(0);

    writeln!(output, "WASTE COMPOSITION BY CATEGORY").unwrap();
    writeln!(output, "─────────────────────────────").unwrap();
    for share in &breakdown {
        let percent = if total > 0.0 {
            share.percent_of(total)
        } else {
            0.0
        };
        writeln!(
            output,
            "{:<label_width$}  {}  {percent:>5.1}%",
            share.category,
            progress_bar(share.weight_grams, total, BAR_WIDTH),
        )
        .unwrap();
    }

    // Days are numbered in date order so the axis labels match the values.
    let daily = ledger.daily_totals();
    let max_day = daily.iter().map(|d| d.weight_grams).fold(0.0, f64::max);
    let index_width = daily.len().to_string().len();

    writeln!(output).unwrap();
    writeln!(output, "DAILY WASTE GENERATION").unwrap();
    writeln!(output, "──────────────────────").unwrap();
    for (i, day) in daily.iter().enumerate() {
        writeln!(
            output,
            "Day {:>index_width$}  {}  {}  {}g",
            i + 1,
            day.date,
            progress_bar(day.weight_grams, max_day, BAR_WIDTH),
            format_grams(day.weight_grams),
        )
        .unwrap();
    }
    output
}

pub fn run<W: Write>(writer: &mut W, store: &CsvStore) -> Result<()> {
    let ledger = load_ledger(store)?;
    if ledger.is_empty() {
        writeln!(writer, "{NO_DATA}")?;
        return Ok(());
    }
    write!(writer, "{}", format_charts(&ledger))?;
    Ok(())
}
