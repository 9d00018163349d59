//! Shared utilities for CLI commands.

use anyhow::{Context, Result};
use wa_core::WasteLedger;
use wa_store::CsvStore;

/// Opens the ledger file behind `store` for a one-shot command.
pub fn load_ledger(store: &CsvStore) -> Result<WasteLedger> {
    let mut ledger = WasteLedger::new();
    store
        .load_into(&mut ledger)
        .with_context(|| format!("failed to load {}", store.path().display()))?;
    Ok(ledger)
}

/// Formats grams with thousands separators and one decimal, e.g. "1,234.5".
pub fn format_grams(grams: f64) -> String {
    group_thousands(&format!("{grams:.1}"))
}

/// Formats grams rounded to a whole number, e.g. "1,235".
pub fn format_whole_grams(grams: f64) -> String {
    group_thousands(&format!("{grams:.0}"))
}

fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = formatted
        .strip_prefix('-')
        .map_or(("", formatted), |rest| ("-", rest));
    let (int_part, frac_part) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(i, f)| (i, Some(f)));

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Generates a fixed-width bar for `value` out of `max`.
/// Non-zero values below 5% of max get a single block for visibility.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "bar widths are small and the filled count is clamped to width"
)]
pub fn progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let ratio = value / max;
    let filled = if ratio < 0.05 {
        1
    } else {
        ((ratio * width as f64).round() as usize).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
