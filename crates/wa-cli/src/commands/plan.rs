//! Action plan command.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use wa_core::{ActionPlan, LedgerError};
use wa_store::CsvStore;

use super::util::{format_grams, load_ledger};

pub const NO_DATA: &str = "No data available to generate action plan.";

/// Formats the human-readable action plan.
pub fn format_plan(plan: &ActionPlan) -> String {
    let rule = "=".repeat(50);
    let mut output = String::new();

    writeln!(output, "{rule}").unwrap();
    writeln!(output, "PERSONALIZED WASTE REDUCTION ACTION PLAN").unwrap();
    writeln!(output, "{rule}").unwrap();

    for section in &plan.sections {
        writeln!(output).unwrap();
        writeln!(
            output,
            "🎯 For {} ({}g):",
            section.category,
            format_grams(section.weight_grams)
        )
        .unwrap();
        for action in section.actions {
            writeln!(output, "  • {action}").unwrap();
        }
    }

    writeln!(output).unwrap();
    writeln!(output, "💡 Additional Tips:").unwrap();
    for tip in plan.general_tips {
        writeln!(output, "  • {tip}").unwrap();
    }
    output
}

pub fn run<W: Write>(writer: &mut W, store: &CsvStore, top_n: usize, json: bool) -> Result<()> {
    let ledger = load_ledger(store)?;
    let plan = match ledger.action_plan(top_n) {
        Ok(plan) => plan,
        Err(LedgerError::EmptyLedger) => {
            writeln!(writer, "{NO_DATA}")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        serde_json::to_writer_pretty(&mut *writer, &plan)?;
        writeln!(writer)?;
    } else {
        write!(writer, "{}", format_plan(&plan))?;
    }
    Ok(())
}
