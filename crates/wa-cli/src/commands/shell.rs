//! Interactive menu loop driving a [`WasteLedger`].
//!
//! The shell owns the session ledger. Every operation runs to completion
//! before the next prompt, and no error ends the loop: invalid input and
//! file problems are reported and the menu is shown again.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use wa_core::{
    Category, InvalidInput, LedgerError, NewEntry, WasteLedger, parse_category, parse_weight,
};
use wa_store::{CsvStore, StoreError};

use super::{chart, plan, summary};
use crate::Config;

const MENU: &str = "\
Options:
1. Add waste entry
2. Show summary report
3. View charts
4. Generate action plan
5. Save data
6. Load data
7. Exit";

const DATE_PROMPT: &str = "Enter date (YYYY-MM-DD) or press enter for today: ";

/// Menu-driven session over one ledger.
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: Config,
    ledger: WasteLedger,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
            ledger: WasteLedger::new(),
        }
    }

    pub const fn ledger(&self) -> &WasteLedger {
        &self.ledger
    }

    /// Runs until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "🏠 HOUSEHOLD WASTE AUDIT TOOL")?;
        writeln!(
            self.output,
            "Track your waste and get a personalized reduction plan!"
        )?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("\nEnter your choice (1-7): ")? else {
                break;
            };
            tracing::debug!(choice = %choice, "menu choice");

            match choice.as_str() {
                "1" => self.add_entry()?,
                "2" => self.show_summary()?,
                "3" => self.show_charts()?,
                "4" => self.show_plan()?,
                "5" => self.save()?,
                "6" => self.load()?,
                "7" => {
                    writeln!(
                        self.output,
                        "Thank you for using the Household Waste Audit Tool!"
                    )?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
        Ok(())
    }

    /// Prints `message` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add_entry(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Adding new waste entry:")?;
        writeln!(self.output, "Available Categories:")?;
        for (i, category) in Category::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {category}", i + 1)?;
        }

        // Category and weight are rejected as soon as they are read.
        let Some(date) = self.prompt(DATE_PROMPT)? else {
            return Ok(());
        };
        let Some(category) = self.prompt("Enter category number: ")? else {
            return Ok(());
        };
        if let Err(err) = parse_category(&category) {
            return self.reject(&err);
        }
        let Some(item) = self.prompt("Enter item description: ")? else {
            return Ok(());
        };
        let Some(weight) = self.prompt("Enter weight in grams: ")? else {
            return Ok(());
        };
        if let Err(err) = parse_weight(&weight) {
            return self.reject(&err);
        }
        let Some(notes) = self.prompt("Enter any notes (optional): ")? else {
            return Ok(());
        };

        let input = NewEntry {
            date,
            category,
            item,
            weight,
            notes,
        };
        match self.ledger.add_entry(input) {
            Ok(entry) => writeln!(
                self.output,
                "✓ Added: {:?}g of {} ({})",
                entry.weight_grams, entry.item, entry.category
            ),
            Err(LedgerError::InvalidInput(err)) => self.reject(&err),
            Err(err) => writeln!(self.output, "Could not add entry: {err}"),
        }
    }

    fn reject(&mut self, err: &InvalidInput) -> io::Result<()> {
        tracing::debug!(error = %err, "entry rejected");
        writeln!(self.output, "{}", rejection_message(err))
    }

    fn show_summary(&mut self) -> io::Result<()> {
        match self.ledger.summary_report() {
            Ok(report) => {
                writeln!(self.output)?;
                write!(self.output, "{}", summary::format_summary(&report))
            }
            Err(_) => writeln!(self.output, "{}", summary::NO_DATA),
        }
    }

    fn show_charts(&mut self) -> io::Result<()> {
        if self.ledger.is_empty() {
            return writeln!(self.output, "{}", chart::NO_DATA);
        }
        writeln!(self.output)?;
        write!(self.output, "{}", chart::format_charts(&self.ledger))
    }

    fn show_plan(&mut self) -> io::Result<()> {
        match self.ledger.action_plan(self.config.plan_size) {
            Ok(action_plan) => {
                writeln!(self.output)?;
                write!(self.output, "{}", plan::format_plan(&action_plan))
            }
            Err(_) => writeln!(self.output, "{}", plan::NO_DATA),
        }
    }

    fn save(&mut self) -> io::Result<()> {
        if self.ledger.is_empty() {
            return writeln!(self.output, "No data to save.");
        }
        let message = format!(
            "Enter filename (or press enter for '{}'): ",
            self.config.data_file.display()
        );
        let Some(store) = self.prompt_store(&message)? else {
            return Ok(());
        };

        match store.save(&self.ledger) {
            Ok(_) => writeln!(self.output, "Data saved to {}", store.path().display()),
            Err(StoreError::NothingToSave) => writeln!(self.output, "No data to save."),
            Err(err) => {
                tracing::warn!(error = %err, "save failed");
                writeln!(self.output, "Could not save data: {err}")
            }
        }
    }

    fn load(&mut self) -> io::Result<()> {
        let message = format!(
            "Enter filename to load (or press enter for '{}'): ",
            self.config.data_file.display()
        );
        let Some(store) = self.prompt_store(&message)? else {
            return Ok(());
        };

        match store.load_into(&mut self.ledger) {
            Ok(count) => writeln!(
                self.output,
                "Data loaded from {} ({count} entries)",
                store.path().display()
            ),
            Err(StoreError::NotFound(path)) => {
                writeln!(self.output, "File {} not found.", path.display())
            }
            Err(err) => {
                tracing::warn!(error = %err, "load failed");
                writeln!(self.output, "Could not load data: {err}")
            }
        }
    }

    fn prompt_store(&mut self, message: &str) -> io::Result<Option<CsvStore>> {
        let Some(name) = self.prompt(message)? else {
            return Ok(None);
        };
        let path = if name.is_empty() {
            self.config.data_file.clone()
        } else {
            PathBuf::from(name)
        };
        Ok(Some(self.config.store(Some(&path))))
    }
}

fn rejection_message(err: &InvalidInput) -> String {
    match err {
        InvalidInput::CategoryNotNumber(_)
        | InvalidInput::CategoryOutOfRange { .. }
        | InvalidInput::UnknownCategory(_) => format!("Invalid category selection ({err})."),
        InvalidInput::WeightNotNumber(_) | InvalidInput::NegativeWeight(_) => {
            "Invalid weight. Please enter a non-negative number.".to_string()
        }
        InvalidInput::Date(_) => "Invalid date. Please use YYYY-MM-DD.".to_string(),
    }
}
