//! Waste entries and the raw input they are built from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::InvalidInput;

/// Date format used for entry dates and the ledger file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One logged disposal event.
///
/// Fields are kept as text so that permissively loaded rows survive a
/// save/load cycle unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteEntry {
    pub date: String,
    pub category: String,
    pub item: String,
    pub weight_grams: f64,
    #[serde(default)]
    pub notes: String,
}

impl WasteEntry {
    /// Resolves the category label against the fixed set.
    pub fn known_category(&self) -> Option<Category> {
        self.category.parse().ok()
    }

    /// Checks an entry that did not come through [`NewEntry::validate`],
    /// such as a row read from a file.
    pub fn check(&self) -> Result<(), InvalidInput> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .map_err(|_| InvalidInput::Date(self.date.clone()))?;
        if self.known_category().is_none() {
            return Err(InvalidInput::UnknownCategory(self.category.clone()));
        }
        if !self.weight_grams.is_finite() {
            return Err(InvalidInput::WeightNotNumber(self.weight_grams.to_string()));
        }
        if self.weight_grams < 0.0 {
            return Err(InvalidInput::NegativeWeight(self.weight_grams));
        }
        Ok(())
    }
}

/// Raw, unvalidated input for a new entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntry {
    /// `YYYY-MM-DD`, or empty for today.
    pub date: String,
    /// 1-based category menu selection.
    pub category: String,
    pub item: String,
    /// Weight in grams.
    pub weight: String,
    pub notes: String,
}

impl NewEntry {
    /// Validates the input, using `today` when no date was given.
    pub fn validate(self, today: NaiveDate) -> Result<WasteEntry, InvalidInput> {
        let category = parse_category(&self.category)?;
        let date = parse_date(&self.date, today)?;
        let weight_grams = parse_weight(&self.weight)?;

        Ok(WasteEntry {
            date: date.format(DATE_FORMAT).to_string(),
            category: category.label().to_string(),
            item: self.item.trim().to_string(),
            weight_grams,
            notes: self.notes.trim().to_string(),
        })
    }
}

/// Resolves a 1-based category menu selection.
pub fn parse_category(input: &str) -> Result<Category, InvalidInput> {
    let input = input.trim();
    let index: usize = input
        .parse()
        .map_err(|_| InvalidInput::CategoryNotNumber(input.to_string()))?;
    Category::from_index(index).ok_or(InvalidInput::CategoryOutOfRange {
        index,
        count: Category::ALL.len(),
    })
}

fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate, InvalidInput> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(today);
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| InvalidInput::Date(input.to_string()))
}

/// Parses a finite, non-negative weight in grams.
pub fn parse_weight(input: &str) -> Result<f64, InvalidInput> {
    let input = input.trim();
    let weight: f64 = input
        .parse()
        .map_err(|_| InvalidInput::WeightNotNumber(input.to_string()))?;
    if !weight.is_finite() {
        return Err(InvalidInput::WeightNotNumber(input.to_string()));
    }
    if weight < 0.0 {
        return Err(InvalidInput::NegativeWeight(weight));
    }
    Ok(weight)
}
