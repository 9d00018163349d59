//! In-memory waste ledger and its aggregation queries.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::entry::{NewEntry, WasteEntry};
use crate::error::LedgerError;
use crate::plan::ActionPlan;
use crate::report::SummaryReport;

/// Total weight for one category label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub weight_grams: f64,
}

impl CategoryTotal {
    /// Share of `total` in percent. Callers must check `total > 0`.
    pub fn percent_of(&self, total: f64) -> f64 {
        self.weight_grams / total * 100.0
    }
}

/// Total weight for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: String,
    pub weight_grams: f64,
}

/// Ordered collection of all entries for the current session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WasteLedger {
    entries: Vec<WasteEntry>,
}

impl WasteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[WasteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validates and appends a new entry dated today when no date is given.
    pub fn add_entry(&mut self, input: NewEntry) -> Result<&WasteEntry, LedgerError> {
        self.add_entry_on(input, Local::now().date_naive())
    }

    /// Validates and appends a new entry, using `today` as the default date.
    ///
    /// On error the ledger is unchanged.
    pub fn add_entry_on(
        &mut self,
        input: NewEntry,
        today: NaiveDate,
    ) -> Result<&WasteEntry, LedgerError> {
        let entry = input.validate(today)?;
        tracing::debug!(
            date = %entry.date,
            category = %entry.category,
            weight_grams = entry.weight_grams,
            "entry added"
        );
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Replaces every entry, returning the previous ones.
    pub fn replace(&mut self, entries: Vec<WasteEntry>) -> Vec<WasteEntry> {
        tracing::debug!(
            previous = self.entries.len(),
            current = entries.len(),
            "ledger replaced"
        );
        std::mem::replace(&mut self.entries, entries)
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|e| e.weight_grams).sum()
    }

    /// Per-category totals, heaviest first. Ties keep first-seen order.
    pub fn category_breakdown(&self) -> Vec<CategoryTotal> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut totals: Vec<CategoryTotal> = Vec::new();

        for entry in &self.entries {
            let pos = *positions.entry(entry.category.as_str()).or_insert_with(|| {
                totals.push(CategoryTotal {
                    category: entry.category.clone(),
                    weight_grams: 0.0,
                });
                totals.len() - 1
            });
            totals[pos].weight_grams += entry.weight_grams;
        }

        // sort_by is stable
        totals.sort_by(|a, b| b.weight_grams.total_cmp(&a.weight_grams));
        totals
    }

    /// Per-date totals, ordered by date.
    pub fn daily_totals(&self) -> Vec<DailyTotal> {
        let mut by_date: BTreeMap<&str, f64> = BTreeMap::new();
        for entry in &self.entries {
            *by_date.entry(entry.date.as_str()).or_default() += entry.weight_grams;
        }
        by_date
            .into_iter()
            .map(|(date, weight_grams)| DailyTotal {
                date: date.to_string(),
                weight_grams,
            })
            .collect()
    }

    /// Number of unique dates.
    pub fn distinct_day_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.date.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Total weight divided by the number of days, or zero without days.
    #[expect(clippy::cast_precision_loss, reason = "day counts never approach 2^52")]
    pub fn daily_average(&self) -> f64 {
        match self.distinct_day_count() {
            0 => 0.0,
            days => self.total_weight() / days as f64,
        }
    }

    /// Builds the summary report.
    pub fn summary_report(&self) -> Result<SummaryReport, LedgerError> {
        if self.is_empty() {
            return Err(LedgerError::EmptyLedger);
        }
        Ok(SummaryReport::from_ledger(self))
    }

    /// Builds the action plan for the `top_n` heaviest categories.
    pub fn action_plan(&self, top_n: usize) -> Result<ActionPlan, LedgerError> {
        if self.is_empty() {
            return Err(LedgerError::EmptyLedger);
        }
        Ok(ActionPlan::from_breakdown(&self.category_breakdown(), top_n))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use crate::error::InvalidInput;

    pub(crate) fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    pub(crate) fn new_entry(category: usize, item: &str, weight: &str) -> NewEntry {
        NewEntry {
            category: category.to_string(),
            item: item.to_string(),
            weight: weight.to_string(),
            ..NewEntry::default()
        }
    }

    pub(crate) fn dated(date: &str, category: usize, weight: &str) -> NewEntry {
        NewEntry {
            date: date.to_string(),
            ..new_entry(category, "item", weight)
        }
    }

    pub(crate) fn sample_ledger() -> WasteLedger {
        let mut ledger = WasteLedger::new();
        ledger.add_entry_on(new_entry(3, "banana peel", "150"), day(1)).unwrap();
        ledger.add_entry_on(new_entry(2, "bag", "50"), day(1)).unwrap();
        ledger
    }

    #[test]
    fn banana_and_bag_scenario() {
        let ledger = sample_ledger();

        assert!((ledger.total_weight() - 200.0).abs() < 1e-9);
        assert_eq!(
            ledger.category_breakdown(),
            vec![
                CategoryTotal {
                    category: "Food Scraps".to_string(),
                    weight_grams: 150.0,
                },
                CategoryTotal {
                    category: "Plastic Film".to_string(),
                    weight_grams: 50.0,
                },
            ]
        );
        assert_eq!(ledger.distinct_day_count(), 1);
        assert!((ledger.daily_average() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn empty_ledger_aggregates_to_zero() {
        let ledger = WasteLedger::new();
        assert!(ledger.total_weight().abs() < f64::EPSILON);
        assert!(ledger.category_breakdown().is_empty());
        assert!(ledger.daily_totals().is_empty());
        assert_eq!(ledger.distinct_day_count(), 0);
        assert!(ledger.daily_average().abs() < f64::EPSILON);
    }

    #[test]
    fn total_weight_matches_added_weights() {
        let weights = ["12.5", "0", "300", "7.25", "1000"];
        let mut ledger = WasteLedger::new();
        for (i, w) in weights.iter().enumerate() {
            ledger.add_entry_on(new_entry(i % 7 + 1, "x", w), day(1)).unwrap();
        }
        let expected: f64 = weights.iter().map(|w| w.parse::<f64>().unwrap()).sum();
        assert!((ledger.total_weight() - expected).abs() < 1e-9);
        assert_eq!(ledger.len(), weights.len());
    }

    #[test]
    fn invalid_category_leaves_ledger_unchanged() {
        let mut ledger = sample_ledger();
        let before = ledger.clone();

        let err = ledger
            .add_entry_on(new_entry(99, "mystery", "10"), day(2))
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::InvalidInput(InvalidInput::CategoryOutOfRange { index: 99, count: 7 })
        );
        assert_eq!(ledger, before);

        let mut empty = WasteLedger::new();
        assert!(empty.add_entry_on(new_entry(99, "mystery", "10"), day(2)).is_err());
        assert!(empty.is_empty());
    }

    #[test]
    fn invalid_weight_leaves_ledger_unchanged() {
        let mut ledger = sample_ledger();
        assert!(ledger.add_entry_on(new_entry(1, "box", "lots"), day(2)).is_err());
        assert!(ledger.add_entry_on(new_entry(1, "box", "-1"), day(2)).is_err());
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn breakdown_percentages_sum_to_hundred() {
        let mut ledger = WasteLedger::new();
        let weights = [(1, "33.3"), (2, "12"), (3, "470"), (1, "1.1"), (6, "88")];
        for (category, weight) in weights {
            ledger.add_entry_on(new_entry(category, "x", weight), day(1)).unwrap();
        }
        let total = ledger.total_weight();
        let sum: f64 = ledger
            .category_breakdown()
            .iter()
            .map(|c| c.percent_of(total))
            .sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn breakdown_groups_and_sorts_descending() {
        let mut ledger = WasteLedger::new();
        ledger.add_entry_on(new_entry(1, "tray", "40"), day(1)).unwrap();
        ledger.add_entry_on(new_entry(3, "peel", "30"), day(1)).unwrap();
        ledger.add_entry_on(new_entry(1, "box", "5"), day(2)).unwrap();
        ledger.add_entry_on(new_entry(3, "core", "100"), day(2)).unwrap();

        let breakdown = ledger.category_breakdown();
        let labels: Vec<_> = breakdown.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(labels, ["Food Scraps", "Food Packaging"]);
        assert!((breakdown[0].weight_grams - 130.0).abs() < 1e-9);
        assert!((breakdown[1].weight_grams - 45.0).abs() < 1e-9);
    }

    #[test]
    fn breakdown_ties_keep_first_seen_order() {
        let mut ledger = WasteLedger::new();
        ledger.add_entry_on(new_entry(5, "cup", "10"), day(1)).unwrap();
        ledger.add_entry_on(new_entry(2, "wrap", "10"), day(1)).unwrap();
        ledger.add_entry_on(new_entry(4, "razor", "10"), day(1)).unwrap();

        let labels: Vec<_> = ledger
            .category_breakdown()
            .into_iter()
            .map(|c| c.category)
            .collect();
        assert_eq!(labels, ["Other Plastics", "Plastic Film", "Personal Care"]);
    }

    #[test]
    fn daily_totals_are_ordered_by_date() {
        let mut ledger = WasteLedger::new();
        ledger.add_entry_on(dated("2025-03-05", 1, "10"), day(9)).unwrap();
        ledger.add_entry_on(dated("2025-03-02", 2, "20"), day(9)).unwrap();
        ledger.add_entry_on(dated("2025-03-05", 3, "5"), day(9)).unwrap();

        let totals = ledger.daily_totals();
        assert_eq!(
            totals,
            vec![
                DailyTotal {
                    date: "2025-03-02".to_string(),
                    weight_grams: 20.0,
                },
                DailyTotal {
                    date: "2025-03-05".to_string(),
                    weight_grams: 15.0,
                },
            ]
        );
        assert_eq!(ledger.distinct_day_count(), 2);
        assert!((ledger.daily_average() - 17.5).abs() < 1e-9);
    }

    #[test]
    fn replace_swaps_all_entries() {
        let mut ledger = sample_ledger();
        let previous = ledger.replace(Vec::new());
        assert_eq!(previous.len(), 2);
        assert!(ledger.is_empty());
    }

    #[test]
    fn empty_ledger_reports_are_rejected() {
        let ledger = WasteLedger::new();
        assert_eq!(ledger.summary_report().unwrap_err(), LedgerError::EmptyLedger);
        assert_eq!(ledger.action_plan(3).unwrap_err(), LedgerError::EmptyLedger);
    }
}
