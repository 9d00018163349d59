//! Summary report over a ledger.

use serde::Serialize;

use crate::ledger::WasteLedger;

/// One category line of the summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub weight_grams: f64,
    pub percent: f64,
}

/// Totals, per-category shares and daily average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub total_grams: f64,
    pub total_kg: f64,
    /// Heaviest first.
    pub categories: Vec<CategoryShare>,
    pub daily_average_grams: f64,
    pub day_count: usize,
}

impl SummaryReport {
    /// Builds the report. The ledger must not be empty.
    pub(crate) fn from_ledger(ledger: &WasteLedger) -> Self {
        let total_grams = ledger.total_weight();
        let categories = ledger
            .category_breakdown()
            .into_iter()
            .map(|c| CategoryShare {
                // a ledger of zero-weight entries has no meaningful shares
                percent: if total_grams > 0.0 {
                    c.percent_of(total_grams)
                } else {
                    0.0
                },
                category: c.category,
                weight_grams: c.weight_grams,
            })
            .collect();

        Self {
            total_grams,
            total_kg: total_grams / 1000.0,
            categories,
            daily_average_grams: ledger.daily_average(),
            day_count: ledger.distinct_day_count(),
        }
    }
}
