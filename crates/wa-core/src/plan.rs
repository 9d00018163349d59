//! Rule-based reduction plan built from the heaviest categories.

use serde::Serialize;

use crate::category::Category;
use crate::ledger::CategoryTotal;

/// Number of categories covered by a plan unless configured otherwise.
pub const DEFAULT_PLAN_SIZE: usize = 3;

/// Tips appended to every plan.
pub const GENERAL_TIPS: [&str; 3] = [
    "Conduct regular audits to track progress",
    "Set reduction goals and celebrate achievements",
    "Involve all household members in waste reduction",
];

/// Advice for one of the heaviest categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSection {
    pub category: Category,
    pub weight_grams: f64,
    pub actions: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionPlan {
    pub sections: Vec<PlanSection>,
    pub general_tips: &'static [&'static str],
}

impl ActionPlan {
    /// Takes the first `top_n` totals of a breakdown (heaviest first) and
    /// keeps those with advice.
    pub fn from_breakdown(breakdown: &[CategoryTotal], top_n: usize) -> Self {
        let sections = breakdown
            .iter()
            .take(top_n)
            .filter_map(|total| {
                let category: Category = total.category.parse().ok()?;
                let actions = category.advice();
                if actions.is_empty() {
                    return None;
                }
                Some(PlanSection {
                    category,
                    weight_grams: total.weight_grams,
                    actions,
                })
            })
            .collect();

        Self {
            sections,
            general_tips: &GENERAL_TIPS,
        }
    }
}
