//! Core domain logic for the household waste audit.
//!
//! This crate contains the fundamental types and logic for:
//! - Categories: the fixed category set and its reduction advice
//! - Ledger: validated entry insertion and group-by aggregation
//! - Reports: summary report and top-N action plan

pub mod category;
mod entry;
mod error;
mod ledger;
mod plan;
mod report;

pub use category::{Category, UnknownCategory};
pub use entry::{DATE_FORMAT, NewEntry, WasteEntry, parse_category, parse_weight};
pub use error::{InvalidInput, LedgerError};
pub use ledger::{CategoryTotal, DailyTotal, WasteLedger};
pub use plan::{ActionPlan, DEFAULT_PLAN_SIZE, GENERAL_TIPS, PlanSection};
pub use report::{CategoryShare, SummaryReport};
