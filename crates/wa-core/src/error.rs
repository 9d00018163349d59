//! Error types for ledger operations.

use thiserror::Error;

/// Entry fields rejected by validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    /// Category selection was not a number.
    #[error("invalid category selection: {0:?} is not a number")]
    CategoryNotNumber(String),
    /// Category label outside the fixed set.
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),
    /// Category selection outside `1..=count`.
    #[error("invalid category selection: {index} is not between 1 and {count}")]
    CategoryOutOfRange { index: usize, count: usize },
    /// Weight was not a finite number.
    #[error("invalid weight: {0:?} is not a number")]
    WeightNotNumber(String),
    /// Weight was below zero.
    #[error("invalid weight: {0} is negative")]
    NegativeWeight(f64),
    /// Date was not `YYYY-MM-DD`.
    #[error("invalid date: {0:?}, expected YYYY-MM-DD")]
    Date(String),
}

/// Ledger errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    /// A read operation needs at least one entry.
    #[error("no data available")]
    EmptyLedger,
}
