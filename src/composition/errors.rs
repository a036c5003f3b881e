/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for formula parsing

use thiserror::Error;

/// Errors that can occur while parsing a chemical formula
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompositionError {
    #[error("Empty formula")]
    EmptyFormula,

    #[error("Invalid formula {formula:?}: unexpected {remainder:?}")]
    InvalidFormula { formula: String, remainder: String },

    #[error("Unknown element symbol {symbol:?} in {formula:?}")]
    UnknownElement { formula: String, symbol: String },

    #[error("Invalid amount {amount:?} for {symbol} in {formula:?}")]
    InvalidAmount {
        formula: String,
        symbol: String,
        amount: String,
    },
}

/// Result type for composition operations
pub type Result<T> = std::result::Result<T, CompositionError>;
