/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Single-cell cleaning functions
//!
//! Each function takes the text of one spreadsheet cell and returns its
//! normalized form. None of them depend on each other; callers apply
//! them column by column.

mod formula;
mod range;
mod synthesis;
mod uncertainty;

pub use formula::{normalize_and_alphabetize_formula, try_normalize_formula};
pub use range::{average_range, CellValue};
pub use synthesis::standardize_synthesis_method;
pub use uncertainty::{remove_uncertainty, UNCERTAINTY_MARKER};
