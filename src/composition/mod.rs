/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Chemical composition module
//!
//! Parses alloy formulas into element amounts and renders them back in
//! a canonical, alphabetical form.

pub mod errors;
mod model;
mod parser;

pub use errors::{CompositionError, Result};
pub use model::{format_amount, Composition, AMOUNT_TOLERANCE};
