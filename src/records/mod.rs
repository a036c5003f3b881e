/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Row-level operations
//!
//! A row is a [`Record`] mapping column names to cell text. The column
//! names default to those of the HEA mechanical-property dataset and can
//! be overridden through [`FieldNames`].

pub mod config;
mod elongation;
pub mod errors;
mod phases;
mod record;

pub use config::FieldNames;
pub use elongation::{neg_elongation, neg_elongation_with, COMPRESSION};
pub use errors::{RecordError, Result};
pub use phases::{categorize_phases, categorize_phases_with, PhaseCategory};
pub use record::Record;
