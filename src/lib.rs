/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # hea-data
//!
//! Cleaning and property helpers for high-entropy alloy (HEA) experiment
//! tables.
//!
//! Raw spreadsheet cells come with ranges (`2-5`), uncertainties
//! (`2$\pm$5`), inequality prefixes (`>2`), free-text processing codes and
//! composition strings. The functions here turn each cell or row into a
//! value that can be grouped, plotted or compared, and estimate density
//! and Young's modulus from composition with the rule of mixtures.
//!
//! Every function is pure and works on one cell or one row at a time.
//!
//! ```
//! use hea_data::{calculate_density, classify_processing_method, normalize_and_alphabetize_formula};
//!
//! assert_eq!(
//!     normalize_and_alphabetize_formula("ZrHfTaNbTi").as_deref(),
//!     Some("Hf1 Nb1 Ta1 Ti1 Zr1")
//! );
//! assert_eq!(calculate_density("HfNbTa").unwrap(), 12.9);
//! assert_eq!(classify_processing_method("AC+A").to_string(), "ANNEAL");
//! ```

pub mod cells;
pub mod classify;
pub mod cli;
pub mod composition;
pub mod elements;
pub mod properties;
pub mod records;
pub mod utils;

pub use cells::{
    average_range, normalize_and_alphabetize_formula, remove_uncertainty,
    standardize_synthesis_method, try_normalize_formula, CellValue,
};
pub use classify::{classify_microstructure, classify_processing_method, ProcessingCategory};
pub use composition::{Composition, CompositionError};
pub use elements::Element;
pub use properties::{calculate_density, calculate_youngs_modulus, PropertyError};
pub use records::{categorize_phases, neg_elongation, FieldNames, PhaseCategory, Record, RecordError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
