/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Categorical labels derived from free-text columns

mod microstructure;
mod processing;

pub use microstructure::{
    classify_microstructure, is_valid_phase, OTHER, SECONDARY_SUFFIX, VALID_PHASES,
};
pub use processing::{classify_processing_method, ProcessingCategory};
