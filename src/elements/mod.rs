/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Element data module
//!
//! This module provides per-element properties used by the composition
//! parser and the rule-of-mixtures estimates.

pub mod database;
mod element;

pub use database::{atomic_number_from_symbol, element_symbol, ElementRecord};
pub use element::Element;
