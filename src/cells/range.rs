/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Range averaging for cells such as `2-5`

use crate::utils::mean;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static INTEGER_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+-\d+$").expect("range pattern compiles"));

/// A cleaned cell that is either a number or left as text
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// Replace an integer range `a-b` with its midpoint
///
/// Whitespace is removed first, so ` 2 - 5 ` also averages to `3.5`.
/// Anything that is not exactly two integers joined by a hyphen is
/// returned as the whitespace-free text.
pub fn average_range(cell: &str) -> CellValue {
    let compact: String = cell.chars().filter(|c| !c.is_whitespace()).collect();
    if !INTEGER_RANGE.is_match(&compact) {
        return CellValue::Text(compact);
    }

    let bounds: Vec<f64> = compact
        .split('-')
        .filter_map(|part| part.parse::<f64>().ok())
        .collect();
    match mean(&bounds) {
        Some(midpoint) => CellValue::Number(midpoint),
        None => CellValue::Text(compact),
    }
}
