/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use super::config::FieldNames;
use super::errors::Result;
use super::record::Record;

/// Test type code for compression tests
pub const COMPRESSION: &str = "C";

/// Elongation with compression results made negative
///
/// Plotting tension and compression on one axis is easier when
/// compressive strain sits below zero. An empty elongation is only
/// tolerated by the comparison; parsing it still fails.
pub fn neg_elongation(row: &Record) -> Result<f64> {
    neg_elongation_with(row, &FieldNames::default())
}

/// [`neg_elongation`] reading the columns named in `fields`
pub fn neg_elongation_with(row: &Record, fields: &FieldNames) -> Result<f64> {
    let test_type = row.get(&fields.test_type)?;
    let elongation = row.get(&fields.elongation)?;

    if test_type.trim() == COMPRESSION && !elongation.is_empty() {
        Ok(-row.get_f64(&fields.elongation)?)
    } else {
        row.get_f64(&fields.elongation)
    }
}
