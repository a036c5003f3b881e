/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for row records

use std::io;
use thiserror::Error;

/// Errors that can occur while reading fields of a row
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Field {field:?} is not a number: {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for record operations
pub type Result<T> = std::result::Result<T, RecordError>;
