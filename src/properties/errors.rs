/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for property estimates

use crate::composition::CompositionError;
use thiserror::Error;

/// Errors that can occur while estimating alloy properties
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    #[error(transparent)]
    Composition(#[from] CompositionError),

    #[error("No {property} tabulated for {element}")]
    MissingData {
        element: String,
        property: &'static str,
    },
}

/// Result type for property operations
pub type Result<T> = std::result::Result<T, PropertyError>;
