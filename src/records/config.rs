/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Column names used by the row operations

use serde::{Deserialize, Serialize};

/// Field names read from a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNames {
    /// Phase column, e.g. `BCC` or `BCC+FCC`
    pub phases: String,
    /// Elongation column, in percent
    pub elongation: String,
    /// Test type column, `C` for compression and `T` for tension
    pub test_type: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            phases: "PROPERTY: Type of phases".to_string(),
            elongation: "PROPERTY: Elongation (%)".to_string(),
            test_type: "PROPERTY: Type of test".to_string(),
        }
    }
}
