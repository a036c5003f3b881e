/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use super::config::FieldNames;
use super::errors::Result;
use super::record::Record;
use serde::Serialize;
use std::fmt;

/// Coarse phase label used to color plots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PhaseCategory {
    #[serde(rename = "BCC")]
    Bcc,
    #[serde(rename = "FCC")]
    Fcc,
    #[serde(rename = "other")]
    Other,
}

impl PhaseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseCategory::Bcc => "BCC",
            PhaseCategory::Fcc => "FCC",
            PhaseCategory::Other => "other",
        }
    }
}

impl fmt::Display for PhaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a row as single-phase BCC, single-phase FCC or other
pub fn categorize_phases(row: &Record) -> Result<PhaseCategory> {
    categorize_phases_with(row, &FieldNames::default())
}

/// [`categorize_phases`] reading the phase column named in `fields`
pub fn categorize_phases_with(row: &Record, fields: &FieldNames) -> Result<PhaseCategory> {
    Ok(match row.get(&fields.phases)? {
        "BCC" => PhaseCategory::Bcc,
        "FCC" => PhaseCategory::Fcc,
        _ => PhaseCategory::Other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RecordError;

    fn row(phases: &str) -> Record {
        [("PROPERTY: Type of phases", phases)].into_iter().collect()
    }

    #[test]
    fn test_exact_matches_only() {
        assert_eq!(categorize_phases(&row("BCC")).unwrap(), PhaseCategory::Bcc);
        assert_eq!(categorize_phases(&row("FCC")).unwrap(), PhaseCategory::Fcc);
        assert_eq!(categorize_phases(&row("BCC+FCC")).unwrap(), PhaseCategory::Other);
        assert_eq!(categorize_phases(&row(" BCC")).unwrap(), PhaseCategory::Other);
        assert_eq!(PhaseCategory::Other.to_string(), "other");
    }

    #[test]
    fn test_custom_field_name() {
        let fields = FieldNames {
            phases: "phase".to_string(),
            ..FieldNames::default()
        };
        let r: Record = [("phase", "FCC")].into_iter().collect();
        assert_eq!(categorize_phases_with(&r, &fields).unwrap(), PhaseCategory::Fcc);
        assert!(matches!(
            categorize_phases(&r),
            Err(RecordError::MissingField(_))
        ));
    }
}
