/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Processing-route classification from synthesis-method codes
//!
//! Codes are `+`-joined steps such as `AC+A` (arc cast, annealed) or
//! `SPS+HIP`. The route is decided by the first rule that matches, so
//! rule order matters: `SPS+A` is powder, not anneal.

use std::fmt;

/// Processing route of a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingCategory {
    /// As-cast (arc or drop cast)
    Cast,
    /// Severe plastic deformation, additive manufacturing, HIP
    Other,
    /// Powder metallurgy routes
    Powder,
    /// Cold/hot rolled or hot forged
    Wrought,
    /// Heat treated or aged after casting
    Anneal,
    /// No rule matched
    Unclassified,
}

impl ProcessingCategory {
    /// Label used in plots, `None` for unclassified codes
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ProcessingCategory::Cast => Some("CAST"),
            ProcessingCategory::Other => Some("OTHER"),
            ProcessingCategory::Powder => Some("POWDER"),
            ProcessingCategory::Wrought => Some("WROUGHT"),
            ProcessingCategory::Anneal => Some("ANNEAL"),
            ProcessingCategory::Unclassified => None,
        }
    }

    pub fn is_classified(&self) -> bool {
        *self != ProcessingCategory::Unclassified
    }
}

impl fmt::Display for ProcessingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or(""))
    }
}

fn contains_any(method: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| method.contains(n))
}

/// Classify a synthesis-method code into a processing route
pub fn classify_processing_method(method: &str) -> ProcessingCategory {
    if method == "AC" || method == "DC" {
        return ProcessingCategory::Cast;
    }
    if contains_any(method, &["SPD", "AM", "HIP"]) {
        return ProcessingCategory::Other;
    }
    if method == "S" || contains_any(method, &["GA", "MA", "SPS", "VHP"]) {
        return ProcessingCategory::Powder;
    }
    if contains_any(method, &["CR", "HR", "HF"]) {
        return ProcessingCategory::Wrought;
    }
    if method == "A" || method == "H" || contains_any(method, &["+A", "+H", "Aged"]) {
        return ProcessingCategory::Anneal;
    }

    log::debug!("unclassified processing method {:?}", method);
    ProcessingCategory::Unclassified
}
