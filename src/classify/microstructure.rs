/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Microstructure labels from recorded phase lists

use std::collections::HashSet;

/// Phases kept by name in microstructure labels
pub const VALID_PHASES: [&str; 8] = [
    "FCC",
    "BCC",
    "HCP",
    "L12",
    "B2",
    "Laves",
    "Laves (C14)",
    "Laves (C15)",
];

/// Label for phase lists that cannot be described by valid phases
pub const OTHER: &str = "Other";

/// Suffix standing in for unrecognized secondary phases
pub const SECONDARY_SUFFIX: &str = "+Sec.";

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Whether `phase` is one of [`VALID_PHASES`], compared literally
///
/// Input lists have their whitespace removed before this check, so the
/// `Laves (C14)` and `Laves (C15)` entries never match a stripped phase.
pub fn is_valid_phase(phase: &str) -> bool {
    VALID_PHASES.contains(&phase)
}

/// Collapse a `+`-separated phase list into a plotting label
///
/// Lists made entirely of valid phases are kept as written (minus
/// whitespace). When the first phase is valid but others are not, the
/// valid phases are kept and the rest become `+Sec.`. A list whose first
/// phase is invalid is `Other` even if later phases are valid.
pub fn classify_microstructure(phases: &str) -> String {
    let phases = strip_whitespace(phases);
    if phases.is_empty() {
        return String::new();
    }

    let list: Vec<&str> = phases.split('+').collect();
    let distinct: HashSet<&str> = list.iter().copied().collect();
    let first_valid = is_valid_phase(list[0]);

    if distinct.len() == 1 || !first_valid {
        return if first_valid {
            phases.clone()
        } else {
            OTHER.to_string()
        };
    }

    if distinct.iter().all(|p| is_valid_phase(p)) {
        return phases.clone();
    }

    let valid: Vec<&str> = list.into_iter().filter(|p| is_valid_phase(p)).collect();
    format!("{}{}", valid.join("+"), SECONDARY_SUFFIX)
}
