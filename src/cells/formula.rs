/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Composition label normalization
//!
//! Labels such as `ZrHfTaNbTi` and `Hf20Nb20Ta20Ti20Zr20` describe the
//! same alloy. Scaling every fraction by the largest one and sorting the
//! elements gives them a single key that tables can be grouped on.

use crate::composition::{Composition, Result};
use crate::utils::round_decimal;

/// Normalize a formula, reporting why it could not be parsed
///
/// Fractions are divided by the largest fraction and rounded to three
/// decimals before the alphabetical formula is rendered.
pub fn try_normalize_formula(formula: &str) -> Result<String> {
    let composition = Composition::parse(formula)?;
    let fractions = composition.atomic_fractions();
    let largest = fractions
        .iter()
        .map(|(_, x)| *x)
        .fold(f64::NEG_INFINITY, f64::max);

    let rebuilt: String = fractions
        .iter()
        .map(|(element, x)| format!("{}{}", element, round_decimal(x / largest, 3)))
        .collect();

    Ok(Composition::parse(&rebuilt)?.alphabetical_formula())
}

/// Best-effort formula normalization
///
/// Returns `None` for an empty label or one that does not parse; the
/// latter is logged as a warning.
pub fn normalize_and_alphabetize_formula(formula: &str) -> Option<String> {
    if formula.is_empty() {
        return None;
    }
    match try_normalize_formula(formula) {
        Ok(normalized) => Some(normalized),
        Err(e) => {
            log::warn!("INVALID: {} ({})", formula, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::CompositionError;

    #[test]
    fn test_equiatomic_order_invariant() {
        assert_eq!(
            normalize_and_alphabetize_formula("HfNbTaTiZr").as_deref(),
            Some("Hf1 Nb1 Ta1 Ti1 Zr1")
        );
        assert_eq!(
            normalize_and_alphabetize_formula("ZrHfTaNbTi").as_deref(),
            Some("Hf1 Nb1 Ta1 Ti1 Zr1")
        );
    }

    #[test]
    fn test_scaled_amounts_normalize_alike() {
        assert_eq!(
            try_normalize_formula("Hf20Nb20Ta20Ti20Zr20").unwrap(),
            "Hf1 Nb1 Ta1 Ti1 Zr1"
        );
        assert_eq!(try_normalize_formula("Co4Fe4Ni4Si1").unwrap(), "Co1 Fe1 Ni1 Si0.25");
        assert_eq!(try_normalize_formula("Al0.5CoCrFeNi").unwrap(), "Al0.5 Co1 Cr1 Fe1 Ni1");
    }

    #[test]
    fn test_fractions_rounded_to_three_places() {
        assert_eq!(try_normalize_formula("Fe3Ni").unwrap(), "Fe1 Ni0.333");
        // 0.1235 is stored just below the half
        assert_eq!(try_normalize_formula("Fe2000Ni247").unwrap(), "Fe1 Ni0.123");
    }

    #[test]
    fn test_invalid_formula() {
        assert_eq!(normalize_and_alphabetize_formula("Fex"), None);
        assert_eq!(normalize_and_alphabetize_formula(""), None);
        assert!(matches!(
            try_normalize_formula("Fex"),
            Err(CompositionError::UnknownElement { .. })
        ));
    }
}
