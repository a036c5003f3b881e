/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Rule-of-mixtures Young's modulus

use super::errors::Result;
use super::mixing::{per_element, MixingBasis};
use crate::composition::Composition;
use crate::elements::Element;

/// Volume-weighted Young's modulus in GPa of a parsed composition
///
/// `E = sum(x_i * V_i * E_i) / sum(x_i * V_i)`. Returns `Ok(None)` when
/// any constituent has no tabulated modulus.
pub fn youngs_modulus(composition: &Composition) -> Result<Option<f64>> {
    if composition.elements().any(|e| e.youngs_modulus().is_none()) {
        log::debug!("no modulus estimate for {}: incomplete element data", composition);
        return Ok(None);
    }

    let basis = MixingBasis::new(composition)?;
    let moduli = per_element(&basis.elements, "Young's modulus", Element::youngs_modulus)?;
    let weighted = &basis.fractions * &basis.volumes;

    Ok(Some(weighted.dot(&moduli) / basis.mixture_volume()))
}

/// Young's modulus of a formula in GPa, rounded to the nearest integer
pub fn calculate_youngs_modulus(formula: &str) -> Result<Option<i64>> {
    let composition = Composition::parse(formula)?;
    Ok(youngs_modulus(&composition)?.map(|e| e.round_ties_even() as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_element_modulus() {
        assert_eq!(calculate_youngs_modulus("W").unwrap(), Some(411));
    }

    #[test]
    fn test_missing_modulus_is_none() {
        assert_eq!(calculate_youngs_modulus("CoFeNiB").unwrap(), None);
        assert_eq!(calculate_youngs_modulus("B").unwrap(), None);
    }

    #[test]
    fn test_modulus_lies_between_constituents() {
        let e = youngs_modulus(&Composition::parse("NbTa").unwrap())
            .unwrap()
            .unwrap();
        assert!(e > 105.0 && e < 186.0);
    }
}
