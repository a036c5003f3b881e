/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Rule-of-mixtures density

use super::errors::Result;
use super::mixing::MixingBasis;
use crate::composition::Composition;
use crate::utils::round_half_even;
use ndarray::Array1;

/// Density in g/cm^3 of a parsed composition, unrounded
///
/// `rho = sum(x_i * M_i) / sum(x_i * V_i)`
pub fn density(composition: &Composition) -> Result<f64> {
    let basis = MixingBasis::new(composition)?;
    let masses: Array1<f64> = basis.elements.iter().map(|e| e.atomic_mass()).collect();

    Ok(basis.fractions.dot(&masses) / basis.mixture_volume())
}

/// Density of a formula in g/cm^3, rounded to one decimal
pub fn calculate_density(formula: &str) -> Result<f64> {
    let composition = Composition::parse(formula)?;
    Ok(round_half_even(density(&composition)?, 1))
}
