/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Element-to-amount composition of an alloy

use super::errors::{CompositionError, Result};
use super::parser;
use crate::elements::Element;
use std::fmt;
use std::str::FromStr;

/// Amounts below this are treated as absent
pub const AMOUNT_TOLERANCE: f64 = 1e-8;

/// A parsed chemical composition
///
/// Elements keep the order in which they first appear in the formula;
/// repeated symbols are summed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Composition {
    entries: Vec<(Element, f64)>,
}

impl Composition {
    /// Parse a formula string such as `Al2CoCrCuFeNi` or `(CoCrFeNi)95Nb5`
    pub fn parse(formula: &str) -> Result<Self> {
        let composition = Self::from_amounts(parser::parse_terms(formula)?);
        if composition.is_empty() {
            return Err(CompositionError::EmptyFormula);
        }
        log::debug!("parsed {:?} into {}", formula, composition);
        Ok(composition)
    }

    /// Build a composition from `(element, amount)` pairs
    pub fn from_amounts<I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = (Element, f64)>,
    {
        let mut entries: Vec<(Element, f64)> = Vec::new();
        for (element, amount) in amounts {
            match entries.iter_mut().find(|(e, _)| *e == element) {
                Some((_, total)) => *total += amount,
                None => entries.push((element, amount)),
            }
        }
        entries.retain(|(_, amount)| amount.abs() >= AMOUNT_TOLERANCE);
        Self { entries }
    }

    /// Elements in order of first appearance
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.entries.iter().map(|(e, _)| *e)
    }

    /// Amount of an element, zero when absent
    pub fn amount(&self, element: &Element) -> f64 {
        self.entries
            .iter()
            .find(|(e, _)| e == element)
            .map_or(0.0, |(_, amount)| *amount)
    }

    /// Total number of atoms in the formula unit
    pub fn num_atoms(&self) -> f64 {
        self.entries.iter().map(|(_, amount)| amount.abs()).sum()
    }

    /// Atomic fraction of an element
    pub fn atomic_fraction(&self, element: &Element) -> f64 {
        self.amount(element).abs() / self.num_atoms()
    }

    /// Atomic fractions of every element, in order of first appearance
    pub fn atomic_fractions(&self) -> Vec<(Element, f64)> {
        let total = self.num_atoms();
        self.entries
            .iter()
            .map(|(e, amount)| (*e, amount.abs() / total))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Formula with elements sorted by symbol, e.g. `Hf1 Nb1 Ta1`
    pub fn alphabetical_formula(&self) -> String {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|(a, _), (b, _)| a.cmp(b));
        sorted
            .iter()
            .map(|(e, amount)| format!("{}{}", e, format_amount(*amount)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Render an amount the way formulas print it: integral values without
/// a decimal point, everything else rounded to 8 decimals
pub fn format_amount(amount: f64) -> String {
    let nearest = amount.round();
    if (amount - nearest).abs() < AMOUNT_TOLERANCE {
        format!("{}", nearest as i64)
    } else {
        format!("{}", (amount * 1e8).round() / 1e8)
    }
}

impl FromStr for Composition {
    type Err = CompositionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (element, amount) in &self.entries {
            write!(f, "{}{}", element, format_amount(*amount))?;
        }
        Ok(())
    }
}
