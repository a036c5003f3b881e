/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Element representation backed by the periodic-table database

use super::database::{self, ElementRecord};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A chemical element
#[derive(Debug, Clone, Copy)]
pub struct Element {
    /// Atomic number (Z) of the element
    atomic_number: u8,
    record: &'static ElementRecord,
}

impl Element {
    /// Look up an element by its exact symbol ("Fe", not "FE")
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        database::lookup_symbol(symbol).and_then(Self::from_atomic_number)
    }

    /// Look up an element by atomic number
    pub fn from_atomic_number(atomic_number: u8) -> Option<Self> {
        database::record(atomic_number).map(|record| Self {
            atomic_number,
            record,
        })
    }

    /// Get the atomic number
    pub fn atomic_number(&self) -> u8 {
        self.atomic_number
    }

    /// Get the element symbol
    pub fn symbol(&self) -> &'static str {
        self.record.symbol
    }

    /// Atomic mass in amu
    pub fn atomic_mass(&self) -> f64 {
        self.record.atomic_mass
    }

    /// Molar volume in cm^3/mol, if tabulated
    pub fn molar_volume(&self) -> Option<f64> {
        self.record.molar_volume
    }

    /// Young's modulus in GPa, if tabulated
    pub fn youngs_modulus(&self) -> Option<f64> {
        self.record.youngs_modulus
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.atomic_number == other.atomic_number
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.atomic_number.hash(state);
    }
}

// Elements order alphabetically by symbol, which is what formula
// rendering needs.
impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        self.symbol().cmp(other.symbol())
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
