/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Periodic-table data for composition-based property estimates
//!
//! Atomic masses follow the IUPAC 2013 relative atomic masses. Molar
//! volumes (cm^3/mol) and Young's moduli (GPa) are the elemental solid
//! values tabulated by WebElements, which is what rule-of-mixtures
//! estimates in the alloy literature are normally computed from.
//! Elements without a measured value carry `None`.

/// One row of the periodic table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRecord {
    /// Element symbol, e.g. "Fe"
    pub symbol: &'static str,
    /// Relative atomic mass in amu
    pub atomic_mass: f64,
    /// Molar volume of the elemental solid in cm^3/mol
    pub molar_volume: Option<f64>,
    /// Young's modulus of the elemental solid in GPa
    pub youngs_modulus: Option<f64>,
}

const fn row(
    symbol: &'static str,
    atomic_mass: f64,
    molar_volume: Option<f64>,
    youngs_modulus: Option<f64>,
) -> ElementRecord {
    ElementRecord {
        symbol,
        atomic_mass,
        molar_volume,
        youngs_modulus,
    }
}

/// Highest atomic number present in the table
pub const MAX_ATOMIC_NUMBER: u8 = 103;

/// Element table indexed by `atomic_number - 1`
static ELEMENTS: [ElementRecord; MAX_ATOMIC_NUMBER as usize] = [
    row("H", 1.008, Some(11.42), None),
    row("He", 4.0026, Some(21.0), None),
    row("Li", 6.94, Some(13.02), Some(4.9)),
    row("Be", 9.0122, Some(4.85), Some(287.0)),
    row("B", 10.81, Some(4.39), None),
    row("C", 12.011, Some(5.29), None),
    row("N", 14.007, Some(13.54), None),
    row("O", 15.999, Some(17.36), None),
    row("F", 18.998, Some(11.20), None),
    row("Ne", 20.180, Some(13.23), None),
    row("Na", 22.990, Some(23.78), Some(10.0)),
    row("Mg", 24.305, Some(14.00), Some(45.0)),
    row("Al", 26.982, Some(10.00), Some(70.0)),
    row("Si", 28.085, Some(12.06), Some(47.0)),
    row("P", 30.974, Some(17.02), None),
    row("S", 32.06, Some(15.53), None),
    row("Cl", 35.45, Some(17.39), None),
    row("Ar", 39.95, Some(22.56), None),
    row("K", 39.098, Some(45.94), Some(3.53)),
    row("Ca", 40.078, Some(26.20), Some(20.0)),
    row("Sc", 44.956, Some(15.00), Some(74.0)),
    row("Ti", 47.867, Some(10.64), Some(116.0)),
    row("V", 50.942, Some(8.32), Some(128.0)),
    row("Cr", 51.996, Some(7.23), Some(279.0)),
    row("Mn", 54.938, Some(7.35), Some(198.0)),
    row("Fe", 55.845, Some(7.09), Some(211.0)),
    row("Co", 58.933, Some(6.67), Some(209.0)),
    row("Ni", 58.693, Some(6.59), Some(200.0)),
    row("Cu", 63.546, Some(7.11), Some(130.0)),
    row("Zn", 65.38, Some(9.16), Some(108.0)),
    row("Ga", 69.723, Some(11.80), None),
    row("Ge", 72.630, Some(13.63), None),
    row("As", 74.922, Some(12.95), Some(8.0)),
    row("Se", 78.971, Some(16.42), Some(10.0)),
    row("Br", 79.904, Some(19.78), None),
    row("Kr", 83.798, Some(27.99), None),
    row("Rb", 85.468, Some(55.76), Some(2.4)),
    row("Sr", 87.62, Some(33.94), None),
    row("Y", 88.906, Some(19.88), Some(64.0)),
    row("Zr", 91.224, Some(14.02), Some(68.0)),
    row("Nb", 92.906, Some(10.83), Some(105.0)),
    row("Mo", 95.95, Some(9.38), Some(329.0)),
    row("Tc", 98.0, Some(8.63), None),
    row("Ru", 101.07, Some(8.17), Some(447.0)),
    row("Rh", 102.91, Some(8.28), Some(275.0)),
    row("Pd", 106.42, Some(8.56), Some(121.0)),
    row("Ag", 107.87, Some(10.27), Some(83.0)),
    row("Cd", 112.41, Some(13.00), Some(50.0)),
    row("In", 114.82, Some(15.76), Some(11.0)),
    row("Sn", 118.71, Some(16.29), Some(50.0)),
    row("Sb", 121.76, Some(18.19), Some(55.0)),
    row("Te", 127.60, Some(20.46), Some(43.0)),
    row("I", 126.90, Some(25.72), None),
    row("Xe", 131.29, Some(35.92), None),
    row("Cs", 132.91, Some(70.94), Some(1.7)),
    row("Ba", 137.33, Some(38.16), Some(13.0)),
    row("La", 138.91, Some(22.39), Some(37.0)),
    row("Ce", 140.12, Some(20.69), Some(34.0)),
    row("Pr", 140.91, Some(20.80), Some(37.0)),
    row("Nd", 144.24, Some(20.59), Some(41.0)),
    row("Pm", 145.0, Some(20.23), Some(46.0)),
    row("Sm", 150.36, Some(19.98), Some(50.0)),
    row("Eu", 151.96, Some(28.97), Some(18.0)),
    row("Gd", 157.25, Some(19.90), Some(55.0)),
    row("Tb", 158.93, Some(19.30), Some(56.0)),
    row("Dy", 162.50, Some(19.01), Some(61.0)),
    row("Ho", 164.93, Some(18.74), Some(65.0)),
    row("Er", 167.26, Some(18.46), Some(70.0)),
    row("Tm", 168.93, Some(19.1), Some(74.0)),
    row("Yb", 173.05, Some(24.84), Some(24.0)),
    row("Lu", 174.97, Some(17.78), Some(69.0)),
    row("Hf", 178.49, Some(13.44), Some(78.0)),
    row("Ta", 180.95, Some(10.85), Some(186.0)),
    row("W", 183.84, Some(9.47), Some(411.0)),
    row("Re", 186.21, Some(8.86), Some(463.0)),
    row("Os", 190.23, Some(8.42), None),
    row("Ir", 192.22, Some(8.52), Some(528.0)),
    row("Pt", 195.08, Some(9.09), Some(168.0)),
    row("Au", 196.97, Some(10.21), Some(78.0)),
    row("Hg", 200.59, Some(14.09), None),
    row("Tl", 204.38, Some(17.22), Some(8.0)),
    row("Pb", 207.2, Some(18.26), Some(16.0)),
    row("Bi", 208.98, Some(21.31), Some(32.0)),
    row("Po", 209.0, Some(22.97), None),
    row("At", 210.0, None, None),
    row("Rn", 222.0, Some(50.50), None),
    row("Fr", 223.0, None, None),
    row("Ra", 226.0, Some(41.09), None),
    row("Ac", 227.0, Some(22.55), None),
    row("Th", 232.04, Some(19.80), Some(79.0)),
    row("Pa", 231.04, Some(15.18), None),
    row("U", 238.03, Some(12.49), Some(208.0)),
    row("Np", 237.0, Some(11.59), None),
    row("Pu", 244.0, Some(12.29), Some(96.0)),
    row("Am", 243.0, Some(17.63), None),
    row("Cm", 247.0, Some(18.05), None),
    row("Bk", 247.0, Some(16.84), None),
    row("Cf", 251.0, Some(16.5), None),
    row("Es", 252.0, Some(28.52), None),
    row("Fm", 257.0, None, None),
    row("Md", 258.0, None, None),
    row("No", 259.0, None, None),
    row("Lr", 266.0, None, None),
];

/// Returns the table row for an atomic number
pub fn record(atomic_number: u8) -> Option<&'static ElementRecord> {
    match atomic_number {
        1..=MAX_ATOMIC_NUMBER => ELEMENTS.get(atomic_number as usize - 1),
        _ => None,
    }
}

/// Provides the element symbol for an atomic number
pub fn element_symbol(atomic_number: u8) -> Option<&'static str> {
    record(atomic_number).map(|r| r.symbol)
}

/// Returns the atomic number for an exact (case-sensitive) element symbol
pub fn lookup_symbol(symbol: &str) -> Option<u8> {
    ELEMENTS
        .iter()
        .position(|r| r.symbol == symbol)
        .map(|idx| idx as u8 + 1)
}

/// Returns the atomic number for an element symbol
///
/// This function is case-insensitive and will handle both "Fe" and "FE"
pub fn atomic_number_from_symbol(symbol: &str) -> Option<u8> {
    let symbol = symbol.trim();
    let mut chars = symbol.chars();
    let first = chars.next()?;
    let title: String = first
        .to_uppercase()
        .chain(chars.flat_map(char::to_lowercase))
        .collect();
    lookup_symbol(&title)
}

/// Returns the atomic mass in amu
pub fn atomic_mass(atomic_number: u8) -> Option<f64> {
    record(atomic_number).map(|r| r.atomic_mass)
}

/// Returns the molar volume in cm^3/mol
pub fn molar_volume(atomic_number: u8) -> Option<f64> {
    record(atomic_number).and_then(|r| r.molar_volume)
}

/// Returns the Young's modulus in GPa
pub fn youngs_modulus(atomic_number: u8) -> Option<f64> {
    record(atomic_number).and_then(|r| r.youngs_modulus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_symbol() {
        assert_eq!(element_symbol(1), Some("H"));
        assert_eq!(element_symbol(26), Some("Fe"));
        assert_eq!(element_symbol(72), Some("Hf"));
        assert_eq!(element_symbol(103), Some("Lr"));
        assert_eq!(element_symbol(0), None);
        assert_eq!(element_symbol(104), None);
    }

    #[test]
    fn test_table_is_in_atomic_number_order() {
        assert_eq!(lookup_symbol("Co"), Some(27));
        assert_eq!(lookup_symbol("Zr"), Some(40));
        assert_eq!(lookup_symbol("U"), Some(92));
        assert_eq!(element_symbol(lookup_symbol("Lr").unwrap()), Some("Lr"));
    }

    #[test]
    fn test_lookup_symbol_is_case_sensitive() {
        assert_eq!(lookup_symbol("Fe"), Some(26));
        assert_eq!(lookup_symbol("FE"), None);
        assert_eq!(lookup_symbol("Fex"), None);
        assert_eq!(lookup_symbol(""), None);
    }

    #[test]
    fn test_atomic_number_from_symbol() {
        assert_eq!(atomic_number_from_symbol("h"), Some(1));
        assert_eq!(atomic_number_from_symbol("FE"), Some(26));
        assert_eq!(atomic_number_from_symbol(" nb "), Some(41));
        assert_eq!(atomic_number_from_symbol("Xx"), None);
        assert_eq!(atomic_number_from_symbol(""), None);
    }

    #[test]
    fn test_property_values() {
        assert_eq!(molar_volume(26), Some(7.09));
        assert_eq!(youngs_modulus(27), Some(209.0));
        // Boron has no tabulated modulus
        assert_eq!(youngs_modulus(5), None);
        assert_eq!(molar_volume(85), None);
    }
}
