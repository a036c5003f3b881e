/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Numeric helpers shared by the cleaning and property modules

/// Scale by `10^decimals`, round ties to even, scale back
///
/// The tie is decided on the scaled product, so a value just below a
/// half can land on `.5` after scaling (`0.125` -> `0.12`).
pub fn round_half_even(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// Round to `decimals` places from the exact decimal value of `value`
///
/// `0.1235` is stored slightly below the half, so this gives `0.123`.
pub fn round_decimal(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
