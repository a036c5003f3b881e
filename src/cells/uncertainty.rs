/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Uncertainty and inequality stripping

/// LaTeX plus-minus marker used in the source spreadsheets
pub const UNCERTAINTY_MARKER: &str = r"$\pm$";

/// Reduce a measured value to its central figure
///
/// `2$\pm$5` becomes `2`, `>2` and `<2` become `2`. Any remaining text
/// containing `nan` is treated as missing and becomes the empty string.
pub fn remove_uncertainty(cell: &str) -> String {
    let value = match cell.split_once(UNCERTAINTY_MARKER) {
        Some((central, _)) => central,
        None => cell,
    };
    let value: String = value.chars().filter(|c| !matches!(c, '>' | '<')).collect();

    if value.contains("nan") {
        return String::new();
    }
    value
}
