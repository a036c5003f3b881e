/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use hea_data::cells::{
    average_range, normalize_and_alphabetize_formula, remove_uncertainty,
    standardize_synthesis_method, try_normalize_formula, CellValue,
};
use rstest::rstest;

#[rstest]
#[case(r"2$\pm$5", "2")]
#[case(">2", "2")]
#[case("<2", "2")]
#[case("nan", "")]
#[case(r"nan$\pm$1", "")]
#[case("1050", "1050")]
fn test_remove_uncertainty(#[case] cell: &str, #[case] expected: &str) {
    assert_eq!(remove_uncertainty(cell), expected);
}

#[rstest]
#[case("2-5", 3.5)]
#[case(" 2 - 5 ", 3.5)]
#[case("100-200", 150.0)]
fn test_average_range(#[case] cell: &str, #[case] expected: f64) {
    assert_eq!(average_range(cell), CellValue::Number(expected));
}

#[test]
fn test_average_range_pass_through() {
    // Whitespace is still removed from non-range text
    assert_eq!(average_range(" 12 "), CellValue::Text("12".to_string()));
    assert_eq!(average_range("2.5-3.5"), CellValue::Text("2.5-3.5".to_string()));
}

#[test]
fn test_uncertainty_then_range() {
    let cleaned = remove_uncertainty(r"20-30$\pm$2");
    assert_eq!(average_range(&cleaned).as_number(), Some(25.0));
}

#[test]
fn test_standardize_synthesis_method() {
    assert_eq!(standardize_synthesis_method("AC + A "), "AC+A");
}

#[rstest]
#[case("HfNbTaTiZr", Some("Hf1 Nb1 Ta1 Ti1 Zr1"))]
#[case("ZrHfTaNbTi", Some("Hf1 Nb1 Ta1 Ti1 Zr1"))]
#[case("CoFeNiSi0.25", Some("Co1 Fe1 Ni1 Si0.25"))]
#[case("(CoCrFeNi)95Nb5", Some("Co1 Cr1 Fe1 Nb0.053 Ni1"))]
#[case("Fe2000Ni247", Some("Fe1 Ni0.123"))]
#[case("Fex", None)]
#[case("", None)]
fn test_normalize_and_alphabetize_formula(#[case] formula: &str, #[case] expected: Option<&str>) {
    assert_eq!(normalize_and_alphabetize_formula(formula).as_deref(), expected);
}

#[test]
fn test_try_normalize_reports_error() {
    let err = try_normalize_formula("Fe-Ni").unwrap_err();
    assert!(err.to_string().contains("Fe-Ni"));
}
