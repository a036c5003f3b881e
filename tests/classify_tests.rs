/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use hea_data::classify::{classify_microstructure, classify_processing_method, ProcessingCategory};
use rstest::rstest;

#[rstest]
#[case("AC+A", ProcessingCategory::Anneal)]
#[case("AC", ProcessingCategory::Cast)]
#[case("SPS+A", ProcessingCategory::Powder)]
#[case("CR+A", ProcessingCategory::Wrought)]
#[case("AM", ProcessingCategory::Other)]
#[case("S", ProcessingCategory::Powder)]
#[case("H", ProcessingCategory::Anneal)]
#[case("AC+HF", ProcessingCategory::Wrought)]
#[case("AC+", ProcessingCategory::Unclassified)]
fn test_classify_processing_method(#[case] method: &str, #[case] expected: ProcessingCategory) {
    assert_eq!(classify_processing_method(method), expected);
}

#[test]
fn test_processing_labels() {
    assert_eq!(classify_processing_method("AC+A").to_string(), "ANNEAL");
    assert_eq!(classify_processing_method("DC").label(), Some("CAST"));
}

#[rstest]
#[case("BCC+FCC", "BCC+FCC")]
#[case("BCC+sigma", "BCC+Sec.")]
#[case("FCC", "FCC")]
#[case("sigma", "Other")]
#[case("sigma+FCC", "Other")]
#[case("B2 + B2", "B2+B2")]
#[case("", "")]
#[case("Laves (C14)", "Other")]
#[case("BCC+Laves (C15)", "BCC+Sec.")]
fn test_classify_microstructure(#[case] phases: &str, #[case] expected: &str) {
    assert_eq!(classify_microstructure(phases), expected);
}
