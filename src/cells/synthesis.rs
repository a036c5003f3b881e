/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

/// Remove every whitespace character from a synthesis-method code
pub fn standardize_synthesis_method(method: &str) -> String {
    method.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standardize_synthesis_method() {
        assert_eq!(standardize_synthesis_method("AC + A "), "AC+A");
        assert_eq!(standardize_synthesis_method("\tSPS\n"), "SPS");
        assert_eq!(standardize_synthesis_method("Aged"), "Aged");
    }
}
