//! Default panel label alphabet.

use mosaic_core::LabelCase;

const UPPERCASE: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];

const LOWERCASE: [&str; 26] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "u", "v", "w", "x", "y", "z",
];

/// The 26 default panel labels in the requested case.
///
/// Callers take a prefix of panel-count length; layouts with more than 26
/// panels need explicit labels.
pub fn letters(case: LabelCase) -> [&'static str; 26] {
    match case {
        LabelCase::Uppercase => UPPERCASE,
        LabelCase::Lowercase => LOWERCASE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_letters() {
        let lower = letters(LabelCase::Lowercase);
        assert_eq!(lower[2], "c");
        assert_eq!(lower[25], "z");
        assert_eq!(lower.len(), 26);
    }

    #[test]
    fn test_default_case_is_uppercase() {
        let default = letters(LabelCase::default());
        assert_eq!(default[2], "C");
        assert_eq!(default[0], "A");
        assert_eq!(default[25], "Z");
    }
}
