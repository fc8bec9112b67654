//! IEEPA tariff family classification and curated fallback descriptions.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    // Every 9903.01.XX code is an IEEPA action. Eligibility is this pattern
    // and nothing else: the family is an open-ended range under one tariff
    // authority, not an enumerable list of known sub-codes.
    static ref IEEPA_FAMILY: Regex = Regex::new(r"^9903\.01\.\d{2}$").unwrap();

    // Published descriptions for known sub-codes. Fallback text for rows
    // whose own description line is unreadable; never an eligibility gate.
    static ref IEEPA_CODE_DESCRIPTIONS: HashMap<&'static str, &'static str> = HashMap::from([
        ("9903.01.20", "China/HK Fentanyl Emergency - IEEPA Duty (Feb 4, 2025)"),
        ("9903.01.21", "China/HK Fentanyl - IEEPA Duty"),
        ("9903.01.22", "Canada Fentanyl - 25% IEEPA Duty (Feb 4, 2025)"),
        ("9903.01.23", "Mexico Fentanyl - 25% IEEPA Duty (Feb 4, 2025)"),
        ("9903.01.24", "China/HK Fentanyl Emergency - IEEPA Duty (Mar 4, 2025+)"),
        ("9903.01.25", "Reciprocal \"Liberation Day\" - Baseline 10% IEEPA Tariff (Apr 5, 2025+)"),
        ("9903.01.26", "Reciprocal Country-Specific IEEPA Tariff"),
        ("9903.01.28", "IEEPA-Reciprocal In-Transit Exclusion"),
        ("9903.01.63", "IEEPA-Reciprocal China/HK/Macau Tariff"),
    ]);
}

/// Whether an HTS code belongs to the refund-eligible IEEPA family.
pub fn is_ieepa_code(code: &str) -> bool {
    IEEPA_FAMILY.is_match(code)
}

/// Curated description for a known IEEPA sub-code.
pub fn fallback_description(code: &str) -> Option<&'static str> {
    IEEPA_CODE_DESCRIPTIONS.get(code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_pattern_gates_eligibility() {
        assert!(is_ieepa_code("9903.01.25"));
        assert!(is_ieepa_code("9903.01.20"));
        assert!(!is_ieepa_code("9903.02.20"));
        assert!(!is_ieepa_code("0101.21.0010"));
        assert!(!is_ieepa_code("9903.01.2"));
    }

    #[test]
    fn uncurated_family_members_are_still_eligible() {
        assert!(is_ieepa_code("9903.01.99"));
        assert_eq!(fallback_description("9903.01.99"), None);
    }

    #[test]
    fn curated_descriptions_resolve() {
        assert_eq!(
            fallback_description("9903.01.22"),
            Some("Canada Fentanyl - 25% IEEPA Duty (Feb 4, 2025)")
        );
        assert_eq!(fallback_description("9903.02.20"), None);
    }
}
