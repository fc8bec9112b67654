//! Header field extractors for the 7501 form blocks.
//!
//! Each extractor scans the line sequence independently; a field that cannot
//! be found is `None`, never an error.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{
    COUNTRY_BEFORE_DATE, COUNTRY_OF_ORIGIN_LABEL, DATE_MDY, ENTRY_NUMBER, FILER_CODE_LABEL,
    TRAILING_VALUE,
};

/// Extract the entry number (block 1) from the header row.
///
/// The flattened header reads like `"JG6-3953982-8 ABI/A03/17/250368180102/28/2025"`;
/// the entry number keeps its `XXX-XXXXXXX-X` shape through text extraction.
pub fn extract_entry_number(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .find_map(|line| ENTRY_NUMBER.captures(line).map(|caps| caps[1].to_string()))
}

/// Labeled filer code scan, used when the entry number itself is unreadable.
pub fn extract_filer_code(text: &str) -> Option<String> {
    FILER_CODE_LABEL
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// Extract the entry date (block 7) from the entry-number row.
///
/// The row carries several `MM/DD/YYYY` tokens; by column layout the entry
/// date is the rightmost. Tokens that are not real calendar dates are
/// skipped in favor of the next one leftward.
pub fn extract_entry_date(lines: &[&str]) -> Option<NaiveDate> {
    for line in lines {
        if !ENTRY_NUMBER.is_match(line) {
            continue;
        }

        let tokens: Vec<&str> = DATE_MDY.find_iter(line).map(|m| m.as_str()).collect();
        let date = tokens
            .into_iter()
            .rev()
            .find_map(|token| NaiveDate::parse_from_str(token, "%m/%d/%Y").ok());

        if date.is_some() {
            return date;
        }
    }
    None
}

/// Extract the country of origin (block 10).
///
/// The label line is followed by the carrier/transport data row, where the
/// 2-letter code sits between the transport-mode digits and a date:
/// `"OOCL SOUTHAMPTON (EGLV)11CN03/05/2025"`.
pub fn extract_country_of_origin(lines: &[&str]) -> Option<String> {
    for (i, line) in lines.iter().enumerate() {
        if !COUNTRY_OF_ORIGIN_LABEL.is_match(line) {
            continue;
        }
        if let Some(data_line) = lines.get(i + 1) {
            if let Some(caps) = COUNTRY_BEFORE_DATE.captures(data_line) {
                return Some(caps[1].to_string());
            }
        }
    }
    None
}

/// Extract the total entered value (block 35).
///
/// Unrelated boilerplate reuses the same label; lines carrying "Block 39"
/// or "35." are not the data row. Thousands separators are stripped before
/// conversion, and a value that fails to convert is a field-miss.
pub fn extract_total_entered_value(lines: &[&str]) -> Option<Decimal> {
    for line in lines {
        if !line.contains("Total Entered Value") {
            continue;
        }
        if line.contains("Block 39") || line.contains("35.") {
            continue;
        }
        if let Some(caps) = TRAILING_VALUE.captures(line) {
            if let Ok(value) = Decimal::from_str(&caps[1].replace(',', "")) {
                return Some(value);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn entry_number_from_run_on_header() {
        let lines = ["ENTRY SUMMARY", "JG6-3953982-8 ABI/A03/17/250368180102/28/2025"];
        assert_eq!(
            extract_entry_number(&lines),
            Some("JG6-3953982-8".to_string())
        );
    }

    #[test]
    fn entry_number_missing_is_none() {
        let lines = ["ENTRY SUMMARY", "no identifiers here"];
        assert_eq!(extract_entry_number(&lines), None);
    }

    #[test]
    fn filer_code_from_label() {
        assert_eq!(
            extract_filer_code("Filer Code: JG6\nother text"),
            Some("JG6".to_string())
        );
        assert_eq!(
            extract_filer_code("filer id ABCD"),
            Some("ABCD".to_string())
        );
        assert_eq!(extract_filer_code("no label"), None);
    }

    #[test]
    fn entry_date_is_last_date_on_entry_row() {
        let lines = ["ABC-1234567-8 ABI/A 03/17/2025 02/28/2025"];
        assert_eq!(
            extract_entry_date(&lines),
            NaiveDate::from_ymd_opt(2025, 2, 28)
        );
    }

    #[test]
    fn entry_date_skips_impossible_trailing_token() {
        let lines = ["ABC-1234567-8 03/17/2025 13/45/2025"];
        assert_eq!(
            extract_entry_date(&lines),
            NaiveDate::from_ymd_opt(2025, 3, 17)
        );
    }

    #[test]
    fn entry_date_requires_entry_number_line() {
        let lines = ["03/17/2025 02/28/2025", "ABC-1234567-8 no dates"];
        assert_eq!(extract_entry_date(&lines), None);
    }

    #[test]
    fn country_from_row_after_label() {
        let lines = [
            "10. Country of Origin",
            "OOCL SOUTHAMPTON (EGLV)11CN03/05/2025",
        ];
        assert_eq!(extract_country_of_origin(&lines), Some("CN".to_string()));
    }

    #[test]
    fn country_label_without_data_row_is_none() {
        let lines = ["Country of Origin"];
        assert_eq!(extract_country_of_origin(&lines), None);
    }

    #[test]
    fn total_entered_value_with_separators() {
        let lines = ["Total Entered Value (Invoice)282,634.00"];
        assert_eq!(
            extract_total_entered_value(&lines),
            Decimal::from_str("282634.00").ok()
        );
    }

    #[test]
    fn total_entered_value_skips_boilerplate_lines() {
        let lines = [
            "35. Total Entered Value 999.99",
            "Total Entered Value see Block 39 123.45",
            "Total Entered Value (Invoice)1,000.00",
        ];
        assert_eq!(
            extract_total_entered_value(&lines),
            Decimal::from_str("1000.00").ok()
        );
    }
}
