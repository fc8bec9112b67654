//! Description lookup for tariff rows.
//!
//! The goods description prints above its tariff row in the flattened text,
//! behind a 3-digit line number, with classification codes and manifest
//! headers interleaved between the two.

use super::patterns::{
    CLASSIFICATION_CODE, COLUMN_HEADER, DOCUMENT_HEADER, HTS_LINE, LINE_NUMBER_PREFIX,
};
use super::tariff::fallback_description;

/// Resolve the description for the tariff row at `index`, scanning up to
/// `lookback` preceding lines.
///
/// The scan stops cold on another HTS row: anything above it belongs to a
/// different item. When nothing usable is found the curated table supplies
/// the text, and failing that the code stands in for itself — a line item
/// never reports an empty description.
pub fn resolve_description(lines: &[&str], index: usize, lookback: usize, hts_code: &str) -> String {
    for i in (index.saturating_sub(lookback)..index).rev() {
        let line = lines[i].trim();
        if line.is_empty() {
            continue;
        }
        // Classification codes like C14000, C7000.
        if CLASSIFICATION_CODE.is_match(line) {
            continue;
        }
        // Bare related-party indicator.
        if line == "N" {
            continue;
        }
        if DOCUMENT_HEADER.is_match(line) {
            continue;
        }
        if COLUMN_HEADER.is_match(line) {
            continue;
        }
        if HTS_LINE.is_match(line) {
            break;
        }

        let desc = LINE_NUMBER_PREFIX.replace(line, "").trim().to_string();
        if !desc.is_empty() {
            return desc;
        }
    }

    fallback_description(hts_code)
        .map(str::to_string)
        .unwrap_or_else(|| hts_code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LOOKBACK: usize = 4;

    #[test]
    fn strips_line_number_from_description_row() {
        let lines = ["001Widgets, assorted", "9903.01.25 0.00 10%1,000.00"];
        assert_eq!(
            resolve_description(&lines, 1, LOOKBACK, "9903.01.25"),
            "Widgets, assorted"
        );
    }

    #[test]
    fn skips_classification_codes_and_markers() {
        let lines = [
            "002Steel fasteners",
            "C14000",
            "N",
            "9903.01.24 0.00 Free55.10",
        ];
        assert_eq!(
            resolve_description(&lines, 3, LOOKBACK, "9903.01.24"),
            "Steel fasteners"
        );
    }

    #[test]
    fn skips_manifest_and_column_headers() {
        let lines = [
            "003Aluminum housings",
            "Invoice 4471",
            "DollarsCents",
            "9903.01.25 0.00 10%12.00",
        ];
        assert_eq!(
            resolve_description(&lines, 3, LOOKBACK, "9903.01.25"),
            "Aluminum housings"
        );
    }

    #[test]
    fn stops_at_previous_hts_row() {
        let lines = [
            "004Other goods",
            "9903.01.24 0.00 Free10.00",
            "9903.01.25 0.00 10%20.00",
        ];
        // The row above belongs to a different item; fall back to the table.
        assert_eq!(
            resolve_description(&lines, 2, LOOKBACK, "9903.01.25"),
            "Reciprocal \"Liberation Day\" - Baseline 10% IEEPA Tariff (Apr 5, 2025+)"
        );
    }

    #[test]
    fn window_is_bounded() {
        let lines = [
            "005Too far away",
            "C14000",
            "C7000",
            "C20000",
            "C30000",
            "9903.01.99 0.00 10%5.00",
        ];
        // The description sits five lines up, one past the window.
        assert_eq!(
            resolve_description(&lines, 5, LOOKBACK, "9903.01.99"),
            "9903.01.99"
        );
    }

    #[test]
    fn unknown_code_falls_back_to_itself() {
        let lines = ["0101.21.0010 2,000.00 4.5%90.00"];
        assert_eq!(
            resolve_description(&lines, 0, LOOKBACK, "0101.21.0010"),
            "0101.21.0010"
        );
    }
}
