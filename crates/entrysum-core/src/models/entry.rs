//! Entry summary data models exposed at the parser boundary.
//!
//! Field names at this boundary are consumed by storage and rendering
//! collaborators and must stay stable, hence the camelCase renames.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One refund-eligible tariff line in the shape external consumers rely on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Dotted HTS code: 8-digit chapter-99 or 10-digit merchandise form.
    pub hts_code: String,

    /// Assessed duty in dollars, two fraction digits as sourced.
    #[serde(with = "rust_decimal::serde::float")]
    pub duty_amount: Decimal,

    /// Duty rate column: a percentage token or "Free". Null when the column
    /// could not be recovered from the flattened row.
    pub rate: Option<String>,

    /// Human-readable goods description, never empty.
    pub description: String,
}

/// A tariff line as found in the document, before eligibility filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedLineItem {
    pub hts_code: String,
    pub duty_amount: Decimal,
    pub rate: Option<String>,
    pub description: String,
    /// True iff the code belongs to the IEEPA 9903.01.NN family.
    pub is_eligible: bool,
}

impl ExtractedLineItem {
    /// The boundary shape for the reported item list.
    pub fn to_line_item(&self) -> LineItem {
        LineItem {
            hts_code: self.hts_code.clone(),
            duty_amount: self.duty_amount,
            rate: self.rate.clone(),
            description: self.description.clone(),
        }
    }
}

/// Document-level header fields. Each is independently optional: absence of
/// one never blocks extraction of the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryMetadata {
    /// Entry number (block 1), `XXX-XXXXXXX-X`.
    pub entry_number: Option<String>,

    /// Filer code: the first three characters of the entry number, or an
    /// independently matched "Filer Code" label.
    pub filer_code: Option<String>,

    /// Entry date (block 7), wire format `MM/DD/YYYY`.
    #[serde(default, with = "mdy_date")]
    pub entry_date: Option<NaiveDate>,

    /// Country of origin (block 10), 2-letter code.
    pub country_of_origin: Option<String>,

    /// Total entered value (block 35) in dollars.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_entered_value: Option<Decimal>,
}

/// The parser's sole output, assembled fresh per parse call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// SHA-256 of the raw input bytes, 64 lowercase hex chars. Idempotence
    /// key the storage collaborator uses to detect re-uploads.
    pub file_hash: String,

    /// Header fields, flattened into the result per the stable boundary.
    #[serde(flatten)]
    pub metadata: EntryMetadata,

    /// Eligible, non-zero-duty line items only.
    pub line_items: Vec<LineItem>,

    /// Sum of eligible duty amounts.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_refund_amount: Decimal,

    /// Distinct eligible codes in order of first appearance.
    pub hts_codes_found: Vec<String>,

    /// Echo of the input text, stored by a collaborator for audit.
    pub raw_text: String,

    /// True iff at least one eligible line item was reported.
    pub is_eligible: bool,
}

/// Serde adapter keeping the entry date on the wire as `MM/DD/YYYY`.
mod mdy_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%m/%d/%Y";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => NaiveDate::parse_from_str(&s, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn line_item_serializes_camel_case_with_numeric_duty() {
        let item = LineItem {
            hts_code: "9903.01.25".to_string(),
            duty_amount: Decimal::from_str("1000.00").unwrap(),
            rate: Some("10%".to_string()),
            description: "Widgets, assorted".to_string(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["htsCode"], "9903.01.25");
        assert_eq!(json["dutyAmount"], 1000.0);
        assert_eq!(json["rate"], "10%");
        assert_eq!(json["description"], "Widgets, assorted");
    }

    #[test]
    fn absent_rate_serializes_as_null() {
        let item = LineItem {
            hts_code: "9903.01.63".to_string(),
            duty_amount: Decimal::from_str("12.34").unwrap(),
            rate: None,
            description: "9903.01.63".to_string(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert!(json["rate"].is_null());
    }

    #[test]
    fn entry_date_round_trips_as_mdy_string() {
        let metadata = EntryMetadata {
            entry_date: NaiveDate::from_ymd_opt(2025, 2, 28),
            ..Default::default()
        };

        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["entryDate"], "02/28/2025");

        let back: EntryMetadata = serde_json::from_value(json).unwrap();
        assert_eq!(back.entry_date, NaiveDate::from_ymd_opt(2025, 2, 28));
    }

    #[test]
    fn extracted_item_maps_to_boundary_shape() {
        let extracted = ExtractedLineItem {
            hts_code: "9903.01.24".to_string(),
            duty_amount: Decimal::from_str("55.10").unwrap(),
            rate: Some("Free".to_string()),
            description: "Test goods".to_string(),
            is_eligible: true,
        };

        let item = extracted.to_line_item();
        assert_eq!(item.hts_code, "9903.01.24");
        assert_eq!(item.duty_amount, Decimal::from_str("55.10").unwrap());
        assert_eq!(item.rate.as_deref(), Some("Free"));
    }
}
