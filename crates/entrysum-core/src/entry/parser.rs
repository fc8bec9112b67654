//! Entry summary document parser.

use rust_decimal::Decimal;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::{ParseError, Result};
use crate::models::entry::{EntryMetadata, ParseResult};

use super::EntryParser;
use super::rules::{
    extract_country_of_origin, extract_entry_date, extract_entry_number, extract_filer_code,
    extract_line_items, extract_total_entered_value,
};

/// Lines scanned backward from a tariff row for its description. Tuned to
/// the CBP 7501 flattened layout; other form layouts need a different
/// window.
pub const DESCRIPTION_LOOKBACK_LINES: usize = 4;

/// Fee-schedule program codes whose rows must never be read as tariff lines.
pub const FEE_SCHEDULE_CODES: [&str; 2] = ["499", "501"];

/// A document carrying neither marker is not an entry summary.
const FORMAT_MARKERS: [&str; 2] = ["ENTRY SUMMARY", "CBP Form 7501"];

/// Parser for flattened CBP Form 7501 text.
///
/// Stateless per call: every parse builds its result from scratch, so one
/// parser value can serve any number of documents, concurrently.
#[derive(Debug, Clone)]
pub struct EntrySummaryParser {
    description_lookback: usize,
    fee_codes: Vec<String>,
}

impl EntrySummaryParser {
    /// Create a parser with the layout tuning for the documented 7501 form.
    pub fn new() -> Self {
        Self {
            description_lookback: DESCRIPTION_LOOKBACK_LINES,
            fee_codes: FEE_SCHEDULE_CODES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Override the description lookback window.
    pub fn with_description_lookback(mut self, lines: usize) -> Self {
        self.description_lookback = lines;
        self
    }

    /// Override the fee-schedule codes excluded from line classification.
    pub fn with_fee_schedule_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fee_codes = codes.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for EntrySummaryParser {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryParser for EntrySummaryParser {
    fn parse(&self, raw_bytes: &[u8], text: &str) -> Result<ParseResult> {
        if !FORMAT_MARKERS.iter().any(|marker| text.contains(marker)) {
            return Err(ParseError::UnrecognizedFormat);
        }

        // Keyed on the raw bytes, independent of text-extraction variance.
        let file_hash = hex::encode(Sha256::digest(raw_bytes));
        let lines: Vec<&str> = text.lines().collect();

        info!("parsing entry summary: {} lines", lines.len());

        let entry_number = extract_entry_number(&lines);
        let filer_code = entry_number
            .as_ref()
            .map(|number| number[..3].to_string())
            .or_else(|| extract_filer_code(text));

        let metadata = EntryMetadata {
            entry_number,
            filer_code,
            entry_date: extract_entry_date(&lines),
            country_of_origin: extract_country_of_origin(&lines),
            total_entered_value: extract_total_entered_value(&lines),
        };

        let all_items = extract_line_items(&lines, self.description_lookback, &self.fee_codes);

        // Zero-duty rows contribute nothing to a refund and are not reported.
        let eligible: Vec<_> = all_items
            .iter()
            .filter(|item| item.is_eligible && item.duty_amount > Decimal::ZERO)
            .collect();

        let total_refund_amount: Decimal = eligible.iter().map(|item| item.duty_amount).sum();

        let mut hts_codes_found: Vec<String> = Vec::new();
        for item in &eligible {
            if !hts_codes_found.contains(&item.hts_code) {
                hts_codes_found.push(item.hts_code.clone());
            }
        }

        let line_items: Vec<_> = eligible.iter().map(|item| item.to_line_item()).collect();

        debug!(
            "{} tariff rows, {} refund-eligible, total {}",
            all_items.len(),
            line_items.len(),
            total_refund_amount
        );

        Ok(ParseResult {
            file_hash,
            metadata,
            is_eligible: !line_items.is_empty(),
            line_items,
            total_refund_amount,
            hts_codes_found,
            raw_text: text.to_string(),
        })
    }
}
