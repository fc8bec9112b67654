//! Tariff line recognition and the per-document line item sweep.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::entry::ExtractedLineItem;

use super::amounts::{resolve_duty_amount, resolve_rate};
use super::description::resolve_description;
use super::patterns::HTS_LINE;
use super::tariff::is_ieepa_code;

/// Classify a trimmed line as a tariff row and return its HTS code.
///
/// The leading token must be HTS-shaped, and the row must not be a
/// merchandise-processing-fee line (`499`/`501` schedules), which reuse
/// numeric prefixes.
pub fn classify_hts_line<'a>(line: &'a str, fee_codes: &[String]) -> Option<&'a str> {
    let is_fee_row = fee_codes.iter().any(|code| {
        line.strip_prefix(code.as_str())
            .and_then(|rest| rest.chars().next())
            .is_some_and(char::is_whitespace)
    });
    if is_fee_row {
        return None;
    }

    HTS_LINE
        .captures(line)
        .map(|caps| caps.get(1).unwrap().as_str())
}

/// Sweep every line of the document for tariff rows.
///
/// Stateful only for deduplication: a repeated `(code, duty)` pair is
/// flattener noise and is silently skipped, while the same code with a
/// different duty amount is a distinct item.
pub fn extract_line_items(
    lines: &[&str],
    lookback: usize,
    fee_codes: &[String],
) -> Vec<ExtractedLineItem> {
    let mut items = Vec::new();
    let mut seen: HashSet<(String, Decimal)> = HashSet::new();

    for (i, raw_line) in lines.iter().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(hts_code) = classify_hts_line(line, fee_codes) else {
            continue;
        };

        // A row without a trailing duty amount is not a true tariff line.
        let remainder = &line[hts_code.len()..];
        let Some(duty_amount) = resolve_duty_amount(remainder) else {
            continue;
        };

        if !seen.insert((hts_code.to_string(), duty_amount)) {
            continue;
        }

        let rate = resolve_rate(remainder);
        let description = resolve_description(lines, i, lookback, hts_code);
        let is_eligible = is_ieepa_code(hts_code);

        debug!("tariff row {} duty {} eligible {}", hts_code, duty_amount, is_eligible);

        items.push(ExtractedLineItem {
            hts_code: hts_code.to_string(),
            duty_amount,
            rate,
            description,
            is_eligible,
        });
    }

    items
}
