//! Duty amount and rate resolution for flattened tariff rows.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{RATE_TOKEN, TRAILING_AMOUNT, ZERO_PREFIXED_RATE};

/// Resolve the duty amount from the remainder of a tariff row after the HTS
/// code prefix.
///
/// The collapsed column layout always puts the duty amount last:
/// `{weight}{entered value}{rate}{duty}` with no separators. A row without
/// a trailing 2-decimal number is not a true tariff line.
pub fn resolve_duty_amount(remainder: &str) -> Option<Decimal> {
    let caps = TRAILING_AMOUNT.captures(remainder)?;
    Decimal::from_str(&caps[1].replace(',', "")).ok()
}

/// Resolve the duty rate from the remainder of a tariff row.
///
/// Percentage-shaped tokens earlier on the row can belong to other columns;
/// the rate is the match closest to the duty amount. A zero-valued column
/// can glue onto the rate ("0" + "10%" = "010%"): integer percents shed
/// those leading zeros, while genuine sub-1% rates like "0.125%" keep
/// theirs.
pub fn resolve_rate(remainder: &str) -> Option<String> {
    let last = RATE_TOKEN.find_iter(remainder).last()?.as_str();
    if last != "Free" && ZERO_PREFIXED_RATE.is_match(last) {
        return Some(last.trim_start_matches('0').to_string());
    }
    Some(last.to_string())
}

/// Format a dollar amount with thousands separators, e.g. `$1,234.56`.
pub fn format_usd(amount: Decimal) -> String {
    let s = format!("{:.2}", amount);
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let chars: Vec<char> = digits.chars().collect();
    let mut grouped = String::new();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    format!("{}${}.{}", sign, grouped, frac_part)
}
