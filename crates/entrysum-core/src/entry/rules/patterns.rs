//! Compiled regex patterns shared by the entry summary extractors.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Tariff line shapes, anchored to the start of the line. Chapter 99
    // action codes are 8-digit (XXXX.XX.XX), merchandise codes are 10-digit
    // (XXXX.XX.XXXX); the flattened 7501 row begins with the code column.
    pub static ref HTS_LINE: Regex = Regex::new(
        r"^(99\d{2}\.\d{2}\.\d{2}|\d{4}\.\d{2}\.\d{4})"
    ).unwrap();

    // The duty amount is the last 2-decimal number on the row; anything
    // after it is non-numeric noise. Lookahead-free form of the column
    // layout's "trailing amount" rule.
    pub static ref TRAILING_AMOUNT: Regex = Regex::new(
        r"([\d,]+\.\d{2})[^\d.]*$"
    ).unwrap();

    // Duty rate column: a percentage or the literal "Free".
    pub static ref RATE_TOKEN: Regex = Regex::new(
        r"(\d+(?:\.\d+)?%|Free)"
    ).unwrap();

    // Column concatenation artifact: a zero-valued preceding column glued
    // onto the rate, e.g. "010%" for a true "10%". Integer percents only;
    // "0.125%" is a legitimate sub-1% rate.
    pub static ref ZERO_PREFIXED_RATE: Regex = Regex::new(
        r"^0\d+%$"
    ).unwrap();

    // Entry number (block 1): 3-char filer code + 7-digit serial + check digit.
    pub static ref ENTRY_NUMBER: Regex = Regex::new(
        r"([A-Z0-9]{3}-\d{7}-\d)"
    ).unwrap();

    // Labeled filer code, fallback when no entry number survived extraction.
    pub static ref FILER_CODE_LABEL: Regex = Regex::new(
        r"(?i)Filer\s*(?:Code|ID)\s*:?\s*([A-Z0-9]{3,4})"
    ).unwrap();

    pub static ref DATE_MDY: Regex = Regex::new(
        r"(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref COUNTRY_OF_ORIGIN_LABEL: Regex = Regex::new(
        r"(?i)Country of Origin"
    ).unwrap();

    // Data row under the country-of-origin header: 2-digit transport mode,
    // 2-letter country, then a date, all run together.
    pub static ref COUNTRY_BEFORE_DATE: Regex = Regex::new(
        r"\d{2}([A-Z]{2})\d{2}/\d{2}/\d{4}"
    ).unwrap();

    pub static ref TRAILING_VALUE: Regex = Regex::new(
        r"([\d,]+\.\d{2})\s*$"
    ).unwrap();

    // Description lookback skip set.
    pub static ref CLASSIFICATION_CODE: Regex = Regex::new(
        r"^C\d{3,5}$"
    ).unwrap();

    pub static ref DOCUMENT_HEADER: Regex = Regex::new(
        r"(?i)^(?:Invoice|I\.T\.|MASTER|HOUSE|SUBHOUSE|BILL)"
    ).unwrap();

    pub static ref COLUMN_HEADER: Regex = Regex::new(
        r"^(?:Dollars|Cents|DollarsCents)"
    ).unwrap();

    // Leading 3-digit line number on description rows.
    pub static ref LINE_NUMBER_PREFIX: Regex = Regex::new(
        r"^\d{3}"
    ).unwrap();
}
