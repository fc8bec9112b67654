//! Core library for CBP Form 7501 entry summary parsing.
//!
//! This crate provides:
//! - Format validation and SHA-256 content fingerprinting of uploaded documents
//! - Header field extraction (entry number, filer code, entry date, country
//!   of origin, total entered value)
//! - Tariff line item reconstruction from flattened PDF text, where column
//!   boundaries have collapsed into run-on lines
//! - IEEPA (9903.01.NN) eligibility classification and refund totals

pub mod entry;
pub mod error;
pub mod models;

pub use entry::{EntryParser, EntrySummaryParser};
pub use error::{ParseError, Result};
pub use models::entry::{EntryMetadata, ExtractedLineItem, LineItem, ParseResult};
