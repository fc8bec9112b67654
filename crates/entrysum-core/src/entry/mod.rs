//! Entry summary parsing module.

mod parser;
pub mod rules;

pub use parser::{DESCRIPTION_LOOKBACK_LINES, EntrySummaryParser, FEE_SCHEDULE_CODES};

use crate::error::Result;
use crate::models::entry::ParseResult;

/// Trait for entry summary parsers.
pub trait EntryParser {
    /// Parse a document from its raw bytes (for fingerprinting) and the
    /// plain text a collaborator extracted from it.
    fn parse(&self, raw_bytes: &[u8], text: &str) -> Result<ParseResult>;

    /// Parse a buffer that is itself the extracted text.
    fn parse_bytes(&self, raw_bytes: &[u8]) -> Result<ParseResult> {
        let text = String::from_utf8_lossy(raw_bytes);
        self.parse(raw_bytes, &text)
    }
}
