//! Rule-based field extractors for flattened CBP Form 7501 text.

pub mod amounts;
pub mod description;
pub mod header;
pub mod lines;
pub mod patterns;
pub mod tariff;

pub use amounts::{format_usd, resolve_duty_amount, resolve_rate};
pub use description::resolve_description;
pub use header::{
    extract_country_of_origin, extract_entry_date, extract_entry_number, extract_filer_code,
    extract_total_entered_value,
};
pub use lines::{classify_hts_line, extract_line_items};
pub use tariff::{fallback_description, is_ieepa_code};
