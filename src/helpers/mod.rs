//! Date formatting and short identifier helpers.
pub mod date;
pub mod id;

pub use date::{
    detect_locale, format_date, format_date_in, parse_locale, parse_timestamp, require_locale,
};
pub use id::{fraction_to_base36, generate_id, generate_id_with, ID_LEN};
