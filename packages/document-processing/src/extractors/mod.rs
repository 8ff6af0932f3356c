//! Text scanners used by the extraction stage.
//!
//! - [`fields`] - dates, monetary amounts, reference codes
//! - [`parties`] - organization names

pub mod fields;
pub mod parties;

pub use fields::{extract_amounts, extract_dates, extract_references, parse_amount};
pub use parties::extract_parties;
