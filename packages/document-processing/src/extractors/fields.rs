//! Pattern scanners for dates, monetary amounts, and reference codes.
//!
//! Each scanner applies its patterns in a fixed order and concatenates
//! every match of one pattern before moving to the next. Duplicates are
//! kept.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::AmountParseError;

static RE_ISO_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap());
static RE_US_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{2}/\d{2}/\d{4}").unwrap());
static RE_LONG_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* \d{1,2},? \d{4}")
        .unwrap()
});

static RE_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[\d,]+(?:\.\d{2})?").unwrap());

static RE_INVOICE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:INV|Invoice)[-#]?\s*(\d+)").unwrap());
static RE_PO_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:PO|Purchase Order)[-#]?\s*(\d+)").unwrap());
static RE_GENERIC_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:REF|Reference)[-#]?\s*([A-Z0-9-]+)").unwrap());

/// Extract dates in `YYYY-MM-DD`, `MM/DD/YYYY`, and `Month D, YYYY` forms.
pub fn extract_dates(text: &str) -> Vec<String> {
    let patterns: [&Regex; 3] = [&RE_ISO_DATE, &RE_US_DATE, &RE_LONG_DATE];
    let dates: Vec<String> = patterns
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| m.as_str().to_string()))
        .collect();

    tracing::debug!(count = dates.len(), "Extracted dates");
    dates
}

/// Extract dollar amounts such as `$1,250.50`.
pub fn extract_amounts(text: &str) -> Vec<String> {
    let amounts: Vec<String> = RE_AMOUNT
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    tracing::debug!(count = amounts.len(), "Extracted amounts");
    amounts
}

/// Extract invoice, purchase order, and generic reference codes.
///
/// Every match is normalized to `REF-<code>` whatever its original prefix.
pub fn extract_references(text: &str) -> Vec<String> {
    let patterns: [&Regex; 3] = [&RE_INVOICE_REF, &RE_PO_REF, &RE_GENERIC_REF];
    let references: Vec<String> = patterns
        .iter()
        .flat_map(|re| {
            re.captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .map(|code| format!("REF-{}", code.as_str()))
        })
        .collect();

    tracing::debug!(count = references.len(), "Extracted references");
    references
}

/// Parse an extracted amount string (`"$17,500.00"`) as a number.
pub fn parse_amount(amount: &str) -> Result<f64, AmountParseError> {
    let cleaned: String = amount.chars().filter(|c| *c != '$' && *c != ',').collect();
    cleaned.parse::<f64>().map_err(|source| AmountParseError {
        value: amount.to_string(),
        source,
    })
}
