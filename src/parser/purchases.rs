//! Parser for raw purchase JSON.
//!
//! Turns a decoded `serde_json::Value` into typed [`PurchaseRecord`]s.
//! Structural problems (a record without `purchase_id` or `items`, an item
//! without `product_name`) fail the whole parse; nothing is skipped, since a
//! silently dropped record would corrupt the total spend.

use super::schema::PurchaseRecord;
use crate::utils::error::ParseError;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// Parse raw purchase data
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `raw` - Decoded JSON document, expected to be an array of records
///
/// # Returns
/// Records in input order
///
/// # Errors
/// * `ParseError::InvalidFormat` - Document is not a JSON array
/// * `ParseError::MalformedRecord` - A record or item misses a required field
pub fn parse_records(raw: &Value) -> Result<Vec<PurchaseRecord>, ParseError> {
    let entries = raw.as_array().ok_or_else(|| {
        ParseError::InvalidFormat(format!(
            "expected a JSON array of purchases, got {}",
            json_type_name(raw)
        ))
    })?;

    debug!("Parsing {} purchase records", entries.len());

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_record(index, entry))
        .collect()
}

/// Parse one record, tagging failures with its position
///
/// **Private** - internal helper for parse_records
fn parse_record(index: usize, entry: &Value) -> Result<PurchaseRecord, ParseError> {
    PurchaseRecord::deserialize(entry).map_err(|e| ParseError::MalformedRecord {
        index,
        reason: e.to_string(),
    })
}

/// Count line items across records
///
/// **Public** - used by the validate command
pub fn count_items(records: &[PurchaseRecord]) -> usize {
    records.iter().map(|r| r.items.len()).sum()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
