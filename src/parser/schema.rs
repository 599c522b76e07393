//! Input schema definitions for purchase data.
//!
//! A purchase file is a JSON array of records:
//!
//! ```json
//! [
//!   {
//!     "purchase_id": "id1",
//!     "items": [
//!       { "product_name": "Product A", "quantity": 2, "price": 50 }
//!     ]
//!   }
//! ]
//! ```
//!
//! `purchase_id`, `items` and `product_name` are required. `quantity` and
//! `price` are lenient: absent or unusable values deserialize to `None` and
//! are counted as zero by the aggregator.

use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

/// A single purchase (one transaction)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PurchaseRecord {
    /// Purchase identifier (not guaranteed unique across the input)
    #[serde(deserialize_with = "deserialize_purchase_id")]
    pub purchase_id: String,

    /// Line items, in input order
    pub items: Vec<LineItem>,
}

/// One product entry within a purchase
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineItem {
    /// Product name
    pub product_name: String,

    /// Quantity bought (`None` if absent or malformed)
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub quantity: Option<u64>,

    /// Unit price (`None` if absent or malformed)
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: Option<Decimal>,
}

impl PurchaseRecord {
    /// Create a record from an id and its items
    pub fn new(purchase_id: impl Into<String>, items: Vec<LineItem>) -> Self {
        Self {
            purchase_id: purchase_id.into(),
            items,
        }
    }
}

impl LineItem {
    /// Create a fully specified line item
    pub fn new(product_name: impl Into<String>, quantity: u64, price: Decimal) -> Self {
        Self {
            product_name: product_name.into(),
            quantity: Some(quantity),
            price: Some(price),
        }
    }

    /// Number of numeric fields that were absent or malformed
    pub fn missing_numeric_fields(&self) -> usize {
        usize::from(self.quantity.is_none()) + usize::from(self.price.is_none())
    }
}

/// Accept string ids as-is and stringify numeric ids
fn deserialize_purchase_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(de::Error::custom(format!(
            "purchase_id must be a string or number, got {}",
            other
        ))),
    }
}

fn deserialize_quantity<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_quantity))
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_price))
}

/// Coerce a JSON value into a non-negative integer quantity
///
/// Fractional numbers are truncated toward zero. Negative, non-finite and
/// non-numeric values yield `None`.
pub fn coerce_quantity(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => {
            if let Some(q) = n.as_u64() {
                return Some(q);
            }
            // Negative integers are rejected here; floats fall through
            if n.is_i64() {
                return None;
            }
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && *f < u64::MAX as f64)
                .map(|f| f.trunc() as u64)
        }
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

/// Coerce a JSON value into a non-negative decimal price
///
/// Numbers go through their shortest textual form so `19.99` stays exactly
/// `19.99` rather than its binary approximation.
pub fn coerce_price(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
        .filter(|price| !price.is_sign_negative())
}
