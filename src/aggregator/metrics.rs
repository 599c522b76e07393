//! Summary statistics over per-purchase totals.
//!
//! Average, maximum and median are derived from the deduplicated totals;
//! total spend comes straight from the aggregation pass.

use super::totals::{Aggregation, PurchaseTotals};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The five summary statistics
///
/// **Public** - returned from summarize
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Spend across every record
    pub total_spend: Decimal,

    /// total_spend / number of distinct purchases
    pub average_purchase_value: Decimal,

    /// Largest purchase total
    pub maximum_purchase_value: Decimal,

    /// Median purchase total
    pub median_purchase_value: Decimal,

    /// Number of distinct product names
    pub unique_product_count: usize,
}

impl SummaryResult {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Total: {} | Average: {} | Max: {} | Median: {} | Products: {}",
            self.total_spend.normalize(),
            self.average_purchase_value.normalize(),
            self.maximum_purchase_value.normalize(),
            self.median_purchase_value.normalize(),
            self.unique_product_count
        )
    }
}

impl Aggregation {
    /// Derive the summary statistics for this aggregation
    ///
    /// **Public** - convenience over [`summarize`]
    pub fn summarize(&self) -> SummaryResult {
        summarize(&self.totals, self.total_spend, self.products.len())
    }
}

/// Calculate summary statistics
///
/// **Public** - main entry point for statistics
///
/// # Arguments
/// * `totals` - Per-purchase totals (after dedup)
/// * `total_spend` - Spend across every record
/// * `unique_product_count` - Size of the product set
///
/// # Returns
/// Summary statistics; an empty mapping yields zeros
pub fn summarize(
    totals: &PurchaseTotals,
    total_spend: Decimal,
    unique_product_count: usize,
) -> SummaryResult {
    debug!("Summarizing {} purchase totals", totals.len());

    let values: Vec<Decimal> = totals.values().copied().collect();

    SummaryResult {
        total_spend,
        average_purchase_value: average_purchase_value(total_spend, values.len()),
        maximum_purchase_value: maximum_purchase_value(&values),
        median_purchase_value: median_purchase_value(values),
        unique_product_count,
    }
}

/// total_spend divided by the purchase count, or zero with no purchases
pub fn average_purchase_value(total_spend: Decimal, purchase_count: usize) -> Decimal {
    if purchase_count == 0 {
        return Decimal::ZERO;
    }
    total_spend / Decimal::from(purchase_count)
}

/// Largest value, or zero when empty
pub fn maximum_purchase_value(values: &[Decimal]) -> Decimal {
    values.iter().copied().max().unwrap_or(Decimal::ZERO)
}

/// Median of the values, or zero when empty
///
/// **Public** - odd length takes the middle element, even length the mean
/// of the two middle elements
pub fn median_purchase_value(mut values: Vec<Decimal>) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }

    values.sort_unstable();
    let len = values.len();
    let index = (len - 1) / 2;

    if len % 2 == 0 {
        midpoint(values[index], values[index + 1])
    } else {
        values[index]
    }
}

/// Mean of two sorted values without summing them first
///
/// **Private** - `low + (high - low) / 2` stays in range where `low + high` may not
fn midpoint(low: Decimal, high: Decimal) -> Decimal {
    low + (high - low) / Decimal::from(2)
}
