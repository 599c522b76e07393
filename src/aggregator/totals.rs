//! Fold purchase records into per-purchase totals.
//!
//! One pass over the records produces:
//! - `PurchaseTotals`: purchase_id -> spend, resolved by a [`DedupPolicy`]
//! - the grand total spend (every record counts exactly once)
//! - the set of distinct product names (every item counts)
//!
//! Example: two records sharing id "id1" with totals 100 and 40 give
//! total_spend = 140 but, under first-wins, totals = {"id1": 100}.

use crate::parser::{LineItem, PurchaseRecord};
use crate::utils::error::AggregateError;
use clap::ValueEnum;
use log::{debug, info};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Mapping from purchase_id to accumulated spend
pub type PurchaseTotals = HashMap<String, Decimal>;

/// Distinct product names seen across all items
pub type ProductSet = HashSet<String>;

/// How a repeated purchase_id is folded into [`PurchaseTotals`]
///
/// Only the per-purchase mapping is affected; total spend and the product
/// set always include every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DedupPolicy {
    /// Keep the first record's total, ignore later ones
    #[default]
    FirstWins,
    /// Replace with the latest record's total
    LastWins,
    /// Add every record's total into the same entry
    SumMerge,
}

impl DedupPolicy {
    /// Record `value` for `purchase_id` in `totals`
    ///
    /// **Public** - the single place where the dedup policy is applied
    ///
    /// # Returns
    /// `true` if `purchase_id` was already present
    pub fn apply(
        self,
        totals: &mut PurchaseTotals,
        purchase_id: &str,
        value: Decimal,
    ) -> Result<bool, AggregateError> {
        let Some(existing) = totals.get_mut(purchase_id) else {
            totals.insert(purchase_id.to_string(), value);
            return Ok(false);
        };

        match self {
            DedupPolicy::FirstWins => {}
            DedupPolicy::LastWins => *existing = value,
            DedupPolicy::SumMerge => {
                *existing = existing
                    .checked_add(value)
                    .ok_or_else(|| overflow(purchase_id))?;
            }
        }

        Ok(true)
    }

    /// Name as accepted on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            DedupPolicy::FirstWins => "first-wins",
            DedupPolicy::LastWins => "last-wins",
            DedupPolicy::SumMerge => "sum-merge",
        }
    }
}

/// Result of one aggregation pass
///
/// **Public** - consumed by the statistics calculator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    /// Per-purchase totals after dedup
    pub totals: PurchaseTotals,

    /// Spend across every record, duplicates included
    pub total_spend: Decimal,

    /// Distinct product names
    pub products: ProductSet,

    /// Records folded
    pub record_count: usize,

    /// Line items folded
    pub item_count: usize,

    /// Records whose purchase_id had already been seen
    pub duplicate_ids: usize,

    /// Quantity/price fields that were absent or malformed and counted as zero
    pub defaulted_fields: usize,
}

/// Aggregate records with the default first-wins policy
///
/// **Public** - main entry point for aggregation
///
/// # Errors
/// * `AggregateError::Overflow` - A total left the representable decimal range
pub fn aggregate(records: &[PurchaseRecord]) -> Result<Aggregation, AggregateError> {
    aggregate_with_policy(records, DedupPolicy::default())
}

/// Aggregate records with an explicit dedup policy
///
/// **Public** - same as [`aggregate`] with a caller-chosen policy
///
/// # Algorithm
/// 1. Sum quantity x price per record (missing numbers count as zero)
/// 2. Add every product name to the product set
/// 3. Add the record total to total spend unconditionally
/// 4. Fold the record total into the per-purchase map via the policy
pub fn aggregate_with_policy(
    records: &[PurchaseRecord],
    policy: DedupPolicy,
) -> Result<Aggregation, AggregateError> {
    debug!(
        "Aggregating {} purchase records ({} policy)",
        records.len(),
        policy.as_str()
    );

    let mut aggregation = Aggregation::default();

    for record in records {
        let value_per_purchase = purchase_value(record)?;

        for item in &record.items {
            if !aggregation.products.contains(item.product_name.as_str()) {
                aggregation.products.insert(item.product_name.clone());
            }
            aggregation.defaulted_fields += item.missing_numeric_fields();
        }

        aggregation.total_spend = aggregation
            .total_spend
            .checked_add(value_per_purchase)
            .ok_or_else(|| overflow(&record.purchase_id))?;

        if policy.apply(&mut aggregation.totals, &record.purchase_id, value_per_purchase)? {
            debug!("Duplicate purchase_id {} ({})", record.purchase_id, policy.as_str());
            aggregation.duplicate_ids += 1;
        }

        aggregation.record_count += 1;
        aggregation.item_count += record.items.len();
    }

    if aggregation.defaulted_fields > 0 {
        info!(
            "{} quantity/price fields were missing or malformed and counted as zero",
            aggregation.defaulted_fields
        );
    }
    if aggregation.duplicate_ids > 0 {
        info!(
            "{} records reused an earlier purchase_id",
            aggregation.duplicate_ids
        );
    }

    debug!(
        "Aggregated {} items into {} purchases, {} products",
        aggregation.item_count,
        aggregation.totals.len(),
        aggregation.products.len()
    );

    Ok(aggregation)
}

/// Total value of one purchase record
///
/// **Public** - sum over items of quantity x price
pub fn purchase_value(record: &PurchaseRecord) -> Result<Decimal, AggregateError> {
    record.items.iter().try_fold(Decimal::ZERO, |acc, item| {
        line_value(item)
            .and_then(|value| acc.checked_add(value))
            .ok_or_else(|| overflow(&record.purchase_id))
    })
}

/// quantity x price, with absent fields counted as zero
///
/// **Private** - `None` only on overflow
fn line_value(item: &LineItem) -> Option<Decimal> {
    let quantity = Decimal::from(item.quantity.unwrap_or(0));
    let price = item.price.unwrap_or(Decimal::ZERO);
    quantity.checked_mul(price)
}

fn overflow(purchase_id: &str) -> AggregateError {
    AggregateError::Overflow {
        purchase_id: purchase_id.to_string(),
    }
}
