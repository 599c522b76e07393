//! Aggregation of purchase records into totals and summary statistics.
//!
//! This module transforms parsed purchase records into:
//! - Per-purchase totals (deduplicated by purchase_id)
//! - Total spend and the set of distinct products
//! - Average, maximum and median purchase values

pub mod metrics;
pub mod totals;

// Re-export main types and functions
pub use metrics::{
    average_purchase_value, maximum_purchase_value, median_purchase_value, summarize,
    SummaryResult,
};
pub use totals::{
    aggregate, aggregate_with_policy, purchase_value, Aggregation, DedupPolicy, ProductSet,
    PurchaseTotals,
};
