//! Purchase Stats
//!
//! Summary statistics over retail purchase data: total spend,
//! average, maximum and median purchase value, and the number
//! of distinct products purchased.
//!
//! This crate provides the core implementation for the
//! `purchase-stats` CLI tool.
//!
//! ## Example
//!
//! ```
//! use purchase_stats::aggregator::aggregate;
//! use purchase_stats::parser::parse_records;
//! use rust_decimal::Decimal;
//! use serde_json::json;
//!
//! let raw = json!([
//!     { "purchase_id": "id1", "items": [{ "product_name": "Product A", "quantity": 2, "price": 50 }] },
//!     { "purchase_id": "id2", "items": [{ "product_name": "Product B", "quantity": 1, "price": 100 }] }
//! ]);
//!
//! let records = parse_records(&raw).unwrap();
//! let summary = aggregate(&records).unwrap().summarize();
//!
//! assert_eq!(summary.total_spend, Decimal::from(200));
//! assert_eq!(summary.median_purchase_value, Decimal::from(100));
//! assert_eq!(summary.unique_product_count, 2);
//! ```

pub mod aggregator;
pub mod commands;
pub mod loader;
pub mod output;
pub mod parser;
pub mod utils;

pub use aggregator::{aggregate, summarize, DedupPolicy, SummaryResult};
pub use commands::process_purchases;
pub use parser::{parse_records, LineItem, PurchaseRecord};
