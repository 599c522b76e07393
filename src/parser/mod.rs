//! Purchase data parsing and schema definitions.
//!
//! This module handles:
//! - Defining the input record schema
//! - Lenient decoding of quantity and price
//! - Rejecting structurally malformed records

pub mod purchases;
pub mod schema;

// Re-export main types
pub use purchases::{count_items, parse_records};
pub use schema::{LineItem, PurchaseRecord};
