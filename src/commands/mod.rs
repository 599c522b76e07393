//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod summarize;
pub mod utils;

// Re-export main command functions
pub use summarize::{
    execute_summarize, process_purchases, validate_args, validate_input, SummarizeArgs,
};
pub use utils::{display_schema, display_version, validate_purchase_input};
