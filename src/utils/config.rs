//! Configuration and constants for the CLI.

use std::time::Duration;

/// Input file read when no `--input` is given (relative to the working directory)
pub const DEFAULT_INPUT_FILE: &str = "purchases_v1.json";

/// Default timeout for HTTP input sources
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Current version of the machine-readable report
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Currency rendering for the default report
pub const CURRENCY_SYMBOL: &str = "$";
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

// Environment fallbacks for CLI flags
pub const ENV_INPUT: &str = "PURCHASE_STATS_INPUT";
pub const ENV_DEDUP: &str = "PURCHASE_STATS_DEDUP";
pub const ENV_FORMAT: &str = "PURCHASE_STATS_FORMAT";
