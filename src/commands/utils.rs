use crate::loader::{load_records, InputSource};
use crate::parser::{count_items, parse_records};
use crate::utils::config::{DEFAULT_INPUT_FILE, REPORT_SCHEMA_VERSION};
use anyhow::{Context, Result};

/// Validate a purchase data file without computing statistics
pub fn validate_purchase_input(input: &str) -> Result<()> {
    let source = InputSource::parse(input);
    println!("Validating purchase data: {}", source);

    let raw = load_records(&source).with_context(|| format!("Failed to load {}", source))?;
    let records = parse_records(&raw).context("Invalid purchase data")?;

    println!("✓ Valid purchase JSON");
    println!("  Records: {}", records.len());
    println!("  Line items: {}", count_items(&records));

    Ok(())
}

/// Display input schema information
pub fn display_schema(show_details: bool) {
    println!("Purchase Stats Input Schema");
    println!("Report Version: {}", REPORT_SCHEMA_VERSION);
    println!("Default input: {}", DEFAULT_INPUT_FILE);
    println!();

    if show_details {
        println!("Input Structure (JSON array of purchases):");
        println!("  purchase_id: string|number  - Purchase identifier (may repeat)");
        println!("  items: array                - Line items (required)");
        println!("    product_name: string      - Product name (required)");
        println!("    quantity: integer         - Units bought (missing/invalid = 0)");
        println!("    price: number|string      - Unit price (missing/invalid = 0)");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Purchase Stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Summary statistics over retail purchase data.");
}
