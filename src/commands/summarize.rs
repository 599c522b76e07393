//! Summarize command implementation.
//!
//! The summarize command:
//! 1. Loads raw purchase JSON (file or URL)
//! 2. Parses it into purchase records
//! 3. Aggregates per-purchase totals
//! 4. Calculates summary statistics
//! 5. Renders and writes the report

use crate::aggregator::{aggregate_with_policy, Aggregation, DedupPolicy, SummaryResult};
use crate::loader::{is_http_url, load_records, InputSource};
use crate::output::{render_report, validate_output_path, write_report, OutputFormat, ReportContext};
use crate::parser::parse_records;
use crate::utils::config::DEFAULT_INPUT_FILE;
use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the summarize command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SummarizeArgs {
    /// File path or http(s) URL of the purchase data
    pub input: String,

    /// How repeated purchase ids are folded into per-purchase totals
    pub dedup: DedupPolicy,

    /// Report layout
    pub format: OutputFormat,

    /// Output file (stdout if None)
    pub output: Option<PathBuf>,
}

impl Default for SummarizeArgs {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT_FILE.to_string(),
            dedup: DedupPolicy::default(),
            format: OutputFormat::default(),
            output: None,
        }
    }
}

/// Execute the summarize command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The computed summary, after the report has been written
///
/// # Errors
/// * Input cannot be loaded or is not valid JSON
/// * A record is malformed
/// * The report cannot be written
pub fn execute_summarize(args: SummarizeArgs) -> Result<SummaryResult> {
    let start_time = Instant::now();
    let source = InputSource::parse(&args.input);

    info!("Step 1/4: Loading purchase data...");
    let raw = load_records(&source).with_context(|| format!("Failed to load {}", source))?;

    info!("Step 2/4: Aggregating purchases...");
    let (aggregation, summary) = process_purchases(&raw, args.dedup)?;

    info!("Step 3/4: Rendering report...");
    let context = ReportContext {
        source: source.to_string(),
        dedup_policy: args.dedup,
        record_count: aggregation.record_count,
    };
    let report = render_report(&summary, args.format, &context)
        .context("Failed to render report")?;

    info!("Step 4/4: Printing results...");
    match &args.output {
        Some(path) => {
            write_report(&report, path).context("Failed to write report")?;
            info!("✓ Report written to: {}", path.display());
        }
        None => println!("{}", report),
    }

    let elapsed = start_time.elapsed();
    info!("Summary completed in {:.2}s", elapsed.as_secs_f64());

    Ok(summary)
}

/// Parse, aggregate and summarize raw purchase JSON
///
/// **Public** - the whole pipeline minus I/O
///
/// # Errors
/// * `ParseError::MalformedRecord` - A record misses a required field
/// * `AggregateError::Overflow` - Totals exceed the decimal range
pub fn process_purchases(raw: &Value, dedup: DedupPolicy) -> Result<(Aggregation, SummaryResult)> {
    let records = parse_records(raw).context("Failed to parse purchase data")?;

    let aggregation =
        aggregate_with_policy(&records, dedup).context("Failed to aggregate purchases")?;

    let summary = aggregation.summarize();
    debug!("Summary: {}", summary.summary());

    Ok((aggregation, summary))
}

/// Validate summarize arguments
///
/// **Public** - can be called before execute_summarize for early validation
pub fn validate_args(args: &SummarizeArgs) -> Result<()> {
    validate_input(&args.input)?;

    if let Some(path) = &args.output {
        validate_output_path(path)?;
    }

    Ok(())
}

/// Validate an input argument (path or URL)
///
/// **Public** - shared with the validate command
pub fn validate_input(input: &str) -> Result<()> {
    if input.trim().is_empty() {
        anyhow::bail!("Input cannot be empty");
    }

    if input.contains("://") && !is_http_url(input) {
        anyhow::bail!("Input URL must start with http:// or https://");
    }

    Ok(())
}
