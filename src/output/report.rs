//! Report rendering for summary statistics.
//!
//! Three layouts:
//! - `currency`: JSON object with `$`-formatted values (default)
//! - `json`: versioned machine-readable report with exact decimals
//! - `text`: boxed summary for terminals

use super::currency::format_currency;
use crate::aggregator::{DedupPolicy, SummaryResult};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Output layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Currency-formatted JSON
    #[default]
    Currency,
    /// Versioned JSON with exact decimal strings
    Json,
    /// Plain text
    Text,
}

/// Details about the run, included in the machine-readable report
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// Where the purchase data came from
    pub source: String,

    /// Dedup policy used for per-purchase totals
    pub dedup_policy: DedupPolicy,

    /// Records read
    pub record_count: usize,
}

/// Currency report, field order matches the rendered output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyReport {
    #[serde(rename = "Total Volume of Spend")]
    pub total_spend: String,

    #[serde(rename = "Average purchase value")]
    pub average_purchase_value: String,

    #[serde(rename = "Maximum purchase value")]
    pub maximum_purchase_value: String,

    #[serde(rename = "Median purchase value")]
    pub median_purchase_value: String,

    #[serde(rename = "Number of unique products purchased")]
    pub unique_product_count: usize,
}

impl From<&SummaryResult> for CurrencyReport {
    fn from(summary: &SummaryResult) -> Self {
        Self {
            total_spend: format_currency(summary.total_spend),
            average_purchase_value: format_currency(summary.average_purchase_value),
            maximum_purchase_value: format_currency(summary.maximum_purchase_value),
            median_purchase_value: format_currency(summary.median_purchase_value),
            unique_product_count: summary.unique_product_count,
        }
    }
}

/// Top-level machine-readable report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Input the report was computed from
    pub source: String,

    /// Dedup policy used for per-purchase totals
    pub dedup_policy: DedupPolicy,

    /// Records read
    pub record_count: usize,

    /// Statistics, decimals serialized as strings
    pub summary: SummaryResult,

    /// Timestamp when report was generated
    pub generated_at: String,
}

impl SummaryReport {
    /// Build a report stamped with the current time
    pub fn new(summary: &SummaryResult, context: &ReportContext) -> Self {
        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            source: context.source.clone(),
            dedup_policy: context.dedup_policy,
            record_count: context.record_count,
            summary: normalized(summary),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Render a summary in the requested layout
///
/// **Public** - main entry point for rendering
///
/// # Errors
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn render_report(
    summary: &SummaryResult,
    format: OutputFormat,
    context: &ReportContext,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Currency => Ok(serde_json::to_string_pretty(&CurrencyReport::from(summary))?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&SummaryReport::new(
            summary, context,
        ))?),
        OutputFormat::Text => Ok(render_text(summary, context)),
    }
}

/// Render a plain-text summary
///
/// **Private** - internal helper for render_report
fn render_text(summary: &SummaryResult, context: &ReportContext) -> String {
    let rule = "=".repeat(60);
    let rows = [
        ("Total Volume of Spend", format_currency(summary.total_spend)),
        ("Average Purchase Value", format_currency(summary.average_purchase_value)),
        ("Maximum Purchase Value", format_currency(summary.maximum_purchase_value)),
        ("Median Purchase Value", format_currency(summary.median_purchase_value)),
        ("Unique Products", summary.unique_product_count.to_string()),
    ];

    let mut out = format!("{}\nPURCHASE SUMMARY\n{}\n", rule, rule);
    out.push_str(&format!("Source:  {}\n", context.source));
    out.push_str(&format!("Records: {}\n\n", context.record_count));
    for (label, value) in rows {
        out.push_str(&format!("{:<24}{:>20}\n", label, value));
    }
    out.push_str(&rule);
    out
}

/// Strip trailing zeros so `100.00` serializes as `"100"`
fn normalized(summary: &SummaryResult) -> SummaryResult {
    let n = |d: Decimal| d.normalize();
    SummaryResult {
        total_spend: n(summary.total_spend),
        average_purchase_value: n(summary.average_purchase_value),
        maximum_purchase_value: n(summary.maximum_purchase_value),
        median_purchase_value: n(summary.median_purchase_value),
        unique_product_count: summary.unique_product_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_summary() -> SummaryResult {
        SummaryResult {
            total_spend: Decimal::from(200),
            average_purchase_value: Decimal::from(100),
            maximum_purchase_value: Decimal::from(100),
            median_purchase_value: Decimal::from(100),
            unique_product_count: 2,
        }
    }

    fn context() -> ReportContext {
        ReportContext {
            source: "purchases_v1.json".to_string(),
            dedup_policy: DedupPolicy::FirstWins,
            record_count: 2,
        }
    }

    #[test]
    fn test_currency_report() {
        let rendered = render_report(&sample_summary(), OutputFormat::Currency, &context()).unwrap();

        let expected = r#"{
  "Total Volume of Spend": "$200.00",
  "Average purchase value": "$100.00",
  "Maximum purchase value": "$100.00",
  "Median purchase value": "$100.00",
  "Number of unique products purchased": 2
}"#;
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_json_report() {
        let rendered = render_report(&sample_summary(), OutputFormat::Json, &context()).unwrap();
        let report: SummaryReport = serde_json::from_str(&rendered).unwrap();

        assert_eq!(report.version, REPORT_SCHEMA_VERSION);
        assert_eq!(report.dedup_policy, DedupPolicy::FirstWins);
        assert_eq!(report.record_count, 2);
        assert_eq!(report.summary, sample_summary());
        assert!(rendered.contains(r#""dedup_policy": "first-wins""#));
        assert!(rendered.contains(r#""total_spend": "200""#));
    }

    #[test]
    fn test_text_report() {
        let rendered = render_report(&sample_summary(), OutputFormat::Text, &context()).unwrap();

        assert!(rendered.contains("PURCHASE SUMMARY"));
        assert!(rendered.contains("$200.00"));
        assert!(rendered.contains("Records: 2"));
    }
}
