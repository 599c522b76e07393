use pretty_assertions::assert_eq;
use purchase_stats::aggregator::DedupPolicy;
use purchase_stats::commands::{execute_summarize, validate_args, SummarizeArgs};
use purchase_stats::output::{CurrencyReport, OutputFormat};
use rust_decimal::Decimal;
use std::fs;
use tempfile::TempDir;

const PURCHASES: &str = r#"[
  {
    "purchase_id": "id1",
    "items": [
      { "product_name": "Product A", "quantity": 2, "price": 50 },
      { "product_name": "Product C", "quantity": 10, "price": 1234.5 }
    ]
  },
  {
    "purchase_id": "id2",
    "items": [{ "product_name": "Product B", "quantity": 1, "price": 100 }]
  },
  {
    "purchase_id": "id2",
    "items": [{ "product_name": "Product A", "price": 75 }]
  }
]"#;

fn write_input(dir: &TempDir) -> String {
    let path = dir.path().join("purchases_v1.json");
    fs::write(&path, PURCHASES).unwrap();
    path.display().to_string()
}

#[test]
fn test_summarize_writes_currency_report() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out/summary.json");

    let args = SummarizeArgs {
        input: write_input(&dir),
        output: Some(output.clone()),
        ..Default::default()
    };
    validate_args(&args).unwrap();

    let summary = execute_summarize(args).unwrap();
    assert_eq!(summary.total_spend, Decimal::from(12545));

    let report: CurrencyReport =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();

    assert_eq!(
        report,
        CurrencyReport {
            total_spend: "$12,545.00".to_string(),
            average_purchase_value: "$6,272.50".to_string(),
            maximum_purchase_value: "$12,445.00".to_string(),
            median_purchase_value: "$6,272.50".to_string(),
            unique_product_count: 3,
        }
    );
}

#[test]
fn test_summarize_sum_merge_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("summary.json");

    let args = SummarizeArgs {
        input: write_input(&dir),
        dedup: DedupPolicy::SumMerge,
        format: OutputFormat::Json,
        output: Some(output.clone()),
    };

    let summary = execute_summarize(args).unwrap();
    assert_eq!(summary.maximum_purchase_value, Decimal::from(12445));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();

    assert_eq!(report["dedup_policy"], "sum-merge");
    assert_eq!(report["record_count"], 3);
    assert_eq!(report["summary"]["total_spend"], "12545");
}

#[test]
fn test_summarize_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let args = SummarizeArgs {
        input: dir.path().join("missing.json").display().to_string(),
        ..Default::default()
    };

    let err = execute_summarize(args).unwrap_err();
    assert!(format!("{:#}", err).contains("File not found"));
}

#[test]
fn test_summarize_malformed_record_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"[{ "purchase_id": "id1", "items": [{ "quantity": 1 }] }]"#).unwrap();

    let args = SummarizeArgs {
        input: path.display().to_string(),
        ..Default::default()
    };

    let err = execute_summarize(args).unwrap_err();
    assert!(format!("{:#}", err).contains("Malformed purchase record at index 0"));
}
