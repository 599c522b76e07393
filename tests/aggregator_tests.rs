use purchase_stats::aggregator::{
    aggregate, aggregate_with_policy, median_purchase_value, summarize, DedupPolicy,
    PurchaseTotals, SummaryResult,
};
use purchase_stats::parser::{parse_records, LineItem, PurchaseRecord};
use rust_decimal::Decimal;
use serde_json::json;

fn totals(values: &[i64]) -> PurchaseTotals {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (format!("id{}", i + 1), Decimal::from(*v)))
        .collect()
}

#[test]
fn test_median_when_odd() {
    let t = totals(&[1000, 2000, 3000]);
    let summary = summarize(&t, Decimal::from(6000), 0);
    assert_eq!(summary.median_purchase_value, Decimal::from(2000));
}

#[test]
fn test_median_when_even() {
    let t = totals(&[1000, 2000, 3000, 4000]);
    let summary = summarize(&t, Decimal::from(10000), 0);
    assert_eq!(summary.median_purchase_value, Decimal::from(2500));
}

#[test]
fn test_median_when_empty() {
    assert_eq!(median_purchase_value(Vec::new()), Decimal::ZERO);
}

#[test]
fn test_end_to_end() {
    let raw = json!([
        {
            "purchase_id": "id1",
            "items": [{ "product_name": "Product A", "quantity": 2, "price": 50 }]
        },
        {
            "purchase_id": "id2",
            "items": [{ "product_name": "Product B", "quantity": 1, "price": 100 }]
        }
    ]);

    let records = parse_records(&raw).unwrap();
    let summary = aggregate(&records).unwrap().summarize();

    assert_eq!(
        summary,
        SummaryResult {
            total_spend: Decimal::from(200),
            average_purchase_value: Decimal::from(100),
            maximum_purchase_value: Decimal::from(100),
            median_purchase_value: Decimal::from(100),
            unique_product_count: 2,
        }
    );
}

#[test]
fn test_empty_input_is_all_zero() {
    let records = parse_records(&json!([])).unwrap();
    let summary = aggregate(&records).unwrap().summarize();
    assert_eq!(summary, SummaryResult::default());
}

#[test]
fn test_missing_quantity_contributes_zero() {
    let raw = json!([
        {
            "purchase_id": "id1",
            "items": [
                { "product_name": "Product A", "price": 50 },
                { "product_name": "Product B", "quantity": 1, "price": 20 }
            ]
        }
    ]);

    let records = parse_records(&raw).unwrap();
    let aggregation = aggregate(&records).unwrap();

    assert_eq!(aggregation.total_spend, Decimal::from(20));
    assert_eq!(aggregation.products.len(), 2);
    assert_eq!(aggregation.defaulted_fields, 1);
}

#[test]
fn test_duplicate_ids_count_in_total_but_not_in_totals() {
    let records = vec![
        PurchaseRecord::new("id1", vec![LineItem::new("A", 1, Decimal::from(100))]),
        PurchaseRecord::new("id2", vec![LineItem::new("B", 1, Decimal::from(50))]),
        PurchaseRecord::new("id1", vec![LineItem::new("C", 2, Decimal::from(30))]),
    ];

    let aggregation = aggregate(&records).unwrap();
    let summed: Decimal = aggregation.totals.values().copied().sum();
    let summary = aggregation.summarize();

    assert_eq!(aggregation.total_spend, Decimal::from(210));
    assert_eq!(summed, Decimal::from(150));
    assert_ne!(summed, aggregation.total_spend);

    // Average divides total spend by the distinct purchases
    assert_eq!(summary.average_purchase_value, Decimal::from(105));
    assert_eq!(summary.maximum_purchase_value, Decimal::from(100));
    assert_eq!(summary.median_purchase_value, Decimal::from(75));
    assert_eq!(summary.unique_product_count, 3);
}

#[test]
fn test_unique_ids_sum_to_total_spend() {
    let records = vec![
        PurchaseRecord::new("id1", vec![LineItem::new("A", 3, Decimal::new(1999, 2))]),
        PurchaseRecord::new("id2", vec![LineItem::new("A", 1, Decimal::new(5, 1))]),
    ];

    let aggregation = aggregate(&records).unwrap();
    let summed: Decimal = aggregation.totals.values().copied().sum();

    assert_eq!(summed, aggregation.total_spend);
    assert_eq!(aggregation.total_spend, Decimal::new(6047, 2));
}

#[test]
fn test_policies_only_change_per_purchase_totals() {
    let records = vec![
        PurchaseRecord::new("id1", vec![LineItem::new("A", 1, Decimal::from(100))]),
        PurchaseRecord::new("id1", vec![LineItem::new("B", 1, Decimal::from(40))]),
    ];

    for policy in [DedupPolicy::FirstWins, DedupPolicy::LastWins, DedupPolicy::SumMerge] {
        let aggregation = aggregate_with_policy(&records, policy).unwrap();
        assert_eq!(aggregation.total_spend, Decimal::from(140));
        assert_eq!(aggregation.products.len(), 2);
        assert_eq!(aggregation.totals.len(), 1);
    }
}

#[test]
fn test_max_is_at_least_median() {
    let samples: [&[i64]; 4] = [
        &[5],
        &[1, 2],
        &[10, 1, 7, 3, 3],
        &[0, 0, 1000, 999, 998, 1],
    ];

    for values in samples {
        let t = totals(values);
        let summary = summarize(&t, t.values().copied().sum(), 0);
        assert!(summary.maximum_purchase_value >= summary.median_purchase_value);
    }
}

#[test]
fn test_summarize_is_idempotent() {
    let t = totals(&[300, 100, 200, 400]);
    let first = summarize(&t, Decimal::from(1000), 4);
    let second = summarize(&t, Decimal::from(1000), 4);
    assert_eq!(first, second);
}
